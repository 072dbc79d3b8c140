//src/main.rs

use anyhow::Context;
use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

#[cfg(test)]
mod test_utils;

use crate::config::{connect_store, AppState, Config};
use crate::docs::ApiDoc;
use crate::middleware::auth::auth_guard;
use crate::services::seed_service;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    let store = connect_store(&config).await?;

    if config.seed_demo_data {
        let seeded = seed_service::ensure_seed_data(store.as_ref(), Utc::now()).await?;
        if !seeded {
            tracing::info!("Armazenamento já populado, seed ignorado");
        }
    }

    let app = build_router(AppState::new(store, config.jwt_secret.clone()));

    let listener = TcpListener::bind(&config.server_addr)
        .await
        .with_context(|| format!("Falha ao iniciar o listener TCP em {}", config.server_addr))?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("Erro no servidor Axum")?;
    Ok(())
}

pub fn build_router(app_state: AppState) -> Router {
    // Rotas públicas: login e documentação
    let public_routes = Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .route("/api/auth/sso/mock", get(handlers::auth::mock_sso_profile))
        .route("/api/auth/sso", post(handlers::auth::sso_sign_in))
        .route("/api/auth/oo-code", post(handlers::auth::oo_code_sign_in))
        .route("/api/auth/developer", post(handlers::auth::developer_sign_in));

    // Rotas protegidas (token + sessão ativa)
    let protected_routes = Router::new()
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route("/api/session", get(handlers::session::get_session))
        .route("/api/session/view", put(handlers::session::change_view))
        .route(
            "/api/session/impersonate",
            post(handlers::session::impersonate).delete(handlers::session::stop_impersonating),
        )
        .route("/api/session/onboarding", post(handlers::session::complete_onboarding))
        .route("/api/dashboard/home", get(handlers::dashboard::get_home))
        .route("/api/dashboard/training", get(handlers::dashboard::get_training))
        .route("/api/dashboard/schedule", get(handlers::dashboard::get_schedule))
        .route("/api/dashboard/profile", get(handlers::dashboard::get_profile))
        .route("/api/dashboard/owner", get(handlers::dashboard::get_owner))
        .route("/api/library", get(handlers::dashboard::search_library))
        .route("/api/avatars", get(handlers::users::list_avatars))
        .route("/api/profile/avatar", put(handlers::users::select_avatar))
        .route("/api/profile/avatar/upload", post(handlers::users::upload_avatar))
        .route("/api/users", post(handlers::users::create_user))
        .route("/api/developer/console", get(handlers::developer::get_console))
        .route(
            "/api/maintenance-tickets",
            get(handlers::maintenance::list_tickets).post(handlers::maintenance::create_ticket),
        )
        .route(
            "/api/maintenance-tickets/{id}/status",
            put(handlers::maintenance::update_ticket_status),
        )
        .route(
            "/api/settings/notifications",
            get(handlers::settings::get_notifications).put(handlers::settings::update_notifications),
        )
        .route(
            "/api/settings/appearance",
            get(handlers::settings::get_appearance).put(handlers::settings::update_appearance),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(app_state)
}
