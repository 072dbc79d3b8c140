// src/handlers/dashboard.rs

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{
        i18n::Locale,
        rbac::{OwnerAnalytics, RequireRole},
    },
    models::dashboard::{
        HomeDashboard, LibraryResults, OwnerDashboard, ProfileView, ScheduleOverview,
        TrainingOverview,
    },
    services::navigation_service::SessionContext,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct LibraryQuery {
    /// Busca em título, descrição e tags
    pub q: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/dashboard/home",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Tela inicial de quem está sendo visto", body = HomeDashboard)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_home(
    State(app_state): State<AppState>,
    locale: Locale,
    ctx: SessionContext,
) -> Result<impl IntoResponse, ApiError> {
    let home = app_state
        .dashboard_service
        .home(&ctx, Utc::now())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok(Json(home))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/training",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Treinamentos ativos, vencidos e concluídos", body = TrainingOverview)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_training(
    State(app_state): State<AppState>,
    locale: Locale,
    ctx: SessionContext,
) -> Result<impl IntoResponse, ApiError> {
    let overview = app_state
        .dashboard_service
        .training(&ctx, Utc::now())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok(Json(overview))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/schedule",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Próximos turnos agrupados por dia", body = ScheduleOverview)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_schedule(
    State(app_state): State<AppState>,
    locale: Locale,
    ctx: SessionContext,
) -> Result<impl IntoResponse, ApiError> {
    let overview = app_state
        .dashboard_service
        .schedule(&ctx, Utc::now())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok(Json(overview))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/profile",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Perfil e insígnias", body = ProfileView)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_profile(
    State(app_state): State<AppState>,
    locale: Locale,
    ctx: SessionContext,
) -> Result<impl IntoResponse, ApiError> {
    let profile = app_state
        .dashboard_service
        .profile(&ctx)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok(Json(profile))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/owner",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Indicadores do tenant", body = OwnerDashboard),
        (status = 403, description = "Apenas Owner e District Manager")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_owner(
    State(app_state): State<AppState>,
    locale: Locale,
    _gate: RequireRole<OwnerAnalytics>,
    ctx: SessionContext,
) -> Result<impl IntoResponse, ApiError> {
    let dashboard = app_state
        .dashboard_service
        .owner(&ctx, Utc::now())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok(Json(dashboard))
}

#[utoipa::path(
    get,
    path = "/api/library",
    tag = "Dashboard",
    params(LibraryQuery),
    responses(
        (status = 200, description = "Treinamentos do tenant", body = LibraryResults)
    ),
    security(("api_jwt" = []))
)]
pub async fn search_library(
    State(app_state): State<AppState>,
    locale: Locale,
    ctx: SessionContext,
    Query(query): Query<LibraryQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let results = app_state
        .dashboard_service
        .library(&ctx, query.q.as_deref())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok(Json(results))
}
