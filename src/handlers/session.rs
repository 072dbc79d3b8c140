// src/handlers/session.rs

use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;

use crate::{
    config::AppState,
    common::error::ApiError,
    middleware::i18n::Locale,
    models::session::{ChangeViewPayload, ImpersonatePayload, NavigationState},
    services::navigation_service::SessionContext,
};

#[utoipa::path(
    get,
    path = "/api/session",
    tag = "Session",
    responses(
        (status = 200, description = "Estado de navegação da sessão", body = NavigationState),
        (status = 401, description = "Token inválido ou sessão encerrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_session(
    State(app_state): State<AppState>,
    locale: Locale,
    ctx: SessionContext,
) -> Result<impl IntoResponse, ApiError> {
    let state = app_state
        .navigation_service
        .navigation_state(&ctx.actor.id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok(Json(state))
}

#[utoipa::path(
    put,
    path = "/api/session/view",
    tag = "Session",
    request_body = ChangeViewPayload,
    responses(
        (status = 200, description = "Tela alterada", body = NavigationState),
        (status = 403, description = "Tela indisponível para este usuário")
    ),
    security(("api_jwt" = []))
)]
pub async fn change_view(
    State(app_state): State<AppState>,
    locale: Locale,
    ctx: SessionContext,
    Json(payload): Json<ChangeViewPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let state = app_state
        .navigation_service
        .change_view(&ctx, payload.view, Utc::now())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok(Json(state))
}

#[utoipa::path(
    post,
    path = "/api/session/impersonate",
    tag = "Session",
    request_body = ImpersonatePayload,
    responses(
        (status = 200, description = "Visualizando como outro usuário", body = NavigationState),
        (status = 403, description = "Apenas desenvolvedores"),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn impersonate(
    State(app_state): State<AppState>,
    locale: Locale,
    ctx: SessionContext,
    Json(payload): Json<ImpersonatePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let state = app_state
        .navigation_service
        .impersonate(&ctx, &payload.user_id, Utc::now())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok(Json(state))
}

#[utoipa::path(
    delete,
    path = "/api/session/impersonate",
    tag = "Session",
    responses(
        (status = 200, description = "De volta ao próprio usuário", body = NavigationState)
    ),
    security(("api_jwt" = []))
)]
pub async fn stop_impersonating(
    State(app_state): State<AppState>,
    locale: Locale,
    ctx: SessionContext,
) -> Result<impl IntoResponse, ApiError> {
    let state = app_state
        .navigation_service
        .stop_impersonating(&ctx, Utc::now())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok(Json(state))
}

#[utoipa::path(
    post,
    path = "/api/session/onboarding",
    tag = "Session",
    responses(
        (status = 200, description = "Tutorial concluído", body = NavigationState)
    ),
    security(("api_jwt" = []))
)]
pub async fn complete_onboarding(
    State(app_state): State<AppState>,
    locale: Locale,
    ctx: SessionContext,
) -> Result<impl IntoResponse, ApiError> {
    let state = app_state
        .navigation_service
        .complete_onboarding(&ctx, Utc::now())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok(Json(state))
}
