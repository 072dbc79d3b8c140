// src/handlers/settings.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::settings::{
        AppearanceSettings, NotificationSettings, UpdateAppearanceSettings,
        UpdateNotificationSettings,
    },
};

// As preferências são de quem está logado, mesmo durante a personificação

// GET /api/settings/notifications
#[utoipa::path(
    get,
    path = "/api/settings/notifications",
    tag = "Settings",
    responses(
        (status = 200, description = "Preferências de notificação", body = NotificationSettings)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_notifications(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let settings = app_state
        .settings_repo
        .get_notifications(&user.id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n))?;

    Ok((StatusCode::OK, Json(settings)))
}

// PUT /api/settings/notifications
#[utoipa::path(
    put,
    path = "/api/settings/notifications",
    tag = "Settings",
    request_body = UpdateNotificationSettings,
    responses(
        (status = 200, description = "Preferências atualizadas", body = NotificationSettings)
    ),
    security(("api_jwt" = []))
)]
pub async fn update_notifications(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<UpdateNotificationSettings>,
) -> Result<impl IntoResponse, ApiError> {
    let updated = app_state
        .settings_repo
        .update_notifications(&user.id, payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n))?;

    Ok((StatusCode::OK, Json(updated)))
}

// GET /api/settings/appearance
#[utoipa::path(
    get,
    path = "/api/settings/appearance",
    tag = "Settings",
    responses(
        (status = 200, description = "Tema escolhido", body = AppearanceSettings)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_appearance(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let settings = app_state
        .settings_repo
        .get_appearance(&user.id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n))?;

    Ok((StatusCode::OK, Json(settings)))
}

// PUT /api/settings/appearance
#[utoipa::path(
    put,
    path = "/api/settings/appearance",
    tag = "Settings",
    request_body = UpdateAppearanceSettings,
    responses(
        (status = 200, description = "Tema atualizado", body = AppearanceSettings)
    ),
    security(("api_jwt" = []))
)]
pub async fn update_appearance(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<UpdateAppearanceSettings>,
) -> Result<impl IntoResponse, ApiError> {
    let updated = app_state
        .settings_repo
        .set_theme(&user.id, payload.theme)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n))?;

    Ok((StatusCode::OK, Json(updated)))
}
