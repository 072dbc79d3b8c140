// src/handlers/users.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{
        i18n::Locale,
        rbac::{RequireRole, UserAdmin},
    },
    models::{
        auth::{CreateUserPayload, User},
        avatar::{AvatarPack, SelectAvatarPayload, UploadAvatarPayload},
    },
    services::{avatar_service, navigation_service::SessionContext},
};

#[utoipa::path(
    get,
    path = "/api/avatars",
    tag = "Users",
    responses(
        (status = 200, description = "Pacotes de avatar disponíveis", body = Vec<AvatarPack>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_avatars() -> Json<Vec<AvatarPack>> {
    Json(avatar_service::avatar_packs())
}

#[utoipa::path(
    put,
    path = "/api/profile/avatar",
    tag = "Users",
    request_body = SelectAvatarPayload,
    responses(
        (status = 200, description = "Avatar do pacote selecionado", body = User),
        (status = 400, description = "Avatar desconhecido")
    ),
    security(("api_jwt" = []))
)]
pub async fn select_avatar(
    State(app_state): State<AppState>,
    locale: Locale,
    ctx: SessionContext,
    Json(payload): Json<SelectAvatarPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n))?;

    let user = app_state
        .user_service
        .select_avatar(&ctx, &payload.avatar_id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/profile/avatar/upload",
    tag = "Users",
    request_body = UploadAvatarPayload,
    responses(
        (status = 200, description = "Imagem própria gravada", body = User),
        (status = 400, description = "Tipo não suportado ou arquivo grande demais")
    ),
    security(("api_jwt" = []))
)]
pub async fn upload_avatar(
    State(app_state): State<AppState>,
    locale: Locale,
    ctx: SessionContext,
    Json(payload): Json<UploadAvatarPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n))?;

    let user = app_state
        .user_service
        .upload_avatar(&ctx, &payload.content_type, &payload.data_base64)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "Usuário criado", body = User),
        (status = 400, description = "Dados inválidos ou código OO ausente"),
        (status = 409, description = "E-mail já cadastrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    locale: Locale,
    _gate: RequireRole<UserAdmin>,
    ctx: SessionContext,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse, ApiError> {
    // Espaços são removidos e o payload validado dentro do serviço
    let user = app_state
        .user_service
        .create_user(&ctx, payload, Utc::now())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok((StatusCode::CREATED, Json(user)))
}
