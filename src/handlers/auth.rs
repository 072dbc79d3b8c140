// src/handlers/auth.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::{headers::UserAgent, typed_header::TypedHeaderRejection, TypedHeader};
use chrono::Utc;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::auth::{AuthOutcome, OoCodePayload, SsoProfile},
    services::auth::mock_sso,
};

type MaybeUserAgent = Result<TypedHeader<UserAgent>, TypedHeaderRejection>;

fn user_agent_of(header: &MaybeUserAgent) -> Option<&str> {
    header.as_ref().ok().map(|TypedHeader(ua)| ua.as_str())
}

#[utoipa::path(
    get,
    path = "/api/auth/sso/mock",
    tag = "Auth",
    responses(
        (status = 200, description = "Perfil devolvido pelo SSO simulado", body = SsoProfile)
    )
)]
pub async fn mock_sso_profile() -> Json<SsoProfile> {
    Json(mock_sso())
}

#[utoipa::path(
    post,
    path = "/api/auth/sso",
    tag = "Auth",
    request_body = SsoProfile,
    responses(
        (status = 200, description = "Autenticado, ou pedido de código OO", body = AuthOutcome),
        (status = 400, description = "Perfil incompleto")
    )
)]
pub async fn sso_sign_in(
    State(app_state): State<AppState>,
    locale: Locale,
    user_agent: MaybeUserAgent,
    Json(profile): Json<SsoProfile>,
) -> Result<impl IntoResponse, ApiError> {
    profile
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n))?;

    let outcome = app_state
        .auth_service
        .sign_in_with_sso(&profile, user_agent_of(&user_agent), Utc::now())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok((StatusCode::OK, Json(outcome)))
}

#[utoipa::path(
    post,
    path = "/api/auth/oo-code",
    tag = "Auth",
    request_body = OoCodePayload,
    responses(
        (status = 200, description = "Autenticado, ou código aceito sem conta no tenant", body = AuthOutcome),
        (status = 400, description = "Código OO inválido ou inativo")
    )
)]
pub async fn oo_code_sign_in(
    State(app_state): State<AppState>,
    locale: Locale,
    user_agent: MaybeUserAgent,
    Json(payload): Json<OoCodePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n))?;

    let outcome = app_state
        .auth_service
        .sign_in_with_code(&payload.profile, &payload.code, user_agent_of(&user_agent), Utc::now())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok((StatusCode::OK, Json(outcome)))
}

#[utoipa::path(
    post,
    path = "/api/auth/developer",
    tag = "Auth",
    request_body = SsoProfile,
    responses(
        (status = 200, description = "Desenvolvedor autenticado", body = AuthOutcome),
        (status = 403, description = "E-mail fora da lista de desenvolvedores"),
        (status = 503, description = "Código de desenvolvedor não configurado")
    )
)]
pub async fn developer_sign_in(
    State(app_state): State<AppState>,
    locale: Locale,
    user_agent: MaybeUserAgent,
    Json(profile): Json<SsoProfile>,
) -> Result<impl IntoResponse, ApiError> {
    profile
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n))?;

    let outcome = app_state
        .auth_service
        .developer_sign_in(&profile, user_agent_of(&user_agent), Utc::now())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok((StatusCode::OK, Json(outcome)))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Auth",
    responses(
        (status = 204, description = "Sessão encerrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn logout(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .navigation_service
        .sign_out(&user.id, Utc::now())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok(StatusCode::NO_CONTENT)
}
