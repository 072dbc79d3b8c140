// src/handlers/developer.rs

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{
        i18n::Locale,
        rbac::{DeveloperOnly, RequireRole},
    },
    models::dashboard::DeveloperConsole,
    services::navigation_service::SessionContext,
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(rename_all = "camelCase")]
pub struct ConsoleQuery {
    /// Filtra a lista de usuários por tenant
    pub tenant_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/developer/console",
    tag = "Developer",
    params(ConsoleQuery),
    responses(
        (status = 200, description = "Visão global para desenvolvedores", body = DeveloperConsole),
        (status = 403, description = "Apenas desenvolvedores")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_console(
    State(app_state): State<AppState>,
    locale: Locale,
    _gate: RequireRole<DeveloperOnly>,
    ctx: SessionContext,
    Query(query): Query<ConsoleQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let console = app_state
        .developer_service
        .console(&ctx, query.tenant_id.as_deref())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok(Json(console))
}
