// src/handlers/maintenance.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{
        i18n::Locale,
        rbac::{DeveloperOnly, RequireRole, TicketRequester},
    },
    models::{
        dashboard::TicketSummary,
        maintenance::{CreateTicketPayload, MaintenanceTicket, UpdateTicketStatusPayload},
    },
    services::navigation_service::SessionContext,
};

#[utoipa::path(
    get,
    path = "/api/maintenance-tickets",
    tag = "Maintenance",
    responses(
        (status = 200, description = "Chamados visíveis para o usuário", body = Vec<TicketSummary>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_tickets(
    State(app_state): State<AppState>,
    locale: Locale,
    ctx: SessionContext,
) -> Result<impl IntoResponse, ApiError> {
    let tickets = app_state
        .developer_service
        .list_tickets(&ctx)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok(Json(tickets))
}

#[utoipa::path(
    post,
    path = "/api/maintenance-tickets",
    tag = "Maintenance",
    request_body = CreateTicketPayload,
    responses(
        (status = 201, description = "Chamado aberto", body = MaintenanceTicket),
        (status = 403, description = "Apenas Owner, District Manager e General Manager")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_ticket(
    State(app_state): State<AppState>,
    locale: Locale,
    _gate: RequireRole<TicketRequester>,
    ctx: SessionContext,
    Json(payload): Json<CreateTicketPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n))?;

    let ticket = app_state
        .developer_service
        .create_ticket(&ctx, &payload.reason_text, Utc::now())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok((StatusCode::CREATED, Json(ticket)))
}

#[utoipa::path(
    put,
    path = "/api/maintenance-tickets/{id}/status",
    tag = "Maintenance",
    request_body = UpdateTicketStatusPayload,
    params(
        ("id" = String, Path, description = "ID do chamado")
    ),
    responses(
        (status = 200, description = "Status atualizado", body = MaintenanceTicket),
        (status = 404, description = "Chamado não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_ticket_status(
    State(app_state): State<AppState>,
    locale: Locale,
    _gate: RequireRole<DeveloperOnly>,
    ctx: SessionContext,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTicketStatusPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let ticket = app_state
        .developer_service
        .update_ticket_status(&ctx, &id, payload.status, Utc::now())
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n))?;

    Ok(Json(ticket))
}
