// src/models/maintenance.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn is_outstanding(&self) -> bool {
        matches!(self, TicketStatus::Open | TicketStatus::InProgress)
    }
}

// Pedido de manutenção aberto por um dono/gerente para o time dev
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTicket {
    #[schema(example = "ticket_1")]
    pub id: String,

    pub tenant_id: String,
    pub requested_by_user_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_user_id: Option<String>,

    pub reason_text: String,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketPayload {
    #[validate(length(min = 1, message = "O motivo é obrigatório."))]
    #[schema(example = "Need to bulk update training assignments for Q1 compliance rollout.")]
    pub reason_text: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicketStatusPayload {
    pub status: TicketStatus,
}
