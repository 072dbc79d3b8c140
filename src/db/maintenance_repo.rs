// src/db/maintenance_repo.rs

use chrono::{DateTime, Utc};

use crate::{
    common::error::AppError,
    db::{collections::MAINTENANCE_TICKETS, SharedStore},
    models::maintenance::{MaintenanceTicket, TicketStatus},
};

#[derive(Clone)]
pub struct MaintenanceRepository {
    store: SharedStore,
}

impl MaintenanceRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<MaintenanceTicket>, AppError> {
        MAINTENANCE_TICKETS.load(self.store.as_ref()).await
    }

    pub async fn create(&self, ticket: MaintenanceTicket) -> Result<MaintenanceTicket, AppError> {
        MAINTENANCE_TICKETS
            .update(self.store.as_ref(), |tickets| {
                tickets.push(ticket.clone());
                Ok(ticket)
            })
            .await
    }

    /// Muda o status e registra qual desenvolvedor assumiu o chamado.
    pub async fn update_status(
        &self,
        id: &str,
        status: TicketStatus,
        developer_user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<MaintenanceTicket, AppError> {
        MAINTENANCE_TICKETS
            .update(self.store.as_ref(), |tickets| {
                let ticket = tickets
                    .iter_mut()
                    .find(|t| t.id == id)
                    .ok_or(AppError::TicketNotFound)?;
                ticket.status = status;
                ticket.developer_user_id = Some(developer_user_id.to_string());
                ticket.updated_at = now;
                Ok(ticket.clone())
            })
            .await
    }
}
