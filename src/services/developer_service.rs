// src/services/developer_service.rs

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{DeviceLogRepository, MaintenanceRepository, TenantRepository, UserRepository},
    models::{
        auth::User,
        dashboard::{DeveloperConsole, ImpersonationCandidate, TicketSummary},
        maintenance::{MaintenanceTicket, TicketStatus},
        settings::DeviceAccessCounts,
        tenancy::Tenant,
    },
    services::{avatar_service, navigation_service::SessionContext},
};

const UNKNOWN: &str = "Unknown";

fn tenant_name(tenants: &[Tenant], id: &str) -> Option<String> {
    tenants.iter().find(|t| t.id == id).map(|t| t.name.clone())
}

pub fn summarize_ticket(ticket: &MaintenanceTicket, tenants: &[Tenant], users: &[User]) -> TicketSummary {
    TicketSummary {
        ticket: ticket.clone(),
        tenant_name: tenant_name(tenants, &ticket.tenant_id).unwrap_or_else(|| UNKNOWN.to_string()),
        requested_by_name: users
            .iter()
            .find(|u| u.id == ticket.requested_by_user_id)
            .map(|u| u.display_name.clone())
            .unwrap_or_else(|| UNKNOWN.to_string()),
    }
}

/// Lista de quem pode ser personificado. Desenvolvedores ficam de fora.
pub fn impersonation_candidates(
    users: &[User],
    tenants: &[Tenant],
    tenant_filter: Option<&str>,
    impersonated_user_id: Option<&str>,
) -> Vec<ImpersonationCandidate> {
    users
        .iter()
        .filter(|u| !u.role.is_developer())
        .filter(|u| tenant_filter.is_none_or(|tid| u.tenant_id == tid))
        .map(|u| ImpersonationCandidate {
            user: u.clone(),
            tenant_name: tenant_name(tenants, &u.tenant_id),
            avatar_url: avatar_service::user_avatar_url(u),
            initials: u.initials(),
            is_impersonated: impersonated_user_id == Some(u.id.as_str()),
        })
        .collect()
}

#[derive(Clone)]
pub struct DeveloperService {
    user_repo: UserRepository,
    tenant_repo: TenantRepository,
    maintenance_repo: MaintenanceRepository,
    device_repo: DeviceLogRepository,
}

impl DeveloperService {
    pub fn new(
        user_repo: UserRepository,
        tenant_repo: TenantRepository,
        maintenance_repo: MaintenanceRepository,
        device_repo: DeviceLogRepository,
    ) -> Self {
        Self { user_repo, tenant_repo, maintenance_repo, device_repo }
    }

    // ---
    // Console
    // ---
    pub async fn console(
        &self,
        ctx: &SessionContext,
        tenant_filter: Option<&str>,
    ) -> Result<DeveloperConsole, AppError> {
        if !ctx.actor.role.is_developer() {
            return Err(AppError::PermissionDenied("developer"));
        }

        let users = self.user_repo.list_all().await?;
        let tenants = self.tenant_repo.list_tenants().await?;
        let tickets = self.maintenance_repo.list().await?;
        let logs = self.device_repo.list().await?;

        let tenant_filter = tenant_filter.map(str::trim).filter(|t| !t.is_empty());
        let impersonated = ctx.session.impersonated_user_id.as_deref();

        let open_tickets = tickets
            .iter()
            .filter(|t| t.status.is_outstanding())
            .map(|t| summarize_ticket(t, &tenants, &users))
            .collect();

        Ok(DeveloperConsole {
            developer_id: ctx.actor.id.clone(),
            total_users: users.len(),
            tenant_count: tenants.len(),
            users: impersonation_candidates(&users, &tenants, tenant_filter, impersonated),
            tenants,
            selected_tenant_id: tenant_filter.map(str::to_string),
            open_tickets,
            device_access: DeviceAccessCounts::tally(&logs),
            impersonated_user_id: impersonated.map(str::to_string),
        })
    }

    // ---
    // Chamados de manutenção
    // ---
    /// Desenvolvedores veem todos os chamados; os demais, só os do próprio tenant.
    pub async fn list_tickets(&self, ctx: &SessionContext) -> Result<Vec<TicketSummary>, AppError> {
        let tickets = self.maintenance_repo.list().await?;
        let tenants = self.tenant_repo.list_tenants().await?;
        let users = self.user_repo.list_all().await?;

        let mut visible: Vec<&MaintenanceTicket> = tickets
            .iter()
            .filter(|t| ctx.actor.role.is_developer() || t.tenant_id == ctx.actor.tenant_id)
            .collect();
        visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(visible
            .into_iter()
            .map(|t| summarize_ticket(t, &tenants, &users))
            .collect())
    }

    pub async fn create_ticket(
        &self,
        ctx: &SessionContext,
        reason_text: &str,
        now: DateTime<Utc>,
    ) -> Result<MaintenanceTicket, AppError> {
        if !ctx.actor.role.is_manager() {
            return Err(AppError::PermissionDenied("manager"));
        }

        let ticket = MaintenanceTicket {
            id: format!("ticket_{}", Uuid::new_v4().simple()),
            tenant_id: ctx.actor.tenant_id.clone(),
            requested_by_user_id: ctx.actor.id.clone(),
            developer_user_id: None,
            reason_text: reason_text.trim().to_string(),
            status: TicketStatus::Open,
            created_at: now,
            updated_at: now,
        };

        let ticket = self.maintenance_repo.create(ticket).await?;
        tracing::info!(ticket_id = %ticket.id, tenant_id = %ticket.tenant_id, "🔧 Chamado de manutenção aberto");
        Ok(ticket)
    }

    pub async fn update_ticket_status(
        &self,
        ctx: &SessionContext,
        ticket_id: &str,
        status: TicketStatus,
        now: DateTime<Utc>,
    ) -> Result<MaintenanceTicket, AppError> {
        if !ctx.actor.role.is_developer() {
            return Err(AppError::PermissionDenied("developer"));
        }

        let ticket = self
            .maintenance_repo
            .update_status(ticket_id, status, &ctx.actor.id, now)
            .await?;

        tracing::info!(ticket_id = %ticket.id, status = ?ticket.status, "🔧 Status do chamado atualizado");
        Ok(ticket)
    }
}
