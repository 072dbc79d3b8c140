// src/models/dashboard.rs

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{
    auth::{RoleName, User},
    badge::{Badge, BadgeAward},
    maintenance::MaintenanceTicket,
    schedule::Schedule,
    settings::DeviceAccessCounts,
    tenancy::Tenant,
    training::{Assignment, Training},
};

// 1. Card de treinamento (atribuição + módulo, se existir)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentCard {
    pub assignment: Assignment,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub estimated_time_minutes: Option<u32>,
    pub is_overdue: bool,
}

// 2. Tela inicial (o "crachá")
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeDashboard {
    pub user: User,
    pub first_name: String,
    pub avatar_url: Option<String>,
    pub today_goal_progress: u32,
    pub next_shift: Option<Schedule>,
    pub next_shift_label: Option<String>,
    pub open_trainings: usize,
    pub earned_badges: usize,
    pub overdue_count: usize,
    pub upcoming_assignments: Vec<AssignmentCard>,
}

// 3. Treinamentos
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrainingOverview {
    pub active: Vec<AssignmentCard>,
    pub overdue: Vec<AssignmentCard>,
    pub completed: Vec<AssignmentCard>,
    pub completion_rate: u32,
}

// 4. Escala
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShiftEntry {
    pub schedule: Schedule,
    pub type_label: String,
    pub duration_hours: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShiftDay {
    #[schema(example = "Saturday, October 17, 2026")]
    pub date_label: String,
    pub shifts: Vec<ShiftEntry>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOverview {
    pub upcoming_count: usize,
    pub days: Vec<ShiftDay>,
}

// 5. Biblioteca
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LibraryResults {
    pub query: Option<String>,
    pub total: usize,
    pub trainings: Vec<Training>,
}

// 6. Perfil
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBadge {
    pub award: BadgeAward,
    pub badge: Badge,
    pub earned_label: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub user: User,
    pub avatar_url: Option<String>,
    pub tenant_name: Option<String>,
    pub status_label: String,
    #[schema(example = "October 2026")]
    pub member_since: String,
    pub badges: Vec<ProfileBadge>,
}

// 7. Painel do dono / gerente distrital
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleCount {
    pub role: RoleName,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDashboard {
    #[schema(example = "Owner Dashboard")]
    pub title: String,
    pub tenant: Tenant,
    pub total_users: usize,
    pub active_training: usize,
    pub completed_this_month: usize,
    pub call_outs_last_7_days: usize,
    pub completion_rate: u32,
    pub role_breakdown: Vec<RoleCount>,
    pub device_access: DeviceAccessCounts,
}

// 8. Console do desenvolvedor
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    pub ticket: MaintenanceTicket,
    pub tenant_name: String,
    pub requested_by_name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImpersonationCandidate {
    pub user: User,
    pub tenant_name: Option<String>,
    pub avatar_url: Option<String>,
    pub initials: String,
    pub is_impersonated: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperConsole {
    pub developer_id: String,
    pub total_users: usize,
    pub tenant_count: usize,
    pub tenants: Vec<Tenant>,
    pub selected_tenant_id: Option<String>,
    pub open_tickets: Vec<TicketSummary>,
    pub users: Vec<ImpersonationCandidate>,
    pub device_access: DeviceAccessCounts,
    pub impersonated_user_id: Option<String>,
}
