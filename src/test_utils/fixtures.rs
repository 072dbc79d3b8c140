// src/test_utils/fixtures.rs

use chrono::{DateTime, Duration, Utc};

use crate::models::{
    auth::{RoleName, User},
    badge::{Badge, BadgeAward},
    maintenance::{MaintenanceTicket, TicketStatus},
    schedule::{AttendanceRecord, AttendanceStatus, Schedule, ShiftType},
    settings::{DeviceAccessLog, DeviceType},
    tenancy::{OoCode, OoCodeStatus, OoCodeType, Tenant, TenantType},
    training::{Assignment, AssignmentStatus, Training},
};

pub fn tenant(id: &str) -> Tenant {
    Tenant {
        id: id.to_string(),
        name: format!("Tenant {}", id),
        tenant_type: TenantType::OwnerTenant,
        primary_owner_id: None,
        created_at: Utc::now(),
    }
}

pub fn owner_code(code: &str, tenant_id: &str) -> OoCode {
    OoCode {
        code: code.to_string(),
        code_type: OoCodeType::Owner,
        tenant_id: tenant_id.to_string(),
        owner_user_id: None,
        created_at: Utc::now(),
        status: OoCodeStatus::Active,
    }
}

pub fn inactive_code(code: &str, tenant_id: &str) -> OoCode {
    OoCode { status: OoCodeStatus::Inactive, ..owner_code(code, tenant_id) }
}

pub fn user(id: &str, email: &str, tenant_id: &str) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        display_name: "Jordan Lee".to_string(),
        role: RoleName::TeamMember,
        oo_code: "TEST123".to_string(),
        tenant_id: tenant_id.to_string(),
        district_id: None,
        store_id: None,
        active: true,
        created_at: Utc::now(),
        avatar_id: None,
        avatar_url: None,
        avatar_source: None,
        featured_badge_id: None,
    }
}

pub fn user_with_role(id: &str, role: RoleName, tenant_id: &str) -> User {
    User { role, ..user(id, &format!("{}@example.com", id), tenant_id) }
}

pub fn training(id: &str, tenant_id: &str) -> Training {
    let now = Utc::now();
    Training {
        id: id.to_string(),
        title: format!("Training {}", id),
        description: "Module description".to_string(),
        pdf_file_id: None,
        tags: Vec::new(),
        role_targets: vec![RoleName::TeamMember],
        estimated_time_minutes: 20,
        version: "1.0".to_string(),
        effective_date: now,
        created_by: "test_manager_1".to_string(),
        tenant_id: tenant_id.to_string(),
        created_at: now,
    }
}

/// Atribuição aberta com prazo de 5 dias a partir de `assigned_at`.
pub fn assignment(id: &str, user_id: &str, training_id: &str, assigned_at: DateTime<Utc>) -> Assignment {
    Assignment {
        id: id.to_string(),
        training_id: training_id.to_string(),
        user_id: user_id.to_string(),
        assigned_by: "test_manager_1".to_string(),
        assigned_at,
        due_date: Some(assigned_at + Duration::days(5)),
        expected_completion_date: None,
        status: AssignmentStatus::Assigned,
        completed_at: None,
        completed_by: None,
        tenant_id: "t1".to_string(),
    }
}

/// Turno de 8h na loja.
pub fn schedule(id: &str, user_id: &str, start: DateTime<Utc>) -> Schedule {
    Schedule {
        id: id.to_string(),
        user_id: user_id.to_string(),
        store_id: "store_1".to_string(),
        role_at_shift: "Team Member".to_string(),
        shift_start: start,
        shift_end: start + Duration::hours(8),
        shift_type: ShiftType::InStore,
        off_campus_location: None,
        tenant_id: "t1".to_string(),
    }
}

pub fn badge(id: &str, tenant_id: &str) -> Badge {
    Badge {
        id: id.to_string(),
        name: format!("Badge {}", id),
        description: "Badge description".to_string(),
        criteria_text: "Complete the module".to_string(),
        expires: false,
        tenant_id: tenant_id.to_string(),
    }
}

pub fn award(id: &str, badge_id: &str, user_id: &str, awarded_at: DateTime<Utc>) -> BadgeAward {
    BadgeAward {
        id: id.to_string(),
        badge_id: badge_id.to_string(),
        user_id: user_id.to_string(),
        awarded_by: "test_manager_1".to_string(),
        awarded_at,
        related_assignment_id: None,
        tenant_id: "t1".to_string(),
    }
}

pub fn call_out(id: &str, user_id: &str, marked_at: DateTime<Utc>) -> AttendanceRecord {
    AttendanceRecord {
        id: id.to_string(),
        user_id: user_id.to_string(),
        schedule_id: "schedule_1".to_string(),
        status: AttendanceStatus::CallOut,
        reason_code: None,
        reason_text: None,
        marked_by: "test_manager_1".to_string(),
        marked_at,
        tenant_id: "t1".to_string(),
    }
}

pub fn device_log(id: &str, user_id: &str, tenant_id: &str, timestamp: DateTime<Utc>) -> DeviceAccessLog {
    DeviceAccessLog {
        id: id.to_string(),
        user_id: user_id.to_string(),
        tenant_id: tenant_id.to_string(),
        device: DeviceType::Desktop,
        user_agent: None,
        timestamp,
    }
}

pub fn ticket(id: &str, tenant_id: &str, requested_by: &str, created_at: DateTime<Utc>) -> MaintenanceTicket {
    MaintenanceTicket {
        id: id.to_string(),
        tenant_id: tenant_id.to_string(),
        requested_by_user_id: requested_by.to_string(),
        developer_user_id: None,
        reason_text: "Please help".to_string(),
        status: TicketStatus::Open,
        created_at,
        updated_at: created_at,
    }
}
