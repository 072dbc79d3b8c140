// src/services/seed_service.rs

use chrono::{DateTime, Duration, Utc};

use crate::{
    common::error::AppError,
    db::{collections::*, KvStore},
    models::{
        auth::{AvatarSource, RoleName, User},
        badge::Badge,
        maintenance::{MaintenanceTicket, TicketStatus},
        schedule::{Schedule, ShiftType},
        tenancy::{OoCode, OoCodeStatus, OoCodeType, Tenant, TenantType},
        training::{Assignment, AssignmentStatus, Training},
    },
    services::{auth::DEVELOPER_CODE, avatar_service},
};

const DEMO_TENANT: &str = "test_tenant_1";
const DEV_TENANT: &str = "dev_tenant_1";
const DEMO_CODE: &str = "TEST123";

/// Popula um armazenamento vazio com os dados de demonstração.
/// Não faz nada se já houver tenants e usuários. Devolve `true` quando gravou.
pub async fn ensure_seed_data(store: &dyn KvStore, now: DateTime<Utc>) -> Result<bool, AppError> {
    let tenants = TENANTS.load(store).await?;
    let users = USERS.load(store).await?;

    if !tenants.is_empty() && !users.is_empty() {
        tracing::debug!("Dados de demonstração já existem, nada a fazer");
        return Ok(false);
    }

    TENANTS.save(store, &demo_tenants(now)).await?;
    OO_CODES.save(store, &demo_codes(now)).await?;
    USERS.save(store, &demo_users(now)).await?;
    TRAININGS.save(store, &demo_trainings(now)).await?;
    BADGES.save(store, &[demo_badge()]).await?;
    ASSIGNMENTS.save(store, &[demo_assignment(now)]).await?;
    SCHEDULES.save(store, &[demo_schedule(now)]).await?;
    MAINTENANCE_TICKETS.save(store, &[demo_ticket(now)]).await?;

    tracing::info!("🌱 Dados de demonstração criados");
    Ok(true)
}

fn demo_tenants(now: DateTime<Utc>) -> Vec<Tenant> {
    vec![
        Tenant {
            id: DEV_TENANT.to_string(),
            name: "Developer Console".to_string(),
            tenant_type: TenantType::DeveloperTenant,
            primary_owner_id: None,
            created_at: now,
        },
        Tenant {
            id: DEMO_TENANT.to_string(),
            name: "Demo Restaurant".to_string(),
            tenant_type: TenantType::OwnerTenant,
            primary_owner_id: None,
            created_at: now,
        },
    ]
}

fn demo_codes(now: DateTime<Utc>) -> Vec<OoCode> {
    vec![
        OoCode {
            code: DEVELOPER_CODE.to_string(),
            code_type: OoCodeType::Developer,
            tenant_id: DEV_TENANT.to_string(),
            owner_user_id: None,
            created_at: now,
            status: OoCodeStatus::Active,
        },
        OoCode {
            code: DEMO_CODE.to_string(),
            code_type: OoCodeType::Owner,
            tenant_id: DEMO_TENANT.to_string(),
            owner_user_id: None,
            created_at: now,
            status: OoCodeStatus::Active,
        },
    ]
}

fn demo_user(id: &str, email: &str, name: &str, role: RoleName, now: DateTime<Utc>) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        display_name: name.to_string(),
        role,
        oo_code: DEMO_CODE.to_string(),
        tenant_id: DEMO_TENANT.to_string(),
        district_id: None,
        store_id: None,
        active: true,
        created_at: now,
        avatar_id: Some(avatar_service::deterministic_avatar(id).id),
        avatar_url: None,
        avatar_source: Some(AvatarSource::DefaultPack),
        featured_badge_id: None,
    }
}

fn demo_users(now: DateTime<Utc>) -> Vec<User> {
    vec![
        demo_user("test_user_1", "testuser@chickentrainer.com", "Alex Johnson", RoleName::TeamMember, now),
        demo_user("test_manager_1", "manager@chickentrainer.com", "Sarah Williams", RoleName::GeneralManager, now),
    ]
}

fn demo_trainings(now: DateTime<Utc>) -> Vec<Training> {
    let training = |id: &str, title: &str, description: &str, tags: &[&str], targets: Vec<RoleName>, minutes| Training {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        pdf_file_id: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        role_targets: targets,
        estimated_time_minutes: minutes,
        version: "1.0".to_string(),
        effective_date: now,
        created_by: "test_manager_1".to_string(),
        tenant_id: DEMO_TENANT.to_string(),
        created_at: now,
    };

    vec![
        training(
            "training_1",
            "Food Safety Fundamentals",
            "Learn the essential food safety protocols and best practices for handling food in a restaurant environment.",
            &["safety", "fundamentals", "required"],
            vec![RoleName::TeamMember, RoleName::TeamLead, RoleName::Trainee],
            45,
        ),
        training(
            "training_2",
            "Customer Service Excellence",
            "Master the art of providing exceptional customer service that creates memorable dining experiences.",
            &["customer-service", "required"],
            vec![RoleName::TeamMember, RoleName::TeamLead],
            30,
        ),
    ]
}

fn demo_badge() -> Badge {
    Badge {
        id: "badge_1".to_string(),
        name: "Food Safety Certified".to_string(),
        description: "Successfully completed food safety training and demonstrated understanding of safe food handling practices.".to_string(),
        criteria_text: "Complete Food Safety Fundamentals training".to_string(),
        expires: false,
        tenant_id: DEMO_TENANT.to_string(),
    }
}

fn demo_assignment(now: DateTime<Utc>) -> Assignment {
    Assignment {
        id: "assignment_1".to_string(),
        training_id: "training_1".to_string(),
        user_id: "test_user_1".to_string(),
        assigned_by: "test_manager_1".to_string(),
        assigned_at: now - Duration::days(2),
        due_date: Some(now + Duration::days(5)),
        expected_completion_date: None,
        status: AssignmentStatus::Assigned,
        completed_at: None,
        completed_by: None,
        tenant_id: DEMO_TENANT.to_string(),
    }
}

fn demo_schedule(now: DateTime<Utc>) -> Schedule {
    let start = now + Duration::days(1);
    Schedule {
        id: "schedule_1".to_string(),
        user_id: "test_user_1".to_string(),
        store_id: "store_1".to_string(),
        role_at_shift: RoleName::TeamMember.label().to_string(),
        shift_start: start,
        shift_end: start + Duration::hours(8),
        shift_type: ShiftType::InStore,
        off_campus_location: None,
        tenant_id: DEMO_TENANT.to_string(),
    }
}

fn demo_ticket(now: DateTime<Utc>) -> MaintenanceTicket {
    let created = now - Duration::days(1);
    MaintenanceTicket {
        id: "ticket_1".to_string(),
        tenant_id: DEMO_TENANT.to_string(),
        requested_by_user_id: "test_manager_1".to_string(),
        developer_user_id: None,
        reason_text: "Need to bulk update training assignments for Q1 compliance rollout.".to_string(),
        status: TicketStatus::Open,
        created_at: created,
        updated_at: created,
    }
}
