// src/services/dashboard_service.rs

use std::collections::HashSet;

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::{
    common::error::AppError,
    db::{
        BadgeRepository, DeviceLogRepository, ScheduleRepository, TenantRepository,
        TrainingRepository, UserRepository,
    },
    models::{
        auth::{RoleName, User},
        badge::{Badge, BadgeAward},
        dashboard::{
            AssignmentCard, HomeDashboard, LibraryResults, OwnerDashboard, ProfileBadge,
            ProfileView, RoleCount, ScheduleOverview, ShiftDay, ShiftEntry, TrainingOverview,
        },
        schedule::{AttendanceRecord, AttendanceStatus, Schedule},
        settings::{DeviceAccessCounts, DeviceAccessLog},
        tenancy::Tenant,
        training::{Assignment, AssignmentStatus, Training},
    },
    services::{avatar_service, navigation_service::SessionContext},
};

const UPCOMING_LIMIT: usize = 3;

// Cargos exibidos no gráfico do painel do dono
const BREAKDOWN_ROLES: [RoleName; 4] = [
    RoleName::TeamMember,
    RoleName::TeamLead,
    RoleName::GeneralManager,
    RoleName::DistrictManager,
];

// =============================================================================
//  1. FILTROS
// =============================================================================

/// Registros que pertencem a um usuário.
pub trait UserScoped {
    fn user_id(&self) -> &str;
}

impl UserScoped for Assignment {
    fn user_id(&self) -> &str {
        &self.user_id
    }
}

impl UserScoped for Schedule {
    fn user_id(&self) -> &str {
        &self.user_id
    }
}

impl UserScoped for BadgeAward {
    fn user_id(&self) -> &str {
        &self.user_id
    }
}

pub fn for_user<T: UserScoped + Clone>(items: &[T], user_id: &str) -> Vec<T> {
    items.iter().filter(|item| item.user_id() == user_id).cloned().collect()
}

/// O turno com o início mais próximo depois de `now`.
pub fn next_shift(schedules: &[Schedule], now: DateTime<Utc>) -> Option<&Schedule> {
    schedules
        .iter()
        .filter(|s| s.shift_start > now)
        .min_by_key(|s| s.shift_start)
}

pub fn next_shift_label(shift: &Schedule, now: DateTime<Utc>) -> String {
    let day = shift.shift_start.date_naive();
    let today = now.date_naive();

    if day == today {
        format!("Today at {}", shift.shift_start.format("%-I:%M %p"))
    } else if today.succ_opt() == Some(day) {
        format!("Tomorrow at {}", shift.shift_start.format("%-I:%M %p"))
    } else {
        shift.shift_start.format("%b %-d, %-I:%M %p").to_string()
    }
}

fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}

pub fn assignment_card(assignment: &Assignment, trainings: &[Training], now: DateTime<Utc>) -> AssignmentCard {
    let training = trainings.iter().find(|t| t.id == assignment.training_id);

    AssignmentCard {
        assignment: assignment.clone(),
        title: training
            .map(|t| t.title.clone())
            .unwrap_or_else(|| "Training Module".to_string()),
        description: training
            .map(|t| t.description.clone())
            .unwrap_or_else(|| "Complete this training module".to_string()),
        tags: training.map(|t| t.tags.clone()).unwrap_or_default(),
        estimated_time_minutes: training.map(|t| t.estimated_time_minutes),
        is_overdue: assignment.is_past_due(now),
    }
}

// =============================================================================
//  2. TELAS
// =============================================================================

/// Tela inicial. `assignments`, `schedules` e `awards` já vêm filtrados pelo usuário.
pub fn build_home(
    user: &User,
    assignments: &[Assignment],
    trainings: &[Training],
    schedules: &[Schedule],
    awards: &[BadgeAward],
    now: DateTime<Utc>,
) -> HomeDashboard {
    let open: Vec<&Assignment> = assignments.iter().filter(|a| !a.is_completed()).collect();
    let completed_today = assignments
        .iter()
        .filter(|a| a.is_completed())
        .filter(|a| a.completed_at.is_some_and(|at| at.date_naive() == now.date_naive()))
        .count();

    let today_goal_progress = if open.is_empty() {
        100
    } else {
        percentage(completed_today, completed_today + open.len())
    };

    let next = next_shift(schedules, now);

    HomeDashboard {
        user: user.clone(),
        first_name: user.first_name().to_string(),
        avatar_url: avatar_service::user_avatar_url(user),
        today_goal_progress,
        next_shift: next.cloned(),
        next_shift_label: next.map(|s| next_shift_label(s, now)),
        open_trainings: open.len(),
        earned_badges: awards.len(),
        overdue_count: open.iter().filter(|a| a.is_past_due(now)).count(),
        upcoming_assignments: open
            .iter()
            .take(UPCOMING_LIMIT)
            .map(|a| assignment_card(a, trainings, now))
            .collect(),
    }
}

pub fn build_training(assignments: &[Assignment], trainings: &[Training], now: DateTime<Utc>) -> TrainingOverview {
    let mut overview = TrainingOverview {
        active: Vec::new(),
        overdue: Vec::new(),
        completed: Vec::new(),
        completion_rate: 0,
    };

    // Vencidos são um subconjunto dos ativos (mesma regra da tela inicial)
    for assignment in assignments {
        let card = assignment_card(assignment, trainings, now);
        if assignment.is_completed() {
            overview.completed.push(card);
            continue;
        }
        if card.is_overdue {
            overview.overdue.push(card.clone());
        }
        overview.active.push(card);
    }

    overview.completion_rate = percentage(overview.completed.len(), assignments.len());
    overview
}

/// Turnos que ainda não terminaram, agrupados por dia.
pub fn build_schedule(schedules: &[Schedule], now: DateTime<Utc>) -> ScheduleOverview {
    let mut upcoming: Vec<&Schedule> = schedules.iter().filter(|s| s.shift_end >= now).collect();
    upcoming.sort_by_key(|s| s.shift_start);

    let mut days: Vec<ShiftDay> = Vec::new();
    for schedule in &upcoming {
        let date_label = schedule.shift_start.format("%A, %B %-d, %Y").to_string();
        let entry = ShiftEntry {
            schedule: (*schedule).clone(),
            type_label: schedule.shift_type.label().to_string(),
            duration_hours: schedule.duration_hours(),
        };

        match days.last_mut() {
            Some(day) if day.date_label == date_label => day.shifts.push(entry),
            _ => days.push(ShiftDay { date_label, shifts: vec![entry] }),
        }
    }

    ScheduleOverview { upcoming_count: upcoming.len(), days }
}

pub fn search_library(trainings: &[Training], query: Option<&str>) -> LibraryResults {
    let query = query.map(str::trim).filter(|q| !q.is_empty());

    let trainings: Vec<Training> = match query {
        Some(q) => trainings.iter().filter(|t| t.matches(q)).cloned().collect(),
        None => trainings.to_vec(),
    };

    LibraryResults {
        query: query.map(str::to_string),
        total: trainings.len(),
        trainings,
    }
}

pub fn build_profile(user: &User, tenant: Option<&Tenant>, awards: &[BadgeAward], badges: &[Badge]) -> ProfileView {
    let mut earned: Vec<ProfileBadge> = awards
        .iter()
        .filter_map(|award| {
            // Insígnia sem definição não aparece
            let badge = badges.iter().find(|b| b.id == award.badge_id)?;
            Some(ProfileBadge {
                award: award.clone(),
                badge: badge.clone(),
                earned_label: award.awarded_at.format("%b %-d, %Y").to_string(),
            })
        })
        .collect();
    earned.sort_by(|a, b| b.award.awarded_at.cmp(&a.award.awarded_at));

    ProfileView {
        user: user.clone(),
        avatar_url: avatar_service::user_avatar_url(user),
        tenant_name: tenant.map(|t| t.name.clone()),
        status_label: if user.active { "Active" } else { "Inactive" }.to_string(),
        member_since: user.created_at.format("%B %Y").to_string(),
        badges: earned,
    }
}

/// Painel analítico do tenant. Recebe as coleções inteiras e filtra pelos usuários do tenant.
pub fn build_owner(
    viewer: &User,
    tenant: &Tenant,
    users: &[User],
    assignments: &[Assignment],
    attendance: &[AttendanceRecord],
    device_logs: &[DeviceAccessLog],
    now: DateTime<Utc>,
) -> OwnerDashboard {
    let members: Vec<&User> = users.iter().filter(|u| u.tenant_id == tenant.id).collect();
    let member_ids: HashSet<&str> = members.iter().map(|u| u.id.as_str()).collect();

    let tenant_assignments: Vec<&Assignment> = assignments
        .iter()
        .filter(|a| member_ids.contains(a.user_id.as_str()))
        .collect();

    let active_training = tenant_assignments
        .iter()
        .filter(|a| matches!(a.status, AssignmentStatus::Assigned | AssignmentStatus::InProgress))
        .count();

    let completed = tenant_assignments.iter().filter(|a| a.is_completed()).count();

    let completed_this_month = tenant_assignments
        .iter()
        .filter(|a| a.is_completed())
        .filter_map(|a| a.completed_at)
        .filter(|at| at.year() == now.year() && at.month() == now.month())
        .count();

    let week_ago = now - Duration::days(7);
    let call_outs_last_7_days = attendance
        .iter()
        .filter(|r| r.status == AttendanceStatus::CallOut)
        .filter(|r| member_ids.contains(r.user_id.as_str()))
        .filter(|r| r.marked_at >= week_ago && r.marked_at <= now)
        .count();

    let role_breakdown = BREAKDOWN_ROLES
        .iter()
        .map(|role| RoleCount {
            role: *role,
            count: members.iter().filter(|u| u.role == *role).count(),
        })
        .filter(|rc| rc.count > 0)
        .collect();

    let title = match viewer.role {
        RoleName::DistrictManager => "District Manager Dashboard",
        _ => "Owner Dashboard",
    };

    OwnerDashboard {
        title: title.to_string(),
        tenant: tenant.clone(),
        total_users: members.len(),
        active_training,
        completed_this_month,
        call_outs_last_7_days,
        completion_rate: percentage(completed, tenant_assignments.len()),
        role_breakdown,
        device_access: DeviceAccessCounts::tally(device_logs.iter().filter(|l| l.tenant_id == tenant.id)),
    }
}

// =============================================================================
//  3. SERVIÇO
// =============================================================================

#[derive(Clone)]
pub struct DashboardService {
    user_repo: UserRepository,
    tenant_repo: TenantRepository,
    training_repo: TrainingRepository,
    badge_repo: BadgeRepository,
    schedule_repo: ScheduleRepository,
    device_repo: DeviceLogRepository,
}

impl DashboardService {
    pub fn new(
        user_repo: UserRepository,
        tenant_repo: TenantRepository,
        training_repo: TrainingRepository,
        badge_repo: BadgeRepository,
        schedule_repo: ScheduleRepository,
        device_repo: DeviceLogRepository,
    ) -> Self {
        Self { user_repo, tenant_repo, training_repo, badge_repo, schedule_repo, device_repo }
    }

    pub async fn home(&self, ctx: &SessionContext, now: DateTime<Utc>) -> Result<HomeDashboard, AppError> {
        let viewer = &ctx.viewer;
        let assignments = for_user(&self.training_repo.list_assignments().await?, &viewer.id);
        let trainings = self.training_repo.list_trainings().await?;
        let schedules = for_user(&self.schedule_repo.list_schedules().await?, &viewer.id);
        let awards = for_user(&self.badge_repo.list_awards().await?, &viewer.id);

        Ok(build_home(viewer, &assignments, &trainings, &schedules, &awards, now))
    }

    pub async fn training(&self, ctx: &SessionContext, now: DateTime<Utc>) -> Result<TrainingOverview, AppError> {
        let assignments = for_user(&self.training_repo.list_assignments().await?, &ctx.viewer.id);
        let trainings = self.training_repo.list_trainings().await?;

        Ok(build_training(&assignments, &trainings, now))
    }

    pub async fn schedule(&self, ctx: &SessionContext, now: DateTime<Utc>) -> Result<ScheduleOverview, AppError> {
        let schedules = for_user(&self.schedule_repo.list_schedules().await?, &ctx.viewer.id);
        Ok(build_schedule(&schedules, now))
    }

    pub async fn library(&self, ctx: &SessionContext, query: Option<&str>) -> Result<LibraryResults, AppError> {
        let trainings = self.training_repo.list_trainings_for_tenant(&ctx.tenant.id).await?;
        Ok(search_library(&trainings, query))
    }

    pub async fn profile(&self, ctx: &SessionContext) -> Result<ProfileView, AppError> {
        let viewer = &ctx.viewer;
        let awards = for_user(&self.badge_repo.list_awards().await?, &viewer.id);
        let badges = self.badge_repo.list_badges().await?;
        let tenant = self.tenant_repo.find_tenant(&viewer.tenant_id).await?;

        Ok(build_profile(viewer, tenant.as_ref(), &awards, &badges))
    }

    pub async fn owner(&self, ctx: &SessionContext, now: DateTime<Utc>) -> Result<OwnerDashboard, AppError> {
        if !ctx.viewer.role.is_owner_level() {
            return Err(AppError::PermissionDenied("owner analytics"));
        }

        let users = self.user_repo.list_by_tenant(&ctx.tenant.id).await?;
        let assignments = self.training_repo.list_assignments().await?;
        let attendance = self.schedule_repo.list_attendance().await?;
        let device_logs = self.device_repo.list().await?;

        Ok(build_owner(&ctx.viewer, &ctx.tenant, &users, &assignments, &attendance, &device_logs, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{schedule::ShiftType, tenancy::TenantType},
        test_utils::{fixtures, TestSetup},
    };
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    mod filters {
        use super::*;

        #[test]
        fn only_records_of_the_user_are_returned() {
            let now = at(2026, 10, 17, 12);
            let assignments = vec![
                fixtures::assignment("a1", "u1", "training_1", now),
                fixtures::assignment("a2", "u2", "training_1", now),
                fixtures::assignment("a3", "u1", "training_2", now),
            ];
            let schedules = vec![
                fixtures::schedule("s1", "u2", now + Duration::hours(2)),
                fixtures::schedule("s2", "u1", now + Duration::hours(3)),
            ];

            let mine = for_user(&assignments, "u1");
            assert_eq!(mine.len(), 2);
            assert!(mine.iter().all(|a| a.user_id == "u1"));

            let shifts = for_user(&schedules, "u1");
            assert_eq!(shifts.len(), 1);
            assert_eq!(shifts[0].id, "s2");

            assert!(for_user(&schedules, "nobody").is_empty());
        }

        #[test]
        fn next_shift_is_the_nearest_future_start() {
            let now = at(2026, 10, 17, 12);
            let schedules = vec![
                fixtures::schedule("past", "u1", now - Duration::hours(30)),
                fixtures::schedule("later", "u1", now + Duration::days(3)),
                fixtures::schedule("soon", "u1", now + Duration::hours(5)),
                fixtures::schedule("now", "u1", now),
            ];

            assert_eq!(next_shift(&schedules, now).map(|s| s.id.as_str()), Some("soon"));
        }

        #[test]
        fn next_shift_is_absent_without_future_starts() {
            let now = at(2026, 10, 17, 12);
            let schedules = vec![fixtures::schedule("past", "u1", now - Duration::hours(2))];

            assert!(next_shift(&schedules, now).is_none());
            assert!(next_shift(&[], now).is_none());
        }

        #[test]
        fn next_shift_labels() {
            let now = at(2026, 10, 17, 6);
            let today = fixtures::schedule("s1", "u1", at(2026, 10, 17, 9));
            let tomorrow = fixtures::schedule("s2", "u1", at(2026, 10, 18, 14));
            let later = fixtures::schedule("s3", "u1", at(2026, 10, 25, 9));

            assert_eq!(next_shift_label(&today, now), "Today at 9:00 AM");
            assert_eq!(next_shift_label(&tomorrow, now), "Tomorrow at 2:00 PM");
            assert_eq!(next_shift_label(&later, now), "Oct 25, 9:00 AM");
        }
    }

    mod views {
        use super::*;

        #[test]
        fn home_goal_and_counts() {
            let now = at(2026, 10, 17, 12);
            let user = fixtures::user("u1", "u1@example.com", "t1");
            let mut done = fixtures::assignment("a1", "u1", "training_1", now - Duration::days(3));
            done.status = AssignmentStatus::Completed;
            done.completed_at = Some(now - Duration::hours(1));
            let mut late = fixtures::assignment("a2", "u1", "training_2", now - Duration::days(9));
            late.due_date = Some(now - Duration::days(1));
            let open = fixtures::assignment("a3", "u1", "missing", now);

            let home = build_home(&user, &[done, late, open], &[fixtures::training("training_2", "t1")], &[], &[], now);

            assert_eq!(home.open_trainings, 2);
            assert_eq!(home.overdue_count, 1);
            assert_eq!(home.today_goal_progress, 33);
            assert_eq!(home.upcoming_assignments.len(), 2);
            assert_eq!(home.upcoming_assignments[1].title, "Training Module");
            assert!(home.next_shift.is_none());
        }

        #[test]
        fn home_goal_is_full_with_nothing_open() {
            let now = at(2026, 10, 17, 12);
            let user = fixtures::user("u1", "u1@example.com", "t1");

            let home = build_home(&user, &[], &[], &[], &[], now);

            assert_eq!(home.today_goal_progress, 100);
            assert_eq!(home.first_name, user.first_name());
        }

        #[test]
        fn training_buckets_and_rate() {
            let now = at(2026, 10, 17, 12);
            let mut done = fixtures::assignment("a1", "u1", "training_1", now);
            done.status = AssignmentStatus::Completed;
            // Status marcado como vencido, mas sem prazo: conta só como ativo
            let mut flagged = fixtures::assignment("a2", "u1", "training_1", now);
            flagged.status = AssignmentStatus::Overdue;
            flagged.due_date = None;
            let mut late = fixtures::assignment("a3", "u1", "training_1", now);
            late.due_date = Some(now - Duration::days(1));
            let active = fixtures::assignment("a4", "u1", "training_1", now);
            let trainings = [fixtures::training("training_1", "t1")];
            let assignments = [done, flagged, late, active];

            let overview = build_training(&assignments, &trainings, now);

            assert_eq!(overview.completed.len(), 1);
            assert_eq!(overview.active.len(), 3);
            assert_eq!(overview.overdue.len(), 1);
            assert_eq!(overview.overdue[0].assignment.id, "a3");
            assert!(overview.active.iter().any(|c| c.assignment.id == "a3"));
            assert_eq!(overview.completion_rate, 25);

            let user = fixtures::user("u1", "u1@example.com", "t1");
            let home = build_home(&user, &assignments, &trainings, &[], &[], now);
            assert_eq!(home.overdue_count, overview.overdue.len());
            assert_eq!(home.open_trainings, overview.active.len());
            assert_eq!(build_training(&[], &trainings, now).completion_rate, 0);
        }

        #[test]
        fn schedule_groups_upcoming_shifts_by_day() {
            let now = at(2026, 10, 17, 12);
            let mut off = fixtures::schedule("s3", "u1", at(2026, 10, 18, 15));
            off.shift_type = ShiftType::OffCampus;
            off.off_campus_location = Some("Catering event".into());
            let schedules = vec![
                off,
                fixtures::schedule("s1", "u1", at(2026, 10, 18, 6)),
                fixtures::schedule("s2", "u1", at(2026, 10, 20, 9)),
                fixtures::schedule("gone", "u1", at(2026, 10, 16, 6)),
            ];

            let overview = build_schedule(&schedules, now);

            assert_eq!(overview.upcoming_count, 3);
            assert_eq!(overview.days.len(), 2);
            assert_eq!(overview.days[0].date_label, "Sunday, October 18, 2026");
            assert_eq!(overview.days[0].shifts[0].schedule.id, "s1");
            assert_eq!(overview.days[0].shifts[1].type_label, "Off Campus");
            assert_eq!(overview.days[0].shifts[0].duration_hours, 8.0);
        }

        #[test]
        fn library_query_is_case_insensitive() {
            let mut safety = fixtures::training("training_1", "t1");
            safety.title = "Food Safety Fundamentals".into();
            safety.tags = vec!["required".into()];
            let mut service = fixtures::training("training_2", "t1");
            service.title = "Customer Service Excellence".into();

            let trainings = [safety, service];

            assert_eq!(search_library(&trainings, Some("SAFETY")).total, 1);
            assert_eq!(search_library(&trainings, Some("required")).total, 1);
            assert_eq!(search_library(&trainings, Some("  ")).total, 2);
            assert_eq!(search_library(&trainings, None).total, 2);
            assert_eq!(search_library(&trainings, Some("pizza")).total, 0);
        }

        #[test]
        fn profile_skips_awards_without_definition() {
            let now = at(2026, 10, 17, 12);
            let user = fixtures::user("u1", "u1@example.com", "t1");
            let tenant = fixtures::tenant("t1");
            let badges = [fixtures::badge("badge_1", "t1")];
            let awards = [
                fixtures::award("aw1", "badge_1", "u1", now),
                fixtures::award("aw2", "ghost", "u1", now),
            ];

            let profile = build_profile(&user, Some(&tenant), &awards, &badges);

            assert_eq!(profile.badges.len(), 1);
            assert_eq!(profile.badges[0].earned_label, "Oct 17, 2026");
            assert_eq!(profile.status_label, "Active");
            assert_eq!(profile.tenant_name.as_deref(), Some(tenant.name.as_str()));
        }

        #[test]
        fn owner_metrics_are_scoped_to_the_tenant() {
            let now = at(2026, 10, 17, 12);
            let tenant = fixtures::tenant("t1");
            let owner = fixtures::user_with_role("boss", RoleName::Owner, "t1");
            let users = vec![
                owner.clone(),
                fixtures::user_with_role("m1", RoleName::TeamMember, "t1"),
                fixtures::user_with_role("m2", RoleName::TeamMember, "t1"),
                fixtures::user_with_role("x1", RoleName::TeamMember, "t2"),
            ];

            let mut done = fixtures::assignment("a1", "m1", "training_1", now - Duration::days(20));
            done.status = AssignmentStatus::Completed;
            done.completed_at = Some(at(2026, 10, 2, 9));
            let mut done_last_month = fixtures::assignment("a2", "m2", "training_1", now - Duration::days(40));
            done_last_month.status = AssignmentStatus::Completed;
            done_last_month.completed_at = Some(at(2026, 9, 28, 9));
            let assignments = vec![
                done,
                done_last_month,
                fixtures::assignment("a3", "m2", "training_1", now),
                fixtures::assignment("a4", "x1", "training_1", now),
            ];

            let attendance = vec![
                fixtures::call_out("c1", "m1", now - Duration::days(2)),
                fixtures::call_out("c2", "m1", now - Duration::days(8)),
                fixtures::call_out("c3", "x1", now - Duration::days(1)),
                // Exatamente sete dias atrás ainda conta
                fixtures::call_out("c4", "m2", now - Duration::days(7)),
            ];

            let logs = vec![
                fixtures::device_log("d1", "m1", "t1", now),
                fixtures::device_log("d2", "x1", "t2", now),
            ];

            let dashboard = build_owner(&owner, &tenant, &users, &assignments, &attendance, &logs, now);

            assert_eq!(dashboard.title, "Owner Dashboard");
            assert_eq!(dashboard.total_users, 3);
            assert_eq!(dashboard.active_training, 1);
            assert_eq!(dashboard.completed_this_month, 1);
            assert_eq!(dashboard.call_outs_last_7_days, 2);
            assert_eq!(dashboard.completion_rate, 67);
            assert_eq!(
                dashboard.role_breakdown,
                vec![RoleCount { role: RoleName::TeamMember, count: 2 }]
            );
            assert_eq!(dashboard.device_access.desktop, 1);
            assert_eq!(dashboard.tenant.tenant_type, TenantType::OwnerTenant);
        }
    }

    mod service {
        use super::*;

        #[tokio::test]
        async fn impersonated_viewer_drives_the_home_view() {
            let setup = TestSetup::seeded().await;
            let dev = setup.sign_in_developer().await;
            setup
                .state
                .navigation_service
                .impersonate(&dev, "test_user_1", setup.now)
                .await
                .unwrap();
            let ctx = setup.state.navigation_service.load_context(&dev.actor.id).await.unwrap();

            let home = setup.state.dashboard_service.home(&ctx, setup.now).await.unwrap();

            assert_eq!(home.user.id, "test_user_1");
            assert_eq!(home.open_trainings, 1);
            assert_eq!(home.next_shift.map(|s| s.id), Some("schedule_1".to_string()));
        }

        #[tokio::test]
        async fn owner_view_requires_owner_level_viewer() {
            let setup = TestSetup::seeded().await;
            let ctx = setup.sign_in("test_manager_1").await;

            let result = setup.state.dashboard_service.owner(&ctx, setup.now).await;

            assert!(matches!(result, Err(AppError::PermissionDenied(_))));
        }

        #[tokio::test]
        async fn library_lists_the_tenant_trainings() {
            let setup = TestSetup::seeded().await;
            let ctx = setup.sign_in("test_user_1").await;

            let all = setup.state.dashboard_service.library(&ctx, None).await.unwrap();
            let found = setup.state.dashboard_service.library(&ctx, Some("customer")).await.unwrap();

            assert_eq!(all.total, 2);
            assert_eq!(found.total, 1);
            assert_eq!(found.trainings[0].id, "training_2");
        }
    }
}
