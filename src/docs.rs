// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,

        // --- Auth ---
        handlers::auth::mock_sso_profile,
        handlers::auth::sso_sign_in,
        handlers::auth::oo_code_sign_in,
        handlers::auth::developer_sign_in,
        handlers::auth::logout,

        // --- Session ---
        handlers::session::get_session,
        handlers::session::change_view,
        handlers::session::impersonate,
        handlers::session::stop_impersonating,
        handlers::session::complete_onboarding,

        // --- Dashboard ---
        handlers::dashboard::get_home,
        handlers::dashboard::get_training,
        handlers::dashboard::get_schedule,
        handlers::dashboard::get_profile,
        handlers::dashboard::get_owner,
        handlers::dashboard::search_library,

        // --- Users ---
        handlers::users::list_avatars,
        handlers::users::select_avatar,
        handlers::users::upload_avatar,
        handlers::users::create_user,

        // --- Developer ---
        handlers::developer::get_console,

        // --- Maintenance ---
        handlers::maintenance::list_tickets,
        handlers::maintenance::create_ticket,
        handlers::maintenance::update_ticket_status,

        // --- Settings ---
        handlers::settings::get_notifications,
        handlers::settings::update_notifications,
        handlers::settings::get_appearance,
        handlers::settings::update_appearance,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::RoleName,
            models::auth::AvatarSource,
            models::auth::User,
            models::auth::SsoProfile,
            models::auth::OoCodePayload,
            models::auth::AuthOutcome,
            models::auth::CreateUserPayload,

            // --- Tenancy ---
            models::tenancy::Tenant,
            models::tenancy::TenantType,
            models::tenancy::OoCode,
            models::tenancy::OoCodeType,
            models::tenancy::OoCodeStatus,

            // --- Session ---
            models::session::View,
            models::session::Session,
            models::session::NavigationState,
            models::session::ChangeViewPayload,
            models::session::ImpersonatePayload,

            // --- Training ---
            models::training::Training,
            models::training::Assignment,
            models::training::AssignmentStatus,
            models::badge::Badge,
            models::badge::BadgeAward,

            // --- Schedule ---
            models::schedule::Schedule,
            models::schedule::ShiftType,
            models::schedule::AttendanceRecord,
            models::schedule::AttendanceStatus,

            // --- Dashboard ---
            models::dashboard::AssignmentCard,
            models::dashboard::HomeDashboard,
            models::dashboard::TrainingOverview,
            models::dashboard::ShiftEntry,
            models::dashboard::ShiftDay,
            models::dashboard::ScheduleOverview,
            models::dashboard::LibraryResults,
            models::dashboard::ProfileBadge,
            models::dashboard::ProfileView,
            models::dashboard::RoleCount,
            models::dashboard::OwnerDashboard,
            models::dashboard::TicketSummary,
            models::dashboard::ImpersonationCandidate,
            models::dashboard::DeveloperConsole,

            // --- Avatars ---
            models::avatar::AvatarCategory,
            models::avatar::AvatarItem,
            models::avatar::AvatarPack,
            models::avatar::SelectAvatarPayload,
            models::avatar::UploadAvatarPayload,

            // --- Maintenance ---
            models::maintenance::TicketStatus,
            models::maintenance::MaintenanceTicket,
            models::maintenance::CreateTicketPayload,
            models::maintenance::UpdateTicketStatusPayload,

            // --- Settings ---
            models::settings::NotificationSettings,
            models::settings::UpdateNotificationSettings,
            models::settings::Theme,
            models::settings::AppearanceSettings,
            models::settings::UpdateAppearanceSettings,
            models::settings::DeviceType,
            models::settings::DeviceAccessLog,
            models::settings::DeviceAccessCounts,
        )
    ),
    tags(
        (name = "Health", description = "Verificação do servidor"),
        (name = "Auth", description = "SSO simulado, código OO e acesso dev"),
        (name = "Session", description = "Navegação, personificação e onboarding"),
        (name = "Dashboard", description = "Telas de treinamento, escala, perfil e indicadores"),
        (name = "Users", description = "Cadastro de usuários e avatares"),
        (name = "Developer", description = "Console do desenvolvedor"),
        (name = "Maintenance", description = "Chamados de manutenção"),
        (name = "Settings", description = "Preferências do usuário")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
