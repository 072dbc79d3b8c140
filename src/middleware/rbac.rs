// src/middleware/rbac.rs

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::marker::PhantomData;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    services::navigation_service::SessionContext,
};

/// 1. O Trait que define uma regra de acesso por cargo
pub trait RoleGate: Send + Sync + 'static {
    fn name() -> &'static str;
    fn allows(ctx: &SessionContext) -> bool;
}

/// 2. O Extractor (Guardião). Depende do `auth_guard` ter rodado antes.
pub struct RequireRole<T>(pub PhantomData<T>);

impl<T, S> FromRequestParts<S> for RequireRole<T>
where
    T: RoleGate,
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let Ok(locale) = Locale::from_request_parts(parts, state).await;

        let ctx = parts
            .extensions
            .get::<SessionContext>()
            .ok_or_else(|| AppError::InvalidToken.to_api_error(&locale, &app_state.i18n))?;

        if !T::allows(ctx) {
            tracing::debug!(actor_id = %ctx.actor.id, gate = T::name(), "⛔ Acesso negado");
            return Err(AppError::PermissionDenied(T::name()).to_api_error(&locale, &app_state.i18n));
        }

        Ok(RequireRole(PhantomData))
    }
}

// ---
// DEFINIÇÃO DAS REGRAS (TIPOS)
// ---

// Console dev: vale o ator, mesmo personificando alguém
pub struct DeveloperOnly;
impl RoleGate for DeveloperOnly {
    fn name() -> &'static str { "developer" }
    fn allows(ctx: &SessionContext) -> bool { ctx.actor.role.is_developer() }
}

// Painel do dono: vale quem está sendo visto
pub struct OwnerAnalytics;
impl RoleGate for OwnerAnalytics {
    fn name() -> &'static str { "owner analytics" }
    fn allows(ctx: &SessionContext) -> bool { ctx.viewer.role.is_owner_level() }
}

pub struct UserAdmin;
impl RoleGate for UserAdmin {
    fn name() -> &'static str { "user admin" }
    fn allows(ctx: &SessionContext) -> bool {
        ctx.actor.role.is_owner_level() || ctx.actor.role.is_developer()
    }
}

pub struct TicketRequester;
impl RoleGate for TicketRequester {
    fn name() -> &'static str { "manager" }
    fn allows(ctx: &SessionContext) -> bool { ctx.actor.role.is_manager() }
}
