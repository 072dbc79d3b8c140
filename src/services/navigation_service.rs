// src/services/navigation_service.rs

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{SessionRepository, TenantRepository, TrainingRepository, UserRepository},
    models::{
        auth::{RoleName, User},
        session::{NavigationState, Session, View},
        tenancy::Tenant,
        training::Assignment,
    },
};

// =============================================================================
//  REGRAS PURAS DE NAVEGAÇÃO
// =============================================================================

/// Tela inicial de cada cargo.
pub fn landing_view(role: RoleName) -> View {
    if role.is_developer() {
        View::Developer
    } else if role.is_owner_level() {
        View::Owner
    } else {
        View::Home
    }
}

/// Abas visíveis. `owner` depende de quem está sendo visto; `developer`, de quem está logado.
pub fn visible_views(actor: &User, viewer: &User) -> Vec<View> {
    let mut views = vec![
        View::Home,
        View::Training,
        View::Schedule,
        View::Library,
        View::Profile,
    ];
    if viewer.role.is_owner_level() {
        views.push(View::Owner);
    }
    if actor.role.is_developer() {
        views.push(View::Developer);
    }
    views
}

// ---
// Contexto de uma requisição autenticada
// ---
/// Quem está logado (actor) e quem está sendo visto (viewer).
/// Sem personificação, os dois são o mesmo usuário.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub actor: User,
    pub actor_tenant: Tenant,
    pub viewer: User,
    pub tenant: Tenant,
    pub session: Session,
}

impl SessionContext {
    pub fn is_impersonating(&self) -> bool {
        self.actor.id != self.viewer.id
    }

    /// A aba salva, ou `home` se ela não estiver mais disponível para este usuário.
    pub fn effective_view(&self) -> View {
        let visible = visible_views(&self.actor, &self.viewer);
        if visible.contains(&self.session.active_view) {
            self.session.active_view
        } else {
            View::Home
        }
    }
}

pub fn build_navigation_state(ctx: &SessionContext, assignments: &[Assignment]) -> NavigationState {
    let has_active_trainings = assignments
        .iter()
        .any(|a| a.user_id == ctx.viewer.id && a.status.is_pending());

    // O tutorial é só para a equipe da loja
    let show_onboarding = ctx.session.show_onboarding
        && !ctx.actor.role.is_developer()
        && !ctx.actor.role.is_owner_level();

    NavigationState {
        actor_id: ctx.actor.id.clone(),
        viewing_user_id: ctx.viewer.id.clone(),
        tenant_id: ctx.tenant.id.clone(),
        active_view: ctx.effective_view(),
        visible_views: visible_views(&ctx.actor, &ctx.viewer),
        is_impersonating: ctx.is_impersonating(),
        impersonated_user_id: ctx.session.impersonated_user_id.clone(),
        show_onboarding,
        has_active_trainings,
    }
}

// =============================================================================
//  SERVIÇO
// =============================================================================

#[derive(Clone)]
pub struct NavigationService {
    user_repo: UserRepository,
    tenant_repo: TenantRepository,
    session_repo: SessionRepository,
    training_repo: TrainingRepository,
}

impl NavigationService {
    pub fn new(
        user_repo: UserRepository,
        tenant_repo: TenantRepository,
        session_repo: SessionRepository,
        training_repo: TrainingRepository,
    ) -> Self {
        Self { user_repo, tenant_repo, session_repo, training_repo }
    }

    /// Abre (ou reabre) a sessão de um usuário recém-autenticado.
    /// O flag de onboarding da sessão anterior é preservado.
    pub async fn start_session(&self, user: &User, now: DateTime<Utc>) -> Result<Session, AppError> {
        let show_onboarding = self
            .session_repo
            .find(&user.id)
            .await?
            .map(|previous| previous.show_onboarding)
            .unwrap_or(true);

        let session = Session {
            id: format!("sess_{}", Uuid::new_v4().simple()),
            user_id: user.id.clone(),
            tenant_id: user.tenant_id.clone(),
            active: true,
            active_view: landing_view(user.role),
            impersonated_user_id: None,
            show_onboarding,
            started_at: now,
            updated_at: now,
        };

        tracing::info!(user_id = %user.id, view = ?session.active_view, "🔑 Sessão iniciada");
        self.session_repo.upsert(session).await
    }

    /// Monta o contexto da requisição a partir do usuário do token.
    pub async fn load_context(&self, user_id: &str) -> Result<SessionContext, AppError> {
        let session = self
            .session_repo
            .find(user_id)
            .await?
            .filter(|s| s.active)
            .ok_or(AppError::SessionEnded)?;

        let actor = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .filter(|u| u.active)
            .ok_or(AppError::SessionEnded)?;

        let actor_tenant = self
            .tenant_repo
            .find_tenant(&actor.tenant_id)
            .await?
            .ok_or(AppError::TenantNotFound)?;

        // Personificação só vale para desenvolvedores. Usuário ou tenant órfão cai de volta no próprio ator.
        let impersonated = match (&session.impersonated_user_id, actor.role.is_developer()) {
            (Some(target_id), true) => self.resolve_target(target_id, &actor, &actor_tenant).await?,
            _ => None,
        };

        let (viewer, tenant) = impersonated.unwrap_or_else(|| (actor.clone(), actor_tenant.clone()));

        Ok(SessionContext { actor, actor_tenant, viewer, tenant, session })
    }

    async fn resolve_target(
        &self,
        target_id: &str,
        actor: &User,
        actor_tenant: &Tenant,
    ) -> Result<Option<(User, Tenant)>, AppError> {
        let Some(target) = self.user_repo.find_by_id(target_id).await? else {
            return Ok(None);
        };

        if target.tenant_id == actor.tenant_id {
            return Ok(Some((target, actor_tenant.clone())));
        }

        let tenant = self.tenant_repo.find_tenant(&target.tenant_id).await?;
        if tenant.is_none() {
            tracing::warn!(actor_id = %actor.id, target_id = %target.id, "⚠️ Tenant do usuário personificado não existe");
        }
        Ok(tenant.map(|tenant| (target, tenant)))
    }

    pub async fn navigation_state(&self, user_id: &str) -> Result<NavigationState, AppError> {
        let ctx = self.load_context(user_id).await?;
        let assignments = self.training_repo.list_assignments().await?;
        Ok(build_navigation_state(&ctx, &assignments))
    }

    pub async fn change_view(
        &self,
        ctx: &SessionContext,
        view: View,
        now: DateTime<Utc>,
    ) -> Result<NavigationState, AppError> {
        if !visible_views(&ctx.actor, &ctx.viewer).contains(&view) {
            return Err(AppError::ViewNotAvailable(view));
        }

        self.session_repo
            .update(&ctx.actor.id, |s| {
                s.active_view = view;
                s.updated_at = now;
            })
            .await?;

        self.navigation_state(&ctx.actor.id).await
    }

    /// Passa a ver o app como outro usuário, sem trocar de credencial.
    pub async fn impersonate(
        &self,
        ctx: &SessionContext,
        target_user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<NavigationState, AppError> {
        if !ctx.actor.role.is_developer() {
            return Err(AppError::PermissionDenied("developer"));
        }

        let target = self
            .user_repo
            .find_by_id(target_user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        // Contas de desenvolvedor não aparecem na lista e não podem ser personificadas
        if target.role.is_developer() {
            return Err(AppError::PermissionDenied("non-developer target"));
        }

        // Sem tenant não há o que mostrar: falha antes de gravar a sessão
        self.tenant_repo
            .find_tenant(&target.tenant_id)
            .await?
            .ok_or(AppError::TenantNotFound)?;

        let view = if target.role.is_owner_level() { View::Owner } else { View::Home };

        self.session_repo
            .update(&ctx.actor.id, |s| {
                s.impersonated_user_id = Some(target.id.clone());
                s.active_view = view;
                s.updated_at = now;
            })
            .await?;

        tracing::info!(
            actor_id = %ctx.actor.id,
            target_id = %target.id,
            "👀 Desenvolvedor visualizando como outro usuário"
        );

        self.navigation_state(&ctx.actor.id).await
    }

    pub async fn stop_impersonating(
        &self,
        ctx: &SessionContext,
        now: DateTime<Utc>,
    ) -> Result<NavigationState, AppError> {
        let view = landing_view(ctx.actor.role);

        self.session_repo
            .update(&ctx.actor.id, |s| {
                s.impersonated_user_id = None;
                s.active_view = view;
                s.updated_at = now;
            })
            .await?;

        self.navigation_state(&ctx.actor.id).await
    }

    pub async fn complete_onboarding(
        &self,
        ctx: &SessionContext,
        now: DateTime<Utc>,
    ) -> Result<NavigationState, AppError> {
        self.session_repo
            .update(&ctx.actor.id, |s| {
                s.show_onboarding = false;
                s.updated_at = now;
            })
            .await?;

        self.navigation_state(&ctx.actor.id).await
    }

    /// Logout: desativa a sessão e limpa a personificação.
    pub async fn sign_out(&self, actor_id: &str, now: DateTime<Utc>) -> Result<(), AppError> {
        self.session_repo
            .update(actor_id, |s| {
                s.active = false;
                s.impersonated_user_id = None;
                s.active_view = View::Home;
                s.updated_at = now;
            })
            .await?;

        tracing::info!(user_id = %actor_id, "👋 Sessão encerrada");
        Ok(())
    }
}
