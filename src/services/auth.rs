// src/services/auth.rs

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{user_repo::same_email, DeviceLogRepository, TenantRepository, UserRepository},
    models::{
        auth::{AuthOutcome, AvatarSource, Claims, RoleName, SsoProfile, User},
        session::Session,
        settings::{DeviceAccessLog, DeviceType},
        tenancy::{OoCode, OoCodeType, Tenant},
    },
    services::{
        avatar_service,
        navigation_service::{NavigationService, SessionContext},
    },
};

/// Código fixo do console de desenvolvimento.
pub const DEVELOPER_CODE: &str = "8675309";

// E-mails que podem usar o atalho de acesso dev
const DEVELOPER_WHITELIST: [&str; 1] = ["samuelosorioperkins@gmail.com"];

const TOKEN_TTL_DAYS: i64 = 7;

/// O "Google" de mentira: sempre devolve o mesmo perfil.
pub fn mock_sso() -> SsoProfile {
    SsoProfile {
        email: "samuelosorioperkins@gmail.com".to_string(),
        name: "Samuel Perkins".to_string(),
        avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Samuel".to_string()),
    }
}

pub fn is_developer_whitelisted(email: &str) -> bool {
    DEVELOPER_WHITELIST.iter().any(|allowed| same_email(allowed, email))
}

// Resultado da verificação de um código OO
#[derive(Debug, Clone)]
pub struct CodeCheck {
    pub code: OoCode,
    pub tenant: Tenant,
    pub existing_user: Option<User>,
}

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    tenant_repo: TenantRepository,
    device_repo: DeviceLogRepository,
    navigation: NavigationService,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(
        user_repo: UserRepository,
        tenant_repo: TenantRepository,
        device_repo: DeviceLogRepository,
        navigation: NavigationService,
        jwt_secret: String,
    ) -> Self {
        Self { user_repo, tenant_repo, device_repo, navigation, jwt_secret }
    }

    // 1. Primeiro passo: e-mail conhecido entra direto, senão pede o código
    pub async fn sign_in_with_sso(
        &self,
        profile: &SsoProfile,
        user_agent: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<AuthOutcome, AppError> {
        let Some(user) = self.user_repo.find_active_by_email(&profile.email).await? else {
            tracing::debug!(email = %profile.email, "E-mail sem conta ativa, pedindo código OO");
            return Ok(AuthOutcome::CodeRequired {
                email: profile.email.trim().to_string(),
                name: profile.name.clone(),
            });
        };

        let tenant = self
            .tenant_repo
            .find_tenant(&user.tenant_id)
            .await?
            .ok_or(AppError::TenantNotFound)?;

        self.authenticate(user, tenant, user_agent, now).await
    }

    /// Confere o código sem alterar nada.
    pub async fn verify_oo_code(&self, code: &str, email: &str) -> Result<CodeCheck, AppError> {
        let code = self
            .tenant_repo
            .find_active_code(code.trim())
            .await?
            .ok_or(AppError::InvalidOoCode)?;

        let tenant = self
            .tenant_repo
            .find_tenant(&code.tenant_id)
            .await?
            .ok_or(AppError::InvalidOoCode)?;

        let existing_user = self
            .user_repo
            .find_active_by_email_in_tenant(email, &tenant.id)
            .await?;

        Ok(CodeCheck { code, tenant, existing_user })
    }

    // 2. Segundo passo: o código OO decide o tenant
    pub async fn sign_in_with_code(
        &self,
        profile: &SsoProfile,
        code: &str,
        user_agent: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<AuthOutcome, AppError> {
        let check = self.verify_oo_code(code, &profile.email).await?;

        if let Some(user) = check.existing_user {
            return self.authenticate(user, check.tenant, user_agent, now).await;
        }

        match check.code.code_type {
            OoCodeType::Developer => {
                let user = self.create_developer(profile, &check.code, now).await?;
                self.authenticate(user, check.tenant, user_agent, now).await
            }
            // Código de dono não cria conta: quem cadastra é o administrador
            OoCodeType::Owner => {
                tracing::info!(
                    email = %profile.email,
                    tenant_id = %check.tenant.id,
                    "Código aceito, mas nenhum usuário neste tenant"
                );
                Ok(AuthOutcome::CodeAccepted { tenant: check.tenant })
            }
        }
    }

    /// Atalho do botão "Developer Access".
    pub async fn developer_sign_in(
        &self,
        profile: &SsoProfile,
        user_agent: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<AuthOutcome, AppError> {
        if !is_developer_whitelisted(&profile.email) {
            tracing::warn!(email = %profile.email, "⛔ Acesso dev negado");
            return Err(AppError::DeveloperAccessDenied);
        }

        if self.tenant_repo.find_active_code(DEVELOPER_CODE).await?.is_none() {
            return Err(AppError::DeveloperAccessNotConfigured);
        }

        self.sign_in_with_code(profile, DEVELOPER_CODE, user_agent, now).await
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &Validation::default(),
        )
        .map_err(|_| AppError::InvalidToken)?;

        Ok(token_data.claims)
    }

    /// Token válido + sessão ativa aberta por este mesmo token.
    pub async fn authorize(&self, token: &str) -> Result<SessionContext, AppError> {
        let claims = self.validate_token(token)?;
        let ctx = self.navigation.load_context(&claims.sub).await?;

        if ctx.session.id != claims.sid {
            tracing::debug!(user_id = %claims.sub, "Token de uma sessão anterior");
            return Err(AppError::SessionEnded);
        }

        Ok(ctx)
    }

    fn create_token(&self, user: &User, session: &Session, now: DateTime<Utc>) -> Result<String, AppError> {
        let expires_at = now + chrono::Duration::days(TOKEN_TTL_DAYS);

        let claims = Claims {
            sub: user.id.clone(),
            tid: user.tenant_id.clone(),
            sid: session.id.clone(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }

    // Token + sessão + registro do dispositivo
    async fn authenticate(
        &self,
        user: User,
        tenant: Tenant,
        user_agent: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<AuthOutcome, AppError> {
        let session = self.navigation.start_session(&user, now).await?;
        let token = self.create_token(&user, &session, now)?;

        self.device_repo
            .record(DeviceAccessLog {
                id: format!("device_{}", Uuid::new_v4().simple()),
                user_id: user.id.clone(),
                tenant_id: tenant.id.clone(),
                device: DeviceType::from_user_agent(user_agent),
                user_agent: user_agent.map(str::to_string),
                timestamp: now,
            })
            .await?;

        tracing::info!(user_id = %user.id, tenant_id = %tenant.id, role = user.role.label(), "✅ Login realizado");
        Ok(AuthOutcome::Authenticated { token, user, tenant })
    }

    async fn create_developer(
        &self,
        profile: &SsoProfile,
        code: &OoCode,
        now: DateTime<Utc>,
    ) -> Result<User, AppError> {
        let id = format!("dev_{}", Uuid::new_v4().simple());
        let avatar = avatar_service::deterministic_avatar(&id);

        let user = User {
            id,
            email: profile.email.trim().to_string(),
            display_name: profile.name.trim().to_string(),
            role: RoleName::Developer,
            oo_code: code.code.clone(),
            tenant_id: code.tenant_id.clone(),
            district_id: None,
            store_id: None,
            active: true,
            created_at: now,
            avatar_id: Some(avatar.id),
            avatar_url: None,
            avatar_source: Some(AvatarSource::DefaultPack),
            featured_badge_id: None,
        };

        let user = self.user_repo.create(user).await?;
        tracing::info!(user_id = %user.id, "🛠️ Novo desenvolvedor criado via código");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fixtures, TestSetup};

    fn profile(email: &str, name: &str) -> SsoProfile {
        SsoProfile { email: email.to_string(), name: name.to_string(), avatar: None }
    }

    mod sso_step {
        use super::*;

        #[tokio::test]
        async fn known_email_is_authenticated_directly() {
            let setup = TestSetup::seeded().await;

            let outcome = setup
                .state
                .auth_service
                .sign_in_with_sso(&profile("TestUser@ChickenTrainer.com ", "Alex"), None, setup.now)
                .await
                .unwrap();

            match outcome {
                AuthOutcome::Authenticated { user, tenant, token } => {
                    assert_eq!(user.id, "test_user_1");
                    assert_eq!(tenant.id, "test_tenant_1");
                    let claims = setup.state.auth_service.validate_token(&token).unwrap();
                    assert_eq!(claims.sub, "test_user_1");
                    assert_eq!(claims.tid, "test_tenant_1");
                }
                other => panic!("esperava Authenticated, veio {:?}", other),
            }
        }

        #[tokio::test]
        async fn unknown_email_asks_for_code_without_writing() {
            let setup = TestSetup::seeded().await;
            let users_before = setup.state.user_repo.list_all().await.unwrap().len();

            let outcome = setup
                .state
                .auth_service
                .sign_in_with_sso(&profile("nobody@example.com", "Nobody"), None, setup.now)
                .await
                .unwrap();

            assert!(matches!(outcome, AuthOutcome::CodeRequired { ref email, .. } if email == "nobody@example.com"));
            assert_eq!(setup.state.user_repo.list_all().await.unwrap().len(), users_before);
        }

        #[tokio::test]
        async fn sign_in_records_device_and_starts_session() {
            let setup = TestSetup::seeded().await;
            let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) Mobile/15E148";

            setup
                .state
                .auth_service
                .sign_in_with_sso(&profile("manager@chickentrainer.com", "Sarah"), Some(ua), setup.now)
                .await
                .unwrap();

            let logs = setup.state.device_repo.list().await.unwrap();
            assert_eq!(logs.len(), 1);
            assert_eq!(logs[0].device, DeviceType::Mobile);
            assert_eq!(logs[0].user_id, "test_manager_1");

            let ctx = setup.state.navigation_service.load_context("test_manager_1").await.unwrap();
            assert!(ctx.session.active);
        }
    }

    mod code_step {
        use super::*;

        #[tokio::test]
        async fn owner_code_with_unknown_email_is_accepted_but_creates_nothing() {
            let setup = TestSetup::seeded().await;
            let users_before = setup.state.user_repo.list_all().await.unwrap();

            let outcome = setup
                .state
                .auth_service
                .sign_in_with_code(&profile("new@example.com", "New Person"), "TEST123", None, setup.now)
                .await
                .unwrap();

            assert!(matches!(outcome, AuthOutcome::CodeAccepted { ref tenant } if tenant.id == "test_tenant_1"));
            assert_eq!(setup.state.user_repo.list_all().await.unwrap(), users_before);
        }

        #[tokio::test]
        async fn developer_code_with_unknown_email_creates_exactly_one_developer() {
            let setup = TestSetup::seeded().await;
            let before = setup.state.user_repo.list_all().await.unwrap().len();
            let who = profile("newdev@example.com", "New Dev");

            let outcome = setup
                .state
                .auth_service
                .sign_in_with_code(&who, " 8675309 ", None, setup.now)
                .await
                .unwrap();

            let AuthOutcome::Authenticated { user, tenant, .. } = outcome else {
                panic!("esperava Authenticated");
            };
            assert_eq!(user.role, RoleName::Developer);
            assert_eq!(user.tenant_id, "dev_tenant_1");
            assert_eq!(tenant.id, "dev_tenant_1");
            assert_eq!(user.oo_code, DEVELOPER_CODE);
            assert_eq!(user.avatar_source, Some(AvatarSource::DefaultPack));

            // Segunda vez: o mesmo usuário é reaproveitado
            setup
                .state
                .auth_service
                .sign_in_with_code(&who, DEVELOPER_CODE, None, setup.now)
                .await
                .unwrap();

            let users = setup.state.user_repo.list_all().await.unwrap();
            assert_eq!(users.len(), before + 1);
            assert_eq!(users.iter().filter(|u| same_email(&u.email, &who.email)).count(), 1);
        }

        #[tokio::test]
        async fn existing_user_in_the_code_tenant_is_authenticated() {
            let setup = TestSetup::seeded().await;

            let outcome = setup
                .state
                .auth_service
                .sign_in_with_code(&profile("testuser@chickentrainer.com", "Alex"), "TEST123", None, setup.now)
                .await
                .unwrap();

            assert!(matches!(outcome, AuthOutcome::Authenticated { ref user, .. } if user.id == "test_user_1"));
        }

        #[tokio::test]
        async fn invalid_or_inactive_code_changes_nothing() {
            let setup = TestSetup::seeded().await;
            setup.insert_code(fixtures::inactive_code("OLD999", "test_tenant_1")).await;
            let keys_before = setup.store.keys().await.unwrap();
            let users_before = setup.state.user_repo.list_all().await.unwrap();

            for code in ["NOPE", "OLD999", ""] {
                let result = setup
                    .state
                    .auth_service
                    .sign_in_with_code(&profile("x@example.com", "X"), code, None, setup.now)
                    .await;
                assert!(matches!(result, Err(AppError::InvalidOoCode)));
            }

            assert_eq!(setup.store.keys().await.unwrap(), keys_before);
            assert_eq!(setup.state.user_repo.list_all().await.unwrap(), users_before);
        }
    }

    mod developer_shortcut {
        use super::*;

        #[tokio::test]
        async fn whitelisted_email_gets_in() {
            let setup = TestSetup::seeded().await;

            let outcome = setup
                .state
                .auth_service
                .developer_sign_in(&mock_sso(), None, setup.now)
                .await
                .unwrap();

            assert!(matches!(outcome, AuthOutcome::Authenticated { ref user, .. } if user.role == RoleName::Developer));
        }

        #[tokio::test]
        async fn other_emails_are_denied() {
            let setup = TestSetup::seeded().await;

            let result = setup
                .state
                .auth_service
                .developer_sign_in(&profile("intruder@example.com", "Intruder"), None, setup.now)
                .await;

            assert!(matches!(result, Err(AppError::DeveloperAccessDenied)));
        }

        #[tokio::test]
        async fn missing_developer_code_is_reported() {
            let setup = TestSetup::new().await;

            let result = setup
                .state
                .auth_service
                .developer_sign_in(&mock_sso(), None, setup.now)
                .await;

            assert!(matches!(result, Err(AppError::DeveloperAccessNotConfigured)));
        }
    }

    #[tokio::test]
    async fn tampered_token_is_rejected() {
        let setup = TestSetup::new().await;
        let result = setup.state.auth_service.validate_token("not.a.jwt");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    mod session_tokens {
        use super::*;

        async fn token_for(setup: &TestSetup, email: &str) -> String {
            match setup
                .state
                .auth_service
                .sign_in_with_sso(&profile(email, "Someone"), None, setup.now)
                .await
                .unwrap()
            {
                AuthOutcome::Authenticated { token, .. } => token,
                other => panic!("esperava Authenticated, veio {:?}", other),
            }
        }

        #[tokio::test]
        async fn token_opens_its_own_session() {
            let setup = TestSetup::seeded().await;
            let token = token_for(&setup, "testuser@chickentrainer.com").await;

            let ctx = setup.state.auth_service.authorize(&token).await.unwrap();

            assert_eq!(ctx.actor.id, "test_user_1");
            let claims = setup.state.auth_service.validate_token(&token).unwrap();
            assert_eq!(claims.sid, ctx.session.id);
        }

        #[tokio::test]
        async fn signed_out_token_stays_dead_after_next_sign_in() {
            let setup = TestSetup::seeded().await;
            let old_token = token_for(&setup, "testuser@chickentrainer.com").await;

            setup.state.navigation_service.sign_out("test_user_1", setup.now).await.unwrap();
            assert!(matches!(
                setup.state.auth_service.authorize(&old_token).await,
                Err(AppError::SessionEnded)
            ));

            let new_token = token_for(&setup, "testuser@chickentrainer.com").await;

            assert!(matches!(
                setup.state.auth_service.authorize(&old_token).await,
                Err(AppError::SessionEnded)
            ));
            assert!(setup.state.auth_service.authorize(&new_token).await.is_ok());
        }
    }
}
