// src/services/user_service.rs

use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    db::{TenantRepository, UserRepository},
    models::auth::{AvatarSource, CreateUserPayload, RoleName, User},
    services::{avatar_service, navigation_service::SessionContext},
};

#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
    tenant_repo: TenantRepository,
}

impl UserService {
    pub fn new(user_repo: UserRepository, tenant_repo: TenantRepository) -> Self {
        Self { user_repo, tenant_repo }
    }

    /// Owner/DM cadastram no próprio tenant; desenvolvedores escolhem o tenant pelo código OO.
    pub async fn create_user(
        &self,
        ctx: &SessionContext,
        payload: CreateUserPayload,
        now: DateTime<Utc>,
    ) -> Result<User, AppError> {
        let actor = &ctx.actor;
        let payload = payload.trimmed();
        payload.validate()?;

        if !RoleName::CREATABLE_POSITIONS.contains(&payload.position) {
            return Err(AppError::PositionNotAllowed);
        }

        let (tenant_id, oo_code) = if actor.role.is_owner_level() {
            (actor.tenant_id.clone(), actor.oo_code.clone())
        } else if actor.role.is_developer() {
            let code = payload.oo_code.as_deref().ok_or(AppError::OoCodeRequired)?;

            let code = self
                .tenant_repo
                .find_active_code(code)
                .await?
                .ok_or(AppError::InvalidOoCode)?;

            (code.tenant_id, code.code)
        } else {
            return Err(AppError::PermissionDenied("owner or developer"));
        };

        let id = format!("user_{}", Uuid::new_v4().simple());
        let avatar = avatar_service::deterministic_avatar(&id);

        let user = User {
            id,
            email: payload.email,
            display_name: format!("{} {}", payload.first_name, payload.last_name),
            role: payload.position,
            oo_code,
            tenant_id,
            district_id: None,
            store_id: payload.location,
            active: true,
            created_at: now,
            avatar_id: Some(avatar.id),
            avatar_url: None,
            avatar_source: Some(AvatarSource::DefaultPack),
            featured_badge_id: None,
        };

        let user = self.user_repo.create(user).await?;

        tracing::info!(
            user_id = %user.id,
            tenant_id = %user.tenant_id,
            created_by = %actor.id,
            "👤 Usuário cadastrado"
        );
        Ok(user)
    }

    // Mudanças de avatar valem para quem está sendo visto (inclusive na personificação)
    pub async fn select_avatar(&self, ctx: &SessionContext, avatar_id: &str) -> Result<User, AppError> {
        let item = avatar_service::find_avatar(avatar_id)
            .ok_or_else(|| AppError::UnknownAvatar(avatar_id.to_string()))?;

        self.user_repo
            .update(&ctx.viewer.id, |user| {
                user.avatar_id = Some(item.id);
                user.avatar_source = Some(AvatarSource::DefaultPack);
                user.avatar_url = None;
            })
            .await
    }

    pub async fn upload_avatar(
        &self,
        ctx: &SessionContext,
        content_type: &str,
        data_base64: &str,
    ) -> Result<User, AppError> {
        let data_url = avatar_service::upload_to_data_url(content_type, data_base64)?;

        self.user_repo
            .update(&ctx.viewer.id, |user| {
                user.avatar_url = Some(data_url);
                user.avatar_source = Some(AvatarSource::Uploaded);
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fixtures, TestSetup};

    fn payload(email: &str, position: RoleName, oo_code: Option<&str>) -> CreateUserPayload {
        CreateUserPayload {
            first_name: "Jamie".into(),
            last_name: "Rivera".into(),
            email: email.into(),
            position,
            location: Some(" store_9 ".into()),
            oo_code: oo_code.map(str::to_string),
        }
    }

    mod create {
        use super::*;

        #[tokio::test]
        async fn owner_creates_users_in_their_own_tenant() {
            let setup = TestSetup::seeded().await;
            let mut owner = fixtures::user_with_role("boss", RoleName::Owner, "test_tenant_1");
            owner.oo_code = "TEST123".into();
            setup.insert_user(owner).await;
            let ctx = setup.sign_in("boss").await;

            let user = setup
                .state
                .user_service
                .create_user(&ctx, payload("jamie@example.com", RoleName::TeamMember, None), setup.now)
                .await
                .unwrap();

            assert_eq!(user.tenant_id, "test_tenant_1");
            assert_eq!(user.oo_code, "TEST123");
            assert_eq!(user.display_name, "Jamie Rivera");
            assert_eq!(user.store_id.as_deref(), Some("store_9"));
            assert_eq!(user.avatar_source, Some(AvatarSource::DefaultPack));
            assert!(user.avatar_id.is_some());
        }

        #[tokio::test]
        async fn developer_must_supply_a_valid_code() {
            let setup = TestSetup::seeded().await;
            let ctx = setup.sign_in_developer().await;
            let service = &setup.state.user_service;

            let missing = service
                .create_user(&ctx, payload("a@example.com", RoleName::TeamLead, None), setup.now)
                .await;
            assert!(matches!(missing, Err(AppError::OoCodeRequired)));

            let unknown = service
                .create_user(&ctx, payload("a@example.com", RoleName::TeamLead, Some("NOPE")), setup.now)
                .await;
            assert!(matches!(unknown, Err(AppError::InvalidOoCode)));

            let user = service
                .create_user(&ctx, payload("a@example.com", RoleName::TeamLead, Some("TEST123")), setup.now)
                .await
                .unwrap();
            assert_eq!(user.tenant_id, "test_tenant_1");
        }

        #[tokio::test]
        async fn duplicate_email_and_bad_position_are_rejected() {
            let setup = TestSetup::seeded().await;
            let ctx = setup.sign_in_developer().await;
            let service = &setup.state.user_service;

            let duplicate = service
                .create_user(
                    &ctx,
                    payload("TESTUSER@chickentrainer.com", RoleName::TeamMember, Some("TEST123")),
                    setup.now,
                )
                .await;
            assert!(matches!(duplicate, Err(AppError::EmailAlreadyExists)));

            let position = service
                .create_user(&ctx, payload("b@example.com", RoleName::Developer, Some("TEST123")), setup.now)
                .await;
            assert!(matches!(position, Err(AppError::PositionNotAllowed)));
        }

        #[tokio::test]
        async fn blank_names_are_rejected_and_padding_is_trimmed() {
            let setup = TestSetup::seeded().await;
            let ctx = setup.sign_in_developer().await;
            let service = &setup.state.user_service;

            let mut blank = payload("d@example.com", RoleName::TeamMember, Some("TEST123"));
            blank.first_name = "   ".into();
            let result = service.create_user(&ctx, blank, setup.now).await;
            assert!(matches!(result, Err(AppError::ValidationError(_))));

            let mut padded = payload(" d@example.com ", RoleName::TeamMember, Some(" TEST123 "));
            padded.first_name = "  Jamie ".into();
            padded.last_name = " Rivera  ".into();
            let user = service.create_user(&ctx, padded, setup.now).await.unwrap();
            assert_eq!(user.display_name, "Jamie Rivera");
            assert_eq!(user.email, "d@example.com");
        }

        #[tokio::test]
        async fn store_staff_cannot_create_users() {
            let setup = TestSetup::seeded().await;
            let ctx = setup.sign_in("test_manager_1").await;

            let result = setup
                .state
                .user_service
                .create_user(&ctx, payload("c@example.com", RoleName::TeamMember, None), setup.now)
                .await;

            assert!(matches!(result, Err(AppError::PermissionDenied(_))));
        }
    }

    mod avatars {
        use super::*;

        #[tokio::test]
        async fn selecting_then_uploading_switches_the_source() {
            let setup = TestSetup::seeded().await;
            let ctx = setup.sign_in("test_user_1").await;
            let service = &setup.state.user_service;

            let user = service.select_avatar(&ctx, "cow_c").await.unwrap();
            assert_eq!(
                avatar_service::user_avatar_url(&user).as_deref(),
                Some("/assets/avatars/cow_c.svg")
            );

            let user = service.upload_avatar(&ctx, "image/png", "iVBORw0KGgo=").await.unwrap();
            assert_eq!(user.avatar_source, Some(AvatarSource::Uploaded));
            assert_eq!(
                avatar_service::user_avatar_url(&user).as_deref(),
                Some("data:image/png;base64,iVBORw0KGgo=")
            );

            assert!(matches!(
                service.select_avatar(&ctx, "coach_moo").await,
                Err(AppError::UnknownAvatar(_))
            ));
        }

        #[tokio::test]
        async fn impersonating_developer_edits_the_viewed_user() {
            let setup = TestSetup::seeded().await;
            let dev = setup.sign_in_developer().await;
            setup
                .state
                .navigation_service
                .impersonate(&dev, "test_user_1", setup.now)
                .await
                .unwrap();
            let ctx = setup.state.navigation_service.load_context(&dev.actor.id).await.unwrap();

            setup.state.user_service.upload_avatar(&ctx, "image/jpeg", "/9j/4AAQ").await.unwrap();

            assert_eq!(
                setup.user("test_user_1").await.avatar_source,
                Some(AvatarSource::Uploaded)
            );
            assert_eq!(setup.user(&dev.actor.id).await, dev.actor);
        }
    }
}
