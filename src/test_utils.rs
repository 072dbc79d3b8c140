// src/test_utils.rs

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    config::AppState,
    db::{collections::{OO_CODES, USERS}, MemoryKvStore, SharedStore},
    models::{auth::{AuthOutcome, User}, tenancy::OoCode},
    services::{auth::mock_sso, navigation_service::SessionContext, seed_service},
};

pub mod fixtures;

pub const TEST_JWT_SECRET: &str = "test-secret";

/// Estado isolado por teste: armazenamento em memória e serviços montados sobre ele.
pub struct TestSetup {
    pub store: SharedStore,
    pub state: AppState,
    pub now: DateTime<Utc>,
}

impl TestSetup {
    pub async fn new() -> Self {
        let store: SharedStore = Arc::new(MemoryKvStore::new());
        let state = AppState::new(store.clone(), TEST_JWT_SECRET.to_string());

        // Relógio real: os tokens são validados contra a hora atual
        TestSetup { store, state, now: Utc::now() }
    }

    /// Com os dados de demonstração já gravados.
    pub async fn seeded() -> Self {
        let setup = Self::new().await;
        seed_service::ensure_seed_data(setup.store.as_ref(), setup.now)
            .await
            .expect("falha ao popular dados de demonstração");
        setup
    }

    pub async fn user(&self, id: &str) -> User {
        self.state
            .user_repo
            .find_by_id(id)
            .await
            .expect("falha ao ler usuários")
            .unwrap_or_else(|| panic!("usuário '{}' não existe", id))
    }

    pub async fn insert_user(&self, user: User) {
        let mut users = USERS.load(self.store.as_ref()).await.expect("falha ao ler usuários");
        users.push(user);
        USERS.save(self.store.as_ref(), &users).await.expect("falha ao gravar usuários");
    }

    pub async fn insert_code(&self, code: OoCode) {
        let mut codes = OO_CODES.load(self.store.as_ref()).await.expect("falha ao ler códigos");
        codes.push(code);
        OO_CODES.save(self.store.as_ref(), &codes).await.expect("falha ao gravar códigos");
    }

    /// Abre a sessão direto, sem passar pelo fluxo de login.
    pub async fn sign_in(&self, user_id: &str) -> SessionContext {
        let user = self.user(user_id).await;
        self.state
            .navigation_service
            .start_session(&user, self.now)
            .await
            .expect("falha ao iniciar sessão");
        self.context(user_id).await
    }

    /// Login completo pelo atalho dev (cria o desenvolvedor na primeira vez).
    pub async fn sign_in_developer(&self) -> SessionContext {
        let outcome = self
            .state
            .auth_service
            .developer_sign_in(&mock_sso(), None, self.now)
            .await
            .expect("falha no login dev");

        match outcome {
            AuthOutcome::Authenticated { user, .. } => self.context(&user.id).await,
            other => panic!("login dev não autenticou: {:?}", other),
        }
    }

    pub async fn context(&self, user_id: &str) -> SessionContext {
        self.state
            .navigation_service
            .load_context(user_id)
            .await
            .expect("falha ao carregar contexto")
    }
}
