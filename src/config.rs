// src/config.rs

use std::{env, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use crate::{
    common::i18n::I18nStore,
    db::{
        BadgeRepository, DeviceLogRepository, MaintenanceRepository, MemoryKvStore, PgKvStore,
        ScheduleRepository, SessionRepository, SettingsRepository, SharedStore, TenantRepository,
        TrainingRepository, UserRepository,
    },
    services::{
        auth::AuthService, dashboard_service::DashboardService,
        developer_service::DeveloperService, navigation_service::NavigationService,
        user_service::UserService,
    },
};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:3000";

// Configuração lida do ambiente (.env é opcional)
#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub database_url: Option<String>,
    pub server_addr: String,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET deve ser definido")?;
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty());
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string());

        let seed_demo_data = match env::var("SEED_DEMO_DATA") {
            Ok(value) => parse_flag(&value).with_context(|| format!("SEED_DEMO_DATA inválido: '{}'", value))?,
            Err(_) => true,
        };

        Ok(Self { jwt_secret, database_url, server_addr, seed_demo_data })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Escolhe o backend: Postgres quando há DATABASE_URL, memória caso contrário.
pub async fn connect_store(config: &Config) -> anyhow::Result<SharedStore> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("⚠️ DATABASE_URL não definida, usando armazenamento em memória");
        return Ok(Arc::new(MemoryKvStore::new()));
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await
        .context("Falha ao conectar ao banco de dados")?;

    tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Falha ao rodar as migrações do banco de dados")?;

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    Ok(Arc::new(PgKvStore::new(pool)))
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub i18n: Arc<I18nStore>,

    pub user_repo: UserRepository,
    pub session_repo: SessionRepository,
    pub settings_repo: SettingsRepository,
    pub device_repo: DeviceLogRepository,

    pub auth_service: AuthService,
    pub navigation_service: NavigationService,
    pub dashboard_service: DashboardService,
    pub developer_service: DeveloperService,
    pub user_service: UserService,
}

impl AppState {
    /// Monta o gráfico de dependências sobre um armazenamento já aberto.
    pub fn new(store: SharedStore, jwt_secret: String) -> Self {
        let user_repo = UserRepository::new(store.clone());
        let tenant_repo = TenantRepository::new(store.clone());
        let training_repo = TrainingRepository::new(store.clone());
        let badge_repo = BadgeRepository::new(store.clone());
        let schedule_repo = ScheduleRepository::new(store.clone());
        let maintenance_repo = MaintenanceRepository::new(store.clone());
        let settings_repo = SettingsRepository::new(store.clone());
        let session_repo = SessionRepository::new(store.clone());
        let device_repo = DeviceLogRepository::new(store.clone());

        let navigation_service = NavigationService::new(
            user_repo.clone(),
            tenant_repo.clone(),
            session_repo.clone(),
            training_repo.clone(),
        );

        let auth_service = AuthService::new(
            user_repo.clone(),
            tenant_repo.clone(),
            device_repo.clone(),
            navigation_service.clone(),
            jwt_secret,
        );

        let dashboard_service = DashboardService::new(
            user_repo.clone(),
            tenant_repo.clone(),
            training_repo,
            badge_repo,
            schedule_repo,
            device_repo.clone(),
        );

        let developer_service = DeveloperService::new(
            user_repo.clone(),
            tenant_repo.clone(),
            maintenance_repo,
            device_repo.clone(),
        );

        let user_service = UserService::new(user_repo.clone(), tenant_repo);

        Self {
            store,
            i18n: Arc::new(I18nStore::default()),
            user_repo,
            session_repo,
            settings_repo,
            device_repo,
            auth_service,
            navigation_service,
            dashboard_service,
            developer_service,
            user_service,
        }
    }
}
