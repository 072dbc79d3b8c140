pub mod kv_store;
pub use kv_store::{KvStore, MemoryKvStore, PgKvStore, SharedStore};
pub mod collections;
pub mod user_repo;
pub use user_repo::UserRepository;
pub mod tenancy_repo;
pub use tenancy_repo::TenantRepository;
pub mod training_repo;
pub use training_repo::TrainingRepository;
pub mod badge_repo;
pub use badge_repo::BadgeRepository;
pub mod schedule_repo;
pub use schedule_repo::ScheduleRepository;
pub mod maintenance_repo;
pub use maintenance_repo::MaintenanceRepository;
pub mod settings_repo;
pub use settings_repo::SettingsRepository;
pub mod session_repo;
pub use session_repo::SessionRepository;
pub mod device_log_repo;
pub use device_log_repo::DeviceLogRepository;
