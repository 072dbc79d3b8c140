pub mod auth;
pub mod avatar_service;
pub mod dashboard_service;
pub mod developer_service;
pub mod navigation_service;
pub mod seed_service;
pub mod user_service;
