pub mod auth;
pub mod avatar;
pub mod badge;
pub mod dashboard;
pub mod maintenance;
pub mod schedule;
pub mod session;
pub mod settings;
pub mod tenancy;
pub mod training;
