// src/db/collections.rs

// Os nomes das coleções persistidas. Cada uma é um array JSON sob uma chave.

use super::kv_store::Collection;
use crate::models::{
    auth::User,
    badge::{Badge, BadgeAward},
    maintenance::MaintenanceTicket,
    schedule::{AttendanceRecord, Schedule},
    session::Session,
    settings::{AppearanceSettings, DeviceAccessLog, NotificationSettings},
    tenancy::{OoCode, Tenant},
    training::{Assignment, Training},
};

pub const USERS: Collection<User> = Collection::new("users");
pub const TENANTS: Collection<Tenant> = Collection::new("tenants");
pub const OO_CODES: Collection<OoCode> = Collection::new("oo_codes");
pub const TRAININGS: Collection<Training> = Collection::new("trainings");
pub const ASSIGNMENTS: Collection<Assignment> = Collection::new("assignments");
pub const BADGES: Collection<Badge> = Collection::new("badges");
pub const BADGE_AWARDS: Collection<BadgeAward> = Collection::new("badge_awards");
pub const SCHEDULES: Collection<Schedule> = Collection::new("schedules");
pub const ATTENDANCE_RECORDS: Collection<AttendanceRecord> = Collection::new("attendance_records");
pub const MAINTENANCE_TICKETS: Collection<MaintenanceTicket> = Collection::new("maintenance_tickets");
pub const DEVICE_ACCESS_LOGS: Collection<DeviceAccessLog> = Collection::new("device_access_logs");
pub const NOTIFICATION_SETTINGS: Collection<NotificationSettings> = Collection::new("notification_settings");
pub const APPEARANCE_SETTINGS: Collection<AppearanceSettings> = Collection::new("appearance_settings");
pub const SESSIONS: Collection<Session> = Collection::new("sessions");
