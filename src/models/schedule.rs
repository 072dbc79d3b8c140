// src/models/schedule.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    InStore,
    OffCampus,
}

impl ShiftType {
    pub fn label(&self) -> &'static str {
        match self {
            ShiftType::InStore => "In Store",
            ShiftType::OffCampus => "Off Campus",
        }
    }
}

// Um turno na escala
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[schema(example = "schedule_1")]
    pub id: String,

    pub user_id: String,
    pub store_id: String,

    #[schema(example = "Team Member")]
    pub role_at_shift: String,

    pub shift_start: DateTime<Utc>,
    pub shift_end: DateTime<Utc>,

    #[serde(rename = "type")]
    pub shift_type: ShiftType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub off_campus_location: Option<String>,

    pub tenant_id: String,
}

impl Schedule {
    /// Duração em horas, arredondada para uma casa decimal.
    pub fn duration_hours(&self) -> f64 {
        let minutes = (self.shift_end - self.shift_start).num_minutes() as f64;
        (minutes / 60.0 * 10.0).round() / 10.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    NoShow,
    CallOut,
    Late,
}

// Registro de presença em um turno
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub user_id: String,
    pub schedule_id: String,
    pub status: AttendanceStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_text: Option<String>,

    pub marked_by: String,
    pub marked_at: DateTime<Utc>,
    pub tenant_id: String,
}
