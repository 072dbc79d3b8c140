// src/db/schedule_repo.rs

use crate::{
    common::error::AppError,
    db::{
        collections::{ATTENDANCE_RECORDS, SCHEDULES},
        SharedStore,
    },
    models::schedule::{AttendanceRecord, Schedule},
};

// Turnos e a presença marcada neles
#[derive(Clone)]
pub struct ScheduleRepository {
    store: SharedStore,
}

impl ScheduleRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list_schedules(&self) -> Result<Vec<Schedule>, AppError> {
        SCHEDULES.load(self.store.as_ref()).await
    }

    pub async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>, AppError> {
        ATTENDANCE_RECORDS.load(self.store.as_ref()).await
    }
}
