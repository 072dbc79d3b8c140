// src/db/device_log_repo.rs

use crate::{
    common::error::AppError,
    db::{collections::DEVICE_ACCESS_LOGS, SharedStore},
    models::settings::DeviceAccessLog,
};

#[derive(Clone)]
pub struct DeviceLogRepository {
    store: SharedStore,
}

impl DeviceLogRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<DeviceAccessLog>, AppError> {
        DEVICE_ACCESS_LOGS.load(self.store.as_ref()).await
    }

    pub async fn record(&self, log: DeviceAccessLog) -> Result<(), AppError> {
        DEVICE_ACCESS_LOGS
            .update(self.store.as_ref(), |logs| {
                logs.push(log);
                Ok(())
            })
            .await
    }
}
