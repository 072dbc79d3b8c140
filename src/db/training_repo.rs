// src/db/training_repo.rs

use crate::{
    common::error::AppError,
    db::{
        collections::{ASSIGNMENTS, TRAININGS},
        SharedStore,
    },
    models::training::{Assignment, Training},
};

#[derive(Clone)]
pub struct TrainingRepository {
    store: SharedStore,
}

impl TrainingRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list_trainings(&self) -> Result<Vec<Training>, AppError> {
        TRAININGS.load(self.store.as_ref()).await
    }

    pub async fn list_trainings_for_tenant(&self, tenant_id: &str) -> Result<Vec<Training>, AppError> {
        let trainings = self.list_trainings().await?;
        Ok(trainings.into_iter().filter(|t| t.tenant_id == tenant_id).collect())
    }

    pub async fn list_assignments(&self) -> Result<Vec<Assignment>, AppError> {
        ASSIGNMENTS.load(self.store.as_ref()).await
    }
}
