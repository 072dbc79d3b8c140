// src/db/tenancy_repo.rs

use crate::{
    common::error::AppError,
    db::{
        collections::{OO_CODES, TENANTS},
        SharedStore,
    },
    models::tenancy::{OoCode, Tenant},
};

// Tenants e os códigos OO que dão acesso a eles
#[derive(Clone)]
pub struct TenantRepository {
    store: SharedStore,
}

impl TenantRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list_tenants(&self) -> Result<Vec<Tenant>, AppError> {
        TENANTS.load(self.store.as_ref()).await
    }

    pub async fn find_tenant(&self, id: &str) -> Result<Option<Tenant>, AppError> {
        let tenants = self.list_tenants().await?;
        Ok(tenants.into_iter().find(|t| t.id == id))
    }

    pub async fn list_codes(&self) -> Result<Vec<OoCode>, AppError> {
        OO_CODES.load(self.store.as_ref()).await
    }

    /// Só códigos com status `active` valem. Código inativo é tratado como inexistente.
    pub async fn find_active_code(&self, code: &str) -> Result<Option<OoCode>, AppError> {
        let codes = self.list_codes().await?;
        Ok(codes.into_iter().find(|c| c.code == code && c.is_active()))
    }
}
