// src/models/tenancy.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---
// 1. Tenant (A "Organização")
// ---
// O escopo dono dos usuários e registros (restaurante, distrito ou o console dev)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    #[schema(example = "test_tenant_1")]
    pub id: String,

    #[schema(example = "Demo Restaurant")]
    pub name: String,

    #[serde(rename = "type")]
    pub tenant_type: TenantType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_owner_id: Option<String>,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TenantType {
    OwnerTenant,
    DeveloperTenant,
}

impl TenantType {
    pub fn label(&self) -> &'static str {
        match self {
            TenantType::OwnerTenant => "Owner Tenant",
            TenantType::DeveloperTenant => "Developer Tenant",
        }
    }
}

// ---
// 2. OoCode (O "Código do Owner-Operator")
// ---
// Código de convite que liga um usuário novo a um tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OoCode {
    #[schema(example = "TEST123")]
    pub code: String,

    #[serde(rename = "type")]
    pub code_type: OoCodeType,

    pub tenant_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_user_id: Option<String>,

    pub created_at: DateTime<Utc>,
    pub status: OoCodeStatus,
}

impl OoCode {
    pub fn is_active(&self) -> bool {
        self.status == OoCodeStatus::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OoCodeType {
    Owner,
    Developer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OoCodeStatus {
    Active,
    Inactive,
}
