// src/models/badge.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Definição de uma insígnia do tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    #[schema(example = "badge_1")]
    pub id: String,

    #[schema(example = "Food Safety Certified")]
    pub name: String,

    pub description: String,
    pub criteria_text: String,
    pub expires: bool,
    pub tenant_id: String,
}

// Uma insígnia concedida a um usuário
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BadgeAward {
    pub id: String,
    pub badge_id: String,
    pub user_id: String,
    pub awarded_by: String,
    pub awarded_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_assignment_id: Option<String>,

    pub tenant_id: String,
}
