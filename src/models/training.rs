// src/models/training.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::auth::RoleName;

// Um módulo de treinamento (também aparece na biblioteca)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    #[schema(example = "training_1")]
    pub id: String,

    #[schema(example = "Food Safety Fundamentals")]
    pub title: String,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_file_id: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub role_targets: Vec<RoleName>,

    pub estimated_time_minutes: u32,

    #[schema(example = "1.0")]
    pub version: String,

    pub effective_date: DateTime<Utc>,
    pub created_by: String,
    pub tenant_id: String,
    pub created_at: DateTime<Utc>,
}

impl Training {
    /// Busca case-insensitive em título, descrição e tags.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Assigned,
    InProgress,
    Completed,
    Overdue,
}

impl AssignmentStatus {
    /// Conta para o indicador de "treinamentos ativos" da navegação.
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            AssignmentStatus::Assigned | AssignmentStatus::InProgress | AssignmentStatus::Overdue
        )
    }
}

// Um treinamento atribuído a um usuário
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[schema(example = "assignment_1")]
    pub id: String,

    pub training_id: String,
    pub user_id: String,
    pub assigned_by: String,
    pub assigned_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_completion_date: Option<DateTime<Utc>>,

    pub status: AssignmentStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<String>,

    pub tenant_id: String,
}

impl Assignment {
    pub fn is_completed(&self) -> bool {
        self.status == AssignmentStatus::Completed
    }

    /// Vencido = ainda aberto e com prazo no passado.
    pub fn is_past_due(&self, now: DateTime<Utc>) -> bool {
        !self.is_completed() && self.due_date.is_some_and(|due| due < now)
    }
}
