// src/models/session.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// As telas de topo da aplicação
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Home,
    Owner,
    Training,
    Schedule,
    Library,
    Profile,
    Developer,
}

// Estado de navegação persistido por usuário.
// Sobrevive ao logout (só é desativado) para manter o flag de onboarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    // Muda a cada login; tokens de logins anteriores deixam de valer
    #[serde(default)]
    pub id: String,
    pub user_id: String,
    pub tenant_id: String,
    pub active: bool,
    pub active_view: View,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impersonated_user_id: Option<String>,

    pub show_onboarding: bool,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeViewPayload {
    pub view: View,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImpersonatePayload {
    #[schema(example = "test_user_1")]
    pub user_id: String,
}

// O que a interface precisa para montar a navegação
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub actor_id: String,
    pub viewing_user_id: String,
    pub tenant_id: String,
    pub active_view: View,
    pub visible_views: Vec<View>,
    pub is_impersonating: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub impersonated_user_id: Option<String>,

    pub show_onboarding: bool,
    pub has_active_trainings: bool,
}
