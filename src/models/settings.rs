// src/models/settings.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---
// 1. Notificações (por usuário)
// ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    #[schema(ignore)] // O usuário vem do token
    pub user_id: String,

    pub assignments: bool,
    pub badges: bool,
    pub schedule_changes: bool,
    pub actions_needed: bool,
}

impl NotificationSettings {
    // Tudo ligado até o usuário mexer
    pub fn defaults_for(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            assignments: true,
            badges: true,
            schedule_changes: true,
            actions_needed: true,
        }
    }

    pub fn apply(&mut self, input: UpdateNotificationSettings) {
        if let Some(v) = input.assignments {
            self.assignments = v;
        }
        if let Some(v) = input.badges {
            self.badges = v;
        }
        if let Some(v) = input.schedule_changes {
            self.schedule_changes = v;
        }
        if let Some(v) = input.actions_needed {
            self.actions_needed = v;
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNotificationSettings {
    pub assignments: Option<bool>,
    pub badges: Option<bool>,
    pub schedule_changes: Option<bool>,
    pub actions_needed: Option<bool>,
}

// ---
// 2. Aparência (por usuário)
// ---
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceSettings {
    #[schema(ignore)]
    pub user_id: String,
    pub theme: Theme,
}

impl AppearanceSettings {
    pub fn defaults_for(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            theme: Theme::default(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppearanceSettings {
    pub theme: Theme,
}

// ---
// 3. Log de acesso por dispositivo
// ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    Mobile,
    Tablet,
    Desktop,
}

const TABLET_MARKERS: &[&str] = &["tablet", "ipad", "playbook", "silk"];

const MOBILE_MARKERS: &[&str] = &[
    "mobile", "iphone", "ipod", "android", "blackberry", "opera mini", "opera mobi",
    "skyfire", "maemo", "windows phone", "palm", "iemobile", "symbian", "fennec",
];

impl DeviceType {
    /// Classifica pelo User-Agent. Sem cabeçalho (ou desconhecido) conta como desktop.
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        let Some(ua) = user_agent.map(str::to_lowercase) else {
            return DeviceType::Desktop;
        };

        // Android sem "mobi" é tablet
        let android_tablet = ua.contains("android") && !ua.contains("mobi");
        if android_tablet || TABLET_MARKERS.iter().any(|m| ua.contains(m)) {
            return DeviceType::Tablet;
        }
        if MOBILE_MARKERS.iter().any(|m| ua.contains(m)) {
            return DeviceType::Mobile;
        }
        DeviceType::Desktop
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAccessLog {
    pub id: String,
    pub user_id: String,
    pub tenant_id: String,
    pub device: DeviceType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    pub timestamp: DateTime<Utc>,
}

// Contadores exibidos nos painéis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAccessCounts {
    pub mobile: usize,
    pub tablet: usize,
    pub desktop: usize,
}

impl DeviceAccessCounts {
    pub fn tally<'a>(logs: impl IntoIterator<Item = &'a DeviceAccessLog>) -> Self {
        logs.into_iter().fold(Self::default(), |mut acc, log| {
            match log.device {
                DeviceType::Mobile => acc.mobile += 1,
                DeviceType::Tablet => acc.tablet += 1,
                DeviceType::Desktop => acc.desktop += 1,
            }
            acc
        })
    }
}
