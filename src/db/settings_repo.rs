// src/db/settings_repo.rs

use crate::{
    common::error::AppError,
    db::{
        collections::{APPEARANCE_SETTINGS, NOTIFICATION_SETTINGS},
        SharedStore,
    },
    models::settings::{
        AppearanceSettings, NotificationSettings, Theme, UpdateNotificationSettings,
    },
};

#[derive(Clone)]
pub struct SettingsRepository {
    store: SharedStore,
}

impl SettingsRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    // Se o usuário nunca salvou nada, devolve os padrões (sem gravar).
    pub async fn get_notifications(&self, user_id: &str) -> Result<NotificationSettings, AppError> {
        let all = NOTIFICATION_SETTINGS.load(self.store.as_ref()).await?;
        Ok(all
            .into_iter()
            .find(|s| s.user_id == user_id)
            .unwrap_or_else(|| NotificationSettings::defaults_for(user_id)))
    }

    // UPSERT: mescla os campos enviados por cima do que já existe
    pub async fn update_notifications(
        &self,
        user_id: &str,
        input: UpdateNotificationSettings,
    ) -> Result<NotificationSettings, AppError> {
        NOTIFICATION_SETTINGS
            .update(self.store.as_ref(), |all| {
                let index = match all.iter().position(|s| s.user_id == user_id) {
                    Some(index) => index,
                    None => {
                        all.push(NotificationSettings::defaults_for(user_id));
                        all.len() - 1
                    }
                };
                let settings = &mut all[index];
                settings.apply(input);
                Ok(settings.clone())
            })
            .await
    }

    pub async fn get_appearance(&self, user_id: &str) -> Result<AppearanceSettings, AppError> {
        let all = APPEARANCE_SETTINGS.load(self.store.as_ref()).await?;
        Ok(all
            .into_iter()
            .find(|s| s.user_id == user_id)
            .unwrap_or_else(|| AppearanceSettings::defaults_for(user_id)))
    }

    pub async fn set_theme(&self, user_id: &str, theme: Theme) -> Result<AppearanceSettings, AppError> {
        APPEARANCE_SETTINGS
            .update(self.store.as_ref(), |all| {
                all.retain(|s| s.user_id != user_id);
                let settings = AppearanceSettings {
                    user_id: user_id.to_string(),
                    theme,
                };
                all.push(settings.clone());
                Ok(settings)
            })
            .await
    }
}
