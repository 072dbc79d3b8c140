// src/db/session_repo.rs

use crate::{
    common::error::AppError,
    db::{collections::SESSIONS, SharedStore},
    models::session::Session,
};

// Uma sessão por usuário (o app assume um único dispositivo ativo)
#[derive(Clone)]
pub struct SessionRepository {
    store: SharedStore,
}

impl SessionRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn find(&self, user_id: &str) -> Result<Option<Session>, AppError> {
        let sessions = SESSIONS.load(self.store.as_ref()).await?;
        Ok(sessions.into_iter().find(|s| s.user_id == user_id))
    }

    /// Substitui a sessão do usuário (ou cria, se for a primeira).
    pub async fn upsert(&self, session: Session) -> Result<Session, AppError> {
        SESSIONS
            .update(self.store.as_ref(), |sessions| {
                sessions.retain(|s| s.user_id != session.user_id);
                sessions.push(session.clone());
                Ok(session)
            })
            .await
    }

    pub async fn update<F>(&self, user_id: &str, f: F) -> Result<Session, AppError>
    where
        F: FnOnce(&mut Session) + Send,
    {
        SESSIONS
            .update(self.store.as_ref(), |sessions| {
                let session = sessions
                    .iter_mut()
                    .find(|s| s.user_id == user_id)
                    .ok_or(AppError::SessionEnded)?;
                f(session);
                Ok(session.clone())
            })
            .await
    }
}
