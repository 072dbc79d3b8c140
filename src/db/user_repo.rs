// src/db/user_repo.rs

use crate::{
    common::error::AppError,
    db::{collections::USERS, SharedStore},
    models::auth::User,
};

/// Comparação de e-mail tolerante a caixa e espaços.
pub fn same_email(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

// O repositório de usuários, responsável por todas as interações com a coleção 'users'
#[derive(Clone)]
pub struct UserRepository {
    store: SharedStore,
}

impl UserRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<User>, AppError> {
        USERS.load(self.store.as_ref()).await
    }

    pub async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<User>, AppError> {
        let users = self.list_all().await?;
        Ok(users.into_iter().filter(|u| u.tenant_id == tenant_id).collect())
    }

    // Busca um usuário pelo seu ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let users = self.list_all().await?;
        Ok(users.into_iter().find(|u| u.id == id))
    }

    // Busca um usuário ativo pelo e-mail, em qualquer tenant
    pub async fn find_active_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.list_all().await?;
        Ok(users
            .into_iter()
            .find(|u| u.active && same_email(&u.email, email)))
    }

    // Busca um usuário ativo pelo e-mail dentro de um tenant específico
    pub async fn find_active_by_email_in_tenant(
        &self,
        email: &str,
        tenant_id: &str,
    ) -> Result<Option<User>, AppError> {
        let users = self.list_all().await?;
        Ok(users
            .into_iter()
            .find(|u| u.active && u.tenant_id == tenant_id && same_email(&u.email, email)))
    }

    // Cria um novo usuário. E-mail repetido (em qualquer tenant) é recusado.
    pub async fn create(&self, user: User) -> Result<User, AppError> {
        USERS
            .update(self.store.as_ref(), |users| {
                if users.iter().any(|u| same_email(&u.email, &user.email)) {
                    return Err(AppError::EmailAlreadyExists);
                }
                users.push(user.clone());
                Ok(user)
            })
            .await
    }

    /// Aplica `f` ao usuário e grava a coleção.
    pub async fn update<F>(&self, id: &str, f: F) -> Result<User, AppError>
    where
        F: FnOnce(&mut User) + Send,
    {
        USERS
            .update(self.store.as_ref(), |users| {
                let user = users
                    .iter_mut()
                    .find(|u| u.id == id)
                    .ok_or(AppError::UserNotFound)?;
                f(user);
                Ok(user.clone())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fixtures, TestSetup};

    #[tokio::test]
    async fn email_lookup_ignores_case_and_whitespace() {
        let setup = TestSetup::new().await;
        let repo = UserRepository::new(setup.store.clone());
        repo.create(fixtures::user("u1", "Alex@Example.com", "t1")).await.unwrap();

        let found = repo.find_active_by_email("  alex@example.COM ").await.unwrap();

        assert_eq!(found.map(|u| u.id), Some("u1".to_string()));
    }

    #[tokio::test]
    async fn inactive_users_are_not_resolved_by_email() {
        let setup = TestSetup::new().await;
        let repo = UserRepository::new(setup.store.clone());
        let mut user = fixtures::user("u1", "alex@example.com", "t1");
        user.active = false;
        repo.create(user).await.unwrap();

        assert!(repo.find_active_by_email("alex@example.com").await.unwrap().is_none());
        assert!(repo
            .find_active_by_email_in_tenant("alex@example.com", "t1")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let setup = TestSetup::new().await;
        let repo = UserRepository::new(setup.store.clone());
        repo.create(fixtures::user("u1", "alex@example.com", "t1")).await.unwrap();

        let result = repo.create(fixtures::user("u2", "ALEX@example.com", "t2")).await;

        assert!(matches!(result, Err(AppError::EmailAlreadyExists)));
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_of_unknown_user_fails() {
        let setup = TestSetup::new().await;
        let repo = UserRepository::new(setup.store.clone());

        let result = repo.update("ghost", |u| u.active = false).await;

        assert!(matches!(result, Err(AppError::UserNotFound)));
    }
}
