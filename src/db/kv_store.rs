// src/db/kv_store.rs

use std::{collections::HashMap, marker::PhantomData, sync::Arc};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use sqlx::{types::Json, PgPool};
use tokio::sync::RwLock;

use crate::common::error::AppError;

// ---
// O contrato do armazenamento
// ---
/// Armazenamento chave-valor. Cada chave guarda um valor JSON inteiro,
/// lido e gravado de uma vez (sem atualização parcial, sem transação).
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, AppError>;
    async fn set(&self, key: &str, value: Value) -> Result<(), AppError>;
    async fn keys(&self) -> Result<Vec<String>, AppError>;
}

pub type SharedStore = Arc<dyn KvStore>;

// ---
// Backend 1: Memória (padrão sem DATABASE_URL, e o usado nos testes)
// ---
#[derive(Default)]
pub struct MemoryKvStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, AppError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), AppError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, AppError> {
        let mut keys: Vec<String> = self.entries.read().await.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

// ---
// Backend 2: Postgres (tabela kv_entries, valor em JSONB)
// ---
#[derive(Clone)]
pub struct PgKvStore {
    pool: PgPool,
}

impl PgKvStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KvStore for PgKvStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, AppError> {
        let row: Option<(Json<Value>,)> =
            sqlx::query_as("SELECT value FROM kv_entries WHERE key = $1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(Json(value),)| value))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), AppError> {
        // UPSERT: a coleção inteira é sobrescrita
        sqlx::query(
            r#"
            INSERT INTO kv_entries (key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key)
            DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
            "#,
        )
            .bind(key)
            .bind(Json(value))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, AppError> {
        let rows: Vec<(String,)> = sqlx::query_as("SELECT key FROM kv_entries ORDER BY key")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(|(key,)| key).collect())
    }
}

// ---
// Coleção tipada sobre uma chave
// ---
/// Uma chave do store que guarda um `Vec<T>`. Chave ausente = coleção vazia.
pub struct Collection<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Collection<T> {
    pub const fn new(name: &'static str) -> Self {
        Self { name, _marker: PhantomData }
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub async fn load(&self, store: &dyn KvStore) -> Result<Vec<T>, AppError> {
        match store.get(self.name).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    pub async fn save(&self, store: &dyn KvStore, items: &[T]) -> Result<(), AppError> {
        store.set(self.name, serde_json::to_value(items)?).await
    }

    /// Lê, aplica a alteração e grava a coleção inteira de volta.
    pub async fn update<R>(
        &self,
        store: &dyn KvStore,
        f: impl FnOnce(&mut Vec<T>) -> Result<R, AppError>,
    ) -> Result<R, AppError> {
        let mut items = self.load(store).await?;
        let result = f(&mut items)?;
        self.save(store, &items).await?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: u32,
    }

    const NOTES: Collection<Note> = Collection::new("notes");

    #[tokio::test]
    async fn missing_key_loads_as_empty_collection() {
        let store = MemoryKvStore::new();

        let notes = NOTES.load(&store).await.unwrap();

        assert!(notes.is_empty());
        assert!(store.keys().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_writes_the_whole_collection_back() {
        let store = MemoryKvStore::new();
        NOTES.save(&store, &[Note { id: 1 }]).await.unwrap();

        let len = NOTES
            .update(&store, |notes| {
                notes.push(Note { id: 2 });
                Ok(notes.len())
            })
            .await
            .unwrap();

        assert_eq!(len, 2);
        assert_eq!(NOTES.load(&store).await.unwrap(), vec![Note { id: 1 }, Note { id: 2 }]);
        assert_eq!(store.keys().await.unwrap(), vec!["notes".to_string()]);
    }

    #[tokio::test]
    async fn failed_update_leaves_store_untouched() {
        let store = MemoryKvStore::new();
        NOTES.save(&store, &[Note { id: 1 }]).await.unwrap();

        let result: Result<(), AppError> = NOTES
            .update(&store, |notes| {
                notes.clear();
                Err(AppError::UserNotFound)
            })
            .await;

        assert!(matches!(result, Err(AppError::UserNotFound)));
        assert_eq!(NOTES.load(&store).await.unwrap(), vec![Note { id: 1 }]);
    }

    #[tokio::test]
    async fn corrupted_value_surfaces_as_serialization_error() {
        let store = MemoryKvStore::new();
        store.set("notes", serde_json::json!({"not": "a list"})).await.unwrap();

        let result = NOTES.load(&store).await;

        assert!(matches!(result, Err(AppError::SerializationError(_))));
    }
}
