// src/db/badge_repo.rs

use crate::{
    common::error::AppError,
    db::{
        collections::{BADGES, BADGE_AWARDS},
        SharedStore,
    },
    models::badge::{Badge, BadgeAward},
};

#[derive(Clone)]
pub struct BadgeRepository {
    store: SharedStore,
}

impl BadgeRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list_badges(&self) -> Result<Vec<Badge>, AppError> {
        BADGES.load(self.store.as_ref()).await
    }

    pub async fn list_awards(&self) -> Result<Vec<BadgeAward>, AppError> {
        BADGE_AWARDS.load(self.store.as_ref()).await
    }
}
