// src/models/avatar.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AvatarCategory {
    Cow,
    Chicken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvatarItem {
    #[schema(example = "cow_a")]
    pub id: String,
    pub label: String,
    pub asset: String,
    pub category: AvatarCategory,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvatarPack {
    pub name: String,
    pub description: String,
    pub items: Vec<AvatarItem>,
    pub exclusions: Vec<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectAvatarPayload {
    #[validate(length(min = 1, message = "Escolha um avatar."))]
    #[schema(example = "chicken_b")]
    pub avatar_id: String,
}

// Upload de imagem própria (conteúdo em base64, vira data URL)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadAvatarPayload {
    #[validate(length(min = 1, message = "O tipo do arquivo é obrigatório."))]
    #[schema(example = "image/png")]
    pub content_type: String,

    #[validate(length(min = 1, message = "O conteúdo do arquivo é obrigatório."))]
    pub data_base64: String,
}
