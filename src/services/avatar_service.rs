// src/services/avatar_service.rs

use crate::{
    common::error::AppError,
    models::{
        auth::{AvatarSource, User},
        avatar::{AvatarCategory, AvatarItem, AvatarPack},
    },
};

/// Tamanho máximo de um avatar enviado pelo usuário.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub const ALLOWED_UPLOAD_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/svg+xml"];

// (id, rótulo, asset, categoria): 3 vacas (sem o Coach Moo) e 3 galinhas
const BARNYARD_SIX: [(&str, &str, &str, AvatarCategory); 6] = [
    ("cow_a", "Cow A", "/assets/avatars/cow_a.svg", AvatarCategory::Cow),
    ("cow_b", "Cow B", "/assets/avatars/cow_b.svg", AvatarCategory::Cow),
    ("cow_c", "Cow C", "/assets/avatars/cow_c.svg", AvatarCategory::Cow),
    ("chicken_a", "Chicken A", "/assets/avatars/chicken_a.svg", AvatarCategory::Chicken),
    ("chicken_b", "Chicken B", "/assets/avatars/chicken_b.svg", AvatarCategory::Chicken),
    ("chicken_c", "Chicken C", "/assets/avatars/chicken_c.svg", AvatarCategory::Chicken),
];

fn to_item((id, label, asset, category): (&str, &str, &str, AvatarCategory)) -> AvatarItem {
    AvatarItem {
        id: id.to_string(),
        label: label.to_string(),
        asset: asset.to_string(),
        category,
    }
}

pub fn avatar_packs() -> Vec<AvatarPack> {
    vec![AvatarPack {
        name: "Barnyard Six".to_string(),
        description: "Six friendly avatars: 3 cows (not Coach Moo) and 3 chickens.".to_string(),
        items: BARNYARD_SIX.into_iter().map(to_item).collect(),
        exclusions: vec!["coach_moo".to_string()],
    }]
}

pub fn find_avatar(avatar_id: &str) -> Option<AvatarItem> {
    avatar_packs()
        .into_iter()
        .flat_map(|pack| pack.items)
        .find(|item| item.id == avatar_id)
}

/// Escolhe sempre o mesmo avatar para a mesma semente (hash de 32 bits estilo `h*31 + c`).
pub fn deterministic_avatar(seed: &str) -> AvatarItem {
    let hash = seed
        .encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(i32::from(unit))
        });
    let index = (i64::from(hash).unsigned_abs() % BARNYARD_SIX.len() as u64) as usize;
    to_item(BARNYARD_SIX[index])
}

/// URL a exibir: o upload tem prioridade quando a origem é `uploaded`.
pub fn user_avatar_url(user: &User) -> Option<String> {
    match user.avatar_source {
        Some(AvatarSource::Uploaded) => user.avatar_url.clone(),
        Some(AvatarSource::DefaultPack) => user
            .avatar_id
            .as_deref()
            .and_then(find_avatar)
            .map(|item| item.asset),
        None => None,
    }
}

/// Valida o upload e devolve a data URL que será gravada no usuário.
pub fn upload_to_data_url(content_type: &str, data_base64: &str) -> Result<String, AppError> {
    let content_type = content_type.trim().to_lowercase();
    if !ALLOWED_UPLOAD_TYPES.contains(&content_type.as_str()) {
        return Err(AppError::UnsupportedFileType(content_type));
    }

    let data = data_base64.trim();
    if decoded_len(data) > MAX_UPLOAD_BYTES {
        return Err(AppError::FileTooLarge);
    }

    Ok(format!("data:{};base64,{}", content_type, data))
}

// Tamanho decodificado de um base64 sem precisar decodificar
fn decoded_len(data: &str) -> usize {
    let padding = data.bytes().rev().take_while(|b| *b == b'=').count();
    ((data.len() / 4) * 3 + (data.len() % 4).saturating_sub(1)).saturating_sub(padding.min(2))
}
