// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::{
    common::i18n::I18nStore,
    middleware::i18n::Locale,
    models::session::View,
};

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Cada variante tem uma chave de tradução; o cliente sempre recebe
// uma única mensagem no formato { "error": "..." }.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Código OO inválido ou inativo")]
    InvalidOoCode,

    #[error("E-mail fora da lista de desenvolvedores")]
    DeveloperAccessDenied,

    #[error("Código de desenvolvedor não configurado")]
    DeveloperAccessNotConfigured,

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Sessão encerrada")]
    SessionEnded,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Tenant não encontrado")]
    TenantNotFound,

    #[error("Chamado de manutenção não encontrado")]
    TicketNotFound,

    #[error("Acesso negado: requer '{0}'")]
    PermissionDenied(&'static str),

    #[error("Visão '{0:?}' indisponível para este usuário")]
    ViewNotAvailable(View),

    #[error("Avatar desconhecido: {0}")]
    UnknownAvatar(String),

    #[error("Arquivo maior que o limite permitido")]
    FileTooLarge,

    #[error("Tipo de arquivo não suportado: {0}")]
    UnsupportedFileType(String),

    #[error("Código OO obrigatório")]
    OoCodeRequired,

    #[error("Cargo não permitido na criação de usuários")]
    PositionNotAllowed,

    // Variante para erros do backend Postgres
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Coleções corrompidas ou registros que não batem com o modelo
    #[error("Erro de serialização: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

// Erro já traduzido, pronto para virar resposta HTTP.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.error, "details": details }),
            None => json!({ "error": self.error }),
        };
        (self.status, Json(body)).into_response()
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::InvalidOoCode
            | AppError::UnknownAvatar(_)
            | AppError::FileTooLarge
            | AppError::UnsupportedFileType(_)
            | AppError::OoCodeRequired
            | AppError::PositionNotAllowed => StatusCode::BAD_REQUEST,
            AppError::InvalidToken | AppError::SessionEnded => StatusCode::UNAUTHORIZED,
            AppError::DeveloperAccessDenied
            | AppError::PermissionDenied(_)
            | AppError::ViewNotAvailable(_) => StatusCode::FORBIDDEN,
            AppError::UserNotFound | AppError::TenantNotFound | AppError::TicketNotFound => {
                StatusCode::NOT_FOUND
            }
            AppError::EmailAlreadyExists => StatusCode::CONFLICT,
            AppError::DeveloperAccessNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            AppError::DatabaseError(_)
            | AppError::SerializationError(_)
            | AppError::JwtError(_)
            | AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Chave usada para buscar a mensagem no `I18nStore`.
    pub fn message_key(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation_failed",
            AppError::InvalidOoCode => "invalid_oo_code",
            AppError::DeveloperAccessDenied => "developer_access_denied",
            AppError::DeveloperAccessNotConfigured => "developer_access_not_configured",
            AppError::EmailAlreadyExists => "email_already_exists",
            AppError::InvalidToken => "invalid_token",
            AppError::SessionEnded => "session_ended",
            AppError::UserNotFound => "user_not_found",
            AppError::TenantNotFound => "tenant_not_found",
            AppError::TicketNotFound => "ticket_not_found",
            AppError::PermissionDenied(_) => "permission_denied",
            AppError::ViewNotAvailable(_) => "view_not_available",
            AppError::UnknownAvatar(_) => "unknown_avatar",
            AppError::FileTooLarge => "file_too_large",
            AppError::UnsupportedFileType(_) => "unsupported_file_type",
            AppError::OoCodeRequired => "oo_code_required",
            AppError::PositionNotAllowed => "position_not_allowed",
            AppError::DatabaseError(_)
            | AppError::SerializationError(_)
            | AppError::JwtError(_)
            | AppError::InternalServerError(_) => "internal_error",
        }
    }

    /// Traduz o erro para o idioma do cliente.
    pub fn to_api_error(&self, locale: &Locale, i18n: &I18nStore) -> ApiError {
        let status = self.status();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            // O `tracing` loga a mensagem detalhada; o cliente só vê a genérica.
            tracing::error!("Erro Interno do Servidor: {}", self);
        } else {
            tracing::debug!(status = %status, "{}", self);
        }

        let details = match self {
            AppError::ValidationError(errors) => Some(validation_details(errors)),
            _ => None,
        };

        ApiError {
            status,
            error: i18n.translate(&locale.0, self.message_key()).to_string(),
            details,
        }
    }
}

fn validation_details(errors: &validator::ValidationErrors) -> Value {
    let mut details = serde_json::Map::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<Value> = field_errors
            .iter()
            .filter_map(|e| e.message.as_ref().map(|m| Value::String(m.to_string())))
            .collect();
        details.insert(field.to_string(), Value::Array(messages));
    }
    Value::Object(details)
}

// Fallback para quando não temos o idioma (ex.: middleware): responde em inglês.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_api_error(&Locale::default(), &I18nStore::default())
            .into_response()
    }
}
