// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::tenancy::Tenant;

// ---
// 1. Cargos
// ---
// Serializados com o nome exibido na interface ("District Manager", ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RoleName {
    Owner,
    #[serde(rename = "District Manager")]
    DistrictManager,
    #[serde(rename = "General Manager")]
    GeneralManager,
    #[serde(rename = "Team Lead")]
    TeamLead,
    #[serde(rename = "Team Member")]
    TeamMember,
    Trainee,
    Support,
    Developer,
}

impl RoleName {
    /// Cargos que um Owner/DM (ou o console dev) pode atribuir a um usuário novo.
    pub const CREATABLE_POSITIONS: [RoleName; 5] = [
        RoleName::TeamMember,
        RoleName::TeamLead,
        RoleName::GeneralManager,
        RoleName::DistrictManager,
        RoleName::Owner,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoleName::Owner => "Owner",
            RoleName::DistrictManager => "District Manager",
            RoleName::GeneralManager => "General Manager",
            RoleName::TeamLead => "Team Lead",
            RoleName::TeamMember => "Team Member",
            RoleName::Trainee => "Trainee",
            RoleName::Support => "Support",
            RoleName::Developer => "Developer",
        }
    }

    /// Owner e District Manager enxergam a visão analítica.
    pub fn is_owner_level(&self) -> bool {
        matches!(self, RoleName::Owner | RoleName::DistrictManager)
    }

    pub fn is_developer(&self) -> bool {
        matches!(self, RoleName::Developer)
    }

    /// Quem pode abrir chamados de manutenção para o time dev.
    pub fn is_manager(&self) -> bool {
        matches!(
            self,
            RoleName::Owner | RoleName::DistrictManager | RoleName::GeneralManager
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AvatarSource {
    DefaultPack,
    Uploaded,
}

// ---
// 2. User
// ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(example = "test_user_1")]
    pub id: String,

    #[schema(example = "testuser@chickentrainer.com")]
    pub email: String,

    #[schema(example = "Alex Johnson")]
    pub display_name: String,

    pub role: RoleName,

    // O código OO usado para entrar (ou herdado de quem criou o usuário)
    pub oo_code: String,
    pub tenant_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,

    pub active: bool,
    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_source: Option<AvatarSource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_badge_id: Option<String>,
}

impl User {
    pub fn first_name(&self) -> &str {
        self.display_name.split(' ').next().unwrap_or(&self.display_name)
    }

    /// "Sarah Williams" -> "SW"
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

// Cadastro feito por um dono/gerente distrital ou pelo console dev
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    #[schema(example = "Jamie")]
    pub first_name: String,

    #[validate(length(min = 1, message = "O sobrenome é obrigatório."))]
    #[schema(example = "Rivera")]
    pub last_name: String,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "jamie@chickentrainer.com")]
    pub email: String,

    pub position: RoleName,

    // Vira o store_id do usuário
    #[serde(default)]
    pub location: Option<String>,

    // Obrigatório quando quem cadastra é um desenvolvedor
    #[serde(default)]
    #[schema(example = "TEST123")]
    pub oo_code: Option<String>,
}

impl CreateUserPayload {
    /// Remove espaços nas pontas antes da validação (" " não conta como nome).
    pub fn trimmed(self) -> Self {
        let trim_opt = |value: Option<String>| {
            value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
        };

        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            position: self.position,
            location: trim_opt(self.location),
            oo_code: trim_opt(self.oo_code),
        }
    }
}

// ---
// 3. SSO simulado
// ---
// O que o "Google" devolve. Também é o corpo do primeiro passo de login.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SsoProfile {
    #[validate(length(min = 1, message = "O e-mail é obrigatório."))]
    #[schema(example = "samuelosorioperkins@gmail.com")]
    pub email: String,

    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    #[schema(example = "Samuel Perkins")]
    pub name: String,

    #[serde(default)]
    pub avatar: Option<String>,
}

// Segundo passo: o perfil do SSO + o código OO digitado
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OoCodePayload {
    #[validate(nested)]
    pub profile: SsoProfile,

    #[validate(length(min = 1, message = "O código OO é obrigatório."))]
    #[schema(example = "TEST123")]
    pub code: String,
}

// ---
// 4. Resultado da autenticação
// ---
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AuthOutcome {
    // Usuário resolvido: sessão criada e token emitido
    Authenticated {
        token: String,
        user: User,
        tenant: Tenant,
    },
    // Nenhum usuário ativo com este e-mail: pedir o código OO
    CodeRequired { email: String, name: String },
    // Código válido, mas não há conta neste tenant (falar com o administrador)
    CodeAccepted { tenant: Tenant },
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (ID do usuário)
    pub tid: String, // Tenant do usuário no momento do login
    pub sid: String, // Sessão aberta por este login
    pub exp: usize,  // Expiration time (quando o token expira)
    pub iat: usize,  // Issued At (quando o token foi criado)
}
