// src/common/i18n.rs

use std::collections::HashMap;

const DEFAULT_LANG: &str = "en";

// (chave, inglês, português)
const MESSAGES: &[(&str, &str, &str)] = &[
    ("validation_failed", "One or more fields are invalid.", "Um ou mais campos são inválidos."),
    ("invalid_oo_code", "Invalid OO Code. Please check and try again.", "Código OO inválido. Verifique e tente novamente."),
    ("developer_access_denied", "Developer access is not available for this account.", "O acesso de desenvolvedor não está disponível para esta conta."),
    ("developer_access_not_configured", "Developer access not configured.", "Acesso de desenvolvedor não configurado."),
    ("email_already_exists", "User with this email already exists.", "Já existe um usuário com este e-mail."),
    ("invalid_token", "Invalid or missing authentication token.", "Token de autenticação inválido ou ausente."),
    ("session_ended", "Your session has ended. Please sign in again.", "Sua sessão foi encerrada. Entre novamente."),
    ("user_not_found", "User not found.", "Usuário não encontrado."),
    ("tenant_not_found", "Organization not found.", "Organização não encontrada."),
    ("ticket_not_found", "Maintenance ticket not found.", "Chamado de manutenção não encontrado."),
    ("permission_denied", "You do not have access to this area.", "Você não tem acesso a esta área."),
    ("view_not_available", "This view is not available for your account.", "Esta tela não está disponível para sua conta."),
    ("unknown_avatar", "That avatar is not available.", "Este avatar não está disponível."),
    ("file_too_large", "File size must be less than 5MB.", "O arquivo deve ter menos de 5MB."),
    ("unsupported_file_type", "Only PNG, JPEG, and SVG files are allowed.", "Apenas arquivos PNG, JPEG e SVG são permitidos."),
    ("oo_code_required", "An OO Code is required.", "O código OO é obrigatório."),
    ("position_not_allowed", "That position cannot be assigned here.", "Este cargo não pode ser atribuído aqui."),
    ("internal_error", "An error occurred. Please try again.", "Ocorreu um erro. Tente novamente."),
];

/// Catálogo de mensagens por idioma, montado uma vez na inicialização.
#[derive(Debug, Clone)]
pub struct I18nStore {
    messages: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl Default for I18nStore {
    fn default() -> Self {
        let mut en = HashMap::new();
        let mut pt = HashMap::new();
        for (key, en_msg, pt_msg) in MESSAGES {
            en.insert(*key, *en_msg);
            pt.insert(*key, *pt_msg);
        }

        let mut messages = HashMap::new();
        messages.insert("en", en);
        messages.insert("pt", pt);
        Self { messages }
    }
}

impl I18nStore {
    /// Busca a mensagem no idioma pedido, caindo para inglês e, por fim, na própria chave.
    pub fn translate<'a>(&'a self, lang: &str, key: &'a str) -> &'a str {
        self.messages
            .get(lang)
            .and_then(|table| table.get(key))
            .or_else(|| self.messages.get(DEFAULT_LANG).and_then(|table| table.get(key)))
            .copied()
            .unwrap_or(key)
    }
}
