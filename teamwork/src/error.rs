//! Tipos de erro para o crate teamwork

use thiserror::Error;

/// Erros do cliente Teamwork
#[derive(Debug, Error)]
pub enum TeamworkError {
    /// Erro de requisição HTTP (rede, DNS, conexão recusada)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Erro da API do Teamwork (status code não-2xx)
    #[error("Teamwork API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Tarefa não encontrada (404)
    #[error("Task not found: {0}")]
    NotFound(String),

    /// Resposta sem o campo esperado
    #[error("Malformed Teamwork response: {0}")]
    MalformedResponse(String),

    /// Erro de parsing JSON
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Erro de configuração
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, TeamworkError>;
