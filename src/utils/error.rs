use teamwork::TeamworkError;
use thiserror::Error;

/// Erros de uma execução do notificador
///
/// Nenhum deles é recuperado internamente: qualquer variante aborta a
/// execução e termina o processo com código de saída diferente de zero.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Teamwork unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Teamwork returned a malformed response: {0}")]
    SourceMalformed(String),

    #[error("Task not found in Teamwork: {0}")]
    TaskNotFound(String),

    #[error("Slack delivery failed: {0}")]
    DeliveryFailed(String),
}

impl From<TeamworkError> for AppError {
    fn from(err: TeamworkError) -> Self {
        match err {
            TeamworkError::HttpError(_)
            | TeamworkError::ApiError { .. }
            | TeamworkError::ConfigError(_) => AppError::SourceUnavailable(err.to_string()),
            TeamworkError::MalformedResponse(_) | TeamworkError::JsonError(_) => {
                AppError::SourceMalformed(err.to_string())
            }
            TeamworkError::NotFound(task_id) => AppError::TaskNotFound(task_id),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teamwork_errors_map_to_taxonomy() {
        let api = AppError::from(TeamworkError::ApiError {
            status: 500,
            message: "boom".to_string(),
        });
        assert!(matches!(api, AppError::SourceUnavailable(ref msg) if msg.contains("500")));

        let malformed = AppError::from(TeamworkError::MalformedResponse("missing 'todo-items'".to_string()));
        assert!(matches!(malformed, AppError::SourceMalformed(_)));

        let not_found = AppError::from(TeamworkError::NotFound("42".to_string()));
        assert!(matches!(not_found, AppError::TaskNotFound(ref id) if id == "42"));
    }

    #[test]
    fn test_display_names_the_stage() {
        let err = AppError::DeliveryFailed("status 403: invalid_token".to_string());
        assert_eq!(err.to_string(), "Slack delivery failed: status 403: invalid_token");
    }
}
