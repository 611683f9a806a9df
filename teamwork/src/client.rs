//! Cliente HTTP para a API do Teamwork

use crate::error::{Result, TeamworkError};
use reqwest::{Client as HttpClient, Response};
use serde_json::Value;

/// Cliente para interagir com a API do Teamwork
///
/// Toda requisição é autenticada com HTTP Basic: a API key vai como usuário
/// e a senha fica vazia.
#[derive(Clone)]
pub struct TeamworkClient {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
}

impl TeamworkClient {
    /// Cria um novo cliente Teamwork
    ///
    /// # Argumentos
    ///
    /// * `base_url` - URL da conta, ex: `https://jaladesign.teamwork.com`
    /// * `api_key` - API key do usuário
    ///
    /// Nenhum timeout é configurado: uma chamada travada bloqueia a execução.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let http_client = HttpClient::builder()
            .build()
            .map_err(|e| TeamworkError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(TeamworkError::ConfigError("API key is empty".to_string()));
        }

        Ok(Self {
            http_client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Executa uma requisição GET autenticada
    pub(crate) async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .http_client
            .get(&url)
            .basic_auth(&self.api_key, Some(""))
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Executa uma requisição GET e devolve o corpo como JSON genérico
    pub(crate) async fn get_json(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Value> {
        let response = self.get(endpoint, query).await?;
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            TeamworkError::MalformedResponse(format!("{} did not return JSON: {}", endpoint, e))
        })
    }

    /// Processa a resposta HTTP e trata erros
    async fn handle_response(&self, response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let status_code = status.as_u16();
        let error_body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

        tracing::debug!("Teamwork API error ({}): {}", status_code, error_body);

        Err(TeamworkError::ApiError {
            status: status_code,
            message: extract_error_message(&error_body),
        })
    }

    /// Obtém a URL base da conta
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Tenta extrair a mensagem de erro do JSON; senão usa o corpo bruto
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.get("MESSAGE")
                .or_else(|| json.get("message"))
                .or_else(|| json.get("error"))
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| body.to_string())
}
