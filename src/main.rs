//! Notificador de tarefas sem responsável
//!
//! Execução única (não é serviço):
//! - Busca no Teamwork as tarefas em aberto sem responsável
//! - Resolve o nome do projeto de cada uma
//! - Envia o resumo para um canal do Slack via incoming webhook
//!
//! Código de saída 0 quando a mensagem é entregue; 1 em qualquer erro
//! (2 quando faltam flags obrigatórias, via clap).

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use teamwork::TaskManager;
use unassigned_tasks_notifier::config::{Settings, SettingsOverrides};
use unassigned_tasks_notifier::services::{send_unassigned_tasks_digest, SlackWebhook};
use unassigned_tasks_notifier::utils::logging::{log_config_loaded, log_error};
use unassigned_tasks_notifier::utils::AppResult;

/// Envia para o Slack a lista de tarefas sem responsável do Teamwork
#[derive(Parser, Debug)]
#[command(name = "unassigned-tasks-notifier")]
#[command(version)]
#[command(about = "Envia para o Slack a lista de tarefas sem responsável do Teamwork", long_about = None)]
struct Cli {
    /// Slack webhook URL
    #[arg(long = "SLACK_WEBHOOK_URL", env = "SLACK_WEBHOOK_URL", value_name = "URL")]
    slack_webhook_url: String,

    /// Teamwork API key
    #[arg(long = "TEAMWORK_API_KEY", env = "TEAMWORK_API_KEY", value_name = "KEY", hide_env_values = true)]
    teamwork_api_key: String,

    /// URL da conta Teamwork (padrão: https://jaladesign.teamwork.com)
    #[arg(long = "teamwork-url", env = "TEAMWORK_BASE_URL", value_name = "URL")]
    teamwork_url: Option<String>,
}

impl From<Cli> for SettingsOverrides {
    fn from(cli: Cli) -> Self {
        SettingsOverrides {
            teamwork_api_key: Some(cli.teamwork_api_key),
            teamwork_base_url: cli.teamwork_url,
            slack_webhook_url: Some(cli.slack_webhook_url),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // 🔧 .env é opcional; precisa ser carregado antes do clap ler o ambiente
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if dotenv_loaded {
        tracing::debug!("Arquivo .env carregado");
    }

    execute(cli).await
}

/// Roda o pipeline e traduz o resultado em código de saída
async fn execute(cli: Cli) -> ExitCode {
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error(&format!("❌ {}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let settings = Settings::new(cli.into())?;
    log_config_loaded(&settings.teamwork.base_url);

    let source = TaskManager::from_api_key(&settings.teamwork.base_url, &settings.teamwork.api_key)?;
    let notifier = SlackWebhook::new(&settings.slack.webhook_url);

    send_unassigned_tasks_digest(&source, &notifier).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use httpmock::prelude::*;
    use serde_json::json;

    fn cli(teamwork_url: &str, webhook_url: &str) -> Cli {
        Cli {
            slack_webhook_url: webhook_url.to_string(),
            teamwork_api_key: "twp_key".to_string(),
            teamwork_url: Some(teamwork_url.to_string()),
        }
    }

    #[test]
    fn test_cli_parses_required_flags() {
        let cli = Cli::try_parse_from([
            "unassigned-tasks-notifier",
            "--SLACK_WEBHOOK_URL",
            "https://hooks.slack.com/services/T/B/X",
            "--TEAMWORK_API_KEY",
            "twp_key",
        ])
        .unwrap();

        let overrides = SettingsOverrides::from(cli);
        assert_eq!(overrides.slack_webhook_url.as_deref(), Some("https://hooks.slack.com/services/T/B/X"));
        assert_eq!(overrides.teamwork_api_key.as_deref(), Some("twp_key"));
    }

    #[test]
    fn test_cli_help() {
        let err = Cli::try_parse_from(["unassigned-tasks-notifier", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_cli_rejects_missing_api_key() {
        if std::env::var_os("TEAMWORK_API_KEY").is_some() {
            return;
        }

        let err = Cli::try_parse_from([
            "unassigned-tasks-notifier",
            "--SLACK_WEBHOOK_URL",
            "https://hooks.slack.com/services/T/B/X",
        ])
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[tokio::test]
    async fn test_execute_exits_with_failure_when_teamwork_is_unreachable() {
        let slack_server = MockServer::start_async().await;
        let webhook_mock = slack_server
            .mock_async(|when, then| {
                when.method(POST).path("/hook");
                then.status(200).body("ok");
            })
            .await;

        let code = execute(cli("http://127.0.0.1:9", &slack_server.url("/hook"))).await;

        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(webhook_mock.hits_async().await, 0);
    }

    #[tokio::test]
    async fn test_execute_exits_with_failure_when_slack_rejects() {
        let teamwork_server = MockServer::start_async().await;
        teamwork_server
            .mock_async(|when, then| {
                when.method(GET).path("/tasks.json");
                then.status(200).json_body(json!({"todo-items": []}));
            })
            .await;

        let code = execute(cli(&teamwork_server.base_url(), "http://127.0.0.1:9/hook")).await;

        assert_eq!(code, ExitCode::FAILURE);
    }

    #[tokio::test]
    async fn test_execute_exits_with_success_when_digest_is_delivered() {
        let teamwork_server = MockServer::start_async().await;
        teamwork_server
            .mock_async(|when, then| {
                when.method(GET).path("/tasks.json");
                then.status(200).json_body(json!({"todo-items": []}));
            })
            .await;
        let slack_server = MockServer::start_async().await;
        let webhook_mock = slack_server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/hook")
                    .json_body(json!({ "text": "List of unassigned tasks:\n" }));
                then.status(200).body("ok");
            })
            .await;

        let code = execute(cli(&teamwork_server.base_url(), &slack_server.url("/hook"))).await;

        assert_eq!(code, ExitCode::SUCCESS);
        webhook_mock.assert_async().await;
    }
}
