use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::utils::{AppError, AppResult};

pub const DEFAULT_TEAMWORK_URL: &str = "https://jaladesign.teamwork.com";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub teamwork: TeamworkSettings,
    #[serde(default)]
    pub slack: SlackSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TeamworkSettings {
    #[serde(default)]
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct SlackSettings {
    #[serde(default)]
    pub webhook_url: String,
}

/// Valores vindos da linha de comando; têm prioridade sobre arquivo e ambiente
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub teamwork_api_key: Option<String>,
    pub teamwork_base_url: Option<String>,
    pub slack_webhook_url: Option<String>,
}

impl Settings {
    /// Carrega as configurações em camadas:
    /// padrão -> `config/default` (opcional) -> `NOTIFIER__*` -> linha de comando
    pub fn new(overrides: SettingsOverrides) -> AppResult<Self> {
        let mut builder = Config::builder()
            .set_default("teamwork.base_url", DEFAULT_TEAMWORK_URL)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("NOTIFIER").separator("__"));

        if let Some(api_key) = overrides.teamwork_api_key {
            builder = builder.set_override("teamwork.api_key", api_key)?;
        }
        if let Some(base_url) = overrides.teamwork_base_url {
            builder = builder.set_override("teamwork.base_url", base_url)?;
        }
        if let Some(webhook_url) = overrides.slack_webhook_url {
            builder = builder.set_override("slack.webhook_url", webhook_url)?;
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;

        Ok(settings)
    }

    /// Garante que credenciais e destino estão preenchidos
    pub fn validate(&self) -> AppResult<()> {
        if self.teamwork.api_key.trim().is_empty() {
            return Err(AppError::ConfigurationMissing("TEAMWORK_API_KEY".to_string()));
        }
        if self.slack.webhook_url.trim().is_empty() {
            return Err(AppError::ConfigurationMissing("SLACK_WEBHOOK_URL".to_string()));
        }
        if self.teamwork.base_url.trim().is_empty() {
            return Err(AppError::ConfigurationMissing("teamwork.base_url".to_string()));
        }

        Ok(())
    }
}
