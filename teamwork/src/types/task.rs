//! Tipos de tarefa do Teamwork
//!
//! A API v1 do Teamwork usa chaves com hífen (`responsible-party-id`,
//! `project-name`) e devolve ids ora como número, ora como string.
//! Aqui tudo é normalizado para `String`.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Tarefa ("todo item") retornada por `GET /tasks.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    #[serde(default, deserialize_with = "string_or_null")]
    pub content: String,

    /// Responsável(is) pela tarefa. Ausente/null/false = ninguém atribuído.
    #[serde(
        rename = "responsible-party-id",
        default,
        deserialize_with = "responsible_party",
        skip_serializing_if = "Option::is_none"
    )]
    pub responsible_party_id: Option<String>,
}

impl Task {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            responsible_party_id: None,
        }
    }

    pub fn with_responsible_party(mut self, responsible_party_id: impl Into<String>) -> Self {
        self.responsible_party_id = Some(responsible_party_id.into());
        self
    }

    /// Uma tarefa está sem responsável quando o campo está ausente ou vazio
    pub fn is_unassigned(&self) -> bool {
        self.responsible_party_id
            .as_deref()
            .map_or(true, |id| id.trim().is_empty())
    }
}

/// Detalhe de uma tarefa retornado por `GET /tasks/{id}.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetail {
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub id: Option<String>,

    #[serde(default)]
    pub content: Option<String>,

    #[serde(rename = "project-id", default, deserialize_with = "optional_string_or_number")]
    pub project_id: Option<String>,

    #[serde(rename = "project-name", default)]
    pub project_name: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    optional_string_or_number(deserializer)?
        .ok_or_else(|| de::Error::custom("expected string or number, found null"))
}

fn string_or_null<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Só string ou número identificam um responsável; qualquer outro valor
/// (false, lista, objeto) conta como não atribuído
fn responsible_party<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn optional_string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected string or number, found {}",
            other
        ))),
    }
}
