// ============================================================================
// Task Manager - Consultas de tarefas do Teamwork
// ============================================================================
//
// Operações somente-leitura usadas pelo notificador:
//
// 1. **Listagem:**
//    - Tarefas em aberto (list_open_tasks)
//    - Tarefas em aberto sem responsável (list_unassigned_tasks)
//
// 2. **Detalhe:**
//    - Tarefa por ID (get_task)
//    - Nome do projeto da tarefa (get_project_name)
//
// Não há paginação: a primeira página de `tasks.json` é tudo que é lido.

use crate::client::TeamworkClient;
use crate::error::{Result, TeamworkError};
use crate::types::{Task, TaskDetail};

/// Campo da resposta de `GET /tasks.json` com a lista de tarefas
const TASK_LIST_FIELD: &str = "todo-items";
/// Campo da resposta de `GET /tasks/{id}.json` com a tarefa
const TASK_FIELD: &str = "todo-item";

/// Gerenciador de consultas de tarefas do Teamwork
#[derive(Clone)]
pub struct TaskManager {
    client: TeamworkClient,
}

impl TaskManager {
    pub fn new(client: TeamworkClient) -> Self {
        Self { client }
    }

    /// Cria um TaskManager a partir da URL da conta e da API key (conveniência)
    pub fn from_api_key(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::new(TeamworkClient::new(base_url, api_key)?))
    }

    /// Lista as tarefas não concluídas (`completed=false`)
    pub async fn list_open_tasks(&self) -> Result<Vec<Task>> {
        let body = self
            .client
            .get_json("/tasks.json", &[("completed", "false")])
            .await?;

        let items = body.get(TASK_LIST_FIELD).ok_or_else(|| {
            TeamworkError::MalformedResponse(format!("missing '{}' in task list response", TASK_LIST_FIELD))
        })?;

        let tasks: Vec<Task> = serde_json::from_value(items.clone())?;

        tracing::debug!("Teamwork retornou {} tarefas em aberto", tasks.len());

        Ok(tasks)
    }

    /// Lista as tarefas em aberto sem responsável, na ordem da API
    pub async fn list_unassigned_tasks(&self) -> Result<Vec<Task>> {
        let tasks = self.list_open_tasks().await?;

        Ok(tasks.into_iter().filter(Task::is_unassigned).collect())
    }

    /// Busca o detalhe de uma tarefa
    ///
    /// Retorna `NotFound` quando o Teamwork responde 404 para o ID.
    pub async fn get_task(&self, task_id: &str) -> Result<TaskDetail> {
        let endpoint = format!("/tasks/{}.json", urlencoding::encode(task_id));

        let body = match self.client.get_json(&endpoint, &[]).await {
            Ok(body) => body,
            Err(TeamworkError::ApiError { status: 404, .. }) => {
                return Err(TeamworkError::NotFound(task_id.to_string()));
            }
            Err(e) => return Err(e),
        };

        let item = body.get(TASK_FIELD).ok_or_else(|| {
            TeamworkError::MalformedResponse(format!("missing '{}' for task {}", TASK_FIELD, task_id))
        })?;

        Ok(serde_json::from_value(item.clone())?)
    }

    /// Obtém o nome do projeto ao qual a tarefa pertence
    pub async fn get_project_name(&self, task_id: &str) -> Result<String> {
        self.get_task(task_id).await?.project_name.ok_or_else(|| {
            TeamworkError::MalformedResponse(format!("missing 'project-name' for task {}", task_id))
        })
    }
}
