//! Origem das tarefas: Teamwork
//!
//! `TaskSource` é o ponto de injeção do pipeline. Em produção é o
//! `TaskManager` do crate teamwork; nos testes, fakes em memória.

use std::future::Future;

use teamwork::{Task, TaskManager};

use crate::utils::AppResult;

/// Consultas somente-leitura que o pipeline faz na ferramenta de tarefas
pub trait TaskSource: Send + Sync {
    /// Tarefas em aberto sem responsável, na ordem da API
    fn list_unassigned_tasks(&self) -> impl Future<Output = AppResult<Vec<Task>>> + Send;

    /// Nome do projeto ao qual a tarefa pertence
    fn get_project_name(&self, task_id: &str) -> impl Future<Output = AppResult<String>> + Send;
}

impl TaskSource for TaskManager {
    async fn list_unassigned_tasks(&self) -> AppResult<Vec<Task>> {
        Ok(TaskManager::list_unassigned_tasks(self).await?)
    }

    async fn get_project_name(&self, task_id: &str) -> AppResult<String> {
        Ok(TaskManager::get_project_name(self, task_id).await?)
    }
}
