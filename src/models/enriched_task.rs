//! Tarefa sem responsável acompanhada do nome do projeto
//! Produzida pelo enriquecimento e consumida apenas pela formatação do resumo

use teamwork::Task;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedTask {
    pub task: Task,
    pub project_name: String,
}

impl EnrichedTask {
    pub fn new(task: Task, project_name: impl Into<String>) -> Self {
        Self {
            task,
            project_name: project_name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.task.id
    }

    pub fn content(&self) -> &str {
        &self.task.content
    }
}
