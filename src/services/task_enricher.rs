//! Enriquecimento das tarefas sem responsável com o nome do projeto
//!
//! Uma consulta por tarefa, todas em paralelo. O resultado só é produzido
//! quando todas terminam; a primeira falha derruba o enriquecimento inteiro.

use futures_util::future::try_join_all;
use teamwork::Task;

use super::task_fetcher::TaskSource;
use crate::models::EnrichedTask;
use crate::utils::logging::{log_project_lookup, log_tasks_enriched, log_tasks_fetched};
use crate::utils::{AppError, AppResult};

/// Resolve o nome do projeto de cada tarefa
///
/// A saída mantém a ordem de `tasks`, independente da ordem em que as
/// consultas terminam. Consultas ainda em andamento quando outra falha são
/// descartadas.
pub async fn enrich_tasks<S: TaskSource>(source: &S, tasks: Vec<Task>) -> AppResult<Vec<EnrichedTask>> {
    let lookups = tasks.into_iter().map(|task| async move {
        let project_name = source.get_project_name(&task.id).await?;
        log_project_lookup(&task.id, &project_name);
        Ok::<_, AppError>(EnrichedTask::new(task, project_name))
    });

    let enriched = try_join_all(lookups).await?;
    log_tasks_enriched(enriched.len());

    Ok(enriched)
}

/// Busca as tarefas sem responsável e já devolve enriquecidas
pub async fn fetch_and_enrich<S: TaskSource>(source: &S) -> AppResult<Vec<EnrichedTask>> {
    let tasks = source.list_unassigned_tasks().await?;
    log_tasks_fetched(tasks.len());

    enrich_tasks(source, tasks).await
}
