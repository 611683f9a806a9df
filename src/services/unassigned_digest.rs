//! Execução única do notificador
//!
//! Fluxo linear, sem retry:
//! 1. Busca tarefas em aberto sem responsável
//! 2. Resolve o nome do projeto de cada uma (em paralelo)
//! 3. Formata o resumo
//! 4. Envia para o Slack
//!
//! Qualquer erro interrompe a execução antes da etapa seguinte; ou o resumo
//! completo é entregue ou nada é.

use super::digest::format_digest;
use super::slack_webhook::Notifier;
use super::task_enricher::fetch_and_enrich;
use super::task_fetcher::TaskSource;
use crate::utils::logging::{log_digest_sent, log_run_started};
use crate::utils::AppResult;

/// Roda o pipeline uma vez e devolve a mensagem enviada
pub async fn send_unassigned_tasks_digest<S, N>(source: &S, notifier: &N) -> AppResult<String>
where
    S: TaskSource,
    N: Notifier,
{
    log_run_started();

    let tasks = fetch_and_enrich(source).await?;
    let message = format_digest(&tasks);

    notifier.send(&message).await?;
    log_digest_sent();

    Ok(message)
}
