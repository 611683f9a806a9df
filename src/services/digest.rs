//! Montagem da mensagem de resumo enviada ao Slack

use crate::models::EnrichedTask;

pub const DIGEST_HEADER: &str = "List of unassigned tasks:";

/// Formata a lista de tarefas enriquecidas em uma única mensagem
///
/// Cabeçalho e uma linha por tarefa, na ordem recebida:
///
/// ```text
/// List of unassigned tasks:
/// • Project: Website Redesign - Fix bug
/// ```
///
/// Cada linha de tarefa termina com um espaço antes da quebra de linha.
pub fn format_digest(tasks: &[EnrichedTask]) -> String {
    let mut message = format!("{}\n", DIGEST_HEADER);

    for task in tasks {
        message.push_str(&format!("• Project: {} - {} \n", task.project_name, task.content()));
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use teamwork::Task;

    #[test]
    fn test_format_digest_lines() {
        let tasks = vec![
            EnrichedTask::new(Task::new("1", "Fix bug"), "Website Redesign"),
            EnrichedTask::new(Task::new("3", "Deploy"), "Ops"),
        ];

        assert_eq!(
            format_digest(&tasks),
            "List of unassigned tasks:\n\
             • Project: Website Redesign - Fix bug \n\
             • Project: Ops - Deploy \n"
        );
    }

    #[test]
    fn test_format_digest_empty_is_header_only() {
        assert_eq!(format_digest(&[]), "List of unassigned tasks:\n");
    }

    #[test]
    fn test_format_digest_is_deterministic() {
        let tasks = vec![
            EnrichedTask::new(Task::new("1", "Fix bug"), "Website Redesign"),
            EnrichedTask::new(Task::new("2", "Ação & <revisão>"), "Área Interna"),
        ];

        assert_eq!(format_digest(&tasks), format_digest(&tasks.clone()));
    }
}
