use tracing::{debug, error, info};

pub fn log_config_loaded(base_url: &str) {
    info!("Configuration loaded successfully - Teamwork: {}", base_url);
}

pub fn log_run_started() {
    info!("🚀 Buscando tarefas sem responsável no Teamwork");
}

pub fn log_tasks_fetched(count: usize) {
    info!("📥 {} tarefas sem responsável encontradas", count);
}

pub fn log_project_lookup(task_id: &str, project_name: &str) {
    debug!("Task {} -> Project: {}", task_id, project_name);
}

pub fn log_tasks_enriched(count: usize) {
    info!("📋 Nome do projeto resolvido para {} tarefas", count);
}

pub fn log_digest_sent() {
    info!("✅ Message sent to Slack");
}

pub fn log_error(message: &str) {
    error!("{}", message);
}
