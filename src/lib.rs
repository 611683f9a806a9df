// Biblioteca do notificador de tarefas sem responsável (Teamwork -> Slack)
// Expõe módulos para uso em testes e no binário

pub mod config;
pub mod models;
pub mod services;
pub mod utils;
