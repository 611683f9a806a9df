//! Cliente mínimo da API do Teamwork
//!
//! Apenas o que o notificador de tarefas sem responsável precisa:
//!
//! - `GET /tasks.json?completed=false` — tarefas em aberto
//! - `GET /tasks/{id}.json` — detalhe da tarefa (nome do projeto)
//!
//! # Exemplo Básico
//!
//! ```rust,ignore
//! use teamwork::tasks::TaskManager;
//!
//! #[tokio::main]
//! async fn main() -> teamwork::Result<()> {
//!     let api_key = std::env::var("TEAMWORK_API_KEY")
//!         .expect("TEAMWORK_API_KEY não configurado");
//!
//!     let manager = TaskManager::from_api_key("https://jaladesign.teamwork.com", api_key)?;
//!     for task in manager.list_unassigned_tasks().await? {
//!         let project = manager.get_project_name(&task.id).await?;
//!         println!("{} - {}", project, task.content);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod tasks;
pub mod types;

// Re-exports principais
pub use client::TeamworkClient;
pub use error::{Result, TeamworkError};
pub use tasks::TaskManager;
pub use types::{Task, TaskDetail};
