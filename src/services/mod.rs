pub mod digest;
pub mod slack_webhook;
pub mod task_enricher;
pub mod task_fetcher;
pub mod unassigned_digest;

pub use digest::format_digest;
pub use slack_webhook::{Notifier, SlackWebhook};
pub use task_enricher::{enrich_tasks, fetch_and_enrich};
pub use task_fetcher::TaskSource;
pub use unassigned_digest::send_unassigned_tasks_digest;
