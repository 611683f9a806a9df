pub mod enriched_task;

pub use enriched_task::EnrichedTask;
