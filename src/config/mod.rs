pub mod settings;

pub use settings::{Settings, SettingsOverrides, DEFAULT_TEAMWORK_URL};
