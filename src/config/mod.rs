mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, DefaultsConfig, PanelConfig, MIN_PANEL_WIDTH};
