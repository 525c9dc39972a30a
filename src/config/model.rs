//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the application works out of the box. The
//! `MM/DD/YYYY` date pattern is a fixed contract and deliberately absent
//! from here.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long a result toast stays on screen.
    #[serde(default = "default_toast_duration_secs")]
    pub toast_duration_secs: u64,
    /// Show the `MM/DD/YYYY` placeholder in the empty date field.
    #[serde(default = "default_true")]
    pub date_format_hint: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_secs: default_toast_duration_secs(),
            date_format_hint: true,
        }
    }
}

fn default_toast_duration_secs() -> u64 {
    3
}
fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.toast_duration_secs, 3);
        assert!(config.ui.date_format_hint);
    }

    #[test]
    fn partial_ui_table_keeps_other_defaults() {
        let config: AppConfig = toml::from_str("[ui]\ntoast_duration_secs = 10\n").unwrap();
        assert_eq!(config.ui.toast_duration_secs, 10);
        assert!(config.ui.date_format_hint);
    }
}
