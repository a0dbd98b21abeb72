//! List configuration.

use crate::input::MouseButton;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Behaviour and styling hooks for a sortable list.
///
/// Missing fields take their defaults when deserializing, so hosts only
/// spell out what they change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Class of the list container.
    pub list_class: String,
    /// Class of every item.
    pub item_class: String,
    /// Extra class of the item on the floating layer.
    pub dragging_class: String,
    /// Class of the placeholder.
    pub placeholder_class: String,
    /// Button that activates grab and delete affordances.
    pub drag_button: MouseButton,
    /// Whether a lost pointer reverts the drag instead of dropping it.
    pub revert_on_cancel: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            list_class: "sortable-list".to_string(),
            item_class: "sortable-list__item".to_string(),
            dragging_class: "sortable-list__item_dragging".to_string(),
            placeholder_class: "sortable-list__placeholder".to_string(),
            drag_button: MouseButton::Left,
            revert_on_cancel: true,
        }
    }
}

impl ListConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Check that every class name is usable.
    pub fn validate(&self) -> ConfigResult<()> {
        let classes = [
            ("list_class", &self.list_class),
            ("item_class", &self.item_class),
            ("dragging_class", &self.dragging_class),
            ("placeholder_class", &self.placeholder_class),
        ];
        for (field, class) in classes {
            if class.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{field} must not be empty")));
            }
            if class.chars().any(char::is_whitespace) {
                return Err(ConfigError::Invalid(format!(
                    "{field} must be a single class name, got {class:?}"
                )));
            }
        }
        Ok(())
    }
}
