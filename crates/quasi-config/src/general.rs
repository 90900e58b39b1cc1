//! General extraction defaults.

use quasi_extract::Order;
use quasi_parser::Dialect;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_builtin_tag_sources() -> bool {
    true
}

fn default_dialect() -> String {
    Dialect::default().to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Whether the built-in tag sources sit underneath `[tag_sources]`.
    #[serde(default = "default_builtin_tag_sources")]
    pub builtin_tag_sources: bool,

    /// Dialect for files whose extension is not recognized.
    #[serde(default = "default_dialect")]
    pub dialect: String,

    /// Default occurrence order for `quasi list` ("walk" or "source").
    #[serde(default)]
    pub order: Order,
}

impl GeneralConfig {
    /// Parsed fallback dialect.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` for an unknown dialect name.
    pub fn dialect(&self) -> Result<Dialect, ConfigError> {
        self.dialect
            .parse()
            .map_err(|reason| ConfigError::InvalidValue {
                field: "general.dialect".to_string(),
                reason,
            })
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            builtin_tag_sources: default_builtin_tag_sources(),
            dialect: default_dialect(),
            order: Order::default(),
        }
    }
}
