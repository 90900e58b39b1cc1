//! # quasi-config
//!
//! Layered configuration loading for quasi using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`QUASI_*` prefix, `__` as separator)
//! 2. Project-level `.quasi/config.toml`
//! 3. User-level `~/.config/quasi/config.toml`
//! 4. Built-in defaults
//!
//! # Example
//!
//! ```toml
//! [tag_sources]
//! "my-custom-hbs-source" = "default"
//! "another-custom-hbs-source" = "handlebars"
//! "@my/templates" = ["template", "precompile"]
//!
//! [general]
//! dialect = "javascript"
//! order = "source"
//! ```
//!
//! `QUASI_GENERAL__DIALECT=tsx` overrides `general.dialect`.

mod error;
mod general;

pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use quasi_core::TagSourceMap;
use quasi_extract::ExtractOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuasiConfig {
    /// Extra tag sources, merged over the built-in map.
    #[serde(default)]
    pub tag_sources: TagSourceMap,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl QuasiConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// # Errors
    /// Returns `ConfigError::Figment` when a source fails to parse or extract.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".quasi/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("QUASI_").split("__"))
    }

    /// Tag source part of the extraction options; the caller adds the parser.
    #[must_use]
    pub fn extract_options(&self) -> ExtractOptions {
        let options = ExtractOptions::new().with_tag_sources(self.tag_sources.clone());
        if self.general.builtin_tag_sources {
            options
        } else {
            options.without_builtin_tag_sources()
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("quasi").join("config.toml"))
    }
}
