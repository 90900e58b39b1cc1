use std::path::Path;

use quasi_config::QuasiConfig;
use quasi_extract::{ExtractOptions, Order};
use quasi_parser::{AstGrepProvider, Dialect, detect_dialect};

use crate::cli::GlobalFlags;

/// Settings shared by every file a command processes.
#[derive(Debug, Clone)]
pub struct AppContext {
    base_options: ExtractOptions,
    dialect_override: Option<Dialect>,
    fallback_dialect: Dialect,
    order: Order,
}

impl AppContext {
    /// Merge loaded configuration with the command-line overrides.
    pub fn init(config: QuasiConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let fallback_dialect = config.general.dialect()?;
        let mut base_options = config.extract_options();
        if flags.no_builtin_sources {
            base_options = base_options.without_builtin_tag_sources();
        }
        for (module, spec) in &flags.tag_sources {
            base_options = base_options.with_tag_source(module.clone(), spec.clone());
        }

        Ok(Self {
            base_options,
            dialect_override: flags.dialect,
            fallback_dialect,
            order: config.general.order,
        })
    }

    /// Dialect for `path`: the `--dialect` flag, else the extension, else the configured default.
    pub fn dialect_for(&self, path: &Path) -> Dialect {
        self.dialect_override
            .or_else(|| path.to_str().and_then(detect_dialect))
            .unwrap_or(self.fallback_dialect)
    }

    /// Extraction options with a parser for the dialect of `path`.
    pub fn options_for(&self, path: &Path) -> ExtractOptions {
        self.base_options
            .clone()
            .with_parser(AstGrepProvider::new(self.dialect_for(path)))
    }

    pub const fn order(&self) -> Order {
        self.order
    }

    pub const fn base_options(&self) -> &ExtractOptions {
        &self.base_options
    }
}
