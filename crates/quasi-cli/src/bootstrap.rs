use anyhow::Context;
use quasi_config::QuasiConfig;

pub fn load_config() -> anyhow::Result<QuasiConfig> {
    let config = QuasiConfig::load().context("failed to load quasi configuration")?;
    tracing::debug!(
        tag_sources = config.tag_sources.len(),
        builtin = config.general.builtin_tag_sources,
        dialect = %config.general.dialect,
        order = %config.general.order,
        "configuration loaded"
    );
    Ok(config)
}
