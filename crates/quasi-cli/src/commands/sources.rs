use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Handle `quasi sources`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sources = ctx.base_options().effective_tag_sources();
    output(&sources, flags.format.unwrap_or(OutputFormat::Json))
}
