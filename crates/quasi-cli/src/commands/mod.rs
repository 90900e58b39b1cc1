pub mod extract;
pub mod list;
pub mod sources;

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Extract(args) => extract::handle(args, ctx, flags),
        Commands::List(args) => list::handle(args, ctx, flags),
        Commands::Sources => sources::handle(ctx, flags),
    }
}
