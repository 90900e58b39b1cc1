use clap::ValueEnum;
use quasi_core::TagSpecifier;
use quasi_parser::Dialect;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug, Default)]
pub struct GlobalFlags {
    pub format: Option<OutputFormat>,
    pub dialect: Option<Dialect>,
    pub tag_sources: Vec<(String, TagSpecifier)>,
    pub no_builtin_sources: bool,
}
