use clap::Parser;
use quasi_core::TagSpecifier;
use quasi_parser::Dialect;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `quasi` binary.
#[derive(Debug, Parser)]
#[command(
    name = "quasi",
    version,
    about = "quasi - extract embedded templates from script files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Script dialect: javascript, typescript, tsx (default: from file extension)
    #[arg(short, long, global = true)]
    pub dialect: Option<Dialect>,

    /// Extra tag source as MODULE=SPEC; SPEC is `default`, an export name, or `a,b`
    #[arg(short = 't', long = "tag-source", global = true, value_parser = parse_tag_source)]
    pub tag_sources: Vec<(String, TagSpecifier)>,

    /// Do not merge the built-in tag sources under the configured ones
    #[arg(long, global = true)]
    pub no_builtin_sources: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            dialect: self.dialect,
            tag_sources: self.tag_sources.clone(),
            no_builtin_sources: self.no_builtin_sources,
        }
    }
}

fn parse_tag_source(value: &str) -> Result<(String, TagSpecifier), String> {
    let (module, spec) = value
        .split_once('=')
        .ok_or_else(|| format!("expected MODULE=SPEC, got '{value}'"))?;
    let module = module.trim();
    if module.is_empty() {
        return Err(format!("missing module name in '{value}'"));
    }
    Ok((module.to_string(), spec.parse()?))
}
