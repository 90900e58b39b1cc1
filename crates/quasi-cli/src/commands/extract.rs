use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use quasi_extract::extract_template;
use serde::Serialize;

use crate::cli::root_commands::ExtractArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, output_text};
use crate::pipeline::{SourceFile, process, read_sources, template_path};

#[derive(Debug, Serialize)]
struct ExtractedFile {
    path: String,
    template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    written_to: Option<String>,
}

/// Handle `quasi extract`.
pub fn handle(args: &ExtractArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let files = read_sources(&args.files)?;
    let mut extracted = extract_files(&files, ctx)?;

    if let Some(out_dir) = &args.out_dir {
        write_templates(out_dir, &files, &mut extracted)?;
        if let Some(format) = flags.format {
            output(&extracted, format)?;
        }
        return Ok(());
    }

    match flags.format.unwrap_or(OutputFormat::Raw) {
        OutputFormat::Json => output(&extracted, OutputFormat::Json),
        OutputFormat::Raw => print_raw(&extracted),
    }
}

fn extract_files(files: &[SourceFile], ctx: &AppContext) -> anyhow::Result<Vec<ExtractedFile>> {
    process(files, |file| {
        let options = ctx.options_for(&file.path);
        let template = extract_template(&file.text, &options)?;
        tracing::debug!(path = %file.path.display(), bytes = template.len(), "extracted template");
        Ok(ExtractedFile {
            path: file.display_path(),
            template,
            written_to: None,
        })
    })
}

fn write_templates(
    out_dir: &Path,
    files: &[SourceFile],
    extracted: &mut [ExtractedFile],
) -> anyhow::Result<()> {
    let targets = files
        .iter()
        .map(|file| template_path(out_dir, &file.path))
        .collect::<anyhow::Result<Vec<PathBuf>>>()?;

    let mut seen = BTreeSet::new();
    for target in &targets {
        if !seen.insert(target) {
            anyhow::bail!(
                "extract: several inputs map to {}; run them separately",
                target.display()
            );
        }
    }

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    for (entry, target) in extracted.iter_mut().zip(targets) {
        std::fs::write(&target, &entry.template)
            .with_context(|| format!("failed to write {}", target.display()))?;
        tracing::info!(from = %entry.path, to = %target.display(), "wrote template");
        entry.written_to = Some(target.display().to_string());
    }
    Ok(())
}

/// A single file prints its template as-is; several files get a comment header each.
fn print_raw(extracted: &[ExtractedFile]) -> anyhow::Result<()> {
    if let [single] = extracted {
        return output_text(&single.template);
    }
    let mut text = String::new();
    for entry in extracted {
        text.push_str("{{!-- ");
        text.push_str(&entry.path);
        text.push_str(" --}}\n");
        text.push_str(&entry.template);
        if !entry.template.is_empty() && !entry.template.ends_with('\n') {
            text.push('\n');
        }
    }
    output_text(&text)
}
