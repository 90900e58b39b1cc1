use quasi_extract::{Order, TemplatePayload, template_occurrences};
use serde::Serialize;

use crate::cli::root_commands::ListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;
use crate::pipeline::{SourceFile, process, read_sources};

#[derive(Debug, Serialize)]
struct FileOccurrences {
    path: String,
    occurrences: Vec<TemplatePayload>,
}

/// Handle `quasi list`.
pub fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let order = if args.sort { Order::Source } else { ctx.order() };
    let files = read_sources(&args.files)?;
    let listed = list_files(&files, ctx, order)?;
    output(&listed, flags.format.unwrap_or(OutputFormat::Json))
}

fn list_files(
    files: &[SourceFile],
    ctx: &AppContext,
    order: Order,
) -> anyhow::Result<Vec<FileOccurrences>> {
    process(files, |file| {
        let options = ctx.options_for(&file.path);
        let occurrences = template_occurrences(&file.text, &options, order)?;
        tracing::debug!(path = %file.path.display(), count = occurrences.len(), "listed templates");
        Ok(FileOccurrences {
            path: file.display_path(),
            occurrences,
        })
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use quasi_config::QuasiConfig;
    use quasi_extract::Order;

    use super::list_files;
    use crate::cli::GlobalFlags;
    use crate::context::AppContext;
    use crate::pipeline::SourceFile;

    const SOURCE: &str = "import { hbs } from 'ember-cli-htmlbars';\n\
const a = hbs`<b></b>`;\n\
const b = hbs(\"<i></i>\");\n";

    fn context() -> AppContext {
        let flags = GlobalFlags::default();
        AppContext::init(QuasiConfig::default(), &flags).expect("context")
    }

    #[test]
    fn lists_occurrences_per_file() {
        let files = vec![
            SourceFile {
                path: PathBuf::from("component.js"),
                text: SOURCE.to_string(),
            },
            SourceFile {
                path: PathBuf::from("plain.js"),
                text: "export const x = 1;\n".to_string(),
            },
        ];

        let listed = list_files(&files, &context(), Order::Source).expect("list");

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].path, "component.js");
        let templates: Vec<&str> = listed[0]
            .occurrences
            .iter()
            .map(|payload| payload.template.as_str())
            .collect();
        assert_eq!(templates, vec!["<b></b>", "<i></i>"]);
        assert_eq!(listed[0].occurrences[0].start_line, 2);
        assert!(listed[1].occurrences.is_empty());
    }

    #[test]
    fn syntax_error_names_the_file() {
        let files = vec![SourceFile {
            path: PathBuf::from("broken.js"),
            text: "import { hbs } from 'ember-cli-htmlbars';\nconst = ;\n".to_string(),
        }];

        let error = list_files(&files, &context(), Order::Walk).expect_err("should fail");
        let message = format!("{error:#}");
        assert!(message.contains("broken.js"));
        assert!(message.contains("SyntaxError"));
    }
}
