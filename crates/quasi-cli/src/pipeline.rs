//! Reading inputs and fanning work out across files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::prelude::*;

/// One input script, read up front.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

impl SourceFile {
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

/// Read every input path, failing on the first unreadable file.
pub fn read_sources(paths: &[PathBuf]) -> anyhow::Result<Vec<SourceFile>> {
    paths
        .iter()
        .map(|path| {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(SourceFile {
                path: path.clone(),
                text,
            })
        })
        .collect()
}

/// Run `task` over the files in parallel; results keep input order.
pub fn process<T, F>(files: &[SourceFile], task: F) -> anyhow::Result<Vec<T>>
where
    T: Send,
    F: Fn(&SourceFile) -> anyhow::Result<T> + Sync,
{
    files
        .par_iter()
        .map(|file| task(file).with_context(|| format!("while processing {}", file.path.display())))
        .collect()
}

/// `<out_dir>/<stem>.hbs` for an input path.
pub fn template_path(out_dir: &Path, input: &Path) -> anyhow::Result<PathBuf> {
    let stem = input
        .file_stem()
        .with_context(|| format!("cannot derive a file name from {}", input.display()))?;
    Ok(out_dir.join(format!("{}.hbs", stem.to_string_lossy())))
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use pretty_assertions::assert_eq;

    use super::{SourceFile, process, read_sources, template_path};

    #[test]
    fn template_path_swaps_extension() {
        let path = template_path(Path::new("out"), Path::new("src/components/card.ts"))
            .expect("path");
        assert_eq!(path, PathBuf::from("out/card.hbs"));

        let dotted = template_path(Path::new("out"), Path::new("card.component.ts"))
            .expect("path");
        assert_eq!(dotted, PathBuf::from("out/card.component.hbs"));
    }

    #[test]
    fn read_sources_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.js");
        let error = read_sources(&[missing]).expect_err("should fail");
        assert!(format!("{error:#}").contains("nope.js"));
    }

    #[test]
    fn process_keeps_input_order() {
        let files: Vec<SourceFile> = (0..32)
            .map(|i| SourceFile {
                path: PathBuf::from(format!("f{i}.js")),
                text: i.to_string(),
            })
            .collect();

        let texts = process(&files, |file| Ok(file.text.clone())).expect("process");
        let expected: Vec<String> = (0..32).map(|i| i.to_string()).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn process_surfaces_the_failing_file() {
        let files = vec![
            SourceFile {
                path: PathBuf::from("ok.js"),
                text: String::new(),
            },
            SourceFile {
                path: PathBuf::from("bad.js"),
                text: String::new(),
            },
        ];
        let error = process(&files, |file| {
            if file.path.ends_with("bad.js") {
                anyhow::bail!("boom");
            }
            Ok(())
        })
        .expect_err("should fail");
        let message = format!("{error:#}");
        assert!(message.contains("bad.js"));
        assert!(message.contains("boom"));
    }
}
