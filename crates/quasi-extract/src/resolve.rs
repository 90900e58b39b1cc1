//! Template tag resolution from top-level import declarations.

use std::collections::BTreeSet;

use quasi_core::{ImportSpecifier, Program, TagSourceMap, TagSpecifier};

/// Local identifier names that act as template tags in one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTagSet(BTreeSet<String>);

impl ResolvedTagSet {
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Resolve the template tags bound by `program`'s top-level imports.
///
/// Returns `None` when the file has no import declarations or none of them
/// binds a tag, so callers can skip the tree walk entirely.
#[must_use]
pub fn resolve_tags(program: &Program, tag_sources: &TagSourceMap) -> Option<ResolvedTagSet> {
    let mut imports = program.imports().peekable();
    if imports.peek().is_none() {
        tracing::debug!("no import declarations");
        return None;
    }

    let mut tags = BTreeSet::new();
    for import in imports {
        let Some(spec) = tag_sources.get(&import.source) else {
            continue;
        };

        if *spec == TagSpecifier::Default {
            if let Some(local) = import.default_binding() {
                tags.insert(local.to_string());
                continue;
            }
        }

        for specifier in &import.specifiers {
            if let ImportSpecifier::Named { imported, local } = specifier {
                if spec.matches_named(imported) {
                    tags.insert(local.clone());
                }
            }
        }
    }

    if tags.is_empty() {
        tracing::debug!("no import declaration binds a template tag");
        return None;
    }

    tracing::debug!(tags = ?tags, "resolved template tags");
    Some(ResolvedTagSet(tags))
}
