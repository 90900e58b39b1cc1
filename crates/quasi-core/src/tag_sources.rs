//! Module source to template tag configuration.
//!
//! A [`TagSourceMap`] says which export(s) of which module count as template
//! tags. Keys are exact module paths; there is no globbing.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Marker value selecting the default import binding.
pub const DEFAULT_MARKER: &str = "default";

/// Built-in tag sources, merged under caller overrides on every call.
const BUILTIN_TAG_SOURCES: &[(&str, &[&str])] = &[
    ("ember-cli-htmlbars", &["hbs"]),
    ("htmlbars-inline-precompile", &[DEFAULT_MARKER]),
    ("ember-cli-htmlbars-inline-precompile", &[DEFAULT_MARKER]),
    ("@glimmerx/component", &["hbs"]),
    ("@glimmer/core", &["createTemplate", "precompileTemplate"]),
];

/// Which export(s) of a module act as template tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSpecifier", into = "RawSpecifier")]
pub enum TagSpecifier {
    /// The default import binding.
    Default,
    /// A single named export.
    Named(String),
    /// Any of a set of named exports.
    AnyOf(BTreeSet<String>),
}

impl TagSpecifier {
    /// Whether a named import of `imported` is a tag under this specifier.
    ///
    /// For [`TagSpecifier::Default`] this matches `{ default as x }`.
    #[must_use]
    pub fn matches_named(&self, imported: &str) -> bool {
        match self {
            Self::Default => imported == DEFAULT_MARKER,
            Self::Named(name) => name == imported,
            Self::AnyOf(names) => names.contains(imported),
        }
    }
}

impl fmt::Display for TagSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "{DEFAULT_MARKER}"),
            Self::Named(name) => write!(f, "{name}"),
            Self::AnyOf(names) => {
                let joined = names.iter().map(String::as_str).collect::<Vec<_>>().join(",");
                write!(f, "{joined}")
            }
        }
    }
}

/// Parses `default`, `name`, or `a,b,c`.
impl FromStr for TagSpecifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let names: Vec<String> = s
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToString::to_string)
            .collect();
        match names.as_slice() {
            [] => Err(format!("empty tag specifier: '{s}'")),
            [single] => Ok(RawSpecifier::One(single.clone()).into()),
            _ => Ok(RawSpecifier::Many(names).into()),
        }
    }
}

/// Serialized form: a single string or a list of strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawSpecifier {
    One(String),
    Many(Vec<String>),
}

impl From<RawSpecifier> for TagSpecifier {
    fn from(raw: RawSpecifier) -> Self {
        match raw {
            RawSpecifier::One(name) if name == DEFAULT_MARKER => Self::Default,
            RawSpecifier::One(name) => Self::Named(name),
            RawSpecifier::Many(names) => Self::AnyOf(names.into_iter().collect()),
        }
    }
}

impl From<TagSpecifier> for RawSpecifier {
    fn from(spec: TagSpecifier) -> Self {
        match spec {
            TagSpecifier::Default => Self::One(DEFAULT_MARKER.to_string()),
            TagSpecifier::Named(name) => Self::One(name),
            TagSpecifier::AnyOf(names) => Self::Many(names.into_iter().collect()),
        }
    }
}

/// Mapping from module source name to [`TagSpecifier`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSourceMap(BTreeMap<String, TagSpecifier>);

impl TagSourceMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in tag sources.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN_TAG_SOURCES
            .iter()
            .map(|(source, names)| {
                let spec = match names {
                    [single] => RawSpecifier::One((*single).to_string()),
                    many => RawSpecifier::Many(many.iter().map(ToString::to_string).collect()),
                };
                ((*source).to_string(), TagSpecifier::from(spec))
            })
            .collect()
    }

    pub fn insert(&mut self, source: impl Into<String>, spec: TagSpecifier) -> Option<TagSpecifier> {
        self.0.insert(source.into(), spec)
    }

    #[must_use]
    pub fn get(&self, source: &str) -> Option<&TagSpecifier> {
        self.0.get(source)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagSpecifier)> {
        self.0.iter().map(|(source, spec)| (source.as_str(), spec))
    }

    /// Returns `self` with `overrides` applied on top; override entries win on key collision.
    #[must_use]
    pub fn merged_with(&self, overrides: &Self) -> Self {
        let mut merged = self.clone();
        merged.extend(overrides.0.clone());
        merged
    }
}

impl FromIterator<(String, TagSpecifier)> for TagSourceMap {
    fn from_iter<I: IntoIterator<Item = (String, TagSpecifier)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(String, TagSpecifier)> for TagSourceMap {
    fn extend<I: IntoIterator<Item = (String, TagSpecifier)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_map_has_expected_entries() {
        let map = TagSourceMap::builtin();
        assert_eq!(map.len(), 5);
        assert_eq!(
            map.get("ember-cli-htmlbars"),
            Some(&TagSpecifier::Named("hbs".to_string()))
        );
        assert_eq!(
            map.get("htmlbars-inline-precompile"),
            Some(&TagSpecifier::Default)
        );
        assert_eq!(
            map.get("@glimmer/core"),
            Some(&TagSpecifier::AnyOf(
                ["createTemplate", "precompileTemplate"]
                    .into_iter()
                    .map(String::from)
                    .collect()
            ))
        );
    }

    #[test]
    fn override_wins_on_collision() {
        let mut overrides = TagSourceMap::new();
        overrides.insert("ember-cli-htmlbars", TagSpecifier::Default);
        overrides.insert("my-source", TagSpecifier::Named("h".to_string()));

        let merged = TagSourceMap::builtin().merged_with(&overrides);
        assert_eq!(merged.len(), 6);
        assert_eq!(merged.get("ember-cli-htmlbars"), Some(&TagSpecifier::Default));
        assert_eq!(
            merged.get("my-source"),
            Some(&TagSpecifier::Named("h".to_string()))
        );
    }

    #[test]
    fn specifier_matching() {
        assert!(TagSpecifier::Named("hbs".to_string()).matches_named("hbs"));
        assert!(!TagSpecifier::Named("hbs".to_string()).matches_named("h"));
        assert!(TagSpecifier::Default.matches_named("default"));
        assert!(!TagSpecifier::Default.matches_named("hbs"));
        let any: TagSpecifier = "a,b".parse().expect("should parse");
        assert!(any.matches_named("b"));
        assert!(!any.matches_named("c"));
    }

    #[test]
    fn specifier_from_str_variants() {
        assert_eq!("default".parse::<TagSpecifier>(), Ok(TagSpecifier::Default));
        assert_eq!(
            " hbs ".parse::<TagSpecifier>(),
            Ok(TagSpecifier::Named("hbs".to_string()))
        );
        assert!(",".parse::<TagSpecifier>().is_err());
    }

    #[test]
    fn map_deserializes_strings_and_lists() {
        let json = r#"{"a": "default", "b": "hbs", "c": ["x", "y"]}"#;
        let map: TagSourceMap = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(map.get("a"), Some(&TagSpecifier::Default));
        assert_eq!(map.get("b"), Some(&TagSpecifier::Named("hbs".to_string())));
        assert!(map.get("c").is_some_and(|spec| spec.matches_named("y")));

        let back = serde_json::to_string(&map).expect("should serialize");
        assert_eq!(back, r#"{"a":"default","b":"hbs","c":["x","y"]}"#);
    }
}
