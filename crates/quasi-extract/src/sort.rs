//! Ordering of collected payloads.

use std::fmt;
use std::str::FromStr;

use quasi_core::TemplatePayload;
use serde::{Deserialize, Serialize};

/// Order of returned occurrences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// As encountered by the tree walk.
    #[default]
    Walk,
    /// Ascending source offset.
    Source,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Walk => write!(f, "walk"),
            Self::Source => write!(f, "source"),
        }
    }
}

impl FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "walk" => Ok(Self::Walk),
            "source" => Ok(Self::Source),
            other => Err(format!("unknown order '{other}' (expected walk or source)")),
        }
    }
}

/// Stable sort by the payloads' start offset.
#[must_use]
pub fn sort_by_position(mut payloads: Vec<TemplatePayload>) -> Vec<TemplatePayload> {
    if payloads.len() > 1 {
        payloads.sort_by_key(|payload| payload.start);
    }
    payloads
}
