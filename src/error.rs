//! Error types for loading and flattening listings

use std::path::PathBuf;
use thiserror::Error;

/// A single listing could not be flattened
///
/// `item_id` is `None` only when the listing's own `ItemID` is the problem.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlattenError {
    #[error("listing {}: missing required field `{field}`", display_id(.item_id))]
    MissingField {
        item_id: Option<String>,
        field: &'static str,
    },

    #[error("listing {}: field `{field}` {reason}", display_id(.item_id))]
    InvalidField {
        item_id: Option<String>,
        field: &'static str,
        reason: String,
    },
}

impl FlattenError {
    pub fn item_id(&self) -> Option<&str> {
        match self {
            FlattenError::MissingField { item_id, .. }
            | FlattenError::InvalidField { item_id, .. } => item_id.as_deref(),
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            FlattenError::MissingField { field, .. }
            | FlattenError::InvalidField { field, .. } => *field,
        }
    }
}

fn display_id(item_id: &Option<String>) -> &str {
    item_id.as_deref().unwrap_or("<unknown>")
}

/// An input document could not be loaded
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid JSON in {}: {}", .0.display(), .1)]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("{} has no top-level `Items` array", .0.display())]
    MissingItems(PathBuf),
}
