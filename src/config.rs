// ⚙️ Run configuration

use crate::escape::NullStyle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What to do when a file or a listing cannot be processed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorPolicy {
    /// Stop the batch at the first failure; nothing is written
    #[default]
    Abort,

    /// Skip the bad file or listing, log it, keep going
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory the five `.dat` files are written to
    pub output_dir: PathBuf,
    pub on_error: ErrorPolicy,
    pub null_style: NullStyle,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: PathBuf::from("."),
            on_error: ErrorPolicy::Abort,
            null_style: NullStyle::Bare,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set output directory
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Builder pattern: set error policy
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.on_error = policy;
        self
    }

    /// Builder pattern: set NULL rendering
    pub fn with_null_style(mut self, style: NullStyle) -> Self {
        self.null_style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.on_error, ErrorPolicy::Abort);
        assert_eq!(config.null_style, NullStyle::Bare);
    }

    #[test]
    fn test_builder() {
        let config = Config::new()
            .with_output_dir("out")
            .with_error_policy(ErrorPolicy::Skip)
            .with_null_style(NullStyle::Quoted);

        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.on_error, ErrorPolicy::Skip);
        assert_eq!(config.null_style, NullStyle::Quoted);
    }
}
