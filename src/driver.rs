// 🚚 Batch Driver
// Paths in → listings → Flattener → five `.dat` files out
//
// Files are processed one at a time in the order given; nothing is written
// until every input has been consumed.

use crate::config::{Config, ErrorPolicy};
use crate::error::LoadError;
use crate::flattener::{Flattener, RelationCounts};
use crate::normalize::is_json_path;
use crate::writer::write_all;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

// ============================================================================
// RUN SUMMARY
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub files_processed: usize,
    /// Paths ignored for lacking a `.json` suffix
    pub files_skipped: usize,
    pub files_failed: usize,
    pub listings_flattened: usize,
    pub listings_failed: usize,
    pub relations: RelationCounts,
}

// ============================================================================
// LOADING
// ============================================================================

/// Read one export and return its `Items` array
pub fn load_items(path: &Path) -> Result<Vec<Value>, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::Io(path.to_path_buf(), e))?;
    let reader = BufReader::new(file);

    let mut json: Value =
        serde_json::from_reader(reader).map_err(|e| LoadError::Json(path.to_path_buf(), e))?;

    match json.get_mut("Items").map(Value::take) {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(LoadError::MissingItems(path.to_path_buf())),
    }
}

// ============================================================================
// BATCH DRIVER
// ============================================================================

pub struct BatchDriver {
    config: Config,
    flattener: Flattener,
    summary: RunSummary,
}

impl BatchDriver {
    pub fn new(config: Config) -> Self {
        BatchDriver {
            config,
            flattener: Flattener::new(),
            summary: RunSummary::default(),
        }
    }

    /// Process every path in order; non-`.json` paths are skipped silently
    pub fn process_paths<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<()> {
        for path in paths {
            let path = path.as_ref();
            if !is_json_path(path) {
                debug!(file = %path.display(), "skipping non-JSON path");
                self.summary.files_skipped += 1;
                continue;
            }
            self.process_file(path)?;
        }
        Ok(())
    }

    /// Load and flatten one file, honoring the configured error policy
    pub fn process_file(&mut self, path: &Path) -> Result<()> {
        let items = match load_items(path) {
            Ok(items) => items,
            Err(e) => match self.config.on_error {
                ErrorPolicy::Abort => return Err(e.into()),
                ErrorPolicy::Skip => {
                    warn!(file = %path.display(), error = %e, "skipping unreadable file");
                    self.summary.files_failed += 1;
                    return Ok(());
                }
            },
        };

        let mut flattened = 0;
        for value in &items {
            match self.flattener.flatten_value(value) {
                Ok(()) => flattened += 1,
                Err(e) => match self.config.on_error {
                    ErrorPolicy::Abort => {
                        return Err(e).with_context(|| format!("Failed to flatten {}", path.display()))
                    }
                    ErrorPolicy::Skip => {
                        warn!(file = %path.display(), error = %e, "skipping listing");
                        self.summary.listings_failed += 1;
                    }
                },
            }
        }

        self.summary.files_processed += 1;
        self.summary.listings_flattened += flattened;
        info!(file = %path.display(), listings = flattened, "parsed file");
        Ok(())
    }

    /// Serialize the accumulators to the configured output directory
    pub fn write_outputs(&self) -> Result<Vec<PathBuf>> {
        write_all(&self.flattener, &self.config.output_dir, self.config.null_style)
    }

    pub fn flattener(&self) -> &Flattener {
        &self.flattener
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            relations: self.flattener.counts(),
            ..self.summary.clone()
        }
    }
}

/// Full run: process every path, then write all five relations
///
/// Under `ErrorPolicy::Abort` a failure returns before anything is written.
pub fn run<P: AsRef<Path>>(config: Config, paths: &[P]) -> Result<RunSummary> {
    let mut driver = BatchDriver::new(config);
    driver.process_paths(paths)?;
    driver.write_outputs()?;

    let summary = driver.summary();
    info!(
        files = summary.files_processed,
        skipped = summary.files_skipped,
        failed = summary.files_failed,
        items = summary.relations.items,
        categories = summary.relations.categories,
        belongs = summary.relations.belongs,
        bids = summary.relations.bids,
        users = summary.relations.users,
        "batch complete"
    );
    Ok(summary)
}
