// 💾 Relation Writer
// Serializes each accumulator to its own pipe-delimited `.dat` file

use crate::entities::{BelongRow, BidRow, CategoryRow, ItemRow, Relation, UserRow};
use crate::escape::NullStyle;
use crate::flattener::Flattener;
use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const COLUMN_SEPARATOR: u8 = b'|';

/// Write one relation to `<dir>/<R::FILE_NAME>`, truncating any old file
///
/// Fields arrive already quoted/escaped, so the csv writer only delimits.
pub fn write_relation<R: Relation>(dir: &Path, rows: &[R], style: NullStyle) -> Result<PathBuf> {
    let path = dir.join(R::FILE_NAME);

    let mut writer = WriterBuilder::new()
        .delimiter(COLUMN_SEPARATOR)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .has_headers(false)
        .from_path(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    for row in rows {
        writer
            .write_record(row.fields(style))
            .with_context(|| format!("Failed to write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    info!(file = %path.display(), rows = rows.len(), "wrote relation");
    Ok(path)
}

/// Write all five relations in order: Item, Category, Belong, Bid, User
pub fn write_all(flattener: &Flattener, dir: &Path, style: NullStyle) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    Ok(vec![
        write_relation::<ItemRow>(dir, flattener.items(), style)?,
        write_relation::<CategoryRow>(dir, flattener.categories(), style)?,
        write_relation::<BelongRow>(dir, flattener.belongs(), style)?,
        write_relation::<BidRow>(dir, flattener.bids(), style)?,
        write_relation::<UserRow>(dir, flattener.users(), style)?,
    ])
}
