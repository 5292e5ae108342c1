// Listing Normalizer - Core Library
// Flattens eBay-style JSON listing exports into five bulk-loadable relations

pub mod normalize;
pub mod escape;
pub mod error;
pub mod listing;
pub mod entities;
pub mod flattener;
pub mod writer;
pub mod config;
pub mod driver;

// Re-export commonly used types
pub use normalize::{normalize_currency, normalize_month, normalize_timestamp, is_json_path};
pub use escape::{escape_text, quote, render_optional, NullStyle, NULL_SENTINEL};
pub use error::{FlattenError, LoadError};
pub use listing::{Listing, BidEntry, UserRef};
pub use entities::{
    Relation,
    ItemRow, CategoryRow, BelongRow, BidRow, UserRow,
    CategoryRegistry, UserRegistry,
};
pub use flattener::{Flattener, RelationCounts};
pub use writer::{write_all, write_relation};
pub use config::{Config, ErrorPolicy};
pub use driver::{load_items, run, BatchDriver, RunSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
