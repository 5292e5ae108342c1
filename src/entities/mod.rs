// Entity Models - one row type per output relation
//
// Rows hold normalized values with absent fields kept as `None`.
// Quoting and the NULL sentinel are applied only when a row is rendered,
// so the same rows can be written in either `NullStyle`.
//
// Dedup registries live next to the relation they guard:
// - CategoryRegistry: global, first-seen order
// - UserRegistry: global, first write wins

pub mod item;
pub mod category;
pub mod belong;
pub mod bid;
pub mod user;

pub use item::ItemRow;
pub use category::{CategoryRow, CategoryRegistry};
pub use belong::BelongRow;
pub use bid::BidRow;
pub use user::{UserRow, UserRegistry};

use crate::escape::NullStyle;

/// A row of one output relation
pub trait Relation {
    /// Name of the `.dat` artifact this relation is written to
    const FILE_NAME: &'static str;

    /// Rendered column values, in output order
    fn fields(&self, style: NullStyle) -> Vec<String>;

    /// Pipe-joined line without terminator
    fn to_line(&self, style: NullStyle) -> String {
        self.fields(style).join("|")
    }
}
