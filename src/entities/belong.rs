// Belong relation - item ↔ category membership

use super::Relation;
use crate::escape::{quote, NullStyle};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BelongRow {
    pub item_id: String,
    pub category: String,
}

impl Relation for BelongRow {
    const FILE_NAME: &'static str = "Belong.dat";

    fn fields(&self, _style: NullStyle) -> Vec<String> {
        vec![self.item_id.clone(), quote(&self.category)]
    }
}
