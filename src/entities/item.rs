// 🏷️ Item relation - one row per listing

use super::Relation;
use crate::escape::{quote, NullStyle};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub id: String,
    pub bid_count: String,
    /// Normalized dollar amount (digits and dot)
    pub first_bid: String,
    pub currently: String,
    pub name: String,
    pub buy_price: Option<String>,
    /// `YYYY-MM-DD HH:MM:SS`
    pub started: String,
    pub ends: String,
    pub seller_id: String,
    pub description: Option<String>,
}

impl Relation for ItemRow {
    const FILE_NAME: &'static str = "Item.dat";

    // id|bid_count|first_bid|currently|"name"|buy_price|"started"|"ends"|"seller_id"|description
    fn fields(&self, style: NullStyle) -> Vec<String> {
        vec![
            self.id.clone(),
            self.bid_count.clone(),
            self.first_bid.clone(),
            self.currently.clone(),
            quote(&self.name),
            style.quoted_or_null(self.buy_price.as_deref()),
            quote(&self.started),
            quote(&self.ends),
            quote(&self.seller_id),
            style.quoted_or_null(self.description.as_deref()),
        ]
    }
}
