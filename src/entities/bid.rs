// Bid relation - one row per embedded bid, never deduplicated

use super::Relation;
use crate::escape::NullStyle;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BidRow {
    pub item_id: String,
    pub bidder_id: Option<String>,
    pub time: Option<String>,
    pub amount: Option<String>,
}

impl Relation for BidRow {
    const FILE_NAME: &'static str = "Bid.dat";

    // item_id|"bidder_id"|time|amount
    fn fields(&self, style: NullStyle) -> Vec<String> {
        vec![
            self.item_id.clone(),
            style.quoted_or_null(self.bidder_id.as_deref()),
            style.bare_or_null(self.time.as_deref()),
            style.bare_or_null(self.amount.as_deref()),
        ]
    }
}
