// 🔀 Record Flattener
// Turns nested listings into rows of five flat relations
//
// All run state lives in one struct: the five accumulators plus the two
// global dedup sets (inside the registries). A fresh `Flattener` is a fresh run.

use crate::entities::{
    BelongRow, BidRow, CategoryRegistry, CategoryRow, ItemRow, UserRegistry, UserRow,
};
use crate::error::FlattenError;
use crate::listing::Listing;
use crate::normalize::{normalize_currency, normalize_timestamp};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

// ============================================================================
// RELATION COUNTS
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RelationCounts {
    pub items: usize,
    pub categories: usize,
    pub belongs: usize,
    pub bids: usize,
    pub users: usize,
}

// ============================================================================
// FLATTENER
// ============================================================================

#[derive(Debug, Default)]
pub struct Flattener {
    items: Vec<ItemRow>,
    categories: CategoryRegistry,
    belongs: Vec<BelongRow>,
    bids: Vec<BidRow>,
    users: UserRegistry,
}

impl Flattener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract and flatten one element of an `Items` array
    ///
    /// Extraction runs first, so a listing with a missing required key
    /// leaves every relation untouched.
    pub fn flatten_value(&mut self, value: &Value) -> Result<(), FlattenError> {
        let listing = Listing::from_value(value)?;
        self.flatten(&listing);
        Ok(())
    }

    /// Run the five emissions for one listing, in fixed order
    pub fn flatten(&mut self, listing: &Listing) {
        self.emit_item(listing);
        self.emit_categories(listing);
        self.emit_belongs(listing);
        self.emit_bids(listing);
        self.emit_users(listing);
    }

    // ------------------------------------------------------------------------
    // Emission steps
    // ------------------------------------------------------------------------

    fn emit_item(&mut self, listing: &Listing) {
        self.items.push(ItemRow {
            id: listing.item_id.clone(),
            bid_count: listing.number_of_bids.clone(),
            first_bid: normalize_currency(&listing.first_bid),
            currently: normalize_currency(&listing.currently),
            name: listing.name.clone(),
            buy_price: listing.buy_price.as_deref().map(normalize_currency),
            started: normalize_timestamp(&listing.started),
            ends: normalize_timestamp(&listing.ends),
            seller_id: listing.seller.user_id.clone(),
            description: listing.description.clone(),
        });
    }

    /// Global dedup across the run
    fn emit_categories(&mut self, listing: &Listing) {
        for label in &listing.categories {
            self.categories.register(label);
        }
    }

    /// Dedup within this listing only
    fn emit_belongs(&mut self, listing: &Listing) {
        let mut seen: HashSet<&str> = HashSet::new();
        for label in &listing.categories {
            if seen.insert(label.as_str()) {
                self.belongs.push(BelongRow {
                    item_id: listing.item_id.clone(),
                    category: label.clone(),
                });
            }
        }
    }

    /// No dedup: every embedded bid becomes a row
    fn emit_bids(&mut self, listing: &Listing) {
        for bid in &listing.bids {
            self.bids.push(BidRow {
                item_id: listing.item_id.clone(),
                bidder_id: bid.bidder.as_ref().map(|b| b.user_id.clone()),
                time: bid.time.as_deref().map(normalize_timestamp),
                amount: bid.amount.as_deref().map(normalize_currency),
            });
        }
    }

    /// Bidders first, then the seller; first sighting of an id wins
    fn emit_users(&mut self, listing: &Listing) {
        for bidder in listing.bids.iter().filter_map(|b| b.bidder.as_ref()) {
            self.users.register(bidder);
        }
        self.users.register(&listing.seller);
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn items(&self) -> &[ItemRow] {
        &self.items
    }

    pub fn categories(&self) -> &[CategoryRow] {
        self.categories.rows()
    }

    pub fn belongs(&self) -> &[BelongRow] {
        &self.belongs
    }

    pub fn bids(&self) -> &[BidRow] {
        &self.bids
    }

    pub fn users(&self) -> &[UserRow] {
        self.users.rows()
    }

    pub fn counts(&self) -> RelationCounts {
        RelationCounts {
            items: self.items.len(),
            categories: self.categories.count(),
            belongs: self.belongs.len(),
            bids: self.bids.len(),
            users: self.users.count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing_json(item_id: &str, categories: &[&str], bids: Value, seller: Value) -> Value {
        json!({
            "ItemID": item_id,
            "Name": format!("Item {}", item_id),
            "Category": categories,
            "Currently": "$1,015.00",
            "First_Bid": "$1.00",
            "Number_of_Bids": "1",
            "Bids": bids,
            "Location": "Seattle, WA",
            "Country": "USA",
            "Started": "Dec-03-01 18:10:40",
            "Ends": "Dec-13-01 18:10:40",
            "Seller": seller,
            "Description": null
        })
    }

    fn bid_json(user_id: &str, rating: Option<&str>) -> Value {
        json!({"Bid": {
            "Bidder": {"UserID": user_id, "Rating": rating},
            "Time": "Dec-04-01 09:42:17",
            "Amount": "$1,015.00"
        }})
    }

    #[test]
    fn test_item_emission_normalizes_scalars() {
        let mut flattener = Flattener::new();
        let value = listing_json("1", &["Books"], json!(null), json!({"UserID": "s", "Rating": "7"}));
        flattener.flatten_value(&value).unwrap();

        let item = &flattener.items()[0];
        assert_eq!(item.id, "1");
        assert_eq!(item.currently, "1015.00");
        assert_eq!(item.first_bid, "1.00");
        assert_eq!(item.buy_price, None);
        assert_eq!(item.started, "2001-12-03 18:10:40");
        assert_eq!(item.ends, "2001-12-13 18:10:40");
        assert_eq!(item.seller_id, "s");
        assert_eq!(item.description, None);
    }

    #[test]
    fn test_buy_price_present_is_normalized() {
        let mut flattener = Flattener::new();
        let mut value = listing_json("1", &[], json!(null), json!({"UserID": "s"}));
        value["Buy_Price"] = json!("$2,500.00");
        flattener.flatten_value(&value).unwrap();
        assert_eq!(flattener.items()[0].buy_price.as_deref(), Some("2500.00"));
    }

    #[test]
    fn test_category_global_dedup_belong_per_listing() {
        let mut flattener = Flattener::new();
        let seller = json!({"UserID": "s"});
        flattener
            .flatten_value(&listing_json("1", &["Books", "Fiction"], json!(null), seller.clone()))
            .unwrap();
        flattener
            .flatten_value(&listing_json("2", &["Books"], json!(null), seller))
            .unwrap();

        let names: Vec<&str> = flattener.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Books", "Fiction"]);

        let books: Vec<&BelongRow> = flattener
            .belongs()
            .iter()
            .filter(|b| b.category == "Books")
            .collect();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].item_id, "1");
        assert_eq!(books[1].item_id, "2");
    }

    #[test]
    fn test_duplicate_label_within_listing() {
        let mut flattener = Flattener::new();
        let value = listing_json("9", &["Toys", "Dolls", "Toys"], json!(null), json!({"UserID": "s"}));
        flattener.flatten_value(&value).unwrap();

        assert_eq!(flattener.categories().len(), 2);
        assert_eq!(flattener.belongs().len(), 2);
        assert_eq!(flattener.belongs()[0].category, "Toys");
        assert_eq!(flattener.belongs()[1].category, "Dolls");
    }

    #[test]
    fn test_bids_not_deduplicated() {
        let mut flattener = Flattener::new();
        let bids = json!([bid_json("b1", None), bid_json("b1", None), bid_json("b2", Some("4"))]);
        flattener
            .flatten_value(&listing_json("3", &[], bids, json!({"UserID": "s"})))
            .unwrap();

        assert_eq!(flattener.bids().len(), 3);
        let bid = &flattener.bids()[0];
        assert_eq!(bid.item_id, "3");
        assert_eq!(bid.bidder_id.as_deref(), Some("b1"));
        assert_eq!(bid.time.as_deref(), Some("2001-12-04 09:42:17"));
        assert_eq!(bid.amount.as_deref(), Some("1015.00"));

        // b1, b2, then seller
        let ids: Vec<&str> = flattener.users().iter().map(|u| u.user_id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b2", "s"]);
    }

    #[test]
    fn test_null_bid_parts_become_none() {
        let mut flattener = Flattener::new();
        let bids = json!([
            {"Bid": {"Bidder": null, "Time": null, "Amount": null}},
            {"Bid": null}
        ]);
        flattener
            .flatten_value(&listing_json("4", &[], bids, json!({"UserID": "s"})))
            .unwrap();

        assert_eq!(flattener.bids().len(), 2);
        for bid in flattener.bids() {
            assert_eq!(bid.bidder_id, None);
            assert_eq!(bid.time, None);
            assert_eq!(bid.amount, None);
        }
        // Only the seller has an id to register
        assert_eq!(flattener.users().len(), 1);
    }

    #[test]
    fn test_user_first_write_wins_across_listings() {
        let mut flattener = Flattener::new();

        // "carol" first bids without a rating...
        let bids = json!([bid_json("carol", None)]);
        flattener
            .flatten_value(&listing_json("1", &[], bids, json!({"UserID": "dave", "Rating": "50"})))
            .unwrap();
        // ...then sells with a rating
        flattener
            .flatten_value(&listing_json("2", &[], json!(null), json!({"UserID": "carol", "Rating": "900"})))
            .unwrap();

        let carol: Vec<&UserRow> = flattener
            .users()
            .iter()
            .filter(|u| u.user_id == "carol")
            .collect();
        assert_eq!(carol.len(), 1);
        assert_eq!(carol[0].rating, None);
        assert_eq!(carol[0].location, None);
    }

    #[test]
    fn test_seller_takes_listing_location() {
        let mut flattener = Flattener::new();
        flattener
            .flatten_value(&listing_json("1", &[], json!(null), json!({"UserID": "s", "Rating": "7"})))
            .unwrap();

        let seller = &flattener.users()[0];
        assert_eq!(seller.location.as_deref(), Some("Seattle, WA"));
        assert_eq!(seller.country.as_deref(), Some("USA"));
        assert_eq!(seller.rating.as_deref(), Some("7"));
    }

    #[test]
    fn test_seller_bidding_on_own_listing_counted_once() {
        let mut flattener = Flattener::new();
        let bids = json!([bid_json("s", None)]);
        flattener
            .flatten_value(&listing_json("1", &[], bids, json!({"UserID": "s", "Rating": "7"})))
            .unwrap();

        assert_eq!(flattener.users().len(), 1);
        // Bidder context came first
        assert_eq!(flattener.users()[0].rating, None);
    }

    #[test]
    fn test_failed_listing_leaves_no_rows() {
        let mut flattener = Flattener::new();
        let mut value = listing_json("1", &["Books"], json!([bid_json("b", None)]), json!({"UserID": "s"}));
        value.as_object_mut().unwrap().remove("Ends");

        let err = flattener.flatten_value(&value).unwrap_err();
        assert_eq!(err.field(), "Ends");
        assert_eq!(flattener.counts(), RelationCounts::default());
    }

    #[test]
    fn test_referential_completeness() {
        let mut flattener = Flattener::new();
        let seller = json!({"UserID": "s"});
        let inputs = vec![
            listing_json("1", &["A", "B", "A"], json!([bid_json("x", None)]), seller.clone()),
            listing_json("2", &["B", "C"], json!([bid_json("y", None), bid_json("x", Some("1"))]), seller.clone()),
            listing_json("3", &[], json!(null), json!({"UserID": "x"})),
        ];
        for value in &inputs {
            flattener.flatten_value(value).unwrap();
        }

        for belong in flattener.belongs() {
            let matches = flattener
                .categories()
                .iter()
                .filter(|c| c.name == belong.category)
                .count();
            assert_eq!(matches, 1, "category {} must appear once", belong.category);
        }
        for bid in flattener.bids() {
            let matches = flattener.items().iter().filter(|i| i.id == bid.item_id).count();
            assert_eq!(matches, 1);
            if let Some(bidder) = &bid.bidder_id {
                let users = flattener.users().iter().filter(|u| &u.user_id == bidder).count();
                assert_eq!(users, 1);
            }
        }
        for item in flattener.items() {
            let users = flattener.users().iter().filter(|u| u.user_id == item.seller_id).count();
            assert_eq!(users, 1);
        }

        assert_eq!(
            flattener.counts(),
            RelationCounts {
                items: 3,
                categories: 3,
                belongs: 4,
                bids: 3,
                users: 3,
            }
        );
    }
}
