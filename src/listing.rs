// 📦 Listing Model - one auction record from an eBay-style export
// Extracted from a raw JSON value so a missing key becomes a typed error
// naming the listing and the field instead of a panic

use crate::error::FlattenError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// CORE TYPES
// ============================================================================

/// UserRef - a seller or bidder as embedded in a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub user_id: String,
    pub rating: Option<String>,
    pub location: Option<String>,
    pub country: Option<String>,
}

/// BidEntry - one element of a listing's `Bids` array
///
/// Every field is optional: the `Bid` wrapper, the bidder, or any single
/// scalar may be null in the source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BidEntry {
    /// `None` when the bidder object or its `UserID` is absent
    pub bidder: Option<UserRef>,
    pub time: Option<String>,
    pub amount: Option<String>,
}

/// Listing - raw (un-normalized) view of one auction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    // Required scalars
    pub item_id: String,
    pub number_of_bids: String,
    pub first_bid: String,
    pub currently: String,
    pub name: String,
    pub started: String,
    pub ends: String,

    // Optional scalars
    pub buy_price: Option<String>,
    pub description: Option<String>,

    /// Category labels in source order, duplicates included
    pub categories: Vec<String>,

    /// Seller, with location/country taken from the listing itself
    pub seller: UserRef,

    /// Empty when `Bids` is null or absent
    pub bids: Vec<BidEntry>,
}

// ============================================================================
// EXTRACTION
// ============================================================================

impl Listing {
    /// Build a listing from one element of the `Items` array
    ///
    /// # Errors
    /// * `MissingField` - a required key is absent or null
    /// * `InvalidField` - a key holds the wrong JSON shape
    pub fn from_value(value: &Value) -> Result<Listing, FlattenError> {
        let obj = value.as_object().ok_or_else(|| FlattenError::InvalidField {
            item_id: None,
            field: "Items[]",
            reason: "is not an object".to_string(),
        })?;

        let item_id = obj
            .get("ItemID")
            .and_then(scalar_text)
            .ok_or(FlattenError::MissingField {
                item_id: None,
                field: "ItemID",
            })?;
        let id = Some(item_id.clone());

        let seller = extract_seller(obj, &id)?;
        let categories = extract_categories(obj, &id)?;
        let bids = extract_bids(obj, &id)?;

        Ok(Listing {
            number_of_bids: required_text(obj, "Number_of_Bids", &id)?,
            first_bid: required_text(obj, "First_Bid", &id)?,
            currently: required_text(obj, "Currently", &id)?,
            name: required_text(obj, "Name", &id)?,
            started: required_text(obj, "Started", &id)?,
            ends: required_text(obj, "Ends", &id)?,
            buy_price: optional_text(obj, "Buy_Price"),
            description: optional_text(obj, "Description"),
            categories,
            seller,
            bids,
            item_id,
        })
    }
}

fn extract_seller(
    obj: &Map<String, Value>,
    id: &Option<String>,
) -> Result<UserRef, FlattenError> {
    let seller = match obj.get("Seller") {
        None | Some(Value::Null) => {
            return Err(FlattenError::MissingField {
                item_id: id.clone(),
                field: "Seller",
            })
        }
        Some(v) => v.as_object().ok_or_else(|| FlattenError::InvalidField {
            item_id: id.clone(),
            field: "Seller",
            reason: "is not an object".to_string(),
        })?,
    };

    let user_id = seller
        .get("UserID")
        .and_then(scalar_text)
        .ok_or_else(|| FlattenError::MissingField {
            item_id: id.clone(),
            field: "Seller.UserID",
        })?;

    Ok(UserRef {
        user_id,
        rating: optional_text(seller, "Rating"),
        // Seller location lives on the listing, not on the seller object
        location: optional_text(obj, "Location"),
        country: optional_text(obj, "Country"),
    })
}

fn extract_categories(
    obj: &Map<String, Value>,
    id: &Option<String>,
) -> Result<Vec<String>, FlattenError> {
    match obj.get("Category") {
        None | Some(Value::Null) => Err(FlattenError::MissingField {
            item_id: id.clone(),
            field: "Category",
        }),
        Some(Value::Array(labels)) => Ok(labels.iter().filter_map(scalar_text).collect()),
        Some(_) => Err(FlattenError::InvalidField {
            item_id: id.clone(),
            field: "Category",
            reason: "is not an array".to_string(),
        }),
    }
}

fn extract_bids(
    obj: &Map<String, Value>,
    id: &Option<String>,
) -> Result<Vec<BidEntry>, FlattenError> {
    match obj.get("Bids") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(entries)) => Ok(entries.iter().map(extract_bid).collect()),
        Some(_) => Err(FlattenError::InvalidField {
            item_id: id.clone(),
            field: "Bids",
            reason: "is not an array".to_string(),
        }),
    }
}

/// `{"Bid": {"Bidder": {...}, "Time": ..., "Amount": ...}}`
fn extract_bid(entry: &Value) -> BidEntry {
    let Some(bid) = entry.get("Bid").and_then(Value::as_object) else {
        return BidEntry::default();
    };

    let bidder = bid
        .get("Bidder")
        .and_then(Value::as_object)
        .and_then(|bidder| {
            let user_id = bidder.get("UserID").and_then(scalar_text)?;
            Some(UserRef {
                user_id,
                rating: optional_text(bidder, "Rating"),
                location: optional_text(bidder, "Location"),
                country: optional_text(bidder, "Country"),
            })
        });

    BidEntry {
        bidder,
        time: optional_text(bid, "Time"),
        amount: optional_text(bid, "Amount"),
    }
}

// ============================================================================
// VALUE HELPERS
// ============================================================================

/// Text form of a JSON scalar; `None` for null
///
/// eBay exports store counts and ids as strings, but numbers are accepted too.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn optional_text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(scalar_text)
}

fn required_text(
    obj: &Map<String, Value>,
    field: &'static str,
    id: &Option<String>,
) -> Result<String, FlattenError> {
    optional_text(obj, field).ok_or_else(|| FlattenError::MissingField {
        item_id: id.clone(),
        field,
    })
}
