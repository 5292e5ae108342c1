// 👤 User relation + registry
//
// One row per distinct user id across the whole run.
// First write wins: a later sighting is skipped even when it carries
// fields the first one lacked (e.g. a seller rating after a bare bidder).

use super::Relation;
use crate::escape::{quote, NullStyle};
use crate::listing::UserRef;
use serde::Serialize;
use std::collections::HashSet;

// ============================================================================
// USER ROW
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRow {
    pub user_id: String,
    pub location: Option<String>,
    pub rating: Option<String>,
    pub country: Option<String>,
}

impl From<&UserRef> for UserRow {
    fn from(user: &UserRef) -> Self {
        UserRow {
            user_id: user.user_id.clone(),
            location: user.location.clone(),
            rating: user.rating.clone(),
            country: user.country.clone(),
        }
    }
}

impl Relation for UserRow {
    const FILE_NAME: &'static str = "User.dat";

    // "user_id"|"location"|rating|"country"
    fn fields(&self, style: NullStyle) -> Vec<String> {
        vec![
            quote(&self.user_id),
            style.quoted_or_null(self.location.as_deref()),
            style.bare_or_null(self.rating.as_deref()),
            style.quoted_or_null(self.country.as_deref()),
        ]
    }
}

// ============================================================================
// USER REGISTRY
// ============================================================================

/// Global seen-set of user ids plus the rows they produced
#[derive(Debug, Default)]
pub struct UserRegistry {
    seen: HashSet<String>,
    rows: Vec<UserRow>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a user; returns false (and changes nothing) if the id was seen
    pub fn register(&mut self, user: &UserRef) -> bool {
        if self.seen.contains(&user.user_id) {
            return false;
        }
        self.seen.insert(user.user_id.clone());
        self.rows.push(UserRow::from(user));
        true
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.seen.contains(user_id)
    }

    pub fn rows(&self) -> &[UserRow] {
        &self.rows
    }

    pub fn count(&self) -> usize {
        self.rows.len()
    }
}
