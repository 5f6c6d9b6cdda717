//! Typed layout recommendation payload.

use crate::model::item::PlacedItem;
use serde::{Deserialize, Serialize};

/// One suggested furniture layout.
///
/// Positions in `furniture` are absolute for the room the recommendation
/// was produced for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub furniture: Vec<PlacedItem>,
}

impl Recommendation {
    /// Names of the included items in layout order.
    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.furniture.iter().map(|item| item.name.as_str())
    }
}
