//! Static furniture catalog data and filtering.
//!
//! # Invariants
//! - Entries keep declaration order in every query result.
//! - Name matching is case-insensitive substring matching.

use crate::model::item::{Dimensions, PlacedItem, Position};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One catalog template. Has no placement of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub image: String,
    pub dimensions: Dimensions,
}

impl CatalogEntry {
    /// Builds a placeable item standing on the floor at the room center.
    ///
    /// The id is left blank so the scene assigns a fresh one; adding the
    /// same template twice therefore never collides.
    pub fn instantiate(&self) -> PlacedItem {
        let mut item = PlacedItem::new(
            self.name.clone(),
            self.kind.clone(),
            self.category.clone(),
            self.dimensions,
        )
        .at(Position::new(0.0, self.dimensions.height / 2.0, 0.0));
        item.image = Some(self.image.clone());
        item
    }
}

/// Filter for [`search`].
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Substring matched against entry names. Blank matches everything.
    pub text: String,
    /// `None` means all categories.
    pub category: Option<String>,
}

impl CatalogQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
        }
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

const THUMB_WIDE: &str = "/placeholder.svg?height=100&width=150";
const THUMB_SQUARE: &str = "/placeholder.svg?height=100&width=100";

fn entry(
    id: &str,
    name: &str,
    kind: &str,
    category: &str,
    image: &str,
    whd: [f64; 3],
) -> CatalogEntry {
    CatalogEntry {
        id: id.to_string(),
        name: name.to_string(),
        kind: kind.to_string(),
        category: category.to_string(),
        image: image.to_string(),
        dimensions: Dimensions::new(whd[0], whd[1], whd[2]),
    }
}

static CATALOG: Lazy<Vec<CatalogEntry>> = Lazy::new(|| {
    vec![
        entry(
            "sofa-1",
            "Modern Sofa",
            "sofa",
            "Seating",
            THUMB_WIDE,
            [2.0, 0.8, 0.9],
        ),
        entry(
            "chair-1",
            "Accent Chair",
            "chair",
            "Seating",
            THUMB_SQUARE,
            [0.7, 0.9, 0.7],
        ),
        entry(
            "chair-2",
            "Dining Chair",
            "chair",
            "Seating",
            THUMB_SQUARE,
            [0.5, 0.9, 0.5],
        ),
        entry(
            "table-1",
            "Coffee Table",
            "table",
            "Tables",
            THUMB_WIDE,
            [1.2, 0.45, 0.6],
        ),
        entry(
            "table-2",
            "Dining Table",
            "table",
            "Tables",
            THUMB_WIDE,
            [1.6, 0.75, 0.9],
        ),
        entry(
            "table-3",
            "Side Table",
            "table",
            "Tables",
            THUMB_SQUARE,
            [0.5, 0.6, 0.5],
        ),
        entry(
            "cabinet-1",
            "TV Stand",
            "cabinet",
            "Storage",
            THUMB_WIDE,
            [1.8, 0.6, 0.4],
        ),
        entry(
            "cabinet-2",
            "Bookshelf",
            "cabinet",
            "Storage",
            THUMB_SQUARE,
            [0.8, 1.8, 0.3],
        ),
        entry(
            "cabinet-3",
            "Dresser",
            "cabinet",
            "Storage",
            THUMB_WIDE,
            [1.2, 0.8, 0.5],
        ),
        entry(
            "bed-1",
            "Queen Bed",
            "bed",
            "Bedroom",
            THUMB_WIDE,
            [1.6, 0.5, 2.0],
        ),
        entry(
            "bed-2",
            "King Bed",
            "bed",
            "Bedroom",
            THUMB_WIDE,
            [1.8, 0.5, 2.1],
        ),
        entry(
            "lamp-1",
            "Floor Lamp",
            "lamp",
            "Decor",
            THUMB_SQUARE,
            [0.3, 1.5, 0.3],
        ),
        entry(
            "plant-1",
            "Indoor Plant",
            "plant",
            "Decor",
            THUMB_SQUARE,
            [0.4, 1.2, 0.4],
        ),
    ]
});

/// All catalog entries in declaration order.
pub fn entries() -> &'static [CatalogEntry] {
    CATALOG.as_slice()
}

/// Distinct categories in first-seen order.
pub fn categories() -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for entry in entries() {
        if !seen.contains(&entry.category.as_str()) {
            seen.push(entry.category.as_str());
        }
    }
    seen
}

/// Looks one template up by catalog id.
pub fn find(id: &str) -> Option<&'static CatalogEntry> {
    entries().iter().find(|entry| entry.id == id)
}

/// Filters the catalog by name substring and optional category.
pub fn search(query: &CatalogQuery) -> Vec<&'static CatalogEntry> {
    let needle = query.text.trim().to_lowercase();
    entries()
        .iter()
        .filter(|entry| {
            query
                .category
                .as_deref()
                .map_or(true, |category| entry.category == category)
        })
        .filter(|entry| needle.is_empty() || entry.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{categories, entries, find, search, CatalogQuery};

    #[test]
    fn categories_follow_declaration_order() {
        assert_eq!(
            categories(),
            vec!["Seating", "Tables", "Storage", "Bedroom", "Decor"]
        );
    }

    #[test]
    fn blank_query_returns_everything() {
        assert_eq!(search(&CatalogQuery::default()).len(), entries().len());
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let hits = search(&CatalogQuery::new("TABLE"));
        let names: Vec<_> = hits.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["Coffee Table", "Dining Table", "Side Table"]);
    }

    #[test]
    fn category_filter_combines_with_text() {
        let hits = search(&CatalogQuery::new("chair").in_category("Seating"));
        assert_eq!(hits.len(), 2);
        assert!(search(&CatalogQuery::new("chair").in_category("Tables")).is_empty());
    }

    #[test]
    fn instantiate_places_item_on_floor_without_id() {
        let bookshelf = find("cabinet-2").expect("bookshelf exists");
        let item = bookshelf.instantiate();
        assert!(!item.has_id());
        assert_eq!(item.position.y, 0.9);
        assert_eq!(item.rotation, 0.0);
        assert_eq!(item.kind, "cabinet");
    }
}
