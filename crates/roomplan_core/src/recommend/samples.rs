//! Built-in reference layouts for a 5x5 m room.

use crate::model::item::{Dimensions, PlacedItem, Position};
use crate::model::recommendation::Recommendation;
use std::f64::consts::FRAC_PI_4;

fn item(
    id: &str,
    name: &str,
    kind: &str,
    category: &str,
    position: (f64, f64, f64),
    rotation: f64,
    dimensions: (f64, f64, f64),
) -> PlacedItem {
    let (x, y, z) = position;
    let (width, height, depth) = dimensions;
    PlacedItem::new(name, kind, category, Dimensions::new(width, height, depth))
        .with_id(id)
        .at(Position::new(x, y, z))
        .rotated(rotation)
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

/// Reference recommendations in presentation order.
pub fn sample_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            id: "rec-1".to_string(),
            title: "Living Room Arrangement".to_string(),
            description: "Optimal furniture placement for conversation and TV viewing."
                .to_string(),
            tags: tags(&["Living Room", "Conversation Area"]),
            furniture: vec![
                item(
                    "sofa-1",
                    "Modern Sofa",
                    "sofa",
                    "Seating",
                    (-1.5, 0.4, 0.0),
                    0.0,
                    (2.0, 0.8, 0.9),
                ),
                item(
                    "chair-1",
                    "Accent Chair",
                    "chair",
                    "Seating",
                    (1.0, 0.45, 1.0),
                    -FRAC_PI_4,
                    (0.7, 0.9, 0.7),
                ),
                item(
                    "table-1",
                    "Coffee Table",
                    "table",
                    "Tables",
                    (0.0, 0.225, 0.0),
                    0.0,
                    (1.2, 0.45, 0.6),
                ),
            ],
        },
        Recommendation {
            id: "rec-2".to_string(),
            title: "Bedroom Layout".to_string(),
            description: "Cozy bedroom arrangement with optimal space utilization.".to_string(),
            tags: tags(&["Bedroom", "Cozy", "Space-saving"]),
            furniture: vec![
                item(
                    "bed-1",
                    "Queen Bed",
                    "bed",
                    "Bedroom",
                    (0.0, 0.25, 0.0),
                    0.0,
                    (1.6, 0.5, 2.0),
                ),
                item(
                    "cabinet-3",
                    "Dresser",
                    "cabinet",
                    "Storage",
                    (-1.5, 0.4, -1.0),
                    0.0,
                    (1.2, 0.8, 0.5),
                ),
                item(
                    "table-3",
                    "Side Table",
                    "table",
                    "Tables",
                    (1.0, 0.3, -0.5),
                    0.0,
                    (0.5, 0.6, 0.5),
                ),
            ],
        },
        Recommendation {
            id: "rec-3".to_string(),
            title: "Home Office Setup".to_string(),
            description: "Productive workspace with ergonomic arrangement.".to_string(),
            tags: tags(&["Office", "Productivity", "Ergonomic"]),
            furniture: vec![
                item(
                    "table-2",
                    "Desk",
                    "table",
                    "Tables",
                    (0.0, 0.375, -1.0),
                    0.0,
                    (1.6, 0.75, 0.9),
                ),
                item(
                    "chair-2",
                    "Office Chair",
                    "chair",
                    "Seating",
                    (0.0, 0.45, 0.0),
                    0.0,
                    (0.5, 0.9, 0.5),
                ),
                item(
                    "cabinet-2",
                    "Bookshelf",
                    "cabinet",
                    "Storage",
                    (1.5, 0.9, -1.0),
                    0.0,
                    (0.8, 1.8, 0.3),
                ),
            ],
        },
    ]
}
