//! Placed item domain model.
//!
//! # Responsibility
//! - Define the canonical record for one furniture instance in a room.
//! - Validate geometric fields before an item enters a scene or storage.
//!
//! # Invariants
//! - `id` is unique within one scene snapshot once the item is placed.
//! - `name`, `kind`, `category` and `dimensions` do not change after creation.
//! - Position and rotation are finite; dimensions are finite and positive.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a placed item.
///
/// Kept as text because catalog and recommendation data carry
/// human-readable ids (`sofa-1`) next to generated UUIDs.
pub type ItemId = String;

/// Generates a fresh globally unique item id.
pub fn generate_item_id() -> ItemId {
    Uuid::new_v4().to_string()
}

/// Position in room space, meters. `y` is height above the floor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns whether every component is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Bounding box extents of an item, meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

/// Validation failures for [`PlacedItem`].
#[derive(Debug, Clone, PartialEq)]
pub enum ItemValidationError {
    /// `name` is empty or whitespace.
    EmptyName,
    /// At least one position component is NaN or infinite.
    NonFinitePosition(Position),
    /// Rotation is NaN or infinite.
    NonFiniteRotation(f64),
    /// At least one extent is non-finite or not strictly positive.
    InvalidDimensions(Dimensions),
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "item name must not be empty"),
            Self::NonFinitePosition(p) => write!(
                f,
                "item position must be finite, got ({}, {}, {})",
                p.x, p.y, p.z
            ),
            Self::NonFiniteRotation(r) => write!(f, "item rotation must be finite, got {r}"),
            Self::InvalidDimensions(d) => write!(
                f,
                "item dimensions must be positive, got {}x{}x{}",
                d.width, d.height, d.depth
            ),
        }
    }
}

impl Error for ItemValidationError {}

/// One furniture instance placed in a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    /// Empty until the scene assigns one.
    #[serde(default)]
    pub id: ItemId,
    pub name: String,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub position: Position,
    /// Radians about the vertical axis.
    pub rotation: f64,
    pub dimensions: Dimensions,
    /// Catalog thumbnail path. Not interpreted by core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl PlacedItem {
    /// Creates an unplaced item (empty id, origin, no rotation).
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        category: impl Into<String>,
        dimensions: Dimensions,
    ) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            kind: kind.into(),
            category: category.into(),
            position: Position::default(),
            rotation: 0.0,
            dimensions,
            image: None,
        }
    }

    /// Builder-style id override.
    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder-style position override.
    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Builder-style rotation override.
    pub fn rotated(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns whether a non-blank id is set.
    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }

    /// Validates descriptive and geometric fields.
    ///
    /// The id is not checked here; uniqueness is a collection property.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }
        if !self.position.is_finite() {
            return Err(ItemValidationError::NonFinitePosition(self.position));
        }
        if !self.rotation.is_finite() {
            return Err(ItemValidationError::NonFiniteRotation(self.rotation));
        }
        let d = self.dimensions;
        let extents_ok = [d.width, d.height, d.depth]
            .iter()
            .all(|value| value.is_finite() && *value > 0.0);
        if !extents_ok {
            return Err(ItemValidationError::InvalidDimensions(d));
        }
        Ok(())
    }
}
