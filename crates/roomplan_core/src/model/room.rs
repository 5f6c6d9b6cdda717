//! Room and saved-design domain model.
//!
//! # Responsibility
//! - Describe the parametric room a scene lives in.
//! - Define the persisted `RoomDesign` record.
//!
//! # Invariants
//! - Room extents are finite and strictly positive.
//! - Wall colors are normalized `#RRGGBB` uppercase hex.
//! - Item ids inside one design are unique.

use crate::model::item::{ItemValidationError, PlacedItem};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid hex color regex"));

/// Stable identifier of a saved design.
pub type DesignId = Uuid;

/// Wall colors offered by the editor palette.
pub const WALL_COLOR_PALETTE: &[&str] = &["#FFFFFF", "#F5F5DC", "#E6E6FA", "#E0FFFF", "#FAEBD7"];

/// Room extents in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub width: f64,
    pub length: f64,
    pub height: f64,
}

impl Default for RoomDimensions {
    fn default() -> Self {
        Self {
            width: 5.0,
            length: 5.0,
            height: 3.0,
        }
    }
}

impl RoomDimensions {
    pub const fn new(width: f64, length: f64, height: f64) -> Self {
        Self {
            width,
            length,
            height,
        }
    }

    pub fn validate(&self) -> Result<(), RoomValidationError> {
        let ok = [self.width, self.length, self.height]
            .iter()
            .all(|value| value.is_finite() && *value > 0.0);
        if ok {
            Ok(())
        } else {
            Err(RoomValidationError::InvalidDimensions(*self))
        }
    }
}

/// Floor finish of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorType {
    #[default]
    Hardwood,
    Carpet,
    Tile,
    Laminate,
}

impl FloorType {
    /// All floor finishes in palette order.
    pub const ALL: [FloorType; 4] = [
        FloorType::Hardwood,
        FloorType::Carpet,
        FloorType::Tile,
        FloorType::Laminate,
    ];

    /// Stable string id used in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hardwood => "hardwood",
            Self::Carpet => "carpet",
            Self::Tile => "tile",
            Self::Laminate => "laminate",
        }
    }

    /// Parses a floor type; accepts any letter case.
    pub fn parse(value: &str) -> Result<Self, RoomValidationError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hardwood" => Ok(Self::Hardwood),
            "carpet" => Ok(Self::Carpet),
            "tile" => Ok(Self::Tile),
            "laminate" => Ok(Self::Laminate),
            _ => Err(RoomValidationError::UnknownFloorType(value.to_string())),
        }
    }
}

/// Normalized `#RRGGBB` wall color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WallColor(String);

impl WallColor {
    pub fn parse(value: &str) -> Result<Self, RoomValidationError> {
        let trimmed = value.trim();
        if !HEX_COLOR_RE.is_match(trimmed) {
            return Err(RoomValidationError::InvalidWallColor(value.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for WallColor {
    fn default() -> Self {
        Self("#FFFFFF".to_string())
    }
}

impl Display for WallColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for WallColor {
    type Error = RoomValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<WallColor> for String {
    fn from(value: WallColor) -> Self {
        value.0
    }
}

/// Validation failures for rooms and saved designs.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomValidationError {
    EmptyName,
    InvalidDimensions(RoomDimensions),
    InvalidWallColor(String),
    UnknownFloorType(String),
    DuplicateItemId(String),
    InvalidItem {
        index: usize,
        source: ItemValidationError,
    },
}

impl Display for RoomValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "design name must not be empty"),
            Self::InvalidDimensions(d) => write!(
                f,
                "room dimensions must be positive, got {}x{}x{}",
                d.width, d.length, d.height
            ),
            Self::InvalidWallColor(value) => {
                write!(f, "wall color must be #RRGGBB hex, got `{value}`")
            }
            Self::UnknownFloorType(value) => write!(f, "unknown floor type `{value}`"),
            Self::DuplicateItemId(id) => write!(f, "duplicate item id in design: {id}"),
            Self::InvalidItem { index, source } => write!(f, "invalid item #{index}: {source}"),
        }
    }
}

impl Error for RoomValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidItem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Persisted snapshot of one room design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDesign {
    pub id: DesignId,
    pub name: String,
    pub dimensions: RoomDimensions,
    pub furniture: Vec<PlacedItem>,
    pub wall_color: WallColor,
    pub floor_type: FloorType,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds.
    pub updated_at: i64,
}

impl RoomDesign {
    /// Creates an empty design with a generated id and current timestamps.
    pub fn new(name: impl Into<String>, dimensions: RoomDimensions) -> Self {
        let now = now_epoch_ms();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            dimensions,
            furniture: Vec::new(),
            wall_color: WallColor::default(),
            floor_type: FloorType::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Validates the record before persistence.
    pub fn validate(&self) -> Result<(), RoomValidationError> {
        if self.name.trim().is_empty() {
            return Err(RoomValidationError::EmptyName);
        }
        self.dimensions.validate()?;

        let mut seen = HashSet::with_capacity(self.furniture.len());
        for (index, item) in self.furniture.iter().enumerate() {
            item.validate()
                .map_err(|source| RoomValidationError::InvalidItem { index, source })?;
            if !seen.insert(item.id.as_str()) {
                return Err(RoomValidationError::DuplicateItemId(item.id.clone()));
            }
        }
        Ok(())
    }
}

/// Current wall-clock time as Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
