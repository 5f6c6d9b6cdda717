//! Showcase gallery search.
//!
//! # Responsibility
//! - Provide keyword search over the static design showcase.
//!
//! # Invariants
//! - Matching is case-insensitive substring matching on title, description
//!   or any tag.
//! - Result ordering follows showcase declaration order.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const DEFAULT_SEARCH_LIMIT: u32 = 20;
const GALLERY_IMAGE: &str = "/placeholder.svg?height=300&width=400";

/// One showcased community design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub likes: u32,
    pub views: u32,
    pub tags: Vec<String>,
    pub author: String,
}

/// Search options for gallery queries.
#[derive(Debug, Clone)]
pub struct GalleryQuery {
    /// User query text. Blank returns the whole gallery.
    pub text: String,
    /// Maximum number of hits to return.
    pub limit: u32,
}

impl GalleryQuery {
    /// Creates a query with default limit.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

static GALLERY: Lazy<Vec<GalleryEntry>> = Lazy::new(|| {
    let entry = |id: u32,
                 title: &str,
                 description: &str,
                 likes: u32,
                 views: u32,
                 tags: [&str; 3],
                 author: &str| GalleryEntry {
        id,
        title: title.to_string(),
        description: description.to_string(),
        image: GALLERY_IMAGE.to_string(),
        likes,
        views,
        tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
        author: author.to_string(),
    };
    vec![
        entry(
            1,
            "Modern Living Room",
            "A minimalist living room with clean lines and neutral colors.",
            124,
            1240,
            ["Modern", "Living Room", "Minimalist"],
            "Jane Doe",
        ),
        entry(
            2,
            "Cozy Bedroom Retreat",
            "A warm and inviting bedroom with soft textures and warm lighting.",
            98,
            876,
            ["Bedroom", "Cozy", "Warm"],
            "John Smith",
        ),
        entry(
            3,
            "Scandinavian Kitchen",
            "A bright and airy kitchen with wooden accents and clean design.",
            156,
            1567,
            ["Kitchen", "Scandinavian", "Bright"],
            "Emma Johnson",
        ),
        entry(
            4,
            "Industrial Office Space",
            "A productive workspace with industrial elements and modern technology.",
            87,
            932,
            ["Office", "Industrial", "Workspace"],
            "Michael Brown",
        ),
        entry(
            5,
            "Bohemian Dining Room",
            "An eclectic dining space with vibrant colors and mixed patterns.",
            112,
            1089,
            ["Dining Room", "Bohemian", "Colorful"],
            "Sophia Garcia",
        ),
        entry(
            6,
            "Minimalist Bathroom",
            "A clean and serene bathroom with spa-like features.",
            76,
            845,
            ["Bathroom", "Minimalist", "Spa"],
            "David Wilson",
        ),
    ]
});

/// Whole showcase in declaration order.
pub fn gallery_entries() -> &'static [GalleryEntry] {
    GALLERY.as_slice()
}

/// Searches the showcase.
pub fn search_gallery(query: &GalleryQuery) -> Vec<&'static GalleryEntry> {
    let needle = query.text.trim().to_lowercase();
    let limit = usize::try_from(query.limit).unwrap_or(usize::MAX);
    gallery_entries()
        .iter()
        .filter(|entry| needle.is_empty() || entry_matches(entry, &needle))
        .take(limit)
        .collect()
}

fn entry_matches(entry: &GalleryEntry, needle: &str) -> bool {
    entry.title.to_lowercase().contains(needle)
        || entry.description.to_lowercase().contains(needle)
        || entry
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}
