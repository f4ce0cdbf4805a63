//! Dish: a single menu item.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a dish: its ordinal position in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(pub u32);

impl DishId {
    /// Create a dish id from a catalog position.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The catalog index this id points at.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Coerce a navigation parameter into a dish id.
    ///
    /// Surrounding whitespace is ignored. Anything that is not a non-negative
    /// integer (including the empty string) yields `None`.
    pub fn parse_param(param: &str) -> Option<Self> {
        param.trim().parse::<u32>().ok().map(Self)
    }
}

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A menu item. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    /// Position in the catalog.
    pub id: DishId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Image path, relative to the configured image base URL.
    pub image: String,
    /// Menu category ("mains", "appetizer", ...).
    pub category: String,
    /// Whether the dish is promoted on the home screen.
    #[serde(default)]
    pub featured: bool,
    /// Price as printed on the menu.
    pub price: String,
    /// Optional badge ("Hot", "New").
    #[serde(default)]
    pub label: String,
}

impl Dish {
    /// Resolve the image reference against a base URL.
    pub fn image_uri(&self, base_url: &str) -> String {
        format!("{base_url}{}", self.image)
    }
}
