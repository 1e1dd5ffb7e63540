use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LandingError;

/// Land-use category of a parcel. The closed set mirrors the filter chips on
/// the map; the kebab-case form is what the page markup and CSS classes use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Commercial,
    GroupHousing,
    Healthcare,
    Education,
    Hospitality,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Commercial,
        Category::GroupHousing,
        Category::Healthcare,
        Category::Education,
        Category::Hospitality,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Commercial => "commercial",
            Category::GroupHousing => "group-housing",
            Category::Healthcare => "healthcare",
            Category::Education => "education",
            Category::Hospitality => "hospitality",
        }
    }

    /// Human label shown in the detail view.
    pub fn label(self) -> &'static str {
        match self {
            Category::Commercial => "Commercial",
            Category::GroupHousing => "Group Housing",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Hospitality => "Hospitality",
        }
    }

    /// Bootstrap icon class rendered inside the marker.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Commercial => "bi-building",
            Category::GroupHousing => "bi-houses",
            Category::Healthcare => "bi-hospital",
            Category::Education => "bi-mortarboard",
            Category::Hospitality => "bi-cup-hot",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LandingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == trimmed)
            .ok_or_else(|| LandingError::UnknownCategory(trimmed.to_string()))
    }
}

/// One entry of the land parcel catalog.
///
/// `x` and `y` are the marker position as percentages of the map's width and
/// height. Entries are immutable; the catalog is compiled in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParcelEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub meta: &'static str,
    pub category: Category,
    pub category_label: &'static str,
    pub sector: &'static str,
    pub area: &'static str,
    pub price: &'static str,
    pub x: f32,
    pub y: f32,
}
