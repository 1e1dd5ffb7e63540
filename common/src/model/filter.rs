use std::fmt;
use std::str::FromStr;

use crate::error::LandingError;
use crate::model::parcel::{Category, ParcelEntry};

/// Raw selector value that shows every parcel.
pub const ALL_SELECTOR: &str = "all";

/// Current filter of the parcel map: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterSelector {
    #[default]
    All,
    Category(Category),
}

impl FilterSelector {
    /// Parses a chip's selector attribute. A missing attribute means "all".
    pub fn from_attribute(raw: Option<&str>) -> Result<Self, LandingError> {
        match raw {
            None => Ok(FilterSelector::All),
            Some(value) => value.parse(),
        }
    }

    pub fn matches(self, entry: &ParcelEntry) -> bool {
        match self {
            FilterSelector::All => true,
            FilterSelector::Category(category) => category == entry.category,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterSelector::All => ALL_SELECTOR,
            FilterSelector::Category(category) => category.as_str(),
        }
    }
}

impl fmt::Display for FilterSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterSelector {
    type Err = LandingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == ALL_SELECTOR {
            return Ok(FilterSelector::All);
        }
        s.parse().map(FilterSelector::Category)
    }
}

impl From<Category> for FilterSelector {
    fn from(category: Category) -> Self {
        FilterSelector::Category(category)
    }
}
