//! Filterable parcel map.
//!
//! [`PinMap`] owns the catalog, the current [`FilterSelector`] and the list of
//! filter chips found on the page. Every filter change rebuilds the marker list
//! from the catalog in catalog order; clicking a marker projects its entry into
//! [`ModalContent`] and pushes that into the shared detail view.

use crate::error::LandingError;
use crate::model::filter::FilterSelector;
use crate::model::parcel::ParcelEntry;

/// Class carried by the chip that matches the current filter.
pub const ACTIVE_CHIP_CLASS: &str = "is-active";

/// Fields of the shared detail view, overwritten wholesale on every click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub title: String,
    /// `"<id> • <meta>"`.
    pub meta: String,
    pub category_label: String,
    pub sector: String,
    pub area: String,
    pub price: String,
}

impl From<&ParcelEntry> for ModalContent {
    fn from(entry: &ParcelEntry) -> Self {
        Self {
            title: entry.title.to_string(),
            meta: format!("{} • {}", entry.id, entry.meta),
            category_label: entry.category_label.to_string(),
            sector: entry.sector.to_string(),
            area: entry.area.to_string(),
            price: entry.price.to_string(),
        }
    }
}

/// The shared detail view. Populated even when it cannot be shown.
pub trait DetailView {
    fn populate(&mut self, content: &ModalContent);
}

/// External show capability of the detail dialog.
pub trait ModalCapability {
    fn show(&self);
}

/// Render description of one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct PinMarker {
    pub parcel_id: &'static str,
    pub class_name: String,
    pub icon_class: String,
    pub left: String,
    pub top: String,
    pub aria_label: String,
}

impl From<&ParcelEntry> for PinMarker {
    fn from(entry: &ParcelEntry) -> Self {
        Self {
            parcel_id: entry.id,
            class_name: format!("lp-pin lp-pin--{}", entry.category),
            icon_class: format!("bi {}", entry.category.icon()),
            left: format!("{}%", entry.x),
            top: format!("{}%", entry.y),
            aria_label: format!("{} pin", entry.title),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PinMap {
    catalog: &'static [ParcelEntry],
    filter: FilterSelector,
    chips: Vec<FilterSelector>,
    markers: Vec<PinMarker>,
}

impl PinMap {
    /// Creates the map with the default "all" filter and renders it once.
    pub fn new(catalog: &'static [ParcelEntry], chips: Vec<FilterSelector>) -> Self {
        let mut map = Self {
            catalog,
            filter: FilterSelector::default(),
            chips,
            markers: Vec::new(),
        };
        map.render();
        map
    }

    pub fn filter(&self) -> FilterSelector {
        self.filter
    }

    pub fn markers(&self) -> &[PinMarker] {
        &self.markers
    }

    /// Entries passing the current filter, in catalog order.
    pub fn visible_entries(&self) -> impl Iterator<Item = &'static ParcelEntry> + '_ {
        let filter = self.filter;
        self.catalog.iter().filter(move |entry| filter.matches(entry))
    }

    /// Replaces the filter and rebuilds every marker from scratch.
    pub fn set_filter(&mut self, selector: FilterSelector) -> &[PinMarker] {
        self.filter = selector;
        self.render();
        &self.markers
    }

    /// Chip activation: the chip's selector becomes the filter.
    pub fn activate_chip(&mut self, index: usize) -> Option<FilterSelector> {
        let selector = *self.chips.get(index)?;
        self.set_filter(selector);
        Some(selector)
    }

    /// Whether each chip, in page order, should carry the active class.
    pub fn chip_states(&self) -> Vec<bool> {
        self.chips.iter().map(|chip| *chip == self.filter).collect()
    }

    /// Marker click: fills the detail view, then shows it when a modal
    /// capability is available.
    pub fn open_parcel<M: ModalCapability>(
        &self,
        parcel_id: &str,
        view: &mut impl DetailView,
        modal: Option<&M>,
    ) -> Result<ModalContent, LandingError> {
        let entry = self
            .catalog
            .iter()
            .find(|entry| entry.id == parcel_id.trim())
            .ok_or_else(|| LandingError::UnknownParcel(parcel_id.to_string()))?;
        let content = ModalContent::from(entry);
        view.populate(&content);
        if let Some(modal) = modal {
            modal.show();
        }
        Ok(content)
    }

    fn render(&mut self) {
        self.markers = self.visible_entries().map(PinMarker::from).collect();
    }
}
