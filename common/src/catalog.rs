use crate::model::parcel::{Category, ParcelEntry};

/// Land parcels shown on the map, in render order.
pub const PARCEL_CATALOG: &[ParcelEntry] = &[
    ParcelEntry {
        id: "LP-101",
        title: "Commercial Plot - Sector 82",
        meta: "Near PR-7 Road, Greater Mohali",
        category: Category::Commercial,
        category_label: "Commercial",
        sector: "Sector 82",
        area: "1.20 Acres",
        price: "₹ 12.5 Cr",
        x: 34.0,
        y: 62.0,
    },
    ParcelEntry {
        id: "LP-102",
        title: "Group Housing - Sector 88",
        meta: "Planned township zone",
        category: Category::GroupHousing,
        category_label: "Group Housing",
        sector: "Sector 88",
        area: "5.00 Acres",
        price: "₹ 48.0 Cr",
        x: 52.0,
        y: 46.0,
    },
    ParcelEntry {
        id: "LP-103",
        title: "Healthcare Site - Sector 79",
        meta: "200m from arterial road",
        category: Category::Healthcare,
        category_label: "Healthcare",
        sector: "Sector 79",
        area: "2.10 Acres",
        price: "₹ 24.0 Cr",
        x: 66.0,
        y: 54.0,
    },
    ParcelEntry {
        id: "LP-104",
        title: "Education Campus - Sector 74",
        meta: "Adjacent to green belt",
        category: Category::Education,
        category_label: "Education",
        sector: "Sector 74",
        area: "3.40 Acres",
        price: "₹ 31.5 Cr",
        x: 43.0,
        y: 68.0,
    },
    ParcelEntry {
        id: "LP-105",
        title: "Hospitality Plot - Sector 90",
        meta: "High footfall corridor",
        category: Category::Hospitality,
        category_label: "Hospitality",
        sector: "Sector 90",
        area: "1.75 Acres",
        price: "₹ 19.0 Cr",
        x: 78.0,
        y: 40.0,
    },
    ParcelEntry {
        id: "LP-106",
        title: "Commercial Plot - Sector 66",
        meta: "IT City access road",
        category: Category::Commercial,
        category_label: "Commercial",
        sector: "Sector 66",
        area: "0.85 Acres",
        price: "₹ 9.2 Cr",
        x: 28.0,
        y: 40.0,
    },
];

pub fn parcel_by_id(id: &str) -> Option<&'static ParcelEntry> {
    let trimmed = id.trim();
    PARCEL_CATALOG.iter().find(|entry| entry.id == trimmed)
}

pub fn count_in_category(category: Category) -> usize {
    PARCEL_CATALOG
        .iter()
        .filter(|entry| entry.category == category)
        .count()
}
