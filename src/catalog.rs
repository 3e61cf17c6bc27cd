// src/catalog.rs
use crate::domain::{ListingKind, Property};

/// Localities offered in the search panel.
pub const HUBLI_LOCALITIES: &[&str] = &[
    "Vidyanagar",
    "Keshwapur",
    "Navanagar",
    "Unkal",
    "Gokul Road",
];

/// Price bucket labels offered in the search panel.
pub const PRICE_BUCKETS: &[&str] = &[
    "₹50L - ₹1Cr",
    "₹1Cr - ₹2Cr",
    "₹2Cr - ₹5Cr",
    "₹5Cr - ₹10Cr",
    "₹10Cr+",
];

/// Category chips. Echoed back in the form, they don't filter anything.
pub const PROPERTY_CATEGORIES: &[&str] = &["Residential", "Commercial", "Land", "Luxury"];

pub const DEFAULT_CATEGORY: &str = "Residential";

/// Where property cards come from.
pub trait PropertySource {
    fn properties(&self) -> Vec<Property>;

    fn find(&self, id: i64) -> Option<Property> {
        self.properties().into_iter().find(|p| p.id == id)
    }
}

/// The featured listings bundled with the site.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl PropertySource for StaticCatalog {
    fn properties(&self) -> Vec<Property> {
        vec![
            property(
                1,
                "Modern Minimalist Villa",
                "₹1.25 Cr",
                "Vidyanagar, Hubli",
                (4, 3.0, 2800),
                ListingKind::ForSale,
                true,
                "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?auto=format&fit=crop&w=2075&q=80",
            ),
            property(
                2,
                "Luxury Beachfront Condo",
                "₹55,000/mo",
                "Keshwapur, Hubli",
                (3, 2.5, 1950),
                ListingKind::ForRent,
                false,
                "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?auto=format&fit=crop&w=2070&q=80",
            ),
            property(
                3,
                "Contemporary City Apartment",
                "₹85 L",
                "Navanagar, Hubli",
                (2, 2.0, 1200),
                ListingKind::ForSale,
                true,
                "https://images.unsplash.com/photo-1613977257363-707ba9348227?auto=format&fit=crop&w=2070&q=80",
            ),
            property(
                4,
                "Panoramic Mountain Retreat",
                "₹3.2 Cr",
                "Unkal, Hubli",
                (5, 4.5, 3600),
                ListingKind::ForSale,
                false,
                "https://images.unsplash.com/photo-1602343168117-bb8a12d7c180?auto=format&fit=crop&w=2025&q=80",
            ),
        ]
    }
}

/// Number of catalog properties whose address mentions `locality`.
pub fn locality_count(source: &impl PropertySource, locality: &str) -> usize {
    source
        .properties()
        .iter()
        .filter(|p| p.address.contains(locality))
        .count()
}

#[allow(clippy::too_many_arguments)]
fn property(
    id: i64,
    title: &str,
    price: &str,
    address: &str,
    (beds, baths, sqft): (u32, f32, u32),
    kind: ListingKind,
    is_new: bool,
    image: &str,
) -> Property {
    Property {
        id,
        title: title.to_string(),
        price: price.to_string(),
        address: address.to_string(),
        beds,
        baths,
        sqft,
        kind,
        is_new,
        image: image.to_string(),
    }
}
