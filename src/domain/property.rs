// src/domain/property.rs

use serde::{Deserialize, Serialize};


/// Whether a property is offered for sale or for rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingKind {
    #[serde(rename = "For Sale")]
    ForSale,
    #[serde(rename = "For Rent")]
    ForRent,
}

impl ListingKind {
    pub fn label(&self) -> &'static str {
        match self {
            ListingKind::ForSale => "For Sale",
            ListingKind::ForRent => "For Rent",
        }
    }
}

/// A property card as shown on the site, and the record stored in a wishlist.
///
/// Field names on the wire follow the listing feed (`type`, `isNew`) so a
/// persisted wishlist stays readable by anything that speaks the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub title: String,
    /// Display price, e.g. "₹1.25 Cr", "₹85 L" or "₹55,000/mo".
    pub price: String,
    pub address: String,
    pub beds: u32,
    pub baths: f32,
    pub sqft: u32,
    #[serde(rename = "type")]
    pub kind: ListingKind,
    #[serde(rename = "isNew")]
    pub is_new: bool,
    pub image: String,
}
