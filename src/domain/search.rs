// src/domain/search.rs

use crate::domain::price::in_price_range;
use crate::domain::property::Property;

/// The user's current search panel selection. Empty strings mean "any".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    pub location: Option<String>,
    pub price_range: Option<String>,
}

impl SearchFilter {
    pub fn new(location: Option<&str>, price_range: Option<&str>) -> Self {
        Self {
            location: non_empty(location),
            price_range: non_empty(price_range),
        }
    }

    /// Location substring (case-sensitive) AND price bucket.
    pub fn matches(&self, property: &Property) -> bool {
        let location_ok = self
            .location
            .as_deref()
            .map_or(true, |loc| property.address.contains(loc));

        let price_ok = self
            .price_range
            .as_deref()
            .map_or(true, |label| in_price_range(&property.price, label));

        location_ok && price_ok
    }

    pub fn apply(&self, properties: &[Property]) -> Vec<Property> {
        properties
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

/// What the property grid is showing: everything, or a filtered subset.
#[derive(Debug, Clone)]
pub struct SearchState {
    all: Vec<Property>,
    results: Vec<Property>,
    filtered: bool,
}

impl SearchState {
    pub fn new(all: Vec<Property>) -> Self {
        Self {
            results: all.clone(),
            all,
            filtered: false,
        }
    }

    /// Run a search. An empty result set is a valid outcome.
    pub fn search(&mut self, filter: &SearchFilter) -> &[Property] {
        self.results = filter.apply(&self.all);
        self.filtered = true;
        tracing::debug!(
            location = ?filter.location,
            price_range = ?filter.price_range,
            hits = self.results.len(),
            "property search"
        );
        &self.results
    }

    /// Back to the unfiltered list.
    pub fn reset(&mut self) {
        self.results = self.all.clone();
        self.filtered = false;
    }

    pub fn results(&self) -> &[Property] {
        &self.results
    }

    pub fn is_filtered(&self) -> bool {
        self.filtered
    }

    pub fn is_empty_result(&self) -> bool {
        self.filtered && self.results.is_empty()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
