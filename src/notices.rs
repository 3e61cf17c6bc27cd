// src/notices.rs
//! Transient user-facing messages shown in the banner under the header.

use crate::domain::Property;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Destructive,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => "notice notice-info",
            Severity::Destructive => "notice notice-destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    pub fn no_results() -> Self {
        Self::destructive(
            "No properties found",
            "Try different filter criteria to see more properties.",
        )
    }

    pub fn auth_required() -> Self {
        Self::destructive(
            "Authentication required",
            "Please log in to add properties to your wishlist",
        )
    }

    pub fn added(property: &Property) -> Self {
        Self::info(
            "Added to wishlist",
            format!("{} has been added to your wishlist.", property.title),
        )
    }

    pub fn removed(property: &Property) -> Self {
        Self::info(
            "Removed from wishlist",
            format!("{} has been removed from your wishlist.", property.title),
        )
    }

    pub fn signed_out() -> Self {
        Self::info("Signed out", "See you again soon.")
    }

    /// Rebuild a notice carried across a redirect as `?notice=<code>`.
    /// `property` is the one named by `?id=` when the code needs it.
    pub fn from_code(code: &str, property: Option<&Property>) -> Option<Self> {
        match (code, property) {
            ("added", Some(p)) => Some(Self::added(p)),
            ("removed", Some(p)) => Some(Self::removed(p)),
            ("auth", _) => Some(Self::auth_required()),
            ("signed_out", _) => Some(Self::signed_out()),
            _ => None,
        }
    }
}
