pub mod price;
pub mod property;
pub mod search;

pub use property::{ListingKind, Property};
pub use search::{SearchFilter, SearchState};
