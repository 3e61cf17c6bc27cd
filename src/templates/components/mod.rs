pub mod card;
pub mod notice;
pub mod search;

pub use card::{card, property_card};
pub use notice::notice_banner;
pub use search::{search_panel, SearchPanelVm};
