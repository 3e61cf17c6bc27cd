pub mod error;
pub mod home;
pub mod localities;
pub mod login;
pub mod properties;
pub mod wishlist;

pub use error::error_page;
pub use home::{home_page, HomeVm};
pub use localities::localities_page;
pub use login::login_page;
pub use properties::properties_page;
pub use wishlist::wishlist_page;
