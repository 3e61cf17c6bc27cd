pub mod errors;
pub mod html;
pub mod redirect;

pub use errors::{error_to_response, ResultResp};

pub use html::{css_response, html_response};
pub use redirect::{redirect, redirect_with_cookies, safe_return_path};
