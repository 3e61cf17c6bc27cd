use crate::notices::Notice;
use maud::{html, Markup};

pub fn notice_banner(notice: &Notice) -> Markup {
    html! {
        div class=(notice.severity.css_class()) role="status" {
            strong { (notice.title) }
            p { (notice.description) }
        }
    }
}
