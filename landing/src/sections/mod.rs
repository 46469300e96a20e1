// Landing page sections
// Order lives in truthlens_core::sections::LANDING_SECTIONS, not here.

mod education;
mod final_cta;
mod footer;
mod header;
mod hero;
mod how_it_works;
mod trends;

use leptos::ev;
use leptos::prelude::*;
use truthlens_core::sections::Section;

pub use education::Education;
pub use final_cta::FinalCta;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use trends::Trends;

/// In-page link to another section.
///
/// A plain `#id` anchor would rewrite the route fragment and land on the
/// not-found page, so this scrolls the section into view instead.
#[component]
pub fn JumpLink(to: Section, class: &'static str, children: Children) -> impl IntoView {
    view! {
        <a
            href="#/"
            class=class
            on:click=move |event: ev::MouseEvent| {
                event.prevent_default();
                scroll_to(to);
            }
        >
            {children()}
        </a>
    }
}

fn scroll_to(section: Section) {
    if let Some(element) = document().get_element_by_id(section.id()) {
        element.scroll_into_view();
    }
}
