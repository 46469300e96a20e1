//! Hash-fragment router.
//!
//! The page may be served from a static path inside the host's frame, so
//! navigation never leaves the document: the route is read from
//! `location.hash` and re-evaluated on `hashchange`.

use leptos::ev;
use leptos::prelude::*;
use truthlens_core::routes::{Page, RouteTable, path_from_hash};

use crate::pages::{LandingPage, NotFound};

fn current_path() -> String {
    let hash = window().location().hash().unwrap_or_default();
    path_from_hash(&hash)
}

/// Mounts the page `table` resolves for the current location.
///
/// Mounted once at the root; the `hashchange` listener lives as long as the
/// document.
#[component]
pub fn HashRouter(table: RouteTable) -> impl IntoView {
    let (path, set_path) = signal(current_path());
    let _listener = window_event_listener(ev::hashchange, move |_| set_path.set(current_path()));

    // Memo only notifies on a different page, so `#/` -> `#/?ref=x` keeps the
    // landing page mounted.
    let page = Memo::new(move |_| table.resolve(&path.get()));

    move || match page.get() {
        Page::Landing => view! { <LandingPage /> }.into_any(),
        Page::NotFound => view! { <NotFound /> }.into_any(),
    }
}
