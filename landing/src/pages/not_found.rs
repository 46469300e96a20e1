use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <p>"Page not found"</p>
            <a href="#/" class="btn btn-secondary">"Back to TruthLens"</a>
        </div>
    }
}
