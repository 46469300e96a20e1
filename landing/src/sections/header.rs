use leptos::prelude::*;
use truthlens_core::sections::Section;

use super::JumpLink;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header id=Section::Header.id() data-section=Section::Header.id() class="nav">
            <div class="nav-inner">
                <a href="#/" class="nav-brand">
                    <span class="nav-logo">"🔍"</span>
                    <span class="nav-title">"TruthLens"</span>
                </a>
                <nav class="nav-links">
                    <JumpLink to=Section::HowItWorks class="nav-link">"How it works"</JumpLink>
                    <JumpLink to=Section::Trends class="nav-link">"Trends"</JumpLink>
                    <JumpLink to=Section::Education class="nav-link">"Learn"</JumpLink>
                    <JumpLink to=Section::Hero class="nav-cta">"Check a claim"</JumpLink>
                </nav>
            </div>
        </header>
    }
}
