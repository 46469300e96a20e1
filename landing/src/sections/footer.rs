use leptos::prelude::*;
use truthlens_core::sections::Section;

use super::JumpLink;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id=Section::Footer.id() data-section=Section::Footer.id() class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-title">"TruthLens"</span>
                    <span class="footer-tagline">"See through misinformation."</span>
                </div>
                <div class="footer-links">
                    <JumpLink to=Section::HowItWorks class="footer-link">"How it works"</JumpLink>
                    <JumpLink to=Section::Education class="footer-link">"Media literacy"</JumpLink>
                    <JumpLink to=Section::Trends class="footer-link">"Trends"</JumpLink>
                </div>
                <p class="footer-copyright">"© 2025 TruthLens"</p>
            </div>
        </footer>
    }
}
