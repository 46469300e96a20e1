use leptos::prelude::*;
use truthlens_core::embed::HostAction;
use truthlens_core::sections::Section;

use super::JumpLink;
use crate::pages::{LandingHandle, dispatch_action};
use crate::providers::use_toasts;

#[component]
pub fn FinalCta(controller: LandingHandle) -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <section id=Section::FinalCta.id() data-section=Section::FinalCta.id() class="final-cta">
            <div class="container">
                <h2 class="section-title">"Don't share it until you've checked it."</h2>
                <p class="section-description">
                    "Run a claim through TruthLens or catch up on today's most flagged stories."
                </p>
                <div class="cta-actions">
                    <JumpLink to=Section::Hero class="btn btn-primary">"Check a claim"</JumpLink>
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| dispatch_action(controller, toasts, HostAction::GetNews)
                    >
                        "Get breaking news"
                    </button>
                </div>
            </div>
        </section>
    }
}
