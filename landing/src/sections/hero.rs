use leptos::prelude::*;
use truthlens_core::embed::HostAction;
use truthlens_core::sections::Section;
use truthlens_core::toast::Toast;

use crate::pages::{LandingHandle, dispatch_action};
use crate::providers::use_toasts;

#[component]
pub fn Hero(controller: LandingHandle) -> impl IntoView {
    let toasts = use_toasts();
    let (claim, set_claim) = signal(String::new());

    let submit = move |_| match claim.with(|text| HostAction::analyze_text(text)) {
        Some(action) => {
            dispatch_action(controller, toasts, action);
            set_claim.set(String::new());
        }
        None => toasts.show(Toast::error("Paste a claim first")),
    };

    view! {
        <section id=Section::Hero.id() data-section=Section::Hero.id() class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-badge">"AI-assisted fact checking"</div>
                    <h1 class="hero-title">
                        <span class="hero-title-accent">"See through"</span>
                        <br />
                        "misinformation."
                    </h1>
                    <p class="hero-description">
                        "Paste a headline, a post or a forwarded message. TruthLens looks for "
                        "manipulation tactics, checks the sources and tells you how much to trust it."
                    </p>
                </div>
                <div class="hero-checker">
                    <label for="claim-input" class="hero-checker-label">"Check a claim"</label>
                    <textarea
                        id="claim-input"
                        class="hero-checker-input"
                        rows="4"
                        placeholder="e.g. \"Scientists confirm 5G towers spread viruses\""
                        prop:value=claim
                        on:input=move |ev| set_claim.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn-primary" on:click=submit>
                        "Analyze"
                    </button>
                </div>
            </div>
        </section>
    }
}
