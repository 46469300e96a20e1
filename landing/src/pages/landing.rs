//! Landing page: embedding handshake plus the fixed section sequence.

use leptos::prelude::*;
use truthlens_core::config::EmbedConfig;
use truthlens_core::controller::{ActionDelivery, LandingController};
use truthlens_core::embed::HostAction;
use truthlens_core::sections::Section;
use truthlens_core::toast::Toast;

use crate::host::StreamlitHost;
use crate::providers::Toasts;
use crate::sections::{Education, FinalCta, Footer, Header, Hero, HowItWorks, Trends};

/// Per-mount controller, shared with the sections that talk to the host.
pub type LandingHandle = StoredValue<LandingController<StreamlitHost>, LocalStorage>;

#[component]
pub fn LandingPage() -> impl IntoView {
    let embed = expect_context::<EmbedConfig>();

    // Component bodies run once per mount, so detection does too.
    let host = StreamlitHost::detect(&embed.host_global);
    let controller: LandingHandle = StoredValue::new_local(LandingController::new(host, embed.frame_height));

    Effect::new(move || {
        controller.with_value(|c| c.on_mount());
    });

    let sections = controller.with_value(|c| c.sections());
    let render = move |section: Section| render_section(section, controller);

    let head = sections
        .iter()
        .copied()
        .take_while(|s| !s.in_main())
        .map(render)
        .collect_view();
    let main = sections
        .iter()
        .copied()
        .filter(Section::in_main)
        .map(render)
        .collect_view();
    let tail = sections
        .iter()
        .copied()
        .skip_while(|s| !s.in_main())
        .filter(|s| !s.in_main())
        .map(render)
        .collect_view();

    view! {
        <div id="truthlens-root" class="landing">
            {head}
            <main class="landing-main">{main}</main>
            {tail}
        </div>
    }
}

fn render_section(section: Section, controller: LandingHandle) -> AnyView {
    match section {
        Section::Header => view! { <Header /> }.into_any(),
        Section::Hero => view! { <Hero controller=controller /> }.into_any(),
        Section::HowItWorks => view! { <HowItWorks /> }.into_any(),
        Section::Trends => view! { <Trends /> }.into_any(),
        Section::Education => view! { <Education /> }.into_any(),
        Section::FinalCta => view! { <FinalCta controller=controller /> }.into_any(),
        Section::Footer => view! { <Footer /> }.into_any(),
    }
}

/// Send `action` to the dashboard and tell the user what happened.
pub fn dispatch_action(controller: LandingHandle, toasts: Toasts, action: HostAction) {
    match controller.with_value(|c| c.send_action(&action)) {
        Ok(ActionDelivery::Delivered) => {
            toasts.show(Toast::info("Sent to TruthLens").with_description("Results appear below the page."));
        }
        Ok(ActionDelivery::Standalone) => {
            toasts.show(
                Toast::info("Open TruthLens in the dashboard")
                    .with_description("Analysis runs inside the TruthLens dashboard."),
            );
        }
        Err(e) => {
            tracing::warn!(action = action.name(), error = %e, "host action failed");
            toasts.show(Toast::error("Could not reach the dashboard").with_description(e.to_string()));
        }
    }
}
