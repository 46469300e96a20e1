use std::time::Duration;

use leptos::prelude::*;
use truthlens_core::config::TooltipConfig;

/// Hover hint around `children`, opening after the configured delay.
#[component]
pub fn Tooltip(label: &'static str, children: Children) -> impl IntoView {
    let delay = use_context::<TooltipConfig>().unwrap_or_default().delay_ms;
    let (open, set_open) = signal(false);
    let pending = StoredValue::new(None::<TimeoutHandle>);

    let show = move || {
        if delay == 0 {
            set_open.set(true);
            return;
        }
        let handle = set_timeout_with_handle(move || set_open.set(true), Duration::from_millis(delay)).ok();
        pending.set_value(handle);
    };
    let hide = move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
        pending.set_value(None);
        set_open.set(false);
    };

    view! {
        <span
            class="tooltip-trigger"
            tabindex="0"
            on:mouseenter=move |_| show()
            on:mouseleave=move |_| hide()
            on:focusin=move |_| show()
            on:focusout=move |_| hide()
        >
            {children()}
            <Show when=move || open.get()>
                <span role="tooltip" class="tooltip">{label}</span>
            </Show>
        </span>
    }
}
