use leptos::prelude::*;
use truthlens_core::routes::RouteTable;
use truthlens_core::{QueryClient, ShellConfig};

use crate::providers::{Toaster, Toasts};
use crate::router::HashRouter;

/// Root component: process-wide providers, then the router.
///
/// `query_client` comes from `main`, never from a render pass.
#[component]
pub fn App(config: ShellConfig, query_client: QueryClient) -> impl IntoView {
    provide_context(query_client);
    provide_context(config.tooltip.clone());
    provide_context(config.embed.clone());
    Toasts::provide(config.notifications.toast_limit, config.notifications.dismiss_after_ms);

    view! {
        <Toaster />
        <HashRouter table=RouteTable::truthlens() />
    }
}
