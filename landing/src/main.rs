// TruthLens Landing Page — Leptos 0.8 Edition

mod app;
mod host;
mod logging;
mod pages;
mod providers;
mod router;
mod sections;

use leptos::prelude::*;
use truthlens_core::{QueryClient, ShellConfig};

use app::App;

/// Shell settings, compiled in.
const SHELL_CONFIG: &str = include_str!("../truthlens.toml");

fn main() {
    console_error_panic_hook::set_once();

    let parsed = ShellConfig::from_toml_str(SHELL_CONFIG);
    logging::init(parsed.as_ref().map_or("info", |c| c.log.level.as_str()));
    let config = match parsed {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "invalid shell config, using defaults");
            ShellConfig::default()
        }
    };

    // Created before mounting so no render pass can build a second one.
    let query_client = QueryClient::shared();

    leptos::mount::mount_to_body(move || view! { <App config=config query_client=query_client /> });
}
