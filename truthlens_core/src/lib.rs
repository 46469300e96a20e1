//! # truthlens-core
//!
//! Platform-independent half of the TruthLens landing shell.
//!
//! The browser crate (`truthlens-landing`) owns the Leptos views and the
//! `window.Streamlit` binding. Everything with a contract worth testing lives
//! here so it runs under plain `cargo test`:
//!
//! - [`routes`] - ordered route table and hash-fragment parsing
//! - [`controller`] - landing page mount lifecycle and host handshake
//! - [`embed`] - the embedding host seam and the actions sent through it
//! - [`sections`] - the fixed landing section order
//! - [`query`] - process-wide query client shared by the component tree
//! - [`toast`] - notification queue behind the toaster surface
//! - [`config`] - shell configuration (compiled in, TOML)
//!
//! ## Example
//!
//! ```rust
//! use truthlens_core::controller::LandingController;
//! use truthlens_core::embed::{EmbeddingHost, HandshakeOutcome};
//! use truthlens_core::routes::{Page, RouteTable};
//! use truthlens_core::error::HostError;
//!
//! struct NoopHost;
//!
//! impl EmbeddingHost for NoopHost {
//!     fn announce_ready(&self) -> Result<(), HostError> { Ok(()) }
//!     fn set_frame_height(&self, _px: u32) -> Result<(), HostError> { Ok(()) }
//!     fn set_component_value(&self, _value: &serde_json::Value) -> Result<(), HostError> { Ok(()) }
//! }
//!
//! let table = RouteTable::truthlens();
//! assert_eq!(table.resolve("/"), Page::Landing);
//!
//! let controller = LandingController::new(Some(NoopHost), 1000);
//! assert_eq!(controller.on_mount(), HandshakeOutcome::Completed);
//! assert_eq!(controller.on_mount(), HandshakeOutcome::AlreadyRan);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod embed;
pub mod error;
pub mod query;
pub mod routes;
pub mod sections;
pub mod toast;

pub use config::ShellConfig;
pub use controller::LandingController;
pub use embed::{EmbeddingHost, HandshakeOutcome, HostAction};
pub use error::{ConfigError, HostError};
pub use query::QueryClient;
pub use routes::{Page, RouteTable};
pub use sections::{LANDING_SECTIONS, Section};
pub use toast::{Toast, ToastQueue};
