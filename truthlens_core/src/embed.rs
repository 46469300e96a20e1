//! Embedding host seam.
//!
//! When the landing page is loaded inside a dashboard frame (a Streamlit
//! custom component), the host expects two signals after mount: "ready" and
//! the frame height it should reserve. The host is passed in explicitly as an
//! optional [`EmbeddingHost`]; `None` means the page runs standalone.

use std::cell::Cell;

use serde::{Deserialize, Serialize};

use crate::error::HostError;

/// Operations the shell invokes on an embedding host.
pub trait EmbeddingHost {
    /// Tell the host the component finished mounting (`setComponentReady`).
    fn announce_ready(&self) -> Result<(), HostError>;

    /// Ask the host to size the frame to `px` layout pixels.
    fn set_frame_height(&self, px: u32) -> Result<(), HostError>;

    /// Hand a value back to the host application (`setComponentValue`).
    fn set_component_value(&self, value: &serde_json::Value) -> Result<(), HostError>;
}

/// User actions forwarded to the host application.
///
/// Serialized with an `action` tag, which is what the dashboard dispatches on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum HostAction {
    /// Run forensic analysis on a pasted claim.
    AnalyzeText {
        /// Claim text as entered.
        text: String,
    },
    /// Fetch breaking news for the trends view.
    GetNews,
}

impl HostAction {
    /// Build an `analyze_text` action, rejecting blank input.
    pub fn analyze_text(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(HostAction::AnalyzeText {
            text: trimmed.to_string(),
        })
    }

    /// JSON value handed to [`EmbeddingHost::set_component_value`].
    pub fn to_value(&self) -> serde_json::Value {
        // Unit and struct variants with string fields always serialize.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// The `action` tag.
    pub fn name(&self) -> &'static str {
        match self {
            HostAction::AnalyzeText { .. } => "analyze_text",
            HostAction::GetNews => "get_news",
        }
    }
}

/// Result of running the mount handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandshakeOutcome {
    /// No host binding at mount time; nothing was called.
    Standalone,
    /// Both signals were delivered, ready first.
    Completed,
    /// The host misbehaved; the page keeps rendering.
    Degraded(HostError),
    /// The handshake already ran for this mount.
    AlreadyRan,
}

/// One-shot guard around the ready/height protocol.
#[derive(Debug)]
pub struct Handshake {
    frame_height: u32,
    fired: Cell<bool>,
}

impl Handshake {
    /// Create an unfired handshake reporting `frame_height` pixels.
    pub fn new(frame_height: u32) -> Self {
        Self {
            frame_height,
            fired: Cell::new(false),
        }
    }

    /// Whether [`Handshake::run`] has been called.
    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }

    /// Run the protocol at most once.
    ///
    /// The guard flips before the first host call, so a host that re-enters
    /// the page during `announce_ready` cannot trigger a second round.
    pub fn run<H: EmbeddingHost + ?Sized>(&self, host: Option<&H>) -> HandshakeOutcome {
        if self.fired.replace(true) {
            return HandshakeOutcome::AlreadyRan;
        }

        let Some(host) = host else {
            tracing::info!("no embedding host, running standalone");
            return HandshakeOutcome::Standalone;
        };

        if let Err(err) = host.announce_ready() {
            tracing::warn!(error = %err, "embedding host ready signal failed, skipping frame height");
            return HandshakeOutcome::Degraded(err);
        }

        if let Err(err) = host.set_frame_height(self.frame_height) {
            tracing::warn!(error = %err, height = self.frame_height, "embedding host frame height failed");
            return HandshakeOutcome::Degraded(err);
        }

        tracing::info!(height = self.frame_height, "embedding handshake complete");
        HandshakeOutcome::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<String>>,
        fail_ready: bool,
        fail_height: bool,
    }

    impl EmbeddingHost for Recorder {
        fn announce_ready(&self) -> Result<(), HostError> {
            self.calls.borrow_mut().push("announceReady".into());
            if self.fail_ready {
                return Err(HostError::MissingMethod("setComponentReady"));
            }
            Ok(())
        }

        fn set_frame_height(&self, px: u32) -> Result<(), HostError> {
            self.calls.borrow_mut().push(format!("setFrameHeight({px})"));
            if self.fail_height {
                return Err(HostError::Rejected("TypeError".into()));
            }
            Ok(())
        }

        fn set_component_value(&self, value: &serde_json::Value) -> Result<(), HostError> {
            self.calls.borrow_mut().push(format!("setComponentValue({value})"));
            Ok(())
        }
    }

    #[test]
    fn ready_then_height_once() {
        let host = Recorder::default();
        let handshake = Handshake::new(1000);

        assert_eq!(handshake.run(Some(&host)), HandshakeOutcome::Completed);
        assert_eq!(handshake.run(Some(&host)), HandshakeOutcome::AlreadyRan);
        assert_eq!(
            *host.calls.borrow(),
            vec!["announceReady".to_string(), "setFrameHeight(1000)".to_string()]
        );
    }

    #[test]
    fn standalone_makes_no_calls() {
        let handshake = Handshake::new(1000);
        assert_eq!(handshake.run::<Recorder>(None), HandshakeOutcome::Standalone);
        assert!(handshake.has_fired());
    }

    #[test]
    fn failed_ready_skips_height() {
        let host = Recorder {
            fail_ready: true,
            ..Default::default()
        };
        let handshake = Handshake::new(1000);

        assert_eq!(
            handshake.run(Some(&host)),
            HandshakeOutcome::Degraded(HostError::MissingMethod("setComponentReady"))
        );
        assert_eq!(*host.calls.borrow(), vec!["announceReady".to_string()]);
        assert_eq!(handshake.run(Some(&host)), HandshakeOutcome::AlreadyRan);
    }

    #[test]
    fn failed_height_is_degraded() {
        let host = Recorder {
            fail_height: true,
            ..Default::default()
        };
        let outcome = Handshake::new(640).run(Some(&host));
        assert_eq!(outcome, HandshakeOutcome::Degraded(HostError::Rejected("TypeError".into())));
        assert_eq!(host.calls.borrow().len(), 2);
    }

    #[test]
    fn actions_carry_action_tag() {
        let action = HostAction::analyze_text("  Vaccines contain microchips  ").unwrap();
        assert_eq!(
            action.to_value(),
            serde_json::json!({ "action": "analyze_text", "text": "Vaccines contain microchips" })
        );
        assert_eq!(HostAction::GetNews.to_value(), serde_json::json!({ "action": "get_news" }));
        assert_eq!(action.name(), "analyze_text");
    }

    #[test]
    fn blank_claims_are_rejected() {
        assert_eq!(HostAction::analyze_text(""), None);
        assert_eq!(HostAction::analyze_text(" \n\t"), None);
    }
}
