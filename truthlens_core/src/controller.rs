//! Landing page controller.
//!
//! One controller is built per mount of the landing page. It owns the host
//! handle detected at mount time and the one-shot handshake guard.

use crate::embed::{EmbeddingHost, Handshake, HandshakeOutcome, HostAction};
use crate::error::HostError;
use crate::sections::{LANDING_SECTIONS, Section};

/// Frame height reported to the host when nothing else is configured.
pub const DEFAULT_FRAME_HEIGHT: u32 = 1000;

/// How a host action was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionDelivery {
    /// The host received the value.
    Delivered,
    /// No host attached; the caller should tell the user.
    Standalone,
}

/// Mount lifecycle of the landing page.
#[derive(Debug)]
pub struct LandingController<H> {
    host: Option<H>,
    handshake: Handshake,
}

impl<H: EmbeddingHost> LandingController<H> {
    /// Build a controller for one mount. `host` is `None` when standalone.
    pub fn new(host: Option<H>, frame_height: u32) -> Self {
        Self {
            host,
            handshake: Handshake::new(frame_height),
        }
    }

    /// Whether an embedding host was present at mount time.
    pub fn is_embedded(&self) -> bool {
        self.host.is_some()
    }

    /// The host handle detected at mount time.
    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    /// Mount hook. Only the first call talks to the host.
    pub fn on_mount(&self) -> HandshakeOutcome {
        self.handshake.run(self.host.as_ref())
    }

    /// Sections to render, in order.
    pub fn sections(&self) -> &'static [Section] {
        &LANDING_SECTIONS
    }

    /// Forward a user action to the host application.
    pub fn send_action(&self, action: &HostAction) -> Result<ActionDelivery, HostError> {
        let Some(host) = &self.host else {
            tracing::debug!(action = action.name(), "standalone, action not forwarded");
            return Ok(ActionDelivery::Standalone);
        };
        host.set_component_value(&action.to_value())?;
        tracing::info!(action = action.name(), "action sent to embedding host");
        Ok(ActionDelivery::Delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Values {
        sent: RefCell<Vec<serde_json::Value>>,
        reject: bool,
    }

    impl EmbeddingHost for Values {
        fn announce_ready(&self) -> Result<(), HostError> {
            Ok(())
        }

        fn set_frame_height(&self, _px: u32) -> Result<(), HostError> {
            Ok(())
        }

        fn set_component_value(&self, value: &serde_json::Value) -> Result<(), HostError> {
            if self.reject {
                return Err(HostError::MissingMethod("setComponentValue"));
            }
            self.sent.borrow_mut().push(value.clone());
            Ok(())
        }
    }

    #[test]
    fn standalone_controller_keeps_actions_local() {
        let controller: LandingController<Values> = LandingController::new(None, DEFAULT_FRAME_HEIGHT);
        assert!(!controller.is_embedded());
        assert_eq!(controller.send_action(&HostAction::GetNews), Ok(ActionDelivery::Standalone));
    }

    #[test]
    fn embedded_controller_delivers_actions() {
        let controller = LandingController::new(Some(Values::default()), DEFAULT_FRAME_HEIGHT);
        let action = HostAction::analyze_text("The moon landing was staged").unwrap();

        assert_eq!(controller.send_action(&action), Ok(ActionDelivery::Delivered));
        let host = controller.host().unwrap();
        assert_eq!(host.sent.borrow()[0]["action"], "analyze_text");
    }

    #[test]
    fn rejected_action_surfaces_error() {
        let host = Values {
            reject: true,
            ..Default::default()
        };
        let controller = LandingController::new(Some(host), DEFAULT_FRAME_HEIGHT);
        assert_eq!(
            controller.send_action(&HostAction::GetNews),
            Err(HostError::MissingMethod("setComponentValue"))
        );
    }

    #[test]
    fn sections_come_from_the_fixed_list() {
        let controller: LandingController<Values> = LandingController::new(None, DEFAULT_FRAME_HEIGHT);
        assert_eq!(controller.sections(), &LANDING_SECTIONS[..]);
    }
}
