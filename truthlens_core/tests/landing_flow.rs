//! End-to-end flow of the landing shell without a browser: resolve the
//! location, mount the landing controller against a recording host, and
//! check what the host observed.

use std::cell::RefCell;

use pretty_assertions::assert_eq;
use truthlens_core::controller::LandingController;
use truthlens_core::embed::{EmbeddingHost, HandshakeOutcome, HostAction};
use truthlens_core::error::HostError;
use truthlens_core::routes::{Page, RouteTable, path_from_hash};
use truthlens_core::{QueryClient, Section, ShellConfig};

#[derive(Default)]
struct RecordingHost {
    log: RefCell<Vec<String>>,
}

impl EmbeddingHost for RecordingHost {
    fn announce_ready(&self) -> Result<(), HostError> {
        self.log.borrow_mut().push("announceReady".to_string());
        Ok(())
    }

    fn set_frame_height(&self, px: u32) -> Result<(), HostError> {
        self.log.borrow_mut().push(format!("setFrameHeight({px})"));
        Ok(())
    }

    fn set_component_value(&self, value: &serde_json::Value) -> Result<(), HostError> {
        self.log.borrow_mut().push(format!("setComponentValue({value})"));
        Ok(())
    }
}

/// A host whose methods are all missing.
struct HollowHost;

impl EmbeddingHost for HollowHost {
    fn announce_ready(&self) -> Result<(), HostError> {
        Err(HostError::MissingMethod("setComponentReady"))
    }

    fn set_frame_height(&self, _px: u32) -> Result<(), HostError> {
        Err(HostError::MissingMethod("setFrameHeight"))
    }

    fn set_component_value(&self, _value: &serde_json::Value) -> Result<(), HostError> {
        Err(HostError::MissingMethod("setComponentValue"))
    }
}

fn mount(hash: &str, host: Option<RecordingHost>) -> Option<LandingController<RecordingHost>> {
    let config = ShellConfig::default();
    match RouteTable::truthlens().resolve(&path_from_hash(hash)) {
        Page::Landing => {
            let controller = LandingController::new(host, config.embed.frame_height);
            controller.on_mount();
            Some(controller)
        }
        Page::NotFound => None,
    }
}

#[test]
fn embedded_landing_mount_reports_ready_then_height() {
    let controller = mount("#/", Some(RecordingHost::default())).expect("landing page");

    let ids: Vec<&str> = controller.sections().iter().map(Section::id).collect();
    assert_eq!(
        ids,
        vec!["header", "hero", "how-it-works", "trends", "education", "final-cta", "footer"]
    );

    // a re-render calls the hook again; the host must not see a second round
    assert_eq!(controller.on_mount(), HandshakeOutcome::AlreadyRan);

    controller.send_action(&HostAction::GetNews).expect("deliver action");
    let expected = vec![
        "announceReady".to_string(),
        "setFrameHeight(1000)".to_string(),
        r#"setComponentValue({"action":"get_news"})"#.to_string(),
    ];
    assert_eq!(*host_log(&controller), expected);
}

#[test]
fn standalone_landing_mount_is_quiet() {
    let controller = mount("", None).expect("landing page");
    assert!(!controller.is_embedded());
    assert_eq!(controller.on_mount(), HandshakeOutcome::AlreadyRan);
}

#[test]
fn other_paths_render_not_found() {
    for hash in ["#/archive", "#/authority", "#/learn/bias", "#/results?id=4", "#//x/"] {
        assert!(mount(hash, Some(RecordingHost::default())).is_none(), "hash {hash}");
    }
}

#[test]
fn hollow_host_does_not_stop_rendering() {
    let controller = LandingController::new(Some(HollowHost), 1000);
    assert_eq!(
        controller.on_mount(),
        HandshakeOutcome::Degraded(HostError::MissingMethod("setComponentReady"))
    );
    assert_eq!(controller.sections().len(), 7);
    assert!(controller.send_action(&HostAction::GetNews).is_err());
}

#[test]
fn query_client_survives_re_renders() {
    let render = || QueryClient::shared();
    assert!(render().ptr_eq(&render()));
}

fn host_log(controller: &LandingController<RecordingHost>) -> std::cell::Ref<'_, Vec<String>> {
    controller.host().expect("embedded").log.borrow()
}
