//! `window.Streamlit` binding.
//!
//! The Streamlit component runtime installs a global object exposing
//! `setComponentReady`, `setFrameHeight` and `setComponentValue`. Presence of
//! the global is checked once; methods are looked up on every call so a
//! partially populated object degrades into [`HostError::MissingMethod`].

use js_sys::{Array, Function, Reflect};
use truthlens_core::{EmbeddingHost, HostError};
use wasm_bindgen::{JsCast, JsValue};

/// Handle to the host object found on the global scope.
#[derive(Debug, Clone)]
pub struct StreamlitHost {
    binding: JsValue,
}

impl StreamlitHost {
    /// Look up `global_name` on the global object. `None` when undefined or null.
    pub fn detect(global_name: &str) -> Option<Self> {
        let binding = Reflect::get(&js_sys::global(), &JsValue::from_str(global_name)).ok()?;
        if binding.is_undefined() || binding.is_null() {
            tracing::debug!(global = global_name, "no embedding host global");
            return None;
        }
        tracing::info!(global = global_name, "embedding host detected");
        Some(Self { binding })
    }

    fn call(&self, method: &'static str, args: &Array) -> Result<(), HostError> {
        let function = Reflect::get(&self.binding, &JsValue::from_str(method))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
            .ok_or(HostError::MissingMethod(method))?;

        function
            .apply(&self.binding, args)
            .map(|_| ())
            .map_err(|err| HostError::Rejected(describe(&err)))
    }
}

impl EmbeddingHost for StreamlitHost {
    fn announce_ready(&self) -> Result<(), HostError> {
        self.call("setComponentReady", &Array::new())
    }

    fn set_frame_height(&self, px: u32) -> Result<(), HostError> {
        self.call("setFrameHeight", &Array::of1(&JsValue::from(px)))
    }

    fn set_component_value(&self, value: &serde_json::Value) -> Result<(), HostError> {
        let value = js_sys::JSON::parse(&value.to_string()).map_err(|err| HostError::Rejected(describe(&err)))?;
        self.call("setComponentValue", &Array::of1(&value))
    }
}

fn describe(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use truthlens_core::embed::HandshakeOutcome;
    use truthlens_core::LandingController;
    use wasm_bindgen_test::*;

    fn install(global: &str, body: &str) {
        let factory = Function::new_no_args(body);
        let host = factory.call0(&JsValue::NULL).expect("build fake host");
        Reflect::set(&js_sys::global(), &JsValue::from_str(global), &host).expect("install global");
    }

    fn calls(global: &str) -> Vec<String> {
        let host = Reflect::get(&js_sys::global(), &JsValue::from_str(global)).expect("global");
        let calls = Reflect::get(&host, &JsValue::from_str("calls")).expect("calls");
        Array::from(&calls).iter().filter_map(|v| v.as_string()).collect()
    }

    #[wasm_bindgen_test]
    fn absent_global_is_standalone() {
        assert!(StreamlitHost::detect("__truthlensMissingHost").is_none());
    }

    #[wasm_bindgen_test]
    fn handshake_hits_streamlit_in_order() {
        install(
            "__truthlensFakeHost",
            "const calls = []; return { calls, \
             setComponentReady() { calls.push('setComponentReady'); }, \
             setFrameHeight(px) { calls.push('setFrameHeight(' + px + ')'); }, \
             setComponentValue(v) { calls.push('setComponentValue(' + v.action + ')'); } };",
        );
        let host = StreamlitHost::detect("__truthlensFakeHost");
        let controller = LandingController::new(host, 1000);

        assert_eq!(controller.on_mount(), HandshakeOutcome::Completed);
        assert_eq!(controller.on_mount(), HandshakeOutcome::AlreadyRan);
        assert_eq!(
            calls("__truthlensFakeHost"),
            vec!["setComponentReady".to_string(), "setFrameHeight(1000)".to_string()]
        );
    }

    #[wasm_bindgen_test]
    fn missing_and_throwing_methods_are_reported() {
        install(
            "__truthlensBrokenHost",
            "return { calls: [], setFrameHeight() { throw new Error('frame detached'); } };",
        );
        let host = StreamlitHost::detect("__truthlensBrokenHost").expect("host present");

        assert_eq!(host.announce_ready(), Err(HostError::MissingMethod("setComponentReady")));
        assert_eq!(host.set_frame_height(1000), Err(HostError::Rejected("frame detached".into())));
    }
}
