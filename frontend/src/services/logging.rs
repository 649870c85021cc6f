//! Component-tagged logging to the browser console.
//!
//! Events from the `shared` crate go through `tracing`; [`Logger::init`]
//! routes them to the console as well.

pub struct Logger;

impl Logger {
    /// Install the console subscriber for `tracing` events. Later calls are no-ops.
    pub fn init() {
        if tracing_wasm::try_set_as_global_default().is_ok() {
            tracing::debug!("tracing subscriber installed");
        }
    }

    pub fn debug_with_component(component: &str, message: &str) {
        gloo::console::debug!(format!("[{}] {}", component, message));
    }

    pub fn info_with_component(component: &str, message: &str) {
        gloo::console::info!(format!("[{}] {}", component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(format!("[{}] {}", component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(format!("[{}] {}", component, message));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_init_twice_is_harmless() {
        Logger::init();
        Logger::init();
        assert!(tracing::dispatcher::has_been_set());
    }
}
