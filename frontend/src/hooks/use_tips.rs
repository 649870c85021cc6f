use shared::tips::tips_message;
use shared::{CategoryTotals, RequestGate, TipRequester, TipsConfig};
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;
use yew::prelude::*;

use crate::services::{GlooTransport, Logger};

#[derive(Clone, PartialEq, Default)]
pub struct TipsState {
    pub loading: bool,
    /// Latest tips text, or the fixed fallback message after a failure
    pub message: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct TipsActions {
    /// Ask for tips on these totals, replacing any request still in flight
    pub request: Callback<CategoryTotals>,
}

pub struct UseTipsResult {
    pub state: TipsState,
    pub actions: TipsActions,
}

#[hook]
pub fn use_tips(config: &TipsConfig) -> UseTipsResult {
    let gate = use_mut_ref(RequestGate::default);
    let loading = use_state(|| false);
    let message = use_state(|| None::<String>);

    // Unmounting aborts the request in flight and drops its reply
    {
        let gate = gate.clone();
        use_effect_with((), move |_| move || gate.borrow_mut().cancel());
    }

    let request = {
        let gate = gate.clone();
        let loading = loading.clone();
        let message = message.clone();
        use_callback(config.clone(), move |totals: CategoryTotals, config| {
            // Without an AbortController the old request still runs, but its reply is dropped
            let (ticket, transport) = match AbortController::new() {
                Ok(controller) => {
                    let transport = GlooTransport::with_abort_signal(controller.signal());
                    (gate.borrow_mut().begin_abortable(move || controller.abort()), transport)
                }
                Err(_) => (gate.borrow_mut().begin(), GlooTransport::default()),
            };
            loading.set(true);

            let requester = TipRequester::new(transport, config.clone());
            let gate = gate.clone();
            let loading = loading.clone();
            let message = message.clone();
            spawn_local(async move {
                let result = requester.request_tips(&totals).await;
                gate.borrow_mut().finish(ticket);
                if !gate.borrow().is_current(ticket) {
                    Logger::debug_with_component("tips", "dropping reply from a superseded request");
                    return;
                }
                if let Err(e) = &result {
                    Logger::warn_with_component("tips", &e.to_string());
                }
                message.set(Some(tips_message(&result)));
                loading.set(false);
            });
        })
    };

    UseTipsResult {
        state: TipsState { loading: *loading, message: (*message).clone() },
        actions: TipsActions { request },
    }
}
