//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use rift_rewind::{ClientConfig, DashboardTransfer, Route};

/// Dashboard state handed over by the loading page, tagged with the route
/// it was fetched for
#[derive(Clone, Debug, PartialEq)]
pub struct PendingTransfer {
    pub route: Route,
    pub transfer: DashboardTransfer,
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Resolved once in `main`
    pub config: StoredValue<ClientConfig>,
    /// In-memory navigation state from `/loading` to `/dashboard`
    pub transfer: RwSignal<Option<PendingTransfer>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Bumped on every toast so a stale timer leaves newer ones alone
    error_seq: StoredValue<u64>,
    success_seq: StoredValue<u64>,
}

/// Provide global state to the component tree
pub fn provide_global_state(config: ClientConfig) {
    let state = GlobalState {
        config: store_value(config),
        transfer: create_rw_signal(None),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        error_seq: store_value(0),
        success_seq: store_value(0),
    };

    provide_context(state);
}

/// The state provided by [`provide_global_state`]
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    pub fn client_config(&self) -> ClientConfig {
        self.config.get_value()
    }

    pub fn match_count(&self) -> u32 {
        self.config.with_value(|c| c.match_count)
    }

    /// Stash the loading page's result for the dashboard it navigates to
    pub fn hand_off(&self, route: Route, transfer: DashboardTransfer) {
        self.transfer.set(Some(PendingTransfer { route, transfer }));
    }

    /// Take the pending transfer if it was fetched for `route`
    pub fn take_transfer(&self, route: &Route) -> Option<DashboardTransfer> {
        let pending = self.transfer.try_update_untracked(Option::take).flatten()?;
        if &pending.route == route {
            Some(pending.transfer)
        } else {
            None
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        show_toast(self.success, self.success_seq, message, 3000);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        show_toast(self.error, self.error_seq, message, 5000);
    }
}

fn show_toast(slot: RwSignal<Option<String>>, seq: StoredValue<u64>, message: &str, millis: u32) {
    let issued = seq.try_update_value(|n| {
        *n += 1;
        *n
    });
    let Some(issued) = issued else {
        return;
    };
    slot.set(Some(message.to_string()));

    gloo_timers::callback::Timeout::new(millis, move || {
        if seq.try_with_value(|current| *current == issued) == Some(true) {
            slot.try_set(None);
        }
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    async fn test_stale_timer_keeps_newer_toast() {
        let runtime = create_runtime();
        let slot = create_rw_signal(None::<String>);
        let seq = store_value(0u64);

        show_toast(slot, seq, "Insights generated!", 100);
        TimeoutFuture::new(60).await;
        show_toast(slot, seq, "Roast generated!", 100);

        // The first timer has fired by now
        TimeoutFuture::new(60).await;
        assert_eq!(slot.get_untracked().as_deref(), Some("Roast generated!"));

        TimeoutFuture::new(80).await;
        assert_eq!(slot.get_untracked(), None);

        runtime.dispose();
    }
}
