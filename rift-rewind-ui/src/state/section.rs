//! Section Fetching
//!
//! Binds the core [`SectionFetch`] state machine to a signal. Each mounted
//! AI widget owns one handle, its own client and a [`MountGuard`]; both are
//! released on unmount so late completions never reach a disposed widget.

use leptos::*;
use rift_rewind::{FetchRequest, FetchState, MountGuard, Section, SectionFetch};
use std::rc::Rc;

use crate::api::{mount_client, UiClient};
use crate::state::global::{use_global_state, GlobalState};

pub struct SectionHandle<T: 'static> {
    fetch: RwSignal<SectionFetch<T>>,
    client: StoredValue<Rc<UiClient>>,
    guard: StoredValue<MountGuard>,
    state: GlobalState,
}

impl<T: 'static> Clone for SectionHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SectionHandle<T> {}

/// Create the handle for a widget and start it if it should auto-start
pub fn use_section<T>(request: FetchRequest, preloaded: Option<T>) -> SectionHandle<T>
where
    T: Section + Clone + 'static,
{
    let state = use_global_state();
    let client = mount_client(&state.client_config());
    let guard = MountGuard::new();

    let on_unmount = guard.clone();
    on_cleanup(move || on_unmount.cancel());

    let fetch = match preloaded {
        Some(value) => SectionFetch::preloaded(request, value),
        None => SectionFetch::new(request),
    };

    let handle = SectionHandle {
        fetch: create_rw_signal(fetch),
        client: store_value(client),
        guard: store_value(guard),
        state,
    };

    if handle.fetch.with_untracked(SectionFetch::should_auto_start) {
        handle.run();
    }

    handle
}

impl<T> SectionHandle<T>
where
    T: Section + Clone + 'static,
{
    /// Start from `Idle` or retry from `Error` with the original request
    pub fn run(&self) {
        let request = self
            .fetch
            .try_update(|fetch| match fetch.start() {
                Some(request) => Some(request),
                None => fetch.retry(),
            })
            .flatten();
        let Some(request) = request else {
            return;
        };

        let fetch = self.fetch;
        let client = self.client.get_value();
        let guard = self.guard.get_value();
        let state = self.state;

        spawn_local(async move {
            let result = guard.guard(T::fetch(&*client, &request)).await;
            if guard.is_cancelled() {
                return;
            }

            match &result {
                Ok(_) => state.show_success(T::KIND.success_message()),
                Err(e) => state.show_error(&e.user_message()),
            }
            fetch.try_update(|f| f.finish(result));
        });
    }

    pub fn with_state<O>(&self, f: impl FnOnce(&FetchState<T>) -> O) -> O {
        self.fetch.with(|fetch| f(fetch.state()))
    }
}
