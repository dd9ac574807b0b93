//! HTTP API Client
//!
//! `gloo-net` implementation of the core [`Transport`] with a blanket
//! timeout and abort-on-unmount.

use async_trait::async_trait;
use futures_util::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use leptos::on_cleanup;
use rift_rewind::orchestrator::Delay;
use rift_rewind::{ClientConfig, ClientError, RiftClient, Transport};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsValue;
use web_sys::AbortController;

/// `window` property holding deployment overrides
pub const CONFIG_GLOBAL: &str = "__RIFT_REWIND_CONFIG__";

pub type UiClient = RiftClient<GlooTransport>;

/// Resolve the backend once from `window.__RIFT_REWIND_CONFIG__.apiBaseUrl`
/// and `location.hostname`
pub fn resolve_client_config() -> ClientConfig {
    let window = web_sys::window();

    let override_url = window
        .as_ref()
        .and_then(|w| js_sys::Reflect::get(w, &JsValue::from_str(CONFIG_GLOBAL)).ok())
        .filter(|cfg| cfg.is_object())
        .and_then(|cfg| js_sys::Reflect::get(&cfg, &JsValue::from_str("apiBaseUrl")).ok())
        .and_then(|url| url.as_string());

    let host = window.and_then(|w| w.location().hostname().ok());

    ClientConfig::resolve(override_url.as_deref(), host.as_deref())
}

/// A client owned by the current component: its in-flight requests are
/// aborted when the component unmounts
pub fn mount_client(config: &ClientConfig) -> Rc<UiClient> {
    let client = Rc::new(RiftClient::new(GlooTransport::new(config), config.clone()));

    let owned = Rc::clone(&client);
    on_cleanup(move || owned.transport().abort_all());

    client
}

/// Browser [`Transport`] over the Fetch API
pub struct GlooTransport {
    base_url: String,
    timeout_ms: u64,
    inflight: RefCell<Vec<AbortController>>,
}

impl GlooTransport {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout_ms: config.timeout_ms(),
            inflight: RefCell::new(Vec::new()),
        }
    }

    /// Abort every request still in flight
    pub fn abort_all(&self) {
        for controller in self.inflight.borrow_mut().drain(..) {
            controller.abort();
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        method: &'static str,
        path: &str,
        builder: RequestBuilder,
        body: Option<Value>,
    ) -> Result<Value, ClientError> {
        let controller = AbortController::new()
            .map_err(|_| ClientError::Config("AbortController unavailable".to_string()))?;
        let builder = builder.abort_signal(Some(&controller.signal()));
        let request = match body {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(|e| ClientError::Network(e.to_string()))?;

        self.inflight.borrow_mut().push(controller.clone());
        let outcome = {
            let send = request.send();
            let timeout = TimeoutFuture::new(self.timeout_ms.min(u32::MAX as u64) as u32);
            futures_util::pin_mut!(send, timeout);
            match select(send, timeout).await {
                Either::Left((result, _)) => Some(result),
                Either::Right(_) => None,
            }
        };
        self.inflight.borrow_mut().retain(|c| c != &controller);

        let response = match outcome {
            Some(Ok(response)) => response,
            Some(Err(_)) if controller.signal().aborted() => return Err(ClientError::Cancelled),
            Some(Err(e)) => return Err(ClientError::Network(e.to_string())),
            None => {
                controller.abort();
                web_sys::console::warn_1(&format!("{} {} timed out", method, path).into());
                return Err(ClientError::Timeout(self.timeout_ms));
            }
        };

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let err = ClientError::from_response(status, &body);
            web_sys::console::warn_1(&format!("{} {} failed: {}", method, path, err).into());
            return Err(err);
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.send("GET", path, Request::get(&self.url(path)), None)
            .await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        self.send("POST", path, Request::post(&self.url(path)), Some(body))
            .await
    }
}

/// Timer-backed [`Delay`] for the loading page
pub struct GlooDelay;

#[async_trait(?Send)]
impl Delay for GlooDelay {
    async fn sleep(&self, duration: Duration) {
        TimeoutFuture::new(duration.as_millis().min(u32::MAX as u128) as u32).await;
    }
}
