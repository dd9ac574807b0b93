//! Browser API access
//!
//! `gloo-net` transport for the shared [`rift_rewind::RiftClient`], plus
//! the one-time base URL resolution done in `main`.

pub mod client;

pub use client::{mount_client, resolve_client_config, GlooDelay, GlooTransport, UiClient};
