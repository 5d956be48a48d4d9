//! # hubkit-adapter-hub-http
//!
//! HTTP adapter — implements the hub ports of `hubkit-app` with `reqwest`.
//!
//! ## Responsibilities
//! - `HttpHubClient`: one `GET` per attribute read, one `PUT` per command,
//!   each bounded by the configured timeout
//! - `HttpHubDiscovery`: resolve the installation's location and list its
//!   device records
//! - Map HTTP failures onto the domain error taxonomy
//!
//! ## Dependency rule
//! Same as other adapters: depends on `hubkit-app` and `hubkit-domain`.

pub mod client;
pub mod config;
pub mod discovery;
pub mod error;

pub use client::HttpHubClient;
pub use config::HubConfig;
pub use discovery::HttpHubDiscovery;
pub use error::HubHttpError;
