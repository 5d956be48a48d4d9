//! # hubkit-app
//!
//! Application layer — accessory façades and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `HubClient` — one attribute read or one command write
//!   - `HubDiscovery` — resolve the location and list raw device records
//! - Provide one **accessory façade** per capability category, combining the
//!   classifier, the value translators and a `HubClient`
//! - Build a **registry** of accessories from raw device records
//!   (`RegistryBuilder`, `DiscoveryService`) and snapshot it (`Inventory`)
//!
//! ## Dependency rule
//! Depends on `hubkit-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod accessory;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;
