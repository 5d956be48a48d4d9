//! # hubkit-domain
//!
//! Pure domain model for the hubkit hub bridge.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error taxonomy
//! - Define **Device descriptors** (a device's command and attribute endpoints)
//! - Define **Hub values** (the wire type of attribute reads and command writes)
//! - **Classify** each descriptor into exactly one capability category
//! - **Translate** characteristic values to and from the hub's vocabulary
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod capability;
pub mod characteristic;
pub mod descriptor;
pub mod hub_value;
pub mod info;
