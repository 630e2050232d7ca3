//! This crate contains custom types used for the device fingerprint.
//! It should generally not depend on crates that cannot be compiled
//! to all rust targets (e.g. WASM).

#![deny(missing_docs)]
#![deny(warnings)]
#![deny(clippy::nursery)]
#![deny(clippy::all)]

/// The flat name to value mapping every collector produces.
pub mod attributes;
/// The attribute domains that take part in a fingerprint.
pub mod domain;
/// The digest type of a fingerprint.
pub mod hash;
