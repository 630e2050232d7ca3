//! This crate contains everything that is
//! required to build a device fingerprint.
//! That includes collecting the machine attributes,
//! bringing them into a canonical form and hashing them.
//! This crate is not intended for displaying the result.
//!
//! Note that the timestamp domain takes part in the hash,
//! so two fingerprints of the same machine taken at different
//! times differ. A fingerprint is a snapshot of the machine,
//! not a stable identity.

#![deny(missing_docs)]
#![deny(warnings)]
#![deny(clippy::nursery)]
#![deny(clippy::all)]

/// Wall clock & timezone access.
pub mod clock;
/// Every attribute domain's collector.
pub mod collectors;
/// Merges all domains and creates the fingerprint.
pub mod composer;
/// Types related to errors during collecting attributes.
pub mod errors;
/// Canonical form of attributes and hashes using [`sha2`].
pub mod hash;
/// Hostname & address resolution.
pub mod host;
/// Get a unique node id per machine, used as mac address.
pub mod machine_id;
