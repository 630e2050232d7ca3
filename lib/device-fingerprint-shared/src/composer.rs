use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

use device_fingerprint_types::{
    attributes::{AttributeMap, ERROR_KEY},
    domain::Domain,
    hash::FingerprintHash,
};
use serde::{Deserialize, Serialize};

use crate::{
    collectors::{default_collectors, Collector},
    hash::fingerprint_hash,
};

/// The attributes of a single domain, as they were collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSection {
    /// The domain of the attributes
    pub domain: Domain,
    /// Either the domain's attributes or a single
    /// [`ERROR_KEY`] attribute.
    pub attributes: AttributeMap,
}

/// The result of [`generate_fingerprint`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintResult {
    /// Every domain's attributes, in collection order.
    pub sections: Vec<DomainSection>,
    /// All sections merged into one mapping.
    /// This is what the hash is built from.
    pub attributes: AttributeMap,
    /// The SHA-256 hash over the canonical form of [`Self::attributes`].
    pub hash: FingerprintHash,
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|msg| msg.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

fn error_attributes(domain: Domain, err: impl std::fmt::Display) -> AttributeMap {
    let msg = domain.error_message(err);
    log::warn!(target: "composer", "{msg}");
    AttributeMap::from([(ERROR_KEY.to_string(), msg)])
}

/// Runs a single collector.
///
/// Errors & panics of the collector never leave this function,
/// instead the domain's attributes are replaced by a single
/// [`ERROR_KEY`] attribute.
pub fn collect_domain(collector: &dyn Collector) -> DomainSection {
    let domain = collector.domain();
    let attributes = match panic::catch_unwind(AssertUnwindSafe(|| collector.collect())) {
        Ok(Ok(attributes)) => attributes,
        Ok(Err(err)) => error_attributes(domain, err),
        Err(payload) => error_attributes(
            domain,
            format!("collector panicked: {}", panic_message(payload.as_ref())),
        ),
    };
    DomainSection { domain, attributes }
}

/// Merges all sections in order into one mapping.
///
/// Domains are expected to never share keys, if they do
/// the later value wins. Only the [`ERROR_KEY`] of multiple
/// failed domains is allowed to collide.
pub fn merge_sections(sections: &[DomainSection]) -> AttributeMap {
    let mut merged = AttributeMap::new();
    for section in sections {
        for (key, value) in &section.attributes {
            if let Some(previous) = merged.insert(key.clone(), value.clone()) {
                log::warn!(
                    target: "composer",
                    "{} overwrites attribute {key} (previously {previous})",
                    section.domain
                );
                debug_assert!(key == ERROR_KEY, "duplicate attribute key {key}");
            }
        }
    }
    merged
}

/// Collects all given domains, merges them & hashes the result.
pub fn generate_fingerprint_with(collectors: &[&dyn Collector]) -> FingerprintResult {
    let sections: Vec<_> = collectors
        .iter()
        .map(|&collector| collect_domain(collector))
        .collect();
    let attributes = merge_sections(&sections);
    let hash = fingerprint_hash(&attributes);
    log::debug!(target: "composer", "fingerprint of {} attributes: {hash}", attributes.len());

    FingerprintResult {
        sections,
        attributes,
        hash,
    }
}

/// Collects all domains of this machine, merges them & hashes the result.
///
/// Nothing is cached, every call collects from scratch.
pub fn generate_fingerprint() -> FingerprintResult {
    let collectors = default_collectors();
    let collectors: Vec<&dyn Collector> = collectors.iter().map(|c| c.as_ref()).collect();
    generate_fingerprint_with(&collectors)
}
