use device_fingerprint_types::{attributes::AttributeMap, hash::FingerprintHash};
use sha2::{Digest, Sha256};

/// Generates a SHA-256 hash for the given bytes.
pub fn sha256_hash(bytes: &[u8]) -> FingerprintHash {
    FingerprintHash(Sha256::digest(bytes).into())
}

/// Serializes the attributes into one string, independent of
/// their insertion order.
///
/// Entries are sorted by key (byte-wise, ascending) and
/// concatenated as `key:value` without any separator between entries.
pub fn canonicalize(attributes: &AttributeMap) -> String {
    let mut entries: Vec<_> = attributes.iter().collect();
    entries.sort_unstable_by(|(key_a, _), (key_b, _)| key_a.cmp(key_b));
    entries
        .into_iter()
        .map(|(key, value)| format!("{key}:{value}"))
        .collect()
}

/// Hashes the UTF-8 bytes of the canonical form of the attributes.
pub fn fingerprint_hash(attributes: &AttributeMap) -> FingerprintHash {
    sha256_hash(canonicalize(attributes).as_bytes())
}
