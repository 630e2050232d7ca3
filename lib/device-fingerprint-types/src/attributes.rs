use indexmap::IndexMap;

/// A mapping from attribute name to an already formatted value,
/// e.g. `total_memory` => `8.00 GB`.
///
/// The insertion order is only kept for display, hashing always
/// sorts the entries by key.
pub type AttributeMap = IndexMap<String, String>;

/// The only key of a domain's mapping if the domain failed to collect.
pub const ERROR_KEY: &str = "error";
