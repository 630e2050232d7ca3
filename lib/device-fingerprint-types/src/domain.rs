use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A group of machine attributes that is collected as one unit.
/// If collecting fails, the whole domain is replaced by a single
/// error attribute.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum Domain {
    /// OS name, version, release, architecture and processor.
    System,
    /// Hostname, local ip address and mac address.
    Network,
    /// Memory, disk and cpu capacity.
    Hardware,
    /// Current UTC time and local timezone.
    Timestamp,
}

impl Domain {
    /// The value of the error attribute that replaces
    /// this domain's attributes, e.g. `Network info error: <msg>`.
    pub fn error_message(&self, err: impl std::fmt::Display) -> String {
        format!("{self} info error: {err}")
    }
}
