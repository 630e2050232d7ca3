use device_fingerprint_types::{attributes::AttributeMap, domain::Domain};

use crate::errors::CollectError;

use self::{
    hardware::HardwareCollector, network::NetworkCollector, system::SystemCollector,
    timestamp::TimestampCollector,
};

/// Memory, disk & cpu capacity.
pub mod hardware;
/// Hostname, address & mac address.
pub mod network;
/// OS identity.
pub mod system;
/// Current time & timezone.
pub mod timestamp;

/// Collects the attributes of exactly one [`Domain`].
///
/// The keys of different domains must not overlap.
pub trait Collector {
    /// The domain these attributes belong to.
    fn domain(&self) -> Domain;
    /// Reads the attributes from the machine.
    fn collect(&self) -> Result<AttributeMap, CollectError>;
}

/// The collectors of all domains, reading from this machine.
pub fn default_collectors() -> Vec<Box<dyn Collector>> {
    vec![
        Box::<SystemCollector>::default(),
        Box::<NetworkCollector>::default(),
        Box::<HardwareCollector>::default(),
        Box::<TimestampCollector>::default(),
    ]
}
