use std::net::IpAddr;

use device_fingerprint_types::{attributes::AttributeMap, domain::Domain};

use crate::{
    errors::CollectError,
    host::{HostIdentity, LocalHost},
    machine_id::{format_mac, HardwareNode, NodeSource},
};

use super::Collector;

/// Collects the [`Domain::Network`] attributes.
/// If any of the lookups fail, the whole domain fails.
#[derive(Debug, Default, Clone)]
pub struct NetworkCollector<H = LocalHost, N = HardwareNode> {
    host: H,
    node: N,
}

impl<H: HostIdentity, N: NodeSource> NetworkCollector<H, N> {
    /// Collect from the given sources instead of this machine.
    pub const fn new(host: H, node: N) -> Self {
        Self { host, node }
    }
}

/// The attributes of the network domain.
pub fn network_attributes(hostname: &str, ip_address: IpAddr, node: u64) -> AttributeMap {
    AttributeMap::from([
        ("hostname".to_string(), hostname.to_string()),
        ("ip_address".to_string(), ip_address.to_string()),
        ("mac_address".to_string(), format_mac(node)),
    ])
}

impl<H: HostIdentity, N: NodeSource> Collector for NetworkCollector<H, N> {
    fn domain(&self) -> Domain {
        Domain::Network
    }

    fn collect(&self) -> Result<AttributeMap, CollectError> {
        let hostname = self.host.hostname()?;
        let ip_address = self.host.resolve(&hostname)?;
        log::debug!(target: "network", "{hostname} resolved to {ip_address}");
        let node = self.node.node()?;
        Ok(network_attributes(&hostname, ip_address, node))
    }
}
