use std::net::IpAddr;

use anyhow::anyhow;
use chrono::{DateTime, TimeZone, Utc};
use device_fingerprint_types::{attributes::AttributeMap, domain::Domain};

use crate::{
    clock::Clock, collectors::Collector, errors::CollectError, host::HostIdentity,
    machine_id::NodeSource,
};

pub struct FixedClock {
    pub now: DateTime<Utc>,
    pub timezone: String,
}

impl FixedClock {
    pub fn new_year_2024() -> Self {
        Self {
            now: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            timezone: "UTC".to_string(),
        }
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.now
    }

    fn timezone_abbreviation(&self) -> String {
        self.timezone.clone()
    }
}

pub struct FixedHost {
    pub hostname: String,
    pub address: Option<IpAddr>,
}

impl HostIdentity for FixedHost {
    fn hostname(&self) -> Result<String, CollectError> {
        Ok(self.hostname.clone())
    }

    fn resolve(&self, hostname: &str) -> Result<IpAddr, CollectError> {
        self.address.ok_or_else(|| CollectError::Resolve {
            host: hostname.to_string(),
            reason: "Name or service not known".to_string(),
        })
    }
}

pub struct FixedNode(pub u64);

impl NodeSource for FixedNode {
    fn node(&self) -> Result<u64, CollectError> {
        Ok(self.0)
    }
}

/// Returns the same attributes on every call.
pub struct FixedCollector {
    pub domain: Domain,
    pub attributes: AttributeMap,
}

impl FixedCollector {
    pub fn new(domain: Domain, attributes: &[(&str, &str)]) -> Self {
        Self {
            domain,
            attributes: attributes
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }
}

impl Collector for FixedCollector {
    fn domain(&self) -> Domain {
        self.domain
    }

    fn collect(&self) -> Result<AttributeMap, CollectError> {
        Ok(self.attributes.clone())
    }
}

pub struct FailingCollector(pub Domain);

impl Collector for FailingCollector {
    fn domain(&self) -> Domain {
        self.0
    }

    fn collect(&self) -> Result<AttributeMap, CollectError> {
        Err(anyhow!("permission denied").into())
    }
}

pub struct PanickingCollector(pub Domain);

impl Collector for PanickingCollector {
    fn domain(&self) -> Domain {
        self.0
    }

    fn collect(&self) -> Result<AttributeMap, CollectError> {
        panic!("sensor went away")
    }
}

/// The simplified 4 domain scenario, one key per domain.
pub fn scenario_collectors() -> [FixedCollector; 4] {
    [
        FixedCollector::new(Domain::System, &[("os_name", "Linux")]),
        FixedCollector::new(Domain::Network, &[("hostname", "host1")]),
        FixedCollector::new(Domain::Hardware, &[("total_memory", "8.00 GB")]),
        FixedCollector::new(Domain::Timestamp, &[("timestamp", "2024-01-01T00:00:00")]),
    ]
}

pub const SCENARIO_CANONICAL: &str =
    "hostname:host1os_name:Linuxtimestamp:2024-01-01T00:00:00total_memory:8.00 GB";
pub const SCENARIO_HASH: &str = "9512e1210b79d27df4408480d5f7a9c842f8ec87d58b9ca3cfdca4dc6a283469";
