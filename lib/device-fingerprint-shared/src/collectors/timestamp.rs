use chrono::{DateTime, Utc};
use device_fingerprint_types::{attributes::AttributeMap, domain::Domain};

use crate::{
    clock::{Clock, SystemClock},
    errors::CollectError,
};

use super::Collector;

/// ISO-8601 without offset. Microseconds are only
/// appended if the time has a sub-second part.
pub fn iso_timestamp(at: &DateTime<Utc>) -> String {
    if at.timestamp_subsec_micros() == 0 {
        at.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// Collects the [`Domain::Timestamp`] attributes.
#[derive(Debug, Default, Clone)]
pub struct TimestampCollector<C = SystemClock> {
    clock: C,
}

impl<C: Clock> TimestampCollector<C> {
    /// Collect from the given clock instead of the wall clock.
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> Collector for TimestampCollector<C> {
    fn domain(&self) -> Domain {
        Domain::Timestamp
    }

    fn collect(&self) -> Result<AttributeMap, CollectError> {
        Ok(AttributeMap::from([
            (
                "timestamp".to_string(),
                iso_timestamp(&self.clock.now_utc()),
            ),
            (
                "timezone".to_string(),
                self.clock.timezone_abbreviation(),
            ),
        ]))
    }
}
