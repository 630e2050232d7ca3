use chrono::{DateTime, Datelike, Local, Offset, TimeZone, Utc};
use chrono_tz::Tz;

/// Access to the current time.
pub trait Clock {
    /// The current time in UTC.
    fn now_utc(&self) -> DateTime<Utc>;
    /// The abbreviation of the local timezone, e.g. `CET`.
    fn timezone_abbreviation(&self) -> String;
}

/// The wall clock of this machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn timezone_abbreviation(&self) -> String {
        match iana_time_zone::get_timezone() {
            Ok(name) => match name.parse::<Tz>() {
                Ok(tz) => return standard_abbreviation(&tz, Utc::now().year()),
                Err(err) => {
                    log::debug!(target: "clock", "unknown timezone {name}: {err}");
                }
            },
            Err(err) => {
                log::debug!(target: "clock", "could not read the local timezone: {err}");
            }
        }
        Local::now().format("%:z").to_string()
    }
}

/// The abbreviation of the zone's standard (non daylight saving) time
/// in the given year, e.g. `CET` instead of `CEST`.
///
/// Standard time is the one with the smaller utc offset, zones
/// with a negative daylight saving (e.g. `Europe/Dublin`) included.
pub fn standard_abbreviation(tz: &Tz, year: i32) -> String {
    // january or july, on either hemisphere
    [1, 7]
        .into_iter()
        .filter_map(|month| Utc.with_ymd_and_hms(year, month, 1, 12, 0, 0).single())
        .map(|at| at.with_timezone(tz))
        .min_by_key(|at| at.offset().fix().local_minus_utc())
        .unwrap_or_else(|| Utc::now().with_timezone(tz))
        .format("%Z")
        .to_string()
}
