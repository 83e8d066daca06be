use std::fmt;
use std::str::FromStr;

use chrono_tz::Tz;

use crate::error::InvalidZoneError;

/// Name under which the local system zone is selected and displayed.
pub const LOCAL_ZONE_NAME: &str = "Local";

/// A validated time zone, or the local-time sentinel.
///
/// The only way to obtain a `Named` value from a string is [`TimeZoneId::parse`],
/// so any `TimeZoneId` held by the clock refers to a zone the database knows.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum TimeZoneId {
    /// Operating system local time.
    #[default]
    Local,
    /// IANA zone from the bundled database.
    Named(Tz),
}

impl TimeZoneId {
    /// Accepts the local sentinel (`"Local"` or `"local"`) or an exact IANA name.
    pub fn parse(name: &str) -> Result<Self, InvalidZoneError> {
        if name == LOCAL_ZONE_NAME || name == "local" {
            return Ok(TimeZoneId::Local);
        }
        name.parse::<Tz>()
            .map(TimeZoneId::Named)
            .map_err(|_| InvalidZoneError::new(name))
    }

    #[inline]
    pub const fn utc() -> Self {
        TimeZoneId::Named(Tz::UTC)
    }

    #[inline]
    pub fn is_local(&self) -> bool {
        matches!(self, TimeZoneId::Local)
    }

    /// Display name; round-trips through [`TimeZoneId::parse`].
    pub fn name(&self) -> &'static str {
        match self {
            TimeZoneId::Local => LOCAL_ZONE_NAME,
            TimeZoneId::Named(tz) => tz.name(),
        }
    }
}

impl fmt::Display for TimeZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeZoneId {
    type Err = InvalidZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeZoneId::parse(s)
    }
}

/// Every selectable zone name: the local sentinel first, then the IANA
/// database sorted by name.
pub fn zone_catalog() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = chrono_tz::TZ_VARIANTS.iter().map(|tz| tz.name()).collect();
    names.sort_unstable();
    names.dedup();
    names.insert(0, LOCAL_ZONE_NAME);
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_utc() {
        assert_eq!(TimeZoneId::parse("UTC"), Ok(TimeZoneId::utc()));
    }

    #[test]
    fn parse_iana_name() {
        let zone = TimeZoneId::parse("Europe/Paris").unwrap();
        assert_eq!(zone, TimeZoneId::Named(Tz::Europe__Paris));
        assert_eq!(zone.name(), "Europe/Paris");
    }

    #[test]
    fn parse_local_sentinel() {
        assert_eq!(TimeZoneId::parse("Local"), Ok(TimeZoneId::Local));
        assert_eq!(TimeZoneId::parse("local"), Ok(TimeZoneId::Local));
        assert!(TimeZoneId::Local.is_local());
    }

    #[test]
    fn parse_unknown_reports_requested_name() {
        let err = TimeZoneId::parse("Not/AZone").unwrap_err();
        assert_eq!(err, InvalidZoneError::new("Not/AZone"));
    }

    #[test]
    fn parse_empty_is_rejected() {
        assert!(TimeZoneId::parse("").is_err());
    }

    #[test]
    fn name_round_trips() {
        for name in ["Local", "UTC", "Asia/Tokyo", "America/Argentina/Buenos_Aires"] {
            let zone: TimeZoneId = name.parse().unwrap();
            assert_eq!(zone.to_string(), name);
        }
    }

    #[test]
    fn default_is_local() {
        assert_eq!(TimeZoneId::default(), TimeZoneId::Local);
    }

    // ── zone_catalog ──────────────────────────────────────────────────────

    #[test]
    fn catalog_starts_with_local_then_sorted() {
        let names = zone_catalog();
        assert_eq!(names[0], LOCAL_ZONE_NAME);
        assert!(names[1..].windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn catalog_entries_all_parse() {
        let names = zone_catalog();
        assert!(names.contains(&"UTC"));
        assert!(names.contains(&"Europe/London"));
        assert!(names.iter().all(|n| TimeZoneId::parse(n).is_ok()));
    }
}
