use std::fmt;

/// A time-zone name that is neither the local sentinel nor a known IANA zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidZoneError {
    /// The name exactly as it was requested.
    pub name: String,
}

impl InvalidZoneError {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for InvalidZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown time zone: {}", self.name)
    }
}

impl std::error::Error for InvalidZoneError {}

/// Rejected clock configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Radius must be finite and strictly positive; the center must be finite.
    InvalidGeometry { center: (f64, f64), radius: f64 },
    /// Hand offsets or thicknesses out of order, negative, or not finite.
    InvalidStyle,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidGeometry { center, radius } => write!(
                f,
                "invalid dial geometry: center ({}, {}), radius {}",
                center.0, center.1, radius
            ),
            ConfigError::InvalidStyle => f.write_str("invalid dial style"),
        }
    }
}

impl std::error::Error for ConfigError {}
