use std::path::PathBuf;
use std::time::Duration;

use tock_dial::ClockConfig;

/// Window and clock settings for the binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    /// Candidate font files, tried in order.
    pub font_paths: Vec<PathBuf>,
    pub clock: ClockConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Analog Clock".to_string(),
            width: 400.0,
            height: 440.0,
            font_paths: [
                "/usr/share/fonts/TTF/DejaVuSans.ttf",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/noto/NotoSans-Regular.ttf",
                "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
                "/System/Library/Fonts/Supplemental/Arial.ttf",
                "C:\\Windows\\Fonts\\arial.ttf",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
            clock: ClockConfig::default(),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `TOCK_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden through `lookup`.
    ///
    /// Recognized keys: `TOCK_ZONE`, `TOCK_TICK_MS`, `TOCK_SMOOTH`,
    /// `TOCK_NUMERALS`, `TOCK_FONT`. Values that do not parse are logged and
    /// ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(zone) = lookup("TOCK_ZONE") {
            let zone = zone.trim();
            if !zone.is_empty() {
                cfg.clock.initial_zone = zone.to_string();
            }
        }

        if let Some(raw) = lookup("TOCK_TICK_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => cfg.clock.tick_interval = Duration::from_millis(ms),
                Err(e) => log::warn!("ignoring TOCK_TICK_MS={raw:?}: {e}"),
            }
        }

        if let Some(raw) = lookup("TOCK_SMOOTH") {
            match parse_flag(&raw) {
                Some(on) => cfg.clock.smooth_seconds = on,
                None => log::warn!("ignoring TOCK_SMOOTH={raw:?}: expected a boolean"),
            }
        }

        if let Some(raw) = lookup("TOCK_NUMERALS") {
            match parse_flag(&raw) {
                Some(on) => cfg.clock.show_numerals = on,
                None => log::warn!("ignoring TOCK_NUMERALS={raw:?}: expected a boolean"),
            }
        }

        if let Some(path) = lookup("TOCK_FONT") {
            cfg.font_paths.insert(0, PathBuf::from(path));
        }

        cfg
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
