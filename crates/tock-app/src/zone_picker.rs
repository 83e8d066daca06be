use tock_dial::{time::LOCAL_ZONE_NAME, zone_catalog};

/// Keyboard-driven cursor over the zone catalog.
///
/// Stepping wraps around both ends.
#[derive(Debug, Clone)]
pub struct ZonePicker {
    names: Vec<&'static str>,
    index: usize,
}

impl ZonePicker {
    /// Picker positioned on `current`, or on the first entry if it is not listed.
    pub fn new(current: &str) -> Self {
        Self::with_names(zone_catalog(), current)
    }

    fn with_names(names: Vec<&'static str>, current: &str) -> Self {
        let index = names.iter().position(|n| *n == current).unwrap_or(0);
        Self { names, index }
    }

    pub fn current(&self) -> &'static str {
        self.names.get(self.index).copied().unwrap_or(LOCAL_ZONE_NAME)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Moves by `delta` entries and returns the new selection.
    pub fn step(&mut self, delta: i32) -> &'static str {
        if !self.names.is_empty() {
            let len = self.names.len() as i64;
            self.index = (self.index as i64 + delta as i64).rem_euclid(len) as usize;
        }
        self.current()
    }

    /// Selects `name` if listed; returns whether the selection moved.
    pub fn select(&mut self, name: &str) -> bool {
        match self.names.iter().position(|n| *n == name) {
            Some(i) if i != self.index => {
                self.index = i;
                true
            }
            _ => false,
        }
    }

    pub fn select_utc(&mut self) -> bool {
        self.select("UTC")
    }

    pub fn select_local(&mut self) -> bool {
        self.select(LOCAL_ZONE_NAME)
    }

    /// Status line drawn under the dial.
    pub fn status_line(&self) -> String {
        format!("{}  ({}/{})", self.current(), self.index + 1, self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> ZonePicker {
        ZonePicker::with_names(vec!["Local", "Asia/Tokyo", "Europe/Paris", "UTC"], "UTC")
    }

    // ── stepping ──

    #[test]
    fn step_wraps_both_ways() {
        let mut p = small();
        assert_eq!(p.step(1), "Local");
        assert_eq!(p.step(-1), "UTC");
        assert_eq!(p.step(-2), "Asia/Tokyo");
    }

    #[test]
    fn large_step_wraps() {
        let mut p = small();
        assert_eq!(p.step(10), "Asia/Tokyo");
        assert_eq!(p.step(-10), "UTC");
    }

    // ── selection ──

    #[test]
    fn select_local_and_utc() {
        let mut p = small();
        assert!(p.select_local());
        assert_eq!(p.current(), "Local");
        assert!(!p.select_local());
        assert!(p.select_utc());
        assert_eq!(p.current(), "UTC");
    }

    #[test]
    fn unknown_initial_zone_starts_at_first_entry() {
        let p = ZonePicker::with_names(vec!["Local", "UTC"], "Not/AZone");
        assert_eq!(p.current(), "Local");
    }

    #[test]
    fn status_line_shows_position() {
        let p = small();
        assert_eq!(p.status_line(), "UTC  (4/4)");
    }

    #[test]
    fn full_catalog_contains_utc_and_local() {
        let mut p = ZonePicker::new("Europe/Paris");
        assert_eq!(p.current(), "Europe/Paris");
        assert!(p.len() > 100);
        assert!(p.select_utc());
        assert!(p.select_local());
    }
}
