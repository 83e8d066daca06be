/// Length and thickness of one hand.
///
/// The length is `radius - offset`, clamped at zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandStyle {
    pub offset: f64,
    pub thickness: f64,
}

impl HandStyle {
    #[inline]
    pub const fn new(offset: f64, thickness: f64) -> Self {
        Self { offset, thickness }
    }
}

/// Tunable dial measurements, all in logical pixels.
///
/// Radial positions are offsets inward from the rim so one style fits any
/// radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DialStyle {
    pub outline_width: f64,
    /// Tick segments run from `radius - tick_start_offset` ...
    pub tick_start_offset: f64,
    /// ... to `radius - tick_end_offset`.
    pub tick_end_offset: f64,
    pub tick_width: f64,
    pub numeral_offset: f64,
    pub numeral_size: f64,
    pub hour: HandStyle,
    pub minute: HandStyle,
    pub second: HandStyle,
}

impl Default for DialStyle {
    fn default() -> Self {
        Self {
            outline_width: 2.0,
            tick_start_offset: 20.0,
            tick_end_offset: 10.0,
            tick_width: 2.0,
            numeral_offset: 40.0,
            numeral_size: 12.0,
            hour: HandStyle::new(60.0, 6.0),
            minute: HandStyle::new(40.0, 4.0),
            second: HandStyle::new(20.0, 2.0),
        }
    }
}

impl DialStyle {
    /// True when the hands keep their ordering for every radius:
    /// hour shortest and thickest, second longest and thinnest, all inside the rim.
    /// Ticks must run outward, from `tick_start_offset` toward the rim.
    pub fn is_valid(&self) -> bool {
        let values = [
            self.outline_width,
            self.tick_start_offset,
            self.tick_end_offset,
            self.tick_width,
            self.numeral_offset,
            self.numeral_size,
            self.hour.offset,
            self.hour.thickness,
            self.minute.offset,
            self.minute.thickness,
            self.second.offset,
            self.second.thickness,
        ];
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return false;
        }

        self.tick_start_offset > self.tick_end_offset
            && self.hour.offset > self.minute.offset
            && self.minute.offset > self.second.offset
            && self.second.offset > 0.0
            && self.second.thickness > 0.0
            && self.hour.thickness >= self.minute.thickness
            && self.minute.thickness >= self.second.thickness
    }
}
