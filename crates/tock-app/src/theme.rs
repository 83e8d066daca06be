use tock_dial::{HandKind, Ink};
use tock_engine::paint::Color;

/// Concrete colors for each ink role.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub face: Color,
    pub tick: Color,
    pub numeral: Color,
    pub hour: Color,
    pub minute: Color,
    pub second: Color,
    pub status: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            face: Color::BLACK,
            tick: Color::BLACK,
            numeral: Color::BLACK,
            hour: Color::BLACK,
            minute: Color::BLUE,
            second: Color::RED,
            status: Color::from_srgb_u8(90, 90, 90, 255),
        }
    }
}

impl Theme {
    pub fn ink(&self, ink: Ink) -> Color {
        match ink {
            Ink::Face => self.face,
            Ink::Tick => self.tick,
            Ink::Numeral => self.numeral,
            Ink::Hand(HandKind::Hour) => self.hour,
            Ink::Hand(HandKind::Minute) => self.minute,
            Ink::Hand(HandKind::Second) => self.second,
        }
    }
}
