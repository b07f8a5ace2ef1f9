//! Palette of the dashboard cards.

use ansi_term::Colour;

pub const BLUE: Colour = Colour::RGB(0x1f, 0x77, 0xb4);
pub const GREEN: Colour = Colour::RGB(0x2c, 0xa0, 0x2c);
pub const RED: Colour = Colour::RGB(0xd6, 0x27, 0x28);
pub const PURPLE: Colour = Colour::RGB(0x94, 0x67, 0xbd);
pub const ORANGE: Colour = Colour::RGB(0xff, 0x7f, 0x0e);
pub const GREY: Colour = Colour::RGB(0x66, 0x66, 0x66);

/// Paint `s` when color output is enabled; plain text otherwise.
pub fn paint(s: &str, colour: Colour, enabled: bool) -> String {
    if enabled {
        colour.bold().paint(s).to_string()
    } else {
        s.to_string()
    }
}

pub fn dim(s: &str, enabled: bool) -> String {
    if enabled {
        GREY.paint(s).to_string()
    } else {
        s.to_string()
    }
}
