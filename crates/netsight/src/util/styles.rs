//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for the focused panel or selected row
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers and series lines
pub const HEADER_COLOR: Color = Color::Cyan;

pub const GOOD_COLOR: Color = Color::Green;
pub const WARNING_COLOR: Color = Color::Yellow;
pub const BAD_COLOR: Color = Color::Red;

/// Create a bordered block whose border turns yellow when focused.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {title} "))
}

/// Color an SNR reading: comfortable above 20 dB, unusable below -10 dB
pub fn snr_color(snr: f64) -> Color {
    if snr >= 20.0 {
        GOOD_COLOR
    } else if snr >= -10.0 {
        WARNING_COLOR
    } else {
        BAD_COLOR
    }
}

/// Color a bit error rate by decade
pub fn ber_color(ber: f64) -> Color {
    if ber <= 1e-6 {
        GOOD_COLOR
    } else if ber <= 1e-3 {
        WARNING_COLOR
    } else {
        BAD_COLOR
    }
}
