use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use netsight_core::model::MIN_USABLE_SNR_DB;

use super::{Component, EventResult};
use crate::state::DashboardState;
use crate::util::format::{format_ber, format_db, format_dbm, format_mbps};
use crate::util::styles::{BAD_COLOR, GOOD_COLOR, ber_color, focused_block, snr_color};

/// A single headline value
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    pub color: Color,
}

/// Row of headline metrics for the current outcome
pub struct MetricCards;

impl MetricCards {
    pub fn new() -> Self {
        Self
    }

    pub fn cards(state: &DashboardState) -> [MetricCard; 5] {
        let m = &state.outcome.metrics;
        let throughput_color = if m.snr < MIN_USABLE_SNR_DB {
            BAD_COLOR
        } else {
            GOOD_COLOR
        };

        [
            MetricCard {
                title: "Signal",
                value: format_dbm(m.signal_strength),
                color: snr_color(m.snr),
            },
            MetricCard {
                title: "Throughput",
                value: format_mbps(m.throughput),
                color: throughput_color,
            },
            MetricCard {
                title: "BER",
                value: format_ber(m.ber),
                color: ber_color(m.ber),
            },
            MetricCard {
                title: "SNR",
                value: format_db(m.snr),
                color: snr_color(m.snr),
            },
            MetricCard {
                title: "Coded BER",
                value: format_ber(m.coded_ber),
                color: ber_color(m.coded_ber),
            },
        ]
    }
}

impl Default for MetricCards {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for MetricCards {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut DashboardState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let cards = Self::cards(state);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, cards.len() as u32); 5])
            .split(area);

        for (card, chunk) in cards.into_iter().zip(chunks.iter()) {
            let paragraph = Paragraph::new(Line::styled(
                card.value,
                Style::default().fg(card.color).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .block(focused_block(card.title, false));
            frame.render_widget(paragraph, *chunk);
        }
    }
}
