use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::state::DashboardState;
use crate::util::styles::HELP_COLOR;

const HELP_TEXT: &str = "j/k: select | h/l: adjust | r: reset | Tab: chart | g: goal | s: suggest | a: apply | e: export | q: quit";

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn content(state: &DashboardState) -> Line<'_> {
        if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error.as_str()),
            ])
        } else if let Some(info) = &state.info_message {
            Line::from(Span::styled(info.as_str(), Style::default().fg(Color::Green)))
        } else {
            Line::from(Span::styled(HELP_TEXT, Style::default().fg(HELP_COLOR)))
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut DashboardState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let paragraph =
            Paragraph::new(Self::content(state)).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}
