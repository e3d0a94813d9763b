use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Component, EventResult};
use crate::state::{DashboardState, ParameterRow};
use crate::util::styles::{FOCUS_COLOR, HELP_COLOR, focused_block};

/// Editable list of simulation parameters
pub struct ParameterPanel;

impl ParameterPanel {
    pub fn new() -> Self {
        Self
    }

    fn row_line(row: ParameterRow, state: &DashboardState, selected: bool) -> Line<'static> {
        let marker = if selected { "> " } else { "  " };
        let value = row.display_value(&state.params);
        let label_style = if selected {
            Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let mut spans = vec![
            Span::styled(format!("{marker}{:<12}", row.label()), label_style),
            Span::raw(value),
        ];
        if let Some(field) = row.field() {
            let (min, max) = field.domain();
            spans.push(Span::styled(
                format!("  [{min}, {max}]"),
                Style::default().fg(HELP_COLOR),
            ));
        }
        Line::from(spans)
    }
}

impl Default for ParameterPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ParameterPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut DashboardState) -> EventResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => state.select_prev(),
            KeyCode::Char('l') | KeyCode::Right => state.adjust(true),
            KeyCode::Char('h') | KeyCode::Left => state.adjust(false),
            KeyCode::Char('r') => state.reset(),
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let selected = state.selected_row();
        let lines: Vec<Line> = ParameterRow::ALL
            .iter()
            .map(|&row| Self::row_line(row, state, row == selected))
            .collect();

        let paragraph = Paragraph::new(lines).block(focused_block("Parameters", true));
        frame.render_widget(paragraph, area);
    }
}
