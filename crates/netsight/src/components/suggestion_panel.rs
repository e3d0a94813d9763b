use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use netsight_core::model::ParameterField;

use super::{Component, EventResult};
use crate::state::DashboardState;
use crate::util::format::format_parameter;
use crate::util::styles::{FOCUS_COLOR, HEADER_COLOR, HELP_COLOR, focused_block};

/// Goal selection and the most recent suggestion. Requesting a suggestion
/// needs the worker, so `s` is left to the app.
pub struct SuggestionPanel;

impl SuggestionPanel {
    pub fn new() -> Self {
        Self
    }

    fn lines(state: &DashboardState) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(vec![
            Span::styled("Goal: ", Style::default().fg(HELP_COLOR)),
            Span::raw(state.goal.description()),
        ])];

        if state.is_waiting() {
            lines.push(Line::styled(
                "Waiting for suggestion...",
                Style::default().fg(FOCUS_COLOR),
            ));
        }

        match &state.suggestion {
            Some(response) => {
                let s = &response.suggested_parameters;
                lines.push(Line::raw(""));
                lines.push(Line::styled(
                    "Suggested",
                    Style::default().fg(HEADER_COLOR).add_modifier(Modifier::BOLD),
                ));
                lines.push(Line::raw(format!("  Modulation  {}", s.modulation)));
                for (field, value) in [
                    (ParameterField::Bandwidth, s.bandwidth),
                    (ParameterField::Distance, s.distance),
                    (ParameterField::NoiseLevel, s.noise_level),
                ] {
                    lines.push(Line::raw(format!(
                        "  {:<11} {}",
                        field.label(),
                        format_parameter(field, value)
                    )));
                }
                lines.push(Line::raw(""));
                lines.push(Line::raw(response.reasoning.clone()));
            }
            None if !state.is_waiting() => {
                lines.push(Line::styled(
                    "g: change goal | s: ask for a suggestion",
                    Style::default().fg(HELP_COLOR),
                ));
            }
            None => {}
        }
        lines
    }
}

impl Default for SuggestionPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SuggestionPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut DashboardState) -> EventResult {
        match key.code {
            KeyCode::Char('g') => state.cycle_goal(),
            KeyCode::Char('a') => state.apply_suggestion(),
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let paragraph = Paragraph::new(Self::lines(state))
            .wrap(Wrap { trim: true })
            .block(focused_block("AI Suggestion", false));
        frame.render_widget(paragraph, area);
    }
}
