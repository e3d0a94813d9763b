pub mod charts;
pub mod metric_cards;
pub mod parameter_panel;
pub mod status_bar;
pub mod suggestion_panel;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::state::DashboardState;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult {
    /// Event was handled, continue
    Handled,
    /// Event was not handled, pass to parent
    NotHandled,
}

/// Trait for components that can handle input and render
pub trait Component {
    /// Handle a key event
    fn handle_key(&mut self, key: KeyEvent, state: &mut DashboardState) -> EventResult;

    /// Render the component
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &DashboardState);
}
