use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use jiff::Timestamp;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::components::{
    Component, EventResult, charts::ChartPanel, metric_cards::MetricCards,
    parameter_panel::ParameterPanel, status_bar::StatusBar, suggestion_panel::SuggestionPanel,
};
use crate::config::AppConfig;
use crate::data::SimulationReport;
use crate::provider::CommandProvider;
use crate::state::DashboardState;
use crate::worker::SuggestionWorker;

/// How long to wait for input before checking the worker again
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct App {
    state: DashboardState,
    parameter_panel: ParameterPanel,
    metric_cards: MetricCards,
    chart_panel: ChartPanel,
    suggestion_panel: SuggestionPanel,
    status_bar: StatusBar,
    /// `None` when no suggestion command is configured
    worker: Option<SuggestionWorker>,
    report_dir: PathBuf,
}

impl App {
    pub fn new(state: DashboardState, worker: Option<SuggestionWorker>, report_dir: PathBuf) -> Self {
        Self {
            state,
            parameter_panel: ParameterPanel::new(),
            metric_cards: MetricCards::new(),
            chart_panel: ChartPanel::new(),
            suggestion_panel: SuggestionPanel::new(),
            status_bar: StatusBar::new(),
            worker,
            report_dir,
        }
    }

    /// Build the dashboard from the loaded configuration
    pub fn from_config(config: &AppConfig, data_dir: &Path) -> color_eyre::Result<Self> {
        let state = DashboardState::new(config.defaults)?.with_goal(
            config.suggestion.goal,
            config.suggestion.constraints.clone(),
        );

        let worker = CommandProvider::from_argv(&config.suggestion.command)
            .map(|provider| SuggestionWorker::new(Arc::new(provider)));
        if worker.is_none() {
            tracing::info!("No suggestion command configured");
        }

        Ok(Self::new(state, worker, config.report_dir(data_dir)))
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            self.drain_worker();
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Hand any finished suggestions to the state; stale ones are dropped there
    pub fn drain_worker(&mut self) {
        let Some(worker) = &self.worker else {
            return;
        };
        while let Some(response) = worker.try_recv() {
            self.state.accept_response(response.ticket, response.result);
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(42), Constraint::Min(0)])
            .split(rows[0]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8), // Parameters
                Constraint::Min(0),    // Suggestion
            ])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Metric cards
                Constraint::Min(0),    // Charts
            ])
            .split(columns[1]);

        self.parameter_panel.render(frame, left[0], &self.state);
        self.suggestion_panel.render(frame, left[1], &self.state);
        self.metric_cards.render(frame, right[0], &self.state);
        self.chart_panel.render(frame, right[1], &self.state);
        self.status_bar.render(frame, rows[1], &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(POLL_INTERVAL)? {
            return Ok(());
        }
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('s') => {
                self.request_suggestion();
                return;
            }
            KeyCode::Char('e') => {
                self.export_report();
                return;
            }
            KeyCode::Esc => {
                self.state.clear_messages();
                return;
            }
            _ => {}
        }

        let handlers: [&mut dyn Component; 3] = [
            &mut self.parameter_panel,
            &mut self.suggestion_panel,
            &mut self.chart_panel,
        ];
        for handler in handlers {
            if handler.handle_key(key_event, &mut self.state) == EventResult::Handled {
                return;
            }
        }
    }

    fn request_suggestion(&mut self) {
        let Some(worker) = &self.worker else {
            self.state
                .set_error("No suggestion command configured (suggestion.command in config.yaml)");
            return;
        };

        let (ticket, request) = self.state.begin_suggestion();
        if !worker.send(ticket, request) {
            tracing::error!("Suggestion worker is not running");
            self.state.pending = None;
            self.state
                .set_error(netsight_core::error::SUGGESTION_FAILED_MESSAGE);
        }
    }

    fn export_report(&mut self) {
        let report = SimulationReport::new(self.state.outcome.clone(), Timestamp::now());
        match report.save(None, &self.report_dir) {
            Ok(path) => self
                .state
                .set_info(format!("Report saved to {}", path.display())),
            Err(e) => self.state.set_error(format!("Failed to export report: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    use netsight_core::suggest::{SuggestedParameters, SuggestionRequest, SuggestionResponse};
    use netsight_core::{Modulation, ProviderError, SimulationParameters};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use tempfile::tempdir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dashboard_app(worker: Option<SuggestionWorker>, report_dir: PathBuf) -> App {
        let state = DashboardState::new(SimulationParameters::default()).unwrap();
        App::new(state, worker, report_dir)
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_dashboard_renders() {
        let dir = tempdir().unwrap();
        let mut app = dashboard_app(None, dir.path().to_path_buf());
        let mut terminal = Terminal::new(TestBackend::new(180, 40)).unwrap();

        terminal.draw(|frame| app.draw(frame)).unwrap();

        let text = screen_text(&terminal);
        for expected in [
            "Parameters",
            "64-QAM",
            "-111.26 dBm",
            "4.99e-1",
            "Signal Strength vs. Distance",
            "BER vs. SNR",
            "Throughput vs. Bandwidth",
            "q: quit",
        ] {
            assert!(text.contains(expected), "missing {expected:?}");
        }
    }

    #[test]
    fn test_quit_keys() {
        let dir = tempdir().unwrap();
        let mut app = dashboard_app(None, dir.path().to_path_buf());
        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(app.state().exit);

        let mut app = dashboard_app(None, dir.path().to_path_buf());
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.state().exit);
    }

    #[test]
    fn test_keys_reach_components() {
        let dir = tempdir().unwrap();
        let mut app = dashboard_app(None, dir.path().to_path_buf());

        app.handle_key_event(key(KeyCode::Down));
        app.handle_key_event(key(KeyCode::Char('l')));
        assert_eq!(app.state().params.modulation, Modulation::Qam256);
        assert_eq!(app.state().outcome.parameters.modulation, Modulation::Qam256);

        app.handle_key_event(key(KeyCode::Char('g')));
        assert_ne!(app.state().goal, Default::default());
    }

    #[test]
    fn test_suggest_without_command_reports_error() {
        let dir = tempdir().unwrap();
        let mut app = dashboard_app(None, dir.path().to_path_buf());
        app.handle_key_event(key(KeyCode::Char('s')));
        assert!(app.state().error_message.is_some());
        assert!(!app.state().is_waiting());
    }

    #[test]
    fn test_suggest_then_apply() {
        let provider = |_: &SuggestionRequest| -> Result<SuggestionResponse, ProviderError> {
            Ok(SuggestionResponse {
                suggested_parameters: SuggestedParameters {
                    modulation: "QPSK".to_string(),
                    bandwidth: 20.0,
                    distance: 100.0,
                    noise_level: -110.0,
                },
                reasoning: "robust".to_string(),
            })
        };
        let dir = tempdir().unwrap();
        let mut app = dashboard_app(
            Some(SuggestionWorker::new(Arc::new(provider))),
            dir.path().to_path_buf(),
        );

        app.handle_key_event(key(KeyCode::Char('s')));
        assert!(app.state().is_waiting());

        for _ in 0..500 {
            app.drain_worker();
            if !app.state().is_waiting() {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
        assert!(app.state().suggestion.is_some());

        app.handle_key_event(key(KeyCode::Char('a')));
        assert_eq!(app.state().params.modulation, Modulation::Qpsk);
        assert_eq!(app.state().params.distance, 100.0);
        assert!(app.state().outcome.metrics.throughput > 0.0);
    }

    #[test]
    fn test_export_writes_report() {
        let dir = tempdir().unwrap();
        let mut app = dashboard_app(None, dir.path().join("reports"));

        app.handle_key_event(key(KeyCode::Char('e')));

        let info = app.state().info_message.clone().unwrap();
        assert!(info.starts_with("Report saved to "));
        let written: Vec<_> = std::fs::read_dir(dir.path().join("reports"))
            .unwrap()
            .collect();
        assert_eq!(written.len(), 1);
    }
}
