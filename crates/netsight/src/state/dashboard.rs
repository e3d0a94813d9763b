use netsight_core::model::ParameterField;
use netsight_core::suggest::{
    LatestRequest, RequestTicket, SuggestionGoal, SuggestionRequest, SuggestionResponse,
};
use netsight_core::{
    SimulationOutcome, SimulationParameters, SuggestionError, ValidationError, run_simulation,
};

use super::rows::ParameterRow;

/// Everything the dashboard renders, plus the bookkeeping for in-flight
/// suggestion requests.
#[derive(Debug)]
pub struct DashboardState {
    pub params: SimulationParameters,
    /// Target of the reset key
    pub defaults: SimulationParameters,
    /// Result of the last parameter snapshot that passed validation
    pub outcome: SimulationOutcome,
    pub selected: usize,
    pub goal: SuggestionGoal,
    pub constraints: Option<String>,
    pub suggestion: Option<SuggestionResponse>,
    pub pending: Option<RequestTicket>,
    requests: LatestRequest,
    pub error_message: Option<String>,
    pub info_message: Option<String>,
    pub exit: bool,
}

impl DashboardState {
    /// Start from validated defaults
    pub fn new(defaults: SimulationParameters) -> Result<Self, ValidationError> {
        let outcome = run_simulation(&defaults)?;
        Ok(Self {
            params: defaults,
            defaults,
            outcome,
            selected: 0,
            goal: SuggestionGoal::default(),
            constraints: None,
            suggestion: None,
            pending: None,
            requests: LatestRequest::new(),
            error_message: None,
            info_message: None,
            exit: false,
        })
    }

    pub fn with_goal(mut self, goal: SuggestionGoal, constraints: Option<String>) -> Self {
        self.goal = goal;
        self.constraints = constraints;
        self
    }

    pub fn selected_row(&self) -> ParameterRow {
        ParameterRow::ALL[self.selected % ParameterRow::ALL.len()]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % ParameterRow::ALL.len();
    }

    pub fn select_prev(&mut self) {
        let len = ParameterRow::ALL.len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// Move the selected parameter one step. Enumerations cycle; numeric
    /// fields step by their slider increment and stop at the domain bounds.
    pub fn adjust(&mut self, increase: bool) {
        let row = self.selected_row();
        let params = &mut self.params;
        match row {
            ParameterRow::NetworkType => {
                params.network_type = if increase {
                    params.network_type.next()
                } else {
                    params.network_type.prev()
                }
            }
            ParameterRow::Modulation => {
                params.modulation = if increase {
                    params.modulation.next()
                } else {
                    params.modulation.prev()
                }
            }
            ParameterRow::ChannelCoding => {
                params.channel_coding = if increase {
                    params.channel_coding.next()
                } else {
                    params.channel_coding.prev()
                }
            }
            row => {
                if let Some(field) = row.field() {
                    let delta = if increase { field.step() } else { -field.step() };
                    let (min, max) = field.domain();
                    let value = (params.get(field) + delta).clamp(min, max);
                    params.set(field, value);
                }
            }
        }
        self.recompute();
    }

    /// Set a numeric parameter directly, then recompute
    pub fn set_parameter(&mut self, field: ParameterField, value: f64) {
        self.params.set(field, value);
        self.recompute();
    }

    /// Recompute from the current snapshot. Invalid input leaves the last
    /// good outcome on screen and reports the error.
    pub fn recompute(&mut self) {
        match run_simulation(&self.params) {
            Ok(outcome) => {
                self.outcome = outcome;
                self.error_message = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Rejected parameter snapshot");
                self.set_error(e.to_string());
            }
        }
    }

    pub fn reset(&mut self) {
        self.params = self.defaults;
        self.recompute();
        self.set_info("Parameters reset to defaults");
    }

    pub fn cycle_goal(&mut self) {
        self.goal = self.goal.next();
        self.set_info(format!("Suggestion goal: {}", self.goal.description()));
    }

    /// Issue a new ticket and build the request for the current snapshot.
    /// Any earlier request still in flight becomes stale.
    pub fn begin_suggestion(&mut self) -> (RequestTicket, SuggestionRequest) {
        let ticket = self.requests.issue();
        self.pending = Some(ticket);
        self.set_info("Requesting suggestion...");
        let request = SuggestionRequest::new(self.params.network_type, self.goal.description())
            .with_constraints(self.constraints.clone());
        (ticket, request)
    }

    /// Take a worker response. Returns false when the ticket is stale and the
    /// response was dropped.
    pub fn accept_response(
        &mut self,
        ticket: RequestTicket,
        result: Result<SuggestionResponse, SuggestionError>,
    ) -> bool {
        if !self.requests.is_current(ticket) {
            tracing::debug!(ticket = ticket.0, "Dropping stale suggestion response");
            return false;
        }
        self.pending = None;

        match result {
            Ok(response) => {
                self.suggestion = Some(response);
                self.set_info("Suggestion ready, press a to apply");
            }
            Err(e) => self.set_error(e.to_string()),
        }
        true
    }

    /// Overlay the last suggestion onto the current parameters
    pub fn apply_suggestion(&mut self) {
        let Some(response) = &self.suggestion else {
            self.set_error("No suggestion to apply");
            return;
        };

        match response.suggested_parameters.apply_to(&self.params) {
            Ok(params) => {
                self.params = params;
                self.recompute();
                self.set_info("Applied suggested parameters");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Suggestion could not be applied");
                self.set_error(e.to_string());
            }
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.info_message = None;
        self.error_message = Some(message.into());
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.error_message = None;
        self.info_message = Some(message.into());
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.info_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netsight_core::suggest::SuggestedParameters;
    use netsight_core::{ChannelCoding, Modulation, NetworkType};

    fn state() -> DashboardState {
        DashboardState::new(SimulationParameters::default()).unwrap()
    }

    fn select(state: &mut DashboardState, row: ParameterRow) {
        state.selected = ParameterRow::ALL.iter().position(|r| *r == row).unwrap();
    }

    fn response(modulation: &str) -> SuggestionResponse {
        SuggestionResponse {
            suggested_parameters: SuggestedParameters {
                modulation: modulation.to_string(),
                bandwidth: 40.0,
                distance: 100.0,
                noise_level: -110.0,
            },
            reasoning: "closer and quieter".to_string(),
        }
    }

    #[test]
    fn test_initial_outcome_is_reference_scenario() {
        let state = state();
        assert!((state.outcome.link_budget.path_loss - 157.26076).abs() < 1e-4);
        assert_eq!(state.outcome.metrics.throughput, 0.0);
        assert_eq!(state.selected_row(), ParameterRow::NetworkType);
    }

    #[test]
    fn test_selection_wraps() {
        let mut state = state();
        state.select_prev();
        assert_eq!(state.selected_row(), ParameterRow::NoiseLevel);
        state.select_next();
        assert_eq!(state.selected_row(), ParameterRow::NetworkType);
    }

    #[test]
    fn test_adjust_steps_numeric_fields() {
        let mut state = state();
        select(&mut state, ParameterRow::Distance);
        state.adjust(true);
        assert_eq!(state.params.distance, 510.0);
        assert_eq!(state.outcome.parameters.distance, 510.0);

        select(&mut state, ParameterRow::NoiseLevel);
        state.adjust(false);
        assert_eq!(state.params.noise_level, -96.0);
    }

    #[test]
    fn test_adjust_stops_at_domain_bounds() {
        let mut state = state();
        select(&mut state, ParameterRow::Bandwidth);
        state.set_parameter(ParameterField::Bandwidth, 100.0);
        state.adjust(true);
        assert_eq!(state.params.bandwidth, 100.0);
        assert!(state.error_message.is_none());

        select(&mut state, ParameterRow::Distance);
        state.set_parameter(ParameterField::Distance, 10.0);
        state.adjust(false);
        assert_eq!(state.params.distance, 10.0);
    }

    #[test]
    fn test_adjust_cycles_enumerations() {
        let mut state = state();
        state.adjust(true);
        assert_eq!(state.params.network_type, NetworkType::FourG);

        select(&mut state, ParameterRow::Modulation);
        state.adjust(true);
        assert_eq!(state.params.modulation, Modulation::Qam256);
        state.adjust(true);
        assert_eq!(state.params.modulation, Modulation::Qpsk);

        select(&mut state, ParameterRow::ChannelCoding);
        state.adjust(false);
        assert_eq!(state.params.channel_coding, ChannelCoding::Hamming);
        assert_eq!(state.outcome.parameters, state.params);
    }

    #[test]
    fn test_invalid_value_keeps_last_good_outcome() {
        let mut state = state();
        let before = state.outcome.clone();

        state.set_parameter(ParameterField::Distance, 6000.0);

        assert_eq!(state.outcome, before);
        assert_eq!(
            state.error_message.as_deref(),
            Some("Distance must be between 10 and 5000 m, got 6000")
        );

        state.set_parameter(ParameterField::Distance, 100.0);
        assert!(state.error_message.is_none());
        assert_eq!(state.outcome.parameters.distance, 100.0);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = state();
        select(&mut state, ParameterRow::Modulation);
        state.adjust(true);
        state.set_parameter(ParameterField::Distance, 50.0);

        state.reset();
        assert_eq!(state.params, SimulationParameters::default());
        assert_eq!(state.outcome.parameters, SimulationParameters::default());
    }

    #[test]
    fn test_stale_responses_are_dropped() {
        let mut state = state();
        let (first, _) = state.begin_suggestion();
        let (second, request) = state.begin_suggestion();
        assert_eq!(request.goal, SuggestionGoal::Balanced.description());

        assert!(!state.accept_response(first, Ok(response("QPSK"))));
        assert!(state.suggestion.is_none());
        assert!(state.is_waiting());

        assert!(state.accept_response(second, Ok(response("256-QAM"))));
        assert!(!state.is_waiting());
        assert_eq!(
            state.suggestion.as_ref().unwrap().suggested_parameters.modulation,
            "256-QAM"
        );
    }

    #[test]
    fn test_failed_suggestion_shows_generic_message() {
        let mut state = state();
        let (ticket, _) = state.begin_suggestion();
        let err = SuggestionError::Provider("timeout".into());

        assert!(state.accept_response(ticket, Err(err)));
        assert_eq!(
            state.error_message.as_deref(),
            Some(netsight_core::error::SUGGESTION_FAILED_MESSAGE)
        );
        assert_eq!(state.params, SimulationParameters::default());
    }

    #[test]
    fn test_apply_suggestion_overlays_parameters() {
        let mut state = state();
        state.params.channel_coding = ChannelCoding::Hamming;
        state.recompute();
        let (ticket, _) = state.begin_suggestion();
        state.accept_response(ticket, Ok(response("16-QAM")));

        state.apply_suggestion();

        assert_eq!(state.params.modulation, Modulation::Qam16);
        assert_eq!(state.params.bandwidth, 40.0);
        assert_eq!(state.params.distance, 100.0);
        assert_eq!(state.params.noise_level, -110.0);
        assert_eq!(state.params.channel_coding, ChannelCoding::Hamming);
        assert_eq!(state.params.network_type, NetworkType::FiveG);
        assert_eq!(state.outcome.parameters, state.params);
    }

    #[test]
    fn test_apply_unknown_modulation_is_rejected() {
        let mut state = state();
        let (ticket, _) = state.begin_suggestion();
        state.accept_response(ticket, Ok(response("1024-QAM")));

        state.apply_suggestion();

        assert_eq!(state.params, SimulationParameters::default());
        assert!(state.error_message.is_some());
    }

    #[test]
    fn test_apply_without_suggestion() {
        let mut state = state();
        state.apply_suggestion();
        assert_eq!(state.error_message.as_deref(), Some("No suggestion to apply"));
    }

    #[test]
    fn test_cycle_goal() {
        let mut state = state();
        state.cycle_goal();
        assert_ne!(state.goal, SuggestionGoal::Balanced);
        assert!(state.info_message.as_deref().unwrap().starts_with("Suggestion goal: "));
    }
}
