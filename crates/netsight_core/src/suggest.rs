//! Contract for asking an external language model to suggest parameters.
//!
//! The model itself lives behind [`SuggestionProvider`]; this crate only
//! defines the request/response shapes (camelCase JSON), wraps provider
//! failures into a generic retryable error, and applies a suggestion onto
//! the current parameters. Suggestions never feed the calculator on their
//! own: the user applies them explicitly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, SuggestionError};
use crate::model::{Modulation, NetworkType, SimulationParameters};

/// Common optimisation goals offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionGoal {
    MaximizeThroughput,
    MinimizeBer,
    #[default]
    Balanced,
}

impl SuggestionGoal {
    pub const ALL: [SuggestionGoal; 3] = [
        SuggestionGoal::MaximizeThroughput,
        SuggestionGoal::MinimizeBer,
        SuggestionGoal::Balanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionGoal::MaximizeThroughput => "maximize_throughput",
            SuggestionGoal::MinimizeBer => "minimize_ber",
            SuggestionGoal::Balanced => "balanced",
        }
    }

    /// Goal text sent to the model
    pub fn description(&self) -> &'static str {
        match self {
            SuggestionGoal::MaximizeThroughput => "Maximize throughput",
            SuggestionGoal::MinimizeBer => "Minimize bit error rate",
            SuggestionGoal::Balanced => "Balance throughput and reliability",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SuggestionGoal::MaximizeThroughput => SuggestionGoal::MinimizeBer,
            SuggestionGoal::MinimizeBer => SuggestionGoal::Balanced,
            SuggestionGoal::Balanced => SuggestionGoal::MaximizeThroughput,
        }
    }

    /// Map a key like `minimize_ber` to a goal; anything else is free-form text.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.as_str().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for SuggestionGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub network_type: NetworkType,
    pub goal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_constraints: Option<String>,
}

impl SuggestionRequest {
    pub fn new(network_type: NetworkType, goal: impl Into<String>) -> Self {
        Self {
            network_type,
            goal: goal.into(),
            user_constraints: None,
        }
    }

    /// Attach constraints; blank text is treated as none
    #[must_use]
    pub fn with_constraints(mut self, constraints: Option<String>) -> Self {
        self.user_constraints = constraints.filter(|c| !c.trim().is_empty());
        self
    }
}

/// Parameter values proposed by the model. Modulation is raw model text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedParameters {
    pub modulation: String,
    pub bandwidth: f64,
    pub distance: f64,
    pub noise_level: f64,
}

impl SuggestedParameters {
    /// Overlay the suggestion onto `base` and validate the result.
    ///
    /// Network type and channel coding are kept from `base`. An unknown
    /// modulation or any out-of-domain value rejects the whole suggestion.
    pub fn apply_to(
        &self,
        base: &SimulationParameters,
    ) -> Result<SimulationParameters, SuggestionError> {
        let modulation: Modulation = self.modulation.parse()?;
        let params = base
            .with_modulation(modulation)
            .with_bandwidth(self.bandwidth)
            .with_distance(self.distance)
            .with_noise_level(self.noise_level);
        params.validate()?;
        Ok(params)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResponse {
    pub suggested_parameters: SuggestedParameters,
    pub reasoning: String,
}

/// Anything that can answer a suggestion request: an HTTP client, a
/// subprocess, a canned answer in tests.
pub trait SuggestionProvider: Send + Sync {
    fn suggest(&self, request: &SuggestionRequest) -> Result<SuggestionResponse, ProviderError>;
}

impl<F> SuggestionProvider for F
where
    F: Fn(&SuggestionRequest) -> Result<SuggestionResponse, ProviderError> + Send + Sync,
{
    fn suggest(&self, request: &SuggestionRequest) -> Result<SuggestionResponse, ProviderError> {
        self(request)
    }
}

/// Ask the provider for a suggestion, hiding provider details behind
/// [`SuggestionError::Provider`].
pub fn request_suggestion(
    provider: &dyn SuggestionProvider,
    request: &SuggestionRequest,
) -> Result<SuggestionResponse, SuggestionError> {
    provider.suggest(request).map_err(SuggestionError::Provider)
}

/// Sequence number of an in-flight suggestion request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(pub u64);

/// Last-write-wins bookkeeping for overlapping suggestion requests.
///
/// Each new request supersedes every earlier one; responses carrying an
/// older ticket are stale and should be dropped.
#[derive(Debug, Clone, Default)]
pub struct LatestRequest {
    issued: u64,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.issued != 0 && ticket.0 == self.issued
    }

    pub fn latest(&self) -> Option<RequestTicket> {
        (self.issued != 0).then_some(RequestTicket(self.issued))
    }
}
