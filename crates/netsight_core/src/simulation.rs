//! Validate-then-compute driver used by every front end.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::link::{compute_link_budget, compute_metrics};
use crate::model::{ChartDataSet, LinkBudget, SimulationMetrics, SimulationParameters};
use crate::sweep::compute_chart_data;

/// Everything derived from one parameter snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOutcome {
    pub parameters: SimulationParameters,
    pub link_budget: LinkBudget,
    pub metrics: SimulationMetrics,
    pub charts: ChartDataSet,
}

/// Validate the parameters, then compute headline metrics and all chart series.
///
/// Out-of-domain input is rejected without computing anything.
pub fn run_simulation(params: &SimulationParameters) -> Result<SimulationOutcome, ValidationError> {
    params.validate()?;

    Ok(SimulationOutcome {
        parameters: *params,
        link_budget: compute_link_budget(params),
        metrics: compute_metrics(params),
        charts: compute_chart_data(params),
    })
}
