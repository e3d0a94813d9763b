//! Radio link model for 4G/5G teaching scenarios
//!
//! This crate computes simplified link metrics from a small set of parameters.
//! It supports:
//! - Free-space path loss at fixed 4G (2600 MHz) and 5G (3500 MHz) carriers
//! - SNR, Shannon-Hartley throughput capped by the modulation's bits per symbol
//! - An exponential BER approximation, with and without channel coding gain
//! - Parameter sweeps that produce chart-ready (x, y) series
//! - A provider-agnostic contract for asking a language model for parameters
//!
//! The formulas are illustrative, not a validated channel model.
//!
//! ```ignore
//! use netsight_core::{SimulationParameters, run_simulation};
//!
//! let params = SimulationParameters::default();
//! let outcome = run_simulation(&params)?;
//! println!("SNR: {:.2} dB", outcome.metrics.snr);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod link;
pub mod simulation;
pub mod suggest;
pub mod sweep;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{ParseParameterError, ProviderError, SuggestionError, ValidationError};
pub use link::{compute_link_budget, compute_metrics};
pub use model::{
    ChannelCoding, ChartDataSet, ChartPoint, LinkBudget, Modulation, NetworkType,
    SimulationMetrics, SimulationParameters,
};
pub use simulation::{SimulationOutcome, run_simulation};
pub use sweep::compute_chart_data;
