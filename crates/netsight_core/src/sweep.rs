//! Chart sweep generator.
//!
//! Each series overrides exactly one field of the base parameters and holds
//! the rest constant. Everything is recomputed on every call.

use serde::{Deserialize, Serialize};

use crate::link::{compute_metrics, uncoded_ber};
use crate::model::{ChartDataSet, ChartPoint, SimulationParameters};

/// Distance sweep: 10 m to 5000 m in 100 m steps (50 points)
pub const DISTANCE_SWEEP: SweepRange = SweepRange::new(10.0, 5000.0, 100.0);

/// SNR sweep: -10 dB to 40 dB in 1 dB steps (51 points)
pub const SNR_SWEEP: SweepRange = SweepRange::new(-10.0, 40.0, 1.0);

/// Bandwidth sweep: 1 MHz to 100 MHz in 5 MHz steps (20 points)
pub const BANDWIDTH_SWEEP: SweepRange = SweepRange::new(1.0, 100.0, 5.0);

/// An arithmetic range `start, start + step, ...` up to and including `end`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRange {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl SweepRange {
    pub const fn new(start: f64, end: f64, step: f64) -> Self {
        Self { start, end, step }
    }

    /// Number of points in the range. Empty if `step` is not positive, `end < start`,
    /// or either is not finite.
    pub fn len(&self) -> usize {
        let span = self.end - self.start;
        if !self.step.is_finite() || self.step <= 0.0 || !span.is_finite() || span < 0.0 {
            return 0;
        }
        ((span / self.step).floor() as usize).saturating_add(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sweep values, computed by index so rounding errors do not accumulate
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.start + self.step * i as f64)
    }
}

/// Round to two decimal places for display
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Signal strength across the distance sweep, rounded to 2 decimals
pub fn signal_vs_distance(base: &SimulationParameters, range: SweepRange) -> Vec<ChartPoint> {
    range
        .values()
        .map(|d| {
            let metrics = compute_metrics(&base.with_distance(d));
            ChartPoint::new(d, round2(metrics.signal_strength))
        })
        .collect()
}

/// Theoretical uncoded BER curve over SNR directly, bypassing the path loss model.
///
/// Values keep full precision for log-scale plotting.
pub fn ber_vs_snr(base: &SimulationParameters, range: SweepRange) -> Vec<ChartPoint> {
    range
        .values()
        .map(|snr| ChartPoint::new(snr, uncoded_ber(snr, base.modulation)))
        .collect()
}

/// Throughput across the bandwidth sweep, rounded to 2 decimals
pub fn throughput_vs_bandwidth(base: &SimulationParameters, range: SweepRange) -> Vec<ChartPoint> {
    range
        .values()
        .map(|b| {
            let metrics = compute_metrics(&base.with_bandwidth(b));
            ChartPoint::new(b, round2(metrics.throughput))
        })
        .collect()
}

/// Compute all three chart series for the given base parameters.
pub fn compute_chart_data(base: &SimulationParameters) -> ChartDataSet {
    ChartDataSet {
        signal_vs_distance: signal_vs_distance(base, DISTANCE_SWEEP),
        ber_vs_snr: ber_vs_snr(base, SNR_SWEEP),
        throughput_vs_bandwidth: throughput_vs_bandwidth(base, BANDWIDTH_SWEEP),
    }
}
