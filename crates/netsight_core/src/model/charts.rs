use serde::{Deserialize, Serialize};

/// A single chart sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

impl ChartPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<ChartPoint> for (f64, f64) {
    fn from(p: ChartPoint) -> Self {
        (p.x, p.y)
    }
}

/// The three sweep series, each computed from the same base parameters
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataSet {
    pub signal_vs_distance: Vec<ChartPoint>,
    pub ber_vs_snr: Vec<ChartPoint>,
    pub throughput_vs_bandwidth: Vec<ChartPoint>,
}

impl ChartDataSet {
    pub fn series(&self, series: ChartSeries) -> &[ChartPoint] {
        match series {
            ChartSeries::SignalVsDistance => &self.signal_vs_distance,
            ChartSeries::BerVsSnr => &self.ber_vs_snr,
            ChartSeries::ThroughputVsBandwidth => &self.throughput_vs_bandwidth,
        }
    }
}

/// Identifies one series of a [`ChartDataSet`] and describes its axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartSeries {
    SignalVsDistance,
    BerVsSnr,
    ThroughputVsBandwidth,
}

impl ChartSeries {
    pub const ALL: [ChartSeries; 3] = [
        ChartSeries::SignalVsDistance,
        ChartSeries::BerVsSnr,
        ChartSeries::ThroughputVsBandwidth,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ChartSeries::SignalVsDistance => "Signal Strength vs. Distance",
            ChartSeries::BerVsSnr => "BER vs. SNR",
            ChartSeries::ThroughputVsBandwidth => "Throughput vs. Bandwidth",
        }
    }

    pub fn x_label(&self) -> &'static str {
        match self {
            ChartSeries::SignalVsDistance => "Distance (m)",
            ChartSeries::BerVsSnr => "SNR (dB)",
            ChartSeries::ThroughputVsBandwidth => "Bandwidth (MHz)",
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            ChartSeries::SignalVsDistance => "Signal (dBm)",
            ChartSeries::BerVsSnr => "BER",
            ChartSeries::ThroughputVsBandwidth => "Throughput (Mbps)",
        }
    }

    /// BER spans many decades and is plotted on a log axis
    pub fn is_log_scale(&self) -> bool {
        matches!(self, ChartSeries::BerVsSnr)
    }
}
