use serde::{Deserialize, Serialize};

/// Headline link metrics for one parameter snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationMetrics {
    /// Received signal strength, dBm
    pub signal_strength: f64,
    /// Signal-to-noise ratio, dB
    pub snr: f64,
    /// Estimated data rate, Mbps
    pub throughput: f64,
    /// Uncoded bit error rate
    pub ber: f64,
    /// Bit error rate after channel coding gain
    pub coded_ber: f64,
}

/// Intermediate terms of the link budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkBudget {
    /// Carrier frequency, MHz
    pub frequency: f64,
    /// Transmit power, dBm
    pub tx_power: f64,
    /// Free-space path loss, dB
    pub path_loss: f64,
}

impl LinkBudget {
    /// Received power after path loss, dBm
    pub fn received_power(&self) -> f64 {
        self.tx_power - self.path_loss
    }
}
