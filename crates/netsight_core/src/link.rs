//! Link metrics calculator.
//!
//! Every function here is pure. Inputs outside the parameter domains are
//! evaluated as-is (no clamping); the only guard is the distance floor in
//! [`path_loss_db`]. Callers that need domain guarantees validate first, see
//! [`crate::simulation::run_simulation`].

use crate::model::{
    BER_CEILING, BER_FLOOR, ChannelCoding, LinkBudget, MIN_USABLE_SNR_DB, Modulation,
    SimulationMetrics, SimulationParameters, TX_POWER_DBM, ber_factor_for_key,
    coding_gain_for_key, spectral_efficiency_for_key,
};

/// Free-space path loss in dB.
///
/// Non-positive distances yield 0 rather than a physical result.
pub fn path_loss_db(distance_m: f64, frequency_mhz: f64, constant: f64) -> f64 {
    if distance_m <= 0.0 {
        return 0.0;
    }
    20.0 * distance_m.log10() + 20.0 * frequency_mhz.log10() + constant
}

/// Received signal strength in dBm for the fixed transmit power
pub fn signal_strength_dbm(path_loss: f64) -> f64 {
    TX_POWER_DBM - path_loss
}

pub fn snr_db(signal_strength_dbm: f64, noise_level_dbm: f64) -> f64 {
    signal_strength_dbm - noise_level_dbm
}

fn snr_linear(snr_db: f64) -> f64 {
    10f64.powf(snr_db / 10.0)
}

/// Shannon-Hartley throughput in Mbps, capped at the modulation's bits per symbol.
///
/// Links below -10 dB SNR carry nothing.
pub fn throughput_mbps(snr_db: f64, bandwidth_mhz: f64, spectral_efficiency: f64) -> f64 {
    if snr_db < MIN_USABLE_SNR_DB {
        return 0.0;
    }
    let theoretical = (1.0 + snr_linear(snr_db)).log2();
    bandwidth_mhz * spectral_efficiency.min(theoretical)
}

/// Exponential BER approximation, clamped to `[1e-9, 0.5]`
pub fn ber(snr_db: f64, ber_factor: f64) -> f64 {
    let raw = 0.5 * (-0.5 * snr_linear(snr_db) / ber_factor).exp();
    raw.clamp(BER_FLOOR, BER_CEILING)
}

pub fn uncoded_ber(snr_db: f64, modulation: Modulation) -> f64 {
    ber(snr_db, modulation.profile().ber_factor)
}

/// BER after adding the coding gain to the SNR
pub fn coded_ber(snr_db: f64, modulation: Modulation, coding: ChannelCoding) -> f64 {
    uncoded_ber(snr_db + coding.gain_db(), modulation)
}

/// Throughput for a raw modulation key; unknown keys carry 2 bits per symbol.
pub fn throughput_for_key(snr_db: f64, bandwidth_mhz: f64, modulation: &str) -> f64 {
    throughput_mbps(snr_db, bandwidth_mhz, spectral_efficiency_for_key(modulation))
}

/// BER for a raw modulation key; unknown keys use the QPSK profile.
pub fn ber_for_key(snr_db: f64, modulation: &str) -> f64 {
    ber(snr_db, ber_factor_for_key(modulation))
}

/// Coded BER for raw keys; unknown coding contributes no gain.
pub fn coded_ber_for_key(snr_db: f64, modulation: &str, coding: &str) -> f64 {
    ber_for_key(snr_db + coding_gain_for_key(coding), modulation)
}

/// Frequency, transmit power and path loss for a parameter snapshot
pub fn compute_link_budget(params: &SimulationParameters) -> LinkBudget {
    let frequency = params.network_type.frequency_mhz();
    let constant = params.network_type.path_loss_constant();
    LinkBudget {
        frequency,
        tx_power: TX_POWER_DBM,
        path_loss: path_loss_db(params.distance, frequency, constant),
    }
}

/// Compute the headline metrics for one parameter snapshot.
pub fn compute_metrics(params: &SimulationParameters) -> SimulationMetrics {
    let budget = compute_link_budget(params);
    let signal_strength = signal_strength_dbm(budget.path_loss);
    let snr = snr_db(signal_strength, params.noise_level);
    let profile = params.modulation.profile();

    SimulationMetrics {
        signal_strength,
        snr,
        throughput: throughput_mbps(snr, params.bandwidth, profile.spectral_efficiency_bits),
        ber: ber(snr, profile.ber_factor),
        coded_ber: coded_ber(snr, params.modulation, params.channel_coding),
    }
}
