//! Tests for the link metrics calculator
//!
//! These tests verify that:
//! - The reference 5G/64-QAM/LDPC scenario matches hand-computed values
//! - Path loss floors at zero for non-positive distance
//! - Throughput follows the Shannon limit until the modulation cap
//! - BER is clamped and coding gain lowers it
//! - Unknown text keys use the documented fallbacks

use super::assert_close;
use crate::link::{
    ber, ber_for_key, coded_ber, coded_ber_for_key, compute_link_budget, compute_metrics,
    path_loss_db, throughput_for_key, throughput_mbps, uncoded_ber,
};
use crate::model::{
    ChannelCoding, Modulation, NetworkType, SimulationParameters, coding_gain_for_key,
    spectral_efficiency_for_key,
};

#[test]
fn test_reference_scenario() {
    let params = SimulationParameters {
        network_type: NetworkType::FiveG,
        modulation: Modulation::Qam64,
        channel_coding: ChannelCoding::Ldpc,
        bandwidth: 20.0,
        distance: 500.0,
        noise_level: -95.0,
    };

    let budget = compute_link_budget(&params);
    assert_eq!(budget.frequency, 3500.0);
    assert_eq!(budget.tx_power, 46.0);
    assert_close(budget.path_loss, 157.2608, 1e-3);

    let metrics = compute_metrics(&params);
    assert_close(metrics.signal_strength, -111.2608, 1e-3);
    assert_close(metrics.snr, -16.2608, 1e-3);
    // SNR below -10 dB: the link carries nothing
    assert_eq!(metrics.throughput, 0.0);
    assert_close(metrics.ber, 0.499437, 1e-5);
    assert_close(metrics.coded_ber, 0.497763, 1e-5);
    assert!(metrics.coded_ber < metrics.ber);
}

#[test]
fn test_4g_uses_lower_carrier() {
    let params = SimulationParameters::default().with_network_type(NetworkType::FourG);

    let budget = compute_link_budget(&params);
    assert_eq!(budget.frequency, 2600.0);
    assert_close(budget.path_loss, 154.6789, 1e-3);

    // Lower frequency means less path loss, so a stronger signal than 5G
    let five_g = compute_metrics(&SimulationParameters::default());
    let four_g = compute_metrics(&params);
    assert!(four_g.signal_strength > five_g.signal_strength);
}

#[test]
fn test_path_loss_floor_for_non_positive_distance() {
    assert_eq!(path_loss_db(0.0, 3500.0, 32.4), 0.0);
    assert_eq!(path_loss_db(-25.0, 2600.0, 32.4), 0.0);

    let metrics = compute_metrics(&SimulationParameters::default().with_distance(0.0));
    assert_eq!(metrics.signal_strength, 46.0);
    assert_eq!(metrics.snr, 46.0 - (-95.0));
}

#[test]
fn test_throughput_capped_by_modulation() {
    // Close range, quiet channel: SNR ~42.7 dB, far above every cap
    let params = SimulationParameters::default()
        .with_distance(10.0)
        .with_noise_level(-120.0);

    for modulation in Modulation::ALL {
        let metrics = compute_metrics(&params.with_modulation(modulation));
        let cap = modulation.profile().spectral_efficiency_bits;
        assert_close(metrics.throughput, 20.0 * cap, 1e-9);
    }
}

#[test]
fn test_throughput_follows_shannon_below_cap() {
    // 0 dB SNR: log2(1 + 1) = 1 bit/s/Hz
    assert_close(throughput_mbps(0.0, 10.0, 6.0), 10.0, 1e-12);
    // Exactly at the -10 dB threshold the formula still applies
    assert_close(throughput_mbps(-10.0, 10.0, 6.0), 10.0 * 1.1f64.log2(), 1e-12);
    assert_eq!(throughput_mbps(-10.0001, 10.0, 6.0), 0.0);
}

#[test]
fn test_ber_formula_and_clamp() {
    // 0 dB SNR with QPSK: 0.5 * exp(-1)
    assert_close(ber(0.0, 0.5), 0.5 * (-1.0f64).exp(), 1e-15);
    assert_close(uncoded_ber(0.0, Modulation::Qam64), 0.5 * (-0.5f64 / 10.5).exp(), 1e-15);

    // Very high SNR clamps to the floor
    assert_eq!(ber(60.0, 40.5), 1e-9);
    // Very low SNR never exceeds one half
    assert!(ber(-100.0, 0.5) <= 0.5);
}

#[test]
fn test_coded_ber_applies_gain() {
    let snr = 3.0;
    for modulation in Modulation::ALL {
        assert_eq!(
            coded_ber(snr, modulation, ChannelCoding::None),
            uncoded_ber(snr, modulation)
        );
        assert_eq!(
            coded_ber(snr, modulation, ChannelCoding::Hamming),
            uncoded_ber(snr + 2.5, modulation)
        );
        assert_eq!(
            coded_ber(snr, modulation, ChannelCoding::Ldpc),
            uncoded_ber(snr + 6.0, modulation)
        );
    }
}

#[test]
fn test_unknown_modulation_key_fallbacks() {
    // BER path: full QPSK profile
    assert_eq!(ber_for_key(0.0, "1024-QAM"), ber(0.0, 0.5));
    assert_eq!(ber_for_key(0.0, "1024-QAM"), uncoded_ber(0.0, Modulation::Qpsk));

    // Throughput path: bare efficiency of 2 bits
    assert_eq!(spectral_efficiency_for_key("1024-QAM"), 2.0);
    assert_close(throughput_for_key(20.0, 10.0, "1024-QAM"), 20.0, 1e-12);

    // Known keys resolve regardless of case
    assert_eq!(spectral_efficiency_for_key("256-qam"), 8.0);
    assert_eq!(ber_for_key(5.0, " 16-QAM "), uncoded_ber(5.0, Modulation::Qam16));
}

#[test]
fn test_unknown_coding_key_has_no_gain() {
    assert_eq!(coding_gain_for_key("Turbo"), 0.0);
    assert_eq!(coding_gain_for_key("ldpc"), 6.0);
    assert_eq!(coded_ber_for_key(0.0, "QPSK", "Turbo"), ber(0.0, 0.5));
    assert_eq!(
        coded_ber_for_key(0.0, "64-QAM", "Hamming"),
        coded_ber(0.0, Modulation::Qam64, ChannelCoding::Hamming)
    );
}
