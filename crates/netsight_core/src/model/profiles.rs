//! Fixed model constants and lookup tables.
//!
//! The typed lookups (`Modulation::profile`, `ChannelCoding::gain_db`) cover
//! every enum variant. The `*_for_key` functions accept raw text, as found in
//! config files or language-model output, and fall back when the key is
//! unknown:
//! - BER factor: the QPSK profile
//! - spectral efficiency: a bare 2 bits/symbol
//! - coding gain: 0 dB
//!
//! The two modulation fallbacks agree numerically since QPSK carries 2 bits.

use serde::{Deserialize, Serialize};

use super::params::{ChannelCoding, Modulation};

/// Transmit power of a typical macro cell, dBm
pub const TX_POWER_DBM: f64 = 46.0;

pub const FREQUENCY_4G_MHZ: f64 = 2600.0;
pub const FREQUENCY_5G_MHZ: f64 = 3500.0;

pub const PATH_LOSS_CONSTANT_4G: f64 = 32.4;
pub const PATH_LOSS_CONSTANT_5G: f64 = 32.4;

/// Below this SNR (dB) the link carries no data
pub const MIN_USABLE_SNR_DB: f64 = -10.0;

pub const BER_FLOOR: f64 = 1e-9;
pub const BER_CEILING: f64 = 0.5;

pub const FALLBACK_SPECTRAL_EFFICIENCY: f64 = 2.0;

/// Robustness and capacity of a modulation scheme
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModulationProfile {
    /// Divides linear SNR in the BER exponent; larger means more error-prone
    pub ber_factor: f64,
    /// Bits carried per symbol
    pub spectral_efficiency_bits: f64,
}

impl Modulation {
    pub fn profile(&self) -> ModulationProfile {
        let (ber_factor, spectral_efficiency_bits) = match self {
            Modulation::Qpsk => (0.5, 2.0),
            Modulation::Qam16 => (2.5, 4.0),
            Modulation::Qam64 => (10.5, 6.0),
            Modulation::Qam256 => (40.5, 8.0),
        };
        ModulationProfile {
            ber_factor,
            spectral_efficiency_bits,
        }
    }
}

impl ChannelCoding {
    /// Effective SNR improvement, dB
    pub fn gain_db(&self) -> f64 {
        match self {
            ChannelCoding::None => 0.0,
            ChannelCoding::Hamming => 2.5,
            ChannelCoding::Ldpc => 6.0,
        }
    }
}

/// BER factor for a modulation key, falling back to the QPSK profile.
pub fn ber_factor_for_key(key: &str) -> f64 {
    key.parse::<Modulation>()
        .unwrap_or(Modulation::Qpsk)
        .profile()
        .ber_factor
}

/// Spectral efficiency for a modulation key, falling back to 2 bits.
pub fn spectral_efficiency_for_key(key: &str) -> f64 {
    key.parse::<Modulation>()
        .map(|m| m.profile().spectral_efficiency_bits)
        .unwrap_or(FALLBACK_SPECTRAL_EFFICIENCY)
}

/// Coding gain for a coding key, falling back to 0 dB.
pub fn coding_gain_for_key(key: &str) -> f64 {
    key.parse::<ChannelCoding>()
        .map(|c| c.gain_db())
        .unwrap_or(0.0)
}
