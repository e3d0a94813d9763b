//! Simulation input parameters and their domains.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseParameterError, ValidationError};

/// Cellular generation; selects the carrier frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum NetworkType {
    #[serde(rename = "4G")]
    FourG,
    #[default]
    #[serde(rename = "5G")]
    FiveG,
}

impl NetworkType {
    pub const ALL: [NetworkType; 2] = [NetworkType::FourG, NetworkType::FiveG];

    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkType::FourG => "4G",
            NetworkType::FiveG => "5G",
        }
    }

    /// Carrier frequency in MHz
    pub fn frequency_mhz(&self) -> f64 {
        match self {
            NetworkType::FourG => super::profiles::FREQUENCY_4G_MHZ,
            NetworkType::FiveG => super::profiles::FREQUENCY_5G_MHZ,
        }
    }

    /// Additive constant of the path loss formula, in dB
    pub fn path_loss_constant(&self) -> f64 {
        match self {
            NetworkType::FourG => super::profiles::PATH_LOSS_CONSTANT_4G,
            NetworkType::FiveG => super::profiles::PATH_LOSS_CONSTANT_5G,
        }
    }
}

/// Modulation scheme, ordered from most robust to highest capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum Modulation {
    #[serde(rename = "QPSK")]
    Qpsk,
    #[serde(rename = "16-QAM")]
    Qam16,
    #[default]
    #[serde(rename = "64-QAM")]
    Qam64,
    #[serde(rename = "256-QAM")]
    Qam256,
}

impl Modulation {
    pub const ALL: [Modulation; 4] = [
        Modulation::Qpsk,
        Modulation::Qam16,
        Modulation::Qam64,
        Modulation::Qam256,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Modulation::Qpsk => "QPSK",
            Modulation::Qam16 => "16-QAM",
            Modulation::Qam64 => "64-QAM",
            Modulation::Qam256 => "256-QAM",
        }
    }
}

/// Forward error correction scheme applied on top of the modulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum ChannelCoding {
    None,
    Hamming,
    #[default]
    #[serde(rename = "LDPC")]
    Ldpc,
}

impl ChannelCoding {
    pub const ALL: [ChannelCoding; 3] =
        [ChannelCoding::None, ChannelCoding::Hamming, ChannelCoding::Ldpc];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelCoding::None => "None",
            ChannelCoding::Hamming => "Hamming",
            ChannelCoding::Ldpc => "LDPC",
        }
    }
}

macro_rules! text_enum {
    ($ty:ident, $err:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseParameterError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| ParseParameterError::$err(s.to_string()))
            }
        }

        // Config files and suggestions are hand-written; accept the same
        // spellings as `FromStr`.
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }

        impl $ty {
            /// The next variant, wrapping around
            pub fn next(self) -> Self {
                let idx = $ty::ALL.iter().position(|v| *v == self).unwrap_or(0);
                $ty::ALL[(idx + 1) % $ty::ALL.len()]
            }

            /// The previous variant, wrapping around
            pub fn prev(self) -> Self {
                let idx = $ty::ALL.iter().position(|v| *v == self).unwrap_or(0);
                $ty::ALL[(idx + $ty::ALL.len() - 1) % $ty::ALL.len()]
            }
        }
    };
}

text_enum!(NetworkType, NetworkType);
text_enum!(Modulation, Modulation);
text_enum!(ChannelCoding, ChannelCoding);

/// Numeric fields with a bounded domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterField {
    Bandwidth,
    Distance,
    NoiseLevel,
}

impl ParameterField {
    pub const ALL: [ParameterField; 3] = [
        ParameterField::Bandwidth,
        ParameterField::Distance,
        ParameterField::NoiseLevel,
    ];

    /// Inclusive (min, max) bounds
    pub fn domain(&self) -> (f64, f64) {
        match self {
            ParameterField::Bandwidth => (1.0, 100.0),
            ParameterField::Distance => (10.0, 5000.0),
            ParameterField::NoiseLevel => (-120.0, -30.0),
        }
    }

    /// Adjustment increment used by interactive front ends
    pub fn step(&self) -> f64 {
        match self {
            ParameterField::Bandwidth => 1.0,
            ParameterField::Distance => 10.0,
            ParameterField::NoiseLevel => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ParameterField::Bandwidth => "Bandwidth",
            ParameterField::Distance => "Distance",
            ParameterField::NoiseLevel => "Noise level",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            ParameterField::Bandwidth => "MHz",
            ParameterField::Distance => "m",
            ParameterField::NoiseLevel => "dBm",
        }
    }

    /// Check a value against this field's domain. NaN is always rejected.
    pub fn check(&self, value: f64) -> Result<f64, ValidationError> {
        let (min, max) = self.domain();
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(ValidationError {
                field: *self,
                value,
                min,
                max,
            })
        }
    }
}

/// One snapshot of user-chosen link parameters.
///
/// Missing fields deserialize to the defaults (5G, 64-QAM, LDPC, 20 MHz,
/// 500 m, -95 dBm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationParameters {
    pub network_type: NetworkType,
    pub modulation: Modulation,
    pub channel_coding: ChannelCoding,
    /// MHz
    pub bandwidth: f64,
    /// Meters
    pub distance: f64,
    /// dBm
    pub noise_level: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            network_type: NetworkType::FiveG,
            modulation: Modulation::Qam64,
            channel_coding: ChannelCoding::Ldpc,
            bandwidth: 20.0,
            distance: 500.0,
            noise_level: -95.0,
        }
    }
}

impl SimulationParameters {
    /// Reject the snapshot if any numeric field is outside its domain.
    ///
    /// Fields are checked in declaration order; the first failure is returned.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in ParameterField::ALL {
            field.check(self.get(field))?;
        }
        Ok(())
    }

    pub fn get(&self, field: ParameterField) -> f64 {
        match field {
            ParameterField::Bandwidth => self.bandwidth,
            ParameterField::Distance => self.distance,
            ParameterField::NoiseLevel => self.noise_level,
        }
    }

    pub fn set(&mut self, field: ParameterField, value: f64) {
        match field {
            ParameterField::Bandwidth => self.bandwidth = value,
            ParameterField::Distance => self.distance = value,
            ParameterField::NoiseLevel => self.noise_level = value,
        }
    }

    #[must_use]
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    #[must_use]
    pub fn with_bandwidth(mut self, bandwidth: f64) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    #[must_use]
    pub fn with_noise_level(mut self, noise_level: f64) -> Self {
        self.noise_level = noise_level;
        self
    }

    #[must_use]
    pub fn with_modulation(mut self, modulation: Modulation) -> Self {
        self.modulation = modulation;
        self
    }

    #[must_use]
    pub fn with_channel_coding(mut self, channel_coding: ChannelCoding) -> Self {
        self.channel_coding = channel_coding;
        self
    }

    #[must_use]
    pub fn with_network_type(mut self, network_type: NetworkType) -> Self {
        self.network_type = network_type;
        self
    }
}
