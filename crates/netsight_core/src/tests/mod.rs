//! Tests for the netsight link model
//!
//! Tests are organized by topic:
//! - `link` - Calculator formulas and the reference scenario
//! - `params` - Parameter parsing, serde forms and domain validation
//! - `properties` - Bounds and monotonicity across the parameter space
//! - `sweep` - Chart series shape, rounding and sweep ranges
//! - `suggest` - Suggestion contract, error wrapping and last-write-wins

mod link;
mod suggest;

use crate::model::{ChannelCoding, Modulation, NetworkType, SimulationParameters};

/// Every combination of the enum fields, numeric fields at their defaults
fn all_enum_combinations() -> Vec<SimulationParameters> {
    let mut out = Vec::new();
    for network_type in NetworkType::ALL {
        for modulation in Modulation::ALL {
            for channel_coding in ChannelCoding::ALL {
                out.push(SimulationParameters {
                    network_type,
                    modulation,
                    channel_coding,
                    ..Default::default()
                });
            }
        }
    }
    out
}

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "Expected {expected}, got {actual} (tolerance {tolerance})"
    );
}
