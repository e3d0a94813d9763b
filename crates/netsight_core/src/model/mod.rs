mod charts;
mod metrics;
mod params;
mod profiles;

pub use charts::{ChartDataSet, ChartPoint, ChartSeries};
pub use metrics::{LinkBudget, SimulationMetrics};
pub use params::{
    ChannelCoding, Modulation, NetworkType, ParameterField, SimulationParameters,
};
pub use profiles::{
    BER_CEILING, BER_FLOOR, FALLBACK_SPECTRAL_EFFICIENCY, FREQUENCY_4G_MHZ, FREQUENCY_5G_MHZ,
    MIN_USABLE_SNR_DB, ModulationProfile, PATH_LOSS_CONSTANT_4G, PATH_LOSS_CONSTANT_5G,
    TX_POWER_DBM, ber_factor_for_key, coding_gain_for_key, spectral_efficiency_for_key,
};
