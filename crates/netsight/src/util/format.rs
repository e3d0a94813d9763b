use netsight_core::model::ParameterField;

/// Format a power level, e.g. `-111.26 dBm`
pub fn format_dbm(value: f64) -> String {
    format!("{:.2} dBm", value)
}

/// Format a ratio in decibels, e.g. `-16.26 dB`
pub fn format_db(value: f64) -> String {
    format!("{:.2} dB", value)
}

/// Format a data rate, e.g. `120.00 Mbps`
pub fn format_mbps(value: f64) -> String {
    format!("{:.2} Mbps", value)
}

/// Format a bit error rate in scientific notation with two decimals (`4.99e-1`)
pub fn format_ber(value: f64) -> String {
    format!("{:.2e}", value)
}

/// Format a numeric parameter with its unit at full precision (`500 m`, `12.34 MHz`)
pub fn format_parameter(field: ParameterField, value: f64) -> String {
    format!("{} {}", value, field.unit())
}

/// Compact power-of-ten label for log axes (`1e-6`)
pub fn format_decade(exponent: f64) -> String {
    format!("1e{:.0}", exponent)
}
