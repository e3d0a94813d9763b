//! Non-interactive subcommands: each resolves a parameter snapshot, runs the
//! link model once and renders the result as text.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, eyre};
use netsight_core::model::{ChartSeries, ParameterField};
use netsight_core::suggest::{
    SuggestionGoal, SuggestionProvider, SuggestionRequest, SuggestionResponse, request_suggestion,
};
use netsight_core::{
    ChannelCoding, ChartDataSet, Modulation, NetworkType, SimulationOutcome, SimulationParameters,
    run_simulation,
};

use crate::config::{AppConfig, load_parameters};
use crate::data::SimulationReport;
use crate::util::format::{format_ber, format_db, format_dbm, format_mbps, format_parameter};

/// Parameter flags shared by every subcommand.
///
/// Precedence: flags, then `--params` file, then config defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct ParameterOverrides {
    /// YAML or JSON file with simulation parameters
    #[arg(long = "params", value_name = "FILE")]
    pub params_file: Option<PathBuf>,

    /// Network type (4G or 5G)
    #[arg(long = "network")]
    pub network_type: Option<NetworkType>,

    /// Modulation (QPSK, 16-QAM, 64-QAM, 256-QAM)
    #[arg(long)]
    pub modulation: Option<Modulation>,

    /// Channel coding (None, Hamming, LDPC)
    #[arg(long = "coding")]
    pub channel_coding: Option<ChannelCoding>,

    /// Bandwidth in MHz [1, 100]
    #[arg(long)]
    pub bandwidth: Option<f64>,

    /// Distance in meters [10, 5000]
    #[arg(long)]
    pub distance: Option<f64>,

    /// Noise level in dBm [-120, -30]
    #[arg(long = "noise", allow_hyphen_values = true)]
    pub noise_level: Option<f64>,
}

impl ParameterOverrides {
    /// Merge the overrides onto the configured defaults. Does not validate.
    pub fn resolve(&self, config: &AppConfig) -> Result<SimulationParameters> {
        let mut params = match &self.params_file {
            Some(path) => load_parameters(path)?,
            None => config.defaults,
        };

        if let Some(v) = self.network_type {
            params.network_type = v;
        }
        if let Some(v) = self.modulation {
            params.modulation = v;
        }
        if let Some(v) = self.channel_coding {
            params.channel_coding = v;
        }
        if let Some(v) = self.bandwidth {
            params.bandwidth = v;
        }
        if let Some(v) = self.distance {
            params.distance = v;
        }
        if let Some(v) = self.noise_level {
            params.noise_level = v;
        }
        Ok(params)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeriesChoice {
    #[default]
    All,
    Signal,
    Ber,
    Throughput,
}

impl SeriesChoice {
    fn series(&self) -> Vec<ChartSeries> {
        match self {
            SeriesChoice::All => ChartSeries::ALL.to_vec(),
            SeriesChoice::Signal => vec![ChartSeries::SignalVsDistance],
            SeriesChoice::Ber => vec![ChartSeries::BerVsSnr],
            SeriesChoice::Throughput => vec![ChartSeries::ThroughputVsBandwidth],
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).wrap_err("Failed to serialize JSON output")
}

fn to_yaml<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_saphyr::to_string(value).map_err(|e| eyre!("Failed to serialize YAML output: {e}"))
}

/// One-line summary such as `5G | 64-QAM | LDPC | 20 MHz | 500 m | -95 dBm`
pub fn describe_parameters(params: &SimulationParameters) -> String {
    format!(
        "{} | {} | {} | {} | {} | {}",
        params.network_type,
        params.modulation,
        params.channel_coding,
        format_parameter(ParameterField::Bandwidth, params.bandwidth),
        format_parameter(ParameterField::Distance, params.distance),
        format_parameter(ParameterField::NoiseLevel, params.noise_level),
    )
}

fn metrics_table(outcome: &SimulationOutcome) -> String {
    let m = &outcome.metrics;
    let b = &outcome.link_budget;
    let rows = [
        ("Parameters", describe_parameters(&outcome.parameters)),
        ("Frequency", format!("{:.0} MHz", b.frequency)),
        ("Path loss", format_db(b.path_loss)),
        ("Signal strength", format_dbm(m.signal_strength)),
        ("SNR", format_db(m.snr)),
        ("Throughput", format_mbps(m.throughput)),
        ("BER", format_ber(m.ber)),
        ("Coded BER", format_ber(m.coded_ber)),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        let _ = writeln!(out, "{label:<16} {value}");
    }
    out
}

/// `simulate`: link budget and headline metrics
pub fn simulate(params: &SimulationParameters, format: OutputFormat) -> Result<String> {
    let outcome = run_simulation(params)?;
    tracing::debug!(?params, snr = outcome.metrics.snr, "Simulated link");

    match format {
        OutputFormat::Table => Ok(metrics_table(&outcome)),
        OutputFormat::Json => to_json(&metrics_view(&outcome)),
        OutputFormat::Yaml => to_yaml(&metrics_view(&outcome)),
    }
}

/// Serializable subset of an outcome without the chart series
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct MetricsView<'a> {
    parameters: &'a SimulationParameters,
    link_budget: &'a netsight_core::LinkBudget,
    metrics: &'a netsight_core::SimulationMetrics,
}

fn metrics_view(outcome: &SimulationOutcome) -> MetricsView<'_> {
    MetricsView {
        parameters: &outcome.parameters,
        link_budget: &outcome.link_budget,
        metrics: &outcome.metrics,
    }
}

fn series_table(charts: &ChartDataSet, series: ChartSeries) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", series.title());
    let _ = writeln!(out, "{:>16}  {}", series.x_label(), series.y_label());
    for p in charts.series(series) {
        let y = if series.is_log_scale() {
            format_ber(p.y)
        } else {
            format!("{:.2}", p.y)
        };
        let _ = writeln!(out, "{:>16}  {}", p.x, y);
    }
    out
}

/// `chart`: one or all sweep series
pub fn chart(
    params: &SimulationParameters,
    choice: SeriesChoice,
    format: OutputFormat,
) -> Result<String> {
    let outcome = run_simulation(params)?;
    let selected = choice.series();

    match format {
        OutputFormat::Table => Ok(selected
            .iter()
            .map(|s| series_table(&outcome.charts, *s))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json | OutputFormat::Yaml => {
            let map: std::collections::BTreeMap<&'static str, &[netsight_core::ChartPoint]> =
                selected
                    .iter()
                    .map(|s| (series_key(*s), outcome.charts.series(*s)))
                    .collect();
            if format == OutputFormat::Json {
                to_json(&map)
            } else {
                to_yaml(&map)
            }
        }
    }
}

fn series_key(series: ChartSeries) -> &'static str {
    match series {
        ChartSeries::SignalVsDistance => "signalVsDistance",
        ChartSeries::BerVsSnr => "berVsSnr",
        ChartSeries::ThroughputVsBandwidth => "throughputVsBandwidth",
    }
}

/// `report`: write the full outcome to disk and return the path
pub fn report(
    params: &SimulationParameters,
    output: Option<&Path>,
    report_dir: &Path,
) -> Result<PathBuf> {
    let outcome = run_simulation(params)?;
    let report = SimulationReport::new(outcome, jiff::Timestamp::now());
    Ok(report.save(output, report_dir)?)
}

/// Turn user goal text into request text; known keys expand to their description
pub fn goal_text(goal: &str) -> String {
    SuggestionGoal::from_key(goal)
        .map(|g| g.description().to_string())
        .unwrap_or_else(|| goal.trim().to_string())
}

/// Render a suggestion for the terminal
pub fn describe_suggestion(response: &SuggestionResponse) -> String {
    let s = &response.suggested_parameters;
    let mut out = String::new();
    let _ = writeln!(out, "Suggested parameters");
    let _ = writeln!(out, "  {:<12} {}", "Modulation", s.modulation);
    let _ = writeln!(
        out,
        "  {:<12} {}",
        "Bandwidth",
        format_parameter(ParameterField::Bandwidth, s.bandwidth)
    );
    let _ = writeln!(
        out,
        "  {:<12} {}",
        "Distance",
        format_parameter(ParameterField::Distance, s.distance)
    );
    let _ = writeln!(
        out,
        "  {:<12} {}",
        "Noise level",
        format_parameter(ParameterField::NoiseLevel, s.noise_level)
    );
    let _ = writeln!(out, "\nReasoning: {}", response.reasoning);
    out
}

/// `suggest`: ask the provider, print the answer, optionally apply it
pub fn suggest(
    provider: &dyn SuggestionProvider,
    params: &SimulationParameters,
    goal: &str,
    constraints: Option<String>,
    apply: bool,
) -> Result<String> {
    let request =
        SuggestionRequest::new(params.network_type, goal_text(goal)).with_constraints(constraints);

    let response = request_suggestion(provider, &request).map_err(|e| {
        if let Some(cause) = std::error::Error::source(&e) {
            tracing::error!("AI suggestion failed: {cause}");
        }
        eyre!("{e}")
    })?;

    let mut out = describe_suggestion(&response);
    if apply {
        let applied = response.suggested_parameters.apply_to(params)?;
        out.push('\n');
        out.push_str(&simulate(&applied, OutputFormat::Table)?);
    }
    Ok(out)
}
