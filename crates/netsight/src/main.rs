use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::eyre;
use netsight::commands::{self, OutputFormat, ParameterOverrides, SeriesChoice};
use netsight::provider::CommandProvider;
use netsight::{App, AppConfig, default_data_dir, init_logging};

#[derive(Parser, Debug)]
#[command(name = "netsight")]
#[command(about = "A terminal workbench for wireless link budgets")]
struct Args {
    /// Path to the data directory (default: ~/.netsight/)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive dashboard (default)
    Dashboard,

    /// Print the link budget and metrics
    Simulate {
        #[command(flatten)]
        overrides: ParameterOverrides,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Print sweep series
    Chart {
        #[command(flatten)]
        overrides: ParameterOverrides,

        #[arg(short, long, value_enum, default_value_t)]
        series: SeriesChoice,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Write a report with parameters, metrics and charts
    Report {
        #[command(flatten)]
        overrides: ParameterOverrides,

        /// Output file; `.json` selects JSON (default: <data_dir>/reports/)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Ask the configured suggestion command for better parameters
    Suggest {
        #[command(flatten)]
        overrides: ParameterOverrides,

        /// maximize_throughput, minimize_ber, balanced, or free text
        #[arg(short, long)]
        goal: Option<String>,

        /// Extra constraints passed to the model
        #[arg(short, long)]
        constraints: Option<String>,

        /// Command to run instead of suggestion.command from the config
        #[arg(long, num_args = 1.., allow_hyphen_values = true)]
        command: Option<Vec<String>>,

        /// Apply the suggestion and print the recomputed metrics
        #[arg(long)]
        apply: bool,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let config = AppConfig::load(&data_dir)?;

    match args.command.unwrap_or(Command::Dashboard) {
        Command::Dashboard => {
            let mut app = App::from_config(&config, &data_dir)?;

            ratatui::run(|terminal| app.run(terminal))?;

            tracing::info!("Application shutting down");

            if let Err(err) = ratatui::try_restore() {
                tracing::error!("Failed to restore terminal: {err}");
            }
        }
        Command::Simulate { overrides, format } => {
            let params = overrides.resolve(&config)?;
            println!("{}", commands::simulate(&params, format)?);
        }
        Command::Chart {
            overrides,
            series,
            format,
        } => {
            let params = overrides.resolve(&config)?;
            println!("{}", commands::chart(&params, series, format)?);
        }
        Command::Report { overrides, output } => {
            let params = overrides.resolve(&config)?;
            let path = commands::report(&params, output.as_deref(), &config.report_dir(&data_dir))?;
            println!("Report written to {}", path.display());
        }
        Command::Suggest {
            overrides,
            goal,
            constraints,
            command,
            apply,
        } => {
            let params = overrides.resolve(&config)?;
            let argv = command.unwrap_or_else(|| config.suggestion.command.clone());
            let provider = CommandProvider::from_argv(&argv).ok_or_else(|| {
                eyre!("No suggestion command configured; set suggestion.command in config.yaml or pass --command")
            })?;
            let goal = goal.unwrap_or_else(|| config.suggestion.goal.as_str().to_string());
            let constraints = constraints.or_else(|| config.suggestion.constraints.clone());

            print!(
                "{}",
                commands::suggest(&provider, &params, &goal, constraints, apply)?
            );
        }
    }

    Ok(())
}
