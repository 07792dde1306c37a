//! weft CLI: run, benchmark and validate cloth scenarios.

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "weft")]
#[command(version, about = "weft: mass-spring cloth simulator")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Frame output format for `simulate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FrameFormat {
    /// One `cloth_step_<N>.csv` per exported frame.
    Csv,
    /// A single `animation.json` with every exported frame.
    Json,
    /// No frame output.
    None,
}

/// Parameter preset for `params`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ParamsPreset {
    Default,
    LightBorder,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario and export frames.
    Simulate {
        /// Scenario file (TOML). Overrides --scenario.
        #[arg(short, long)]
        config: Option<String>,

        /// Built-in scenario (sphere_drape, hanging_corners, free_fall).
        #[arg(short, long, default_value = "sphere_drape")]
        scenario: String,

        /// Override the number of steps.
        #[arg(long)]
        steps: Option<u32>,

        /// Output directory for frames.
        #[arg(short, long, default_value = "output")]
        output: String,

        #[arg(short, long, value_enum, default_value = "csv")]
        format: FrameFormat,

        /// Write telemetry events as JSON lines to this file.
        #[arg(long)]
        events: Option<String>,

        /// Log every telemetry event through the tracing subscriber.
        #[arg(long)]
        trace_events: bool,
    },

    /// Run built-in scenarios and report timing.
    Benchmark {
        /// Which scenario to run (sphere_drape, hanging_corners, free_fall, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Override the number of steps.
        #[arg(long)]
        steps: Option<u32>,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a scenario file.
    Validate {
        /// Path to scenario file (TOML).
        path: String,
    },

    /// Print a parameter preset as TOML.
    Params {
        #[arg(value_enum, default_value = "default")]
        preset: ParamsPreset,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Simulate {
            config,
            scenario,
            steps,
            output,
            format,
            events,
            trace_events,
        } => commands::simulate(
            config.as_deref(),
            &scenario,
            steps,
            &output,
            format,
            events.as_deref(),
            trace_events,
        ),
        Commands::Benchmark {
            scenario,
            steps,
            output,
        } => commands::benchmark(&scenario, steps, output.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
        Commands::Params { preset } => commands::params(preset),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
