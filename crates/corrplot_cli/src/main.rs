use anyhow::{Context, Result};
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{error, info};

use corrplot_cli::app::{noise_source, resolve_params};
use corrplot_cli::config::Config;
use corrplot_cli::sweep::{exponent_grid, sweep};
use corrplot_cli::{export, interactive, logging, render};
use corrplot_core::{format_correlation, PlotParams, PlotState};

#[derive(Parser)]
#[command(name = "corrplot", version)]
#[command(about = "Pearson r of noisy samples from the power curve y = x^p")]
struct Cli {
    #[command(flatten)]
    params: PlotParams,

    /// Seed for reproducible noise (fresh entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Config file (default: ~/.corrplot/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print power, noise, correlation coefficient and equation
    Show,
    /// Render the sample and the ideal curve to an SVG file
    Plot {
        /// Output SVG path
        #[arg(short, long)]
        output: PathBuf,
        /// Width in pixels (overrides config)
        #[arg(long)]
        width: Option<u32>,
        /// Height in pixels (overrides config)
        #[arg(long)]
        height: Option<u32>,
    },
    /// Write the sample as CSV (x,y,idealY)
    Export {
        /// Output CSV path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print r for a range of exponents at the current noise level
    Sweep {
        #[arg(long, default_value_t = 1.0)]
        from: f64,
        #[arg(long, default_value_t = 10.0)]
        to: f64,
        #[arg(long, default_value_t = 1.0)]
        step: f64,
    },
    /// Adjust power and noise from a prompt; read-outs reprint on each change
    Interactive,
}

fn run(cli: Cli, matches: &ArgMatches) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).context("loading config")?;
    let params = resolve_params(&cli.params, matches, &config.defaults);
    let seed = cli.seed.or(config.defaults.seed);

    info!(
        exponent = params.exponent,
        noise = params.noise_amplitude,
        samples = params.sample_count,
        seed = ?seed,
        "Starting corrplot"
    );

    let noise = noise_source(seed);
    let stdout = io::stdout();

    match cli.command {
        Commands::Show => {
            let state = PlotState::new(params, noise);
            writeln!(stdout.lock(), "{}", state.summary())?;
        }
        Commands::Plot {
            output,
            width,
            height,
        } => {
            let state = PlotState::new(params, noise);
            let mut style = config.plot.clone();
            style.width = width.unwrap_or(style.width);
            style.height = height.unwrap_or(style.height);
            render::render_svg(
                &output,
                state.sample(),
                state.params().exponent,
                state.correlation(),
                &style,
            )?;
            writeln!(stdout.lock(), "{}", state.summary())?;
        }
        Commands::Export { output } => {
            let state = PlotState::new(params, noise);
            export::export_csv(&output, state.sample())?;
        }
        Commands::Sweep { from, to, step } => {
            let grid = exponent_grid(from, to, step)?;
            let rows = sweep(&grid, params.noise_amplitude, params.sample_count, noise);
            let mut out = stdout.lock();
            writeln!(out, "noise = {:.2}", params.noise_amplitude)?;
            writeln!(out, "{:>8}  {:>9}", "power", "r")?;
            for row in rows {
                writeln!(
                    out,
                    "{:>8.2}  {:>9}",
                    row.exponent,
                    format_correlation(row.correlation)
                )?;
            }
        }
        Commands::Interactive => {
            let mut state = PlotState::new(params, noise);
            interactive::run(&mut state, io::stdin().lock(), stdout.lock())?;
        }
    }

    Ok(())
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    logging::init(cli.log_json);

    if let Err(e) = run(cli, &matches) {
        error!(error = %format!("{e:#}"), "Fatal Error");
        std::process::exit(1);
    }
}
