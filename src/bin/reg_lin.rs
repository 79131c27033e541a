use std::ops::ControlFlow;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use regresja_liniowa::dataset::{self, RANDOMIZED, SEEDED};
use regresja_liniowa::driver::drive;
use regresja_liniowa::plots::render_training_svg;
use regresja_liniowa::reference::normal_equations;
use regresja_liniowa::{TrainingConfig, TrainingPhase, TrainingSession};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fits a line to points with batch gradient descent", long_about = None)]
struct Args {
    /// CSV file with `x,y` columns; random points are used when omitted.
    #[arg(short, long)]
    data: Option<PathBuf>,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Use the "Randomize" layout instead of the initial one.
    #[arg(long)]
    randomized: bool,

    #[arg(short, long, default_value_t = regresja_liniowa::config::DEFAULT_LEARNING_RATE)]
    learning_rate: f64,

    #[arg(short, long, default_value_t = regresja_liniowa::config::DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Pause between steps, in milliseconds.
    #[arg(long, default_value_t = 0)]
    interval_ms: u64,

    #[arg(long, default_value = "plots/reg_lin.svg")]
    plot: String,

    /// Where to write the error history as CSV.
    #[arg(long)]
    history: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let layout = if args.randomized { RANDOMIZED } else { SEEDED };
    let points = dataset::load_or_generate(args.data.as_deref(), args.seed, layout)?;

    let config = TrainingConfig::new(args.learning_rate, args.max_iterations)?;
    let mut session = TrainingSession::new(&points, config)?;

    let interval = (args.interval_ms > 0).then(|| Duration::from_millis(args.interval_ms));

    let phase = drive(&mut session, interval, |report| {
        log::info!(
            "Iteration: {} | Current Error: {:.4} | {}",
            report.iteration,
            report.error,
            report.params
        );

        if report.error.is_finite() {
            ControlFlow::Continue(())
        } else {
            log::warn!("error is no longer finite, stopping");
            ControlFlow::Break(())
        }
    })?;

    let history = session.error_history();

    if history.is_diverging() {
        log::warn!(
            "error grew from {:.4} to {:.4}; learning rate {} is too large for this data",
            history.first().unwrap_or_default(),
            history.latest().unwrap_or_default(),
            session.learning_rate()
        );
    }

    println!(
        "{:?} after {} iterations: {}",
        phase,
        session.iteration_count(),
        session.params()
    );

    if phase == TrainingPhase::Completed {
        println!("final error: {:.6}", session.compute_error()?);
    }

    match normal_equations(session.training_set()) {
        Some(optimum) => println!(
            "least squares optimum: {} (weight gap {:.4}, bias gap {:.4})",
            optimum,
            (optimum.weight - session.weight()).abs(),
            (optimum.bias - session.bias()).abs()
        ),
        None => println!("least squares optimum is undefined for these points"),
    }

    if let Some(path) = &args.history {
        dataset::write_history(path, history)?;
    }

    if let Some(parent) = std::path::Path::new(&args.plot).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    render_training_svg(
        &args.plot,
        session.training_set(),
        &session.params(),
        history,
        session.max_iterations(),
    )?;

    Ok(())
}
