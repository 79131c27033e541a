use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use regresja_liniowa::dataset::{self, RANDOMIZED, SEEDED};
use regresja_liniowa::metrics::residuals;
use regresja_liniowa::{ErrorMetric, ModelParameters, TrainingSet};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Metric {
    MeanSquare,
    Absolute,
}

impl From<Metric> for ErrorMetric {
    fn from(metric: Metric) -> Self {
        match metric {
            Metric::MeanSquare => ErrorMetric::MeanSquare,
            Metric::Absolute => ErrorMetric::Absolute,
        }
    }
}

/// Measures how well a hand-picked line fits the points.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 1.)]
    weight: f64,

    #[arg(short, long, default_value_t = 0.)]
    bias: f64,

    #[arg(short, long, value_enum, default_value_t = Metric::Absolute)]
    metric: Metric,

    #[arg(short, long)]
    data: Option<PathBuf>,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long)]
    randomized: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let layout = if args.randomized { RANDOMIZED } else { SEEDED };
    let points = dataset::load_or_generate(args.data.as_deref(), args.seed, layout)?;

    let set = TrainingSet::new(&points);
    let params = ModelParameters::new(args.weight, args.bias);

    let metric: ErrorMetric = args.metric.into();
    let error = match metric.evaluate(&set, &params) {
        Ok(error) => error,
        Err(e) => {
            log::error!("No data points. Add some to visualize errors.");
            return Err(e.into());
        }
    };

    let errors = residuals(&set, &params);

    for (p, e) in set.points().zip(errors.iter()) {
        println!(
            "x: {:>7.2}  y: {:>7.2}  predicted: {:>7.2}  residual: {:>7.2}",
            p.x,
            p.y,
            params.predict(p.x),
            e
        );
    }

    println!("{}", params);
    match metric {
        ErrorMetric::MeanSquare => println!("Total Mean Square Error: {:.2}", error),
        ErrorMetric::Absolute => println!("Total Absolute Error: {:.2}", error),
    }

    Ok(())
}
