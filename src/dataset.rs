use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};
use serde::Serialize;

use crate::data::DataPoint;
use crate::error::RegressionResult;
use crate::history::ErrorHistory;

/// Shape of a generated point cloud: `count` points scattered above the line
/// `slope * i`, each lifted by up to `noise`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomLayout {
    pub count: usize,
    pub slope: f64,
    pub noise: f64,
}

/// Points a fresh page started with.
pub const SEEDED: RandomLayout = RandomLayout {
    count: 10,
    slope: 10.,
    noise: 20.,
};

/// Points produced by the "Randomize" action.
pub const RANDOMIZED: RandomLayout = RandomLayout {
    count: 10,
    slope: 12.,
    noise: 15.,
};

fn round2(v: f64) -> f64 {
    (v * 100.).round() / 100.
}

pub fn random_points<R: Rng>(rng: &mut R, layout: RandomLayout) -> Vec<DataPoint> {
    let unit = Uniform::new(0f64, 1f64);

    (0..layout.count)
        .map(|i| {
            let i = i as f64;
            let x = round2(i + unit.sample(rng));
            let y = round2(i * layout.slope + unit.sample(rng) * layout.noise);

            DataPoint { x, y }
        })
        .collect()
}

/// Reads `x,y` records from a CSV file with a header row.
pub fn load_points(path: impl AsRef<Path>) -> RegressionResult<Vec<DataPoint>> {
    let path = path.as_ref();
    log::info!("loading points from {}", path.display());

    let points = csv::Reader::from_path(path)?
        .deserialize()
        .collect::<Result<Vec<DataPoint>, _>>()?;

    log::info!("loaded {} points", points.len());

    Ok(points)
}

/// Points from `path` when given, otherwise generated from `seed`.
pub fn load_or_generate(
    path: Option<&Path>,
    seed: u64,
    layout: RandomLayout,
) -> RegressionResult<Vec<DataPoint>> {
    match path {
        Some(path) => load_points(path),
        None => {
            log::info!("generating {} random points (seed {})", layout.count, seed);

            let mut rng = StdRng::seed_from_u64(seed);
            Ok(random_points(&mut rng, layout))
        }
    }
}

#[derive(Debug, Serialize)]
struct HistoryRecord {
    iteration: usize,
    error: f64,
}

pub fn write_history(path: impl AsRef<Path>, history: &ErrorHistory) -> RegressionResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for (i, &error) in history.as_slice().iter().enumerate() {
        writer.serialize(HistoryRecord {
            iteration: i + 1,
            error,
        })?;
    }

    writer.flush()?;

    Ok(())
}
