use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Owned snapshot of the points a session trains on.
///
/// The points are copied into two columns on construction, so later edits to
/// the caller's collection never reach a running session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrainingSet {
    x: Array1<f64>,
    y: Array1<f64>,
}

impl TrainingSet {
    pub fn new(points: &[DataPoint]) -> Self {
        points.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> ArrayView1<f64> {
        self.x.view()
    }

    pub fn y(&self) -> ArrayView1<f64> {
        self.y.view()
    }

    pub fn points(&self) -> impl Iterator<Item = DataPoint> + Clone + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| DataPoint { x, y })
    }

    pub fn to_points(&self) -> Vec<DataPoint> {
        self.points().collect()
    }
}

impl FromIterator<DataPoint> for TrainingSet {
    fn from_iter<I: IntoIterator<Item = DataPoint>>(iter: I) -> Self {
        let (x, y): (Vec<f64>, Vec<f64>) = iter.into_iter().map(|p| (p.x, p.y)).unzip();

        Self {
            x: Array1::from_vec(x),
            y: Array1::from_vec(y),
        }
    }
}

impl From<&[DataPoint]> for TrainingSet {
    fn from(points: &[DataPoint]) -> Self {
        Self::new(points)
    }
}
