use ndarray::Array1;

use crate::data::TrainingSet;
use crate::error::{RegressionError, RegressionResult};
use crate::model::ModelParameters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMetric {
    #[default]
    MeanSquare,
    /// Sum of absolute residuals, not averaged.
    Absolute,
}

impl ErrorMetric {
    pub fn evaluate(&self, set: &TrainingSet, params: &ModelParameters) -> RegressionResult<f64> {
        match self {
            ErrorMetric::MeanSquare => mean_squared_error(set, params),
            ErrorMetric::Absolute => total_absolute_error(set, params),
        }
    }
}

/// `y - (weight * x + bias)` for every point, in training-set order.
pub fn residuals(set: &TrainingSet, params: &ModelParameters) -> Array1<f64> {
    let predictions = &set.x() * params.weight + params.bias;

    &set.y() - &predictions
}

pub fn mean_squared_error(set: &TrainingSet, params: &ModelParameters) -> RegressionResult<f64> {
    if set.is_empty() {
        return Err(RegressionError::EmptyDataset);
    }

    let squared_sum = residuals(set, params).mapv(|e| e * e).sum();

    Ok(squared_sum / set.len() as f64)
}

pub fn total_absolute_error(set: &TrainingSet, params: &ModelParameters) -> RegressionResult<f64> {
    if set.is_empty() {
        return Err(RegressionError::EmptyDataset);
    }

    Ok(residuals(set, params).mapv(f64::abs).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataPoint;

    fn line_set() -> TrainingSet {
        TrainingSet::new(&[
            DataPoint::new(0., 1.),
            DataPoint::new(1., 3.),
            DataPoint::new(2., 5.),
        ])
    }

    #[test]
    fn exact_fit_has_no_error() {
        let params = ModelParameters::new(2., 1.);

        assert_eq!(mean_squared_error(&line_set(), &params).unwrap(), 0.);
        assert_eq!(total_absolute_error(&line_set(), &params).unwrap(), 0.);
    }

    #[test]
    fn cold_start_error() {
        let params = ModelParameters::default();

        // residuals 1, 3, 5
        assert_eq!(mean_squared_error(&line_set(), &params).unwrap(), 35. / 3.);
        assert_eq!(total_absolute_error(&line_set(), &params).unwrap(), 9.);
    }

    #[test]
    fn residual_signs() {
        let params = ModelParameters::new(0., 3.);

        assert_eq!(residuals(&line_set(), &params).to_vec(), vec![-2., 0., 2.]);
        assert_eq!(
            ErrorMetric::Absolute.evaluate(&line_set(), &params).unwrap(),
            4.
        );
        assert_eq!(
            ErrorMetric::MeanSquare.evaluate(&line_set(), &params).unwrap(),
            8. / 3.
        );
    }

    #[test]
    fn empty_set_fails() {
        let set = TrainingSet::default();
        let params = ModelParameters::default();

        assert!(matches!(
            mean_squared_error(&set, &params),
            Err(RegressionError::EmptyDataset)
        ));
        assert!(matches!(
            ErrorMetric::Absolute.evaluate(&set, &params),
            Err(RegressionError::EmptyDataset)
        ));
    }
}
