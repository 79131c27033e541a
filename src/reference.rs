use nalgebra::{DMatrix, DVector};

use crate::data::TrainingSet;
use crate::model::ModelParameters;

/// Closed-form least squares fit, `(XᵀX)θ = Xᵀy` with a column of ones for
/// the bias.
///
/// Returns `None` when there are no points or all points share one `x`.
pub fn normal_equations(set: &TrainingSet) -> Option<ModelParameters> {
    if set.is_empty() {
        return None;
    }

    let n = set.len();
    let xs = set.x();

    let design = DMatrix::from_fn(n, 2, |row, col| if col == 0 { xs[row] } else { 1. });
    let targets = DVector::from_iterator(n, set.y().iter().copied());

    let design_t = design.transpose();
    let theta = (&design_t * &design).try_inverse()? * (design_t * targets);

    let params = ModelParameters::new(theta[0], theta[1]);

    if params.weight.is_finite() && params.bias.is_finite() {
        Some(params)
    } else {
        None
    }
}
