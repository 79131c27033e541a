use std::fmt;

/// Slope and intercept of the line `weight * x + bias`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ModelParameters {
    pub weight: f64,
    pub bias: f64,
}

impl ModelParameters {
    pub fn new(weight: f64, bias: f64) -> Self {
        Self { weight, bias }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.weight * x + self.bias
    }
}

impl fmt::Display for ModelParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {:.4} * x + {:.4}", self.weight, self.bias)
    }
}
