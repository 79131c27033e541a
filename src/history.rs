use itertools::Itertools;

/// Errors recorded after each completed step, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorHistory {
    errors: Vec<f64>,
}

impl ErrorHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, error: f64) {
        self.errors.push(error);
    }

    pub(crate) fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn first(&self) -> Option<f64> {
        self.errors.first().copied()
    }

    pub fn latest(&self) -> Option<f64> {
        self.errors.last().copied()
    }

    /// Largest finite entry. Non-finite entries left behind by a diverging
    /// run are skipped.
    pub fn peak(&self) -> Option<f64> {
        self.errors
            .iter()
            .copied()
            .filter(|e| e.is_finite())
            .max_by(f64::total_cmp)
    }

    pub fn is_diverging(&self) -> bool {
        match (self.first(), self.latest()) {
            (Some(first), Some(latest)) => latest > first,
            _ => false,
        }
    }

    /// Whether the last `window` entries never increase by more than
    /// `tolerance` from one step to the next.
    pub fn tail_non_increasing(&self, window: usize, tolerance: f64) -> bool {
        let start = self.errors.len().saturating_sub(window);

        self.errors[start..]
            .iter()
            .tuple_windows()
            .all(|(prev, next)| next - prev <= tolerance)
    }
}

impl AsRef<[f64]> for ErrorHistory {
    fn as_ref(&self) -> &[f64] {
        &self.errors
    }
}
