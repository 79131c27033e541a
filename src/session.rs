use crate::config::{
    validate_learning_rate, validate_max_iterations, TrainingConfig, DEFAULT_LEARNING_RATE,
};
use crate::data::{DataPoint, TrainingSet};
use crate::error::{RegressionError, RegressionResult};
use crate::history::ErrorHistory;
use crate::metrics::{mean_squared_error, residuals};
use crate::model::ModelParameters;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingPhase {
    Idle,
    Running,
    /// The iteration ceiling was reached.
    Completed,
    /// Training was halted on request before the ceiling.
    Stopped,
}

/// What a single step produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    pub iteration: usize,
    pub params: ModelParameters,
    pub error: f64,
}

/// Batch gradient descent over a snapshot of the training points.
///
/// The session starts cold (`weight = bias = 0`) and moves one step at a
/// time. It never enforces the iteration ceiling itself; callers consult
/// [`TrainingSession::can_continue`] before stepping.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSession {
    training_set: TrainingSet,
    params: ModelParameters,
    config: TrainingConfig,
    iteration_count: usize,
    error_history: ErrorHistory,
    phase: TrainingPhase,
}

impl TrainingSession {
    pub fn new(points: &[DataPoint], config: TrainingConfig) -> RegressionResult<Self> {
        config.validate()?;

        log::info!(
            "new training session: {} points, learning rate {}, max iterations {}",
            points.len(),
            config.learning_rate,
            config.max_iterations
        );

        let session = Self {
            training_set: TrainingSet::new(points),
            params: ModelParameters::default(),
            config,
            iteration_count: 0,
            error_history: ErrorHistory::new(),
            phase: TrainingPhase::Idle,
        };
        session.warn_unconventional(&[]);

        Ok(session)
    }

    /// Mean squared error of the current parameters over the snapshot.
    pub fn compute_error(&self) -> RegressionResult<f64> {
        mean_squared_error(&self.training_set, &self.params)
    }

    /// Performs one full-batch update and records the resulting error.
    ///
    /// On failure the session is left exactly as it was.
    pub fn step(&mut self) -> RegressionResult<StepReport> {
        if self.training_set.is_empty() {
            return Err(RegressionError::EmptyDataset);
        }

        let n = self.training_set.len() as f64;
        let errors = residuals(&self.training_set, &self.params);

        let grad_weight = -2. * self.training_set.x().dot(&errors) / n;
        let grad_bias = -2. * errors.sum() / n;

        let lr = self.config.learning_rate;
        let params = ModelParameters {
            weight: self.params.weight - lr * grad_weight,
            bias: self.params.bias - lr * grad_bias,
        };

        let error = mean_squared_error(&self.training_set, &params)?;

        self.params = params;
        self.error_history.push(error);
        self.iteration_count += 1;

        if self.phase == TrainingPhase::Idle {
            self.phase = TrainingPhase::Running;
        }
        self.complete_if_exhausted();

        log::debug!(
            "iteration {}: weight {:.6}, bias {:.6}, error {:.6}",
            self.iteration_count,
            params.weight,
            params.bias,
            error
        );

        Ok(StepReport {
            iteration: self.iteration_count,
            params,
            error,
        })
    }

    /// Zeroes the model, drops the history and trains on a fresh copy of
    /// `points` from now on. The learning rate returns to its default, the
    /// iteration ceiling is kept.
    pub fn reset(&mut self, points: &[DataPoint]) {
        log::info!("resetting training session with {} points", points.len());

        self.training_set = TrainingSet::new(points);
        self.params = ModelParameters::default();
        self.config.learning_rate = DEFAULT_LEARNING_RATE;
        self.iteration_count = 0;
        self.error_history.clear();
        self.phase = TrainingPhase::Idle;
    }

    pub fn can_continue(&self) -> bool {
        self.iteration_count < self.config.max_iterations
    }

    pub fn start(&mut self) -> TrainingPhase {
        self.phase = if self.can_continue() {
            TrainingPhase::Running
        } else {
            TrainingPhase::Completed
        };

        log::info!(
            "training {:?} at iteration {}",
            self.phase,
            self.iteration_count
        );

        self.phase
    }

    pub fn stop(&mut self) -> TrainingPhase {
        if self.phase == TrainingPhase::Running {
            log::info!("training stopped at iteration {}", self.iteration_count);
            self.phase = TrainingPhase::Stopped;
        }

        self.phase
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) -> RegressionResult<()> {
        validate_learning_rate(learning_rate)?;

        let before = self.config.unconventional_settings();
        self.config.learning_rate = learning_rate;
        self.warn_unconventional(&before);

        Ok(())
    }

    pub fn set_max_iterations(&mut self, max_iterations: usize) -> RegressionResult<()> {
        validate_max_iterations(max_iterations)?;

        let before = self.config.unconventional_settings();
        self.config.max_iterations = max_iterations;
        self.warn_unconventional(&before);
        self.complete_if_exhausted();

        Ok(())
    }

    /// Remarks about the current configuration that were not already in
    /// `before`.
    fn new_remarks(&self, before: &[String]) -> Vec<String> {
        self.config
            .unconventional_settings()
            .into_iter()
            .filter(|remark| !before.contains(remark))
            .collect()
    }

    fn warn_unconventional(&self, before: &[String]) {
        for remark in self.new_remarks(before) {
            log::warn!("{}", remark);
        }
    }

    fn complete_if_exhausted(&mut self) {
        if self.phase == TrainingPhase::Running && !self.can_continue() {
            log::info!(
                "training completed after {} iterations",
                self.iteration_count
            );
            self.phase = TrainingPhase::Completed;
        }
    }

    pub fn params(&self) -> ModelParameters {
        self.params
    }

    pub fn weight(&self) -> f64 {
        self.params.weight
    }

    pub fn bias(&self) -> f64 {
        self.params.bias
    }

    pub fn error_history(&self) -> &ErrorHistory {
        &self.error_history
    }

    pub fn iteration_count(&self) -> usize {
        self.iteration_count
    }

    pub fn config(&self) -> TrainingConfig {
        self.config
    }

    pub fn learning_rate(&self) -> f64 {
        self.config.learning_rate
    }

    pub fn max_iterations(&self) -> usize {
        self.config.max_iterations
    }

    pub fn phase(&self) -> TrainingPhase {
        self.phase
    }

    pub fn training_set(&self) -> &TrainingSet {
        &self.training_set
    }
}
