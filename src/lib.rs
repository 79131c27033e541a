pub mod config;
pub mod data;
pub mod dataset;
pub mod driver;
pub mod error;
pub mod history;
pub mod metrics;
pub mod model;
pub mod plots;
pub mod reference;
pub mod session;

pub use config::TrainingConfig;
pub use data::{DataPoint, TrainingSet};
pub use error::{RegressionError, RegressionResult};
pub use history::ErrorHistory;
pub use metrics::ErrorMetric;
pub use model::ModelParameters;
pub use session::{StepReport, TrainingPhase, TrainingSession};
