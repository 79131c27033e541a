use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegressionError {
    #[error("training set is empty")]
    EmptyDataset,

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("error in CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub type RegressionResult<T> = Result<T, RegressionError>;
