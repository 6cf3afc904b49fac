//! Every failure is terminal for the run; nothing here is retried or skipped.
use definitions::RecordError;

pub const USAGE_MESSAGE: &str = "Need to provide the file to analyze as the single argument";

#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("{}", USAGE_MESSAGE)]
    Usage,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Parse { line: usize, source: RecordError },
    #[error("division by zero while computing {statistic}")]
    ZeroDenominator { statistic: &'static str },
    #[error("invalid profile: {0}")]
    Config(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EvalError>;
