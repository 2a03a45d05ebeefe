use thiserror::Error;

#[derive(Debug, Error)]
#[error("unknown month: {0}")]
pub struct ParseMonthError(pub String);

/// Reasons a load attempt could not produce live data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unexpected payload structure: {0}")]
    Shape(&'static str),
    #[error(transparent)]
    Months(#[from] ShapeError),
    #[error("failed to read payload: {0}")]
    Io(#[from] std::io::Error),
}

/// Raised by the strict transform when a months array is not 12 long.
#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("total has {found} months, expected 12")]
    TotalMonths { found: usize },
    #[error("manager {name:?} has {found} months, expected 12")]
    ManagerMonths { name: String, found: usize },
}
