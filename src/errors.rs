use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serde JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid criterion: {0}")]
    InvalidCriterion(String),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Unknown logic: {0}")]
    UnknownLogic(String),

    #[error("too many criteria: {count} (max {max})")]
    TooManyCriteria { count: usize, max: usize },

    #[error("Form not found: {0}")]
    NoSuchForm(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("record {line}: {message}")]
    Record { line: usize, message: String },
}

impl From<std::io::Error> for FilterError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
