use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("value at row {row_index} is blank")]
    BlankValue { row_index: usize },
    #[error("unknown algorithm category: {0}")]
    UnknownCategory(String),
    #[error("unknown performance tier: {0}")]
    UnknownPerformance(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
