use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeometryOpError {
    #[error("geometry failed validation: {0}")]
    Invalid(String),
    #[error("operation requires a {expected} geometry, got {actual}")]
    WrongType {
        expected: &'static str,
        actual: &'static str,
    },
    #[error("radius must be a positive number of meters")]
    NonPositiveRadius,
}
