//! Arithmetic engine error types.

use thiserror::Error;

/// Errors produced by the arithmetic engine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Unknown operator: {0}")]
    UnknownOperator(char),

    #[error("Not a finite number: '{0}'")]
    NonFinite(String),
}
