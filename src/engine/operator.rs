//! Binary operators and their evaluation.

use super::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary calculator operator.
///
/// Applying an operator is the only arithmetic the engine performs. The
/// result is the raw IEEE-754 double, with no rounding; overflow yields an
/// infinity, which the display formatter later classifies as an error.
///
/// # Example
///
/// ```rust
/// use deskcalc::engine::Operator;
///
/// assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
/// assert_eq!(Operator::try_from('*'), Ok(Operator::Mul));
/// assert!(Operator::try_from('^').is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Apply the operator to two operands.
    ///
    /// Division by zero fails with [`EngineError::DivisionByZero`]; every
    /// other combination returns the exact double result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deskcalc::engine::{EngineError, Operator};
    ///
    /// assert_eq!(Operator::Div.apply(8.0, 2.0), Ok(4.0));
    /// assert_eq!(Operator::Div.apply(8.0, 0.0), Err(EngineError::DivisionByZero));
    /// ```
    pub fn apply(self, a: f64, b: f64) -> Result<f64, EngineError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Sub => Ok(a - b),
            Self::Mul => Ok(a * b),
            Self::Div if b == 0.0 => Err(EngineError::DivisionByZero),
            Self::Div => Ok(a / b),
        }
    }

    /// The key symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = EngineError;

    /// Parse an operator from its key symbol. Any symbol outside
    /// `+ - * /` fails with [`EngineError::UnknownOperator`].
    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            other => Err(EngineError::UnknownOperator(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
