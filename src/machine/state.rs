//! Calculator session state.
//!
//! One `CalculatorState` exists per session. It is owned exclusively by its
//! caller and replaced wholesale on every transition; nothing here mutates.

use crate::engine::{format_for_display, Operator, ERROR_TEXT};
use serde::{Deserialize, Serialize};

/// A pending operation: the left-hand operand latched together with its
/// operator.
///
/// The two always travel as a pair, so a dangling operator or an orphaned
/// operand cannot be represented.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pending {
    /// Left-hand operand text, captured when the operator was pressed.
    pub value: String,
    /// The operator awaiting its right-hand operand.
    pub op: Operator,
}

/// State of one calculator session.
///
/// # Example
///
/// ```rust
/// use deskcalc::machine::CalculatorState;
///
/// let state = CalculatorState::default();
/// assert_eq!(state.current_value, "0");
/// assert!(state.pending.is_none());
/// assert!(!state.overwrite);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text of the value being entered or last computed. Never empty;
    /// always a decimal numeral with at most one point, or the error
    /// marker.
    pub current_value: String,
    /// Operation awaiting a right-hand operand, if any.
    pub pending: Option<Pending>,
    /// When set, the next digit or decimal entry replaces `current_value`
    /// instead of appending to it.
    pub overwrite: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_value: "0".to_string(),
            pending: None,
            overwrite: false,
        }
    }
}

impl CalculatorState {
    /// Bounded display text for the current value.
    pub fn display(&self) -> String {
        format_for_display(&self.current_value)
    }

    /// Pending-expression text: `"<operand> <operator>"`, or empty when no
    /// operation is pending.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deskcalc::machine::{transition, CalculatorState, Intent};
    /// use deskcalc::engine::Operator;
    ///
    /// let state = CalculatorState::default();
    /// let state = transition(&state, Intent::Digit('7'));
    /// let state = transition(&state, Intent::Operator(Operator::Add));
    /// assert_eq!(state.expression(), "7 +");
    /// ```
    pub fn expression(&self) -> String {
        match &self.pending {
            Some(pending) => format!("{} {}", pending.value, pending.op),
            None => String::new(),
        }
    }

    /// Whether the session is showing the error marker.
    pub fn is_error(&self) -> bool {
        self.current_value == ERROR_TEXT
    }
}
