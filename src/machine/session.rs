//! Imperative shell owning one calculator session.

use crate::machine::error::IntentError;
use crate::machine::tape::{Tape, TapeEntry};
use crate::machine::transition::transition;
use crate::machine::{CalculatorState, Intent};
use chrono::Utc;

/// A calculator session: one state plus the tape of keypresses that
/// produced it.
///
/// The shell is the only mutable surface of the crate. Each keypress runs
/// the pure reducer and replaces the state wholesale; the previous state
/// is never partially mutated or aliased.
///
/// # Example
///
/// ```rust
/// use deskcalc::{Calculator, Intent};
/// use deskcalc::engine::Operator;
///
/// let mut calc = Calculator::new();
/// calc.press(Intent::Digit('2'));
/// calc.press(Intent::Operator(Operator::Add));
/// calc.press(Intent::Digit('3'));
/// calc.press(Intent::Equals);
///
/// assert_eq!(calc.display(), "5");
/// assert_eq!(calc.tape().len(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
    tape: Tape,
}

impl Calculator {
    /// Create a session in the default state with an empty tape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one intent, recording it on the tape.
    pub fn press(&mut self, intent: Intent) -> &CalculatorState {
        self.state = transition(&self.state, intent);
        self.tape = self.tape.record(TapeEntry {
            intent,
            display: self.state.display(),
            timestamp: Utc::now(),
        });
        &self.state
    }

    /// Parse a keystroke script and press each key in order.
    ///
    /// Fails without touching the state if any key is unrecognized.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deskcalc::Calculator;
    ///
    /// let mut calc = Calculator::new();
    /// calc.press_keys("12+34=").unwrap();
    /// assert_eq!(calc.display(), "46");
    /// ```
    pub fn press_keys(&mut self, script: &str) -> Result<&CalculatorState, IntentError> {
        let intents = Intent::parse_script(script)?;
        for intent in intents {
            self.press(intent);
        }
        Ok(&self.state)
    }

    /// The current session state.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Bounded display text for the current value.
    pub fn display(&self) -> String {
        self.state.display()
    }

    /// Pending-expression text, empty when no operation is pending.
    pub fn expression(&self) -> String {
        self.state.expression()
    }

    /// The keystroke tape.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }
}
