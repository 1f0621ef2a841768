//! User intents and key parsing.

use crate::engine::Operator;
use crate::machine::error::IntentError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One user action fed into the state machine.
///
/// Intents are what the presentation layer produces from button presses;
/// the reducer interprets them against the current state. A `Digit`
/// carrying a non-digit character is ignored by the reducer, keeping the
/// transition function total.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    /// A digit key, `'0'` through `'9'`.
    Digit(char),
    /// The decimal point key.
    Decimal,
    /// One of the four binary operator keys.
    Operator(Operator),
    /// The evaluate key.
    Equals,
    /// Reset the session to its default state.
    Clear,
    /// Drop the last entered character.
    Backspace,
    /// Divide the current value by one hundred.
    Percent,
    /// Negate the current value.
    ToggleSign,
}

impl Intent {
    /// Map a single keystroke to its intent, or `None` for characters no
    /// keypad produces.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '0'..='9' => Some(Self::Digit(key)),
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            '%' => Some(Self::Percent),
            '±' => Some(Self::ToggleSign),
            'c' | 'C' => Some(Self::Clear),
            '<' => Some(Self::Backspace),
            other => Operator::try_from(other).ok().map(Self::Operator),
        }
    }

    /// Tokenize a compact keystroke script into intents.
    ///
    /// Whitespace is ignored; any other unrecognized character fails and
    /// nothing is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deskcalc::machine::Intent;
    /// use deskcalc::engine::Operator;
    ///
    /// let intents = Intent::parse_script("1 + 2 =").unwrap();
    /// assert_eq!(
    ///     intents,
    ///     vec![
    ///         Intent::Digit('1'),
    ///         Intent::Operator(Operator::Add),
    ///         Intent::Digit('2'),
    ///         Intent::Equals,
    ///     ]
    /// );
    /// ```
    pub fn parse_script(script: &str) -> Result<Vec<Self>, IntentError> {
        script
            .chars()
            .filter(|key| !key.is_whitespace())
            .map(|key| {
                Self::from_key(key).ok_or_else(|| IntentError::UnrecognizedKey(key.to_string()))
            })
            .collect()
    }
}

impl FromStr for Intent {
    type Err = IntentError;

    /// Parse a button action string: single-character keys (`"7"`, `"."`,
    /// `"+"`, `"="`) and the named commands `"clear"`, `"backspace"`,
    /// `"percent"`/`"percentage"`, `"sign"`/`"negate"`.
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let mut chars = key.chars();
        if let (Some(single), None) = (chars.next(), chars.next()) {
            if let Some(intent) = Self::from_key(single) {
                return Ok(intent);
            }
        }
        match key {
            "clear" => Ok(Self::Clear),
            "backspace" => Ok(Self::Backspace),
            "percent" | "percentage" => Ok(Self::Percent),
            "sign" | "negate" => Ok(Self::ToggleSign),
            _ => Err(IntentError::UnrecognizedKey(key.to_string())),
        }
    }
}
