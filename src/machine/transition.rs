//! The state-transition reducer.
//!
//! `transition` is the single entry point of the machine: pure and total.
//! Engine failures at resolution time never escape; they downgrade to the
//! visible error state, which any clearing or fresh-entry intent recovers
//! from.

use crate::engine::{parse_operand, to_numeral, EngineError, Operator, ERROR_TEXT};
use crate::machine::state::{CalculatorState, Pending};
use crate::machine::Intent;

/// Apply one intent to the session state, producing the next state.
///
/// # Example
///
/// ```rust
/// use deskcalc::machine::{transition, CalculatorState, Intent};
/// use deskcalc::engine::Operator;
///
/// let state = CalculatorState::default();
/// let state = transition(&state, Intent::Digit('2'));
/// let state = transition(&state, Intent::Operator(Operator::Add));
/// let state = transition(&state, Intent::Digit('3'));
/// let state = transition(&state, Intent::Equals);
///
/// assert_eq!(state.current_value, "5");
/// assert!(state.pending.is_none());
/// ```
pub fn transition(state: &CalculatorState, intent: Intent) -> CalculatorState {
    match intent {
        Intent::Digit(digit) if digit.is_ascii_digit() => input_digit(state, digit),
        Intent::Decimal => input_decimal(state),
        Intent::Operator(op) => input_operator(state, op),
        Intent::Equals => evaluate(state),
        Intent::Clear => CalculatorState::default(),
        Intent::Backspace => backspace(state),
        Intent::Percent => percent(state),
        Intent::ToggleSign => toggle_sign(state),
        // A Digit carrying anything but '0'..='9' is not a key the keypad
        // produces; leave the state untouched.
        Intent::Digit(_) => state.clone(),
    }
}

fn input_digit(state: &CalculatorState, digit: char) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_value: digit.to_string(),
            overwrite: false,
            ..state.clone()
        };
    }

    // Suppress redundant leading zeros.
    if state.current_value == "0" && digit == '0' {
        return state.clone();
    }

    // Replace a lone leading zero instead of appending to it.
    if state.current_value == "0" {
        return CalculatorState {
            current_value: digit.to_string(),
            ..state.clone()
        };
    }

    let mut current_value = state.current_value.clone();
    current_value.push(digit);
    CalculatorState {
        current_value,
        ..state.clone()
    }
}

fn input_decimal(state: &CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_value: "0.".to_string(),
            overwrite: false,
            ..state.clone()
        };
    }

    if state.current_value.contains('.') {
        return state.clone();
    }

    let mut current_value = state.current_value.clone();
    current_value.push('.');
    CalculatorState {
        current_value,
        ..state.clone()
    }
}

fn input_operator(state: &CalculatorState, op: Operator) -> CalculatorState {
    // A right-hand operand is mid-entry with an operation already latched:
    // resolve the pending pair first (left to right, no precedence), then
    // latch the new operator onto the result.
    if let (Some(pending), false) = (&state.pending, state.overwrite) {
        return match resolve(pending, &state.current_value) {
            Ok(result) => {
                let text = to_numeral(result);
                CalculatorState {
                    current_value: text.clone(),
                    pending: Some(Pending { value: text, op }),
                    overwrite: true,
                }
            }
            Err(_) => error_state(),
        };
    }

    // No resolvable pair: latch the operator, replacing any pending one.
    CalculatorState {
        current_value: state.current_value.clone(),
        pending: Some(Pending {
            value: state.current_value.clone(),
            op,
        }),
        overwrite: true,
    }
}

fn evaluate(state: &CalculatorState) -> CalculatorState {
    let Some(pending) = &state.pending else {
        return state.clone();
    };

    match resolve(pending, &state.current_value) {
        Ok(result) => CalculatorState {
            current_value: to_numeral(result),
            pending: None,
            overwrite: true,
        },
        Err(_) => error_state(),
    }
}

fn backspace(state: &CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_value: "0".to_string(),
            overwrite: false,
            ..state.clone()
        };
    }

    if state.current_value.len() <= 1 {
        return CalculatorState {
            current_value: "0".to_string(),
            ..state.clone()
        };
    }

    let mut current_value = state.current_value.clone();
    current_value.pop();
    // Popping "-1" would strand a bare sign; fold it back to zero.
    if current_value == "-" {
        current_value = "0".to_string();
    }
    CalculatorState {
        current_value,
        ..state.clone()
    }
}

fn percent(state: &CalculatorState) -> CalculatorState {
    match state.current_value.parse::<f64>() {
        Ok(value) => CalculatorState {
            current_value: to_numeral(value / 100.0),
            ..state.clone()
        },
        Err(_) => state.clone(),
    }
}

fn toggle_sign(state: &CalculatorState) -> CalculatorState {
    if state.current_value == "0" {
        return state.clone();
    }

    match state.current_value.parse::<f64>() {
        Ok(value) => CalculatorState {
            current_value: to_numeral(-value),
            ..state.clone()
        },
        Err(_) => state.clone(),
    }
}

fn resolve(pending: &Pending, current: &str) -> Result<f64, EngineError> {
    let left = parse_operand(&pending.value)?;
    let right = parse_operand(current)?;
    pending.op.apply(left, right)
}

fn error_state() -> CalculatorState {
    CalculatorState {
        current_value: ERROR_TEXT.to_string(),
        pending: None,
        overwrite: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(keys: &str) -> CalculatorState {
        let mut state = CalculatorState::default();
        for intent in Intent::parse_script(keys).unwrap() {
            state = transition(&state, intent);
        }
        state
    }

    #[test]
    fn two_plus_three_equals_five() {
        let state = run("2+3=");
        assert_eq!(state.current_value, "5");
        assert!(state.pending.is_none());
        assert!(state.overwrite);
    }

    #[test]
    fn division_by_zero_shows_error() {
        let state = run("5/0=");
        assert_eq!(state.current_value, "Error");
        assert!(state.pending.is_none());
        assert!(state.overwrite);
    }

    #[test]
    fn chained_operators_resolve_left_to_right() {
        assert_eq!(run("1+2+3=").current_value, "6");
        // 2 + 3 * 4 evaluates as (2 + 3) * 4, not 2 + 12.
        assert_eq!(run("2+3*4=").current_value, "20");
    }

    #[test]
    fn chaining_resolves_eagerly_on_the_second_operator() {
        let state = run("2+3*");
        assert_eq!(state.current_value, "5");
        assert_eq!(state.expression(), "5 *");
        assert!(state.overwrite);
    }

    #[test]
    fn leading_zeros_are_suppressed() {
        assert_eq!(run("005").current_value, "5");
        assert_eq!(run("00").current_value, "0");
    }

    #[test]
    fn digits_append_to_the_current_value() {
        assert_eq!(run("12").current_value, "12");
        assert_eq!(run("120").current_value, "120");
    }

    #[test]
    fn decimal_starts_from_zero() {
        assert_eq!(run("0.5").current_value, "0.5");
        assert_eq!(run(".").current_value, "0.");
    }

    #[test]
    fn second_decimal_point_is_ignored() {
        assert_eq!(run("1.2.3").current_value, "1.23");
    }

    #[test]
    fn decimal_after_operator_starts_a_fresh_entry() {
        let state = run("7+.");
        assert_eq!(state.current_value, "0.");
        assert_eq!(state.expression(), "7 +");
    }

    #[test]
    fn digit_after_operator_replaces_the_display() {
        let state = run("7+3");
        assert_eq!(state.current_value, "3");
        assert_eq!(state.expression(), "7 +");
        assert!(!state.overwrite);
    }

    #[test]
    fn operator_without_second_operand_is_replaced() {
        // No implicit resolution when the right operand is missing.
        assert_eq!(run("2+-3=").current_value, "-1");
    }

    #[test]
    fn equals_without_pending_operation_is_a_noop() {
        let state = run("42=");
        assert_eq!(state.current_value, "42");
        assert!(!state.overwrite);
    }

    #[test]
    fn clear_resets_to_the_default_state() {
        assert_eq!(run("12+34c"), CalculatorState::default());
    }

    #[test]
    fn backspace_drops_the_last_character() {
        assert_eq!(run("12<").current_value, "1");
    }

    #[test]
    fn backspace_never_leaves_the_display_empty() {
        assert_eq!(run("12<<").current_value, "0");
        assert_eq!(run("12<<<").current_value, "0");
        assert_eq!(run("<").current_value, "0");
    }

    #[test]
    fn backspace_after_a_result_starts_a_fresh_entry() {
        let state = run("2+3=<");
        assert_eq!(state.current_value, "0");
        assert!(!state.overwrite);
    }

    #[test]
    fn backspace_folds_a_stranded_sign_to_zero() {
        assert_eq!(run("12±<<").current_value, "0");
    }

    #[test]
    fn percent_divides_by_one_hundred() {
        assert_eq!(run("5%").current_value, "0.05");
        assert_eq!(run("150%").current_value, "1.5");
    }

    #[test]
    fn percent_on_the_error_marker_is_a_noop() {
        let state = run("5/0=%");
        assert_eq!(state.current_value, "Error");
    }

    #[test]
    fn toggle_sign_negates_the_current_value() {
        assert_eq!(run("5±").current_value, "-5");
        assert_eq!(run("5±±").current_value, "5");
    }

    #[test]
    fn toggle_sign_on_zero_is_a_noop() {
        assert_eq!(run("0±").current_value, "0");
    }

    #[test]
    fn toggle_sign_never_shows_negative_zero() {
        assert_eq!(run("0.0±").current_value, "0");
    }

    #[test]
    fn fresh_digit_recovers_from_the_error_state() {
        let state = run("5/0=7");
        assert_eq!(state.current_value, "7");
        assert!(state.pending.is_none());
        assert!(!state.overwrite);
    }

    #[test]
    fn digit_after_a_result_starts_a_fresh_entry() {
        let state = run("2+3=7");
        assert_eq!(state.current_value, "7");
        assert!(state.pending.is_none());
    }

    #[test]
    fn pending_operation_survives_digit_entry() {
        let state = run("8*12");
        assert_eq!(state.expression(), "8 *");
        assert_eq!(state.current_value, "12");
    }

    #[test]
    fn resolving_through_the_error_marker_stays_an_error() {
        // An operator latched on the error marker cannot resolve; the
        // machine lands back in the error state instead of storing NaN.
        let state = run("5/0=+3=");
        assert_eq!(state.current_value, "Error");
        assert!(state.pending.is_none());
    }

    #[test]
    fn fractional_arithmetic_keeps_raw_double_results() {
        assert_eq!(run("1/3=").current_value, (1.0f64 / 3.0).to_string());
    }

    #[test]
    fn non_digit_payloads_are_ignored() {
        let state = CalculatorState::default();
        assert_eq!(transition(&state, Intent::Digit('x')), state);
    }
}
