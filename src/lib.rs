//! Deskcalc: the pure functional core of a four-operation calculator.
//!
//! Deskcalc splits a calculator into a pure core and a thin imperative
//! shell. The core is a stateless arithmetic engine plus a single
//! state-transition function that interprets user intents; the shell owns
//! one session state and the tape of keypresses that produced it. A
//! presentation layer feeds intents in and reads display text back - it
//! never touches arithmetic or sequencing rules itself.
//!
//! # Core Concepts
//!
//! - **Intent**: one user action (digit, operator, or command) fed into
//!   the reducer
//! - **Transition**: the pure, total function mapping (state, intent) to
//!   the next state
//! - **Tape**: immutable journal of keypresses and the display each one
//!   produced
//!
//! # Example
//!
//! ```rust
//! use deskcalc::{Calculator, Intent};
//! use deskcalc::engine::Operator;
//!
//! let mut calc = Calculator::new();
//! calc.press(Intent::Digit('2'));
//! calc.press(Intent::Operator(Operator::Add));
//! calc.press(Intent::Digit('3'));
//! calc.press(Intent::Equals);
//!
//! assert_eq!(calc.display(), "5");
//! ```
//!
//! The reducer itself is a free function, usable without the shell:
//!
//! ```rust
//! use deskcalc::{transition, CalculatorState, Intent};
//!
//! let state = CalculatorState::default();
//! let state = transition(&state, Intent::Digit('7'));
//! assert_eq!(state.current_value, "7");
//! ```

pub mod engine;
pub mod machine;

// Re-export commonly used types
pub use engine::{format_for_display, is_enterable_number, EngineError, Operator};
pub use machine::{transition, Calculator, CalculatorState, Intent, IntentError, Tape};
