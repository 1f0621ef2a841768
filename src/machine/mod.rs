//! Calculator state machine: session state, user intents, the pure
//! transition function, and the imperative shell around them.
//!
//! All transition logic is pure (state in, state out, no side effects);
//! the only impure point in the module is the session shell's tape
//! timestamping.

mod error;
mod intent;
mod session;
mod state;
mod tape;
mod transition;

pub use error::{IntentError, TapeError};
pub use intent::Intent;
pub use session::Calculator;
pub use state::{CalculatorState, Pending};
pub use tape::{Tape, TapeEntry};
pub use transition::transition;
