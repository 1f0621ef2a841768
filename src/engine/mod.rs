//! Arithmetic engine: stateless operator evaluation, operand validation,
//! and bounded-width display formatting.
//!
//! Everything here is pure. The engine never sees session state; the state
//! machine converts stored text to doubles at the moment of a call and
//! converts the result straight back to text.

mod error;
mod format;
mod operator;

pub use error::EngineError;
pub use format::{
    format_for_display, is_enterable_number, parse_operand, to_numeral, DISPLAY_WIDTH, ERROR_TEXT,
};
pub use operator::Operator;
