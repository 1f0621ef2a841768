//! Basic Session
//!
//! Walks a calculator session through digit entry, operator chaining,
//! and the pending-expression view.
//!
//! Key concepts:
//! - The reducer is pure - the shell replaces its state on every press
//! - Chained operators resolve eagerly, left to right
//! - The tape journals every keypress and the display it produced
//!
//! Run with: cargo run --example basic_session

use deskcalc::{Calculator, Intent};

fn main() {
    println!("=== Basic Calculator Session ===\n");

    let mut calc = Calculator::new();

    for key in ["1", "2", "+", "3", "4", "*", "2"] {
        let intent: Intent = key.parse().expect("keypad keys always parse");
        calc.press(intent);
        println!(
            "[{key}]  display: {:>12}   expression: {}",
            calc.display(),
            calc.expression()
        );
    }

    calc.press(Intent::Equals);
    println!("[=]  display: {:>12}", calc.display());

    println!("\nKeys pressed: {}", calc.tape().len());
    if let Some(elapsed) = calc.tape().duration() {
        println!("Session took {elapsed:?}");
    }

    println!("\n=== Session Complete ===");
}
