//! Error Recovery
//!
//! Shows the division-by-zero error state and how fresh entry recovers
//! from it without a clear.
//!
//! Run with: cargo run --example error_recovery

use deskcalc::Calculator;

fn main() {
    println!("=== Error Recovery ===\n");

    let mut calc = Calculator::new();

    calc.press_keys("5/0=").expect("script parses");
    println!("5 / 0 =    -> {}", calc.display());

    // No clear needed: the error state permits fresh entry.
    calc.press_keys("12%").expect("script parses");
    println!("1 2 %      -> {}", calc.display());

    calc.press_keys("c8*4=").expect("script parses");
    println!("C 8 * 4 =  -> {}", calc.display());

    let journal = calc.tape().to_json().expect("tape serializes");
    println!("\nTape: {journal}");

    println!("\n=== Complete ===");
}
