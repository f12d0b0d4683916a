// ============================================================================
// Basic Usage Example
// ============================================================================

use bounded_numeric::prelude::*;
use serde::Serialize;

#[derive(Serialize)]
struct Checkpoint {
    name: String,
}

impl Runnable for Checkpoint {
    type Output = ();

    fn run(self) -> Self::Output {
        tracing::info!(name = %self.name, "checkpoint reached");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Bounded Numeric Example ===\n");

    // Wraparound additions across every supported kind
    println!("Default (wrapping) additions:");
    let pairs = [
        (Operand::I8(127), Operand::I8(1)),
        (Operand::I16(32767), Operand::I16(1)),
        (Operand::I32(i32::MAX), Operand::I32(1)),
        (Operand::I64(40), Operand::I64(2)),
        (Operand::F32(0.1), Operand::F32(0.2)),
        (Operand::F64(0.1), Operand::F64(0.2)),
    ];
    for (a, b) in pairs {
        match add_operands(a, b) {
            Ok(sum) => println!("  {} + {} = {}", a, b, sum),
            Err(err) => println!("  {} + {} failed: {}", a, b, err),
        }
    }

    // Types outside the closed set
    println!("\nUnsupported kinds:");
    match add(1u64, 2u64) {
        Ok(sum) => println!("  1u64 + 2u64 = {}", sum),
        Err(err) => println!("  1u64 + 2u64 failed: {}", err),
    }

    // Strict configuration
    println!("\nStrict configuration:");
    let strict = match BoundedNumericAdder::new(AdderConfig::strict()) {
        Ok(adder) => adder,
        Err(err) => {
            eprintln!("invalid config: {}", err);
            return;
        },
    };
    println!("  127i8 + 1i8 -> {:?}", strict.add(127i8, 1i8));
    println!("  sum(1..=10) -> {:?}", strict.sum(1i32..=10));

    // Serializable action
    println!("\n=== Running Serializable Action ===");
    run_serializable(Checkpoint {
        name: "demo-finished".to_string(),
    });
}
