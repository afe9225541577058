// ============================================================================
// Basic Usage Example
// ============================================================================

use pg_complex::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    pg_complex::utils::init_logging();

    println!("=== Complex Type Example ===\n");

    let ops = OperatorSuite::default();
    println!("Tolerance: {}\n", ops.tolerance().epsilon());

    // Parse and format
    println!("Parsing values...");
    let c = ops.parse(" ( 1.5 , -2 ) ").unwrap();
    let d = ops.make(-0.0, 4.0);
    println!("  c = {}", c);
    println!("  d = {}  (negative zero normalized)", d);

    // Arithmetic
    println!("\nArithmetic...");
    println!("  c + d  = {}", ops.add(&c, &d));
    println!("  c - d  = {}", ops.sub(&c, &d));
    println!("  c * d  = {}  (componentwise)", ops.mul(&c, &d));
    match ops.div(&c, &d) {
        Ok(q) => println!("  c / d  = {}", q),
        Err(e) => println!("  c / d failed: {}", e),
    }
    match ops.div(&c, &Complex::ZERO) {
        Ok(q) => println!("  c / 0  = {}", q),
        Err(e) => println!("  c / 0 failed: {} (SQLSTATE {})", e, e.sqlstate()),
    }
    println!("  ~c     = {}", ops.conjugate(&c));
    println!("  c <-> d = {}", ops.distance(&c, &d));

    // Predicates by symbol
    println!("\nPredicates...");
    for symbol in ["=", "<>", "<<", ">>", "<<|", "|>>"] {
        let result = ops.evaluate_symbol(symbol, &[c, d]).unwrap();
        println!("  c {:>3} d : {:?}", symbol, result);
    }

    // Binary form
    println!("\nBinary form of c: {:02x?}", encode(&c));

    // Host call surface
    println!("\nHost functions...");
    let registry = FunctionRegistry::new(ops, Arc::new(LoggingEventHandler));
    for input in ["(3, 4)", "(1,2", "(1 2)", "(1,2) x"] {
        match registry.invoke("complex_in", &[input.into()]) {
            Ok(value) => println!("  complex_in({:?}) = {:?}", input, value),
            Err(e) => println!("  complex_in({:?}) failed: {}", input, e),
        }
    }

    println!("\n=== Example Complete ===");
}
