//! Shared fixtures for Siamese benchmarks.

#![forbid(unsafe_code)]

use siamese_core::Order;
use siamese_engine::{Generator, GeneratorConfig, MagicSquare, StepRule};

/// Orders exercised by the benchmarks.
pub const BENCH_ORDERS: [usize; 3] = [9, 101, 501];

/// Build the order `n`, which must be odd.
pub fn order(n: usize) -> Order {
    Order::new(n).expect("benchmark orders are odd")
}

/// Generate a square with the given rule.
pub fn square(n: usize, rule: StepRule) -> MagicSquare {
    Generator::run(order(n), GeneratorConfig::new(rule)).expect("generation succeeds for odd n")
}
