//! `n!`
//!
//! There is no closed-form inverse of the factorial, so the largest `n` is found
//! by a linear search: step `n` upward from 1 until `n!` exceeds the budget and
//! report the previous `n`. The search stops below [`SEARCH_LIMIT`]; `99!` is
//! around `9.3e155` microseconds, far past any fixed budget.

use crate::plugin::GrowthFunction;
use growth_types::MaxN;
use tracing::trace;

/// Exclusive upper bound on the searched input sizes.
pub const SEARCH_LIMIT: u32 = 100;

/// Largest `n` whose factorial is finite in `f64`.
pub const MAX_FINITE_FACTORIAL: u32 = 170;

/// `n!` as an `f64`. `0!` and `1!` are both 1; anything past
/// [`MAX_FINITE_FACTORIAL`] is `+Inf`.
pub fn factorial(n: u32) -> f64 {
    if n > MAX_FINITE_FACTORIAL {
        return f64::INFINITY;
    }
    (2..=n).fold(1.0, |acc, i| acc * f64::from(i))
}

/// Largest `n` with `n! <= budget`, or `None` when every `n` below
/// [`SEARCH_LIMIT`] still fits.
pub fn search(budget: f64) -> Option<u32> {
    let found = (1..SEARCH_LIMIT)
        .find(|&n| factorial(n) > budget)
        .map(|n| n - 1);
    trace!(budget, ?found, "factorial search finished");
    found
}

#[derive(Debug, Default)]
pub struct FactorialGrowth;

impl GrowthFunction for FactorialGrowth {
    fn label(&self) -> &str {
        "n!"
    }

    fn inverse_formula(&self) -> &str {
        "search n < 100 for n! <= T"
    }

    /// Evaluates `n!` for the integer part of `n`. Negative inputs count as 0.
    fn evaluate(&self, n: f64) -> f64 {
        // `as` saturates; anything that large is past the finite range anyway.
        factorial(n.trunc() as u32)
    }

    fn inverse(&self, budget: f64) -> f64 {
        if budget.is_nan() {
            return budget;
        }
        search(budget).map_or(f64::INFINITY, f64::from)
    }

    /// A NaN budget is reported as overflow, the same as the closed-form
    /// functions report it.
    fn max_n(&self, budget: f64) -> MaxN {
        if budget.is_nan() {
            return MaxN::Overflow;
        }
        match search(budget) {
            Some(n) => MaxN::Finite(f64::from(n)),
            None => MaxN::SearchExhausted(SEARCH_LIMIT - 1),
        }
    }
}
