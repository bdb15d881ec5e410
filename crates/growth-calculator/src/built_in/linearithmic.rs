//! `n lg n`
//!
//! `n lg n` has no elementary inverse. The table uses `2^T / T`, which is an
//! approximation and not the exact inverse. Because `2^T` already overflows
//! for every fixed budget, the quotient does too.

use crate::plugin::GrowthFunction;

/// Growth function for `n lg n`.
///
/// # Inverse
/// `2^T / T`; see the module docs for why this is only approximate.
#[derive(Debug, Default)]
pub struct LinearithmicGrowth;

impl GrowthFunction for LinearithmicGrowth {
    fn label(&self) -> &str {
        "n lg n"
    }

    fn inverse_formula(&self) -> &str {
        "2^T / T"
    }

    fn evaluate(&self, n: f64) -> f64 {
        n * n.log2()
    }

    fn inverse(&self, budget: f64) -> f64 {
        budget.exp2() / budget
    }
}
