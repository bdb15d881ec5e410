//! `lg n`
//!
//! The inverse `2^T` overflows `f64` for any budget above roughly 1024
//! microseconds, so every fixed budget yields `+Inf`. The overflow is reported
//! as-is rather than widened to arbitrary precision.

use crate::plugin::GrowthFunction;

#[derive(Debug, Default)]
pub struct LogarithmicGrowth;

impl GrowthFunction for LogarithmicGrowth {
    fn label(&self) -> &str {
        "lg n"
    }

    fn inverse_formula(&self) -> &str {
        "2^T"
    }

    fn evaluate(&self, n: f64) -> f64 {
        n.log2()
    }

    fn inverse(&self, budget: f64) -> f64 {
        budget.exp2()
    }
}
