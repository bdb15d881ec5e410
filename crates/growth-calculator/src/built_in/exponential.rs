//! `2^n`

use crate::plugin::GrowthFunction;

#[derive(Debug, Default)]
pub struct ExponentialGrowth;

impl GrowthFunction for ExponentialGrowth {
    fn label(&self) -> &str {
        "2^n"
    }

    fn inverse_formula(&self) -> &str {
        "lg T"
    }

    fn evaluate(&self, n: f64) -> f64 {
        n.exp2()
    }

    fn inverse(&self, budget: f64) -> f64 {
        budget.log2()
    }
}
