//! `sqrt(n)`

use crate::plugin::GrowthFunction;

#[derive(Debug, Default)]
pub struct SquareRootGrowth;

impl GrowthFunction for SquareRootGrowth {
    fn label(&self) -> &str {
        "sqrt(n)"
    }

    fn inverse_formula(&self) -> &str {
        "T^2"
    }

    fn evaluate(&self, n: f64) -> f64 {
        n.sqrt()
    }

    fn inverse(&self, budget: f64) -> f64 {
        budget * budget
    }
}
