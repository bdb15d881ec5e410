//! `n^2`

use crate::plugin::GrowthFunction;

#[derive(Debug, Default)]
pub struct QuadraticGrowth;

impl GrowthFunction for QuadraticGrowth {
    fn label(&self) -> &str {
        "n^2"
    }

    fn inverse_formula(&self) -> &str {
        "sqrt(T)"
    }

    fn evaluate(&self, n: f64) -> f64 {
        n * n
    }

    fn inverse(&self, budget: f64) -> f64 {
        budget.sqrt()
    }
}
