//! `n^3`

use crate::plugin::GrowthFunction;

#[derive(Debug, Default)]
pub struct CubicGrowth;

impl GrowthFunction for CubicGrowth {
    fn label(&self) -> &str {
        "n^3"
    }

    fn inverse_formula(&self) -> &str {
        "cbrt(T)"
    }

    fn evaluate(&self, n: f64) -> f64 {
        n * n * n
    }

    fn inverse(&self, budget: f64) -> f64 {
        budget.cbrt()
    }
}
