//! `n`

use crate::plugin::GrowthFunction;

#[derive(Debug, Default)]
pub struct LinearGrowth;

impl GrowthFunction for LinearGrowth {
    fn label(&self) -> &str {
        "n"
    }

    fn inverse_formula(&self) -> &str {
        "T"
    }

    fn evaluate(&self, n: f64) -> f64 {
        n
    }

    fn inverse(&self, budget: f64) -> f64 {
        budget
    }
}
