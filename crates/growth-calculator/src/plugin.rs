use growth_types::MaxN;

/// A growth function `f(n)` together with the inverse used to find the
/// largest `n` that fits in a budget.
pub trait GrowthFunction: Send + Sync {
    /// Row label, e.g. `n lg n`.
    fn label(&self) -> &str;

    /// Human-readable form of the inverse, e.g. `2^T`.
    fn inverse_formula(&self) -> &str;

    /// Evaluates `f(n)`, the running time in microseconds.
    fn evaluate(&self, n: f64) -> f64;

    /// Raw inverse for a budget of `budget` microseconds, before truncation.
    fn inverse(&self, budget: f64) -> f64;

    /// Largest input size that fits in `budget` microseconds.
    fn max_n(&self, budget: f64) -> MaxN {
        MaxN::from_raw(self.inverse(budget))
    }
}
