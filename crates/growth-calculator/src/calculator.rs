use crate::budgets::TIME_BUDGETS;
use crate::built_in;
use crate::error::GrowthError;
use crate::plugin::GrowthFunction;
use crate::registry::FunctionRegistry;
use growth_types::{FunctionRow, MaxN, ResultTable, TimeBudget};
use tracing::{debug, trace};

/// Evaluates every built-in growth function against every fixed time budget.
pub struct GrowthTableCalculator {
    registry: FunctionRegistry,
    budgets: &'static [TimeBudget],
}

impl Default for GrowthTableCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl GrowthTableCalculator {
    pub fn new() -> Self {
        let mut registry = FunctionRegistry::new();
        for function in built_in::all() {
            registry.register(function);
        }
        Self {
            registry,
            budgets: &TIME_BUDGETS,
        }
    }

    pub fn budgets(&self) -> &[TimeBudget] {
        self.budgets
    }

    pub fn functions(&self) -> impl Iterator<Item = &dyn GrowthFunction> {
        self.registry.iter()
    }

    /// Computes the full table. Rows follow registration order and columns
    /// follow budget order.
    pub fn compute(&self) -> ResultTable {
        let mut table = ResultTable::with_budgets(self.budgets.iter().map(|b| b.label));
        for function in self.registry.iter() {
            table.rows.push(self.compute_row(function));
        }
        debug!(
            rows = table.rows.len(),
            columns = table.budgets.len(),
            "growth table computed"
        );
        table
    }

    fn compute_row(&self, function: &dyn GrowthFunction) -> FunctionRow {
        let label = function.label();
        debug!(
            function = label,
            inverse = function.inverse_formula(),
            "computing row"
        );

        let max_n = self
            .budgets
            .iter()
            .map(|budget| {
                let cell = function.max_n(budget.microseconds);
                match cell {
                    MaxN::Overflow => debug!(
                        function = label,
                        budget = budget.label,
                        "inverse overflowed f64"
                    ),
                    _ => trace!(
                        function = label,
                        budget = budget.label,
                        %cell,
                        "cell computed"
                    ),
                }
                cell
            })
            .collect();

        FunctionRow {
            function: label.to_string(),
            max_n,
        }
    }

    /// Largest input size for one function under an arbitrary budget given in
    /// microseconds.
    pub fn max_n(&self, label: &str, budget: f64) -> Result<MaxN, GrowthError> {
        self.registry
            .get(label)
            .map(|function| function.max_n(budget))
            .ok_or_else(|| GrowthError::UnknownFunction {
                label: label.to_string(),
            })
    }
}
