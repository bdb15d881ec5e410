#![deny(warnings)]
//! The growth function calculator.
//!
//! This crate provides the `GrowthFunction` trait, the eight built-in growth
//! functions and the `GrowthTableCalculator` that evaluates every function
//! against the fixed list of time budgets. Each algorithm is assumed to take
//! `f(n)` microseconds; a cell of the resulting table is the largest `n` that
//! fits in the budget.

pub mod budgets;
pub mod built_in;
pub mod calculator;
pub mod error;
pub mod plugin;
pub mod registry;

pub use budgets::TIME_BUDGETS;
pub use calculator::GrowthTableCalculator;
pub use error::GrowthError;
pub use growth_types::{FunctionRow, MaxN, ResultTable, TimeBudget};
pub use plugin::GrowthFunction;
pub use registry::FunctionRegistry;
