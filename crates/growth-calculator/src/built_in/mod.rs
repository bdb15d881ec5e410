//! Built-in growth functions, listed in table order.

// Sub-linear
pub mod logarithmic;
pub mod square_root;

// Polynomial
pub mod cubic;
pub mod linear;
pub mod linearithmic;
pub mod quadratic;

// Super-polynomial
pub mod exponential;
pub mod factorial;

use crate::plugin::GrowthFunction;

/// Every built-in function, boxed, in the order rows appear in the table.
pub fn all() -> Vec<Box<dyn GrowthFunction>> {
    vec![
        Box::new(logarithmic::LogarithmicGrowth),
        Box::new(square_root::SquareRootGrowth),
        Box::new(linear::LinearGrowth),
        Box::new(linearithmic::LinearithmicGrowth),
        Box::new(quadratic::QuadraticGrowth),
        Box::new(cubic::CubicGrowth),
        Box::new(exponential::ExponentialGrowth),
        Box::new(factorial::FactorialGrowth),
    ]
}
