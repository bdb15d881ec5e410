//! The fixed time budgets, shortest first.

use growth_types::TimeBudget;

pub const MICROS_PER_SECOND: f64 = 1_000_000.0;
pub const MICROS_PER_MINUTE: f64 = MICROS_PER_SECOND * 60.0;
pub const MICROS_PER_HOUR: f64 = MICROS_PER_MINUTE * 60.0;
pub const MICROS_PER_DAY: f64 = MICROS_PER_HOUR * 24.0;
/// A month is taken as 30 days.
pub const MICROS_PER_MONTH: f64 = MICROS_PER_DAY * 30.0;
/// A year is taken as 365 days; leap days are ignored.
pub const MICROS_PER_YEAR: f64 = MICROS_PER_DAY * 365.0;
pub const MICROS_PER_CENTURY: f64 = MICROS_PER_YEAR * 100.0;

pub const TIME_BUDGETS: [TimeBudget; 7] = [
    TimeBudget::new("1 second", MICROS_PER_SECOND),
    TimeBudget::new("1 minute", MICROS_PER_MINUTE),
    TimeBudget::new("1 hour", MICROS_PER_HOUR),
    TimeBudget::new("1 day", MICROS_PER_DAY),
    TimeBudget::new("1 month", MICROS_PER_MONTH),
    TimeBudget::new("1 year", MICROS_PER_YEAR),
    TimeBudget::new("1 century", MICROS_PER_CENTURY),
];
