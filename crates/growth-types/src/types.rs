use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A named wall-clock duration, expressed in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeBudget {
    /// Column header, e.g. `1 second`.
    pub label: &'static str,
    /// Length of the budget in microseconds.
    pub microseconds: f64,
}

impl TimeBudget {
    /// Creates a budget; usable in constant tables.
    pub const fn new(label: &'static str, microseconds: f64) -> Self {
        Self {
            label,
            microseconds,
        }
    }
}

/// The largest solvable input size for one function under one budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaxN {
    /// A truncated, integer-valued result.
    Finite(f64),
    /// The closed-form inverse overflowed `f64`.
    Overflow,
    /// A bounded search ran out before the function exceeded the budget.
    /// Holds the last input size that was checked.
    SearchExhausted(u32),
}

const OVERFLOW_TEXT: &str = "+Inf";
const EXHAUSTED_PREFIX: &str = ">=";

impl MaxN {
    /// Truncates a raw inverse value toward zero. Non-finite values become
    /// [`MaxN::Overflow`].
    pub fn from_raw(raw: f64) -> Self {
        if raw.is_finite() {
            MaxN::Finite(raw.trunc())
        } else {
            MaxN::Overflow
        }
    }

    /// Returns the numeric value when the result is finite.
    pub fn value(&self) -> Option<f64> {
        match self {
            MaxN::Finite(v) => Some(*v),
            _ => None,
        }
    }

    /// True when the inverse overflowed.
    pub fn is_overflow(&self) -> bool {
        matches!(self, MaxN::Overflow)
    }
}

impl fmt::Display for MaxN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64's Display never switches to exponent notation, so very large
        // results still print as plain integers.
        match self {
            MaxN::Finite(v) => write!(f, "{v}"),
            MaxN::Overflow => f.write_str(OVERFLOW_TEXT),
            MaxN::SearchExhausted(bound) => write!(f, "{EXHAUSTED_PREFIX}{bound}"),
        }
    }
}

impl Serialize for MaxN {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MaxN::Finite(v) => serializer.serialize_f64(*v),
            other => serializer.collect_str(other),
        }
    }
}

struct MaxNVisitor;

impl Visitor<'_> for MaxNVisitor {
    type Value = MaxN;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, \"+Inf\" or \">=<bound>\"")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<MaxN, E> {
        Ok(MaxN::Finite(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<MaxN, E> {
        Ok(MaxN::Finite(v as f64))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<MaxN, E> {
        Ok(MaxN::Finite(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<MaxN, E> {
        if v == OVERFLOW_TEXT {
            return Ok(MaxN::Overflow);
        }
        v.strip_prefix(EXHAUSTED_PREFIX)
            .and_then(|bound| bound.parse().ok())
            .map(MaxN::SearchExhausted)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for MaxN {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MaxNVisitor)
    }
}

/// One table row: a growth function and its result under every budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionRow {
    /// Function label, e.g. `n lg n`.
    pub function: String,
    /// One cell per budget, in budget order.
    pub max_n: Vec<MaxN>,
}

/// The full result table. Row and column order follow the inputs it was
/// computed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    /// Column headers, one per time budget.
    pub budgets: Vec<String>,
    /// One row per growth function.
    pub rows: Vec<FunctionRow>,
}

impl ResultTable {
    /// Creates an empty table with the given column headers.
    pub fn with_budgets<I, S>(budgets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            budgets: budgets.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Looks up a row by function label.
    pub fn row(&self, function: &str) -> Option<&FunctionRow> {
        self.rows.iter().find(|r| r.function == function)
    }

    /// Looks up a single cell by function and budget label.
    pub fn cell(&self, function: &str, budget: &str) -> Option<MaxN> {
        let column = self.budgets.iter().position(|b| b == budget)?;
        self.row(function).and_then(|r| r.max_n.get(column).copied())
    }
}
