use growth_calculator::{GrowthError, GrowthTableCalculator, MaxN, TIME_BUDGETS};

const FUNCTION_ORDER: [&str; 8] = [
    "lg n", "sqrt(n)", "n", "n lg n", "n^2", "n^3", "2^n", "n!",
];

#[test]
fn rows_and_columns_follow_input_order() {
    let table = GrowthTableCalculator::new().compute();

    let functions: Vec<_> = table.rows.iter().map(|r| r.function.as_str()).collect();
    assert_eq!(functions, FUNCTION_ORDER);
    assert_eq!(
        table.budgets,
        ["1 second", "1 minute", "1 hour", "1 day", "1 month", "1 year", "1 century"]
    );
    assert!(table.rows.iter().all(|r| r.max_n.len() == TIME_BUDGETS.len()));
}

#[test]
fn one_second_scenario() {
    let table = GrowthTableCalculator::new().compute();

    assert_eq!(table.cell("n", "1 second"), Some(MaxN::Finite(1_000_000.0)));
    assert_eq!(table.cell("sqrt(n)", "1 second"), Some(MaxN::Finite(1e12)));
    assert_eq!(table.cell("n^2", "1 second"), Some(MaxN::Finite(1000.0)));
    assert_eq!(table.cell("2^n", "1 second"), Some(MaxN::Finite(19.0)));
    assert_eq!(table.cell("n!", "1 second"), Some(MaxN::Finite(9.0)));
}

#[test]
fn factorial_row_matches_hand_computed_values() {
    let table = GrowthTableCalculator::new().compute();
    let row = table.row("n!").unwrap();

    let expected: Vec<_> = [9.0, 11.0, 12.0, 13.0, 15.0, 16.0, 17.0]
        .map(MaxN::Finite)
        .to_vec();
    assert_eq!(row.max_n, expected);
}

#[test]
fn factorial_never_reaches_search_limit_for_fixed_budgets() {
    let table = GrowthTableCalculator::new().compute();
    let row = table.row("n!").unwrap();

    assert!(row.max_n.iter().all(|cell| matches!(cell, MaxN::Finite(n) if *n < 100.0)));
}

#[test]
fn log_based_rows_overflow_for_every_budget() {
    let table = GrowthTableCalculator::new().compute();

    for label in ["lg n", "n lg n"] {
        let row = table.row(label).unwrap();
        assert!(row.max_n.iter().all(MaxN::is_overflow), "{label} should overflow");
    }
}

#[test]
fn other_rows_stay_finite() {
    let table = GrowthTableCalculator::new().compute();

    let finite_rows = table
        .rows
        .iter()
        .filter(|r| r.function != "lg n" && r.function != "n lg n");
    for row in finite_rows {
        assert!(
            row.max_n.iter().all(|c| c.value().is_some()),
            "{} overflowed",
            row.function
        );
    }
}

#[test]
fn single_lookup_by_label() {
    let calculator = GrowthTableCalculator::new();

    assert_eq!(calculator.max_n("n", 42.5), Ok(MaxN::Finite(42.0)));
    assert_eq!(
        calculator.max_n("n^4", 1.0),
        Err(GrowthError::UnknownFunction {
            label: "n^4".to_string(),
        })
    );
}

#[test]
fn unknown_function_error_message() {
    let err = GrowthTableCalculator::new().max_n("log log n", 1.0).unwrap_err();
    assert_eq!(err.to_string(), "growth function 'log log n' not found");
}
