use clap::Parser;
use growth_table::cli::Cli;

const FUNCTION_ORDER: [&str; 8] = [
    "lg n", "sqrt(n)", "n", "n lg n", "n^2", "n^3", "2^n", "n!",
];

fn run_with(args: &[&str]) -> String {
    let argv = std::iter::once("growth-table").chain(args.iter().copied());
    let cli = Cli::try_parse_from(argv).unwrap();
    let mut out = Vec::new();
    growth_table::run(&cli, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Whitespace-separated tokens of a row, with column separators dropped.
fn tokens(line: &str) -> Vec<&str> {
    line.split(|c: char| c.is_whitespace() || c == '|')
        .filter(|s| !s.is_empty())
        .collect()
}

/// First of the seven value cells in a tokenized row.
fn first_cell<'a>(row: &[&'a str]) -> &'a str {
    row[row.len() - 7]
}

/// Row label, rebuilt from the tokens in front of the seven value cells.
fn row_label(line: &str) -> String {
    let row = tokens(line);
    row[..row.len() - 7].join(" ")
}

#[test]
fn default_invocation_prints_aligned_table() {
    let text = run_with(&[]);
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 9);
    let header: Vec<_> = lines[0]
        .split("   ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    assert_eq!(
        header,
        ["1 second", "1 minute", "1 hour", "1 day", "1 month", "1 year", "1 century"]
    );
}

#[test]
fn every_text_layout_lists_functions_in_order() {
    // (style, lines before the first function row)
    for (style, preamble) in [("aligned", 1), ("printf", 1), ("columns", 2)] {
        let text = run_with(&["--style", style]);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), preamble + FUNCTION_ORDER.len(), "style {style}");

        let labels: Vec<_> = lines[preamble..].iter().map(|l| row_label(l)).collect();
        assert_eq!(labels, FUNCTION_ORDER, "style {style}");
    }
}

#[test]
fn columns_layout_has_rule_under_header() {
    let text = run_with(&["--style", "columns"]);
    let rule = text.lines().nth(1).unwrap();
    assert!(rule.chars().all(|c| c == '-' || c == '+'));
}

#[test]
fn one_second_column_values() {
    let text = run_with(&["--style", "printf"]);
    let cells: Vec<Vec<&str>> = text.lines().skip(1).map(tokens).collect();

    assert_eq!(first_cell(&cells[0]), "+Inf");
    assert_eq!(first_cell(&cells[1]), "1000000000000");
    assert_eq!(first_cell(&cells[2]), "1000000");
    assert_eq!(first_cell(&cells[3]), "+Inf");
    assert_eq!(first_cell(&cells[4]), "1000");
    assert_eq!(first_cell(&cells[6]), "19");
    assert_eq!(first_cell(&cells[7]), "9");
}

#[test]
fn factorial_row_in_every_layout() {
    for style in ["aligned", "printf", "columns"] {
        let text = run_with(&["--style", style]);
        let last = text.lines().last().unwrap();
        assert_eq!(
            tokens(last),
            ["n!", "9", "11", "12", "13", "15", "16", "17"],
            "style {style}"
        );
    }
}

#[test]
fn json_layout_parses() {
    let text = run_with(&["table", "--style", "json"]);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["budgets"].as_array().unwrap().len(), 7);
    assert_eq!(value["rows"].as_array().unwrap().len(), 8);
    assert_eq!(value["rows"][2]["function"], "n");
    assert_eq!(value["rows"][2]["max_n"][0], 1_000_000.0);
    assert_eq!(value["rows"][0]["max_n"][6], "+Inf");
}

#[test]
fn inverses_listing() {
    let text = run_with(&["inverses"]);
    assert!(text.lines().next().unwrap().starts_with("f(n)"));
    assert!(text.contains("2^T / T"));
    assert_eq!(text.lines().count(), 10);
}
