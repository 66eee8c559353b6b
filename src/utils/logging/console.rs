//! Console output for the command line tool

use std::fmt::Display;

use crate::analysis::Series;
use crate::error::{NOT_AVAILABLE, QueryResult};

/// Render a query outcome, printing the sentinel text for missing values
pub fn render_result<T: Display>(result: &QueryResult<T>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(_) => NOT_AVAILABLE.to_string(),
    }
}

/// Print a query outcome on a single line
pub fn print_result<T: Display>(label: &str, result: &QueryResult<T>) {
    println!("{label}: {}", render_result(result));
}

/// Print one line per entry, or a placeholder for an empty list
pub fn print_list<T: Display>(title: &str, items: &[T]) {
    println!("{title} ({}):", items.len());
    if items.is_empty() {
        println!("  (none)");
    }
    for item in items {
        println!("  - {item}");
    }
}

/// Print a series as one row per scenario
pub fn print_series(series: &Series) {
    if series.is_empty() {
        println!("{NOT_AVAILABLE}");
        return;
    }
    for (scenario, points) in series {
        let values: Vec<String> = points
            .iter()
            .map(|point| format!("{}={}", point.year, point.value))
            .collect();
        println!("{scenario}: {}", values.join(", "));
    }
}
