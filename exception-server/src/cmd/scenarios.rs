//! `exception-server scenarios` command — list the served scenarios.

use std::fmt::Write as _;

use crate::scenario::ScenarioTable;

/// Formats one line per scenario: path, status and what it produces.
#[must_use]
pub fn describe(scenarios: &ScenarioTable) -> String {
    let width = scenarios
        .iter()
        .map(|scenario| scenario.path().len())
        .max()
        .unwrap_or(0);
    scenarios.iter().fold(String::new(), |mut out, scenario| {
        let _ = writeln!(
            out,
            "{:<width$}  {}  {}",
            scenario.path(),
            scenario.status().as_u16(),
            scenario.kind(),
        );
        out
    })
}

/// Execute the `scenarios` command.
#[allow(clippy::print_stdout)]
pub fn run() {
    print!("{}", describe(&ScenarioTable::standard()));
}
