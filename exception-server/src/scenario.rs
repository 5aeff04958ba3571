//! The static table of scenarios served by the exception server.
//!
//! A [`Scenario`] pairs a request path with what it produces and the status it
//! answers with. [`ScenarioTable::standard`] is the catalogue HTTP clients are
//! tested against:
//!
//! | Path                                | Outcome                          | Status |
//! |-------------------------------------|----------------------------------|--------|
//! | `/ok`                               | `"hello, world!"`                | 200    |
//! | `/simpleStackTraceError`            | [`recipes::simple`]              | 500    |
//! | `/nestedStackTraceError`            | [`recipes::nested`]              | 500    |
//! | `/nestedNoMessageStackTraceError`   | [`recipes::nested_no_message`]   | 500    |
//! | `/interfaceFunctionStackTraceError` | [`recipes::interface_function`]  | 500    |
//! | `/nativeError`                      | [`recipes::native`]              | 500    |
//! | `/panic`                            | panics                           | n/a    |

use std::collections::HashSet;
use std::fmt;

use axum::http::StatusCode;
use serde_json::Value;

use crate::chain::{Cause, recipes, render};
use crate::error::Error;

/// Message carried by the `/panic` scenario's fault.
pub const PANIC_MESSAGE: &str = "panicking in the server";

/// What a scenario produces when requested.
#[derive(Clone)]
pub enum ScenarioKind {
    /// A literal value, encoded as-is.
    Literal(Value),
    /// An error chain built fresh on every request.
    Chain(fn() -> Cause),
    /// A panic with the given message.
    Fault(&'static str),
}

impl fmt::Debug for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Chain(_) => f.write_str("Chain"),
            Self::Fault(message) => f.debug_tuple("Fault").field(message).finish(),
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "literal {value}"),
            Self::Chain(recipe) => write!(f, "error chain {:?}", render(&recipe())),
            Self::Fault(message) => write!(f, "panic {message:?}"),
        }
    }
}

/// Resolved result of a non-fault scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A success payload.
    Success(Value),
    /// A rendered error chain.
    Failure(String),
}

/// A path, what it produces, and the status it answers with.
#[derive(Debug, Clone)]
pub struct Scenario {
    path: &'static str,
    kind: ScenarioKind,
    status: StatusCode,
}

impl Scenario {
    /// Creates a scenario.
    #[must_use]
    pub const fn new(path: &'static str, kind: ScenarioKind, status: StatusCode) -> Self {
        Self { path, kind, status }
    }

    /// A literal success answered with `200 OK`.
    #[must_use]
    pub fn literal(path: &'static str, value: impl Into<Value>) -> Self {
        Self::new(path, ScenarioKind::Literal(value.into()), StatusCode::OK)
    }

    /// An error chain answered with `500 Internal Server Error`.
    #[must_use]
    pub const fn chain(path: &'static str, recipe: fn() -> Cause) -> Self {
        Self::new(
            path,
            ScenarioKind::Chain(recipe),
            StatusCode::INTERNAL_SERVER_ERROR,
        )
    }

    /// A scenario that panics while handling the request.
    #[must_use]
    pub const fn fault(path: &'static str, message: &'static str) -> Self {
        Self::new(
            path,
            ScenarioKind::Fault(message),
            StatusCode::INTERNAL_SERVER_ERROR,
        )
    }

    /// The request path this scenario answers.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// What this scenario produces.
    #[must_use]
    pub const fn kind(&self) -> &ScenarioKind {
        &self.kind
    }

    /// The status this scenario answers with.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Produces this scenario's outcome.
    ///
    /// Error chains are built and rendered here; only the rendered string
    /// leaves this function.
    ///
    /// # Panics
    ///
    /// Panics with the configured message for [`ScenarioKind::Fault`].
    /// Recovering from it is left to the surrounding middleware.
    #[must_use]
    #[allow(clippy::panic)]
    pub fn resolve(&self) -> Outcome {
        match &self.kind {
            ScenarioKind::Literal(value) => Outcome::Success(value.clone()),
            ScenarioKind::Chain(recipe) => {
                let cause = recipe();
                #[cfg(feature = "telemetry")]
                tracing::debug!(path = self.path, "error chain built:\n{cause:#}");
                Outcome::Failure(render(&cause))
            }
            ScenarioKind::Fault(message) => panic!("{message}"),
        }
    }
}

/// Immutable set of scenarios keyed by path.
#[derive(Debug, Clone)]
pub struct ScenarioTable {
    scenarios: Vec<Scenario>,
}

impl ScenarioTable {
    /// Builds a table from `scenarios`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Scenario`] if a path does not start with `/` or
    /// appears more than once.
    pub fn new(scenarios: Vec<Scenario>) -> Result<Self, Error> {
        let mut seen = HashSet::with_capacity(scenarios.len());
        for scenario in &scenarios {
            if !scenario.path.starts_with('/') {
                return Err(Error::Scenario(format!(
                    "path '{}' must start with '/'",
                    scenario.path
                )));
            }
            if !seen.insert(scenario.path) {
                return Err(Error::Scenario(format!(
                    "path '{}' is registered twice",
                    scenario.path
                )));
            }
        }
        Ok(Self { scenarios })
    }

    /// The catalogue of error shapes HTTP clients are tested against.
    ///
    /// # Panics
    ///
    /// Panics if the built-in catalogue fails the checks of
    /// [`ScenarioTable::new`].
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn standard() -> Self {
        Self::new(vec![
            Scenario::literal("/ok", "hello, world!"),
            Scenario::chain("/simpleStackTraceError", || recipes::simple().into()),
            Scenario::chain("/nestedStackTraceError", || recipes::nested().into()),
            Scenario::chain("/nestedNoMessageStackTraceError", || {
                recipes::nested_no_message().into()
            }),
            Scenario::chain("/interfaceFunctionStackTraceError", || {
                recipes::interface_function().into()
            }),
            Scenario::chain("/nativeError", || recipes::native().into()),
            Scenario::fault("/panic", PANIC_MESSAGE),
        ])
        .expect("standard scenario paths are absolute and unique")
    }

    /// Looks up the scenario registered for `path`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|scenario| scenario.path == path)
    }

    /// Iterates scenarios in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    /// Number of scenarios.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the table has no scenarios.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl<'a> IntoIterator for &'a ScenarioTable {
    type Item = &'a Scenario;
    type IntoIter = std::slice::Iter<'a, Scenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.scenarios.iter()
    }
}

impl Default for ScenarioTable {
    fn default() -> Self {
        Self::standard()
    }
}
