//! The fixed error-chain recipes served by the scenario endpoints.
//!
//! Every recipe starts from the same root cause, [`ROOT_CAUSE`].

use super::{ErrorChain, RootCause, wrap};

/// Root cause text shared by every recipe.
pub const ROOT_CAUSE: &str = "errors.New error message";

fn root_cause() -> RootCause {
    RootCause::new(ROOT_CAUSE)
}

/// One wrap with a message.
#[must_use]
pub fn simple() -> ErrorChain {
    wrap(root_cause(), "simpleError error message")
}

/// [`simple`] wrapped again with a second message.
#[must_use]
pub fn nested() -> ErrorChain {
    wrap(simple(), "outerError error message")
}

fn no_message() -> ErrorChain {
    wrap(root_cause(), "")
}

/// Two wraps, neither adding a message.
#[must_use]
pub fn nested_no_message() -> ErrorChain {
    wrap(no_message(), "")
}

/// Something that fails through a method rather than a free function.
pub trait InterfaceError {
    /// Produces the implementor's error chain.
    fn interface_error(&self) -> ErrorChain;
}

/// The single [`InterfaceError`] implementor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestInterface(String);

impl TestInterface {
    /// Creates a test interface value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The wrapped value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl InterfaceError for TestInterface {
    fn interface_error(&self) -> ErrorChain {
        wrap(root_cause(), "interface method error")
    }
}

/// The method's chain, wrapped once more at the call site without a message.
#[must_use]
pub fn interface_function() -> ErrorChain {
    wrap(TestInterface::new("foo").interface_error(), "")
}

/// The root cause itself, never wrapped.
#[must_use]
pub fn native() -> RootCause {
    root_cause()
}
