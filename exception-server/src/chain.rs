//! Error chains: a root cause wrapped by zero or more message-carrying frames.
//!
//! Chains are built with [`wrap`] and flattened into a single string with
//! [`render`] (or `{}`), which is what the scenario endpoints put on the wire.
//!
//! ```
//! use exception_server::chain::{RootCause, render, wrap};
//!
//! let inner = wrap(RootCause::new("disk full"), "write failed");
//! let outer = wrap(inner.clone(), "save failed");
//! assert_eq!(render(&outer.into()), "save failed: write failed: disk full");
//! assert_eq!(inner.to_string(), "write failed: disk full");
//! ```
//!
//! The alternate form (`{:#}`) additionally lists the source location of
//! every wrap and is meant for server-side logs only.

pub mod recipes;

use std::fmt::{self, Write as _};
use std::panic::Location;
use std::sync::Arc;

/// Separator placed between rendered messages.
pub const DELIMITER: &str = ": ";

/// The innermost, unstructured error description of a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootCause(Arc<str>);

impl RootCause {
    /// Creates a root cause from its description.
    pub fn new(description: impl Into<Arc<str>>) -> Self {
        Self(description.into())
    }

    /// Returns the description.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RootCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for RootCause {}

/// One wrap: an optional message, where it was added, and what it wraps.
#[derive(Debug)]
pub struct Frame {
    message: String,
    location: &'static Location<'static>,
    inner: Cause,
}

impl Frame {
    /// The message attached at this level, or `None` if it was empty.
    ///
    /// Only the empty string counts as absent; whitespace is a message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        (!self.message.is_empty()).then_some(self.message.as_str())
    }

    /// Source location of the [`wrap`] call that created this frame.
    #[must_use]
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// What this frame wraps.
    #[must_use]
    pub const fn inner(&self) -> &Cause {
        &self.inner
    }
}

/// A chain of at least one [`Frame`] ending in a [`RootCause`].
///
/// Cloning is cheap and shares the frames; a chain is never modified once
/// built, so the same chain can be wrapped any number of times.
#[derive(Debug, Clone)]
pub struct ErrorChain(Arc<Frame>);

impl ErrorChain {
    /// The outermost frame.
    #[must_use]
    pub fn outermost(&self) -> &Frame {
        &self.0
    }

    /// Iterates frames from the outermost to the innermost.
    #[must_use]
    pub fn frames(&self) -> Frames<'_> {
        Frames { next: Some(self) }
    }

    /// The root cause at the bottom of the chain.
    #[must_use]
    pub fn root_cause(&self) -> &RootCause {
        let mut chain = self;
        loop {
            match &chain.0.inner {
                Cause::Root(root) => return root,
                Cause::Chain(inner) => chain = inner,
            }
        }
    }

    fn write_detailed(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut started = false;
        for frame in self.frames() {
            if let Some(message) = frame.message() {
                if started {
                    f.write_str("\nCaused by: ")?;
                }
                f.write_str(message)?;
                started = true;
            }
            if started {
                f.write_char('\n')?;
            }
            write!(f, " --- at {} ---", frame.location)?;
            started = true;
        }
        write!(f, "\nCaused by: {}", self.root_cause())
    }
}

impl fmt::Display for ErrorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return self.write_detailed(f);
        }
        for message in self.frames().filter_map(Frame::message) {
            f.write_str(message)?;
            f.write_str(DELIMITER)?;
        }
        f.write_str(self.root_cause().as_str())
    }
}

impl std::error::Error for ErrorChain {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(match &self.0.inner {
            Cause::Root(root) => root,
            Cause::Chain(chain) => chain,
        })
    }
}

/// Iterator over the frames of an [`ErrorChain`], outermost first.
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    next: Option<&'a ErrorChain>,
}

impl<'a> Iterator for Frames<'a> {
    type Item = &'a Frame;

    fn next(&mut self) -> Option<Self::Item> {
        let frame: &'a Frame = &self.next?.0;
        self.next = match &frame.inner {
            Cause::Chain(chain) => Some(chain),
            Cause::Root(_) => None,
        };
        Some(frame)
    }
}

/// Either a bare root cause or a wrapped chain.
#[derive(Debug, Clone)]
pub enum Cause {
    /// An error returned without any wrapping.
    Root(RootCause),
    /// An error wrapped at least once.
    Chain(ErrorChain),
}

impl Cause {
    /// The root cause at the bottom, whichever variant this is.
    #[must_use]
    pub fn root_cause(&self) -> &RootCause {
        match self {
            Self::Root(root) => root,
            Self::Chain(chain) => chain.root_cause(),
        }
    }
}

impl From<RootCause> for Cause {
    fn from(root: RootCause) -> Self {
        Self::Root(root)
    }
}

impl From<ErrorChain> for Cause {
    fn from(chain: ErrorChain) -> Self {
        Self::Chain(chain)
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root(root) => fmt::Display::fmt(root, f),
            Self::Chain(chain) => fmt::Display::fmt(chain, f),
        }
    }
}

/// Wraps `inner` in a new frame carrying `message`.
///
/// An empty `message` adds a frame without adding any text to the rendering.
/// The caller's source location is recorded on the frame.
#[track_caller]
pub fn wrap(inner: impl Into<Cause>, message: impl Into<String>) -> ErrorChain {
    ErrorChain(Arc::new(Frame {
        message: message.into(),
        location: Location::caller(),
        inner: inner.into(),
    }))
}

/// Flattens a cause into its wire string.
///
/// Non-empty messages are joined outer to inner with [`DELIMITER`], followed
/// by the root cause. When no frame carries a message the result is exactly
/// the root cause.
#[must_use]
pub fn render(cause: &Cause) -> String {
    cause.to_string()
}
