//! Failure message formatting.
//!
//! A [`Diagnostic`] collects the pieces of one failure report and renders
//! them into the final string handed to the failure sink. Rendering is pure
//! and happens exactly once per failed check.
//!
//! Messages come out in one of these shapes:
//!
//! ```text
//! [file:line] assertion message
//!
//! [file:line]
//! test message
//! assertion message
//!
//! [file:line]
//! long
//!     assertion
//! message
//!
//! [file:line]
//! test message
//! long
//!     assertion
//! message
//! ```
//!
//! Short single-line diagnostics stay compact on the prefix line; anything
//! with a caller-supplied message or a multi-line payload (equality dumps,
//! containment dumps) moves to the expanded form.

/// One failure report, assembled by a terminal check and rendered once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    prefix: String,
    test_message: Option<String>,
    body: String,
    multiline: bool,
}

impl Diagnostic {
    /// Create a diagnostic with the `[file:line]` prefix and assertion body.
    #[must_use]
    pub fn new(prefix: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            test_message: None,
            body: body.into(),
            multiline: false,
        }
    }

    /// Attach the optional caller-supplied test message.
    #[must_use]
    pub fn test_message(mut self, message: Option<String>) -> Self {
        self.test_message = message;
        self
    }

    /// Flag the assertion body as multi-line, forcing the expanded form.
    #[must_use]
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// Render the final diagnostic string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self.prefix.clone();

        // No caller message and a single-line body: short form.
        if self.test_message.is_none() && !self.multiline {
            out.push(' ');
            out.push_str(&self.body);
            return out;
        }

        if let Some(test_message) = &self.test_message {
            out.push('\n');
            out.push_str(test_message);
        }

        out.push('\n');
        out.push_str(&self.body);
        out
    }
}
