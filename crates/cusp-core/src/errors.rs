//! Structured error types shared across the cusp verifier crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`CuspError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (boxcodes, words, paths, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the cusp verifier.
///
/// Every variant is a distinct failure class; the CLI maps each class to
/// its own process exit code. There is no recoverable variant: an
/// unresolved uncertainty must surface as a hard failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum CuspError {
    /// A boxcode contained a character other than '0' or '1'.
    #[error("boxcode error: {0}")]
    Boxcode(ErrorInfo),
    /// A certificate instruction was malformed or the stream ended early.
    #[error("certificate error: {0}")]
    Certificate(ErrorInfo),
    /// A predicate could not certify its inequality over the whole box.
    #[error("predicate error: {0}")]
    Predicate(ErrorInfo),
    /// A certified area computation produced a negative lower bound.
    #[error("area error: {0}")]
    Area(ErrorInfo),
    /// Hole-file stitching failed (missing, recursive, or incomplete).
    #[error("stitch error: {0}")]
    Stitch(ErrorInfo),
    /// Overflow or underflow was observed during certified arithmetic.
    #[error("arithmetic error: {0}")]
    Arithmetic(ErrorInfo),
    /// An I/O operation failed.
    #[error("io error: {0}")]
    Io(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl CuspError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            CuspError::Boxcode(info)
            | CuspError::Certificate(info)
            | CuspError::Predicate(info)
            | CuspError::Area(info)
            | CuspError::Stitch(info)
            | CuspError::Arithmetic(info)
            | CuspError::Io(info) => info,
        }
    }
}
