// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Error types for extjs-component

use thiserror::Error;

/// Result type alias for extjs-component operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when resolving or calling into components
#[derive(Debug, Error)]
pub enum Error {
    /// A page-side script threw, or referenced a component that does not exist
    ///
    /// Raised by the unsafe tier (`call`, `element`, `children`). Carries the
    /// evaluated script so the failing query can be read off the error.
    #[error("Evaluation failed: {message}\nScript: {script}")]
    Evaluation { script: String, message: String },

    /// Driver/session failure (disconnected session, closed page, transport error)
    #[error("Driver error: {0}")]
    Driver(String),

    /// Script evaluation exceeded the driver's timeout
    #[error("Timeout: {0}")]
    Timeout(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument provided to method
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The page returned a value of the wrong shape
    #[error("Unexpected result: {0}")]
    UnexpectedResult(String),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }

    /// Creates an evaluation error for `script`
    pub fn evaluation(script: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Evaluation {
            script: script.into(),
            message: message.into(),
        }
    }

    /// Returns true if a page-side script failure caused this error,
    /// looking through any context wrappers.
    pub fn is_evaluation(&self) -> bool {
        match self {
            Error::Evaluation { .. } => true,
            Error::Context(_, inner) => inner.is_evaluation(),
            _ => false,
        }
    }

    /// Returns true if the driver itself failed (session, transport or timeout).
    ///
    /// These are the only errors the safe tier surfaces.
    pub fn is_transport(&self) -> bool {
        match self {
            Error::Driver(_) | Error::Timeout(_) => true,
            Error::Context(_, inner) => inner.is_transport(),
            _ => false,
        }
    }
}
