//! Registry error types.
//!
//! [`RegistryError`] is the central error type for the crate. Registry
//! operations themselves are infallible (register always succeeds, removing
//! an absent path is a no-op); errors only arise from lifecycle listeners,
//! which propagate through the dispatcher as a generic startup failure.

use crate::domain::ContextPath;

/// Error type for lifecycle dispatch and listener failures.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A lifecycle listener failed during context startup.
    ///
    /// The hosting container treats this as a deployment failure for the
    /// affected context path.
    #[error("context startup failed for '{context_path}': {message}")]
    StartupFailed {
        /// Context path of the deployment that failed to start.
        context_path: ContextPath,
        /// Listener-supplied failure description.
        message: String,
    },

    /// Internal invariant violation.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RegistryError {
    /// Creates a [`RegistryError::StartupFailed`] for the given context.
    #[must_use]
    pub fn startup_failed(context_path: ContextPath, message: impl Into<String>) -> Self {
        Self::StartupFailed {
            context_path,
            message: message.into(),
        }
    }
}
