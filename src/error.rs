//! Error type shared by every layer of the crate
//!
//! Two failure families matter to a caller:
//!
//! - **Configuration** errors are detected while building the grid, the
//!   scenarios or the initial field. No step has run when they surface.
//! - **Linear system** errors come out of the implicit diffusion solve. They
//!   abort the affected scenario only.
//!
//! Sink failures (file I/O, plotting) are reported separately so that the
//! driver can tell a numerical problem from an output problem.

use thiserror::Error;

/// Errors raised by the transport kernel
#[derive(Debug, Error)]
pub enum TransportError {
    /// Invalid grid, parameters, scheme identifier or scenario setup
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The diffusion system could not be factorized or solved
    #[error("Linear system error at step {step}: {reason}")]
    LinearSystem {
        /// Step being computed when the solve failed (0 = factorization)
        step: usize,
        /// Diagnostic message
        reason: String,
    },

    /// A snapshot sink refused a field or failed to finalize
    #[error("Snapshot sink error: {0}")]
    Sink(String),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TransportError {
    /// Shorthand for a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Shorthand for a sink error
    pub fn sink(message: impl Into<String>) -> Self {
        Self::Sink(message.into())
    }

    /// Attach the step number to a linear system error; other variants pass through
    pub fn at_step(self, step: usize) -> Self {
        match self {
            Self::LinearSystem { reason, .. } => Self::LinearSystem { step, reason },
            other => other,
        }
    }

    /// True for errors detected before any stepping
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// True for errors raised by the implicit solve
    pub fn is_linear_system(&self) -> bool {
        matches!(self, Self::LinearSystem { .. })
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, TransportError>;
