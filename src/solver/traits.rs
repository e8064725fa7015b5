//! Numerical solver traits and types
//!
//! # Design Philosophy
//!
//! The solver has two extension seams:
//! - `AdvectionScheme`: an explicit three-point stencil for the advection half-step
//! - `SnapshotSink`: where each completed step is pushed (plot, file, memory)
//!
//! The `SchemeKind` enum is the type-safe identifier for the built-in
//! schemes, parsed from the configuration's scheme string.
//!
//! # Stability Guarantee
//!
//! - `AdvectionScheme` and `SnapshotSink` traits: STABLE
//! - `SchemeKind` enum: EXTENSIBLE (new variants can be added)

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TransportError};
use crate::physics::{Field, MIN_CELL_COUNT};
use crate::solver::methods::{Ftcs, LaxFriedrichs};

// =================================================================================================
// Advection Scheme
// =================================================================================================

/// Explicit advection update of the interior cells
///
/// # Responsibility
///
/// A scheme provides the stencil value for one interior cell from its two
/// neighbours and itself. [`advance`](AdvectionScheme::advance) applies it to
/// every interior cell, always reading from a copy of the previous state, so
/// an implementation never sees half-updated neighbours.
///
/// Boundary cells (0 and `n-1`) are never written: their values are owned by
/// the initial condition and the fixed rows of the diffusion matrix.
///
/// # Stability
///
/// Neither built-in scheme checks its stability bound. FTCS in particular is
/// unconditionally unstable for pure advection and will grow oscillations over
/// long runs; Lax-Friedrichs needs `|u|·Δt/Δx ≤ 1`.
pub trait AdvectionScheme: Send + Sync + fmt::Debug {
    /// New value of a cell from `(left, centre, right)` of the previous state
    ///
    /// `factor` is `u·Δt / (2·Δx)`.
    fn stencil(&self, left: f64, centre: f64, right: f64, factor: f64) -> f64;

    /// Name of the scheme (display and logging)
    fn name(&self) -> &'static str;

    /// Apply one explicit step to the interior cells of `field`
    ///
    /// # Errors
    ///
    /// `Configuration` when the field has fewer than 3 cells.
    fn advance(&self, field: &mut Field, factor: f64) -> Result<()> {
        let n = field.len();
        if n < MIN_CELL_COUNT {
            return Err(TransportError::configuration(format!(
                "{} needs at least {} cells, field has {}",
                self.name(),
                MIN_CELL_COUNT,
                n
            )));
        }

        let previous = field.to_vec();
        let next = field.values_mut();

        for (i, window) in previous.windows(3).enumerate() {
            next[i + 1] = self.stencil(window[0], window[1], window[2], factor);
        }

        Ok(())
    }
}

// =================================================================================================
// Scheme identifier
// =================================================================================================

/// Built-in advection schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    /// Forward-Time Central-Space
    Ftcs,

    /// Lax-Friedrichs (neighbour averaging)
    LaxFriedrichs,
}

impl SchemeKind {
    /// All built-in schemes
    pub const ALL: [SchemeKind; 2] = [SchemeKind::Ftcs, SchemeKind::LaxFriedrichs];

    /// Scheme implementation for this identifier
    pub fn scheme(&self) -> &'static dyn AdvectionScheme {
        match self {
            SchemeKind::Ftcs => &Ftcs,
            SchemeKind::LaxFriedrichs => &LaxFriedrichs,
        }
    }

    /// Canonical identifier (as accepted by `from_str`)
    pub fn identifier(&self) -> &'static str {
        match self {
            SchemeKind::Ftcs => "ftcs",
            SchemeKind::LaxFriedrichs => "lax-friedrichs",
        }
    }
}

impl FromStr for SchemeKind {
    type Err = TransportError;

    fn from_str(identifier: &str) -> Result<Self> {
        match identifier.trim().to_ascii_lowercase().as_str() {
            "ftcs" | "forward-time-central-space" => Ok(SchemeKind::Ftcs),
            "lax-friedrichs" | "lax_friedrichs" | "laxfriedrichs" | "lf" => {
                Ok(SchemeKind::LaxFriedrichs)
            }
            other => Err(TransportError::configuration(format!(
                "unrecognized advection scheme '{}' (expected 'ftcs' or 'lax-friedrichs')",
                other
            ))),
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.scheme().name())
    }
}

// =================================================================================================
// Snapshot Sink
// =================================================================================================

/// Consumer of the field after every completed step
///
/// The driver calls [`accept`](SnapshotSink::accept) synchronously, once per
/// iteration, and waits for it to return before the next step. A sink may
/// take as long as it wants (rendering, pacing); the core makes no
/// assumption about it beyond receiving the array.
pub trait SnapshotSink {
    /// Receive the field at the end of a step
    fn accept(&mut self, field: &Field) -> Result<()>;

    /// Called once after the scenario loop has ended
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for &mut S {
    fn accept(&mut self, field: &Field) -> Result<()> {
        (**self).accept(field)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for Box<S> {
    fn accept(&mut self, field: &Field) -> Result<()> {
        (**self).accept(field)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
