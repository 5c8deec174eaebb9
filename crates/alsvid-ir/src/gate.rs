//! The gate alphabet.
//!
//! The reduction rules are defined over a fixed, closed set of gates, so the
//! gate kind is a plain enum and every consumer matches on it exhaustively.
//! Adding a gate is a compile-time exercise: the compiler points at every
//! rule table that needs a decision for the new kind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A gate kind from the supported alphabet.
///
/// `CX` is the only two-qubit kind; everything else acts on a single qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// Controlled-X (CNOT) gate.
    CX,
}

impl Gate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::X => "x",
            Gate::Y => "y",
            Gate::Z => "z",
            Gate::H => "h",
            Gate::S => "s",
            Gate::Sdg => "sdg",
            Gate::CX => "cx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::X | Gate::Y | Gate::Z | Gate::H | Gate::S | Gate::Sdg => 1,
            Gate::CX => 2,
        }
    }

    /// Check whether this gate is its own inverse.
    #[inline]
    pub fn is_self_inverse(&self) -> bool {
        match self {
            Gate::X | Gate::Y | Gate::Z | Gate::H | Gate::CX => true,
            Gate::S | Gate::Sdg => false,
        }
    }

    /// Get the inverse of this gate.
    ///
    /// Every kind in the alphabet has its inverse in the alphabet.
    #[inline]
    pub fn inverse(&self) -> Gate {
        match self {
            Gate::S => Gate::Sdg,
            Gate::Sdg => Gate::S,
            g => *g,
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
