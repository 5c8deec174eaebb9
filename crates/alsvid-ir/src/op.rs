//! Operations: a gate applied to concrete qubits.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::gate::Gate;
use crate::qubit::QubitId;

/// One gate application: the payload of an operation node in the DAG.
///
/// The qubit tuple is ordered; for `CX` it is `(control, target)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Op {
    /// The gate kind.
    pub gate: Gate,
    /// Qubits this operation acts on, in order.
    pub qubits: Vec<QubitId>,
}

impl Op {
    /// Create an operation from a gate and its qubit operands.
    pub fn new(gate: Gate, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            gate,
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a single-qubit operation.
    pub fn single(gate: Gate, qubit: QubitId) -> Self {
        Self::new(gate, [qubit])
    }

    /// Create a CX operation.
    pub fn cx(control: QubitId, target: QubitId) -> Self {
        Self::new(Gate::CX, [control, target])
    }

    /// The name of the underlying gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.gate.name()
    }

    /// The control qubit, if this is a two-qubit operation.
    #[inline]
    pub fn control(&self) -> Option<QubitId> {
        (self.qubits.len() == 2).then(|| self.qubits[0])
    }

    /// The target qubit, if this is a two-qubit operation.
    #[inline]
    pub fn target(&self) -> Option<QubitId> {
        (self.qubits.len() == 2).then(|| self.qubits[1])
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gate)?;
        let mut sep = " ";
        for q in &self.qubits {
            write!(f, "{sep}{q}")?;
            sep = ", ";
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_op() {
        let op = Op::single(Gate::H, QubitId(0));
        assert_eq!(op.name(), "h");
        assert_eq!(op.qubits, vec![QubitId(0)]);
        assert_eq!(op.control(), None);
    }

    #[test]
    fn test_cx_op() {
        let op = Op::cx(QubitId(0), QubitId(1));
        assert_eq!(op.gate, Gate::CX);
        assert_eq!(op.control(), Some(QubitId(0)));
        assert_eq!(op.target(), Some(QubitId(1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Op::single(Gate::X, QubitId(2))), "x q2");
        assert_eq!(format!("{}", Op::cx(QubitId(0), QubitId(1))), "cx q0, q1");
    }
}
