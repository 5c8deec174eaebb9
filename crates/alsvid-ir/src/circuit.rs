//! High-level circuit builder and the sequence boundary.
//!
//! A [`Circuit`] is the form circuits cross the crate boundary in: an
//! ordered gate sequence over a declared set of qubits. Internally it is
//! backed by the [`CircuitDag`]; `from_ops`/`ops` convert between the two
//! without reordering anything.

use crate::dag::CircuitDag;
use crate::error::IrResult;
use crate::gate::Gate;
use crate::op::Op;
use crate::qubit::QubitId;

/// A quantum circuit.
#[derive(Debug, Clone)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// The underlying DAG representation.
    dag: CircuitDag,
    /// Counter for generating qubit IDs.
    next_qubit_id: u32,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dag: CircuitDag::new(),
            next_qubit_id: 0,
        }
    }

    /// Create a circuit with a given number of qubits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32) -> Self {
        let mut circuit = Self::new(name);
        for _ in 0..num_qubits {
            circuit.add_qubit();
        }
        circuit
    }

    /// Add a single qubit to the circuit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.next_qubit_id);
        self.next_qubit_id += 1;
        self.dag.add_qubit(id);
        id
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.dag.apply(Op::single(Gate::X, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.dag.apply(Op::single(Gate::Y, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.dag.apply(Op::single(Gate::Z, qubit))?;
        Ok(self)
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.dag.apply(Op::single(Gate::H, qubit))?;
        Ok(self)
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.dag.apply(Op::single(Gate::S, qubit))?;
        Ok(self)
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.dag.apply(Op::single(Gate::Sdg, qubit))?;
        Ok(self)
    }

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.dag.apply(Op::cx(control, target))?;
        Ok(self)
    }

    /// Apply an arbitrary operation.
    pub fn op(&mut self, op: Op) -> IrResult<&mut Self> {
        self.dag.apply(op)?;
        Ok(self)
    }

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.dag.num_qubits()
    }

    /// Get the number of operations.
    pub fn num_ops(&self) -> usize {
        self.dag.num_ops()
    }

    /// Get the circuit depth.
    pub fn depth(&self) -> usize {
        self.dag.depth()
    }

    /// Get a reference to the underlying DAG.
    pub fn dag(&self) -> &CircuitDag {
        &self.dag
    }

    /// Consume the circuit and return the DAG.
    pub fn into_dag(self) -> CircuitDag {
        self.dag
    }

    /// Create a circuit from a DAG.
    pub fn from_dag(dag: CircuitDag) -> Self {
        let next_qubit_id = dag
            .qubits()
            .last()
            .map(|q| q.0 + 1)
            .unwrap_or(0);
        Self {
            name: "circuit".into(),
            dag,
            next_qubit_id,
        }
    }

    /// Build a circuit from an ordered gate sequence.
    ///
    /// The relative order of operations on every qubit is preserved exactly
    /// as given. Fails on malformed input (unknown qubit, wrong arity, CX
    /// with control equal to target) without constructing a partial graph
    /// the caller could observe.
    pub fn from_ops(
        name: impl Into<String>,
        num_qubits: u32,
        ops: impl IntoIterator<Item = Op>,
    ) -> IrResult<Self> {
        let mut circuit = Self::with_size(name, num_qubits);
        for op in ops {
            circuit.dag.apply(op)?;
        }
        Ok(circuit)
    }

    /// Export the circuit as an ordered gate sequence.
    ///
    /// The sequence is the live operations in global order: a deterministic
    /// linearization consistent with every wire's local order.
    pub fn ops(&self) -> Vec<Op> {
        self.dag
            .topological_ops()
            .into_iter()
            .map(|(_, op)| op.clone())
            .collect()
    }
}
