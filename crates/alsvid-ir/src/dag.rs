//! DAG-based circuit representation.
//!
//! Nodes are per-qubit boundary markers (`In`/`Out`) or operations; edges
//! carry the qubit wire they belong to. Each operation node is stamped with
//! a monotone sequence number at apply time, which fixes one global order
//! over all operations consistent with every wire's local order. Rewrite
//! passes identify nodes by their stable graph index, never by position, so
//! removals elsewhere in the graph cannot invalidate bookkeeping.

use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex as PetNodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::op::Op;
use crate::qubit::QubitId;

/// Node index type for the circuit DAG.
pub type NodeIndex = PetNodeIndex<u32>;

/// A node in the circuit DAG.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DagNode {
    /// Input boundary for a qubit wire.
    In(QubitId),
    /// Output boundary for a qubit wire.
    Out(QubitId),
    /// An operation node.
    Op {
        /// Position in the global application order. Stable across removals
        /// and in-place replacements; fresh nodes get fresh values.
        seq: u64,
        /// The operation payload.
        op: Op,
    },
}

impl DagNode {
    /// Check if this is an operation node.
    #[inline]
    pub fn is_op(&self) -> bool {
        matches!(self, DagNode::Op { .. })
    }

    /// Get the operation if this is an operation node.
    #[inline]
    pub fn op(&self) -> Option<&Op> {
        match self {
            DagNode::Op { op, .. } => Some(op),
            _ => None,
        }
    }
}

/// An edge in the circuit DAG: one hop along a qubit wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DagEdge {
    /// The qubit wire this edge belongs to.
    pub qubit: QubitId,
}

/// DAG-based circuit representation.
///
/// - Each qubit wire has exactly one `In` and one `Out` node.
/// - Operations are threaded onto the wires of the qubits they act on.
/// - A two-qubit operation appears on both of its wires as a single node,
///   so its position cannot disagree between them.
///
/// The `wire_front` index maps each wire to the last node before its output
/// node, giving O(1) predecessor lookups in [`CircuitDag::apply`].
#[derive(Debug, Clone)]
pub struct CircuitDag {
    /// The underlying graph.
    graph: StableDiGraph<DagNode, DagEdge, u32>,
    /// Map from qubit to its input node.
    inputs: FxHashMap<QubitId, NodeIndex>,
    /// Map from qubit to its output node.
    outputs: FxHashMap<QubitId, NodeIndex>,
    /// Wire front: maps each qubit to the node just before the output node.
    wire_front: FxHashMap<QubitId, NodeIndex>,
    /// Next global sequence number to stamp on an applied operation.
    next_seq: u64,
}

impl CircuitDag {
    /// Create a new empty circuit DAG.
    pub fn new() -> Self {
        Self {
            graph: StableDiGraph::default(),
            inputs: FxHashMap::default(),
            outputs: FxHashMap::default(),
            wire_front: FxHashMap::default(),
            next_seq: 0,
        }
    }

    /// Add a qubit to the circuit.
    pub fn add_qubit(&mut self, qubit: QubitId) {
        if self.inputs.contains_key(&qubit) {
            return;
        }
        let in_node = self.graph.add_node(DagNode::In(qubit));
        let out_node = self.graph.add_node(DagNode::Out(qubit));
        self.graph.add_edge(in_node, out_node, DagEdge { qubit });
        self.inputs.insert(qubit, in_node);
        self.outputs.insert(qubit, out_node);
        self.wire_front.insert(qubit, in_node);
    }

    /// Apply an operation to the circuit, appending it to its wires.
    ///
    /// Validates the operation before touching the graph: the qubit count
    /// must match the gate arity, every qubit must exist, and the qubit
    /// tuple must not repeat a qubit (this is what rejects a CX whose
    /// control equals its target).
    pub fn apply(&mut self, op: Op) -> IrResult<NodeIndex> {
        let expected = op.gate.num_qubits();
        let got = op.qubits.len();
        if expected as usize != got {
            return Err(IrError::QubitCountMismatch {
                gate_name: op.name().to_string(),
                expected,
                got: got as u32,
            });
        }

        for &qubit in &op.qubits {
            if !self.inputs.contains_key(&qubit) {
                return Err(IrError::QubitNotFound {
                    qubit,
                    gate_name: Some(op.name().to_string()),
                });
            }
        }

        let mut seen = rustc_hash::FxHashSet::default();
        for &qubit in &op.qubits {
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: Some(op.name().to_string()),
                });
            }
        }

        let qubits = op.qubits.clone();
        let seq = self.next_seq;
        self.next_seq += 1;
        let op_node = self.graph.add_node(DagNode::Op { seq, op });

        // Splice the node in just before the output node of each wire.
        for qubit in qubits {
            let out_node = self.outputs[&qubit];
            let prev_node = self.wire_front[&qubit];

            let edge_id = self
                .graph
                .edges_directed(prev_node, Direction::Outgoing)
                .find(|e| e.weight().qubit == qubit && e.target() == out_node)
                .map(|e| e.id());

            let eid = edge_id.ok_or_else(|| {
                IrError::InvalidDag(format!(
                    "Missing edge from predecessor to output on wire {qubit}"
                ))
            })?;
            self.graph.remove_edge(eid);
            self.graph.add_edge(prev_node, op_node, DagEdge { qubit });
            self.graph.add_edge(op_node, out_node, DagEdge { qubit });
            self.wire_front.insert(qubit, op_node);
        }

        Ok(op_node)
    }

    /// Remove an operation node, reconnecting each of its wires.
    ///
    /// The relative order of all remaining nodes is preserved on every wire
    /// the removed node touched. Node indices of other nodes stay valid.
    pub fn remove_op(&mut self, node: NodeIndex) -> IrResult<Op> {
        match self.graph.node_weight(node) {
            Some(DagNode::Op { .. }) => {}
            Some(_) => {
                return Err(IrError::InvalidDag(
                    "Cannot remove non-operation node".into(),
                ));
            }
            None => return Err(IrError::InvalidNode),
        }

        let incoming: Vec<_> = self
            .graph
            .edges_directed(node, Direction::Incoming)
            .map(|e| (e.source(), e.weight().qubit))
            .collect();

        let outgoing: Vec<_> = self
            .graph
            .edges_directed(node, Direction::Outgoing)
            .map(|e| (e.target(), e.weight().qubit))
            .collect();

        // If this node was the front of a wire, the front moves back to its
        // predecessor on that wire.
        for &(pred, qubit) in &incoming {
            if self.wire_front.get(&qubit) == Some(&node) {
                self.wire_front.insert(qubit, pred);
            }
        }

        let removed = self
            .graph
            .remove_node(node)
            .ok_or(IrError::InvalidNode)?;
        let DagNode::Op { op, .. } = removed else {
            unreachable!("node kind checked above");
        };

        for &(pred, qubit) in &incoming {
            for &(succ, succ_qubit) in &outgoing {
                if qubit == succ_qubit {
                    self.graph.add_edge(pred, succ, DagEdge { qubit });
                }
            }
        }

        Ok(op)
    }

    /// Replace the gate of an operation node in place.
    ///
    /// The node keeps its identity, its wires, and its position in the
    /// global order; only the gate kind changes. The new gate must have the
    /// same arity as the operation's qubit tuple.
    pub fn replace_op(&mut self, node: NodeIndex, gate: Gate) -> IrResult<()> {
        let weight = self.graph.node_weight_mut(node).ok_or(IrError::InvalidNode)?;
        let DagNode::Op { op, .. } = weight else {
            return Err(IrError::InvalidDag(
                "Cannot replace non-operation node".into(),
            ));
        };
        let got = op.qubits.len() as u32;
        if gate.num_qubits() != got {
            return Err(IrError::QubitCountMismatch {
                gate_name: gate.name().to_string(),
                expected: gate.num_qubits(),
                got,
            });
        }
        op.gate = gate;
        Ok(())
    }

    /// Get an operation by node index.
    #[inline]
    pub fn get_op(&self, node: NodeIndex) -> Option<&Op> {
        self.graph.node_weight(node).and_then(|n| n.op())
    }

    /// The qubit wires of this circuit, in ascending order.
    pub fn qubits(&self) -> Vec<QubitId> {
        let mut qubits: Vec<_> = self.inputs.keys().copied().collect();
        qubits.sort_unstable();
        qubits
    }

    /// The live operation nodes on one wire, in wire order.
    ///
    /// Boundary nodes are excluded. Unknown wires yield an empty sequence.
    pub fn ops_on_wire(&self, qubit: QubitId) -> Vec<NodeIndex> {
        let Some(&in_node) = self.inputs.get(&qubit) else {
            return vec![];
        };
        let out_node = self.outputs[&qubit];

        let mut nodes = vec![];
        let mut current = in_node;
        while current != out_node {
            let next = self
                .graph
                .edges_directed(current, Direction::Outgoing)
                .find(|e| e.weight().qubit == qubit)
                .map(|e| e.target());
            match next {
                Some(n) => {
                    if self.graph[n].is_op() {
                        nodes.push(n);
                    }
                    current = n;
                }
                None => break,
            }
        }
        nodes
    }

    /// All live operation nodes in global order.
    ///
    /// The order is the application order, which is consistent with every
    /// wire's local order, and it is deterministic: exporting an unchanged
    /// graph always yields the same sequence.
    pub fn topological_ops(&self) -> Vec<(NodeIndex, &Op)> {
        let mut ops: Vec<(u64, NodeIndex, &Op)> = self
            .graph
            .node_indices()
            .filter_map(|idx| match &self.graph[idx] {
                DagNode::Op { seq, op } => Some((*seq, idx, op)),
                _ => None,
            })
            .collect();
        ops.sort_unstable_by_key(|&(seq, _, _)| seq);
        ops.into_iter().map(|(_, idx, op)| (idx, op)).collect()
    }

    /// Get the number of qubits.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.inputs.len()
    }

    /// Get the number of live operations.
    #[inline]
    pub fn num_ops(&self) -> usize {
        self.graph.node_count().saturating_sub(2 * self.inputs.len())
    }

    /// Calculate the circuit depth.
    ///
    /// Walks the operations in global order, tracking the deepest operation
    /// seen so far on each wire.
    pub fn depth(&self) -> usize {
        let mut wire_depth: FxHashMap<QubitId, usize> = FxHashMap::default();
        let mut max_depth = 0;

        for (_, op) in self.topological_ops() {
            let level = op
                .qubits
                .iter()
                .map(|q| wire_depth.get(q).copied().unwrap_or(0))
                .max()
                .unwrap_or(0)
                + 1;
            for &q in &op.qubits {
                wire_depth.insert(q, level);
            }
            max_depth = max_depth.max(level);
        }

        max_depth
    }

    /// Verify the structural integrity of the DAG.
    ///
    /// Checks that:
    /// - the graph is acyclic,
    /// - every qubit has both an `In` and an `Out` node,
    /// - every wire forms an unbroken path from `In` to `Out`,
    /// - sequence numbers strictly increase along every wire (so the global
    ///   order cannot contradict any wire's local order).
    pub fn verify_integrity(&self) -> IrResult<()> {
        if petgraph::algo::is_cyclic_directed(&self.graph) {
            return Err(IrError::InvalidDag("Graph contains a cycle".into()));
        }

        for &qubit in self.inputs.keys() {
            if !self.outputs.contains_key(&qubit) {
                return Err(IrError::InvalidDag(format!(
                    "Qubit {qubit} has an In node but no Out node"
                )));
            }
        }
        for &qubit in self.outputs.keys() {
            if !self.inputs.contains_key(&qubit) {
                return Err(IrError::InvalidDag(format!(
                    "Qubit {qubit} has an Out node but no In node"
                )));
            }
        }

        for (&qubit, &in_node) in &self.inputs {
            let out_node = self.outputs[&qubit];

            let mut current = in_node;
            let mut last_seq: Option<u64> = None;
            let mut steps = 0;
            let max_steps = self.graph.node_count();

            while current != out_node {
                let next = self
                    .graph
                    .edges_directed(current, Direction::Outgoing)
                    .find(|e| e.weight().qubit == qubit)
                    .map(|e| e.target());

                match next {
                    Some(n) => current = n,
                    None => {
                        return Err(IrError::InvalidDag(format!(
                            "Wire for qubit {qubit} is broken: no outgoing edge from node {current:?}"
                        )));
                    }
                }

                if let DagNode::Op { seq, .. } = &self.graph[current] {
                    if let Some(prev) = last_seq {
                        if *seq <= prev {
                            return Err(IrError::InvalidDag(format!(
                                "Global order contradicts wire order on qubit {qubit}: seq {seq} after {prev}"
                            )));
                        }
                    }
                    last_seq = Some(*seq);
                }

                steps += 1;
                if steps > max_steps {
                    return Err(IrError::InvalidDag(format!(
                        "Wire for qubit {qubit} has too many steps (possible loop)"
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Default for CircuitDag {
    fn default() -> Self {
        Self::new()
    }
}
