//! The gate-reduction pass.
//!
//! One run is two sub-passes over the graph. The global sub-pass cancels
//! CX·CX pairs against the global operation order: two CX gates sharing both
//! qubits may be direct neighbors on one wire while an unrelated gate sits
//! between them on the other, so per-wire adjacency is not sufficient
//! evidence that they cancel. The local sub-pass then applies the
//! single-qubit rule windows per wire. Any future multi-qubit rule belongs
//! in the global sub-pass.
//!
//! Within one run, every node a rule deletes or replaces is marked consumed
//! and excluded from all later rule evaluations in that run; replacement
//! gates written by a rule only become visible to the next run. Consumed
//! tracking is by stable node index, so deletions cannot shift it.

use alsvid_ir::{CircuitDag, Gate, NodeIndex, Op};
use rustc_hash::FxHashSet;
use tracing::trace;

use crate::error::{ReduceError, ReduceResult};
use crate::pass::Pass;
use crate::rules::{self, PairAction};

/// Peephole gate-reduction pass.
///
/// Applies the identities XX = YY = ZZ = HH = I, S·Sdg = Sdg·S = I,
/// S·S = Sdg·Sdg = Z, HZH = X, HXH = Z, and CX·CX = I, each at most once
/// per node window per run.
pub struct GateReduction;

impl GateReduction {
    /// Create a new gate-reduction pass.
    pub fn new() -> Self {
        Self
    }

    /// Global sub-pass: cancel CX pairs adjacent in the global order.
    fn run_global(
        &self,
        dag: &mut CircuitDag,
        consumed: &mut FxHashSet<NodeIndex>,
    ) -> ReduceResult<bool> {
        let snapshot: Vec<(NodeIndex, Op)> = dag
            .topological_ops()
            .into_iter()
            .map(|(node, op)| (node, op.clone()))
            .collect();

        let mut changed = false;
        for i in 0..snapshot.len() {
            let (node, op) = &snapshot[i];
            if op.gate != Gate::CX || consumed.contains(node) {
                continue;
            }

            // The very next live node in global order must be a CX with an
            // identical (control, target) tuple; any interleaved gate, on
            // either wire, blocks the cancellation.
            let Some(j) = (i + 1..snapshot.len()).find(|&j| !consumed.contains(&snapshot[j].0))
            else {
                break;
            };
            let (next_node, next_op) = &snapshot[j];
            if next_op.gate == Gate::CX && next_op.qubits == op.qubits {
                trace!(rule = "cx_cancel", %op, "cancelling CX pair");
                dag.remove_op(*node)?;
                dag.remove_op(*next_node)?;
                consumed.insert(*node);
                consumed.insert(*next_node);
                changed = true;
            }
        }

        Ok(changed)
    }

    /// Local sub-pass: apply single-qubit rule windows per wire.
    fn run_local(
        &self,
        dag: &mut CircuitDag,
        consumed: &mut FxHashSet<NodeIndex>,
    ) -> ReduceResult<bool> {
        let mut changed = false;

        for qubit in dag.qubits() {
            let nodes = dag.ops_on_wire(qubit);
            let mut wire = Vec::with_capacity(nodes.len());
            for node in nodes {
                let op = dag.get_op(node).ok_or_else(|| {
                    ReduceError::InvariantViolation(format!(
                        "live node {node:?} on wire {qubit} has no operation"
                    ))
                })?;
                wire.push((node, op.gate));
            }

            for i in 0..wire.len() {
                let (node, gate) = wire[i];
                if consumed.contains(&node) {
                    continue;
                }

                let Some(j) = next_live(&wire, consumed, i + 1) else {
                    break;
                };
                let (b_node, b_gate) = wire[j];

                // Pair rules take precedence over the triple rules.
                if let Some(action) = rules::pair_rule(gate, b_gate) {
                    match action {
                        PairAction::Cancel => {
                            trace!(rule = "pair_cancel", %gate, %qubit, "cancelling pair");
                            dag.remove_op(node)?;
                            dag.remove_op(b_node)?;
                        }
                        PairAction::Fuse(fused) => {
                            trace!(rule = "pair_fuse", %gate, %fused, %qubit, "fusing pair");
                            dag.replace_op(b_node, fused)?;
                            dag.remove_op(node)?;
                        }
                    }
                    consumed.insert(node);
                    consumed.insert(b_node);
                    changed = true;
                    continue;
                }

                let Some(k) = next_live(&wire, consumed, j + 1) else {
                    continue;
                };
                let (c_node, c_gate) = wire[k];
                if let Some(replacement) = rules::triple_rule(gate, b_gate, c_gate) {
                    trace!(
                        rule = "triple",
                        a = %gate,
                        b = %b_gate,
                        c = %c_gate,
                        %replacement,
                        %qubit,
                        "rewriting triple"
                    );
                    dag.remove_op(node)?;
                    dag.remove_op(b_node)?;
                    dag.replace_op(c_node, replacement)?;
                    consumed.insert(node);
                    consumed.insert(b_node);
                    consumed.insert(c_node);
                    changed = true;
                }
            }
        }

        Ok(changed)
    }
}

/// Find the next wire position at or after `from` that is not consumed.
fn next_live(
    wire: &[(NodeIndex, Gate)],
    consumed: &FxHashSet<NodeIndex>,
    from: usize,
) -> Option<usize> {
    (from..wire.len()).find(|&idx| !consumed.contains(&wire[idx].0))
}

impl Default for GateReduction {
    fn default() -> Self {
        Self::new()
    }
}

impl Pass for GateReduction {
    fn name(&self) -> &'static str {
        "GateReduction"
    }

    fn run(&self, dag: &mut CircuitDag) -> ReduceResult<bool> {
        // Two-qubit rules are staged strictly before the per-wire rules, and
        // nodes consumed globally stay consumed for the local sub-pass.
        let mut consumed: FxHashSet<NodeIndex> = FxHashSet::default();
        let global = self.run_global(dag, &mut consumed)?;
        let local = self.run_local(dag, &mut consumed)?;
        Ok(global || local)
    }
}
