//! Property-based tests for the reduction engine.
//!
//! Checks the engine's contract over arbitrary circuits: gate count never
//! grows, the fixed point is a true fixed point, and the number of runs is
//! bounded by the initial gate count.

use alsvid_ir::{Circuit, Op, QubitId};
use alsvid_reduce::{GateReduction, Pass, reduce_circuit_depth};
use proptest::prelude::*;

/// Gate operations that can be applied to a circuit.
#[derive(Debug, Clone)]
enum GateOp {
    X(u32),
    Y(u32),
    Z(u32),
    H(u32),
    S(u32),
    Sdg(u32),
    CX(u32, u32),
}

impl GateOp {
    fn into_op(self) -> Op {
        use alsvid_ir::Gate;
        match self {
            GateOp::X(q) => Op::single(Gate::X, QubitId(q)),
            GateOp::Y(q) => Op::single(Gate::Y, QubitId(q)),
            GateOp::Z(q) => Op::single(Gate::Z, QubitId(q)),
            GateOp::H(q) => Op::single(Gate::H, QubitId(q)),
            GateOp::S(q) => Op::single(Gate::S, QubitId(q)),
            GateOp::Sdg(q) => Op::single(Gate::Sdg, QubitId(q)),
            GateOp::CX(c, t) => Op::cx(QubitId(c), QubitId(t)),
        }
    }
}

fn arb_gate_op(num_qubits: u32) -> impl Strategy<Value = GateOp> {
    prop_oneof![
        (0..num_qubits).prop_map(GateOp::X),
        (0..num_qubits).prop_map(GateOp::Y),
        (0..num_qubits).prop_map(GateOp::Z),
        (0..num_qubits).prop_map(GateOp::H),
        (0..num_qubits).prop_map(GateOp::S),
        (0..num_qubits).prop_map(GateOp::Sdg),
        (0..num_qubits, 0..num_qubits)
            .prop_filter("control and target must differ", |(c, t)| c != t)
            .prop_map(|(c, t)| GateOp::CX(c, t)),
    ]
}

/// Generate a random circuit: 2-4 qubits, up to 40 gates.
fn arb_circuit() -> impl Strategy<Value = Circuit> {
    (2_u32..=4).prop_flat_map(|num_qubits| {
        prop::collection::vec(arb_gate_op(num_qubits), 0..=40).prop_map(move |ops| {
            Circuit::from_ops("prop", num_qubits, ops.into_iter().map(GateOp::into_op))
                .expect("generated ops are valid")
        })
    })
}

proptest! {
    #[test]
    fn reduction_never_increases_gate_count(circuit in arb_circuit()) {
        let before = circuit.num_ops();
        let reduced = reduce_circuit_depth(circuit).unwrap();
        prop_assert!(reduced.num_ops() <= before);
    }

    #[test]
    fn reduction_is_idempotent(circuit in arb_circuit()) {
        let once = reduce_circuit_depth(circuit).unwrap();
        let twice = reduce_circuit_depth(once.clone()).unwrap();
        prop_assert_eq!(once.ops(), twice.ops());
    }

    #[test]
    fn run_count_is_bounded_by_initial_gate_count(circuit in arb_circuit()) {
        let initial = circuit.num_ops();
        let mut dag = circuit.into_dag();
        let pass = GateReduction::new();

        let mut runs = 0_usize;
        loop {
            let before = dag.num_ops();
            pass.run(&mut dag).unwrap();
            runs += 1;
            if dag.num_ops() == before {
                break;
            }
            // Every continuing run strictly reduces the count.
            prop_assert!(dag.num_ops() < before);
        }
        prop_assert!(runs <= initial + 1);
    }

    #[test]
    fn reduced_graph_is_structurally_sound(circuit in arb_circuit()) {
        let reduced = reduce_circuit_depth(circuit).unwrap();
        reduced.dag().verify_integrity().unwrap();
    }

    #[test]
    fn export_of_reduced_circuit_reimports_identically(circuit in arb_circuit()) {
        let num_qubits = circuit.num_qubits() as u32;
        let reduced = reduce_circuit_depth(circuit).unwrap();
        let reimported =
            Circuit::from_ops("roundtrip", num_qubits, reduced.ops()).unwrap();
        prop_assert_eq!(reimported.ops(), reduced.ops());
    }
}
