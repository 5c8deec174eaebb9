//! End-to-end reduction tests through the sequence entry point.

use alsvid_ir::{Circuit, Gate, Op, QubitId};
use alsvid_reduce::reduce_circuit_depth;

fn reduce_ops(num_qubits: u32, ops: Vec<Op>) -> Vec<Op> {
    let circuit = Circuit::from_ops("test", num_qubits, ops).unwrap();
    reduce_circuit_depth(circuit).unwrap().ops()
}

#[test]
fn xx_reduces_to_empty() {
    let ops = vec![
        Op::single(Gate::X, QubitId(0)),
        Op::single(Gate::X, QubitId(0)),
    ];
    assert_eq!(reduce_ops(1, ops), vec![]);
}

#[test]
fn hzh_reduces_to_x() {
    let ops = vec![
        Op::single(Gate::H, QubitId(0)),
        Op::single(Gate::Z, QubitId(0)),
        Op::single(Gate::H, QubitId(0)),
    ];
    assert_eq!(reduce_ops(1, ops), vec![Op::single(Gate::X, QubitId(0))]);
}

#[test]
fn hxh_reduces_to_z() {
    let ops = vec![
        Op::single(Gate::H, QubitId(0)),
        Op::single(Gate::X, QubitId(0)),
        Op::single(Gate::H, QubitId(0)),
    ];
    assert_eq!(reduce_ops(1, ops), vec![Op::single(Gate::Z, QubitId(0))]);
}

#[test]
fn phase_squares_reduce_to_z() {
    for gate in [Gate::S, Gate::Sdg] {
        let ops = vec![Op::single(gate, QubitId(0)), Op::single(gate, QubitId(0))];
        assert_eq!(
            reduce_ops(1, ops),
            vec![Op::single(Gate::Z, QubitId(0))],
            "{gate}·{gate} should reduce to Z"
        );
    }
}

#[test]
fn phase_inverse_pairs_reduce_to_empty() {
    for (a, b) in [(Gate::S, Gate::Sdg), (Gate::Sdg, Gate::S)] {
        let ops = vec![Op::single(a, QubitId(0)), Op::single(b, QubitId(0))];
        assert_eq!(reduce_ops(1, ops), vec![], "{a}·{b} should cancel");
    }
}

#[test]
fn cx_pair_reduces_to_empty() {
    let ops = vec![Op::cx(QubitId(0), QubitId(1)), Op::cx(QubitId(0), QubitId(1))];
    assert_eq!(reduce_ops(2, ops), vec![]);
}

#[test]
fn cx_with_flipped_tuple_is_unchanged() {
    let ops = vec![Op::cx(QubitId(0), QubitId(1)), Op::cx(QubitId(1), QubitId(0))];
    assert_eq!(reduce_ops(2, ops.clone()), ops);
}

#[test]
fn cx_pair_split_by_gate_on_one_wire_is_unchanged() {
    // The two CX nodes stay direct neighbors on wire 0, but the X on wire 1
    // sits between them in the global order, so they must not cancel.
    let ops = vec![
        Op::cx(QubitId(0), QubitId(1)),
        Op::single(Gate::X, QubitId(1)),
        Op::cx(QubitId(0), QubitId(1)),
    ];
    assert_eq!(reduce_ops(2, ops.clone()), ops);
}

#[test]
fn hhzz_cascades_to_empty() {
    let ops = vec![
        Op::single(Gate::H, QubitId(0)),
        Op::single(Gate::H, QubitId(0)),
        Op::single(Gate::Z, QubitId(0)),
        Op::single(Gate::Z, QubitId(0)),
    ];
    assert_eq!(reduce_ops(1, ops), vec![]);
}

#[test]
fn same_gate_on_different_qubits_is_unchanged() {
    let ops = vec![
        Op::single(Gate::X, QubitId(0)),
        Op::single(Gate::X, QubitId(1)),
    ];
    assert_eq!(reduce_ops(2, ops.clone()), ops);
}

#[test]
fn surviving_ops_keep_their_relative_order() {
    let ops = vec![
        Op::single(Gate::S, QubitId(0)),
        Op::single(Gate::H, QubitId(1)),
        Op::single(Gate::H, QubitId(1)),
        Op::cx(QubitId(0), QubitId(1)),
        Op::single(Gate::Y, QubitId(1)),
    ];
    let expected = vec![
        Op::single(Gate::S, QubitId(0)),
        Op::cx(QubitId(0), QubitId(1)),
        Op::single(Gate::Y, QubitId(1)),
    ];
    assert_eq!(reduce_ops(2, ops), expected);
}

#[test]
fn deep_redundant_circuit_collapses() {
    // H (S S) H on top of a cancelling CX pair: everything folds away
    // except the final X from the HZH window.
    let ops = vec![
        Op::single(Gate::H, QubitId(0)),
        Op::single(Gate::S, QubitId(0)),
        Op::single(Gate::S, QubitId(0)),
        Op::single(Gate::H, QubitId(0)),
        Op::cx(QubitId(0), QubitId(1)),
        Op::cx(QubitId(0), QubitId(1)),
    ];
    assert_eq!(reduce_ops(2, ops), vec![Op::single(Gate::X, QubitId(0))]);
}

#[test]
fn reduction_is_idempotent() {
    let ops = vec![
        Op::single(Gate::H, QubitId(0)),
        Op::cx(QubitId(0), QubitId(1)),
        Op::single(Gate::S, QubitId(1)),
        Op::single(Gate::S, QubitId(1)),
        Op::single(Gate::H, QubitId(0)),
    ];
    let circuit = Circuit::from_ops("test", 2, ops).unwrap();
    let once = reduce_circuit_depth(circuit).unwrap();
    let twice = reduce_circuit_depth(once.clone()).unwrap();
    assert_eq!(once.ops(), twice.ops());
}

#[test]
fn malformed_input_is_rejected_before_reduction() {
    // Unknown qubit.
    assert!(Circuit::from_ops("bad", 1, [Op::single(Gate::H, QubitId(3))]).is_err());
    // CX with control == target.
    assert!(Circuit::from_ops("bad", 2, [Op::cx(QubitId(0), QubitId(0))]).is_err());
    // Wrong arity.
    assert!(Circuit::from_ops("bad", 2, [Op::new(Gate::CX, [QubitId(0)])]).is_err());
}

#[test]
fn reduced_graph_passes_integrity_check() {
    let ops = vec![
        Op::single(Gate::H, QubitId(0)),
        Op::single(Gate::H, QubitId(0)),
        Op::cx(QubitId(0), QubitId(1)),
        Op::single(Gate::Sdg, QubitId(2)),
        Op::single(Gate::Sdg, QubitId(2)),
        Op::cx(QubitId(1), QubitId(2)),
    ];
    let circuit = Circuit::from_ops("test", 3, ops).unwrap();
    let reduced = reduce_circuit_depth(circuit).unwrap();
    reduced.dag().verify_integrity().unwrap();
}
