//! The rewrite rule catalogue.
//!
//! Rules are pure functions of a short window of gate kinds to an optional
//! action; they know nothing about the graph. Windows are matched over
//! consecutive live operations on a single wire, so CX never matches here —
//! CX·CX cancellation needs the global operation order and lives in the
//! pass engine instead.
//!
//! Identities encoded:
//! XX = YY = ZZ = HH = I, S·Sdg = Sdg·S = I, S·S = Sdg·Sdg = Z,
//! HZH = X, HXH = Z.
//!
//! Per node the pair rule takes precedence over the triple rule, so H·H
//! cancels before an H·Z·H window is ever considered.

use alsvid_ir::Gate;

/// The action a matched two-gate window rewrites to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairAction {
    /// Delete both operations.
    Cancel,
    /// Delete both operations and leave a single gate in their place.
    Fuse(Gate),
}

/// Match two consecutive gates on one wire.
///
/// Covers the self-inverse pair cancellation (XX, YY, ZZ, HH), the inverse
/// phase pair (S·Sdg, Sdg·S), and the phase-squaring fusion (S·S and
/// Sdg·Sdg to Z).
pub fn pair_rule(a: Gate, b: Gate) -> Option<PairAction> {
    match (a, b) {
        (Gate::X, Gate::X) | (Gate::Y, Gate::Y) | (Gate::Z, Gate::Z) | (Gate::H, Gate::H) => {
            Some(PairAction::Cancel)
        }
        (Gate::S, Gate::Sdg) | (Gate::Sdg, Gate::S) => Some(PairAction::Cancel),
        (Gate::S, Gate::S) | (Gate::Sdg, Gate::Sdg) => Some(PairAction::Fuse(Gate::Z)),
        // CX pairs are matched against the global order by the engine;
        // everything else has no two-gate identity in this rule set.
        (
            Gate::X | Gate::Y | Gate::Z | Gate::H | Gate::S | Gate::Sdg | Gate::CX,
            Gate::X | Gate::Y | Gate::Z | Gate::H | Gate::S | Gate::Sdg | Gate::CX,
        ) => None,
    }
}

/// Match three consecutive gates on one wire.
///
/// Covers the Hadamard conjugations HZH = X and HXH = Z. The result gate
/// replaces the third operation in place; the first two are deleted.
pub fn triple_rule(a: Gate, b: Gate, c: Gate) -> Option<Gate> {
    match (a, b, c) {
        (Gate::H, Gate::Z, Gate::H) => Some(Gate::X),
        (Gate::H, Gate::X, Gate::H) => Some(Gate::Z),
        _ => None,
    }
}
