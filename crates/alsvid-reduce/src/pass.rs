//! Pass trait for circuit rewrite passes.

use alsvid_ir::CircuitDag;

use crate::error::ReduceResult;

/// A rewrite pass that operates on a circuit DAG.
///
/// A pass is one full scan of the graph: it applies its rules at most once
/// per node window and reports whether anything changed. Iterating a pass
/// to a fixed point is the driver's job, not the pass's.
pub trait Pass: Send + Sync {
    /// Get the name of this pass.
    fn name(&self) -> &str;

    /// Run one scan over the DAG, mutating it in place.
    ///
    /// Returns `true` iff at least one rule fired.
    fn run(&self, dag: &mut CircuitDag) -> ReduceResult<bool>;
}
