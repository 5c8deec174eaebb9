//! Fixed-point driver and the top-level entry point.

use tracing::{debug, info, instrument};

use alsvid_ir::{Circuit, CircuitDag};

use crate::error::{ReduceError, ReduceResult};
use crate::pass::Pass;
use crate::passes::GateReduction;

/// Drive the gate-reduction pass to a fixed point.
///
/// Runs the pass repeatedly, stopping once a full run leaves the live
/// operation count unchanged. Every rule strictly reduces the count, so the
/// loop terminates after at most `num_ops` + 1 runs.
#[instrument(skip(dag))]
pub fn reduce(dag: &mut CircuitDag) -> ReduceResult<()> {
    let pass = GateReduction::new();
    info!(
        "Reducing circuit with {} qubits, {} ops",
        dag.num_qubits(),
        dag.num_ops()
    );

    let mut runs = 0_usize;
    loop {
        let before = dag.num_ops();
        let changed = pass.run(dag)?;
        runs += 1;
        debug!(
            pass = pass.name(),
            runs,
            ops = dag.num_ops(),
            changed,
            "pass run completed"
        );

        if dag.num_ops() == before {
            // A run that changed the graph must have removed something.
            if changed {
                return Err(ReduceError::InvariantViolation(
                    "pass reported a change without reducing the op count".into(),
                ));
            }
            break;
        }
    }

    info!(
        "Reduction reached fixed point after {} runs, {} ops remain (depth {})",
        runs,
        dag.num_ops(),
        dag.depth()
    );
    Ok(())
}

/// Reduce a circuit's gate count (and with it, its depth).
///
/// Imports the sequence, drives the rewrite rules to a fixed point, and
/// exports the result. Idempotent: re-applying to an already-reduced
/// circuit returns the identical sequence.
pub fn reduce_circuit_depth(circuit: Circuit) -> ReduceResult<Circuit> {
    let mut dag = circuit.into_dag();
    reduce(&mut dag)?;
    Ok(Circuit::from_dag(dag))
}
