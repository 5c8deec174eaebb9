//! Alsvid Gate Reduction
//!
//! Peephole optimization over the circuit DAG: a catalogue of algebraic
//! cancellation and substitution identities is applied to short windows of
//! adjacent operations, repeatedly, until a full pass changes nothing. Gate
//! count never increases, and the computation the circuit performs is
//! preserved.
//!
//! # Architecture
//!
//! - [`rules`]: the identity catalogue, pure functions over gate windows
//! - [`GateReduction`]: one full pass — a global CX sub-pass against the
//!   whole-circuit operation order, then per-wire single-qubit windows
//! - [`reduce`]: the fixed-point driver
//! - [`reduce_circuit_depth`]: the sequence-in, sequence-out entry point
//!
//! # Example
//!
//! ```rust
//! use alsvid_ir::{Circuit, QubitId};
//! use alsvid_reduce::reduce_circuit_depth;
//!
//! let mut circuit = Circuit::with_size("redundant", 1);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.z(QubitId(0)).unwrap();
//! circuit.h(QubitId(0)).unwrap();
//!
//! // HZH = X
//! let reduced = reduce_circuit_depth(circuit).unwrap();
//! assert_eq!(reduced.num_ops(), 1);
//! ```
//!
//! # Custom passes
//!
//! Implement the [`Pass`] trait to add further rewrite passes:
//!
//! ```rust
//! use alsvid_ir::CircuitDag;
//! use alsvid_reduce::{Pass, ReduceResult};
//!
//! struct MyPass;
//!
//! impl Pass for MyPass {
//!     fn name(&self) -> &str { "my_pass" }
//!
//!     fn run(&self, dag: &mut CircuitDag) -> ReduceResult<bool> {
//!         // Rewrite logic here; return whether anything changed.
//!         Ok(false)
//!     }
//! }
//! ```

pub mod driver;
pub mod error;
pub mod pass;
pub mod rules;

// Built-in passes
pub mod passes;

pub use driver::{reduce, reduce_circuit_depth};
pub use error::{ReduceError, ReduceResult};
pub use pass::Pass;
pub use passes::GateReduction;
