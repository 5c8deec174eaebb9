//! Alsvid Circuit Intermediate Representation
//!
//! Core data structures for representing quantum circuits as DAGs. The DAG
//! form is what rewrite passes operate on: nodes are gate applications,
//! edges encode per-qubit temporal order, and mutation primitives (remove,
//! in-place replace) preserve the relative order of everything they do not
//! touch.
//!
//! # Core Components
//!
//! - [`QubitId`]: addressing for qubit wires
//! - [`Gate`]: the closed gate alphabet (X, Y, Z, H, S, Sdg, CX)
//! - [`Op`]: a gate applied to concrete qubits
//! - [`CircuitDag`]: the graph representation with wire views and the
//!   mutation API
//! - [`Circuit`]: high-level builder and the ordered-sequence boundary
//!
//! # Example
//!
//! ```rust
//! use alsvid_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell", 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.num_ops(), 2);
//! assert_eq!(circuit.depth(), 2);
//! ```

pub mod circuit;
pub mod dag;
pub mod error;
pub mod gate;
pub mod op;
pub mod qubit;

pub use circuit::Circuit;
pub use dag::{CircuitDag, DagEdge, DagNode, NodeIndex};
pub use error::{IrError, IrResult};
pub use gate::Gate;
pub use op::Op;
pub use qubit::QubitId;
