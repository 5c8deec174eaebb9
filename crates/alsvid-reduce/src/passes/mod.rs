//! Built-in rewrite passes.

mod gate_reduction;

pub use gate_reduction::GateReduction;
