//! Face tracing over a rotation system, with inline dual-edge emission.
//!
//! Purpose
//! - Enumerate every face of a fixed embedding exactly once by walking darts
//!   (directed edges), and emit one dual edge per primal edge as a side
//!   stream of the same walk.
//! - Expose the completed trace through stable read accessors, including the
//!   flat prefix-summed arrays of the numeric output contract.
//!
//! Why this design
//! - A direct explicit-state loop (consumed flags per dart, owner face per
//!   edge) instead of visitor callbacks; there is one walk, one result
//!   type, no virtual dispatch.
//! - Faces are numbered by discovery order and darts scanned in id order, so
//!   the whole output is a deterministic function of (graph, rotation).

mod types;
mod walk;

pub use types::{DualError, FaceId, FaceTrace, TraceError};
pub use walk::{trace_faces, trace_with_embedder};

#[cfg(test)]
mod tests;
