//! Combinatorial faces and dual graphs of fullerene cage topologies.
//!
//! Given a cage's bond graph and a rotation system (the per-vertex cyclic
//! bond order a planar embedding fixes), this crate enumerates the faces
//! (rings) of the embedding exactly once each and builds the dual graph
//! joining rings that share a bond. Ring sizes and ring adjacency feed the
//! downstream cage classification; planarity testing and embedding
//! construction stay with external collaborators behind the
//! [`embed::Embedder`] trait.

pub mod cages;
pub mod dual;
pub mod embed;
pub mod graph;
pub mod trace;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Drawing coordinates are plain 2D vectors; keep the caller's imports short.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::dual::DualGraph;
    pub use crate::embed::{
        rotation_from_drawing, Embedder, NonPlanar, PrecomputedEmbedder, Rotation, RotationError,
    };
    pub use crate::graph::{Graph, GraphError};
    pub use crate::trace::{
        trace_faces, trace_with_embedder, DualError, FaceId, FaceTrace, TraceError,
    };
    pub use nalgebra::Vector2 as Vec2;
}
