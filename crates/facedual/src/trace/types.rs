//! Data types for face tracing: ids, errors, and the completed trace.

use std::fmt;

use crate::embed::NonPlanar;

/// Face identifier: discovery order during the tracing walk, starting at 0.
/// An opaque key into the parallel per-face result arrays, nothing more.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub usize);

/// Errors raised by the tracing walk and the result accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceError {
    /// The graph has no vertices or no edges; there is nothing to trace.
    Empty,
    /// The graph is not connected; Euler-formula bookkeeping would be
    /// meaningless, so the walk refuses to start.
    Disconnected { components: usize },
    /// The rotation system was built for a different graph.
    RotationMismatch {
        graph_vertices: usize,
        graph_edges: usize,
        rotation_vertices: usize,
        rotation_edges: usize,
    },
    /// An accessor was queried with an out-of-range face id.
    FaceOutOfRange { face: usize, faces: usize },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::Empty => write!(f, "graph has no vertices or no edges"),
            TraceError::Disconnected { components } => write!(
                f,
                "graph is disconnected ({} components); face tracing needs a connected graph",
                components
            ),
            TraceError::RotationMismatch {
                graph_vertices,
                graph_edges,
                rotation_vertices,
                rotation_edges,
            } => write!(
                f,
                "rotation system covers {} vertices / {} edges, graph has {} / {}",
                rotation_vertices, rotation_edges, graph_vertices, graph_edges
            ),
            TraceError::FaceOutOfRange { face, faces } => {
                write!(f, "face id {} out of range (trace has {} faces)", face, faces)
            }
        }
    }
}

impl std::error::Error for TraceError {}

/// Pipeline error for embed-then-trace: either the embedder rejected the
/// graph, or the walk's preconditions failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DualError {
    NonPlanar(NonPlanar),
    Trace(TraceError),
}

impl fmt::Display for DualError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DualError::NonPlanar(e) => e.fmt(f),
            DualError::Trace(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for DualError {}

impl From<NonPlanar> for DualError {
    fn from(e: NonPlanar) -> Self {
        DualError::NonPlanar(e)
    }
}

impl From<TraceError> for DualError {
    fn from(e: TraceError) -> Self {
        DualError::Trace(e)
    }
}

/// Completed face trace: one boundary walk per face in discovery order, plus
/// the dual-edge stream in emission order. Immutable once built; owned by the
/// caller of the tracing walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceTrace {
    num_vertices: usize,
    num_edges: usize,
    faces: Vec<Vec<usize>>,
    dual: Vec<(FaceId, FaceId)>,
}

impl FaceTrace {
    pub(crate) fn new(
        num_vertices: usize,
        num_edges: usize,
        faces: Vec<Vec<usize>>,
        dual: Vec<(FaceId, FaceId)>,
    ) -> Self {
        Self {
            num_vertices,
            num_edges,
            faces,
            dual,
        }
    }

    /// Vertex count of the traced graph.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Edge count of the traced graph.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Number of faces discovered by the walk.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of dual edges; always equals `num_edges()`.
    #[inline]
    pub fn dual_edge_count(&self) -> usize {
        self.dual.len()
    }

    /// Boundary length (ring size) per face, in face-id order.
    pub fn face_sizes(&self) -> Vec<usize> {
        self.faces.iter().map(Vec::len).collect()
    }

    /// Boundary vertex walk of one face, in traversal order.
    pub fn face_vertices(&self, face: FaceId) -> Result<&[usize], TraceError> {
        self.faces
            .get(face.0)
            .map(Vec::as_slice)
            .ok_or(TraceError::FaceOutOfRange {
                face: face.0,
                faces: self.faces.len(),
            })
    }

    /// Boundary edges of one face as (tail, head) pairs, in traversal order.
    /// Edge `i` runs from boundary vertex `i` to boundary vertex `i + 1`
    /// (cyclically), so the pairs share the walk's orientation.
    pub fn face_edges(&self, face: FaceId) -> Result<Vec<(usize, usize)>, TraceError> {
        let walk = self.face_vertices(face)?;
        Ok((0..walk.len())
            .map(|i| (walk[i], walk[(i + 1) % walk.len()]))
            .collect())
    }

    /// Dual edges as (owner face, second face) pairs in emission order.
    /// A bridge edge shows up as a self-loop pair.
    #[inline]
    pub fn dual_edges(&self) -> &[(FaceId, FaceId)] {
        &self.dual
    }

    /// Per-face vertex walks concatenated in face-id order. Offsets into the
    /// flat array follow by prefix-summing `face_sizes()`.
    pub fn flat_face_vertices(&self) -> Vec<usize> {
        self.faces.iter().flatten().copied().collect()
    }

    /// Per-face boundary edges concatenated in face-id order, same offsets as
    /// `flat_face_vertices()`.
    pub fn flat_face_edges(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::with_capacity(2 * self.num_edges);
        for f in 0..self.faces.len() {
            out.extend(self.face_edges(FaceId(f)).expect("face id in range"));
        }
        out
    }

    /// Dual edges flattened to `2 * dual_edge_count()` face indices.
    pub fn flat_dual_edges(&self) -> Vec<usize> {
        self.dual.iter().flat_map(|&(a, b)| [a.0, b.0]).collect()
    }
}
