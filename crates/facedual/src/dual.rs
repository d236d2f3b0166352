//! Dual graph materialized from a completed face trace.
//!
//! Faces become vertices; every primal edge contributes exactly one dual
//! edge. Parallel dual edges are kept (ring adjacency multiplicity is
//! meaningful) and a bridge shows up as a self-loop on its face.

use crate::trace::{FaceId, FaceTrace, TraceError};

/// Explicit dual graph: faces, dual edges in emission order, and per-face
/// incidence lists of dual-edge indices.
///
/// A self-loop's index appears twice in its face's incidence list, so
/// `degree` counts a loop twice, the usual multigraph convention.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DualGraph {
    num_faces: usize,
    edges: Vec<(FaceId, FaceId)>,
    adj: Vec<Vec<usize>>,
}

impl DualGraph {
    /// Materialize the trace's dual-edge stream. The edge list here and the
    /// trace's `dual_edges()` agree exactly on count and endpoints; this
    /// shape just adds the per-face incidence index.
    pub fn from_trace(trace: &FaceTrace) -> Self {
        let num_faces = trace.face_count();
        let edges: Vec<(FaceId, FaceId)> = trace.dual_edges().to_vec();
        let mut adj = vec![Vec::new(); num_faces];
        for (i, &(a, b)) in edges.iter().enumerate() {
            adj[a.0].push(i);
            adj[b.0].push(i);
        }
        Self {
            num_faces,
            edges,
            adj,
        }
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.num_faces
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Dual edges as (owner face, second face) pairs in emission order.
    #[inline]
    pub fn edges(&self) -> &[(FaceId, FaceId)] {
        &self.edges
    }

    /// Indices into `edges()` of the dual edges incident to `face`.
    pub fn incident(&self, face: FaceId) -> Result<&[usize], TraceError> {
        self.adj
            .get(face.0)
            .map(Vec::as_slice)
            .ok_or(TraceError::FaceOutOfRange {
                face: face.0,
                faces: self.num_faces,
            })
    }

    /// Degree of `face`; a self-loop contributes two.
    pub fn degree(&self, face: FaceId) -> Result<usize, TraceError> {
        self.incident(face).map(<[usize]>::len)
    }

    /// Neighboring faces with multiplicity, in emission order. A face across
    /// k shared edges appears k times; a bridge face lists itself twice.
    pub fn neighbors(&self, face: FaceId) -> Result<Vec<FaceId>, TraceError> {
        let incident = self.incident(face)?;
        Ok(incident
            .iter()
            .map(|&i| {
                let (a, b) = self.edges[i];
                if a == face {
                    b
                } else {
                    a
                }
            })
            .collect())
    }
}
