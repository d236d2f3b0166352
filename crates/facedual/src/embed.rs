//! Rotation systems and the embedding seam.
//!
//! Purpose
//! - `Rotation` stores, per vertex, the cyclic order of incident edges that a
//!   planar drawing induces, plus a per-dart position table so the tracing
//!   walk advances in O(1) without hash lookups.
//! - `Embedder` is the contract the core consumes: an external collaborator
//!   that either produces a rotation system or reports the graph non-planar.
//!   Planarity testing itself is out of scope here.
//!
//! A rotation system over a connected graph uniquely determines the face
//! structure of one embedding of that graph on an orientable surface; the
//! tracing walk works for any of them, planar or not.

use std::fmt;

use nalgebra::Vector2;

use crate::graph::Graph;

/// The embedder could not produce a rotation system: the graph admits no
/// planar embedding. Recoverable; callers skip the offending cage record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NonPlanar {
    pub vertices: usize,
    pub edges: usize,
}

impl fmt::Display for NonPlanar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "graph with {} vertices and {} edges admits no planar embedding",
            self.vertices, self.edges
        )
    }
}

impl std::error::Error for NonPlanar {}

/// Errors raised while assembling a [`Rotation`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RotationError {
    /// Number of per-vertex orders differs from the graph's vertex count.
    VertexCountMismatch { expected: usize, got: usize },
    /// A vertex's order is not a permutation of its incident edges.
    NotAPermutation { vertex: usize },
    /// Number of drawing coordinates differs from the graph's vertex count.
    PositionCountMismatch { expected: usize, got: usize },
}

impl fmt::Display for RotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationError::VertexCountMismatch { expected, got } => write!(
                f,
                "rotation lists {} vertices, graph has {}",
                got, expected
            ),
            RotationError::NotAPermutation { vertex } => write!(
                f,
                "order at vertex {} is not a permutation of its incident edges",
                vertex
            ),
            RotationError::PositionCountMismatch { expected, got } => write!(
                f,
                "drawing has {} coordinates, graph has {} vertices",
                got, expected
            ),
        }
    }
}

impl std::error::Error for RotationError {}

/// Per-vertex cyclic order of incident edges, with the per-dart lookup table
/// the tracing walk needs.
///
/// Darts index directed edges: dart `2e` runs along edge `e` in insertion
/// orientation, dart `2e + 1` the other way. `pos_at_head[d]` is the index of
/// `d`'s underlying edge within the order at `d`'s head vertex.
#[derive(Clone, Debug)]
pub struct Rotation {
    order: Vec<Vec<usize>>,
    pos_at_head: Vec<usize>,
    num_edges: usize,
}

impl Rotation {
    /// Validate per-vertex orders against `graph` and build the dart table.
    pub fn from_orders(graph: &Graph, order: Vec<Vec<usize>>) -> Result<Self, RotationError> {
        if order.len() != graph.num_vertices() {
            return Err(RotationError::VertexCountMismatch {
                expected: graph.num_vertices(),
                got: order.len(),
            });
        }
        for (v, ord) in order.iter().enumerate() {
            let mut given: Vec<usize> = ord.clone();
            let mut incident: Vec<usize> = graph.incident(v).to_vec();
            given.sort_unstable();
            incident.sort_unstable();
            if given != incident {
                return Err(RotationError::NotAPermutation { vertex: v });
            }
        }
        let mut pos_at_head = vec![0usize; 2 * graph.num_edges()];
        for (v, ord) in order.iter().enumerate() {
            for (i, &e) in ord.iter().enumerate() {
                let (u, w) = graph.ends(e);
                // Dart 2e heads into w, dart 2e+1 heads into u.
                if w == v {
                    pos_at_head[2 * e] = i;
                }
                if u == v {
                    pos_at_head[2 * e + 1] = i;
                }
            }
        }
        Ok(Self {
            order,
            pos_at_head,
            num_edges: graph.num_edges(),
        })
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Cyclic incident-edge order at `v`.
    #[inline]
    pub fn order_at(&self, v: usize) -> &[usize] {
        &self.order[v]
    }

    /// Position of dart `d`'s edge within the order at `d`'s head vertex.
    #[inline]
    pub fn pos_at_head(&self, d: usize) -> usize {
        self.pos_at_head[d]
    }
}

/// Derive the rotation system induced by a planar straight-line drawing:
/// sort each vertex's incident edges counterclockwise by outgoing angle.
///
/// The caller guarantees the drawing is planar (edges cross only at shared
/// endpoints); this does not test planarity, it only reads angles off
/// coordinates the way a Schlegel diagram fixes them.
pub fn rotation_from_drawing(
    graph: &Graph,
    positions: &[Vector2<f64>],
) -> Result<Rotation, RotationError> {
    if positions.len() != graph.num_vertices() {
        return Err(RotationError::PositionCountMismatch {
            expected: graph.num_vertices(),
            got: positions.len(),
        });
    }
    let mut order = Vec::with_capacity(graph.num_vertices());
    for v in 0..graph.num_vertices() {
        let mut ord: Vec<usize> = graph.incident(v).to_vec();
        ord.sort_by(|&a, &b| {
            let angle = |e: usize| {
                let w = graph.other_end(e, v);
                let d = positions[w] - positions[v];
                d.y.atan2(d.x)
            };
            angle(a)
                .partial_cmp(&angle(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        order.push(ord);
    }
    Rotation::from_orders(graph, order)
}

/// External collaborator contract: produce a rotation system for `graph` or
/// report it non-planar.
pub trait Embedder {
    fn embed(&self, graph: &Graph) -> Result<Rotation, NonPlanar>;
}

/// Embedder that hands back an already-computed rotation system, for callers
/// that run the embedding step separately.
#[derive(Clone, Debug)]
pub struct PrecomputedEmbedder {
    rotation: Rotation,
}

impl PrecomputedEmbedder {
    pub fn new(rotation: Rotation) -> Self {
        Self { rotation }
    }
}

impl Embedder for PrecomputedEmbedder {
    fn embed(&self, _graph: &Graph) -> Result<Rotation, NonPlanar> {
        Ok(self.rotation.clone())
    }
}
