//! The face-tracing walk: explicit dart loop, dual edges emitted inline.

use crate::embed::{Embedder, Rotation};
use crate::graph::Graph;

use super::types::{DualError, FaceId, FaceTrace, TraceError};

/// Dart along edge `d / 2`; even darts run in insertion orientation.
#[inline]
fn tail(graph: &Graph, d: usize) -> usize {
    let (u, v) = graph.ends(d / 2);
    if d % 2 == 0 {
        u
    } else {
        v
    }
}

#[inline]
fn head(graph: &Graph, d: usize) -> usize {
    let (u, v) = graph.ends(d / 2);
    if d % 2 == 0 {
        v
    } else {
        u
    }
}

/// Successor of dart `d` on its face: at the head vertex, the edge after
/// `d`'s edge in cyclic order, taken away from the head.
#[inline]
fn next_dart(graph: &Graph, rotation: &Rotation, d: usize) -> usize {
    let v = head(graph, d);
    let order = rotation.order_at(v);
    let e = order[(rotation.pos_at_head(d) + 1) % order.len()];
    if graph.ends(e).0 == v {
        2 * e
    } else {
        2 * e + 1
    }
}

/// Trace every face of the embedding given by `rotation` and emit the dual
/// edges, one per primal edge.
///
/// Walk state is a consumed flag per dart (2·E of them) and an owner face per
/// edge. Unconsumed darts are scanned in dart-id order, so face numbering and
/// every output sequence are deterministic functions of the input. Each dart
/// is consumed exactly once; a face closes when its walk returns to the dart
/// it started on.
///
/// Connectivity is checked up front: faces of a disconnected graph would not
/// satisfy the Euler bookkeeping downstream consumers rely on. Rotation
/// systems of nonzero genus are accepted; the 2·E and dual-count invariants
/// hold regardless, only the face count shifts.
pub fn trace_faces(graph: &Graph, rotation: &Rotation) -> Result<FaceTrace, TraceError> {
    if graph.num_vertices() == 0 || graph.num_edges() == 0 {
        return Err(TraceError::Empty);
    }
    if rotation.num_vertices() != graph.num_vertices()
        || rotation.num_edges() != graph.num_edges()
    {
        return Err(TraceError::RotationMismatch {
            graph_vertices: graph.num_vertices(),
            graph_edges: graph.num_edges(),
            rotation_vertices: rotation.num_vertices(),
            rotation_edges: rotation.num_edges(),
        });
    }
    let components = graph.component_count();
    if components > 1 {
        return Err(TraceError::Disconnected { components });
    }

    let num_edges = graph.num_edges();
    let mut consumed = vec![false; 2 * num_edges];
    let mut owner: Vec<Option<FaceId>> = vec![None; num_edges];
    let mut faces: Vec<Vec<usize>> = Vec::new();
    let mut dual: Vec<(FaceId, FaceId)> = Vec::new();

    for start in 0..2 * num_edges {
        if consumed[start] {
            continue;
        }
        let face = FaceId(faces.len());
        let mut walk = Vec::new();
        let mut d = start;
        loop {
            consumed[d] = true;
            walk.push(tail(graph, d));
            let e = d / 2;
            match owner[e] {
                None => owner[e] = Some(face),
                Some(first) => dual.push((first, face)),
            }
            d = next_dart(graph, rotation, d);
            if d == start {
                break;
            }
        }
        faces.push(walk);
    }

    debug_assert_eq!(faces.iter().map(Vec::len).sum::<usize>(), 2 * num_edges);
    debug_assert_eq!(dual.len(), num_edges);
    #[cfg(debug_assertions)]
    if faces.len() != num_edges + 2 - graph.num_vertices()
        && std::env::var_os("FACEDUAL_DEBUG_TRACE").is_some()
    {
        eprintln!(
            "rotation system has positive genus: {} faces, Euler expects {} (V={}, E={})",
            faces.len(),
            num_edges + 2 - graph.num_vertices(),
            graph.num_vertices(),
            num_edges
        );
    }

    Ok(FaceTrace::new(
        graph.num_vertices(),
        num_edges,
        faces,
        dual,
    ))
}

/// Embed-then-trace pipeline: ask `embedder` for a rotation system, then run
/// the walk. A non-planar verdict comes back as a recoverable error so a
/// batch caller can skip the offending record and keep going.
pub fn trace_with_embedder<E: Embedder>(
    embedder: &E,
    graph: &Graph,
) -> Result<FaceTrace, DualError> {
    let rotation = embedder.embed(graph)?;
    Ok(trace_faces(graph, &rotation)?)
}
