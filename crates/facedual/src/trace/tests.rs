//! Scenario tests for the tracing walk, plus property tests over random
//! rotation systems (which may have any genus; the dart-partition
//! invariants hold regardless).

use std::collections::HashMap;

use proptest::prelude::*;

use super::*;
use crate::cages;
use crate::embed::{Embedder, NonPlanar, Rotation};
use crate::graph::Graph;

#[test]
fn triangle_two_faces_multi_edge_dual() {
    let (g, rot) = cages::cycle(3);
    let t = trace_faces(&g, &rot).unwrap();
    assert_eq!(t.face_count(), 2);
    assert_eq!(t.face_sizes(), vec![3, 3]);
    assert_eq!(t.face_vertices(FaceId(0)).unwrap(), &[0, 1, 2]);
    assert_eq!(t.face_vertices(FaceId(1)).unwrap(), &[1, 0, 2]);
    assert_eq!(
        t.face_edges(FaceId(0)).unwrap(),
        vec![(0, 1), (1, 2), (2, 0)]
    );
    assert_eq!(
        t.face_edges(FaceId(1)).unwrap(),
        vec![(1, 0), (0, 2), (2, 1)]
    );
    // Three dual edges between the same two faces; multiplicity kept.
    assert_eq!(
        t.dual_edges(),
        &[
            (FaceId(0), FaceId(1)),
            (FaceId(0), FaceId(1)),
            (FaceId(0), FaceId(1))
        ]
    );
}

#[test]
fn tetrahedron_four_triangles() {
    let (g, rot) = cages::tetrahedron();
    let t = trace_faces(&g, &rot).unwrap();
    assert_eq!(t.face_count(), 4);
    assert_eq!(t.face_sizes(), vec![3; 4]);
    assert_eq!(t.dual_edge_count(), 6);
    assert_eq!(t.face_count(), g.num_edges() + 2 - g.num_vertices());
}

#[test]
fn prism_faces_and_euler() {
    let (g, rot) = cages::prism(5);
    let t = trace_faces(&g, &rot).unwrap();
    assert_eq!(t.face_count(), 7);
    let mut sizes = t.face_sizes();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![4, 4, 4, 4, 4, 5, 5]);
    assert_eq!(t.dual_edge_count(), 15);
    assert_eq!(t.face_count(), g.num_edges() + 2 - g.num_vertices());
}

#[test]
fn dodecahedral_cage_is_twelve_pentagons() {
    let (g, rot) = cages::dodecahedron();
    let t = trace_faces(&g, &rot).unwrap();
    assert_eq!(t.face_count(), 12);
    assert_eq!(t.face_sizes(), vec![5; 12]);
    assert_eq!(t.dual_edge_count(), 30);
    // 20 - 30 + 12 = 2.
    assert_eq!(
        g.num_vertices() + t.face_count(),
        g.num_edges() + 2
    );
    // First discovered ring of the reference drawing.
    assert_eq!(t.face_vertices(FaceId(0)).unwrap(), &[0, 1, 6, 10, 5]);
    assert!(t.dual_edges().iter().all(|(a, b)| a != b));
}

#[test]
fn bridge_yields_dual_self_loop() {
    let (g, rot) = cages::two_triangles_bridged();
    let t = trace_faces(&g, &rot).unwrap();
    assert_eq!(t.face_sizes(), vec![8, 3, 3]);
    // The outer face walks the bridge twice: one self-loop, count still |E|.
    assert_eq!(
        t.dual_edges(),
        &[
            (FaceId(0), FaceId(0)),
            (FaceId(0), FaceId(1)),
            (FaceId(0), FaceId(1)),
            (FaceId(0), FaceId(1)),
            (FaceId(0), FaceId(2)),
            (FaceId(0), FaceId(2)),
            (FaceId(0), FaceId(2))
        ]
    );
    assert_eq!(t.dual_edge_count(), g.num_edges());
}

#[test]
fn every_dual_edge_matches_two_boundary_traversals() {
    let (g, rot) = cages::prism(6);
    let t = trace_faces(&g, &rot).unwrap();
    // Collect, per undirected edge, the faces whose boundaries traverse it.
    let mut traversals: HashMap<(usize, usize), Vec<usize>> = HashMap::new();
    for f in 0..t.face_count() {
        for (u, v) in t.face_edges(FaceId(f)).unwrap() {
            traversals.entry((u.min(v), u.max(v))).or_default().push(f);
        }
    }
    // Each edge is traversed exactly twice, and the dual edge multiset is
    // exactly the per-edge face pairs.
    let mut expected: Vec<(usize, usize)> = traversals
        .values()
        .map(|faces| {
            assert_eq!(faces.len(), 2);
            (faces[0].min(faces[1]), faces[0].max(faces[1]))
        })
        .collect();
    let mut got: Vec<(usize, usize)> = t
        .dual_edges()
        .iter()
        .map(|&(a, b)| (a.0.min(b.0), a.0.max(b.0)))
        .collect();
    expected.sort_unstable();
    got.sort_unstable();
    assert_eq!(got, expected);
}

#[test]
fn flat_arrays_follow_prefix_sums() {
    let (g, rot) = cages::dodecahedron();
    let t = trace_faces(&g, &rot).unwrap();
    let sizes = t.face_sizes();
    let flat_v = t.flat_face_vertices();
    let flat_e = t.flat_face_edges();
    assert_eq!(flat_v.len(), 2 * g.num_edges());
    assert_eq!(flat_e.len(), 2 * g.num_edges());
    let mut offset = 0;
    for (f, &len) in sizes.iter().enumerate() {
        assert_eq!(
            &flat_v[offset..offset + len],
            t.face_vertices(FaceId(f)).unwrap()
        );
        assert_eq!(
            &flat_e[offset..offset + len],
            t.face_edges(FaceId(f)).unwrap().as_slice()
        );
        offset += len;
    }
    assert_eq!(t.flat_dual_edges().len(), 2 * t.dual_edge_count());
}

#[test]
fn disconnected_input_is_rejected_before_tracing() {
    let g = Graph::from_edges(&[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]).unwrap();
    let orders: Vec<Vec<usize>> = (0..g.num_vertices())
        .map(|v| g.incident(v).to_vec())
        .collect();
    let rot = Rotation::from_orders(&g, orders).unwrap();
    assert_eq!(
        trace_faces(&g, &rot).unwrap_err(),
        TraceError::Disconnected { components: 2 }
    );
}

#[test]
fn empty_graph_is_rejected() {
    let g = Graph::from_edges(&[]).unwrap();
    let rot = Rotation::from_orders(&g, Vec::new()).unwrap();
    assert_eq!(trace_faces(&g, &rot).unwrap_err(), TraceError::Empty);
}

#[test]
fn foreign_rotation_is_rejected() {
    let (g, _) = cages::prism(4);
    let (_, rot) = cages::cycle(3);
    assert!(matches!(
        trace_faces(&g, &rot).unwrap_err(),
        TraceError::RotationMismatch { .. }
    ));
}

#[test]
fn accessors_reject_out_of_range_faces() {
    let (g, rot) = cages::cycle(3);
    let t = trace_faces(&g, &rot).unwrap();
    assert_eq!(
        t.face_vertices(FaceId(2)).unwrap_err(),
        TraceError::FaceOutOfRange { face: 2, faces: 2 }
    );
    assert_eq!(
        t.face_edges(FaceId(9)).unwrap_err(),
        TraceError::FaceOutOfRange { face: 9, faces: 2 }
    );
}

/// Embedder stub standing in for an external planarity stage that rejects
/// its input (e.g. a K5 bond list in a batch of cage records).
struct RejectingEmbedder;

impl Embedder for RejectingEmbedder {
    fn embed(&self, graph: &Graph) -> Result<Rotation, NonPlanar> {
        Err(NonPlanar {
            vertices: graph.num_vertices(),
            edges: graph.num_edges(),
        })
    }
}

#[test]
fn non_planar_verdict_propagates_and_batch_continues() {
    let mut k5 = Vec::new();
    for u in 0..5 {
        for v in (u + 1)..5 {
            k5.push((u, v));
        }
    }
    let k5 = Graph::from_edges(&k5).unwrap();
    let err = trace_with_embedder(&RejectingEmbedder, &k5).unwrap_err();
    assert_eq!(
        err,
        DualError::NonPlanar(NonPlanar {
            vertices: 5,
            edges: 10
        })
    );
    // The error is recoverable: the next record in the batch still traces.
    let (g, rot) = cages::dodecahedron();
    let t = trace_with_embedder(&crate::embed::PrecomputedEmbedder::new(rot), &g).unwrap();
    assert_eq!(t.face_count(), 12);
}

#[test]
fn tracing_is_deterministic() {
    let (g, rot) = cages::dodecahedron();
    assert_eq!(trace_faces(&g, &rot).unwrap(), trace_faces(&g, &rot).unwrap());
    let scrambled = cages::scrambled_rotation(&g, 42);
    assert_eq!(
        trace_faces(&g, &scrambled).unwrap(),
        trace_faces(&g, &scrambled).unwrap()
    );
}

proptest! {
    /// The dart partition works for ANY rotation system: boundary lengths
    /// sum to 2E, the dual carries exactly one edge per bond, and the Euler
    /// defect 2 - V + E - F is a nonnegative even number (twice the genus).
    #[test]
    fn invariants_hold_for_any_rotation(n in 3usize..12, seed in any::<u64>()) {
        let (g, _) = cages::prism(n);
        let rot = cages::scrambled_rotation(&g, seed);
        let t = trace_faces(&g, &rot).unwrap();
        prop_assert_eq!(t.dual_edge_count(), g.num_edges());
        prop_assert_eq!(t.face_sizes().iter().sum::<usize>(), 2 * g.num_edges());
        let max_faces = g.num_edges() + 2 - g.num_vertices();
        prop_assert!(t.face_count() <= max_faces);
        prop_assert_eq!((max_faces - t.face_count()) % 2, 0);
    }

    /// Drawing-derived rotations are planar, so Euler's formula is exact.
    #[test]
    fn planar_fixtures_satisfy_euler(n in 3usize..16) {
        let (g, rot) = cages::prism(n);
        let t = trace_faces(&g, &rot).unwrap();
        prop_assert_eq!(t.face_count(), g.num_edges() + 2 - g.num_vertices());

        let (g, rot) = cages::cycle(n);
        let t = trace_faces(&g, &rot).unwrap();
        prop_assert_eq!(t.face_count(), 2);
    }

    /// Same seed, same scramble, same trace.
    #[test]
    fn scrambled_traces_replay(seed in any::<u64>()) {
        let (g, _) = cages::dodecahedron();
        let a = trace_faces(&g, &cages::scrambled_rotation(&g, seed)).unwrap();
        let b = trace_faces(&g, &cages::scrambled_rotation(&g, seed)).unwrap();
        prop_assert_eq!(a, b);
    }
}
