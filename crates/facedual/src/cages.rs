//! Canonical cage topologies with ready-made embeddings.
//!
//! Purpose
//! - Provide small deterministic (graph, rotation) fixtures for tests,
//!   benches, and downstream experiments: cycles, prisms, the tetrahedron,
//!   the dodecahedral C20 cage, and a bridged pair of triangles.
//! - Each fixture is built from a concentric (Schlegel-style) straight-line
//!   drawing and run through the angular-order embedder, so the rotation
//!   system is derived the same way a real drawing pipeline would derive it.
//! - `scrambled_rotation` draws a seeded random rotation system of *some*
//!   orientable embedding of the graph; its genus is arbitrary, which is
//!   exactly what the rotation-independent invariants are tested against.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::embed::{rotation_from_drawing, Rotation};
use crate::graph::Graph;

type Vec2 = Vector2<f64>;

fn ring(count: usize, radius: f64, phase: f64) -> impl Iterator<Item = Vec2> {
    (0..count).map(move |i| {
        let a = std::f64::consts::TAU * i as f64 / count as f64 + phase;
        Vec2::new(radius * a.cos(), radius * a.sin())
    })
}

fn cage(edges: &[(usize, usize)], positions: Vec<Vec2>) -> (Graph, Rotation) {
    let graph = Graph::from_edges(edges).expect("fixture edge list is simple");
    let rotation =
        rotation_from_drawing(&graph, &positions).expect("fixture drawing covers all vertices");
    (graph, rotation)
}

/// Simple cycle on `n >= 3` vertices: two faces, both of size `n`.
pub fn cycle(n: usize) -> (Graph, Rotation) {
    assert!(n >= 3, "a cycle needs at least 3 vertices");
    let edges: Vec<_> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    cage(&edges, ring(n, 1.0, 0.0).collect())
}

/// K4 drawn with one vertex inside the triangle: four triangular faces.
pub fn tetrahedron() -> (Graph, Rotation) {
    let edges = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
    let positions = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(4.0, 0.0),
        Vec2::new(2.0, 3.4),
        Vec2::new(2.0, 1.2),
    ];
    cage(&edges, positions)
}

/// n-gonal prism (`n >= 3`): 3-regular, two n-gon faces and n quadrilaterals.
pub fn prism(n: usize) -> (Graph, Rotation) {
    assert!(n >= 3, "a prism needs at least 3 vertices per ring");
    let mut edges = Vec::with_capacity(3 * n);
    for i in 0..n {
        edges.push((i, (i + 1) % n));
        edges.push((n + i, n + (i + 1) % n));
        edges.push((i, n + i));
    }
    let positions: Vec<Vec2> = ring(n, 1.0, 0.0).chain(ring(n, 2.0, 0.0)).collect();
    cage(&edges, positions)
}

/// The dodecahedral C20 cage: 20 vertices of degree 3, 30 bonds, 12 pentagon
/// rings. Drawn as four concentric 5-rings; the outer two rings are rotated
/// half a step so the inter-ring bonds stay crossing-free.
pub fn dodecahedron() -> (Graph, Rotation) {
    let mut edges = Vec::with_capacity(30);
    for i in 0..5 {
        edges.push((i, (i + 1) % 5)); // inner pentagon
    }
    for i in 0..5 {
        edges.push((i, 5 + i)); // spokes inner -> second ring
    }
    for i in 0..5 {
        edges.push((5 + i, 10 + i)); // second ring zigzags to third
        edges.push((5 + i, 10 + (i + 4) % 5));
    }
    for i in 0..5 {
        edges.push((10 + i, 15 + i)); // spokes third -> outer ring
    }
    for i in 0..5 {
        edges.push((15 + i, 15 + (i + 1) % 5)); // outer pentagon
    }
    let half_step = std::f64::consts::PI / 5.0;
    let positions: Vec<Vec2> = ring(5, 1.0, 0.0)
        .chain(ring(5, 2.0, 0.0))
        .chain(ring(5, 3.0, half_step))
        .chain(ring(5, 4.0, half_step))
        .collect();
    cage(&edges, positions)
}

/// Two triangles joined by a single bridge bond. Connected, but the bridge
/// is walked twice by the outer face, so the dual carries one self-loop.
pub fn two_triangles_bridged() -> (Graph, Rotation) {
    let edges = [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (2, 3)];
    let positions = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.5, 1.0),
        Vec2::new(2.5, 1.0),
        Vec2::new(3.0, 0.0),
        Vec2::new(2.0, 0.0),
    ];
    cage(&edges, positions)
}

/// Seeded random rotation system for `graph`: every vertex's incident edges
/// in a uniformly shuffled cyclic order. This is a valid rotation system of
/// some orientable embedding, planar or not; reusing a seed replays the same
/// draw.
pub fn scrambled_rotation(graph: &Graph, seed: u64) -> Rotation {
    let mut rng = StdRng::seed_from_u64(seed);
    let orders: Vec<Vec<usize>> = (0..graph.num_vertices())
        .map(|v| {
            let mut order = graph.incident(v).to_vec();
            order.shuffle(&mut rng);
            order
        })
        .collect();
    Rotation::from_orders(graph, orders).expect("shuffled incident lists stay permutations")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_have_expected_shape() {
        let (g, _) = cycle(6);
        assert_eq!((g.num_vertices(), g.num_edges()), (6, 6));
        let (g, _) = tetrahedron();
        assert_eq!((g.num_vertices(), g.num_edges()), (4, 6));
        let (g, _) = prism(5);
        assert_eq!((g.num_vertices(), g.num_edges()), (10, 15));
        let (g, _) = two_triangles_bridged();
        assert_eq!((g.num_vertices(), g.num_edges()), (6, 7));
    }

    #[test]
    fn dodecahedron_is_cubic() {
        let (g, _) = dodecahedron();
        assert_eq!(g.num_vertices(), 20);
        assert_eq!(g.num_edges(), 30);
        assert!((0..20).all(|v| g.degree(v) == 3));
        assert!(g.is_connected());
    }

    #[test]
    fn scramble_replays_with_same_seed() {
        let (g, _) = dodecahedron();
        let a = scrambled_rotation(&g, 7);
        let b = scrambled_rotation(&g, 7);
        let c = scrambled_rotation(&g, 8);
        for v in 0..g.num_vertices() {
            assert_eq!(a.order_at(v), b.order_at(v));
        }
        assert!((0..g.num_vertices()).any(|v| a.order_at(v) != c.order_at(v)));
    }
}
