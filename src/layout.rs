//! Deterministic force-directed placement for sociogram nodes.
//!
//! The simulation itself is delegated to the `force_graph` crate; this
//! module only seeds the initial positions, runs a bounded number of ticks
//! and normalises the result to the unit square for the canvas.

use std::f32::consts::PI;

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed seed so repeated renders of the same graph are visually stable.
pub const LAYOUT_SEED: u64 = 42;

/// Bounded tick count: enough for small survey graphs to settle.
const ITERATIONS: usize = 200;
const TICK: f32 = 0.035;

/// Extra repulsion so the layout spreads out instead of clumping.
const SPREAD: f32 = 1.5;

const RING_RADIUS: f32 = 100.0;
const JITTER: f32 = 40.0;

/// Place `node_count` nodes connected by `edges` (index pairs), returning
/// one `(x, y)` per node in `[-1, 1]²`. Same inputs and seed give the same
/// coordinates.
pub fn spring_layout(node_count: usize, edges: &[(usize, usize)], seed: u64) -> Vec<(f64, f64)> {
    match node_count {
        0 => return Vec::new(),
        1 => return vec![(0.0, 0.0)],
        _ => {}
    }

    let mut sim: ForceGraph<usize, ()> = ForceGraph::new(SimulationParameters {
        force_charge: 120.0 * SPREAD,
        force_spring: 0.03,
        force_max: 60.0,
        node_speed: 900.0,
        damping_factor: 0.95,
    });

    // Seeded ring-with-jitter start; the seed is what makes the run repeatable.
    let mut rng = StdRng::seed_from_u64(seed);
    let mut handles = Vec::with_capacity(node_count);
    for i in 0..node_count {
        let angle = i as f32 * 2.0 * PI / node_count as f32;
        let x = RING_RADIUS * angle.cos() + rng.gen_range(-JITTER..JITTER);
        let y = RING_RADIUS * angle.sin() + rng.gen_range(-JITTER..JITTER);
        handles.push(sim.add_node(NodeData {
            x,
            y,
            mass: 10.0,
            is_anchor: false,
            user_data: i,
        }));
    }
    for &(origin, target) in edges {
        if origin < node_count && target < node_count && origin != target {
            sim.add_edge(handles[origin], handles[target], EdgeData::default());
        }
    }

    for _ in 0..ITERATIONS {
        sim.update(TICK);
    }

    let mut positions = vec![(0.0_f64, 0.0_f64); node_count];
    sim.visit_nodes(|node| {
        positions[node.data.user_data] = (node.x() as f64, node.y() as f64);
    });
    normalize(&mut positions);
    positions
}

/// Center the layout and scale it into `[-1, 1]²`, preserving aspect ratio.
fn normalize(positions: &mut [(f64, f64)]) {
    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in positions.iter() {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    let cx = (min_x + max_x) / 2.0;
    let cy = (min_y + max_y) / 2.0;
    let half = ((max_x - min_x) / 2.0).max((max_y - min_y) / 2.0);
    if half <= f64::EPSILON {
        for pos in positions.iter_mut() {
            *pos = (0.0, 0.0);
        }
        return;
    }
    for pos in positions.iter_mut() {
        *pos = ((pos.0 - cx) / half, (pos.1 - cy) / half);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_coordinates() {
        let edges = [(0, 1), (2, 0), (2, 1)];
        let a = spring_layout(3, &edges, LAYOUT_SEED);
        let b = spring_layout(3, &edges, LAYOUT_SEED);
        assert_eq!(a, b);
    }

    #[test]
    fn positions_stay_in_unit_square() {
        let edges = [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)];
        for (x, y) in spring_layout(5, &edges, LAYOUT_SEED) {
            assert!(x.is_finite() && y.is_finite());
            assert!((-1.0..=1.0).contains(&x), "x out of range: {x}");
            assert!((-1.0..=1.0).contains(&y), "y out of range: {y}");
        }
    }

    #[test]
    fn nodes_do_not_collapse_onto_one_point() {
        let a = spring_layout(4, &[(0, 1)], LAYOUT_SEED);
        let distinct = a
            .iter()
            .any(|&(x, y)| (x - a[0].0).abs() > 1e-6 || (y - a[0].1).abs() > 1e-6);
        assert!(distinct);
    }

    #[test]
    fn trivial_graphs_have_trivial_layouts() {
        assert!(spring_layout(0, &[], LAYOUT_SEED).is_empty());
        assert_eq!(spring_layout(1, &[], LAYOUT_SEED), vec![(0.0, 0.0)]);
    }
}
