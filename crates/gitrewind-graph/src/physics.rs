//! Force passes of the layout simulation.
//!
//! One tick applies, in order: repulsion, link springs, centering and
//! integration. [`step`] is the pure form over owned copies; the in-place
//! passes are what [`ForceSimulation`](crate::ForceSimulation) drives.

use std::collections::HashMap;

use gitrewind_model::{GraphEdge, SimulationNode, Vec3};

use crate::config::SimulationConfig;

/// An edge resolved to node indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

/// Resolves edges to node indices, dropping edges with unknown endpoints.
///
/// When ids repeat, the last node with an id wins.
pub fn resolve_links(nodes: &[SimulationNode], edges: &[GraphEdge]) -> Vec<Link> {
    let index: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.node.id.as_str(), i))
        .collect();

    edges
        .iter()
        .filter_map(|edge| {
            Some(Link {
                source: *index.get(edge.source.as_str())?,
                target: *index.get(edge.target.as_str())?,
                weight: edge.weight,
            })
        })
        .collect()
}

/// Advances a copy of `nodes` by one tick.
pub fn step(
    nodes: &[SimulationNode],
    edges: &[GraphEdge],
    config: &SimulationConfig,
) -> Vec<SimulationNode> {
    let mut next = nodes.to_vec();
    let links = resolve_links(&next, edges);
    tick_in_place(&mut next, &links, config);
    next
}

/// Applies all four passes to `nodes` in place.
pub fn tick_in_place(nodes: &mut [SimulationNode], links: &[Link], config: &SimulationConfig) {
    apply_repulsion(nodes, config);
    apply_links(nodes, links, config);
    apply_center(nodes, config);
    integrate(nodes, config);
}

/// Pushes apart every pair closer than `min_distance` with inverse-square
/// force. Coincident nodes are treated as one unit apart.
pub fn apply_repulsion(nodes: &mut [SimulationNode], config: &SimulationConfig) {
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let delta = nodes[j].position - nodes[i].position;
            let dist = nonzero(delta.length());
            if dist < config.min_distance {
                let force = config.repulsion_force / (dist * dist);
                let push = delta.scale(force / dist);
                nodes[i].velocity -= push;
                nodes[j].velocity += push;
            }
        }
    }
}

/// Hooke springs toward `rest_length`, scaled by edge weight.
pub fn apply_links(nodes: &mut [SimulationNode], links: &[Link], config: &SimulationConfig) {
    for link in links {
        let delta = nodes[link.target].position - nodes[link.source].position;
        let dist = nonzero(delta.length());
        let force = (dist - config.rest_length) * config.link_force * link.weight;
        let pull = delta.scale(force / dist);
        nodes[link.source].velocity += pull;
        nodes[link.target].velocity -= pull;
    }
}

/// Pulls every node except the user toward the origin.
pub fn apply_center(nodes: &mut [SimulationNode], config: &SimulationConfig) {
    for node in nodes.iter_mut().filter(|n| !n.is_user()) {
        node.velocity -= node.position.scale(config.center_force);
    }
}

/// Damps velocity, then moves each node by it.
pub fn integrate(nodes: &mut [SimulationNode], config: &SimulationConfig) {
    for node in nodes {
        node.velocity = node.velocity.scale(config.damping);
        node.position += node.velocity;
    }
}

fn nonzero(dist: f64) -> f64 {
    if dist == 0.0 {
        1.0
    } else {
        dist
    }
}
