//! Stateful force simulation driven tick by tick.

use gitrewind_model::{GraphData, GraphEdge, SeededRandom, SimulationNode, Vec3};
use tracing::trace;

use crate::config::SimulationConfig;
use crate::physics::{resolve_links, tick_in_place, Link};

/// Stream salt for initial node placement.
pub const LAYOUT_STREAM: &str = "layout";

/// Owns node and edge state between ticks.
///
/// A caller may stop ticking at any point and resume later; state is only
/// ever changed by [`ForceSimulation::set_data`] and
/// [`ForceSimulation::tick`].
#[derive(Debug, Clone)]
pub struct ForceSimulation {
    config: SimulationConfig,
    rng: SeededRandom,
    nodes: Vec<SimulationNode>,
    edges: Vec<GraphEdge>,
    links: Vec<Link>,
    ticks: u64,
}

impl ForceSimulation {
    pub fn new(seed: u32, config: SimulationConfig) -> Self {
        Self {
            config,
            rng: SeededRandom::for_stream(seed, LAYOUT_STREAM),
            nodes: Vec::new(),
            edges: Vec::new(),
            links: Vec::new(),
            ticks: 0,
        }
    }

    /// Loads a graph, placing nodes without a position at random inside a
    /// cube of side `initial_spread`. The user node starts at the origin.
    pub fn set_data(&mut self, data: GraphData) {
        let spread = self.config.initial_spread;
        let rng = &mut self.rng;

        self.nodes = data
            .nodes
            .into_iter()
            .map(|node| {
                let position = node.position.unwrap_or_else(|| {
                    let x = (rng.next_f64() - 0.5) * spread;
                    let y = (rng.next_f64() - 0.5) * spread;
                    let z = (rng.next_f64() - 0.5) * spread;
                    Vec3::new(x, y, z)
                });
                SimulationNode {
                    node,
                    position,
                    velocity: Vec3::ZERO,
                }
            })
            .collect();

        if let Some(user) = self.nodes.iter_mut().find(|n| n.is_user()) {
            user.position = Vec3::ZERO;
        }

        self.links = resolve_links(&self.nodes, &data.edges);
        self.edges = data.edges;
        self.ticks = 0;
    }

    /// Advances the layout by one tick and returns the nodes.
    pub fn tick(&mut self) -> &[SimulationNode] {
        tick_in_place(&mut self.nodes, &self.links, &self.config);
        self.ticks += 1;
        &self.nodes
    }

    /// Runs `ticks` ticks.
    pub fn run(&mut self, ticks: usize) -> &[SimulationNode] {
        for _ in 0..ticks {
            tick_in_place(&mut self.nodes, &self.links, &self.config);
        }
        self.ticks += ticks as u64;
        trace!(
            ticks,
            total = self.ticks,
            nodes = self.nodes.len(),
            "ran force simulation"
        );
        &self.nodes
    }

    pub fn nodes(&self) -> &[SimulationNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Ticks run since the last [`ForceSimulation::set_data`].
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// The current layout as graph data with every position filled in.
    pub fn positioned_graph(&self) -> GraphData {
        GraphData {
            nodes: self
                .nodes
                .iter()
                .map(|n| {
                    let mut node = n.node.clone();
                    node.position = Some(n.position);
                    node
                })
                .collect(),
            edges: self.edges.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitrewind_model::{GraphNode, NodeKind};
    use pretty_assertions::assert_eq;

    fn node(id: &str, kind: NodeKind, position: Option<Vec3>) -> GraphNode {
        GraphNode {
            id: id.to_string(),
            kind,
            label: id.to_string(),
            size: 1.0,
            color: "#000000".to_string(),
            avatar_url: None,
            position,
        }
    }

    fn star(n: usize) -> GraphData {
        let mut nodes = vec![node("me", NodeKind::User, None)];
        let mut edges = Vec::new();
        for i in 0..n {
            let id = format!("c{}", i);
            edges.push(GraphEdge {
                source: "me".to_string(),
                target: id.clone(),
                weight: 1.0,
            });
            nodes.push(node(&id, NodeKind::Collaborator, None));
        }
        GraphData { nodes, edges }
    }

    #[test]
    fn test_user_starts_at_origin() {
        let mut sim = ForceSimulation::new(42, SimulationConfig::default());
        let mut data = star(3);
        data.nodes[0].position = Some(Vec3::new(5.0, 5.0, 5.0));
        sim.set_data(data);
        assert_eq!(sim.nodes()[0].position, Vec3::ZERO);
        assert!(sim.nodes().iter().all(|n| n.velocity == Vec3::ZERO));
    }

    #[test]
    fn test_random_start_inside_cube() {
        let mut sim = ForceSimulation::new(7, SimulationConfig::default());
        sim.set_data(star(40));
        for n in &sim.nodes()[1..] {
            for v in [n.position.x, n.position.y, n.position.z] {
                assert!((-100.0..100.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_explicit_positions_kept() {
        let mut sim = ForceSimulation::new(7, SimulationConfig::default());
        let mut data = star(2);
        data.nodes[2].position = Some(Vec3::new(12.0, -3.0, 4.5));
        sim.set_data(data);
        assert_eq!(sim.nodes()[2].position, Vec3::new(12.0, -3.0, 4.5));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let run = |seed| {
            let mut sim = ForceSimulation::new(seed, SimulationConfig::default());
            sim.set_data(star(10));
            sim.run(50);
            sim.positioned_graph()
        };
        assert_eq!(run(3), run(3));
        assert_ne!(run(3), run(4));
    }

    #[test]
    fn test_tick_and_run_agree() {
        let mut ticked = ForceSimulation::new(11, SimulationConfig::default());
        ticked.set_data(star(5));
        for _ in 0..20 {
            ticked.tick();
        }

        let mut ran = ForceSimulation::new(11, SimulationConfig::default());
        ran.set_data(star(5));
        ran.run(20);

        assert_eq!(ticked.nodes(), ran.nodes());
        assert_eq!(ticked.tick_count(), 20);
        assert_eq!(ran.tick_count(), 20);
    }

    #[test]
    fn test_positioned_graph_fills_positions() {
        let mut sim = ForceSimulation::new(1, SimulationConfig::default());
        sim.set_data(star(4));
        sim.run(5);
        let graph = sim.positioned_graph();
        assert_eq!(graph.nodes.len(), 5);
        assert_eq!(graph.edges.len(), 4);
        for (graph_node, sim_node) in graph.nodes.iter().zip(sim.nodes()) {
            assert_eq!(graph_node.position, Some(sim_node.position));
        }
    }

    #[test]
    fn test_empty_graph_ticks() {
        let mut sim = ForceSimulation::new(1, SimulationConfig::default());
        sim.set_data(GraphData::default());
        assert!(sim.tick().is_empty());
        assert!(sim.edges().is_empty());
    }
}
