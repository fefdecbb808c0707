//! Graph construction from the activity model.

use std::collections::HashSet;

use gitrewind_model::{
    hsl_to_hex, ActivityModel, GraphData, GraphEdge, GraphNode, Hsl, NodeKind, SeededRandom,
    UnifiedParameters, MAX_GRAPH_COLLABORATORS,
};
use tracing::debug;

/// Stream salt for placeholder nodes.
pub const PLACEHOLDER_STREAM: &str = "placeholders";

/// Stream salt for decorative cross-links.
pub const CROSS_LINK_STREAM: &str = "cross-links";

pub const USER_NODE_SIZE: f64 = 2.0;
pub const MIN_PLACEHOLDERS: usize = 5;
pub const MAX_PLACEHOLDERS: usize = 25;

/// Draws above this sprout a cross-link, so about 30% of non-user nodes do.
pub const CROSS_LINK_THRESHOLD: f64 = 0.7;
pub const CROSS_LINK_WEIGHT: f64 = 0.3;

/// Builds the collaboration graph.
///
/// The user node comes first, followed by up to
/// [`MAX_GRAPH_COLLABORATORS`] collaborators. A year without collaborators
/// gets seeded placeholder nodes instead so the graph is never empty. Every
/// node is linked to the user, and a few seeded cross-links join non-user
/// nodes.
pub fn build_graph(model: &ActivityModel, params: &UnifiedParameters) -> GraphData {
    let login = &model.user.login;
    let mut nodes = vec![GraphNode {
        id: login.clone(),
        kind: NodeKind::User,
        label: login.clone(),
        size: USER_NODE_SIZE,
        color: hsl_to_hex(&params.colors.primary),
        avatar_url: non_empty(&model.user.avatar_url),
        position: None,
    }];

    let collaborator_color = hsl_to_hex(&params.colors.secondary);
    let mut seen: HashSet<&str> = HashSet::from([login.as_str()]);
    for collab in model.collaborators.iter().take(MAX_GRAPH_COLLABORATORS) {
        if !seen.insert(collab.login.as_str()) {
            continue;
        }
        nodes.push(GraphNode {
            id: collab.login.clone(),
            kind: NodeKind::Collaborator,
            label: collab.login.clone(),
            size: 0.5 + (collab.interactions as f64 / 10.0).min(1.5),
            color: collaborator_color.clone(),
            avatar_url: non_empty(&collab.avatar_url),
            position: None,
        });
    }

    let placeholders = nodes.len() == 1;
    if placeholders {
        push_placeholders(&mut nodes, login, params);
    }

    let edges = build_edges(&nodes, params.seed);

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        placeholders,
        "built collaboration graph"
    );

    GraphData { nodes, edges }
}

/// Number of placeholder nodes for an intensity: 5 to 25.
pub fn placeholder_count(intensity: f64) -> usize {
    let scaled = (intensity * 20.0).ceil();
    let scaled = if scaled.is_nan() { 0.0 } else { scaled.max(0.0) };
    (scaled as usize + MIN_PLACEHOLDERS).min(MAX_PLACEHOLDERS)
}

/// Placeholder ids are `node-N`, skipping any that equals the user's login.
fn push_placeholders(nodes: &mut Vec<GraphNode>, login: &str, params: &UnifiedParameters) {
    let mut rng = SeededRandom::for_stream(params.seed, PLACEHOLDER_STREAM);
    let base_hue = params.colors.primary.h;
    let ids = (0..)
        .map(|n| format!("node-{}", n))
        .filter(|id| id.as_str() != login);

    for (i, id) in (0..placeholder_count(params.intensity)).zip(ids) {
        let hue = (base_hue + rng.next_f64() * 60.0 - 30.0 + 360.0).rem_euclid(360.0);
        let size = 0.3 + rng.next_f64() * 0.7;
        nodes.push(GraphNode {
            id,
            kind: NodeKind::Collaborator,
            label: format!("Activity {}", i + 1),
            size,
            color: hsl_to_hex(&Hsl::new(hue, 60.0, 50.0)),
            avatar_url: None,
            position: None,
        });
    }
}

/// Star edges from the user weighted by node size, then seeded cross-links.
fn build_edges(nodes: &[GraphNode], seed: u32) -> Vec<GraphEdge> {
    let Some((user, others)) = nodes.split_first() else {
        return Vec::new();
    };

    let mut edges: Vec<GraphEdge> = others
        .iter()
        .map(|node| GraphEdge {
            source: user.id.clone(),
            target: node.id.clone(),
            weight: node.size,
        })
        .collect();

    let mut rng = SeededRandom::for_stream(seed, CROSS_LINK_STREAM);
    for i in 1..nodes.len() {
        if rng.next_f64() > CROSS_LINK_THRESHOLD {
            let target = 1 + rng.index(nodes.len() - 1);
            if target != i {
                edges.push(GraphEdge {
                    source: nodes[i].id.clone(),
                    target: nodes[target].id.clone(),
                    weight: CROSS_LINK_WEIGHT,
                });
            }
        }
    }

    edges
}

fn non_empty(url: &str) -> Option<String> {
    (!url.is_empty()).then(|| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitrewind_model::validate_graph;
    use gitrewind_params::compute_parameters;
    use pretty_assertions::assert_eq;

    fn graph_for(model: &ActivityModel) -> GraphData {
        build_graph(model, &compute_parameters(model))
    }

    fn team_model() -> ActivityModel {
        ActivityModel::builder("octocat", 2024)
            .commits(600)
            .language("Go", "#00ADD8", 80.0)
            .language("Rust", "#dea584", 20.0)
            .collaborator("hubot", 3)
            .collaborator("monalisa", 40)
            .collaborator("defunkt", 10)
            .build()
    }

    #[test]
    fn test_user_node_first() {
        let model = team_model();
        let params = compute_parameters(&model);
        let graph = build_graph(&model, &params);

        let user = &graph.nodes[0];
        assert_eq!(user.kind, NodeKind::User);
        assert_eq!(user.id, "octocat");
        assert_eq!(user.size, USER_NODE_SIZE);
        assert_eq!(user.color, hsl_to_hex(&params.colors.primary));
        assert_eq!(
            user.avatar_url.as_deref(),
            Some("https://avatars.example.com/octocat")
        );
        assert_eq!(graph.user_node(), Some(user));
    }

    #[test]
    fn test_collaborator_sizes() {
        let graph = graph_for(&team_model());
        let sizes: Vec<f64> = graph.nodes[1..].iter().map(|n| n.size).collect();
        assert_eq!(sizes, vec![0.8, 2.0, 1.5]);
        assert!(graph.nodes[1..]
            .iter()
            .all(|n| n.kind == NodeKind::Collaborator));
    }

    #[test]
    fn test_star_edges_weighted_by_size() {
        let graph = graph_for(&team_model());
        for node in &graph.nodes[1..] {
            let edge = graph
                .edges
                .iter()
                .find(|e| e.source == "octocat" && e.target == node.id)
                .unwrap();
            assert_eq!(edge.weight, node.size);
        }
    }

    #[test]
    fn test_cross_links_join_non_user_nodes() {
        let graph = graph_for(&team_model());
        let star = graph.nodes.len() - 1;
        for edge in &graph.edges[star..] {
            assert_ne!(edge.source, "octocat");
            assert_ne!(edge.target, "octocat");
            assert_ne!(edge.source, edge.target);
            assert_eq!(edge.weight, CROSS_LINK_WEIGHT);
        }
    }

    #[test]
    fn test_collaborators_truncated() {
        let mut builder = ActivityModel::builder("octocat", 2024);
        for i in 0..80 {
            builder = builder.collaborator(format!("user{}", i), 5);
        }
        let graph = graph_for(&builder.build());
        assert_eq!(graph.nodes.len(), MAX_GRAPH_COLLABORATORS + 1);
        assert!(validate_graph(&graph).is_ok());
    }

    #[test]
    fn test_duplicate_logins_are_skipped() {
        let model = ActivityModel::builder("octocat", 2024)
            .collaborator("octocat", 9)
            .collaborator("hubot", 1)
            .collaborator("hubot", 2)
            .build();
        let graph = graph_for(&model);
        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["octocat", "hubot"]);
        assert!(validate_graph(&graph).is_ok());
    }

    #[test]
    fn test_placeholders_when_alone() {
        let model = ActivityModel::builder("solo", 2024).commits(0).build();
        let params = compute_parameters(&model);
        let graph = build_graph(&model, &params);

        assert_eq!(params.intensity, 0.0);
        assert_eq!(graph.nodes.len(), 1 + MIN_PLACEHOLDERS);
        assert_eq!(graph.nodes[1].id, "node-0");
        assert_eq!(graph.nodes[1].label, "Activity 1");
        for node in &graph.nodes[1..] {
            assert!(node.size >= 0.3 && node.size < 1.0);
            assert!(node.avatar_url.is_none());
        }
        assert!(validate_graph(&graph).is_ok());
    }

    #[test]
    fn test_placeholder_ids_avoid_user_login() {
        let model = ActivityModel::builder("node-0", 2024).commits(10).build();
        let graph = graph_for(&model);

        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(&ids[..4], ["node-0", "node-1", "node-2", "node-3"]);
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        assert_eq!(graph.nodes[1].label, "Activity 1");

        let result = validate_graph(&graph);
        assert!(result.is_ok(), "{:?}", result.errors);
        for node in &graph.nodes[1..] {
            assert!(graph
                .edges
                .iter()
                .any(|e| e.source == "node-0" && e.target == node.id));
        }
    }

    #[test]
    fn test_placeholder_count() {
        assert_eq!(placeholder_count(0.0), 5);
        assert_eq!(placeholder_count(0.01), 6);
        assert_eq!(placeholder_count(0.5), 15);
        assert_eq!(placeholder_count(1.0), 25);
        assert_eq!(placeholder_count(3.0), 25);
        assert_eq!(placeholder_count(-1.0), 5);
        assert_eq!(placeholder_count(f64::NAN), 5);
    }

    #[test]
    fn test_build_is_deterministic() {
        let model = ActivityModel::builder("solo", 2024).commits(900).build();
        assert_eq!(graph_for(&model), graph_for(&model));
    }

    #[test]
    fn test_graphs_are_well_formed() {
        for login in ["a", "b", "c", "d", "e", "f", "g", "h"] {
            let graph = graph_for(&ActivityModel::builder(login, 2024).commits(3000).build());
            let result = validate_graph(&graph);
            assert!(result.is_ok(), "{}: {:?}", login, result.errors);
        }
        assert!(validate_graph(&graph_for(&team_model())).is_ok());
    }
}
