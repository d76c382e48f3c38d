use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};

use crate::extract::Extraction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Center,
    Leaf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindNode {
    pub label: String,
    pub kind: NodeKind,
}

/// A star-shaped mind map: one center topic, one leaf per keyword, one
/// undirected edge per leaf. Leaves are never connected to each other.
#[derive(Debug, Clone)]
pub struct MindMap {
    graph: UnGraph<MindNode, ()>,
    center: NodeIndex,
}

impl MindMap {
    #[must_use]
    pub fn new(main_topic: impl Into<String>, keywords: &[String]) -> Self {
        let mut graph = UnGraph::new_undirected();

        let center = graph.add_node(MindNode {
            label: main_topic.into(),
            kind: NodeKind::Center,
        });

        for keyword in keywords {
            let leaf = graph.add_node(MindNode {
                label: keyword.clone(),
                kind: NodeKind::Leaf,
            });
            graph.add_edge(center, leaf, ());
        }

        Self { graph, center }
    }

    #[must_use]
    pub fn from_extraction(extraction: &Extraction) -> Self {
        Self::new(extraction.main_topic.clone(), &extraction.keyword_labels())
    }

    #[must_use]
    pub fn center(&self) -> &MindNode {
        &self.graph[self.center]
    }

    #[must_use]
    pub fn center_index(&self) -> usize {
        self.center.index()
    }

    pub fn leaves(&self) -> impl Iterator<Item = &MindNode> {
        self.graph
            .node_weights()
            .filter(|node| node.kind == NodeKind::Leaf)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in index order, matching the indices `edges` refers to.
    #[must_use]
    pub fn nodes(&self) -> Vec<&MindNode> {
        self.graph.node_weights().collect()
    }

    #[must_use]
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.graph
            .edge_indices()
            .filter_map(|edge| self.graph.edge_endpoints(edge))
            .map(|(a, b)| (a.index(), b.index()))
            .collect()
    }

    /// The underlying graph, for callers that need petgraph algorithms.
    #[must_use]
    pub fn graph(&self) -> &UnGraph<MindNode, ()> {
        &self.graph
    }
}
