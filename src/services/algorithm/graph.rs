use std::collections::HashMap;
use std::fmt;

use crate::services::algorithm::bfs::Bfs;
use crate::services::algorithm::dfs::Dfs;

/// Undirected graph over string labels, stored as an adjacency list.
///
/// Edges are not deduplicated: adding the same edge twice lists the neighbor
/// twice, and a self-loop lists the vertex twice in its own list. Traversals
/// are unaffected because they track visited vertices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency_list: HashMap<String, Vec<String>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex. No-op if the label already exists.
    pub fn add_vertex(&mut self, vertex: &str) {
        if !self.adjacency_list.contains_key(vertex) {
            self.adjacency_list.insert(vertex.to_string(), Vec::new());
        }
    }

    /// Adds an undirected edge, creating either endpoint if missing.
    /// `b` is appended to `a`'s list, then `a` to `b`'s list.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        self.adjacency_list
            .entry(a.to_string())
            .or_default()
            .push(b.to_string());
        self.adjacency_list
            .entry(b.to_string())
            .or_default()
            .push(a.to_string());
    }

    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.adjacency_list.contains_key(vertex)
    }

    /// The graph's own copy of `vertex`, borrowed for the graph's lifetime.
    pub(crate) fn vertex(&self, vertex: &str) -> Option<&str> {
        self.adjacency_list
            .get_key_value(vertex)
            .map(|(label, _)| label.as_str())
    }

    /// Neighbors in insertion order, or `None` for an unknown vertex.
    pub fn neighbors(&self, vertex: &str) -> Option<&[String]> {
        self.adjacency_list.get(vertex).map(Vec::as_slice)
    }

    /// Neighbors in ascending lexicographic order. Every traversal expands
    /// vertices through this, which makes the visiting order independent of
    /// the order edges were added. Empty for an unknown vertex.
    pub fn sorted_neighbors(&self, vertex: &str) -> Vec<&str> {
        let mut neighbors: Vec<&str> = self
            .adjacency_list
            .get(vertex)
            .map(|list| list.iter().map(String::as_str).collect())
            .unwrap_or_default();
        neighbors.sort_unstable();
        neighbors
    }

    /// All vertex labels in ascending order.
    pub fn vertices(&self) -> Vec<&str> {
        let mut vertices: Vec<&str> = self.adjacency_list.keys().map(String::as_str).collect();
        vertices.sort_unstable();
        vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency_list.len()
    }

    /// Number of `add_edge` calls reflected in the adjacency lists,
    /// duplicates and self-loops included.
    pub fn edge_count(&self) -> usize {
        self.adjacency_list.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency_list.is_empty()
    }

    /// Breadth-first visiting order from `start`, empty if `start` is unknown.
    pub fn bfs(&self, start: &str) -> Vec<String> {
        Bfs::traverse(self, start)
    }

    /// Recursive depth-first visiting order from `start`.
    pub fn dfs_recursive(&self, start: &str) -> Vec<String> {
        Dfs::traverse_recursive(self, start)
    }

    /// Stack-based depth-first visiting order from `start`.
    pub fn dfs_iterative(&self, start: &str) -> Vec<String> {
        Dfs::traverse_iterative(self, start)
    }
}

impl<A: AsRef<str>, B: AsRef<str>> Extend<(A, B)> for Graph {
    fn extend<I: IntoIterator<Item = (A, B)>>(&mut self, edges: I) {
        for (a, b) in edges {
            self.add_edge(a.as_ref(), b.as_ref());
        }
    }
}

impl<A: AsRef<str>, B: AsRef<str>> FromIterator<(A, B)> for Graph {
    fn from_iter<I: IntoIterator<Item = (A, B)>>(edges: I) -> Self {
        let mut graph = Graph::new();
        graph.extend(edges);
        graph
    }
}

/// Renders one `X -> [n1, n2]` line per vertex, both levels sorted.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph Structure:")?;
        for vertex in self.vertices() {
            writeln!(f, "{} -> [{}]", vertex, self.sorted_neighbors(vertex).join(", "))?;
        }
        Ok(())
    }
}
