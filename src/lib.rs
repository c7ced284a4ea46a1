//! sortgraph - classic sorting algorithms and undirected graph traversals
//!
//! Ten sorting algorithms over integer-keyed sequences, plus breadth-first
//! and depth-first traversal of string-labelled undirected graphs with a
//! deterministic visiting order.

pub mod config;
pub mod core;
pub mod services;
pub mod utils;

pub use crate::config::{Config, LogConfig, SortConfig};
pub use crate::core::{AlgoError, AlgoResult};
pub use crate::services::algorithm::{
    Bfs, BucketSizing, Dfs, Graph, SortAlgorithm, SortStats, SortingAlgorithms, TraversalKind,
    TraversalVisitor,
};
