//! 算法模块
//!
//! 包含排序算法与无向图遍历算法实现，两部分互不依赖

pub mod bfs;
pub mod dfs;
pub mod graph;
pub mod sorting;
pub mod visitor;

// 重新导出常用算法结构体
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use graph::Graph;
pub use sorting::{
    BucketSizing, IntegerKey, SortAlgorithm, SortStats, SortingAlgorithms, DEFAULT_BUCKET_COUNT,
    MAX_BUCKET_COUNT,
};
pub use visitor::{Frontier, NarratingVisitor, NoopVisitor, TraversalKind, TraversalVisitor};
