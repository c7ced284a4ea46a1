//! 演示驱动模块
//!
//! 在固定样例上运行全部排序算法与三种遍历，返回结构化报告并写入日志；
//! 是否打印到终端由调用方决定。

use crate::config::SortConfig;
use crate::core::error::AlgoResult;
use crate::services::algorithm::{
    Bfs, Dfs, Graph, NarratingVisitor, NoopVisitor, SortAlgorithm, TraversalKind, TraversalVisitor,
};

/// 排序演示使用的样例序列
pub const SAMPLE_SEQUENCE: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];

/// 遍历演示使用的样例图的边
///
/// ```text
///     A
///    / \
///   B   C
///  / \   \
/// D   E---F
/// ```
pub const SAMPLE_EDGES: [(&str, &str); 6] = [
    ("A", "B"),
    ("A", "C"),
    ("B", "D"),
    ("B", "E"),
    ("C", "F"),
    ("E", "F"),
];

/// 遍历演示的起点
pub const SAMPLE_START: &str = "A";

pub fn sample_graph() -> Graph {
    SAMPLE_EDGES.iter().copied().collect()
}

/// 单个排序算法的演示结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortReport {
    pub algorithm: SortAlgorithm,
    pub input: Vec<i64>,
    pub output: Vec<i64>,
}

/// 单种遍历的演示结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalReport {
    pub kind: TraversalKind,
    pub start: String,
    pub order: Vec<String>,
}

/// 依次用十种算法排序 `input`
pub fn run_sorting(input: &[i64], config: &SortConfig) -> AlgoResult<Vec<SortReport>> {
    log::info!("Original array: {:?}", input);

    SortAlgorithm::ALL
        .iter()
        .map(|&algorithm| {
            let output = algorithm.sort_with(input, config)?;
            log::info!("{} sort: {:?}", algorithm, output);
            Ok(SortReport {
                algorithm,
                input: input.to_vec(),
                output,
            })
        })
        .collect()
}

/// 在 [`SAMPLE_SEQUENCE`] 上运行排序演示
pub fn run_sorting_demo(config: &SortConfig) -> AlgoResult<Vec<SortReport>> {
    run_sorting(&SAMPLE_SEQUENCE, config)
}

/// 从 `start` 出发依次运行 BFS、递归 DFS、迭代 DFS
///
/// `narrate` 为 true 时逐步记录访问过程
pub fn run_traversals(graph: &Graph, start: &str, narrate: bool) -> Vec<TraversalReport> {
    log::info!("\n{}", graph);

    let mut narrator = NarratingVisitor::new();
    let mut noop = NoopVisitor;
    let visitor: &mut dyn TraversalVisitor = if narrate { &mut narrator } else { &mut noop };

    let runs = [
        (TraversalKind::Bfs, Bfs::traverse_with(graph, start, &mut *visitor)),
        (
            TraversalKind::DfsRecursive,
            Dfs::traverse_recursive_with(graph, start, &mut *visitor),
        ),
        (
            TraversalKind::DfsIterative,
            Dfs::traverse_iterative_with(graph, start, &mut *visitor),
        ),
    ];

    runs.into_iter()
        .map(|(kind, order)| {
            log::info!("{} result: {:?}", kind, order);
            TraversalReport {
                kind,
                start: start.to_string(),
                order,
            }
        })
        .collect()
}

/// 在样例图上从 [`SAMPLE_START`] 运行遍历演示
pub fn run_traversal_demo(narrate: bool) -> Vec<TraversalReport> {
    run_traversals(&sample_graph(), SAMPLE_START, narrate)
}
