//! BFS算法模块
//!
//! 广度优先遍历：起点入队时即标记已访问，邻居按字典序入队

use std::collections::{HashSet, VecDeque};

use crate::services::algorithm::graph::Graph;
use crate::services::algorithm::visitor::{Frontier, NoopVisitor, TraversalKind, TraversalVisitor};

/// BFS算法结构体
pub struct Bfs;

impl Bfs {
    /// 使用BFS遍历图，返回从起点可达的所有节点
    ///
    /// 起点不存在时返回空序列
    pub fn traverse(graph: &Graph, start: &str) -> Vec<String> {
        Self::traverse_with(graph, start, &mut NoopVisitor)
    }

    /// 同 [`Bfs::traverse`]，每访问一个节点通知一次观察者
    pub fn traverse_with<V: TraversalVisitor + ?Sized>(
        graph: &Graph,
        start: &str,
        visitor: &mut V,
    ) -> Vec<String> {
        let Some(start) = graph.vertex(start) else {
            return Vec::new();
        };

        visitor.on_start(TraversalKind::Bfs, start);

        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        let mut result: Vec<String> = Vec::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            result.push(current.to_string());
            visitor.on_visit(current, Frontier::Queue(&queue), &result);

            for neighbor in graph.sorted_neighbors(current) {
                // 入队时标记，避免重复入队
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        visitor.on_finish(TraversalKind::Bfs, &result);
        result
    }
}
