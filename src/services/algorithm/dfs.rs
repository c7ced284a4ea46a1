//! DFS算法模块
//!
//! 包含递归与迭代两种深度优先遍历，邻居均按字典序展开

use std::collections::HashSet;

use crate::services::algorithm::graph::Graph;
use crate::services::algorithm::visitor::{Frontier, NoopVisitor, TraversalKind, TraversalVisitor};

/// DFS算法结构体
pub struct Dfs;

impl Dfs {
    /// 递归DFS遍历图，返回从起点可达的所有节点
    ///
    /// 递归深度等于搜索树的深度，最坏情况下与可达节点数相同；
    /// 对很长的链状图可能耗尽线程栈，此时应使用 [`Dfs::traverse_iterative`]。
    pub fn traverse_recursive(graph: &Graph, start: &str) -> Vec<String> {
        Self::traverse_recursive_with(graph, start, &mut NoopVisitor)
    }

    pub fn traverse_recursive_with<V: TraversalVisitor + ?Sized>(
        graph: &Graph,
        start: &str,
        visitor: &mut V,
    ) -> Vec<String> {
        let Some(start) = graph.vertex(start) else {
            return Vec::new();
        };

        visitor.on_start(TraversalKind::DfsRecursive, start);

        let mut visited: HashSet<&str> = HashSet::new();
        let mut result: Vec<String> = Vec::new();
        Self::dfs_traverse(graph, start, &mut visited, &mut result, visitor);

        visitor.on_finish(TraversalKind::DfsRecursive, &result);
        result
    }

    fn dfs_traverse<'g, V: TraversalVisitor + ?Sized>(
        graph: &'g Graph,
        current: &'g str,
        visited: &mut HashSet<&'g str>,
        result: &mut Vec<String>,
        visitor: &mut V,
    ) {
        visited.insert(current);
        result.push(current.to_string());
        visitor.on_visit(current, Frontier::None, result);

        for neighbor in graph.sorted_neighbors(current) {
            if !visited.contains(neighbor) {
                Self::dfs_traverse(graph, neighbor, visited, result, visitor);
            }
        }
    }

    /// 迭代DFS遍历图，使用显式栈
    ///
    /// 节点在出栈时才标记为已访问；邻居按字典序逆序入栈，
    /// 因此出栈顺序为升序，访问顺序与递归版本一致。
    pub fn traverse_iterative(graph: &Graph, start: &str) -> Vec<String> {
        Self::traverse_iterative_with(graph, start, &mut NoopVisitor)
    }

    pub fn traverse_iterative_with<V: TraversalVisitor + ?Sized>(
        graph: &Graph,
        start: &str,
        visitor: &mut V,
    ) -> Vec<String> {
        let Some(start) = graph.vertex(start) else {
            return Vec::new();
        };

        visitor.on_start(TraversalKind::DfsIterative, start);

        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = vec![start];
        let mut result: Vec<String> = Vec::new();

        while let Some(current) = stack.pop() {
            // 同一节点可能被多次入栈，只处理第一次出栈
            if !visited.insert(current) {
                continue;
            }

            result.push(current.to_string());
            visitor.on_visit(current, Frontier::Stack(&stack), &result);

            for neighbor in graph.sorted_neighbors(current).into_iter().rev() {
                if !visited.contains(neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        visitor.on_finish(TraversalKind::DfsIterative, &result);
        result
    }
}
