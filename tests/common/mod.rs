//! 集成测试共享工具模块
//!
//! 提供样例数据和断言辅助函数，供所有集成测试使用

#![allow(dead_code)]

use std::collections::HashMap;
use std::hash::Hash;

use sortgraph::Graph;

/// 按值排序、携带原始位置标签的测试元素，用于检验稳定性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tagged {
    pub key: i64,
    pub tag: usize,
}

/// 为每个键附加其在输入中的下标
pub fn tag_all(keys: &[i64]) -> Vec<Tagged> {
    keys.iter()
        .enumerate()
        .map(|(tag, &key)| Tagged { key, tag })
        .collect()
}

/// 稳定排序的期望结果：先按键、再按原始位置
pub fn stable_reference(items: &[Tagged]) -> Vec<Tagged> {
    let mut expected = items.to_vec();
    expected.sort_by_key(|item| (item.key, item.tag));
    expected
}

/// 两个序列是否互为排列（多重集合相同）
pub fn is_permutation<T: Eq + Hash>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut counts: HashMap<&T, isize> = HashMap::new();
    for item in a {
        *counts.entry(item).or_default() += 1;
    }
    for item in b {
        *counts.entry(item).or_default() -= 1;
    }
    counts.values().all(|&c| c == 0)
}

/// 样例图
///
/// ```text
///     A
///    / \
///   B   C
///  / \   \
/// D   E---F
/// ```
pub fn sample_graph() -> Graph {
    sortgraph::services::demo::sample_graph()
}

/// 由 `(a, b)` 边列表构造图
pub fn graph_from(edges: &[(&str, &str)]) -> Graph {
    edges.iter().copied().collect()
}

pub fn strings(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}
