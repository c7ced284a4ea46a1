//! 遍历观察者模块
//!
//! 遍历算法只返回访问序列；需要逐步输出（访问节点、队列/栈快照）时，
//! 通过 `TraversalVisitor` 注入，算法本身不做任何输出。

use std::collections::VecDeque;
use std::fmt;

/// 遍历策略标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalKind {
    Bfs,
    DfsRecursive,
    DfsIterative,
}

impl TraversalKind {
    pub fn name(&self) -> &'static str {
        match self {
            TraversalKind::Bfs => "BFS",
            TraversalKind::DfsRecursive => "recursive DFS",
            TraversalKind::DfsIterative => "iterative DFS",
        }
    }
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 访问某个节点时待处理的前沿：BFS 的队列、迭代 DFS 的栈，递归 DFS 没有显式前沿
#[derive(Debug, Clone, Copy)]
pub enum Frontier<'a> {
    Queue(&'a VecDeque<&'a str>),
    Stack(&'a [&'a str]),
    None,
}

impl<'a> Frontier<'a> {
    /// 按存储顺序返回前沿快照（栈为自底向上）
    pub fn to_vec(&self) -> Vec<&'a str> {
        match *self {
            Frontier::Queue(queue) => queue.iter().copied().collect(),
            Frontier::Stack(stack) => stack.to_vec(),
            Frontier::None => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        match *self {
            Frontier::Queue(queue) => queue.len(),
            Frontier::Stack(stack) => stack.len(),
            Frontier::None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 遍历过程观察者，所有回调默认为空操作
pub trait TraversalVisitor {
    fn on_start(&mut self, _kind: TraversalKind, _start: &str) {}

    /// 节点加入结果后立即调用；`visited` 已包含 `vertex`
    fn on_visit(&mut self, _vertex: &str, _frontier: Frontier<'_>, _visited: &[String]) {}

    fn on_finish(&mut self, _kind: TraversalKind, _result: &[String]) {}
}

/// 不做任何事情的观察者
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopVisitor;

impl TraversalVisitor for NoopVisitor {}

/// 以 info 级别记录遍历过程的观察者
#[derive(Debug, Clone, Default)]
pub struct NarratingVisitor {
    kind: Option<TraversalKind>,
}

impl NarratingVisitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TraversalVisitor for NarratingVisitor {
    fn on_start(&mut self, kind: TraversalKind, start: &str) {
        self.kind = Some(kind);
        log::info!("Starting {} traversal from vertex {}", kind, start);
    }

    fn on_visit(&mut self, vertex: &str, frontier: Frontier<'_>, visited: &[String]) {
        let label = self.kind.map_or("traversal", |kind| kind.name());
        log::info!("[{}] Visiting: {}", label, vertex);
        match frontier {
            Frontier::Queue(_) => log::info!("Queue: {:?}", frontier.to_vec()),
            Frontier::Stack(_) => log::info!("Stack: {:?}", frontier.to_vec()),
            Frontier::None => {}
        }
        log::info!("Visited so far: {:?}", visited);
        log::info!("------------------------------");
    }

    fn on_finish(&mut self, kind: TraversalKind, result: &[String]) {
        log::info!("{} finished, {} vertices visited", kind, result.len());
        self.kind = None;
    }
}
