//! 服务层模块
//!
//! 包含算法实现与演示驱动

pub mod algorithm;
pub mod demo;

// 重新导出常用服务
pub use algorithm::*;
pub use demo::{SortReport, TraversalReport};
