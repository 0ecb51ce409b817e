//! GraphTheory - 内存图数据模型
//!
//! 以标签标识的顶点、有向/无向边（含带权变体），以及维护以下不变式的图容器：
//! - 顶点标签唯一
//! - 边的端点必须已在图中
//! - 同一对顶点之间不存在重复边（无向图不区分端点顺序）

pub mod calculations;
pub mod cli;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use calculations::{complete_directed_edge_count, complete_undirected_edge_count};
pub use error::{Error, ErrorKind, Result};
pub use graph::{
    Directed, DirectedEdge, DirectedGraph, DirectedWeightedEdge, Edge, Undirected,
    UndirectedEdge, UndirectedGraph, UndirectedWeightedEdge, Vertex, Weighted,
};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
