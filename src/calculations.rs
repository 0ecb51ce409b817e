//! 完全图边数计算

use crate::error::{Error, Result};

/// 有向完全图的边数：n·(n−1)
pub fn complete_directed_edge_count(vertex_count: i64) -> Result<i64> {
    if vertex_count < 0 {
        return Err(Error::NegativeVertexCount(vertex_count));
    }
    vertex_count
        .checked_mul(vertex_count - 1)
        .ok_or(Error::EdgeCountOverflow(vertex_count))
}

/// 无向完全图的边数：n·(n−1)/2
///
/// n 与 n−1 必有一个是偶数，先除再乘，结果精确且不会提前溢出。
pub fn complete_undirected_edge_count(vertex_count: i64) -> Result<i64> {
    if vertex_count < 0 {
        return Err(Error::NegativeVertexCount(vertex_count));
    }
    let (a, b) = if vertex_count % 2 == 0 {
        (vertex_count / 2, vertex_count - 1)
    } else {
        (vertex_count, (vertex_count - 1) / 2)
    };
    a.checked_mul(b)
        .ok_or(Error::EdgeCountOverflow(vertex_count))
}
