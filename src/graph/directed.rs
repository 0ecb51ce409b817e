//! 有向图
//!
//! 边的去重和查找区分方向；[`DirectedGraph::adjacent_vertices`] 不区分方向，
//! 按方向区分的邻居使用 [`DirectedGraph::successors`] / [`DirectedGraph::predecessors`]。

use super::edge::{Directed, DirectedEdge};
use super::store::GraphStore;
use super::vertex::Vertex;
use crate::calculations::complete_directed_edge_count;
use crate::error::Result;
use indexmap::IndexSet;
use serde::Serialize;

/// 有向图
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct DirectedGraph<E = DirectedEdge> {
    store: GraphStore<E>,
}

impl<E> Default for DirectedGraph<E> {
    fn default() -> Self {
        Self {
            store: GraphStore::default(),
        }
    }
}

impl<E: Directed> DirectedGraph<E> {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 从初始边和顶点构建图
    ///
    /// 每条边的端点必须出现在 `vertices` 中。构建时同样执行 [`Self::add_vertex`] /
    /// [`Self::add_edge`] 的唯一性检查：`vertices` 中出现重复标签，或 `edges` 中出现
    /// 同向重复的边，都会返回错误，而不是静默保留重复项。
    pub fn from_parts<IE, IV>(edges: IE, vertices: IV) -> Result<Self>
    where
        IE: IntoIterator<Item = E>,
        IV: IntoIterator<Item = Vertex>,
    {
        Ok(Self {
            store: GraphStore::from_parts(edges, vertices)?,
        })
    }

    /// 所有顶点（插入顺序）
    pub fn vertices(&self) -> &IndexSet<Vertex> {
        self.store.vertices()
    }

    /// 所有边（插入顺序）
    pub fn edges(&self) -> &[E] {
        self.store.edges()
    }

    pub fn vertex_count(&self) -> usize {
        self.store.vertices().len()
    }

    pub fn edge_count(&self) -> usize {
        self.store.edges().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.vertices().is_empty()
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点，标签重复时失败
    pub fn add_vertex(&mut self, vertex: Vertex) -> Result<()> {
        self.store.add_vertex(vertex)
    }

    pub fn contains_vertex(&self, label: &str) -> bool {
        self.store.contains_vertex(label)
    }

    /// 按标签获取顶点
    pub fn vertex(&self, label: &str) -> Option<&Vertex> {
        self.store.vertex(label)
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 端点必须已在图中；已存在同向的 (源, 目标) 边时失败，反向边不算重复。
    pub fn add_edge(&mut self, edge: E) -> Result<()> {
        self.store.add_edge(edge)
    }

    /// 获取从 `source` 指向 `destination` 的边
    pub fn edge(&self, source: &Vertex, destination: &Vertex) -> Option<&E> {
        self.store.edge(source, destination)
    }

    pub fn edge_by_labels(&self, source: &str, destination: &str) -> Option<&E> {
        self.store.edge_by_labels(source, destination)
    }

    // ==================== 邻居查询 ====================

    /// 获取相邻顶点（出边和入边都计入）
    pub fn adjacent_vertices(&self, vertex: &Vertex) -> Result<Vec<&Vertex>> {
        self.store.adjacent_vertices(vertex)
    }

    pub fn adjacent_vertices_by_label(&self, label: &str) -> Result<Vec<&Vertex>> {
        self.store.adjacent_vertices_by_label(label)
    }

    /// 获取后继（出边指向的顶点）
    pub fn successors(&self, vertex: &Vertex) -> Result<Vec<&Vertex>> {
        self.store.neighbors_where(vertex, |edge, v| {
            (edge.source() == v).then_some(edge.destination())
        })
    }

    /// 获取前驱（入边来源的顶点）
    pub fn predecessors(&self, vertex: &Vertex) -> Result<Vec<&Vertex>> {
        self.store.neighbors_where(vertex, |edge, v| {
            (edge.destination() == v).then_some(edge.source())
        })
    }

    /// 出度
    pub fn out_degree(&self, vertex: &Vertex) -> usize {
        self.edges().iter().filter(|e| e.source() == vertex).count()
    }

    /// 入度
    pub fn in_degree(&self, vertex: &Vertex) -> usize {
        self.edges().iter().filter(|e| e.destination() == vertex).count()
    }

    /// 是否为完全图（无自环，且每对不同顶点间两个方向都有边）
    pub fn is_complete(&self) -> bool {
        if self.store.has_self_loop() {
            return false;
        }
        let n = self.vertex_count() as i64;
        complete_directed_edge_count(n)
            .is_ok_and(|expected| expected == self.edge_count() as i64)
    }
}

impl DirectedGraph<DirectedEdge> {
    /// 构建给定顶点上的有向完全图
    pub fn complete<I>(vertices: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vertex>,
    {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add_vertex(vertex)?;
        }

        let all: Vec<Vertex> = graph.vertices().iter().cloned().collect();
        for source in &all {
            for destination in &all {
                if source != destination {
                    graph.add_edge(DirectedEdge::new(source.clone(), destination.clone()))?;
                }
            }
        }
        Ok(graph)
    }
}
