//! 无向图
//!
//! 边的去重和查找不区分端点顺序

use super::edge::{Edge, Undirected, UndirectedEdge};
use super::store::GraphStore;
use super::vertex::Vertex;
use crate::calculations::complete_undirected_edge_count;
use crate::error::Result;
use indexmap::IndexSet;
use serde::Serialize;

/// 无向图
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct UndirectedGraph<E = UndirectedEdge> {
    store: GraphStore<E>,
}

impl<E> Default for UndirectedGraph<E> {
    fn default() -> Self {
        Self {
            store: GraphStore::default(),
        }
    }
}

impl<E: Undirected> UndirectedGraph<E> {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 从初始边和顶点构建图
    ///
    /// 每条边的端点必须出现在 `vertices` 中。构建时同样执行 [`Self::add_vertex`] /
    /// [`Self::add_edge`] 的唯一性检查：`vertices` 中出现重复标签，或 `edges` 中出现
    /// 连接同一对顶点的边（不论顺序），都会返回错误，而不是静默保留重复项。
    pub fn from_parts<IE, IV>(edges: IE, vertices: IV) -> Result<Self>
    where
        IE: IntoIterator<Item = E>,
        IV: IntoIterator<Item = Vertex>,
    {
        Ok(Self {
            store: GraphStore::from_parts(edges, vertices)?,
        })
    }

    pub fn vertices(&self) -> &IndexSet<Vertex> {
        self.store.vertices()
    }

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

    pub fn add_vertex(&mut self, vertex: Vertex) -> Result<()> {
        self.store.add_vertex(vertex)
    }

    pub fn contains_vertex(&self, label: &str) -> bool {
        self.store.contains_vertex(label)
    }

    pub fn vertex(&self, label: &str) -> Option<&Vertex> {
        self.store.vertex(label)
    }

    // ==================== 边操作 ====================

    /// 添加边，(a, b) 与 (b, a) 视为同一条边
    pub fn add_edge(&mut self, edge: E) -> Result<()> {
        self.store.add_edge(edge)
    }

    /// 获取连接两个顶点的边（与参数顺序无关）
    pub fn edge(&self, vertex1: &Vertex, vertex2: &Vertex) -> Option<&E> {
        self.store.edge(vertex1, vertex2)
    }

    pub fn edge_by_labels(&self, label1: &str, label2: &str) -> Option<&E> {
        self.store.edge_by_labels(label1, label2)
    }

    // ==================== 邻居查询 ====================

    /// 获取相邻顶点（按边的插入顺序，不去重）
    pub fn adjacent_vertices(&self, vertex: &Vertex) -> Result<Vec<&Vertex>> {
        self.store.adjacent_vertices(vertex)
    }

    pub fn adjacent_vertices_by_label(&self, label: &str) -> Result<Vec<&Vertex>> {
        self.store.adjacent_vertices_by_label(label)
    }

    /// 度数（自环计两次）
    pub fn degree(&self, vertex: &Vertex) -> usize {
        self.edges()
            .iter()
            .map(|e| {
                let (first, second) = e.endpoints();
                usize::from(first == vertex) + usize::from(second == vertex)
            })
            .sum()
    }

    /// 是否为完全图（无自环，且每对不同顶点之间都有边）
    pub fn is_complete(&self) -> bool {
        if self.store.has_self_loop() {
            return false;
        }
        let n = self.vertex_count() as i64;
        complete_undirected_edge_count(n)
            .is_ok_and(|expected| expected == self.edge_count() as i64)
    }
}

impl UndirectedGraph<UndirectedEdge> {
    /// 构建给定顶点上的无向完全图
    pub fn complete<I>(vertices: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vertex>,
    {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add_vertex(vertex)?;
        }

        let all: Vec<Vertex> = graph.vertices().iter().cloned().collect();
        for (i, vertex1) in all.iter().enumerate() {
            for vertex2 in &all[i + 1..] {
                graph.add_edge(UndirectedEdge::new(vertex1.clone(), vertex2.clone()))?;
            }
        }
        Ok(graph)
    }
}
