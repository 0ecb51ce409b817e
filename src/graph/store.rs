//! 图存储
//!
//! 有向图与无向图共用的顶点/边存储，负责维护三条不变式：
//! 1. 每条边的两个端点都在顶点集中
//! 2. 不存在连接同一对顶点的两条边（匹配规则由边类型的 [`Edge::connects`] 决定）
//! 3. 不存在标签相同的两个顶点

use super::edge::Edge;
use super::vertex::Vertex;
use crate::error::{Error, Result};
use indexmap::IndexSet;
use serde::Serialize;
use tracing::debug;

/// 顶点/边存储（均保持插入顺序）
#[derive(Debug, Clone, Serialize)]
pub(crate) struct GraphStore<E> {
    /// 顶点集（按标签去重）
    vertices: IndexSet<Vertex>,
    /// 边列表
    edges: Vec<E>,
}

impl<E> Default for GraphStore<E> {
    fn default() -> Self {
        Self {
            vertices: IndexSet::new(),
            edges: Vec::new(),
        }
    }
}

impl<E: Edge> GraphStore<E> {
    /// 从初始顶点和边构建，任意一项违反不变式则整体失败
    pub fn from_parts<IE, IV>(edges: IE, vertices: IV) -> Result<Self>
    where
        IE: IntoIterator<Item = E>,
        IV: IntoIterator<Item = Vertex>,
    {
        let mut store = Self::default();
        for vertex in vertices {
            store.add_vertex(vertex)?;
        }
        for edge in edges {
            store.add_edge(edge)?;
        }

        debug!(
            vertices = store.vertices.len(),
            edges = store.edges.len(),
            "graph constructed"
        );
        Ok(store)
    }

    pub fn vertices(&self) -> &IndexSet<Vertex> {
        &self.vertices
    }

    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    // ==================== 修改 ====================

    /// 添加顶点
    pub fn add_vertex(&mut self, vertex: Vertex) -> Result<()> {
        if self.vertices.contains(&vertex) {
            debug!(%vertex, "rejected duplicate vertex");
            return Err(Error::VertexAlreadyExists(vertex.to_string()));
        }

        debug!(%vertex, "vertex added");
        self.vertices.insert(vertex);
        Ok(())
    }

    /// 添加边
    pub fn add_edge(&mut self, edge: E) -> Result<()> {
        let (first, second) = edge.endpoints();

        for endpoint in [first, second] {
            if !self.vertices.contains(endpoint) {
                debug!(vertex = %endpoint, "rejected edge with unknown endpoint");
                return Err(Error::VertexNotFound(endpoint.to_string()));
            }
        }

        if self.edges.iter().any(|existing| existing.connects(first, second)) {
            debug!(%first, %second, "rejected duplicate edge");
            return Err(Error::EdgeAlreadyExists(format!("({}, {})", first, second)));
        }

        debug!(%first, %second, "edge added");
        self.edges.push(edge);
        Ok(())
    }

    // ==================== 查询 ====================

    /// 是否包含给定标签的顶点
    pub fn contains_vertex(&self, label: &str) -> bool {
        self.vertex(label).is_some()
    }

    /// 按标签获取顶点
    pub fn vertex(&self, label: &str) -> Option<&Vertex> {
        self.vertices.get(&Vertex::new(label))
    }

    /// 获取相邻顶点（不区分边的方向，按边的插入顺序，不去重）
    pub fn adjacent_vertices(&self, vertex: &Vertex) -> Result<Vec<&Vertex>> {
        self.ensure_vertex(vertex)?;
        Ok(self
            .edges
            .iter()
            .filter_map(|edge| edge.opposite(vertex))
            .collect())
    }

    /// 按标签获取相邻顶点
    pub fn adjacent_vertices_by_label(&self, label: &str) -> Result<Vec<&Vertex>> {
        self.adjacent_vertices(&Vertex::new(label))
    }

    /// 查找连接两个顶点的第一条边
    pub fn edge(&self, first: &Vertex, second: &Vertex) -> Option<&E> {
        self.edges.iter().find(|edge| edge.connects(first, second))
    }

    /// 按标签查找边
    pub fn edge_by_labels(&self, first: &str, second: &str) -> Option<&E> {
        self.edge(&Vertex::new(first), &Vertex::new(second))
    }

    /// 按任意谓词筛选与顶点相关的邻居，顶点不存在时返回错误
    pub fn neighbors_where<'a, F>(&'a self, vertex: &Vertex, pick: F) -> Result<Vec<&'a Vertex>>
    where
        F: Fn(&'a E, &Vertex) -> Option<&'a Vertex>,
    {
        self.ensure_vertex(vertex)?;
        Ok(self
            .edges
            .iter()
            .filter_map(|edge| pick(edge, vertex))
            .collect())
    }

    /// 是否存在自环
    pub fn has_self_loop(&self) -> bool {
        self.edges.iter().any(Edge::is_self_loop)
    }

    fn ensure_vertex(&self, vertex: &Vertex) -> Result<()> {
        if self.vertices.contains(vertex) {
            Ok(())
        } else {
            Err(Error::VertexNotFound(vertex.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::edge::{DirectedEdge, UndirectedEdge};

    fn v(label: &str) -> Vertex {
        Vertex::new(label)
    }

    #[test]
    fn test_store_rejects_failed_mutation_atomically() {
        let mut store: GraphStore<UndirectedEdge> = GraphStore::default();
        store.add_vertex(v("a")).unwrap();
        store.add_vertex(v("b")).unwrap();
        store.add_edge(UndirectedEdge::new(v("a"), v("b"))).unwrap();

        assert!(store.add_vertex(v("a")).is_err());
        assert!(store.add_edge(UndirectedEdge::new(v("b"), v("a"))).is_err());
        assert!(store.add_edge(UndirectedEdge::new(v("a"), v("z"))).is_err());

        assert_eq!(store.vertices().len(), 2);
        assert_eq!(store.edges().len(), 1);
    }

    #[test]
    fn test_store_unlabeled_vertex() {
        let mut store: GraphStore<DirectedEdge> = GraphStore::default();
        store.add_vertex(Vertex::unlabeled()).unwrap();
        store.add_vertex(v("a")).unwrap();
        store
            .add_edge(DirectedEdge::new(Vertex::unlabeled(), v("a")))
            .unwrap();

        assert!(store.add_vertex(Vertex::unlabeled()).is_err());
        assert_eq!(
            store.adjacent_vertices(&Vertex::unlabeled()).unwrap(),
            vec![&v("a")]
        );
        assert!(store.edge(&Vertex::unlabeled(), &v("a")).is_some());
    }

    #[test]
    fn test_store_self_loop_detection() {
        let mut store: GraphStore<DirectedEdge> = GraphStore::default();
        store.add_vertex(v("a")).unwrap();
        assert!(!store.has_self_loop());

        store.add_edge(DirectedEdge::new(v("a"), v("a"))).unwrap();
        assert!(store.has_self_loop());
        assert_eq!(store.adjacent_vertices(&v("a")).unwrap(), vec![&v("a")]);
    }
}
