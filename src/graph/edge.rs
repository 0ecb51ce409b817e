//! 边定义
//!
//! 边的能力通过 trait 组合：
//! - [`Edge`]：端点、匹配规则、自环判断
//! - [`Directed`] / [`Undirected`]：有向/无向端点访问
//! - [`Weighted`]：权重
//!
//! 端点在类型层面不可缺失，构造和修改端点都不会失败。

use super::vertex::Vertex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// 边的基本能力
pub trait Edge {
    /// 两个端点，按构造顺序返回
    fn endpoints(&self) -> (&Vertex, &Vertex);

    /// 是否连接给定的两个顶点
    ///
    /// 有向边要求顺序一致，无向边两种顺序均可。用于去重和查找，不比较权重。
    fn connects(&self, first: &Vertex, second: &Vertex) -> bool;

    /// 是否为自环（两个端点值相等）
    fn is_self_loop(&self) -> bool {
        let (first, second) = self.endpoints();
        first == second
    }

    /// 获取另一个端点
    ///
    /// 先匹配第一个端点，因此自环返回顶点自身一次。
    fn opposite(&self, vertex: &Vertex) -> Option<&Vertex> {
        let (first, second) = self.endpoints();
        if first == vertex {
            Some(second)
        } else if second == vertex {
            Some(first)
        } else {
            None
        }
    }
}

/// 有向边
pub trait Directed: Edge {
    /// 源顶点
    fn source(&self) -> &Vertex {
        self.endpoints().0
    }

    /// 目标顶点
    fn destination(&self) -> &Vertex {
        self.endpoints().1
    }
}

/// 无向边
pub trait Undirected: Edge {
    fn vertex1(&self) -> &Vertex {
        self.endpoints().0
    }

    fn vertex2(&self) -> &Vertex {
        self.endpoints().1
    }
}

/// 带权边
pub trait Weighted {
    /// 获取权重
    fn weight(&self) -> f64;

    /// 设置权重
    fn set_weight(&mut self, weight: f64);
}

/// 有序匹配
pub(crate) fn ordered_match(
    (first, second): (&Vertex, &Vertex),
    a: &Vertex,
    b: &Vertex,
) -> bool {
    first == a && second == b
}

/// 无序匹配
pub(crate) fn unordered_match(
    (first, second): (&Vertex, &Vertex),
    a: &Vertex,
    b: &Vertex,
) -> bool {
    (first == a && second == b) || (first == b && second == a)
}

/// 与顺序无关的端点哈希
pub(crate) fn hash_unordered<H: Hasher>(first: &Vertex, second: &Vertex, state: &mut H) {
    let (lo, hi) = if first <= second {
        (first, second)
    } else {
        (second, first)
    };
    lo.hash(state);
    hi.hash(state);
}

/// 有向边（源 -> 目标）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectedEdge {
    /// 源顶点
    source: Vertex,
    /// 目标顶点
    destination: Vertex,
}

impl DirectedEdge {
    /// 创建新边
    pub fn new(source: Vertex, destination: Vertex) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// 修改源顶点
    pub fn set_source(&mut self, source: Vertex) {
        self.source = source;
    }

    /// 修改目标顶点
    pub fn set_destination(&mut self, destination: Vertex) {
        self.destination = destination;
    }
}

impl Edge for DirectedEdge {
    fn endpoints(&self) -> (&Vertex, &Vertex) {
        (&self.source, &self.destination)
    }

    fn connects(&self, first: &Vertex, second: &Vertex) -> bool {
        ordered_match(self.endpoints(), first, second)
    }
}

impl Directed for DirectedEdge {}

impl fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// 无向边
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UndirectedEdge {
    vertex1: Vertex,
    vertex2: Vertex,
}

impl UndirectedEdge {
    /// 创建新边
    pub fn new(vertex1: Vertex, vertex2: Vertex) -> Self {
        Self { vertex1, vertex2 }
    }

    pub fn set_vertex1(&mut self, vertex: Vertex) {
        self.vertex1 = vertex;
    }

    pub fn set_vertex2(&mut self, vertex: Vertex) {
        self.vertex2 = vertex;
    }
}

impl Edge for UndirectedEdge {
    fn endpoints(&self) -> (&Vertex, &Vertex) {
        (&self.vertex1, &self.vertex2)
    }

    fn connects(&self, first: &Vertex, second: &Vertex) -> bool {
        unordered_match(self.endpoints(), first, second)
    }
}

impl Undirected for UndirectedEdge {}

impl PartialEq for UndirectedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.connects(&other.vertex1, &other.vertex2)
    }
}

impl Eq for UndirectedEdge {}

impl Hash for UndirectedEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_unordered(&self.vertex1, &self.vertex2, state);
    }
}

impl fmt::Display for UndirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.vertex1, self.vertex2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn v(label: &str) -> Vertex {
        Vertex::new(label)
    }

    #[test]
    fn test_directed_edge_order_sensitive() {
        let ab = DirectedEdge::new(v("a"), v("b"));
        let ab2 = DirectedEdge::new(v("a"), v("b"));
        let ba = DirectedEdge::new(v("b"), v("a"));

        assert_eq!(ab, ab2);
        assert_eq!(hash_of(&ab), hash_of(&ab2));
        assert_ne!(ab, ba);
        assert_eq!(ab.source(), &v("a"));
        assert_eq!(ab.destination(), &v("b"));
    }

    #[test]
    fn test_undirected_edge_order_insensitive() {
        let ab = UndirectedEdge::new(v("a"), v("b"));
        let ba = UndirectedEdge::new(v("b"), v("a"));
        let ac = UndirectedEdge::new(v("a"), v("c"));

        assert_eq!(ab, ba);
        assert_eq!(hash_of(&ab), hash_of(&ba));
        assert_ne!(ab, ac);
    }

    #[test]
    fn test_self_loop() {
        assert!(DirectedEdge::new(v("a"), v("a")).is_self_loop());
        assert!(!DirectedEdge::new(v("a"), v("b")).is_self_loop());
        assert!(UndirectedEdge::new(v("a"), Vertex::new(String::from("a"))).is_self_loop());
        assert!(UndirectedEdge::new(Vertex::unlabeled(), Vertex::unlabeled()).is_self_loop());
        assert!(!UndirectedEdge::new(v("a"), Vertex::unlabeled()).is_self_loop());
    }

    #[test]
    fn test_connects() {
        let directed = DirectedEdge::new(v("a"), v("b"));
        assert!(directed.connects(&v("a"), &v("b")));
        assert!(!directed.connects(&v("b"), &v("a")));

        let undirected = UndirectedEdge::new(v("a"), v("b"));
        assert!(undirected.connects(&v("a"), &v("b")));
        assert!(undirected.connects(&v("b"), &v("a")));
        assert!(!undirected.connects(&v("a"), &v("a")));
    }

    #[test]
    fn test_opposite() {
        let e = UndirectedEdge::new(v("a"), v("b"));
        assert_eq!(e.opposite(&v("a")), Some(&v("b")));
        assert_eq!(e.opposite(&v("b")), Some(&v("a")));
        assert_eq!(e.opposite(&v("c")), None);

        let loop_edge = DirectedEdge::new(v("a"), v("a"));
        assert_eq!(loop_edge.opposite(&v("a")), Some(&v("a")));
    }

    #[test]
    fn test_set_endpoints() {
        let mut e = DirectedEdge::new(v("a"), v("b"));
        e.set_source(v("c"));
        e.set_destination(v("d"));
        assert_eq!(e, DirectedEdge::new(v("c"), v("d")));

        let mut u = UndirectedEdge::new(v("a"), v("b"));
        u.set_vertex1(v("b"));
        assert!(u.is_self_loop());
        u.set_vertex2(v("a"));
        assert_eq!(u, UndirectedEdge::new(v("a"), v("b")));
    }

    #[test]
    fn test_edge_display() {
        assert_eq!(DirectedEdge::new(v("a"), v("b")).to_string(), "a -> b");
        assert_eq!(UndirectedEdge::new(v("a"), v("b")).to_string(), "a -- b");
    }
}
