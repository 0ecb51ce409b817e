//! 带权边
//!
//! 权重统一使用 `f64`。权重按 `==` 比较（`0.0 == -0.0`），另外 NaN 与 NaN 视为相等，
//! 哈希前先规范化权重，与相等性保持一致。

use super::edge::{Directed, DirectedEdge, Edge, Undirected, UndirectedEdge, Weighted};
use super::vertex::Vertex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

fn same_weight(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// 规范化后的权重位模式：-0.0 归为 0.0，所有 NaN 归为同一个值
fn weight_bits(weight: f64) -> u64 {
    if weight.is_nan() {
        f64::NAN.to_bits()
    } else if weight == 0.0 {
        0.0f64.to_bits()
    } else {
        weight.to_bits()
    }
}

/// 带权有向边
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectedWeightedEdge {
    #[serde(flatten)]
    edge: DirectedEdge,
    weight: f64,
}

impl DirectedWeightedEdge {
    /// 创建新边
    pub fn new(source: Vertex, destination: Vertex, weight: f64) -> Self {
        Self {
            edge: DirectedEdge::new(source, destination),
            weight,
        }
    }

    pub fn set_source(&mut self, source: Vertex) {
        self.edge.set_source(source);
    }

    pub fn set_destination(&mut self, destination: Vertex) {
        self.edge.set_destination(destination);
    }
}

impl Edge for DirectedWeightedEdge {
    fn endpoints(&self) -> (&Vertex, &Vertex) {
        self.edge.endpoints()
    }

    fn connects(&self, first: &Vertex, second: &Vertex) -> bool {
        self.edge.connects(first, second)
    }
}

impl Directed for DirectedWeightedEdge {}

impl Weighted for DirectedWeightedEdge {
    fn weight(&self) -> f64 {
        self.weight
    }

    fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}

impl PartialEq for DirectedWeightedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.edge == other.edge && same_weight(self.weight, other.weight)
    }
}

impl Eq for DirectedWeightedEdge {}

impl Hash for DirectedWeightedEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.edge.hash(state);
        weight_bits(self.weight).hash(state);
    }
}

impl From<DirectedWeightedEdge> for DirectedEdge {
    fn from(edge: DirectedWeightedEdge) -> Self {
        edge.edge
    }
}

impl fmt::Display for DirectedWeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.edge, self.weight)
    }
}

/// 带权无向边
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UndirectedWeightedEdge {
    #[serde(flatten)]
    edge: UndirectedEdge,
    weight: f64,
}

impl UndirectedWeightedEdge {
    /// 创建新边
    pub fn new(vertex1: Vertex, vertex2: Vertex, weight: f64) -> Self {
        Self {
            edge: UndirectedEdge::new(vertex1, vertex2),
            weight,
        }
    }

    pub fn set_vertex1(&mut self, vertex: Vertex) {
        self.edge.set_vertex1(vertex);
    }

    pub fn set_vertex2(&mut self, vertex: Vertex) {
        self.edge.set_vertex2(vertex);
    }
}

impl Edge for UndirectedWeightedEdge {
    fn endpoints(&self) -> (&Vertex, &Vertex) {
        self.edge.endpoints()
    }

    fn connects(&self, first: &Vertex, second: &Vertex) -> bool {
        self.edge.connects(first, second)
    }
}

impl Undirected for UndirectedWeightedEdge {}

impl Weighted for UndirectedWeightedEdge {
    fn weight(&self) -> f64 {
        self.weight
    }

    fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}

impl PartialEq for UndirectedWeightedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.edge == other.edge && same_weight(self.weight, other.weight)
    }
}

impl Eq for UndirectedWeightedEdge {}

impl Hash for UndirectedWeightedEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.edge.hash(state);
        weight_bits(self.weight).hash(state);
    }
}

impl From<UndirectedWeightedEdge> for UndirectedEdge {
    fn from(edge: UndirectedWeightedEdge) -> Self {
        edge.edge
    }
}

impl fmt::Display for UndirectedWeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.edge, self.weight)
    }
}
