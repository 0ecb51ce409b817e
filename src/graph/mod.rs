//! 图核心模块
//!
//! 定义顶点、边和有向/无向图容器

mod directed;
mod edge;
mod store;
mod undirected;
mod vertex;
mod weighted;

pub use directed::DirectedGraph;
pub use edge::{Directed, DirectedEdge, Edge, Undirected, UndirectedEdge, Weighted};
pub use undirected::UndirectedGraph;
pub use vertex::Vertex;
pub use weighted::{DirectedWeightedEdge, UndirectedWeightedEdge};
