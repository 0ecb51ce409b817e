//! 顶点定义
//!
//! 顶点只携带一个可选标签，相等性与哈希完全由标签决定

use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点
///
/// 两个顶点相等当且仅当标签都缺失，或标签都存在且字符串相等。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点标签
    label: Option<String>,
}

impl Vertex {
    /// 创建带标签的顶点
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }

    /// 创建无标签顶点
    pub fn unlabeled() -> Self {
        Self { label: None }
    }

    /// 获取顶点标签
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// 设置顶点标签
    ///
    /// 图只对外提供顶点的共享引用，已加入图的顶点无法通过此方法改名。
    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    /// 标签是否等于给定字符串（区分大小写）
    pub fn has_label(&self, label: &str) -> bool {
        self.label() == Some(label)
    }
}

impl From<&str> for Vertex {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Vertex {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}", label),
            None => write!(f, "(unlabeled)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(v: &Vertex) -> u64 {
        let mut hasher = DefaultHasher::new();
        v.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_vertex_value_equality() {
        let a1 = Vertex::new("a");
        let a2 = Vertex::new(String::from("a"));
        let b = Vertex::new("b");

        assert_eq!(a1, a2);
        assert_eq!(hash_of(&a1), hash_of(&a2));
        assert_ne!(a1, b);
    }

    #[test]
    fn test_vertex_label_is_case_sensitive() {
        assert_ne!(Vertex::new("a"), Vertex::new("A"));
    }

    #[test]
    fn test_vertex_unlabeled() {
        let u1 = Vertex::unlabeled();
        let u2 = Vertex::default();

        assert_eq!(u1, u2);
        assert_eq!(hash_of(&u1), hash_of(&u2));
        assert_ne!(u1, Vertex::new(""));
        assert_eq!(u1.label(), None);
        assert_eq!(u1.to_string(), "(unlabeled)");
    }

    #[test]
    fn test_vertex_set_label() {
        let mut v = Vertex::new("a");
        v.set_label(Some("b".to_string()));
        assert!(v.has_label("b"));
        assert_eq!(v, Vertex::from("b"));

        v.set_label(None);
        assert_eq!(v, Vertex::unlabeled());
    }

    #[test]
    fn test_vertex_serialization() {
        let v = Vertex::new("a");
        let json = serde_json::to_string(&v).unwrap();
        let restored: Vertex = serde_json::from_str(&json).unwrap();

        assert_eq!(v, restored);
    }
}
