//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("顶点已存在: {0}")]
    VertexAlreadyExists(String),

    #[error("边已存在: {0}")]
    EdgeAlreadyExists(String),

    #[error("顶点数量不能为负数: {0}")]
    NegativeVertexCount(i64),

    #[error("完全图边数溢出: 顶点数 {0}")]
    EdgeCountOverflow(i64),
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 参数无效（顶点/边不存在或重复）
    InvalidArgument,
    /// 数值越界
    OutOfRange,
}

impl Error {
    /// 获取错误类别
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::VertexNotFound(_)
            | Error::VertexAlreadyExists(_)
            | Error::EdgeAlreadyExists(_) => ErrorKind::InvalidArgument,
            Error::NegativeVertexCount(_) | Error::EdgeCountOverflow(_) => ErrorKind::OutOfRange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        assert_eq!(
            Error::VertexNotFound("a".to_string()).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            Error::EdgeAlreadyExists("a -> b".to_string()).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(Error::NegativeVertexCount(-1).kind(), ErrorKind::OutOfRange);
        assert_eq!(Error::EdgeCountOverflow(i64::MAX).kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_error_message() {
        let err = Error::VertexAlreadyExists("a".to_string());
        assert_eq!(err.to_string(), "顶点已存在: a");
    }
}
