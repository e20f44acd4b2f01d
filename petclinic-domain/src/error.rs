//! 领域错误
//!
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    /// 值不满足领域规则（空白描述、重名宠物、非法电话等）
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },

    /// 操作与聚合当前状态不符
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    #[error("not found: {reason}")]
    NotFound { reason: String },

    /// 乐观锁冲突：`expected` 为修改时持有的版本，`actual` 为存储中的版本
    #[error("version conflict: expected={expected}, actual={actual}")]
    VersionConflict { expected: usize, actual: usize },

    #[error("database error: {reason}")]
    Database { reason: String },
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::NotFound {
            reason: reason.into(),
        }
    }

    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(feature = "infra-sqlx")]
impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found("row"),
            other => Self::Database {
                reason: other.to_string(),
            },
        }
    }
}
