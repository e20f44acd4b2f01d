use petclinic_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    /// 针对某个输入字段的校验失败（如宠物重名）
    #[error("validation: {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("handler not found: {0}")]
    HandlerNotFound(&'static str),

    #[error("handler already registered: command={command}")]
    AlreadyRegisteredCommand { command: &'static str },

    #[error("handler already registered: query={query}")]
    AlreadyRegisteredQuery { query: &'static str },

    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl AppError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            message: message.into(),
        }
    }

    /// 将领域层的 `NotFound` 提升为应用层 `NotFound`，其余原样包装
    pub fn lift(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { reason } => AppError::NotFound(reason),
            other => AppError::Domain(other),
        }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            AppError::NotFound(_) => true,
            AppError::Domain(err) => err.is_not_found(),
            _ => false,
        }
    }
}
