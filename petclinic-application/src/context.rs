/// 应用层上下文（Application Context）
///
/// 承载一次应用层调用（命令/查询）所需的横切信息：
/// 关联追踪 `correlation_id` 由接口层生成（如每个 HTTP 请求一个），贯穿日志。
///
/// ```rust
/// use petclinic_application::context::AppContext;
///
/// let ctx = AppContext::with_correlation_id("req-42");
/// assert_eq!(ctx.correlation_id.as_deref(), Some("req-42"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AppContext {
    pub correlation_id: Option<String>,
}

impl AppContext {
    pub fn with_correlation_id(id: impl Into<String>) -> Self {
        Self {
            correlation_id: Some(id.into()),
        }
    }
}
