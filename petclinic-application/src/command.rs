use crate::{context::AppContext, error::AppError};
use async_trait::async_trait;

/// 写用例：修改 `Owner` 聚合或新建聚合
///
/// `Output` 只携带调用方继续所需的最少信息（通常是新分配的标识），读模型由查询提供。
pub trait Command: Send + Sync + 'static {
    /// 稳定名称，用于日志与重复注册报错
    const NAME: &'static str;

    type Output: Send + 'static;
}

#[async_trait]
pub trait CommandHandler<C>: Send + Sync
where
    C: Command,
{
    async fn handle(&self, ctx: &AppContext, cmd: C) -> Result<C::Output, AppError>;
}

/// 按命令类型路由到唯一的处理器
#[async_trait]
pub trait CommandBus: Send + Sync {
    async fn dispatch<C>(&self, ctx: &AppContext, cmd: C) -> Result<C::Output, AppError>
    where
        C: Command;
}
