use super::registry::{Erased, ErasedHandler, HandlerRegistry, unerase};
use crate::command::{Command, CommandBus, CommandHandler};
use crate::{context::AppContext, error::AppError};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Default)]
pub struct InMemoryCommandBus {
    registry: HandlerRegistry,
}

impl InMemoryCommandBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册命令处理器；同一命令重复注册返回 `AlreadyRegisteredCommand`
    pub fn register<C, H>(&self, handler: Arc<H>) -> Result<(), AppError>
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        let erased: ErasedHandler = Arc::new(move |msg, ctx| {
            let handler = handler.clone();
            Box::pin(async move {
                let cmd = unerase::<C>(msg)?;
                let out = handler.handle(ctx, cmd).await?;
                Ok(Box::new(out) as Erased)
            })
        });

        if self.registry.insert::<C>(C::NAME, erased) {
            Ok(())
        } else {
            Err(AppError::AlreadyRegisteredCommand { command: C::NAME })
        }
    }

    pub fn registered_commands(&self) -> Vec<&'static str> {
        self.registry.names()
    }
}

#[async_trait]
impl CommandBus for InMemoryCommandBus {
    async fn dispatch<C>(&self, ctx: &AppContext, cmd: C) -> Result<C::Output, AppError>
    where
        C: Command,
    {
        tracing::debug!(
            command = C::NAME,
            correlation_id = ctx.correlation_id.as_deref(),
            "dispatching command"
        );

        self.registry
            .dispatch::<C, C::Output>(C::NAME, ctx, cmd)
            .await
            .inspect_err(|err| tracing::debug!(command = C::NAME, error = %err, "command failed"))
    }
}
