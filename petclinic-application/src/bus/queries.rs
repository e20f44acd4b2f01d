use super::registry::{Erased, ErasedHandler, HandlerRegistry, unerase};
use crate::query::{Query, QueryBus, QueryHandler};
use crate::{context::AppContext, error::AppError};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Default)]
pub struct InMemoryQueryBus {
    registry: HandlerRegistry,
}

impl InMemoryQueryBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册查询处理器；同一查询重复注册返回 `AlreadyRegisteredQuery`
    pub fn register<Q, H>(&self, handler: Arc<H>) -> Result<(), AppError>
    where
        Q: Query,
        H: QueryHandler<Q> + 'static,
    {
        let erased: ErasedHandler = Arc::new(move |msg, ctx| {
            let handler = handler.clone();
            Box::pin(async move {
                let q = unerase::<Q>(msg)?;
                let dto = handler.handle(ctx, q).await?;
                Ok(Box::new(dto) as Erased)
            })
        });

        if self.registry.insert::<Q>(Q::NAME, erased) {
            Ok(())
        } else {
            Err(AppError::AlreadyRegisteredQuery { query: Q::NAME })
        }
    }

    pub fn registered_queries(&self) -> Vec<&'static str> {
        self.registry.names()
    }
}

#[async_trait]
impl QueryBus for InMemoryQueryBus {
    async fn dispatch<Q>(&self, ctx: &AppContext, q: Q) -> Result<Q::Dto, AppError>
    where
        Q: Query,
    {
        tracing::debug!(
            query = Q::NAME,
            correlation_id = ctx.correlation_id.as_deref(),
            "dispatching query"
        );
        self.registry.dispatch::<Q, Q::Dto>(Q::NAME, ctx, q).await
    }
}
