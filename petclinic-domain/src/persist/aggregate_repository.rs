use crate::aggregate::Aggregate;
use crate::error::DomainResult;
use async_trait::async_trait;
use std::sync::Arc;

/// 聚合仓储
///
/// `save` 以聚合为单位持久化：新聚合插入、已有聚合更新，
/// 子实体随之级联插入/更新，并在返回值中回写所有新分配的标识与版本。
/// 版本不一致时返回 `DomainError::VersionConflict`。
#[async_trait]
pub trait AggregateRepository<A>: Send + Sync
where
    A: Aggregate,
{
    async fn find_by_id(&self, id: &A::Id) -> DomainResult<Option<A>>;

    async fn save(&self, aggregate: A) -> DomainResult<A>;
}

#[async_trait]
impl<A, T> AggregateRepository<A> for Arc<T>
where
    A: Aggregate + 'static,
    T: AggregateRepository<A> + ?Sized,
{
    async fn find_by_id(&self, id: &A::Id) -> DomainResult<Option<A>> {
        (**self).find_by_id(id).await
    }

    async fn save(&self, aggregate: A) -> DomainResult<A> {
        (**self).save(aggregate).await
    }
}
