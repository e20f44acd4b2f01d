//! 聚合根编排器（AggregateRoot）
//!
//! 封装“加载聚合 → 在聚合上执行修改 → 整体保存”的标准流程，
//! 以仓储实现（`AggregateRepository`）为依赖，便于在应用层直接调用。
//!
use crate::value_object::Version;
use crate::{aggregate::Aggregate, error::DomainError, error::DomainResult, persist::AggregateRepository};
use std::marker::PhantomData;

/// 面向应用层的聚合根编排器。
///
/// - `A`：聚合类型（实现 `Aggregate`）
/// - `R`：聚合仓储（实现 `AggregateRepository<A>`）
pub struct AggregateRoot<A, R>
where
    A: Aggregate,
    R: AggregateRepository<A>,
{
    repo: R,
    _marker: PhantomData<fn() -> A>,
}

impl<A, R> AggregateRoot<A, R>
where
    A: Aggregate + 'static,
    R: AggregateRepository<A>,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            _marker: PhantomData,
        }
    }

    /// 保存一个新建的聚合，返回已分配标识的聚合
    pub async fn create(&self, aggregate: A) -> DomainResult<A> {
        if !aggregate.is_new() {
            return Err(DomainError::InvalidState {
                reason: format!("{} already persisted", A::TYPE),
            });
        }
        self.repo.save(aggregate).await
    }

    /// 加载聚合并执行修改：
    /// 1. 聚合不存在时返回 `NotFound`；
    /// 2. 在聚合上执行 `change`，失败则不做任何持久化；
    /// 3. 整体保存并返回保存后的聚合与 `change` 的结果。
    pub async fn execute<F, T>(&self, id: &A::Id, change: F) -> DomainResult<(A, T)>
    where
        F: FnOnce(&mut A) -> DomainResult<T> + Send,
        T: Send,
    {
        self.execute_expecting(id, None, change).await
    }

    /// 同 [`execute`](Self::execute)，但要求加载到的聚合仍处于 `expected` 版本
    ///
    /// 调用方持有的版本落后（如过期的编辑表单）时返回 `VersionConflict`，不执行 `change`。
    pub async fn execute_expecting<F, T>(
        &self,
        id: &A::Id,
        expected: Option<Version>,
        change: F,
    ) -> DomainResult<(A, T)>
    where
        F: FnOnce(&mut A) -> DomainResult<T> + Send,
        T: Send,
    {
        let mut aggregate = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("{} {id}", A::TYPE)))?;

        if let Some(expected) = expected {
            let actual = aggregate.version();
            if actual != expected {
                return Err(DomainError::VersionConflict {
                    expected: expected.value(),
                    actual: actual.value(),
                });
            }
        }

        let output = change(&mut aggregate)?;

        let saved = self.repo.save(aggregate).await?;

        Ok((saved, output))
    }
}
