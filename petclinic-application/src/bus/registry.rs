use crate::{context::AppContext, error::AppError};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::any::{Any, TypeId, type_name};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub(super) type Erased = Box<dyn Any + Send>;

pub(super) type ErasedFuture<'a> = Pin<Box<dyn Future<Output = Result<Erased, AppError>> + Send + 'a>>;

pub(super) type ErasedHandler =
    Arc<dyn for<'a> Fn(Erased, &'a AppContext) -> ErasedFuture<'a> + Send + Sync>;

/// 以消息的 `TypeId` 为键的处理器表，每种消息至多一个处理器
#[derive(Default)]
pub(super) struct HandlerRegistry {
    handlers: DashMap<TypeId, (&'static str, ErasedHandler)>,
}

/// 还原被擦除的值；类型不符时报告期望的类型名
pub(super) fn unerase<T: 'static>(value: Erased) -> Result<T, AppError> {
    value
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| AppError::TypeMismatch {
            expected: type_name::<T>(),
            found: "unknown",
        })
}

impl HandlerRegistry {
    /// 登记处理器；该消息类型已有处理器时返回 false 且不覆盖
    pub(super) fn insert<M: 'static>(&self, name: &'static str, handler: ErasedHandler) -> bool {
        match self.handlers.entry(TypeId::of::<M>()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert((name, handler));
                true
            }
        }
    }

    pub(super) fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.iter().map(|e| e.value().0).collect();
        names.sort_unstable();
        names
    }

    pub(super) async fn dispatch<M, O>(
        &self,
        name: &'static str,
        ctx: &AppContext,
        msg: M,
    ) -> Result<O, AppError>
    where
        M: Send + 'static,
        O: 'static,
    {
        let handler = self
            .handlers
            .get(&TypeId::of::<M>())
            .map(|entry| entry.value().1.clone())
            .ok_or(AppError::HandlerNotFound(name))?;

        let out = handler(Box::new(msg), ctx).await?;
        unerase(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;

    fn returning<T: Send + Default + 'static>() -> ErasedHandler {
        Arc::new(|_msg, _ctx| Box::pin(async move { Ok(Box::new(T::default()) as Erased) }))
    }

    #[tokio::test]
    async fn wrong_output_type_is_a_mismatch() {
        let registry = HandlerRegistry::default();
        assert!(registry.insert::<Ping>("Ping", returning::<String>()));

        let err = registry
            .dispatch::<Ping, usize>("Ping", &AppContext::default(), Ping)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::TypeMismatch { expected: "usize", .. }));
    }

    #[tokio::test]
    async fn first_registration_wins() {
        let registry = HandlerRegistry::default();
        assert!(registry.insert::<Ping>("Ping", returning::<u8>()));
        assert!(!registry.insert::<Ping>("Ping", returning::<String>()));

        let out: u8 = registry
            .dispatch("Ping", &AppContext::default(), Ping)
            .await
            .unwrap();
        assert_eq!(out, 0);
        assert_eq!(registry.names(), vec!["Ping"]);
    }
}
