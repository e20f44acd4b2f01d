use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use petclinic_application::bootstrap::{Buses, Repositories};
use petclinic_application::context::AppContext;
use petclinic_application::error::AppError;
use petclinic_application::{InMemoryCommandBus, InMemoryQueryBus};
use petclinic_infra::sqlite::Database;
use std::convert::Infallible;
use std::sync::Arc;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 路由共享状态：命令与查询总线
#[derive(Clone)]
pub struct ApiContext {
    pub commands: Arc<InMemoryCommandBus>,
    pub queries: Arc<InMemoryQueryBus>,
}

impl ApiContext {
    pub fn new(repos: &Repositories) -> Result<Self, AppError> {
        let Buses { commands, queries } = Buses::build(repos)?;
        Ok(Self { commands, queries })
    }

    pub fn from_database(db: &Database) -> Result<Self, AppError> {
        Self::new(&Repositories {
            owners: Arc::new(db.owner_repository()),
            pet_types: Arc::new(db.pet_type_repository()),
            vets: Arc::new(db.vet_repository()),
        })
    }
}

/// 从请求头 `x-request-id` 构造应用层上下文
pub struct RequestContext(pub AppContext);

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let correlation_id = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        Ok(Self(AppContext { correlation_id }))
    }
}
