use crate::context::AppContext;
use crate::dto::OwnerDto;
use crate::error::AppError;
use crate::query::{Query, QueryHandler};
use async_trait::async_trait;
use petclinic_domain::owner::OwnerId;
use petclinic_domain::persist::{AggregateRepository, OwnerRepository, Page, PageRequest};
use std::sync::Arc;

/// 按 id 加载主人（含宠物与就诊记录）
#[derive(Debug, Clone, Copy)]
pub struct GetOwner {
    pub owner_id: OwnerId,
}

impl Query for GetOwner {
    const NAME: &'static str = "GetOwner";
    type Dto = Option<OwnerDto>;
}

/// 按姓氏前缀分页查找主人；姓氏为空白时返回全部主人
#[derive(Debug, Clone)]
pub struct FindOwners {
    pub last_name: String,
    pub page: PageRequest,
}

impl Query for FindOwners {
    const NAME: &'static str = "FindOwners";
    type Dto = Page<OwnerDto>;
}

pub struct GetOwnerHandler {
    owners: Arc<dyn OwnerRepository>,
}

impl GetOwnerHandler {
    pub fn new(owners: Arc<dyn OwnerRepository>) -> Self {
        Self { owners }
    }
}

#[async_trait]
impl QueryHandler<GetOwner> for GetOwnerHandler {
    async fn handle(&self, _ctx: &AppContext, q: GetOwner) -> Result<Option<OwnerDto>, AppError> {
        let owner = self.owners.find_by_id(&q.owner_id).await?;
        Ok(owner.as_ref().map(OwnerDto::from))
    }
}

pub struct FindOwnersHandler {
    owners: Arc<dyn OwnerRepository>,
}

impl FindOwnersHandler {
    pub fn new(owners: Arc<dyn OwnerRepository>) -> Self {
        Self { owners }
    }
}

#[async_trait]
impl QueryHandler<FindOwners> for FindOwnersHandler {
    async fn handle(&self, _ctx: &AppContext, q: FindOwners) -> Result<Page<OwnerDto>, AppError> {
        let page = if q.last_name.trim().is_empty() {
            self.owners.find_all(q.page).await?
        } else {
            self.owners
                .find_by_last_name_starting_with(&q.last_name, q.page)
                .await?
        };
        Ok(page.map(|o| OwnerDto::from(&o)))
    }
}
