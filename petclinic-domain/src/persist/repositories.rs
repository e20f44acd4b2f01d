use crate::error::DomainResult;
use crate::owner::{Owner, PetType};
use crate::persist::{AggregateRepository, Page, PageRequest};
use crate::vet::Vet;
use async_trait::async_trait;

/// 宠物主人聚合仓储
#[async_trait]
pub trait OwnerRepository: AggregateRepository<Owner> {
    /// 按姓氏前缀（区分大小写）分页查询，按 id 排序；
    /// 前缀为空或无匹配时返回空页。
    async fn find_by_last_name_starting_with(
        &self,
        prefix: &str,
        page: PageRequest,
    ) -> DomainResult<Page<Owner>>;

    /// 全部主人，按 id 排序
    async fn find_all(&self, page: PageRequest) -> DomainResult<Page<Owner>>;
}

/// 宠物种类（参考数据）仓储
#[async_trait]
pub trait PetTypeRepository: Send + Sync {
    /// 全部宠物种类，按名称排序
    async fn find_pet_types(&self) -> DomainResult<Vec<PetType>>;
}

/// 兽医（参考数据）仓储
#[async_trait]
pub trait VetRepository: Send + Sync {
    async fn find_all(&self, page: PageRequest) -> DomainResult<Page<Vet>>;
}
