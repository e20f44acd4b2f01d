//! 参考数据查询：宠物种类与兽医目录
//!
use crate::context::AppContext;
use crate::dto::{PetTypeDto, VetDto};
use crate::error::AppError;
use crate::query::{Query, QueryHandler};
use async_trait::async_trait;
use petclinic_domain::persist::{Page, PageRequest, PetTypeRepository, VetRepository};
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
pub struct ListPetTypes;

impl Query for ListPetTypes {
    const NAME: &'static str = "ListPetTypes";
    type Dto = Vec<PetTypeDto>;
}

#[derive(Debug, Clone, Copy)]
pub struct ListVets {
    pub page: PageRequest,
}

impl Query for ListVets {
    const NAME: &'static str = "ListVets";
    type Dto = Page<VetDto>;
}

pub struct ListPetTypesHandler {
    pet_types: Arc<dyn PetTypeRepository>,
}

impl ListPetTypesHandler {
    pub fn new(pet_types: Arc<dyn PetTypeRepository>) -> Self {
        Self { pet_types }
    }
}

#[async_trait]
impl QueryHandler<ListPetTypes> for ListPetTypesHandler {
    async fn handle(&self, _ctx: &AppContext, _q: ListPetTypes) -> Result<Vec<PetTypeDto>, AppError> {
        let types = self.pet_types.find_pet_types().await?;
        Ok(types.iter().map(PetTypeDto::from).collect())
    }
}

pub struct ListVetsHandler {
    vets: Arc<dyn VetRepository>,
}

impl ListVetsHandler {
    pub fn new(vets: Arc<dyn VetRepository>) -> Self {
        Self { vets }
    }
}

#[async_trait]
impl QueryHandler<ListVets> for ListVetsHandler {
    async fn handle(&self, _ctx: &AppContext, q: ListVets) -> Result<Page<VetDto>, AppError> {
        let page = self.vets.find_all(q.page).await?;
        Ok(page.map(|v| VetDto::from(&v)))
    }
}
