use crate::reference;
use async_trait::async_trait;
use petclinic_domain::error::DomainResult;
use petclinic_domain::owner::PetType;
use petclinic_domain::persist::{Page, PageRequest, PetTypeRepository, VetRepository};
use petclinic_domain::vet::Vet;

/// 宠物种类（内存，按名称排序）
pub struct InMemoryPetTypeRepository {
    types: Vec<PetType>,
}

impl InMemoryPetTypeRepository {
    pub fn new(mut types: Vec<PetType>) -> Self {
        types.sort_by(|a, b| a.name().cmp(b.name()));
        Self { types }
    }

    pub fn with_reference_data() -> Self {
        Self::new(reference::pet_types())
    }
}

#[async_trait]
impl PetTypeRepository for InMemoryPetTypeRepository {
    async fn find_pet_types(&self) -> DomainResult<Vec<PetType>> {
        Ok(self.types.clone())
    }
}

/// 兽医目录（内存，按 id 排序）
pub struct InMemoryVetRepository {
    vets: Vec<Vet>,
}

impl InMemoryVetRepository {
    pub fn new(mut vets: Vec<Vet>) -> Self {
        vets.sort_by_key(Vet::id);
        Self { vets }
    }

    pub fn with_reference_data() -> Self {
        Self::new(reference::vets())
    }
}

#[async_trait]
impl VetRepository for InMemoryVetRepository {
    async fn find_all(&self, page: PageRequest) -> DomainResult<Page<Vet>> {
        Ok(page.slice(self.vets.clone()))
    }
}
