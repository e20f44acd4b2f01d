use chrono::NaiveDate;
use petclinic_domain::entity::Entity;
use petclinic_domain::owner::{Owner, OwnerId, Pet, PetId, PetType, PetTypeId, Visit, VisitId};
use petclinic_domain::persist::Page;
use petclinic_domain::vet::{Vet, VetId};
use serde::Serialize;

/// 数据传输对象（DTO）
///
/// - 作为应用层的输出载体，面向接口/外部系统序列化友好；
/// - 与领域模型解耦，避免将领域对象直接暴露到接口层。
pub trait Dto: Serialize + Send + Sync + 'static {}

impl<T: Dto> Dto for Option<T> {}
impl<T: Dto> Dto for Vec<T> {}
impl<T: Dto> Dto for Page<T> {}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    pub id: Option<OwnerId>,
    pub version: usize,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    pub pets: Vec<PetDto>,
}

impl OwnerDto {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn pet(&self, pet_id: PetId) -> Option<&PetDto> {
        self.pets.iter().find(|p| p.id == Some(pet_id))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetDto {
    pub id: Option<PetId>,
    pub name: String,
    pub birth_date: NaiveDate,
    pub pet_type: String,
    pub visits: Vec<VisitDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitDto {
    pub id: Option<VisitId>,
    pub date: NaiveDate,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetTypeDto {
    pub id: PetTypeId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VetDto {
    pub id: VetId,
    pub first_name: String,
    pub last_name: String,
    pub specialties: Vec<String>,
}

impl Dto for OwnerDto {}
impl Dto for PetDto {}
impl Dto for VisitDto {}
impl Dto for PetTypeDto {}
impl Dto for VetDto {}

impl From<&Owner> for OwnerDto {
    fn from(owner: &Owner) -> Self {
        use petclinic_domain::aggregate::Aggregate;

        Self {
            id: owner.id().copied(),
            version: owner.version().value(),
            first_name: owner.first_name().to_string(),
            last_name: owner.last_name().to_string(),
            address: owner.address().to_string(),
            city: owner.city().to_string(),
            telephone: owner.telephone().to_string(),
            pets: owner.pets().iter().map(PetDto::from).collect(),
        }
    }
}

impl From<&Pet> for PetDto {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id().copied(),
            name: pet.name().to_string(),
            birth_date: pet.birth_date(),
            pet_type: pet.pet_type().name().to_string(),
            visits: pet.visits().iter().map(VisitDto::from).collect(),
        }
    }
}

impl From<&Visit> for VisitDto {
    fn from(visit: &Visit) -> Self {
        Self {
            id: visit.id().copied(),
            date: visit.date(),
            description: visit.description().to_string(),
        }
    }
}

impl From<&PetType> for PetTypeDto {
    fn from(pet_type: &PetType) -> Self {
        Self {
            id: pet_type.id(),
            name: pet_type.name().to_string(),
        }
    }
}

impl From<&Vet> for VetDto {
    fn from(vet: &Vet) -> Self {
        Self {
            id: vet.id(),
            first_name: vet.first_name().to_string(),
            last_name: vet.last_name().to_string(),
            specialties: vet.specialties().iter().map(|s| s.name().to_string()).collect(),
        }
    }
}
