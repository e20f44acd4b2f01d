use chrono::NaiveDate;
use petclinic_macros::{entity, entity_id};
use serde::{Deserialize, Serialize};

use super::{OwnerId, Visit};

#[entity_id]
pub struct PetId(i64);

#[entity_id]
pub struct PetTypeId(i64);

/// 宠物种类（共享只读参考数据）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetType {
    id: PetTypeId,
    name: String,
}

impl PetType {
    pub fn new(id: PetTypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> PetTypeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// 宠物：隶属于唯一的主人，拥有就诊记录
#[entity(id = PetId)]
#[derive(bon::Builder)]
pub struct Pet {
    owner_id: Option<OwnerId>,
    #[builder(into)]
    name: String,
    birth_date: NaiveDate,
    pet_type: PetType,
    #[builder(default)]
    visits: Vec<Visit>,
}

impl Pet {
    pub fn owner_id(&self) -> Option<OwnerId> {
        self.owner_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn pet_type(&self) -> &PetType {
        &self.pet_type
    }

    /// 就诊记录（按追加顺序）
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// 遍历就诊记录的可变引用（仅供仓储在保存后回写标识）
    pub fn visits_mut(&mut self) -> impl Iterator<Item = &mut Visit> {
        self.visits.iter_mut()
    }

    pub(super) fn attach_to(&mut self, owner_id: OwnerId) {
        self.owner_id = Some(owner_id);
        if let Some(pet_id) = self.id {
            for visit in &mut self.visits {
                visit.attach_to(pet_id);
            }
        }
    }

    pub(super) fn add_visit(&mut self, mut visit: Visit) {
        if let Some(pet_id) = self.id {
            visit.attach_to(pet_id);
        }
        self.visits.push(visit);
    }

    pub(super) fn update(&mut self, name: String, birth_date: NaiveDate, pet_type: PetType) {
        self.name = name;
        self.birth_date = birth_date;
        self.pet_type = pet_type;
    }
}
