//! 宠物主人聚合（Owner）
//!
//! `Owner` 是聚合根，按插入顺序拥有若干 `Pet`，每个 `Pet` 拥有若干 `Visit`。
//! 子实体对父实体的反向引用以标识（非拥有）表示，在父实体获得标识后同步。
//!
mod pet;
mod search;
mod visit;

pub use pet::{Pet, PetId, PetType, PetTypeId};
pub use search::{LastNameStartsWith, all_owners};
pub use visit::{Visit, VisitId};

use chrono::NaiveDate;
use petclinic_macros::{entity, entity_id};

use crate::aggregate::Aggregate;
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::value_object::{Telephone, Version};

#[entity_id]
pub struct OwnerId(i64);

/// 宠物主人（聚合根）
///
/// 通过 `Owner::builder()` 创建新主人或从存储重建。
#[entity(id = OwnerId)]
#[derive(bon::Builder)]
pub struct Owner {
    #[builder(default)]
    version: Version,
    #[builder(into)]
    first_name: String,
    #[builder(into)]
    last_name: String,
    #[builder(into)]
    address: String,
    #[builder(into)]
    city: String,
    telephone: Telephone,
    #[builder(default)]
    pets: Vec<Pet>,
}

impl Aggregate for Owner {
    const TYPE: &'static str = "owner";

    fn version(&self) -> Version {
        self.version
    }

    fn set_version(&mut self, version: Version) {
        self.version = version;
    }
}

impl Owner {
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn telephone(&self) -> &Telephone {
        &self.telephone
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    pub fn set_telephone(&mut self, telephone: Telephone) {
        self.telephone = telephone;
    }

    /// 追加宠物并建立反向引用。不检查重名，重名校验见 [`Owner::has_pet_named`]。
    pub fn add_pet(&mut self, mut pet: Pet) {
        if let Some(owner_id) = self.id {
            pet.attach_to(owner_id);
        }
        self.pets.push(pet);
    }

    /// 按名称查找宠物（忽略大小写，返回首个匹配）
    pub fn pet(&self, name: &str) -> Option<&Pet> {
        let wanted = name.to_lowercase();
        self.pets.iter().find(|p| p.name().to_lowercase() == wanted)
    }

    pub fn pet_by_id(&self, pet_id: PetId) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id() == Some(&pet_id))
    }

    /// 是否已有同名宠物；`excluding` 用于编辑时排除宠物自身
    pub fn has_pet_named(&self, name: &str, excluding: Option<PetId>) -> bool {
        let wanted = name.to_lowercase();
        self.pets.iter().any(|p| {
            p.name().to_lowercase() == wanted && (excluding.is_none() || p.id() != excluding.as_ref())
        })
    }

    /// 为指定宠物追加就诊记录；宠物不属于本聚合时返回 `NotFound` 且不做任何修改
    pub fn add_visit(&mut self, pet_id: PetId, visit: Visit) -> DomainResult<()> {
        let owner = self.describe();
        let pet = self.pet_by_id_mut(pet_id).ok_or_else(|| {
            DomainError::not_found(format!("pet {pet_id} is not owned by {owner}"))
        })?;
        pet.add_visit(visit);
        Ok(())
    }

    /// 修改宠物信息；宠物不属于本聚合时返回 `NotFound`
    pub fn update_pet(
        &mut self,
        pet_id: PetId,
        name: impl Into<String>,
        birth_date: NaiveDate,
        pet_type: PetType,
    ) -> DomainResult<()> {
        let owner = self.describe();
        let pet = self.pet_by_id_mut(pet_id).ok_or_else(|| {
            DomainError::not_found(format!("pet {pet_id} is not owned by {owner}"))
        })?;
        pet.update(name.into(), birth_date, pet_type);
        Ok(())
    }

    /// 遍历宠物的可变引用（仅供仓储在保存后回写标识）
    pub fn pets_mut(&mut self) -> impl Iterator<Item = &mut Pet> {
        self.pets.iter_mut()
    }

    /// 同步子实体的反向引用（Pet → Owner、Visit → Pet）
    pub fn link_children(&mut self) {
        let Some(owner_id) = self.id else {
            return;
        };
        for pet in &mut self.pets {
            pet.attach_to(owner_id);
        }
    }

    fn pet_by_id_mut(&mut self, pet_id: PetId) -> Option<&mut Pet> {
        self.pets.iter_mut().find(|p| p.id() == Some(&pet_id))
    }

    fn describe(&self) -> String {
        match self.id {
            Some(id) => format!("owner {id}"),
            None => "unsaved owner".to_string(),
        }
    }
}
