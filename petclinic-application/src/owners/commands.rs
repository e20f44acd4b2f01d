use crate::command::{Command, CommandHandler};
use crate::context::AppContext;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use petclinic_domain::aggregate_root::AggregateRoot;
use petclinic_domain::entity::Entity;
use petclinic_domain::error::DomainError;
use petclinic_domain::owner::{Owner, OwnerId, Pet, PetId, PetType, Visit, VisitId};
use petclinic_domain::persist::{OwnerRepository, PetTypeRepository};
use petclinic_domain::value_object::{Telephone, Version};
use std::sync::Arc;

type OwnerRoot = AggregateRoot<Owner, Arc<dyn OwnerRepository>>;

/// 主人的联系信息（创建与修改共用）
#[derive(Debug, Clone)]
pub struct OwnerDetails {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: Telephone,
}

#[derive(Debug, Clone)]
pub struct CreateOwner {
    pub details: OwnerDetails,
}

impl Command for CreateOwner {
    const NAME: &'static str = "CreateOwner";
    type Output = OwnerId;
}

/// 修改主人信息；`expected_version` 为编辑表单加载时的主人版本，缺省不校验
#[derive(Debug, Clone)]
pub struct UpdateOwner {
    pub owner_id: OwnerId,
    pub details: OwnerDetails,
    pub expected_version: Option<Version>,
}

impl Command for UpdateOwner {
    const NAME: &'static str = "UpdateOwner";
    type Output = ();
}

/// 为主人登记新宠物；`pet_type` 为宠物种类名称
#[derive(Debug, Clone)]
pub struct AddPet {
    pub owner_id: OwnerId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub pet_type: String,
}

impl Command for AddPet {
    const NAME: &'static str = "AddPet";
    type Output = PetId;
}

#[derive(Debug, Clone)]
pub struct UpdatePet {
    pub owner_id: OwnerId,
    pub pet_id: PetId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub pet_type: String,
    pub expected_version: Option<Version>,
}

impl Command for UpdatePet {
    const NAME: &'static str = "UpdatePet";
    type Output = ();
}

/// 为宠物追加就诊记录；`date` 缺省为当天
#[derive(Debug, Clone)]
pub struct AddVisit {
    pub owner_id: OwnerId,
    pub pet_id: PetId,
    pub date: Option<NaiveDate>,
    pub description: String,
}

impl Command for AddVisit {
    const NAME: &'static str = "AddVisit";
    type Output = VisitId;
}

pub struct CreateOwnerHandler {
    root: OwnerRoot,
}

impl CreateOwnerHandler {
    pub fn new(owners: Arc<dyn OwnerRepository>) -> Self {
        Self {
            root: AggregateRoot::new(owners),
        }
    }
}

#[async_trait]
impl CommandHandler<CreateOwner> for CreateOwnerHandler {
    async fn handle(&self, _ctx: &AppContext, cmd: CreateOwner) -> Result<OwnerId, AppError> {
        let d = cmd.details;
        let owner = Owner::builder()
            .first_name(d.first_name)
            .last_name(d.last_name)
            .address(d.address)
            .city(d.city)
            .telephone(d.telephone)
            .build();

        let saved = self.root.create(owner).await?;
        let id = saved.id().copied().ok_or_else(|| DomainError::InvalidState {
            reason: "saved owner has no id".to_string(),
        })?;
        tracing::info!(owner_id = %id, "owner created");
        Ok(id)
    }
}

pub struct UpdateOwnerHandler {
    root: OwnerRoot,
}

impl UpdateOwnerHandler {
    pub fn new(owners: Arc<dyn OwnerRepository>) -> Self {
        Self {
            root: AggregateRoot::new(owners),
        }
    }
}

#[async_trait]
impl CommandHandler<UpdateOwner> for UpdateOwnerHandler {
    async fn handle(&self, _ctx: &AppContext, cmd: UpdateOwner) -> Result<(), AppError> {
        let d = cmd.details;
        self.root
            .execute_expecting(&cmd.owner_id, cmd.expected_version, move |owner| {
                owner.set_first_name(d.first_name);
                owner.set_last_name(d.last_name);
                owner.set_address(d.address);
                owner.set_city(d.city);
                owner.set_telephone(d.telephone);
                Ok(())
            })
            .await
            .map_err(AppError::lift)?;
        Ok(())
    }
}

/// 宠物增改共用：按名称解析宠物种类
async fn resolve_pet_type(
    pet_types: &dyn PetTypeRepository,
    name: &str,
) -> Result<PetType, AppError> {
    pet_types
        .find_pet_types()
        .await?
        .into_iter()
        .find(|t| t.name() == name)
        .ok_or_else(|| AppError::validation("type", format!("unknown pet type '{name}'")))
}

const DUPLICATE_PET: &str = "already exists";

/// 宠物重名在聚合内表现为 `InvalidValue`，在用例层还原为字段校验错误
fn duplicate_name_to_validation(err: DomainError) -> AppError {
    match err {
        DomainError::InvalidValue { .. } => AppError::validation("name", DUPLICATE_PET),
        other => AppError::lift(other),
    }
}

pub struct AddPetHandler {
    root: OwnerRoot,
    pet_types: Arc<dyn PetTypeRepository>,
}

impl AddPetHandler {
    pub fn new(owners: Arc<dyn OwnerRepository>, pet_types: Arc<dyn PetTypeRepository>) -> Self {
        Self {
            root: AggregateRoot::new(owners),
            pet_types,
        }
    }
}

#[async_trait]
impl CommandHandler<AddPet> for AddPetHandler {
    async fn handle(&self, _ctx: &AppContext, cmd: AddPet) -> Result<PetId, AppError> {
        let pet_type = resolve_pet_type(self.pet_types.as_ref(), &cmd.pet_type).await?;
        let name = cmd.name;
        let pet = Pet::builder()
            .name(name.clone())
            .birth_date(cmd.birth_date)
            .pet_type(pet_type)
            .build();

        let (saved, ()) = self
            .root
            .execute(&cmd.owner_id, |owner| {
                if owner.has_pet_named(&name, None) {
                    return Err(DomainError::invalid_value(format!(
                        "pet '{name}' already exists"
                    )));
                }
                owner.add_pet(pet);
                Ok(())
            })
            .await
            .map_err(duplicate_name_to_validation)?;

        saved
            .pet(&name)
            .and_then(|p| p.id().copied())
            .ok_or_else(|| AppError::NotFound(format!("pet '{name}' after save")))
    }
}

pub struct UpdatePetHandler {
    root: OwnerRoot,
    pet_types: Arc<dyn PetTypeRepository>,
}

impl UpdatePetHandler {
    pub fn new(owners: Arc<dyn OwnerRepository>, pet_types: Arc<dyn PetTypeRepository>) -> Self {
        Self {
            root: AggregateRoot::new(owners),
            pet_types,
        }
    }
}

#[async_trait]
impl CommandHandler<UpdatePet> for UpdatePetHandler {
    async fn handle(&self, _ctx: &AppContext, cmd: UpdatePet) -> Result<(), AppError> {
        let pet_type = resolve_pet_type(self.pet_types.as_ref(), &cmd.pet_type).await?;
        let UpdatePet {
            owner_id,
            pet_id,
            name,
            birth_date,
            expected_version,
            ..
        } = cmd;

        self.root
            .execute_expecting(&owner_id, expected_version, move |owner| {
                if owner.has_pet_named(&name, Some(pet_id)) {
                    return Err(DomainError::invalid_value(format!(
                        "pet '{name}' already exists"
                    )));
                }
                owner.update_pet(pet_id, name, birth_date, pet_type)
            })
            .await
            .map_err(duplicate_name_to_validation)?;
        Ok(())
    }
}

pub struct AddVisitHandler {
    root: OwnerRoot,
}

impl AddVisitHandler {
    pub fn new(owners: Arc<dyn OwnerRepository>) -> Self {
        Self {
            root: AggregateRoot::new(owners),
        }
    }
}

#[async_trait]
impl CommandHandler<AddVisit> for AddVisitHandler {
    async fn handle(&self, ctx: &AppContext, cmd: AddVisit) -> Result<VisitId, AppError> {
        let visit = match cmd.date {
            Some(date) => Visit::new(date, cmd.description),
            None => Visit::today(cmd.description),
        }
        .map_err(|e| AppError::validation("description", e.to_string()))?;

        let pet_id = cmd.pet_id;
        let (saved, ()) = self
            .root
            .execute(&cmd.owner_id, move |owner| owner.add_visit(pet_id, visit))
            .await
            .inspect_err(|err| {
                tracing::error!(
                    owner_id = %cmd.owner_id,
                    pet_id = %pet_id,
                    correlation_id = ctx.correlation_id.as_deref(),
                    error = %err,
                    "failed to add visit"
                );
            })
            .map_err(AppError::lift)?;

        saved
            .pet_by_id(pet_id)
            .and_then(|p| p.visits().last())
            .and_then(|v| v.id().copied())
            .ok_or_else(|| AppError::NotFound(format!("visit for pet {pet_id} after save")))
    }
}
