//! 用例装配：将所有处理器注册到命令/查询总线
//!
use crate::catalog::{ListPetTypes, ListPetTypesHandler, ListVets, ListVetsHandler};
use crate::error::AppError;
use crate::owners::{
    AddPet, AddPetHandler, AddVisit, AddVisitHandler, CreateOwner, CreateOwnerHandler,
    FindOwners, FindOwnersHandler, GetOwner, GetOwnerHandler, UpdateOwner, UpdateOwnerHandler,
    UpdatePet, UpdatePetHandler,
};
use crate::{InMemoryCommandBus, InMemoryQueryBus};
use petclinic_domain::persist::{OwnerRepository, PetTypeRepository, VetRepository};
use std::sync::Arc;

/// 用例依赖的仓储集合（由基础设施层提供具体实现）
#[derive(Clone)]
pub struct Repositories {
    pub owners: Arc<dyn OwnerRepository>,
    pub pet_types: Arc<dyn PetTypeRepository>,
    pub vets: Arc<dyn VetRepository>,
}

/// 已装配好的命令/查询总线
#[derive(Clone)]
pub struct Buses {
    pub commands: Arc<InMemoryCommandBus>,
    pub queries: Arc<InMemoryQueryBus>,
}

pub fn register_handlers(
    commands: &InMemoryCommandBus,
    queries: &InMemoryQueryBus,
    repos: &Repositories,
) -> Result<(), AppError> {
    let owners = &repos.owners;
    let pet_types = &repos.pet_types;

    commands.register::<CreateOwner, _>(Arc::new(CreateOwnerHandler::new(owners.clone())))?;
    commands.register::<UpdateOwner, _>(Arc::new(UpdateOwnerHandler::new(owners.clone())))?;
    commands.register::<AddPet, _>(Arc::new(AddPetHandler::new(
        owners.clone(),
        pet_types.clone(),
    )))?;
    commands.register::<UpdatePet, _>(Arc::new(UpdatePetHandler::new(
        owners.clone(),
        pet_types.clone(),
    )))?;
    commands.register::<AddVisit, _>(Arc::new(AddVisitHandler::new(owners.clone())))?;

    queries.register::<GetOwner, _>(Arc::new(GetOwnerHandler::new(owners.clone())))?;
    queries.register::<FindOwners, _>(Arc::new(FindOwnersHandler::new(owners.clone())))?;
    queries.register::<ListPetTypes, _>(Arc::new(ListPetTypesHandler::new(pet_types.clone())))?;
    queries.register::<ListVets, _>(Arc::new(ListVetsHandler::new(repos.vets.clone())))?;

    tracing::debug!(
        commands = ?commands.registered_commands(),
        queries = ?queries.registered_queries(),
        "application handlers registered"
    );
    Ok(())
}

impl Buses {
    /// 新建总线并注册全部处理器
    pub fn build(repos: &Repositories) -> Result<Self, AppError> {
        let commands = InMemoryCommandBus::new();
        let queries = InMemoryQueryBus::new();
        register_handlers(&commands, &queries, repos)?;
        Ok(Self {
            commands: Arc::new(commands),
            queries: Arc::new(queries),
        })
    }
}
