//! 宠物主人相关用例：主人、宠物与就诊记录的增改，以及主人查询
//!
mod commands;
mod queries;

pub use commands::{
    AddPet, AddPetHandler, AddVisit, AddVisitHandler, CreateOwner, CreateOwnerHandler,
    OwnerDetails, UpdateOwner, UpdateOwnerHandler, UpdatePet, UpdatePetHandler,
};
pub use queries::{FindOwners, FindOwnersHandler, GetOwner, GetOwnerHandler};
