//! 内存仓储实现（测试与本地演示使用）
//!
mod catalog;
mod owner_repository;

pub use catalog::{InMemoryPetTypeRepository, InMemoryVetRepository};
pub use owner_repository::InMemoryOwnerRepository;
