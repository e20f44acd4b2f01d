//! 持久化边界（persist）
//!
//! 定义聚合仓储与只读参考数据仓储的接口，以及分页请求/结果：
//! - `AggregateRepository`：按 id 加载聚合、整体保存（级联插入/更新子实体）；
//! - `OwnerRepository`：在聚合仓储之上提供按姓氏前缀的分页查询；
//! - `PetTypeRepository` / `VetRepository`：参考数据查询。
//!
//! 该模块只定义协议，具体存储后端（SQLite、内存）由基础设施层实现并注入。
//!
mod aggregate_repository;
mod page;
mod repositories;

pub use aggregate_repository::AggregateRepository;
pub use page::{Page, PageRequest};
pub use repositories::{OwnerRepository, PetTypeRepository, VetRepository};
