//! 宠物诊所应用层（petclinic-application）
//!
//! 以 CQRS 方式组织用例：
//! - 命令（`Command`）经 [`InMemoryCommandBus`] 路由到处理器，按“加载聚合 → 修改 → 整体保存”执行；
//! - 查询（`Query`）经 [`InMemoryQueryBus`] 路由，返回与领域模型解耦的 DTO。
//!
//! [`bootstrap::register_handlers`] 将所有用例处理器注册到总线。
//!
pub mod bootstrap;
mod bus;
pub mod catalog;
pub mod command;
pub mod context;
pub mod dto;
pub mod error;
pub mod owners;
pub mod query;

pub use bus::{InMemoryCommandBus, InMemoryQueryBus};
