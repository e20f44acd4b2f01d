//! 进程内总线：命令与查询共用同一份类型擦除的处理器表
//!
mod commands;
mod queries;
mod registry;

pub use commands::InMemoryCommandBus;
pub use queries::InMemoryQueryBus;
