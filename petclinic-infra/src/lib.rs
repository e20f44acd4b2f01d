//! 宠物诊所基础设施层（petclinic-infra）
//!
//! 提供领域层仓储接口的两套实现：
//! - [`sqlite`]：基于 sqlx 的 SQLite 持久化（建表、参考数据、聚合级联保存）；
//! - [`memory`]：基于 DashMap 的内存实现，语义与 SQLite 实现一致，便于测试。
//!
pub mod memory;
pub mod reference;
pub mod sqlite;
