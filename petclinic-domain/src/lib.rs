//! 宠物诊所领域层（petclinic-domain）
//!
//! 以 DDD 方式描述诊所的核心模型：
//! - 聚合根 `Owner`（宠物主人）拥有 `Pet`，`Pet` 拥有 `Visit`（就诊记录）
//! - 共享参考数据：`PetType`（宠物种类）与 `Vet`（兽医及其专长）
//! - 仓储接口（`persist`）：聚合整体保存（级联）、按 id 加载、按姓氏前缀分页查询
//! - 规约（`specification`）与值对象（`value_object`）等通用模式
//!
//! 所有对 `Pet`/`Visit` 的修改都必须经由 `Owner` 聚合根完成，
//! 并通过一次 `OwnerRepository::save` 持久化整棵聚合树。
//!
pub mod aggregate;
pub mod aggregate_root;
pub mod entity;
pub mod error;
pub mod owner;
pub mod persist;
pub mod specification;
pub mod value_object;
pub mod vet;

// 允许在本 crate 内部通过 ::petclinic_domain 进行自引用，
// 以便过程宏生成的路径在本 crate 内也能解析。
extern crate self as petclinic_domain;
