//! 聚合（Aggregate）抽象
//!
//! 聚合是一致性边界：内部实体只能经由聚合根修改，并随聚合根整体持久化。
//! 聚合携带版本号，用于乐观锁并发控制。
//!
use crate::entity::Entity;
use crate::value_object::Version;
use serde::{Serialize, de::DeserializeOwned};

/// 聚合根接口
pub trait Aggregate: Entity + Clone + Serialize + DeserializeOwned + Send + Sync {
    /// 聚合类型名（日志与错误信息使用）
    const TYPE: &'static str;

    /// 当前版本；从未保存过的聚合为 0
    fn version(&self) -> Version;

    /// 回写版本号（由仓储在保存成功后调用）
    fn set_version(&mut self, version: Version);
}
