//! 实体（Entity）基础抽象
//!
//! 实体以代理主键标识：内存中新建的实体没有标识，首次持久化时由仓储分配。
//!
use std::{fmt::Display, str::FromStr};

/// 具备（可选）唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型，要求可解析、可显示与可复制
    type Id: FromStr + Copy + Display + PartialEq + Send + Sync;

    /// 获取实体标识；尚未持久化时为 `None`
    fn id(&self) -> Option<&Self::Id>;

    /// 分配标识（由仓储在插入成功后调用）
    fn assign_id(&mut self, id: Self::Id);

    /// 是否为尚未持久化的新实体
    fn is_new(&self) -> bool {
        self.id().is_none()
    }
}
