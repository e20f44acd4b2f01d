use super::Owner;
use crate::specification::{AnySpecification, Specification};

/// 姓氏以给定前缀开头（区分大小写）；空前缀不匹配任何主人
pub struct LastNameStartsWith(String);

impl LastNameStartsWith {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }
}

impl Specification<Owner> for LastNameStartsWith {
    fn is_satisfied_by(&self, owner: &Owner) -> bool {
        !self.0.is_empty() && owner.last_name().starts_with(self.0.as_str())
    }
}

/// 匹配全部主人
pub fn all_owners() -> impl Specification<Owner> {
    AnySpecification
}
