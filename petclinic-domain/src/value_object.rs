//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//!
use std::{fmt, str::FromStr};

use petclinic_macros::value_object;

use crate::error::{DomainError, DomainResult};

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 校验值是否满足业务约束
    fn validate(&self) -> Result<(), Self::Error>;
}

/// 聚合版本号（乐观锁）
///
/// 从未保存过的聚合版本为 0，每次成功保存递增 1。
///
/// ```
/// use petclinic_domain::value_object::Version;
///
/// let v = Version::new();
/// assert!(v.is_new());
/// assert_eq!(v.next().value(), 1);
/// ```
#[value_object]
#[derive(Copy, PartialOrd, Ord, Hash)]
pub struct Version(usize);

impl Version {
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn from_value(value: usize) -> Self {
        Self(value)
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    pub const fn value(&self) -> usize {
        self.0
    }

    pub fn is_new(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for Version {
    fn from(value: usize) -> Self {
        Self::from_value(value)
    }
}

/// 电话号码：恰好 10 位数字；反序列化同样经过校验
///
/// ```
/// use petclinic_domain::value_object::Telephone;
///
/// assert!(Telephone::parse("6085551023").is_ok());
/// assert!(Telephone::parse("608-555-1023").is_err());
/// ```
#[value_object(default = false)]
#[serde(try_from = "String")]
pub struct Telephone(String);

impl Telephone {
    pub const DIGITS: usize = 10;

    /// 解析并校验电话号码
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let telephone = Self(value.into());
        telephone.validate()?;
        Ok(telephone)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Telephone {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.0.len() == Self::DIGITS && self.0.bytes().all(|b| b.is_ascii_digit()) {
            Ok(())
        } else {
            Err(DomainError::invalid_value(format!(
                "telephone must be a {}-digit number",
                Self::DIGITS
            )))
        }
    }
}

impl TryFrom<String> for Telephone {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl FromStr for Telephone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Telephone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
