//! 实体（Entity）基础抽象
//!
//! 为持久化记录提供统一的标识（Id）能力，以及本领域使用的整数标识新类型。
//!
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型，要求可解析、可显示与可克隆
    type Id: FromStr + Clone + fmt::Display + Eq;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;
}

/// 人员标识（整数新类型）
///
/// # 示例
///
/// ```
/// use registrar_domain::entity::PersonId;
///
/// let id = PersonId::new(42);
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
///
/// let parsed: PersonId = "42".parse().unwrap();
/// assert_eq!(parsed, id);
/// ```
#[derive(Default, Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(i32);

/// 教师标识（整数新类型）
///
/// `OfficeAssignment` 以该标识同时作为自身主键与指向教师实体的外键，
/// 由共享标识保证 1:0..1 的基数约束。
#[derive(Default, Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstructorId(i32);

macro_rules! impl_int_id {
    ($ident:ident) => {
        impl $ident {
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            pub const fn value(&self) -> i32 {
                self.0
            }
        }

        impl FromStr for $ident {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let inner: i32 = s.parse()?;
                Ok(Self(inner))
            }
        }

        impl fmt::Display for $ident {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<i32> for $ident {
            fn as_ref(&self) -> &i32 {
                &self.0
            }
        }

        impl From<$ident> for i32 {
            fn from(value: $ident) -> Self {
                value.0
            }
        }

        impl From<i32> for $ident {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }
    };
}

impl_int_id!(PersonId);
impl_int_id!(InstructorId);

#[cfg(test)]
mod tests {
    use super::*;

    // 测试标识的创建与取值
    #[test]
    fn test_id_new_and_value() {
        let id = InstructorId::new(7);
        assert_eq!(id.value(), 7);
        assert_eq!(*id.as_ref(), 7);
    }

    // 测试字符串解析与显示的往返
    #[test]
    fn test_id_from_str_and_display() {
        let id: PersonId = "15".parse().unwrap();
        assert_eq!(id, PersonId::new(15));
        assert_eq!(id.to_string(), "15");

        assert!("abc".parse::<PersonId>().is_err());
    }

    // 测试与内部整数的相互转换
    #[test]
    fn test_id_conversions() {
        let id: InstructorId = 3.into();
        let raw: i32 = id.into();
        assert_eq!(raw, 3);
    }

    // 测试相同整数值的不同标识类型互不混用（编译期约束，此处仅验证相等语义）
    #[test]
    fn test_id_equality() {
        assert_eq!(PersonId::new(1), PersonId::new(1));
        assert_ne!(PersonId::new(1), PersonId::new(2));
    }
}
