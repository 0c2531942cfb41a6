//! 人员（Person）实体
//!
//! 身份与姓名字段的纯数据载体：
//! - `full_name` 为派生值，按需由当前姓与名拼接，永不存储；
//! - 字段约束（必填、≤50 字符）仅以元数据发布，由校验协作方执行；
//! - `first_mid_name` 的持久化列名覆盖为 `FirstName`，随序列化名携带。
//!
use crate::entity::{Entity, PersonId};
use crate::metadata::{DataType, DescribeFields, FieldMetadata, FieldValue, FieldValues};
use bon::Builder;
use serde::{Deserialize, Serialize};

/// 人员实体
///
/// # 示例
///
/// ```
/// use registrar_domain::entity::PersonId;
/// use registrar_domain::person::Person;
///
/// let person = Person::builder()
///     .id(PersonId::new(1))
///     .first_mid_name("Jane".to_string())
///     .last_name("Doe".to_string())
///     .build();
///
/// assert_eq!(person.full_name(), "Doe, Jane");
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Person {
    /// 人员标识
    #[serde(rename = "ID")]
    id: PersonId,
    /// 名（含中间名），持久化列名为 FirstName
    #[serde(rename = "FirstName")]
    first_mid_name: String,
    /// 姓
    last_name: String,
}

impl Person {
    pub fn first_mid_name(&self) -> &str {
        &self.first_mid_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// 派生全名：`"{姓}, {名}"`
    ///
    /// 每次访问重新计算，不缓存、无副作用，与标识无关。
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_mid_name)
    }

    pub fn set_first_mid_name(&mut self, value: String) {
        self.first_mid_name = value;
    }

    pub fn set_last_name(&mut self, value: String) {
        self.last_name = value;
    }
}

impl Entity for Person {
    type Id = PersonId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl DescribeFields for Person {
    fn fields() -> &'static [FieldMetadata] {
        const FIELDS: &[FieldMetadata] = &[
            FieldMetadata {
                field: "first_mid_name",
                column: Some("FirstName"),
                display_label: Some("First Name"),
                required: true,
                max_length: Some(50),
                data_type: DataType::Text,
                length_message: Some("First name cannot be longer than 50 characters"),
            },
            FieldMetadata {
                field: "last_name",
                column: None,
                display_label: Some("Last Name"),
                required: true,
                max_length: Some(50),
                data_type: DataType::Text,
                length_message: None,
            },
            // 派生字段仅携带展示条目，不参与校验与存储
            FieldMetadata {
                field: "full_name",
                column: None,
                display_label: Some("Full Name"),
                required: false,
                max_length: None,
                data_type: DataType::Text,
                length_message: None,
            },
        ];
        FIELDS
    }
}

impl FieldValues for Person {
    fn value_of(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "first_mid_name" => Some(FieldValue::Text(&self.first_mid_name)),
            "last_name" => Some(FieldValue::Text(&self.last_name)),
            _ => None,
        }
    }
}
