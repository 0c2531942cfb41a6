//! 办公室分配（OfficeAssignment）实体
//!
//! 键值式扩展记录：`instructor_id` 同时作为本记录主键与指向教师实体的外键
//! （共享标识关联，基数 1:0..1 由构造保证）。教师侧仅以标识回查，
//! 不持有对象引用，避免环状所有权。
//!
//! `location` 为可选：`None` 表示"已有分配记录但尚未指定地点"，
//! 与"分配记录不存在"相区别。
//!
use crate::entity::{Entity, InstructorId};
use crate::metadata::{DataType, DescribeFields, FieldMetadata, FieldValue, FieldValues};
use bon::Builder;
use serde::{Deserialize, Serialize};

/// 办公室分配记录
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfficeAssignment {
    /// 教师标识（主键兼外键）
    #[serde(rename = "InstructorID")]
    instructor_id: InstructorId,
    /// 办公地点（≤50 字符，可缺省）
    location: Option<String>,
}

impl OfficeAssignment {
    pub fn instructor_id(&self) -> InstructorId {
        self.instructor_id
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn set_location(&mut self, value: Option<String>) {
        self.location = value;
    }
}

impl Entity for OfficeAssignment {
    type Id = InstructorId;

    fn id(&self) -> &Self::Id {
        &self.instructor_id
    }
}

impl DescribeFields for OfficeAssignment {
    fn fields() -> &'static [FieldMetadata] {
        const FIELDS: &[FieldMetadata] = &[FieldMetadata {
            field: "location",
            column: None,
            display_label: Some("Office Location"),
            required: false,
            max_length: Some(50),
            data_type: DataType::Text,
            length_message: None,
        }];
        FIELDS
    }
}

impl FieldValues for OfficeAssignment {
    fn value_of(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "location" => self.location.as_deref().map(FieldValue::Text),
            _ => None,
        }
    }
}
