//! 字段元数据（Field Metadata）
//!
//! 以声明式表格重述原有框架注解：必填、长度上限、展示标签、
//! 持久化列名覆盖与数据类型提示。实体只发布元数据，
//! 解释与执行由外部协作方（校验、持久化、展示）完成。
//!
use chrono::NaiveDate;
use serde::Serialize;

/// 数据类型提示（面向展示协作方的渲染线索）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataType {
    /// 普通文本
    Text,
    /// 仅日期（无时间部分）
    Date,
}

/// 单个字段的约束与展示元数据
#[derive(Debug, Clone, Serialize)]
pub struct FieldMetadata {
    /// 字段名（Rust 侧命名）
    pub field: &'static str,
    /// 持久化列名覆盖（缺省表示沿用序列化名）
    pub column: Option<&'static str>,
    /// 展示标签（缺省回退为字段名）
    pub display_label: Option<&'static str>,
    /// 是否必填
    pub required: bool,
    /// 最大长度（以 Unicode 标量值计）
    pub max_length: Option<usize>,
    /// 数据类型提示
    pub data_type: DataType,
    /// 长度违规的定制消息（缺省使用统一模板）
    pub length_message: Option<&'static str>,
}

impl FieldMetadata {
    /// 展示标签，未配置时回退为字段名
    pub fn label(&self) -> &'static str {
        self.display_label.unwrap_or(self.field)
    }
}

/// 发布字段元数据表的类型
pub trait DescribeFields {
    /// 全部字段的元数据（含派生字段的展示条目）
    fn fields() -> &'static [FieldMetadata];

    /// 按字段名查找元数据
    fn field_metadata(name: &str) -> Option<&'static FieldMetadata> {
        Self::fields().iter().find(|md| md.field == name)
    }

    /// 按字段名查找展示标签
    fn display_label(name: &str) -> Option<&'static str> {
        Self::field_metadata(name).map(FieldMetadata::label)
    }
}

/// 校验视角下的字段取值
///
/// 可选字段缺值（如尚未分配办公地点）由 `value_of` 返回 `None` 表达，
/// 与空字符串相区别。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Date(NaiveDate),
}

/// 按字段名反射取值的类型（供元数据驱动的校验协作方使用）
pub trait FieldValues {
    /// 返回字段当前取值；派生字段与缺值的可选字段返回 `None`
    fn value_of(&self, field: &str) -> Option<FieldValue<'_>>;
}
