//! 校验协作方（Validator）
//!
//! 按实体发布的字段元数据逐项应用规约（必填、最大长度），
//! 产出结构化的违规清单（字段名 + 消息）交还调用方。
//! 实体自身不参与校验，也不因违规抛出控制流异常。
//!
use registrar_domain::metadata::{DescribeFields, FieldMetadata, FieldValue, FieldValues};
use registrar_domain::specification::{MaxLength, Required, Specification};
use serde::Serialize;
use std::fmt;

/// 单条校验违规：字段名与面向用户的消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn required_violation(md: &'static FieldMetadata) -> ValidationError {
    ValidationError {
        field: md.field,
        message: format!("The {} field is required.", md.label()),
    }
}

fn length_violation(md: &'static FieldMetadata, max: usize) -> ValidationError {
    let message = match md.length_message {
        Some(custom) => custom.to_string(),
        None => format!(
            "The field {} must be a string with a maximum length of {}.",
            md.label(),
            max
        ),
    };
    ValidationError {
        field: md.field,
        message,
    }
}

/// 校验一个实体的全部字段
///
/// - 必填字段缺值或为空串 → 必填违规；
/// - 超出最大长度（按 Unicode 标量值计）→ 长度违规；
/// - 可选字段缺值不构成违规；日期字段无文本规则可施加。
pub fn validate<T>(entity: &T) -> Result<(), Vec<ValidationError>>
where
    T: DescribeFields + FieldValues,
{
    let mut violations = Vec::new();

    for md in T::fields() {
        match entity.value_of(md.field) {
            None => {
                if md.required {
                    violations.push(required_violation(md));
                }
            }
            Some(FieldValue::Text(value)) => {
                if md.required && !Required.is_satisfied_by(&value) {
                    violations.push(required_violation(md));
                }
                if let Some(max) = md.max_length {
                    if !MaxLength::new(max).is_satisfied_by(&value) {
                        violations.push(length_violation(md, max));
                    }
                }
            }
            Some(FieldValue::Date(_)) => {}
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registrar_domain::entity::{InstructorId, PersonId};
    use registrar_domain::office_assignment::OfficeAssignment;
    use registrar_domain::person::Person;

    fn person(first: &str, last: &str) -> Person {
        Person::builder()
            .id(PersonId::new(1))
            .first_mid_name(first.to_string())
            .last_name(last.to_string())
            .build()
    }

    // 测试合法姓名通过校验
    #[test]
    fn test_valid_person_passes() {
        assert!(validate(&person("Jane", "Doe")).is_ok());
    }

    // 测试空姓名报告必填违规
    #[test]
    fn test_empty_names_report_required() {
        let errs = validate(&person("", "")).unwrap_err();
        let fields: Vec<_> = errs.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["first_mid_name", "last_name"]);
        assert_eq!(errs[1].message, "The Last Name field is required.");
    }

    // 测试 51 字符姓名报告长度违规（首名使用定制消息）
    #[test]
    fn test_over_length_names_report_length() {
        let long = "a".repeat(51);

        let errs = validate(&person(&long, "Doe")).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, "first_mid_name");
        assert_eq!(
            errs[0].message,
            "First name cannot be longer than 50 characters"
        );

        let errs = validate(&person("Jane", &long)).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, "last_name");
        assert_eq!(
            errs[0].message,
            "The field Last Name must be a string with a maximum length of 50."
        );
    }

    // 测试恰好 50 字符不违规（边界）
    #[test]
    fn test_exact_length_boundary() {
        let exact = "a".repeat(50);
        assert!(validate(&person(&exact, &exact)).is_ok());
    }

    // 测试地点缺省不构成违规
    #[test]
    fn test_absent_location_is_valid() {
        let office = OfficeAssignment::builder()
            .instructor_id(InstructorId::new(1))
            .build();
        assert!(validate(&office).is_ok());
    }

    // 测试超长地点报告长度违规
    #[test]
    fn test_over_length_location() {
        let office = OfficeAssignment::builder()
            .instructor_id(InstructorId::new(1))
            .location("x".repeat(51))
            .build();

        let errs = validate(&office).unwrap_err();
        assert_eq!(errs[0].field, "location");
        assert_eq!(
            errs[0].message,
            "The field Office Location must be a string with a maximum length of 50."
        );
    }
}
