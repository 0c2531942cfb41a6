//! 入学统计（Enrollment Statistics）
//!
//! 将学生入学日期（仅日期，无时间部分）分组计数，
//! 产出瞬态投影 [`EnrollmentDateGroup`]：不持久化，用后即弃。
//!
use crate::dto::Dto;
use bon::Builder;
use chrono::NaiveDate;
use registrar_domain::metadata::{DataType, DescribeFields, FieldMetadata, FieldValue, FieldValues};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 某一入学日期及该日入学的学生数
///
/// 计数为无符号整数，非负由构造保证。
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnrollmentDateGroup {
    /// 入学日期（仅日期）
    enrollment_date: NaiveDate,
    /// 学生数
    student_count: u64,
}

impl EnrollmentDateGroup {
    pub fn enrollment_date(&self) -> NaiveDate {
        self.enrollment_date
    }

    pub fn student_count(&self) -> u64 {
        self.student_count
    }
}

impl Dto for EnrollmentDateGroup {}

impl DescribeFields for EnrollmentDateGroup {
    fn fields() -> &'static [FieldMetadata] {
        const FIELDS: &[FieldMetadata] = &[FieldMetadata {
            field: "enrollment_date",
            column: None,
            display_label: None,
            required: false,
            max_length: None,
            data_type: DataType::Date,
            length_message: None,
        }];
        FIELDS
    }
}

impl FieldValues for EnrollmentDateGroup {
    fn value_of(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "enrollment_date" => Some(FieldValue::Date(self.enrollment_date)),
            _ => None,
        }
    }
}

/// 按入学日期分组计数
///
/// 输入为各学生的入学日期；输出按日期升序，每个日期一组。
/// 空输入产出空结果。
///
/// # 示例
///
/// ```
/// use chrono::NaiveDate;
/// use registrar_application::enrollment_stats::group_by_enrollment_date;
///
/// let d = |s: &str| s.parse::<NaiveDate>().unwrap();
/// let groups = group_by_enrollment_date([d("2005-09-01"), d("2002-09-01"), d("2005-09-01")]);
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].enrollment_date(), d("2002-09-01"));
/// assert_eq!(groups[0].student_count(), 1);
/// assert_eq!(groups[1].student_count(), 2);
/// ```
pub fn group_by_enrollment_date<I>(enrollment_dates: I) -> Vec<EnrollmentDateGroup>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for date in enrollment_dates {
        *counts.entry(date).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(enrollment_date, student_count)| {
            EnrollmentDateGroup::builder()
                .enrollment_date(enrollment_date)
                .student_count(student_count)
                .build()
        })
        .collect()
}
