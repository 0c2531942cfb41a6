//! 教务数据模型应用层（registrar-application）
//!
//! 承载规格中位于实体之外的协作方：
//! - 校验协作方（`validator`）：按字段元数据执行必填与长度规则，
//!   以结构化的 `ValidationError` 报告，不在实体内抛出控制流异常；
//! - 办公室目录（`office_directory`）：持久化边界上的共享标识关联
//!   （教师标识 → 分配记录，基数 1:0..1 由映射键保证）;
//! - 入学统计（`enrollment_stats`）：按入学日期分组计数的瞬态投影。
//!
pub mod dto;
pub mod enrollment_stats;
pub mod error;
pub mod office_directory;
pub mod validator;

pub use enrollment_stats::{EnrollmentDateGroup, group_by_enrollment_date};
pub use office_directory::OfficeDirectory;
pub use validator::{ValidationError, validate};
