//! 办公室目录（OfficeDirectory）
//!
//! 持久化边界上的共享标识关联：教师标识 → 分配记录。
//! 映射键即记录主键，基数 1:0..1 由构造保证；
//! 教师侧通过标识回查记录，不持有对象引用。
//!
use crate::error::AppError;
use crate::validator::validate;
use registrar_domain::entity::InstructorId;
use registrar_domain::error::{DomainError, DomainResult};
use registrar_domain::office_assignment::OfficeAssignment;
use std::collections::BTreeMap;

/// 教师办公室分配目录
#[derive(Debug, Default, Clone)]
pub struct OfficeDirectory {
    offices: BTreeMap<InstructorId, OfficeAssignment>,
}

impl OfficeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 录入（或替换）一名教师的分配记录
    ///
    /// 先经校验协作方检查字段约束，违规则拒绝录入并报告明细。
    /// 同一教师重复录入按替换处理，返回被替换的旧记录。
    pub fn assign(&mut self, record: OfficeAssignment) -> Result<Option<OfficeAssignment>, AppError> {
        validate(&record)?;
        Ok(self.offices.insert(record.instructor_id(), record))
    }

    /// 按教师标识查找分配记录
    pub fn lookup(&self, instructor_id: InstructorId) -> Option<&OfficeAssignment> {
        self.offices.get(&instructor_id)
    }

    /// 是否存在该教师的分配记录
    pub fn contains(&self, instructor_id: InstructorId) -> bool {
        self.offices.contains_key(&instructor_id)
    }

    /// 教师当前的办公地点
    ///
    /// 与 [`lookup`](Self::lookup) 配合可区分两种缺失：
    /// 记录不存在，与记录存在但地点未指定（二者均返回 `None`）。
    pub fn location_of(&self, instructor_id: InstructorId) -> Option<&str> {
        self.offices
            .get(&instructor_id)
            .and_then(OfficeAssignment::location)
    }

    /// 移除一名教师的分配记录（教师离职或取消分配时）
    pub fn remove(&mut self, instructor_id: InstructorId) -> DomainResult<OfficeAssignment> {
        self.offices
            .remove(&instructor_id)
            .ok_or_else(|| DomainError::NotFound {
                reason: format!("no office assignment for instructor {instructor_id}"),
            })
    }

    pub fn len(&self) -> usize {
        self.offices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offices.is_empty()
    }

    /// 按教师标识升序遍历全部记录
    pub fn iter(&self) -> impl Iterator<Item = &OfficeAssignment> {
        self.offices.values()
    }
}
