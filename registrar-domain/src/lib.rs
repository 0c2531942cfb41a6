//! 教务数据模型领域层（registrar-domain）
//!
//! 为大学教务系统提供纯数据层面的领域模型与约束描述：
//! - 实体（`entity`）：标识抽象与整数标识新类型（`PersonId`、`InstructorId`）
//! - 人员（`person`）：姓名字段与派生全名（永不存储、按需计算）
//! - 办公室分配（`office_assignment`）：以教师标识为主键兼外键的扩展记录
//! - 字段元数据（`metadata`）：以声明式表格表达必填、长度上限、展示标签与数据类型
//! - 规约（`specification`）：可组合的字段规则（必填、最大长度）
//!
//! 本 crate 不承担持久化、校验引擎与界面渲染；实体保持纯数据，
//! 校验与聚合由应用层协作方（registrar-application）基于元数据执行。
//!
pub mod entity;
pub mod error;
pub mod metadata;
pub mod office_assignment;
pub mod person;
pub mod specification;
