//! 规约（Specification）
//!
//! 封装字段级业务规则，使其可复用、可组合和可测试。
//! 校验协作方据元数据逐项应用 [`Required`] 与 [`MaxLength`]。
//!

/// 规约模式的核心 trait
pub trait Specification<T> {
    /// 检查候选对象是否满足规约
    fn is_satisfied_by(&self, candidate: &T) -> bool;

    /// 与另一个规约进行 AND 组合
    fn and<S>(self, other: S) -> AndSpecification<T>
    where
        Self: Sized + 'static,
        S: Specification<T> + 'static,
    {
        AndSpecification::new(Box::new(self), Box::new(other))
    }

    /// 与另一个规约进行 OR 组合
    fn or<S>(self, other: S) -> OrSpecification<T>
    where
        Self: Sized + 'static,
        S: Specification<T> + 'static,
    {
        OrSpecification::new(Box::new(self), Box::new(other))
    }

    /// 对规约进行 NOT 操作
    fn not(self) -> NotSpecification<T>
    where
        Self: Sized + 'static,
    {
        NotSpecification::new(Box::new(self))
    }
}

impl<T> Specification<T> for Box<dyn Specification<T>> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.as_ref().is_satisfied_by(candidate)
    }
}

/// AND 组合规约：两个规约都满足时才满足
pub struct AndSpecification<T> {
    left: Box<dyn Specification<T>>,
    right: Box<dyn Specification<T>>,
}

impl<T> AndSpecification<T> {
    pub fn new(left: Box<dyn Specification<T>>, right: Box<dyn Specification<T>>) -> Self {
        Self { left, right }
    }
}

impl<T> Specification<T> for AndSpecification<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate) && self.right.is_satisfied_by(candidate)
    }
}

/// OR 组合规约：任意一个规约满足即满足
pub struct OrSpecification<T> {
    left: Box<dyn Specification<T>>,
    right: Box<dyn Specification<T>>,
}

impl<T> OrSpecification<T> {
    pub fn new(left: Box<dyn Specification<T>>, right: Box<dyn Specification<T>>) -> Self {
        Self { left, right }
    }
}

impl<T> Specification<T> for OrSpecification<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate) || self.right.is_satisfied_by(candidate)
    }
}

/// NOT 规约：内部规约不满足时才满足
pub struct NotSpecification<T> {
    inner: Box<dyn Specification<T>>,
}

impl<T> NotSpecification<T> {
    pub fn new(inner: Box<dyn Specification<T>>) -> Self {
        Self { inner }
    }
}

impl<T> Specification<T> for NotSpecification<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        !self.inner.is_satisfied_by(candidate)
    }
}

/// 必填规则：字符串字段非空
///
/// # 示例
///
/// ```
/// use registrar_domain::specification::{Required, Specification};
///
/// assert!(Required.is_satisfied_by(&"Doe"));
/// assert!(!Required.is_satisfied_by(&""));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Required;

impl<'a> Specification<&'a str> for Required {
    fn is_satisfied_by(&self, candidate: &&'a str) -> bool {
        !candidate.is_empty()
    }
}

/// 最大长度规则：以 Unicode 标量值计数
#[derive(Debug, Clone, Copy)]
pub struct MaxLength(usize);

impl MaxLength {
    pub const fn new(max: usize) -> Self {
        Self(max)
    }

    pub const fn max(&self) -> usize {
        self.0
    }
}

impl<'a> Specification<&'a str> for MaxLength {
    fn is_satisfied_by(&self, candidate: &&'a str) -> bool {
        candidate.chars().count() <= self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 测试必填规则
    #[test]
    fn test_required() {
        assert!(Required.is_satisfied_by(&"Jane"));
        assert!(!Required.is_satisfied_by(&""));
    }

    // 测试最大长度规则（按字符而非字节计数）
    #[test]
    fn test_max_length() {
        let spec = MaxLength::new(50);
        assert!(spec.is_satisfied_by(&"Mondrian Hall 304"));
        assert!(spec.is_satisfied_by(&"a".repeat(50).as_str()));
        assert!(!spec.is_satisfied_by(&"a".repeat(51).as_str()));

        // 多字节字符按标量值计一
        let spec = MaxLength::new(2);
        assert!(spec.is_satisfied_by(&"日本"));
        assert!(!spec.is_satisfied_by(&"日本語"));
    }

    // 测试姓名字段的完整规则组合：必填且不超过 50 字符
    #[test]
    fn test_name_rule_combination() {
        let rule = Required.and(MaxLength::new(50));
        assert!(rule.is_satisfied_by(&"Abercrombie"));
        assert!(!rule.is_satisfied_by(&""));
    }

    // 测试 OR 与 NOT 组合
    #[test]
    fn test_or_and_not() {
        let blank_or_short = Required.not().or(MaxLength::new(3));
        assert!(blank_or_short.is_satisfied_by(&""));
        assert!(blank_or_short.is_satisfied_by(&"Kim"));
        assert!(!blank_or_short.is_satisfied_by(&"Justice"));
    }
}
