use crate::validator::ValidationError;
use registrar_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("validation failed: {} violation(s)", violations.len())]
    Validation { violations: Vec<ValidationError> },
}

impl AppError {
    /// 取出校验违规明细（非校验错误返回空切片）
    pub fn violations(&self) -> &[ValidationError] {
        match self {
            AppError::Validation { violations } => violations,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for AppError {
    fn from(violations: Vec<ValidationError>) -> Self {
        AppError::Validation { violations }
    }
}
