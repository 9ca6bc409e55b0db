//! 错误类型定义

use crate::entity::ShapeId;
use thiserror::Error;

/// 图元构造参数校验错误
///
/// 构造失败时图元不会被创建，错误中记录出错的参数名和原因。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Parameter '{param}' must be a number, got '{value}'")]
    NonNumeric { param: &'static str, value: String },

    #[error("Parameter '{param}' must be finite, got {value}")]
    NonFinite { param: &'static str, value: f64 },

    #[error("Parameter '{param}' must be greater than zero, got {value}")]
    NonPositive { param: &'static str, value: f64 },

    #[error("Parameter '{param}' must be an integer, got {value}")]
    NonIntegerCount { param: &'static str, value: f64 },

    #[error("Parameter '{param}' must be at least {min}, got {value}")]
    TooFewSides {
        param: &'static str,
        value: f64,
        min: u32,
    },

    #[error("Parameter '{param}' must be at most {max}, got {value}")]
    TooManySides {
        param: &'static str,
        value: f64,
        max: u32,
    },

    #[error("{shape} expects {expected} parameters, got {got}")]
    WrongArity {
        shape: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Derived quantity '{quantity}' is not finite for the given parameters")]
    DerivedOverflow { quantity: &'static str },
}

impl ValidationError {
    /// 出错的参数名（参数个数错误或派生量溢出时为 None）
    pub fn param(&self) -> Option<&'static str> {
        match self {
            ValidationError::NonNumeric { param, .. }
            | ValidationError::NonFinite { param, .. }
            | ValidationError::NonPositive { param, .. }
            | ValidationError::NonIntegerCount { param, .. }
            | ValidationError::TooFewSides { param, .. }
            | ValidationError::TooManySides { param, .. } => Some(param),
            ValidationError::WrongArity { .. } | ValidationError::DerivedOverflow { .. } => None,
        }
    }
}

/// 编辑器层面的操作错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Unknown shape type '{0}'")]
    UnknownShapeType(String),

    #[error("Shape with id {0} not found")]
    ShapeNotFound(ShapeId),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// 校验结果类型
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::NonPositive {
            param: "radius",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "Parameter 'radius' must be greater than zero, got -1"
        );
        assert_eq!(err.param(), Some("radius"));

        let err = ValidationError::WrongArity {
            shape: "Circle",
            expected: 3,
            got: 2,
        };
        assert_eq!(err.to_string(), "Circle expects 3 parameters, got 2");
        assert_eq!(err.param(), None);

        let err = ValidationError::DerivedOverflow { quantity: "area" };
        assert_eq!(
            err.to_string(),
            "Derived quantity 'area' is not finite for the given parameters"
        );
        assert_eq!(err.param(), None);
    }

    #[test]
    fn test_editor_error_from_validation() {
        let err: EditorError = ValidationError::NonNumeric {
            param: "x",
            value: "abc".to_string(),
        }
        .into();
        assert!(matches!(err, EditorError::Validation(_)));
        assert_eq!(err.to_string(), "Parameter 'x' must be a number, got 'abc'");
    }
}
