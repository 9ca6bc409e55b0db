//! 构造参数校验
//!
//! 坐标只要求是有限实数；尺寸类参数（半径、边长、宽高深、棱长）必须严格大于零。
//! 由参数算出的派生量也必须是有限值，否则构造失败。

use crate::error::{ValidationError, ValidationResult};

/// 正多边形的最小边数
pub const MIN_SIDES: u32 = 3;

/// 校验坐标参数
pub fn coordinate(param: &'static str, value: f64) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { param, value });
    }
    Ok(value)
}

/// 校验尺寸参数（必须为有限正数）
pub fn positive(param: &'static str, value: f64) -> ValidationResult<f64> {
    let value = coordinate(param, value)?;
    if value <= 0.0 {
        return Err(ValidationError::NonPositive { param, value });
    }
    Ok(value)
}

/// 校验派生量（长度、面积、体积等）没有溢出为无穷大
pub fn derived(quantity: &'static str, value: f64) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::DerivedOverflow { quantity });
    }
    Ok(value)
}

/// 校验边数（整数部分已由类型保证）
pub fn side_count(param: &'static str, value: u32) -> ValidationResult<u32> {
    if value < MIN_SIDES {
        return Err(ValidationError::TooFewSides {
            param,
            value: f64::from(value),
            min: MIN_SIDES,
        });
    }
    Ok(value)
}

/// 将数值参数转换为边数，拒绝非整数与越界值
pub fn integral_side_count(param: &'static str, value: f64) -> ValidationResult<u32> {
    let value = coordinate(param, value)?;
    if value.fract() != 0.0 {
        return Err(ValidationError::NonIntegerCount { param, value });
    }
    if value < f64::from(MIN_SIDES) {
        return Err(ValidationError::TooFewSides {
            param,
            value,
            min: MIN_SIDES,
        });
    }
    if value > f64::from(u32::MAX) {
        return Err(ValidationError::TooManySides {
            param,
            value,
            max: u32::MAX,
        });
    }
    side_count(param, value as u32)
}
