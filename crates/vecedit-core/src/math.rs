//! 数学基础类型
//!
//! 基于 nalgebra 提供的点类型别名，以及浮点比较工具。

use nalgebra as na;

/// 2D点类型
pub type Point2 = na::Point2<f64>;

/// 3D点类型
pub type Point3 = na::Point3<f64>;

/// 数值容差，用于几何比较
pub const EPSILON: f64 = 1e-10;

/// 判断两个浮点数是否近似相等
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// 按量级缩放容差的近似相等（用于面积、体积等大数值）
#[inline]
pub fn relative_eq(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= EPSILON * scale
}

/// 两点间的欧氏距离
#[inline]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    (b - a).norm()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let d = distance(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0));
        assert!(approx_eq(d, 5.0));
        assert!(approx_eq(distance(&Point2::new(-1.0, 2.0), &Point2::new(-1.0, 2.0)), 0.0));
    }

    #[test]
    fn test_relative_eq_scales_with_magnitude() {
        assert!(relative_eq(1.0e12, 1.0e12 + 1.0e-3));
        assert!(!approx_eq(1.0e12, 1.0e12 + 1.0e-3));
        assert!(!relative_eq(1.0, 1.001));
    }
}
