//! 几何图元定义
//!
//! 支持的平面图元：
//! - 点 (Point)
//! - 线段 (Line)
//! - 圆 (Circle)
//! - 正方形 (Square)
//! - 矩形 (Rectangle)
//! - 正多边形 (RegularPolygon)
//!
//! 立体图元见 [`crate::solid`]。所有构造函数先校验参数，再确认派生量（长度、
//! 周长、面积）没有溢出，校验失败时不创建图元；创建后的几何属性不可修改。

use crate::error::ValidationResult;
use crate::math::{distance, Point2};
use crate::registry::ShapeKind;
use crate::shape::{put, Shape, ShapeInfo};
use crate::solid::{Parallelepiped, Tetrahedron};
use crate::validate;
use std::f64::consts::PI;

/// 几何类型枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    Line(Line),
    Circle(Circle),
    Square(Square),
    Rectangle(Rectangle),
    RegularPolygon(RegularPolygon),
    Parallelepiped(Parallelepiped),
    Tetrahedron(Tetrahedron),
}

impl Geometry {
    fn as_shape(&self) -> &dyn Shape {
        match self {
            Geometry::Point(s) => s,
            Geometry::Line(s) => s,
            Geometry::Circle(s) => s,
            Geometry::Square(s) => s,
            Geometry::Rectangle(s) => s,
            Geometry::RegularPolygon(s) => s,
            Geometry::Parallelepiped(s) => s,
            Geometry::Tetrahedron(s) => s,
        }
    }

    /// 获取几何的类型名称
    pub fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }
}

impl Shape for Geometry {
    fn kind(&self) -> ShapeKind {
        self.as_shape().kind()
    }

    fn write_info(&self, info: &mut ShapeInfo) {
        self.as_shape().write_info(info)
    }

    fn headline(&self) -> String {
        self.as_shape().headline()
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Geometry {
                fn from(shape: $variant) -> Self {
                    Geometry::$variant(shape)
                }
            }
        )*
    };
}

impl_from_variant!(
    Point,
    Line,
    Circle,
    Square,
    Rectangle,
    RegularPolygon,
    Parallelepiped,
    Tetrahedron,
);

/// 点
///
/// 退化图元：面积与周长均为零。
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    position: Point2,
}

impl Point {
    pub fn new(x: f64, y: f64) -> ValidationResult<Self> {
        let x = validate::coordinate("x", x)?;
        let y = validate::coordinate("y", y)?;
        Ok(Self {
            position: Point2::new(x, y),
        })
    }

    pub fn position(&self) -> Point2 {
        self.position
    }

    pub fn area(&self) -> f64 {
        0.0
    }

    pub fn perimeter(&self) -> f64 {
        0.0
    }
}

impl Shape for Point {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Point
    }

    fn write_info(&self, info: &mut ShapeInfo) {
        put(info, "x", self.position.x);
        put(info, "y", self.position.y);
    }

    fn headline(&self) -> String {
        format!("at ({:.2}, {:.2})", self.position.x, self.position.y)
    }
}

/// 线段
///
/// 两端点重合的零长度线段是合法的。
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    start: Point2,
    end: Point2,
}

impl Line {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> ValidationResult<Self> {
        let start = Point2::new(
            validate::coordinate("x1", x1)?,
            validate::coordinate("y1", y1)?,
        );
        let end = Point2::new(
            validate::coordinate("x2", x2)?,
            validate::coordinate("y2", y2)?,
        );
        let line = Self { start, end };
        validate::derived("length", line.length())?;
        Ok(line)
    }

    pub fn start(&self) -> Point2 {
        self.start
    }

    pub fn end(&self) -> Point2 {
        self.end
    }

    /// 计算线段长度
    pub fn length(&self) -> f64 {
        distance(&self.start, &self.end)
    }
}

impl Shape for Line {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn write_info(&self, info: &mut ShapeInfo) {
        put(info, "x1", self.start.x);
        put(info, "y1", self.start.y);
        put(info, "x2", self.end.x);
        put(info, "y2", self.end.y);
        put(info, "length", self.length());
    }

    fn headline(&self) -> String {
        format!("length={:.2}", self.length())
    }
}

/// 圆
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> ValidationResult<Self> {
        let center = Point2::new(
            validate::coordinate("center_x", center_x)?,
            validate::coordinate("center_y", center_y)?,
        );
        let radius = validate::positive("radius", radius)?;
        let circle = Self { center, radius };
        validate::derived("circumference", circle.circumference())?;
        validate::derived("area", circle.area())?;
        Ok(circle)
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// 计算周长
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// 计算面积
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl Shape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn write_info(&self, info: &mut ShapeInfo) {
        put(info, "center_x", self.center.x);
        put(info, "center_y", self.center.y);
        put(info, "radius", self.radius);
        put(info, "circumference", self.circumference());
        put(info, "area", self.area());
    }

    fn headline(&self) -> String {
        format!("radius={:.2}, area={:.2}", self.radius, self.area())
    }
}

/// 正方形（以角点定位）
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    corner: Point2,
    side_length: f64,
}

impl Square {
    pub fn new(x: f64, y: f64, side_length: f64) -> ValidationResult<Self> {
        let corner = Point2::new(validate::coordinate("x", x)?, validate::coordinate("y", y)?);
        let side_length = validate::positive("side_length", side_length)?;
        let square = Self {
            corner,
            side_length,
        };
        validate::derived("perimeter", square.perimeter())?;
        validate::derived("area", square.area())?;
        Ok(square)
    }

    pub fn corner(&self) -> Point2 {
        self.corner
    }

    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    pub fn perimeter(&self) -> f64 {
        4.0 * self.side_length
    }

    pub fn area(&self) -> f64 {
        self.side_length * self.side_length
    }
}

impl Shape for Square {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }

    fn write_info(&self, info: &mut ShapeInfo) {
        put(info, "x", self.corner.x);
        put(info, "y", self.corner.y);
        put(info, "side_length", self.side_length);
        put(info, "perimeter", self.perimeter());
        put(info, "area", self.area());
    }

    fn headline(&self) -> String {
        format!("side={:.2}, area={:.2}", self.side_length, self.area())
    }
}

/// 矩形（以角点定位，边与坐标轴平行）
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    corner: Point2,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> ValidationResult<Self> {
        let corner = Point2::new(validate::coordinate("x", x)?, validate::coordinate("y", y)?);
        let width = validate::positive("width", width)?;
        let height = validate::positive("height", height)?;
        let rect = Self {
            corner,
            width,
            height,
        };
        validate::derived("perimeter", rect.perimeter())?;
        validate::derived("area", rect.area())?;
        Ok(rect)
    }

    pub fn corner(&self) -> Point2 {
        self.corner
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl Shape for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn write_info(&self, info: &mut ShapeInfo) {
        put(info, "x", self.corner.x);
        put(info, "y", self.corner.y);
        put(info, "width", self.width);
        put(info, "height", self.height);
        put(info, "perimeter", self.perimeter());
        put(info, "area", self.area());
    }

    fn headline(&self) -> String {
        format!(
            "{:.2}x{:.2}, area={:.2}",
            self.width,
            self.height,
            self.area()
        )
    }
}

/// 正多边形
///
/// 面积使用闭式 `n·s² / (4·tan(π/n))`。边数很大时 `tan(π/n)` 趋近于零，
/// 多边形趋近于半径约为 `n·s/(2π)` 的圆，面积也趋近于该圆的面积；
/// 这里不做特殊处理，直接按双精度计算。
#[derive(Debug, Clone, PartialEq)]
pub struct RegularPolygon {
    center: Point2,
    num_sides: u32,
    side_length: f64,
}

impl RegularPolygon {
    pub fn new(
        center_x: f64,
        center_y: f64,
        num_sides: u32,
        side_length: f64,
    ) -> ValidationResult<Self> {
        let center = Point2::new(
            validate::coordinate("center_x", center_x)?,
            validate::coordinate("center_y", center_y)?,
        );
        let num_sides = validate::side_count("num_sides", num_sides)?;
        let side_length = validate::positive("side_length", side_length)?;
        let polygon = Self {
            center,
            num_sides,
            side_length,
        };
        validate::derived("perimeter", polygon.perimeter())?;
        validate::derived("area", polygon.area())?;
        Ok(polygon)
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    pub fn num_sides(&self) -> u32 {
        self.num_sides
    }

    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    pub fn perimeter(&self) -> f64 {
        f64::from(self.num_sides) * self.side_length
    }

    pub fn area(&self) -> f64 {
        let n = f64::from(self.num_sides);
        n * self.side_length * self.side_length / (4.0 * (PI / n).tan())
    }
}

impl Shape for RegularPolygon {
    fn kind(&self) -> ShapeKind {
        ShapeKind::RegularPolygon
    }

    fn write_info(&self, info: &mut ShapeInfo) {
        put(info, "center_x", self.center.x);
        put(info, "center_y", self.center.y);
        put(info, "num_sides", self.num_sides);
        put(info, "side_length", self.side_length);
        put(info, "perimeter", self.perimeter());
        put(info, "area", self.area());
    }

    fn headline(&self) -> String {
        format!(
            "sides={}, side={:.2}, area={:.2}",
            self.num_sides,
            self.side_length,
            self.area()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::math::{approx_eq, relative_eq, EPSILON};
    use proptest::prelude::*;

    #[test]
    fn test_point_is_degenerate() {
        let p = Point::new(-3.0, 7.5).unwrap();
        assert!(approx_eq(p.area(), 0.0));
        assert!(approx_eq(p.perimeter(), 0.0));

        let info = p.info();
        let keys: Vec<&str> = info.keys().map(String::as_str).collect();
        assert_eq!(keys, ["x", "y"]);
        assert_eq!(info["x"], -3.0);
    }

    #[test]
    fn test_line_length() {
        let line = Line::new(0.0, 0.0, 3.0, 4.0).unwrap();
        assert!((line.length() - 5.0).abs() < EPSILON);
        assert_eq!(line.info()["length"], 5.0);
    }

    #[test]
    fn test_zero_length_line_is_valid() {
        let line = Line::new(2.0, 2.0, 2.0, 2.0).unwrap();
        assert!(approx_eq(line.length(), 0.0));
    }

    #[test]
    fn test_circle_area() {
        let circle = Circle::new(0.0, 0.0, 1.0).unwrap();
        assert!((circle.area() - PI).abs() < EPSILON);
        assert!((circle.circumference() - 2.0 * PI).abs() < EPSILON);
    }

    #[test]
    fn test_circle_info_order() {
        let circle = Circle::new(1.0, 2.0, 3.0).unwrap();
        let keys: Vec<String> = circle.info().keys().cloned().collect();
        assert_eq!(
            keys,
            ["center_x", "center_y", "radius", "circumference", "area"]
        );
    }

    #[test]
    fn test_rectangle_end_to_end() {
        let rect = Rectangle::new(0.0, 0.0, 3.0, 4.0).unwrap();
        assert!(approx_eq(rect.area(), 12.0));
        assert!(approx_eq(rect.perimeter(), 14.0));
        assert_eq!(rect.headline(), "3.00x4.00, area=12.00");
    }

    #[test]
    fn test_size_parameters_must_be_positive() {
        assert!(matches!(
            Circle::new(0.0, 0.0, 0.0),
            Err(ValidationError::NonPositive { param: "radius", .. })
        ));
        assert!(matches!(
            Square::new(0.0, 0.0, -1.0),
            Err(ValidationError::NonPositive {
                param: "side_length",
                ..
            })
        ));
        assert!(matches!(
            Rectangle::new(0.0, 0.0, 3.0, 0.0),
            Err(ValidationError::NonPositive { param: "height", .. })
        ));
        assert!(matches!(
            Rectangle::new(0.0, 0.0, -3.0, 4.0),
            Err(ValidationError::NonPositive { param: "width", .. })
        ));
        assert!(matches!(
            RegularPolygon::new(0.0, 0.0, 5, 0.0),
            Err(ValidationError::NonPositive {
                param: "side_length",
                ..
            })
        ));
    }

    #[test]
    fn test_non_finite_coordinate_rejected() {
        assert!(matches!(
            Point::new(f64::NAN, 0.0),
            Err(ValidationError::NonFinite { param: "x", .. })
        ));
        assert!(matches!(
            Line::new(0.0, 0.0, 0.0, f64::INFINITY),
            Err(ValidationError::NonFinite { param: "y2", .. })
        ));
    }

    #[test]
    fn test_overflowing_derived_quantity_rejected() {
        assert_eq!(
            Line::new(-1e308, 0.0, 1e308, 0.0),
            Err(ValidationError::DerivedOverflow { quantity: "length" })
        );
        assert_eq!(
            Circle::new(0.0, 0.0, 1e308),
            Err(ValidationError::DerivedOverflow {
                quantity: "circumference"
            })
        );
        assert_eq!(
            Circle::new(0.0, 0.0, 1e200),
            Err(ValidationError::DerivedOverflow { quantity: "area" })
        );
        assert_eq!(
            Square::new(0.0, 0.0, 1e200),
            Err(ValidationError::DerivedOverflow { quantity: "area" })
        );
        assert_eq!(
            Rectangle::new(0.0, 0.0, 1e300, 1e300),
            Err(ValidationError::DerivedOverflow { quantity: "area" })
        );
        assert_eq!(
            RegularPolygon::new(0.0, 0.0, 6, 1e200),
            Err(ValidationError::DerivedOverflow { quantity: "area" })
        );

        let big = Square::new(0.0, 0.0, 1e150).unwrap();
        assert!(big.info().values().all(|v| v.is_f64()));
    }

    #[test]
    fn test_polygon_side_count() {
        assert!(matches!(
            RegularPolygon::new(0.0, 0.0, 2, 1.0),
            Err(ValidationError::TooFewSides { min: 3, .. })
        ));
        let triangle = RegularPolygon::new(0.0, 0.0, 3, 2.0).unwrap();
        assert!(relative_eq(triangle.area(), 3.0_f64.sqrt()));
        assert!(approx_eq(triangle.perimeter(), 6.0));
    }

    #[test]
    fn test_polygon_with_many_sides_approaches_circle() {
        let n = 100_000;
        let s = 0.001;
        let polygon = RegularPolygon::new(0.0, 0.0, n, s).unwrap();
        let r = f64::from(n) * s / (2.0 * PI);
        let circle_area = PI * r * r;
        assert!(((polygon.area() - circle_area) / circle_area).abs() < 1e-6);
    }

    #[test]
    fn test_geometry_dispatch() {
        let geometry: Geometry = Circle::new(0.0, 0.0, 2.0).unwrap().into();
        assert_eq!(geometry.kind(), ShapeKind::Circle);
        assert_eq!(geometry.type_name(), "Circle");
        assert_eq!(geometry.headline(), "radius=2.00, area=12.57");
        assert_eq!(geometry.info()["radius"], 2.0);
    }

    proptest! {
        #[test]
        fn prop_circle_formulas(r in 1e-6f64..1e6) {
            let circle = Circle::new(0.0, 0.0, r).unwrap();
            prop_assert!(relative_eq(circle.area(), PI * r * r));
            prop_assert!(relative_eq(circle.circumference(), 2.0 * PI * r));
        }

        #[test]
        fn prop_square_formulas(s in 1e-6f64..1e6) {
            let square = Square::new(0.0, 0.0, s).unwrap();
            prop_assert!(relative_eq(square.perimeter(), 4.0 * s));
            prop_assert!(relative_eq(square.area(), s * s));
        }

        #[test]
        fn prop_regular_four_gon_is_square(s in 1e-6f64..1e6) {
            let polygon = RegularPolygon::new(0.0, 0.0, 4, s).unwrap();
            let square = Square::new(0.0, 0.0, s).unwrap();
            prop_assert!(relative_eq(polygon.area(), square.area()));
            prop_assert!(relative_eq(polygon.perimeter(), square.perimeter()));
        }

        #[test]
        fn prop_any_finite_coordinate_accepted(
            x in -1e9f64..1e9,
            y in -1e9f64..1e9,
        ) {
            prop_assert!(Point::new(x, y).is_ok());
            prop_assert!(Line::new(x, y, y, x).is_ok());
            prop_assert!(Circle::new(x, y, 1.0).is_ok());
            prop_assert!(Square::new(x, y, 1.0).is_ok());
            prop_assert!(Rectangle::new(x, y, 1.0, 2.0).is_ok());
            prop_assert!(RegularPolygon::new(x, y, 7, 1.0).is_ok());
        }

        #[test]
        fn prop_non_positive_size_rejected(v in -1e6f64..=0.0) {
            prop_assert!(Circle::new(0.0, 0.0, v).is_err());
            prop_assert!(Square::new(0.0, 0.0, v).is_err());
            prop_assert!(Rectangle::new(0.0, 0.0, v, 1.0).is_err());
            prop_assert!(Rectangle::new(0.0, 0.0, 1.0, v).is_err());
            prop_assert!(RegularPolygon::new(0.0, 0.0, 3, v).is_err());
        }
    }
}
