//! 图元类型注册表
//!
//! 将命令行中的类型关键字映射到构造函数、有序参数列表和用法说明。

use crate::error::{ValidationError, ValidationResult};
use crate::geometry::{Circle, Geometry, Line, Point, Rectangle, RegularPolygon, Square};
use crate::solid::{Parallelepiped, Tetrahedron};
use crate::validate;
use std::fmt;

/// 图元所属的维度族
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Planar,
    Solid,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Planar => write!(f, "2D"),
            Dimension::Solid => write!(f, "3D"),
        }
    }
}

/// 图元类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Line,
    Circle,
    Square,
    Rectangle,
    RegularPolygon,
    Parallelepiped,
    Tetrahedron,
}

impl ShapeKind {
    /// 所有类型（按注册顺序）
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Point,
        ShapeKind::Line,
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::RegularPolygon,
        ShapeKind::Parallelepiped,
        ShapeKind::Tetrahedron,
    ];

    /// 命令行关键字
    pub fn keyword(&self) -> &'static str {
        match self {
            ShapeKind::Point => "point",
            ShapeKind::Line => "line",
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::RegularPolygon => "polygon",
            ShapeKind::Parallelepiped => "parallelepiped",
            ShapeKind::Tetrahedron => "tetrahedron",
        }
    }

    /// 按关键字查找（不区分大小写）
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.keyword().eq_ignore_ascii_case(keyword))
    }

    /// 结构化描述中 `type` 字段的值
    pub fn type_name(&self) -> &'static str {
        match self {
            ShapeKind::Point => "Point",
            ShapeKind::Line => "Line",
            ShapeKind::Circle => "Circle",
            ShapeKind::Square => "Square",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::RegularPolygon => "RegularPolygon",
            ShapeKind::Parallelepiped => "Parallelepiped",
            ShapeKind::Tetrahedron => "Tetrahedron",
        }
    }

    /// 默认名称前缀（首字母大写的关键字）
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::RegularPolygon => "Polygon",
            other => other.type_name(),
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            ShapeKind::Parallelepiped | ShapeKind::Tetrahedron => Dimension::Solid,
            _ => Dimension::Planar,
        }
    }

    /// 构造所需的有序参数名
    pub fn params(&self) -> &'static [&'static str] {
        match self {
            ShapeKind::Point => &["x", "y"],
            ShapeKind::Line => &["x1", "y1", "x2", "y2"],
            ShapeKind::Circle => &["center_x", "center_y", "radius"],
            ShapeKind::Square => &["x", "y", "side_length"],
            ShapeKind::Rectangle => &["x", "y", "width", "height"],
            ShapeKind::RegularPolygon => &["center_x", "center_y", "num_sides", "side_length"],
            ShapeKind::Parallelepiped => &["x", "y", "z", "width", "height", "depth"],
            ShapeKind::Tetrahedron => &["x", "y", "z", "edge_length"],
        }
    }

    /// 用法说明，如 `create circle center_x center_y radius [name]`
    pub fn usage(&self) -> String {
        format!(
            "create {} {} [name]",
            self.keyword(),
            self.params().join(" ")
        )
    }

    fn check_arity(&self, got: usize) -> ValidationResult<()> {
        let expected = self.params().len();
        if got != expected {
            return Err(ValidationError::WrongArity {
                shape: self.type_name(),
                expected,
                got,
            });
        }
        Ok(())
    }

    /// 将参数记号转换为数值
    pub fn parse_params(&self, tokens: &[&str]) -> ValidationResult<Vec<f64>> {
        self.check_arity(tokens.len())?;
        self.params()
            .iter()
            .zip(tokens)
            .map(|(&param, token)| {
                token
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| ValidationError::NonNumeric {
                        param,
                        value: token.to_string(),
                    })
            })
            .collect()
    }

    /// 按参数顺序调用对应图元的构造函数
    pub fn build(&self, values: &[f64]) -> ValidationResult<Geometry> {
        self.check_arity(values.len())?;
        let v = values;
        let geometry: Geometry = match self {
            ShapeKind::Point => Point::new(v[0], v[1])?.into(),
            ShapeKind::Line => Line::new(v[0], v[1], v[2], v[3])?.into(),
            ShapeKind::Circle => Circle::new(v[0], v[1], v[2])?.into(),
            ShapeKind::Square => Square::new(v[0], v[1], v[2])?.into(),
            ShapeKind::Rectangle => Rectangle::new(v[0], v[1], v[2], v[3])?.into(),
            ShapeKind::RegularPolygon => {
                let num_sides = validate::integral_side_count("num_sides", v[2])?;
                RegularPolygon::new(v[0], v[1], num_sides, v[3])?.into()
            }
            ShapeKind::Parallelepiped => {
                Parallelepiped::new(v[0], v[1], v[2], v[3], v[4], v[5])?.into()
            }
            ShapeKind::Tetrahedron => Tetrahedron::new(v[0], v[1], v[2], v[3])?.into(),
        };
        Ok(geometry)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
