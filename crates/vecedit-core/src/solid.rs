//! 立体图元
//!
//! 平行六面体（轴对齐长方体，以角点定位）和正四面体（以参考顶点定位）。

use crate::error::ValidationResult;
use crate::math::Point3;
use crate::registry::ShapeKind;
use crate::shape::{put, Shape, ShapeInfo};
use crate::validate;

fn corner(x: f64, y: f64, z: f64) -> ValidationResult<Point3> {
    Ok(Point3::new(
        validate::coordinate("x", x)?,
        validate::coordinate("y", y)?,
        validate::coordinate("z", z)?,
    ))
}

/// 平行六面体
#[derive(Debug, Clone, PartialEq)]
pub struct Parallelepiped {
    corner: Point3,
    width: f64,
    height: f64,
    depth: f64,
}

impl Parallelepiped {
    pub fn new(
        x: f64,
        y: f64,
        z: f64,
        width: f64,
        height: f64,
        depth: f64,
    ) -> ValidationResult<Self> {
        let corner = corner(x, y, z)?;
        let width = validate::positive("width", width)?;
        let height = validate::positive("height", height)?;
        let depth = validate::positive("depth", depth)?;
        let solid = Self {
            corner,
            width,
            height,
            depth,
        };
        validate::derived("surface_area", solid.surface_area())?;
        validate::derived("volume", solid.volume())?;
        Ok(solid)
    }

    pub fn corner(&self) -> Point3 {
        self.corner
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// 表面积 `2(wh + wd + hd)`
    pub fn surface_area(&self) -> f64 {
        let (w, h, d) = (self.width, self.height, self.depth);
        2.0 * (w * h + w * d + h * d)
    }

    pub fn volume(&self) -> f64 {
        self.width * self.height * self.depth
    }
}

impl Shape for Parallelepiped {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Parallelepiped
    }

    fn write_info(&self, info: &mut ShapeInfo) {
        put(info, "x", self.corner.x);
        put(info, "y", self.corner.y);
        put(info, "z", self.corner.z);
        put(info, "width", self.width);
        put(info, "height", self.height);
        put(info, "depth", self.depth);
        put(info, "surface_area", self.surface_area());
        put(info, "volume", self.volume());
    }

    fn headline(&self) -> String {
        format!(
            "volume={:.2}, surface_area={:.2}",
            self.volume(),
            self.surface_area()
        )
    }
}

/// 正四面体（六条棱等长）
#[derive(Debug, Clone, PartialEq)]
pub struct Tetrahedron {
    vertex: Point3,
    edge_length: f64,
}

impl Tetrahedron {
    pub fn new(x: f64, y: f64, z: f64, edge_length: f64) -> ValidationResult<Self> {
        let vertex = corner(x, y, z)?;
        let edge_length = validate::positive("edge_length", edge_length)?;
        let tetra = Self {
            vertex,
            edge_length,
        };
        validate::derived("surface_area", tetra.surface_area())?;
        validate::derived("volume", tetra.volume())?;
        Ok(tetra)
    }

    /// 参考顶点
    pub fn vertex(&self) -> Point3 {
        self.vertex
    }

    pub fn edge_length(&self) -> f64 {
        self.edge_length
    }

    /// 表面积 `√3·e²`
    pub fn surface_area(&self) -> f64 {
        3.0_f64.sqrt() * self.edge_length * self.edge_length
    }

    /// 体积 `e³ / (6√2)`
    pub fn volume(&self) -> f64 {
        self.edge_length.powi(3) / (6.0 * std::f64::consts::SQRT_2)
    }
}

impl Shape for Tetrahedron {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Tetrahedron
    }

    fn write_info(&self, info: &mut ShapeInfo) {
        put(info, "x", self.vertex.x);
        put(info, "y", self.vertex.y);
        put(info, "z", self.vertex.z);
        put(info, "edge_length", self.edge_length);
        put(info, "surface_area", self.surface_area());
        put(info, "volume", self.volume());
    }

    fn headline(&self) -> String {
        format!(
            "volume={:.2}, surface_area={:.2}",
            self.volume(),
            self.surface_area()
        )
    }
}
