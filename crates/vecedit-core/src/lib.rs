//! VecEdit 核心几何库
//!
//! 提供矢量编辑器使用的2D/3D图元：每种图元在构造时校验参数，
//! 并计算周长、面积、表面积、体积等派生量。
//!
//! # 架构设计
//!
//! - `Shape`: 所有图元共同实现的契约（类型、结构化描述、摘要）
//! - `Geometry`: 8 种具体图元的枚举
//! - `Entity`: 几何数据 + 标识 + 显示名称
//! - `ShapeKind`: 类型关键字到构造函数的注册表
//! - `ShapeStore`: 拥有全部图元并分配标识
//!
//! # 示例
//!
//! ```rust
//! use vecedit_core::prelude::*;
//!
//! let mut store = ShapeStore::new();
//! let id = store.create(ShapeKind::Line, &["0", "0", "3", "4"]).unwrap();
//!
//! let info = store.get(id).unwrap().get_info();
//! assert_eq!(info["length"], 5.0);
//! ```

pub mod entity;
pub mod error;
pub mod geometry;
pub mod math;
pub mod registry;
pub mod shape;
pub mod solid;
pub mod store;
pub mod validate;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::entity::{Entity, ShapeId};
    pub use crate::error::{EditorError, ValidationError};
    pub use crate::geometry::{Circle, Geometry, Line, Point, Rectangle, RegularPolygon, Square};
    pub use crate::registry::{Dimension, ShapeKind};
    pub use crate::shape::{Shape, ShapeInfo};
    pub use crate::solid::{Parallelepiped, Tetrahedron};
    pub use crate::store::ShapeStore;
}
