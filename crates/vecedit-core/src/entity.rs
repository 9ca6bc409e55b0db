//! 图元实体
//!
//! 实体 = 几何数据 + 标识 + 显示名称。标识由拥有者（[`ShapeStore`](crate::store::ShapeStore)）
//! 在构造之后分配，分配后不可更改；名称只是显示用的元数据。

use crate::geometry::Geometry;
use crate::shape::{put, Shape, ShapeInfo};
use serde::{Serialize, Serializer};
use std::fmt;

/// 图元唯一标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(u64);

impl ShapeId {
    /// 空ID（尚未分配）
    pub const NULL: ShapeId = ShapeId(0);

    /// 从指定值创建
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// 检查是否为空ID
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 图元实体
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    id: ShapeId,

    /// 显示名称（不参与几何计算）
    name: Option<String>,

    geometry: Geometry,
}

impl Entity {
    /// 创建尚未分配标识的实体
    pub fn new(geometry: impl Into<Geometry>) -> Self {
        Self {
            id: ShapeId::NULL,
            name: None,
            geometry: geometry.into(),
        }
    }

    /// 使用指定的名称
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// 分配标识；已分配时保持原值并返回 false
    pub(crate) fn assign_id(&mut self, id: ShapeId) -> bool {
        if !self.id.is_null() {
            return false;
        }
        self.id = id;
        true
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// 显示名称，未指定时为 `<类型> <id>`
    pub fn name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{} {}", self.geometry.kind().label(), self.id),
        }
    }

    /// 修改显示名称
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// 结构化描述：`id`、`name`、`type`，随后是几何属性与派生量
    pub fn get_info(&self) -> ShapeInfo {
        let mut info = ShapeInfo::new();
        put(&mut info, "id", self.id.get());
        put(&mut info, "name", self.name());
        put(&mut info, "type", self.geometry.type_name());
        self.geometry.write_info(&mut info);
        info
    }

    /// 单行摘要，用于列表视图
    pub fn to_display_string(&self) -> String {
        format!(
            "[{}] {} ({}): {}",
            self.id,
            self.name(),
            self.geometry.type_name(),
            self.geometry.headline()
        )
    }
}

/// 序列化为结构化描述（与 [`Entity::get_info`] 相同）
impl Serialize for Entity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get_info().serialize(serializer)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}
