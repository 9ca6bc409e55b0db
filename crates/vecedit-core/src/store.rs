//! 图元集合
//!
//! 编辑器中所有图元的唯一拥有者。标识由集合内部的计数器依次分配，
//! 从 1 开始，删除或清空后也不会复用。

use crate::entity::{Entity, ShapeId};
use crate::error::EditorError;
use crate::geometry::Geometry;
use crate::registry::ShapeKind;
use crate::shape::Shape;
use std::collections::BTreeMap;
use tracing::debug;

/// 图元集合
#[derive(Debug)]
pub struct ShapeStore {
    /// 所有图元（按ID有序）
    shapes: BTreeMap<ShapeId, Entity>,

    /// 下一个待分配的ID
    next_id: u64,
}

impl ShapeStore {
    /// 创建空集合
    pub fn new() -> Self {
        Self {
            shapes: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// 下一个将被分配的ID
    pub fn next_id(&self) -> ShapeId {
        ShapeId::from_raw(self.next_id)
    }

    /// 添加图元并分配ID
    pub fn insert(&mut self, geometry: impl Into<Geometry>, name: Option<String>) -> ShapeId {
        let mut entity = Entity::new(geometry);
        if let Some(name) = name {
            entity.set_name(name);
        }
        self.add_entity(entity)
    }

    /// 添加实体；已分配过ID的实体会重新编号
    pub fn add_entity(&mut self, entity: Entity) -> ShapeId {
        let id = self.next_id();
        self.next_id += 1;

        let mut entity = if entity.id().is_null() {
            entity
        } else {
            Self::renumbered(entity)
        };
        entity.assign_id(id);

        debug!(%id, kind = %entity.geometry().kind(), "shape added");
        self.shapes.insert(id, entity);
        id
    }

    fn renumbered(entity: Entity) -> Entity {
        let name = entity.name();
        Entity::new(entity.geometry().clone()).with_name(name)
    }

    /// 按类型关键字和命令行记号创建图元
    ///
    /// `tokens` 为参数记号，其后可跟一个名称记号；名称之后的记号被忽略。
    pub fn create(&mut self, kind: ShapeKind, tokens: &[&str]) -> Result<ShapeId, EditorError> {
        let arity = kind.params().len();
        let (params, rest) = tokens.split_at(arity.min(tokens.len()));
        let values = kind.parse_params(params)?;
        let geometry = kind.build(&values)?;
        let name = rest.first().map(|name| name.to_string());
        Ok(self.insert(geometry, name))
    }

    /// 按类型关键字创建图元
    pub fn create_by_keyword(
        &mut self,
        keyword: &str,
        tokens: &[&str],
    ) -> Result<ShapeId, EditorError> {
        let kind = ShapeKind::from_keyword(keyword)
            .ok_or_else(|| EditorError::UnknownShapeType(keyword.to_string()))?;
        self.create(kind, tokens)
    }

    /// 获取图元
    pub fn get(&self, id: ShapeId) -> Option<&Entity> {
        self.shapes.get(&id)
    }

    /// 获取可变图元（只能修改名称）
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Entity> {
        self.shapes.get_mut(&id)
    }

    /// 获取图元，不存在时返回错误
    pub fn require(&self, id: ShapeId) -> Result<&Entity, EditorError> {
        self.get(id).ok_or(EditorError::ShapeNotFound(id))
    }

    /// 删除图元
    pub fn remove(&mut self, id: ShapeId) -> Option<Entity> {
        let removed = self.shapes.remove(&id);
        if removed.is_some() {
            debug!(%id, "shape removed");
        }
        removed
    }

    /// 删除所有图元，返回删除数量
    pub fn clear(&mut self) -> usize {
        let count = self.shapes.len();
        self.shapes.clear();
        debug!(count, "shapes cleared");
        count
    }

    /// 按ID顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.shapes.values()
    }

    /// 图元数量
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}
