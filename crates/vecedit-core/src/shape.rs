//! 图元公共契约
//!
//! 每种具体图元都实现 [`Shape`]：报告自身类型、写出几何属性与派生量、
//! 给出列表视图用的摘要。标识与名称不属于图元本身，由 [`Entity`](crate::entity::Entity) 持有。

use crate::registry::ShapeKind;
use serde_json::{Map, Value};

/// 图元的结构化描述（保持插入顺序）
pub type ShapeInfo = Map<String, Value>;

/// 图元契约
pub trait Shape {
    /// 图元类型
    fn kind(&self) -> ShapeKind;

    /// 按参数顺序写入几何属性，再写入派生量
    fn write_info(&self, info: &mut ShapeInfo);

    /// 摘要中的关键量，例如 `radius=2.00, area=12.57`
    fn headline(&self) -> String;

    /// 仅包含几何属性与派生量的描述
    fn info(&self) -> ShapeInfo {
        let mut info = ShapeInfo::new();
        self.write_info(&mut info);
        info
    }
}

/// 写入一个数值字段
pub(crate) fn put(info: &mut ShapeInfo, key: &str, value: impl Into<Value>) {
    info.insert(key.to_string(), value.into());
}
