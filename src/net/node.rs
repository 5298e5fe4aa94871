//! 节点类型
//!
//! 每个节点安装一个 NDN 转发器；名字通过 `Network::set_name` 注册，未注册时为空串。

use super::id::NodeId;
use crate::ndn::Forwarder;

/// 节点的二维坐标（用于动画输出）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug)]
pub struct Node {
    id: NodeId,
    name: String,
    pub position: Option<Position>,
    pub forwarder: Forwarder,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            name: String::new(),
            position: None,
            forwarder: Forwarder::default(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
