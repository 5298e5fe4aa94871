//! 转发面（face）

use std::fmt;

use crate::net::{AppId, NodeId};

/// 转发器的收发端点：相邻节点的点对点链路，或本节点上的应用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Link(NodeId),
    App(AppId),
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Link(n) => write!(f, "link:{}", n.0),
            Face::App(a) => write!(f, "app:{}", a.0),
        }
    }
}
