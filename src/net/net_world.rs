//! 网络世界

use super::network::Network;
use crate::sim::World;
use std::any::Any;

/// 事件执行时看到的世界：整张 NDN 网络。
#[derive(Default)]
pub struct NetWorld {
    pub net: Network,
}

impl NetWorld {
    /// 事件回调中取回具体世界类型。
    pub(crate) fn from_world(world: &mut dyn World) -> &mut NetWorld {
        world
            .as_any_mut()
            .downcast_mut::<NetWorld>()
            .expect("world must be NetWorld")
    }
}

impl World for NetWorld {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
