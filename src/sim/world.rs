//! 世界 trait

use super::simulator::Simulator;
use std::any::Any;

/// 仿真世界：由业务层实现（这里是 NDN 网络），事件通过 downcast 取回具体类型。
pub trait World: Any {
    fn as_any_mut(&mut self) -> &mut dyn Any;
    /// 每执行完一个事件回调一次。
    fn on_tick(&mut self, _sim: &mut Simulator) {}
}
