//! 事件 trait

use super::simulator::Simulator;
use super::world::World;

/// 可被调度执行的事件（包到达、链路空闲、应用定时器、PIT 超时等）。
///
/// 使用 `self: Box<Self>`，事件执行时拿回自身所有权，可以把携带的 packet
/// 直接 move 给下一个处理者。
pub trait Event: Send + 'static {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World);
}
