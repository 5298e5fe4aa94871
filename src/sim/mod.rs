//! 仿真核心模块
//!
//! 事件驱动仿真内核：仿真时间、事件、世界与调度器。NDN 场景中的链路、
//! 转发器与应用都通过这里的事件推进。

mod event;
mod scheduled_event;
mod simulator;
mod time;
mod world;

pub use event::Event;
pub use scheduled_event::ScheduledEvent;
pub use simulator::Simulator;
pub use time::SimTime;
pub use world::World;
