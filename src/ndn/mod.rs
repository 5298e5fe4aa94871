//! 命名数据网络（NDN）层
//!
//! 名字、Interest/Data、FIB、PIT、Content Store、策略选择与单节点转发器。

mod cs;
mod face;
mod fib;
mod forwarder;
mod name;
mod packet;
mod pit;
mod strategy;

pub use cs::ContentStore;
pub use face::Face;
pub use fib::{Fib, NextHop};
pub use forwarder::{Forwarder, InterestDecision};
pub use name::Name;
pub use packet::{DEFAULT_INTEREST_LIFETIME, Data, Interest, NdnPacket};
pub use pit::{InRecord, Pit, PitEntry, PitOutcome};
pub use strategy::{BEST_ROUTE, Strategy, StrategyChoice};
