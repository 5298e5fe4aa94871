//! 网络模拟模块
//!
//! 节点、点对点链路、数据包载体以及驱动它们的事件。

mod attr;
mod events;
mod id;
mod link;
mod net_world;
mod network;
mod network_viz;
mod node;
mod packet;
mod stats;

pub use attr::{DataRate, LinkAttrs, LinkParams, QueueSize, parse_time};
pub use events::{DeliverPacket, LinkReady, PitExpire};
pub use id::{AppId, LinkId, NodeId};
pub use link::Link;
pub use net_world::NetWorld;
pub use network::Network;
pub use node::{Node, Position};
pub use packet::Packet;
pub use stats::Stats;
