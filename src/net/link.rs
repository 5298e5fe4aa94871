//! 链路类型
//!
//! 单向点对点链路：序列化时延由带宽决定，之后再经过传播时延到达对端。

use super::attr::LinkParams;
use super::id::NodeId;
use crate::queue::{DropTailQueue, PacketQueue};
use crate::sim::SimTime;

#[derive(Debug)]
pub struct Link {
    pub from: NodeId,
    pub to: NodeId,
    pub latency: SimTime,
    pub bandwidth_bps: u64,
    /// 正在序列化一个 packet
    pub busy: bool,
    pub queue: Box<dyn PacketQueue>,
}

impl Link {
    pub fn new(from: NodeId, to: NodeId, params: &LinkParams) -> Self {
        Self {
            from,
            to,
            latency: params.delay,
            bandwidth_bps: params.data_rate.bps(),
            busy: false,
            queue: Box::new(DropTailQueue::new(params.max_size)),
        }
    }

    /// 计算传输指定字节数所需的时间
    pub(crate) fn tx_time(&self, bytes: u32) -> SimTime {
        // ceil(bytes*8 / bps) 秒 -> 纳秒
        if self.bandwidth_bps == 0 {
            return SimTime(u64::MAX / 4);
        }
        let bits = (bytes as u128).saturating_mul(8);
        let nanos = (bits.saturating_mul(1_000_000_000u128) + (self.bandwidth_bps as u128 - 1))
            / self.bandwidth_bps as u128;
        SimTime(nanos.min(u64::MAX as u128) as u64)
    }
}
