//! NDN 应用
//!
//! 应用挂在某个节点上，通过本地 app face 与节点转发器交换 Interest/Data。

mod consumer_cbr;
mod events;
mod producer;

pub use consumer_cbr::{ConsumerCbr, ConsumerCbrConfig};
pub use events::{AppTimerFired, DeliverToApp, StartApp};
pub use producer::{Producer, ProducerConfig};

use serde::Serialize;

use crate::ndn::{Data, Interest, Name};
use crate::net::{AppId, Network, NodeId};
use crate::sim::{SimTime, Simulator};

/// 应用定时器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTimer {
    /// 发送下一个 Interest
    SendNext,
    /// 检查第 `attempt` 次发送的 `seq` 是否超时
    Timeout { seq: u64, attempt: u32 },
}

/// 应用层计数
#[derive(Debug, Default, Clone, Serialize)]
pub struct AppStats {
    pub interests_sent: u64,
    pub interests_received: u64,
    pub data_sent: u64,
    pub data_received: u64,
    pub timeouts: u64,
    pub retransmissions: u64,
    /// 从最后一次发送到收到 Data 的时延之和（ns）
    pub total_delay_ns: u64,
    pub max_delay_ns: u64,
}

impl AppStats {
    pub fn mean_delay(&self) -> Option<SimTime> {
        (self.data_received > 0).then(|| SimTime(self.total_delay_ns / self.data_received))
    }
}

/// 应用接口
pub trait App: Send {
    /// 应用类型名（日志与动画描述用）
    fn kind(&self) -> &'static str;

    /// 所在节点
    fn node(&self) -> NodeId;

    fn prefix(&self) -> &Name;

    /// 仿真开始时调用
    fn start(&mut self, me: AppId, sim: &mut Simulator, net: &mut Network);

    fn on_interest(&mut self, _me: AppId, _interest: Interest, _sim: &mut Simulator, _net: &mut Network) {}

    fn on_data(&mut self, _me: AppId, _data: Data, _sim: &mut Simulator, _net: &mut Network) {}

    fn on_timer(&mut self, _me: AppId, _timer: AppTimer, _sim: &mut Simulator, _net: &mut Network) {}

    fn stats(&self) -> AppStats;
}
