//! 生产者：对前缀下的每个 Interest 回一个固定大小的 Data。

use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use super::{App, AppStats};
use crate::ndn::{Data, Face, Interest, Name};
use crate::net::{AppId, Network, NodeId};
use crate::sim::{SimTime, Simulator};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProducerConfig {
    pub payload_size: u32,
    /// Data 的 freshness（秒）；None 表示永不过期
    #[serde(default)]
    pub freshness_s: Option<f64>,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            payload_size: 1024,
            freshness_s: None,
        }
    }
}

#[derive(Debug)]
pub struct Producer {
    node: NodeId,
    prefix: Name,
    payload_size: u32,
    freshness: Option<SimTime>,
    stats: AppStats,
}

impl Producer {
    pub fn new(node: NodeId, prefix: Name, cfg: &ProducerConfig) -> Self {
        Self {
            node,
            prefix,
            payload_size: cfg.payload_size,
            freshness: cfg.freshness_s.map(SimTime::from_secs_f64),
            stats: AppStats::default(),
        }
    }
}

impl App for Producer {
    fn kind(&self) -> &'static str {
        "Producer"
    }

    fn node(&self) -> NodeId {
        self.node
    }

    fn prefix(&self) -> &Name {
        &self.prefix
    }

    fn start(&mut self, me: AppId, _sim: &mut Simulator, net: &mut Network) {
        info!(app = ?me, node = ?self.node, prefix = %self.prefix, payload = self.payload_size, "🚀 Producer 启动");
        net.add_face_route(self.node, self.prefix.clone(), Face::App(me), 0);
    }

    fn on_interest(&mut self, me: AppId, interest: Interest, sim: &mut Simulator, net: &mut Network) {
        self.stats.interests_received += 1;
        trace!(name = %interest.name, "生产 Data");
        let data = Data {
            name: interest.name,
            payload_size: self.payload_size,
            freshness: self.freshness,
        };
        self.stats.data_sent += 1;
        net.put_data(me, data, sim);
    }

    fn stats(&self) -> AppStats {
        self.stats.clone()
    }
}
