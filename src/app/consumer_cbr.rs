//! 恒定速率消费者（CBR）
//!
//! 以固定频率发出 `<prefix>/<seq>` 形式的 Interest，seq 从 0 开始单调递增。
//! 每个 Interest 在生存期内未收到 Data 即记一次超时，并以新 nonce 重传同一 seq。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::{App, AppStats, AppTimer, AppTimerFired};
use crate::ndn::{DEFAULT_INTEREST_LIFETIME, Data, Interest, Name};
use crate::net::{AppId, Network, NodeId};
use crate::sim::{SimTime, Simulator};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumerCbrConfig {
    /// 每秒发出的 Interest 数
    pub frequency: f64,
    /// Interest 生存期（秒）
    #[serde(default = "default_lifetime_s")]
    pub lifetime_s: f64,
    /// 发送上限（不含重传）；None 表示不限
    #[serde(default)]
    pub max_seq: Option<u64>,
}

fn default_lifetime_s() -> f64 {
    DEFAULT_INTEREST_LIFETIME.as_secs_f64()
}

impl Default for ConsumerCbrConfig {
    fn default() -> Self {
        Self {
            frequency: 100.0,
            lifetime_s: default_lifetime_s(),
            max_seq: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Outstanding {
    last_sent: SimTime,
    attempt: u32,
}

#[derive(Debug)]
pub struct ConsumerCbr {
    node: NodeId,
    prefix: Name,
    period: SimTime,
    lifetime: SimTime,
    max_seq: Option<u64>,
    next_seq: u64,
    outstanding: HashMap<u64, Outstanding>,
    stats: AppStats,
}

impl ConsumerCbr {
    pub fn new(node: NodeId, prefix: Name, cfg: &ConsumerCbrConfig) -> Self {
        // 间隔至少 1ns，否则 SendNext 会在同一时刻无限重排
        let period = if cfg.frequency > 0.0 {
            SimTime::from_secs_f64(1.0 / cfg.frequency).max(SimTime(1))
        } else {
            SimTime::MAX
        };
        Self {
            node,
            prefix,
            period,
            lifetime: SimTime::from_secs_f64(cfg.lifetime_s),
            max_seq: cfg.max_seq,
            next_seq: 0,
            outstanding: HashMap::new(),
            stats: AppStats::default(),
        }
    }

    /// 两次发送之间的间隔
    pub fn period(&self) -> SimTime {
        self.period
    }

    /// 尚未收到 Data 的 seq 数
    pub fn outstanding(&self) -> usize {
        self.outstanding.len()
    }

    fn send(&mut self, me: AppId, seq: u64, attempt: u32, sim: &mut Simulator, net: &mut Network) {
        let name = self.prefix.clone().append_seq(seq);
        let mut interest = Interest::new(name, net.next_nonce());
        interest.lifetime = self.lifetime;
        trace!(seq, attempt, nonce = interest.nonce, "发送 Interest");

        self.outstanding.insert(
            seq,
            Outstanding {
                last_sent: sim.now(),
                attempt,
            },
        );
        self.stats.interests_sent += 1;
        net.express_interest(me, interest, sim);

        sim.schedule_in(
            self.lifetime,
            AppTimerFired {
                app: me,
                timer: AppTimer::Timeout { seq, attempt },
            },
        );
    }
}

impl App for ConsumerCbr {
    fn kind(&self) -> &'static str {
        "ConsumerCbr"
    }

    fn node(&self) -> NodeId {
        self.node
    }

    fn prefix(&self) -> &Name {
        &self.prefix
    }

    fn start(&mut self, me: AppId, sim: &mut Simulator, _net: &mut Network) {
        info!(app = ?me, node = ?self.node, prefix = %self.prefix, period = %self.period, "🚀 ConsumerCbr 启动");
        sim.schedule(
            sim.now(),
            AppTimerFired {
                app: me,
                timer: AppTimer::SendNext,
            },
        );
    }

    fn on_data(&mut self, _me: AppId, data: Data, sim: &mut Simulator, _net: &mut Network) {
        self.stats.data_received += 1;
        let seq = data
            .name
            .components()
            .last()
            .and_then(|c| c.parse::<u64>().ok());
        let Some(out) = seq.and_then(|s| self.outstanding.remove(&s)) else {
            debug!(name = %data.name, "收到非待定 seq 的 Data");
            return;
        };
        let delay = sim.now().saturating_sub(out.last_sent);
        self.stats.total_delay_ns = self.stats.total_delay_ns.saturating_add(delay.0);
        self.stats.max_delay_ns = self.stats.max_delay_ns.max(delay.0);
        trace!(name = %data.name, delay = %delay, "收到 Data");
    }

    fn on_timer(&mut self, me: AppId, timer: AppTimer, sim: &mut Simulator, net: &mut Network) {
        match timer {
            AppTimer::SendNext => {
                if self.max_seq.is_some_and(|m| self.next_seq >= m) {
                    debug!(sent = self.next_seq, "达到 max_seq，停止发送");
                    return;
                }
                let seq = self.next_seq;
                self.next_seq += 1;
                self.send(me, seq, 0, sim, net);
                sim.schedule_in(
                    self.period,
                    AppTimerFired {
                        app: me,
                        timer: AppTimer::SendNext,
                    },
                );
            }
            AppTimer::Timeout { seq, attempt } => {
                let still_waiting = self
                    .outstanding
                    .get(&seq)
                    .is_some_and(|o| o.attempt == attempt);
                if !still_waiting {
                    return;
                }
                debug!(seq, attempt, "⏰ Interest 超时，重传");
                self.stats.timeouts += 1;
                self.stats.retransmissions += 1;
                self.send(me, seq, attempt + 1, sim, net);
            }
        }
    }

    fn stats(&self) -> AppStats {
        self.stats.clone()
    }
}
