//! 单节点 NDN 转发器
//!
//! 只做决策，不直接发包：`Network` 根据返回的决策把报文送到链路或本地应用，
//! 这样转发器状态与网络状态不会同时被可变借用。

use tracing::{debug, trace};

use super::cs::ContentStore;
use super::face::Face;
use super::fib::Fib;
use super::name::Name;
use super::packet::{Data, Interest};
use super::pit::{Pit, PitOutcome};
use super::strategy::StrategyChoice;
use crate::sim::SimTime;

/// Interest 处理结论
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterestDecision {
    /// 转发到 `to`
    Forward { to: Face },
    /// 缓存命中，直接把 Data 回给来源 face
    CsHit(Data),
    /// 已聚合到现有 PIT 条目
    Aggregated,
    /// nonce 重复
    DropLoop,
    /// FIB 中没有可用下一跳
    DropNoRoute,
}

#[derive(Debug, Default)]
pub struct Forwarder {
    pub fib: Fib,
    pub pit: Pit,
    pub cs: ContentStore,
    pub strategy_choice: StrategyChoice,
}

impl Forwarder {
    pub fn new(cs_max_entries: usize) -> Self {
        Self {
            cs: ContentStore::new(cs_max_entries),
            ..Default::default()
        }
    }

    #[tracing::instrument(level = "trace", skip_all, fields(name = %interest.name, nonce = interest.nonce, in_face = %in_face))]
    pub fn on_incoming_interest(
        &mut self,
        now: SimTime,
        in_face: Face,
        interest: &Interest,
    ) -> InterestDecision {
        let outcome = if self.pit.get(&interest.name).is_some() {
            self.pit.insert(now, in_face, interest)
        } else {
            if let Some(data) = self.cs.lookup(now, &interest.name) {
                debug!("content store 命中");
                return InterestDecision::CsHit(data);
            }
            self.pit.insert(now, in_face, interest)
        };
        trace!(?outcome, "PIT 处理结果");

        match outcome {
            PitOutcome::Loop => return InterestDecision::DropLoop,
            PitOutcome::Aggregated => return InterestDecision::Aggregated,
            PitOutcome::New | PitOutcome::Retransmission => {}
        }

        let strategy = self.strategy_choice.find(&interest.name);
        let next = self
            .fib
            .longest_prefix_match(&interest.name)
            .and_then(|(_, hops)| strategy.select(in_face, hops));

        match next {
            Some(to) => {
                self.pit.record_out(&interest.name, to);
                InterestDecision::Forward { to }
            }
            None => {
                debug!("无可用路由，丢弃 Interest");
                if outcome == PitOutcome::New {
                    self.pit.satisfy(&interest.name);
                }
                InterestDecision::DropNoRoute
            }
        }
    }

    /// Data 到达：返回需要回送的下游 face；None 表示 unsolicited。
    #[tracing::instrument(level = "trace", skip_all, fields(name = %data.name, in_face = %in_face))]
    pub fn on_incoming_data(&mut self, now: SimTime, in_face: Face, data: &Data) -> Option<Vec<Face>> {
        let entry = self.pit.satisfy(&data.name)?;
        self.cs.insert(now, data.clone());
        let faces = entry
            .in_records
            .iter()
            .map(|r| r.face)
            .filter(|f| *f != in_face)
            .collect::<Vec<_>>();
        trace!(downstream = faces.len(), "Data 满足 PIT 条目");
        Some(faces)
    }

    /// PIT 到期检查。
    pub fn on_pit_expiry(&mut self, name: &Name, now: SimTime) -> bool {
        self.pit.expire(name, now)
    }
}
