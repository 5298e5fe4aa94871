//! 仿真器
//!
//! 维护当前时间与事件队列，支持设置停止时刻（到达后不再执行任何事件）。

use super::event::Event;
use super::scheduled_event::ScheduledEvent;
use super::time::SimTime;
use super::world::World;
use std::collections::BinaryHeap;
use tracing::{debug, info, trace};

/// 事件驱动仿真器。
#[derive(Default)]
pub struct Simulator {
    now: SimTime,
    next_seq: u64,
    stop_at: Option<SimTime>,
    executed: u64,
    q: BinaryHeap<ScheduledEvent>,
}

impl Simulator {
    /// 获取当前仿真时间
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// 已执行的事件数
    pub fn executed_events(&self) -> u64 {
        self.executed
    }

    /// 队列中尚未执行的事件数
    pub fn pending_events(&self) -> usize {
        self.q.len()
    }

    /// 调度事件在指定时间执行；早于当前时间的请求按当前时间处理。
    #[tracing::instrument(level = "trace", skip(self, ev), fields(event_type = std::any::type_name::<E>(), schedule_at = ?at))]
    pub fn schedule<E: Event>(&mut self, at: SimTime, ev: E) {
        let at = at.max(self.now);
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.q.push(ScheduledEvent {
            at,
            seq,
            ev: Box::new(ev),
        });
        trace!(now = ?self.now, seq, queue_size = self.q.len(), "调度事件");
    }

    /// 相对当前时间延迟 `delay` 后执行。
    pub fn schedule_in<E: Event>(&mut self, delay: SimTime, ev: E) {
        let at = self.now.saturating_add(delay);
        self.schedule(at, ev);
    }

    /// 设置停止时刻：`run` 只执行 `at` 之前（含 `at`）的事件。
    pub fn stop_at(&mut self, at: SimTime) {
        debug!(stop_at = %at, "设置停止时刻");
        self.stop_at = Some(at);
    }

    /// 运行直到事件队列为空或到达 `until`。
    pub fn run_until(&mut self, until: SimTime, world: &mut dyn World) {
        while let Some(top) = self.q.peek() {
            if top.at > until {
                break;
            }
            let Some(item) = self.q.pop() else { break };
            self.step(item, world);
        }
        self.now = self.now.max(until);
    }

    /// 运行到队列为空；若设置过停止时刻，则在停止时刻处返回。
    #[tracing::instrument(skip(self, world))]
    pub fn run(&mut self, world: &mut dyn World) {
        info!(stop_at = ?self.stop_at, queue_size = self.q.len(), "▶️  开始运行仿真");
        let before = self.executed;

        match self.stop_at {
            Some(until) => self.run_until(until, world),
            None => {
                while let Some(item) = self.q.pop() {
                    self.step(item, world);
                }
            }
        }

        info!(
            total_events = self.executed - before,
            final_time = %self.now,
            remaining_queue = self.q.len(),
            "✅ 仿真完成"
        );
    }

    /// 释放所有未执行的事件并重置停止时刻。
    pub fn destroy(&mut self) {
        debug!(dropped_events = self.q.len(), "销毁仿真器状态");
        self.q.clear();
        self.stop_at = None;
    }

    fn step(&mut self, item: ScheduledEvent, world: &mut dyn World) {
        self.now = item.at;
        self.executed += 1;
        trace!(now = ?self.now, seq = item.seq, remaining_queue = self.q.len(), "执行事件");
        item.ev.execute(self, world);
        world.on_tick(self);
    }
}
