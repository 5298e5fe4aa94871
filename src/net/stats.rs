//! 统计信息

use serde::Serialize;

/// 全网转发统计
#[derive(Debug, Default, Clone, Serialize)]
pub struct Stats {
    /// 经链路发送的 Interest / Data（逐跳计数）
    pub interests_tx: u64,
    pub data_tx: u64,
    pub bytes_tx: u64,
    /// 出口队列满被丢弃
    pub dropped_queue: u64,
    pub dropped_loop: u64,
    pub dropped_no_route: u64,
    pub dropped_unsolicited: u64,
    pub aggregated: u64,
    pub cs_hits: u64,
    pub pit_expired: u64,
}
