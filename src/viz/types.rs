use serde::{Deserialize, Serialize};

/// 可视化事件类型
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VizEventKind {
    /// 拓扑元信息（t=0 的第一条事件）
    Meta {
        nodes: Vec<VizNodeInfo>,
        links: Vec<VizLinkInfo>,
    },
    /// packet 出队并开始在单向链路上序列化
    TxStart {
        link_from: usize,
        link_to: usize,
        depart_ns: u64,
        arrive_ns: u64,
    },
    /// packet 到达节点
    ArriveNode { node: usize },
    /// 出口队列满，丢包
    Drop {
        link_from: usize,
        link_to: usize,
        q_len: usize,
    },
    /// Interest 在节点上命中 content store
    CsHit { node: usize },
    /// Interest 在节点上找不到路由
    NoRoute { node: usize },
    /// 报文交给本地应用
    AppRx { node: usize, app: usize },
}

/// packet 的类别（便于可视化上色）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VizPacketKind {
    Interest,
    Data,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizNodeInfo {
    pub id: usize,
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// 节点上安装的应用（例如 "ConsumerCbr /data/room/p"）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub apps: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizLinkInfo {
    pub from: usize,
    pub to: usize,
    /// 单向链路带宽（bps）
    pub bandwidth_bps: u64,
    /// 单向传播时延（ns）
    pub latency_ns: u64,
    /// 队列容量（"10p" / "15000B"）
    pub q_cap: String,
}

/// 一个可回放的事件（JSON）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizEvent {
    /// 仿真时间（纳秒，和 `SimTime.0` 同口径）
    pub t_ns: u64,
    pub pkt_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub pkt_bytes: Option<u32>,
    pub pkt_kind: Option<VizPacketKind>,
    #[serde(flatten)]
    pub kind: VizEventKind,
}

/// 事件收集器（存内存，仿真结束后写文件）
#[derive(Debug, Default)]
pub struct VizLogger {
    pub events: Vec<VizEvent>,
}

impl VizLogger {
    pub fn push(&mut self, ev: VizEvent) {
        self.events.push(ev);
    }
}
