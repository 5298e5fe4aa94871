//! 网络拓扑与转发管线
//!
//! 持有节点（含各自的 NDN 转发器）、单向链路与应用。转发器只产生决策，
//! 这里负责把决策落到链路队列或本地应用上。

use std::collections::HashMap;

use super::attr::LinkParams;
use super::events::{DeliverPacket, LinkReady, PitExpire};
use super::id::{AppId, LinkId, NodeId};
use super::link::Link;
use super::node::{Node, Position};
use super::packet::Packet;
use super::stats::Stats;
use crate::app::{App, AppStats, DeliverToApp, StartApp};
use crate::error::ScenarioError;
use crate::ndn::{Data, Face, Forwarder, Interest, InterestDecision, Name, NdnPacket, Strategy};
use crate::sim::Simulator;
use crate::viz::VizLogger;
use tracing::{debug, trace, warn};

/// 网络拓扑
#[derive(Default)]
pub struct Network {
    nodes: Vec<Node>,
    links: Vec<Link>,
    edges: HashMap<(NodeId, NodeId), LinkId>,
    apps: Vec<Option<Box<dyn App>>>,
    app_nodes: Vec<NodeId>,
    app_descr: Vec<String>,
    next_pkt_id: u64,
    nonce_ctr: u64,
    pub stats: Stats,
    pub viz: Option<VizLogger>,
}

impl Network {
    /// 添加节点（未命名，转发器为默认配置）
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id));
        id
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// 为节点注册名字
    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) {
        if let Some(n) = self.nodes.get_mut(id.0) {
            n.set_name(name.into());
        }
    }

    /// 查询节点名字；未注册时返回空串
    pub fn find_name(&self, id: NodeId) -> &str {
        self.nodes.get(id.0).map(Node::name).unwrap_or("")
    }

    /// 按名字反查节点
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        if name.is_empty() {
            return None;
        }
        self.nodes.iter().find(|n| n.name() == name).map(Node::id)
    }

    pub fn set_position(&mut self, id: NodeId, x: f64, y: f64) {
        if let Some(n) = self.nodes.get_mut(id.0) {
            n.position = Some(Position { x, y });
        }
    }

    /// 连接两个节点（创建单向链路）
    pub fn connect(&mut self, from: NodeId, to: NodeId, params: &LinkParams) -> LinkId {
        let id = LinkId(self.links.len());
        self.links.push(Link::new(from, to, params));
        self.edges.insert((from, to), id);
        id
    }

    /// 点对点连接：两个方向各一条链路
    pub fn connect_p2p(&mut self, a: NodeId, b: NodeId, params: &LinkParams) -> (LinkId, LinkId) {
        (self.connect(a, b, params), self.connect(b, a, params))
    }

    pub fn link_between(&self, from: NodeId, to: NodeId) -> Option<LinkId> {
        self.edges.get(&(from, to)).copied()
    }

    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id.0)
    }

    /// 在所有节点上（重新）安装 NDN 栈，content store 容量为 `cs_max_entries`（0 = 不限）。
    pub fn install_stack_all(&mut self, cs_max_entries: usize) {
        for n in &mut self.nodes {
            n.forwarder = Forwarder::new(cs_max_entries);
        }
    }

    /// 所有节点在 `prefix` 下使用 `strategy`
    pub fn set_strategy_all(&mut self, prefix: &Name, strategy: Strategy) {
        for n in &mut self.nodes {
            n.forwarder.strategy_choice.set(prefix.clone(), strategy);
        }
    }

    pub fn forwarder(&self, node: NodeId) -> Option<&Forwarder> {
        self.nodes.get(node.0).map(|n| &n.forwarder)
    }

    /// 手工添加一条 FIB 路由：`origin` 上 `prefix` 经由相邻节点 `next_hop` 转发。
    pub fn add_route(
        &mut self,
        origin: NodeId,
        prefix: Name,
        next_hop: NodeId,
        cost: u32,
    ) -> Result<(), ScenarioError> {
        if self.link_between(origin, next_hop).is_none() {
            return Err(ScenarioError::NoLink {
                from: origin.0,
                to: next_hop.0,
            });
        }
        debug!(origin = ?origin, prefix = %prefix, next_hop = ?next_hop, cost, "添加 FIB 路由");
        self.add_face_route(origin, prefix, Face::Link(next_hop), cost);
        Ok(())
    }

    /// 向节点 FIB 添加任意 face 的路由（应用注册前缀时使用）。
    pub fn add_face_route(&mut self, node: NodeId, prefix: Name, face: Face, cost: u32) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.forwarder.fib.add_route(prefix, face, cost);
        }
    }

    /// 在节点上安装应用
    pub fn install_app(&mut self, app: Box<dyn App>) -> AppId {
        let id = AppId(self.apps.len());
        self.app_nodes.push(app.node());
        self.app_descr.push(format!("{} {}", app.kind(), app.prefix()));
        self.apps.push(Some(app));
        id
    }

    pub fn app_count(&self) -> usize {
        self.apps.len()
    }

    pub fn app_node(&self, app: AppId) -> Option<NodeId> {
        self.app_nodes.get(app.0).copied()
    }

    pub fn app_stats(&self, app: AppId) -> Option<AppStats> {
        self.apps.get(app.0)?.as_ref().map(|a| a.stats())
    }

    pub(crate) fn apps_on(&self, node: NodeId) -> Vec<String> {
        self.app_nodes
            .iter()
            .zip(&self.app_descr)
            .filter(|(n, _)| **n == node)
            .map(|(_, d)| d.clone())
            .collect()
    }

    /// 在当前时刻调度所有应用启动
    pub fn start_apps(&mut self, sim: &mut Simulator) {
        for i in 0..self.apps.len() {
            sim.schedule(sim.now(), StartApp { app: AppId(i) });
        }
    }

    /// 暂时取出应用调用 `f`，避免 &mut self 与 &mut app 的重叠借用。
    pub(crate) fn with_app<F>(&mut self, app: AppId, sim: &mut Simulator, f: F)
    where
        F: FnOnce(&mut dyn App, &mut Simulator, &mut Network),
    {
        let Some(mut a) = self.apps.get_mut(app.0).and_then(Option::take) else {
            warn!(app = ?app, "应用不存在或正在处理中");
            return;
        };
        f(a.as_mut(), sim, self);
        self.apps[app.0] = Some(a);
    }

    /// 生成下一个 nonce（确定性，可复现）
    pub fn next_nonce(&mut self) -> u32 {
        self.nonce_ctr = self.nonce_ctr.wrapping_add(1);
        mix64(self.nonce_ctr) as u32
    }

    /// 创建数据包
    pub fn make_packet(&mut self, ndn: NdnPacket) -> Packet {
        let id = self.next_pkt_id;
        self.next_pkt_id = self.next_pkt_id.wrapping_add(1);
        Packet::new(id, ndn)
    }

    /// 应用发出 Interest（经本地 app face 进入所在节点的转发器）
    pub fn express_interest(&mut self, app: AppId, interest: Interest, sim: &mut Simulator) {
        let Some(node) = self.app_node(app) else {
            warn!(app = ?app, "未知应用");
            return;
        };
        self.process_interest(node, Face::App(app), interest, sim);
    }

    /// 应用发出 Data
    pub fn put_data(&mut self, app: AppId, data: Data, sim: &mut Simulator) {
        let Some(node) = self.app_node(app) else {
            warn!(app = ?app, "未知应用");
            return;
        };
        self.process_data(node, Face::App(app), data, sim);
    }

    /// 链路上的 packet 到达节点
    #[tracing::instrument(level = "trace", skip(self, pkt, sim), fields(pkt_id = pkt.id))]
    pub fn deliver(&mut self, from: NodeId, to: NodeId, pkt: Packet, sim: &mut Simulator) {
        self.viz_arrive_node(sim.now(), &pkt, to);
        match pkt.ndn {
            NdnPacket::Interest(i) => self.process_interest(to, Face::Link(from), i, sim),
            NdnPacket::Data(d) => self.process_data(to, Face::Link(from), d, sim),
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(node = node.0, name = %interest.name, in_face = %in_face))]
    fn process_interest(&mut self, node: NodeId, in_face: Face, interest: Interest, sim: &mut Simulator) {
        let now = sim.now();
        let decision = self.nodes[node.0]
            .forwarder
            .on_incoming_interest(now, in_face, &interest);
        trace!(?decision, "转发决策");

        match decision {
            InterestDecision::Forward { to } => {
                self.schedule_pit_expiry(node, &interest, sim);
                self.send_to_face(node, to, NdnPacket::Interest(interest), sim);
            }
            InterestDecision::CsHit(data) => {
                self.stats.cs_hits += 1;
                self.viz_cs_hit(now, &data.name, node);
                self.send_to_face(node, in_face, NdnPacket::Data(data), sim);
            }
            InterestDecision::Aggregated => {
                self.stats.aggregated += 1;
                self.schedule_pit_expiry(node, &interest, sim);
            }
            InterestDecision::DropLoop => {
                self.stats.dropped_loop += 1;
            }
            InterestDecision::DropNoRoute => {
                self.stats.dropped_no_route += 1;
                self.viz_no_route(now, &interest.name, node);
            }
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(node = node.0, name = %data.name, in_face = %in_face))]
    fn process_data(&mut self, node: NodeId, in_face: Face, data: Data, sim: &mut Simulator) {
        let now = sim.now();
        let Some(faces) = self.nodes[node.0]
            .forwarder
            .on_incoming_data(now, in_face, &data)
        else {
            debug!("unsolicited Data，丢弃");
            self.stats.dropped_unsolicited += 1;
            return;
        };
        for face in faces {
            self.send_to_face(node, face, NdnPacket::Data(data.clone()), sim);
        }
    }

    fn schedule_pit_expiry(&mut self, node: NodeId, interest: &Interest, sim: &mut Simulator) {
        sim.schedule_in(
            interest.lifetime,
            PitExpire {
                node,
                name: interest.name.clone(),
            },
        );
    }

    fn send_to_face(&mut self, node: NodeId, face: Face, ndn: NdnPacket, sim: &mut Simulator) {
        match face {
            Face::App(app) => {
                self.viz_app_rx(sim.now(), &ndn, node, app);
                sim.schedule(sim.now(), DeliverToApp { app, ndn });
            }
            Face::Link(next) => {
                let pkt = self.make_packet(ndn);
                self.send_on_link(node, next, pkt, sim);
            }
        }
    }

    /// packet 进入 `from -> to` 链路的出口队列；链路空闲时立即开始发送。
    pub fn send_on_link(&mut self, from: NodeId, to: NodeId, pkt: Packet, sim: &mut Simulator) {
        let Some(link_id) = self.link_between(from, to) else {
            warn!(from = ?from, to = ?to, pkt_id = pkt.id, "没有对应链路，丢弃");
            return;
        };
        let link = &mut self.links[link_id.0];
        if let Err(pkt) = link.queue.enqueue(pkt) {
            let q_len = link.queue.len();
            debug!(pkt_id = pkt.id, q_len, "🗑️  出口队列已满，丢包");
            self.stats.dropped_queue += 1;
            self.viz_drop(sim.now(), &pkt, from, to, q_len);
            return;
        }
        if !link.busy {
            self.start_tx(link_id, sim);
        }
    }

    fn start_tx(&mut self, link_id: LinkId, sim: &mut Simulator) {
        let link = &mut self.links[link_id.0];
        if link.busy {
            return;
        }
        let Some(pkt) = link.queue.dequeue() else {
            return;
        };
        link.busy = true;

        let now = sim.now();
        let depart = now.saturating_add(link.tx_time(pkt.size_bytes));
        let arrive = depart.saturating_add(link.latency);
        let (from, to) = (link.from, link.to);
        trace!(pkt_id = pkt.id, depart = %depart, arrive = %arrive, "开始发送");

        if pkt.is_interest() {
            self.stats.interests_tx += 1;
        } else {
            self.stats.data_tx += 1;
        }
        self.stats.bytes_tx += pkt.size_bytes as u64;
        self.viz_tx_start(now, &pkt, from, to, depart, arrive);

        sim.schedule(depart, LinkReady { link_id });
        sim.schedule(arrive, DeliverPacket { from, to, pkt });
    }

    /// 链路完成一次序列化
    pub fn on_link_ready(&mut self, link_id: LinkId, sim: &mut Simulator) {
        if let Some(link) = self.links.get_mut(link_id.0) {
            link.busy = false;
            self.start_tx(link_id, sim);
        }
    }

    pub fn on_pit_expire(&mut self, node: NodeId, name: &Name, sim: &mut Simulator) {
        let Some(n) = self.nodes.get_mut(node.0) else {
            return;
        };
        if n.forwarder.on_pit_expiry(name, sim.now()) {
            trace!(node = node.0, name = %name, "PIT 条目过期");
            self.stats.pit_expired += 1;
        }
    }

    /// 当前所有节点 PIT 条目总数
    pub fn pit_entries(&self) -> usize {
        self.nodes.iter().map(|n| n.forwarder.pit.len()).sum()
    }

    /// 全网仍在链路队列中的 packet 数
    pub fn queued_packets(&self) -> usize {
        self.links.iter().map(|l| l.queue.len()).sum()
    }
}

/// 一个简单、确定性的 64-bit mixing（splitmix64），用于生成可复现的 nonce。
fn mix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}
