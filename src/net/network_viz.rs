//! Visualization hooks for the network.

use crate::ndn::{Name, NdnPacket};
use crate::sim::SimTime;
use crate::viz::{VizEvent, VizEventKind, VizLinkInfo, VizNodeInfo, VizPacketKind};

use super::{AppId, Network, NodeId, Packet};

impl Network {
    pub(crate) fn pkt_kind(ndn: &NdnPacket) -> VizPacketKind {
        match ndn {
            NdnPacket::Interest(_) => VizPacketKind::Interest,
            NdnPacket::Data(_) => VizPacketKind::Data,
        }
    }

    fn viz_push(&mut self, ev: VizEvent) {
        if let Some(v) = &mut self.viz {
            v.push(ev);
        }
    }

    fn viz_pkt(&mut self, t: SimTime, pkt: &Packet, kind: VizEventKind) {
        self.viz_push(VizEvent {
            t_ns: t.0,
            pkt_id: Some(pkt.id),
            name: Some(pkt.ndn.name().to_string()),
            pkt_bytes: Some(pkt.size_bytes),
            pkt_kind: Some(Self::pkt_kind(&pkt.ndn)),
            kind,
        });
    }

    /// 写入拓扑元信息；未开启可视化时什么也不做。
    pub fn emit_viz_meta(&mut self) {
        if self.viz.is_none() {
            return;
        }
        let nodes = self
            .nodes()
            .iter()
            .map(|n| {
                let pos = n.position.unwrap_or_default();
                VizNodeInfo {
                    id: n.id().0,
                    name: n.name().to_string(),
                    x: pos.x,
                    y: pos.y,
                    apps: self.apps_on(n.id()),
                }
            })
            .collect::<Vec<_>>();
        let links = self
            .links()
            .iter()
            .map(|l| VizLinkInfo {
                from: l.from.0,
                to: l.to.0,
                bandwidth_bps: l.bandwidth_bps,
                latency_ns: l.latency.0,
                q_cap: l.queue.capacity().to_string(),
            })
            .collect::<Vec<_>>();
        self.viz_push(VizEvent {
            t_ns: 0,
            pkt_id: None,
            name: None,
            pkt_bytes: None,
            pkt_kind: None,
            kind: VizEventKind::Meta { nodes, links },
        });
    }

    pub(crate) fn viz_arrive_node(&mut self, t: SimTime, pkt: &Packet, node: NodeId) {
        self.viz_pkt(t, pkt, VizEventKind::ArriveNode { node: node.0 });
    }

    pub(crate) fn viz_drop(&mut self, t: SimTime, pkt: &Packet, from: NodeId, to: NodeId, q_len: usize) {
        self.viz_pkt(
            t,
            pkt,
            VizEventKind::Drop {
                link_from: from.0,
                link_to: to.0,
                q_len,
            },
        );
    }

    pub(crate) fn viz_tx_start(
        &mut self,
        t: SimTime,
        pkt: &Packet,
        from: NodeId,
        to: NodeId,
        depart: SimTime,
        arrive: SimTime,
    ) {
        self.viz_pkt(
            t,
            pkt,
            VizEventKind::TxStart {
                link_from: from.0,
                link_to: to.0,
                depart_ns: depart.0,
                arrive_ns: arrive.0,
            },
        );
    }

    pub(crate) fn viz_cs_hit(&mut self, t: SimTime, name: &Name, node: NodeId) {
        self.viz_push(VizEvent {
            t_ns: t.0,
            pkt_id: None,
            name: Some(name.to_string()),
            pkt_bytes: None,
            pkt_kind: Some(VizPacketKind::Data),
            kind: VizEventKind::CsHit { node: node.0 },
        });
    }

    pub(crate) fn viz_no_route(&mut self, t: SimTime, name: &Name, node: NodeId) {
        self.viz_push(VizEvent {
            t_ns: t.0,
            pkt_id: None,
            name: Some(name.to_string()),
            pkt_bytes: None,
            pkt_kind: Some(VizPacketKind::Interest),
            kind: VizEventKind::NoRoute { node: node.0 },
        });
    }

    pub(crate) fn viz_app_rx(&mut self, t: SimTime, ndn: &NdnPacket, node: NodeId, app: AppId) {
        self.viz_push(VizEvent {
            t_ns: t.0,
            pkt_id: None,
            name: Some(ndn.name().to_string()),
            pkt_bytes: Some(ndn.wire_size()),
            pkt_kind: Some(Self::pkt_kind(ndn)),
            kind: VizEventKind::AppRx {
                node: node.0,
                app: app.0,
            },
        });
    }
}
