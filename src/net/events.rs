//! 网络层事件：链路出队、packet 到达、PIT 到期

use super::id::{LinkId, NodeId};
use super::net_world::NetWorld;
use super::packet::Packet;
use crate::ndn::Name;
use crate::sim::{Event, Simulator, World};
use tracing::{debug, trace};

/// 事件：链路完成一次序列化，尝试发送出口队列中的下一个 packet。
#[derive(Debug)]
pub struct LinkReady {
    pub link_id: LinkId,
}

impl Event for LinkReady {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let LinkReady { link_id } = *self;
        NetWorld::from_world(world).net.on_link_ready(link_id, sim);
    }
}

/// 事件：packet 经链路 `from -> to` 到达 `to`。
#[derive(Debug)]
pub struct DeliverPacket {
    pub from: NodeId,
    pub to: NodeId,
    pub pkt: Packet,
}

impl Event for DeliverPacket {
    #[tracing::instrument(level = "debug", skip(self, sim, world), fields(pkt_id = self.pkt.id, from = ?self.from, to = ?self.to))]
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let DeliverPacket { from, to, pkt } = *self;
        debug!(
            name = %pkt.ndn.name(),
            size_bytes = pkt.size_bytes,
            now = %sim.now(),
            "📨 报文到达节点"
        );
        NetWorld::from_world(world).net.deliver(from, to, pkt, sim);
        trace!("DeliverPacket 处理完成");
    }
}

/// 事件：检查 `node` 上 `name` 的 PIT 条目是否已过期。
///
/// 条目在此期间被满足或被重传延长时，这次检查什么也不做。
#[derive(Debug)]
pub struct PitExpire {
    pub node: NodeId,
    pub name: Name,
}

impl Event for PitExpire {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let PitExpire { node, name } = *self;
        NetWorld::from_world(world).net.on_pit_expire(node, &name, sim);
    }
}
