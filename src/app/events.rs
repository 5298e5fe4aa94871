//! 应用相关事件

use super::AppTimer;
use crate::ndn::NdnPacket;
use crate::net::{AppId, NetWorld};
use crate::sim::{Event, Simulator, World};

/// 事件：启动应用
#[derive(Debug)]
pub struct StartApp {
    pub app: AppId,
}

impl Event for StartApp {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let StartApp { app } = *self;
        NetWorld::from_world(world)
            .net
            .with_app(app, sim, |a, sim, net| a.start(app, sim, net));
    }
}

/// 事件：应用定时器到期
#[derive(Debug)]
pub struct AppTimerFired {
    pub app: AppId,
    pub timer: AppTimer,
}

impl Event for AppTimerFired {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let AppTimerFired { app, timer } = *self;
        NetWorld::from_world(world)
            .net
            .with_app(app, sim, |a, sim, net| a.on_timer(app, timer, sim, net));
    }
}

/// 事件：转发器把报文交给本地应用
#[derive(Debug)]
pub struct DeliverToApp {
    pub app: AppId,
    pub ndn: NdnPacket,
}

impl Event for DeliverToApp {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let DeliverToApp { app, ndn } = *self;
        NetWorld::from_world(world).net.with_app(app, sim, |a, sim, net| match ndn {
            NdnPacket::Interest(i) => a.on_interest(app, i, sim, net),
            NdnPacket::Data(d) => a.on_data(app, d, sim, net),
        });
    }
}
