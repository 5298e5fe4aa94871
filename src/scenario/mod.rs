//! 3×3 网格 NDN 场景
//!
//! 按顺序完成配置：链路默认参数 → 网格 → NDN 栈 → 策略 → 消费者/生产者 →
//! 手工路由 → 动画记录 → 设置停止时刻。`run` 运行仿真并在结束后释放事件队列。

mod spec;

pub use spec::{DEFAULT_ANIM_FILE, GridCoord, RouteSpec, ScenarioSpec, default_routes};

use std::path::Path;

use serde::Serialize;
use tracing::{error, info};

use crate::app::{AppStats, ConsumerCbr, Producer};
use crate::error::ScenarioError;
use crate::ndn::{Name, Strategy};
use crate::net::{AppId, NetWorld, NodeId, Stats};
use crate::sim::{SimTime, Simulator};
use crate::topo::grid::PointToPointGrid;
use crate::viz::{VizLogger, write_netanim_xml, write_viz_json};

/// 解析到节点后的路由
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledRoute {
    pub origin: NodeId,
    pub prefix: Name,
    pub next_hop: NodeId,
    pub cost: u32,
}

/// 运行结果
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub end_time_s: f64,
    pub events: u64,
    pub consumer: AppStats,
    pub producer: AppStats,
    pub net: Stats,
}

impl ScenarioReport {
    pub fn summary_line(&self) -> String {
        format!(
            "done @ {:.3}s, interests_sent={}, data_received={}, timeouts={}, producer_interests={}, dropped_queue={}, cs_hits={}",
            self.end_time_s,
            self.consumer.interests_sent,
            self.consumer.data_received,
            self.consumer.timeouts,
            self.producer.interests_received,
            self.net.dropped_queue,
            self.net.cs_hits,
        )
    }
}

pub struct GridScenario {
    pub spec: ScenarioSpec,
    pub sim: Simulator,
    pub world: NetWorld,
    pub grid: PointToPointGrid,
    pub consumer: NodeId,
    pub producer: NodeId,
    pub prefix: Name,
    pub consumer_app: AppId,
    pub producer_app: AppId,
    pub routes: Vec<InstalledRoute>,
}

impl GridScenario {
    /// 完成全部配置；消费者或生产者不存在时在安装任何应用、路由之前返回错误。
    #[tracing::instrument(skip(spec), fields(rows = spec.rows, cols = spec.cols))]
    pub fn build(spec: ScenarioSpec) -> Result<Self, ScenarioError> {
        let params = spec.link.parse()?;
        let freq = spec.consumer_app.frequency;
        let period_rounds_to_zero = freq > 0.0 && SimTime::from_secs_f64(1.0 / freq) == SimTime::ZERO;
        if !freq.is_finite() || freq < 0.0 || period_rounds_to_zero {
            return Err(ScenarioError::InvalidFrequency(freq));
        }
        info!(
            data_rate = %params.data_rate,
            delay = %params.delay,
            max_size = %params.max_size,
            "链路默认参数"
        );

        let mut sim = Simulator::default();
        let mut world = NetWorld::default();

        let grid = PointToPointGrid::build(&mut world, spec.rows, spec.cols, &params)?;
        grid.set_bounding_box(&mut world, spec.bounding_box);

        world.net.install_stack_all(spec.cs_max_entries);
        let strategy: Strategy = spec.strategy.parse()?;
        world.net.set_strategy_all(&spec.strategy_prefix, strategy);

        let consumer = grid.node(spec.consumer.row, spec.consumer.col);
        let producer = grid.node(spec.producer.row, spec.producer.col);
        let (Some(consumer), Some(producer)) = (consumer, producer) else {
            let err = ScenarioError::MissingEndpoint {
                consumer_missing: consumer.is_none(),
                producer_missing: producer.is_none(),
            };
            error!(%err, "拓扑错误");
            return Err(err);
        };

        for (idx, node) in grid.nodes().iter().enumerate() {
            world.net.set_name(*node, format!("n{idx}"));
        }
        for (node, name) in [(consumer, &spec.consumer_name), (producer, &spec.producer_name)] {
            if world.net.find_node(name).is_some_and(|other| other != node) {
                return Err(ScenarioError::DuplicateName(name.clone()));
            }
            world.net.set_name(node, name.clone());
        }

        let prefix: Name = format!("/data/{}/{}", spec.room, world.net.find_name(producer)).parse()?;
        info!(prefix = %prefix, consumer = ?consumer, producer = ?producer, "安装应用");

        let consumer_app = world.net.install_app(Box::new(ConsumerCbr::new(
            consumer,
            prefix.clone(),
            &spec.consumer_app,
        )));
        let producer_app = world.net.install_app(Box::new(Producer::new(
            producer,
            prefix.clone(),
            &spec.producer_app,
        )));
        world.net.start_apps(&mut sim);

        let mut routes = Vec::with_capacity(spec.routes.len());
        for r in &spec.routes {
            let resolve = |c: GridCoord| {
                grid.node(c.row, c.col)
                    .ok_or(ScenarioError::UnknownNode { row: c.row, col: c.col })
            };
            let route = InstalledRoute {
                origin: resolve(r.origin)?,
                prefix: r.prefix.clone(),
                next_hop: resolve(r.next_hop)?,
                cost: r.cost,
            };
            world
                .net
                .add_route(route.origin, route.prefix.clone(), route.next_hop, route.cost)?;
            routes.push(route);
        }
        info!(routes = routes.len(), "FIB 路由已配置");

        world.net.viz = Some(VizLogger::default());
        world.net.emit_viz_meta();

        sim.stop_at(SimTime::from_secs_f64(spec.stop_s));

        Ok(Self {
            spec,
            sim,
            world,
            grid,
            consumer,
            producer,
            prefix,
            consumer_app,
            producer_app,
            routes,
        })
    }

    /// 运行到停止时刻，然后销毁剩余事件。
    pub fn run(&mut self) -> ScenarioReport {
        self.sim.run(&mut self.world);
        let report = self.report();
        self.sim.destroy();
        info!("{}", report.summary_line());
        report
    }

    pub fn report(&self) -> ScenarioReport {
        let net = &self.world.net;
        ScenarioReport {
            end_time_s: self.sim.now().as_secs_f64(),
            events: self.sim.executed_events(),
            consumer: net.app_stats(self.consumer_app).unwrap_or_default(),
            producer: net.app_stats(self.producer_app).unwrap_or_default(),
            net: net.stats.clone(),
        }
    }

    /// 写出 XML 动画轨迹
    pub fn write_animation(&self, path: &Path) -> Result<(), ScenarioError> {
        let events = self.world.net.viz.as_ref().map(|v| v.events.as_slice()).unwrap_or(&[]);
        write_netanim_xml(events, path)
    }

    /// 写出 JSON 事件
    pub fn write_viz_json(&self, path: &Path) -> Result<(), ScenarioError> {
        let events = self.world.net.viz.as_ref().map(|v| v.events.as_slice()).unwrap_or(&[]);
        write_viz_json(events, path)
    }
}
