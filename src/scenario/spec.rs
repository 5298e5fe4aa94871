//! 场景配置
//!
//! 默认值即 3×3 网格场景本身；也可以从 JSON 加载后局部覆盖。

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::{ConsumerCbrConfig, ProducerConfig};
use crate::error::ScenarioError;
use crate::ndn::{BEST_ROUTE, Name};
use crate::net::LinkAttrs;
use crate::topo::grid::BoundingBox;

pub const DEFAULT_ANIM_FILE: &str = "grid-animation.xml";

/// 网格坐标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCoord {
    pub row: usize,
    pub col: usize,
}

impl GridCoord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// 一条手工 FIB 路由：origin 上 prefix 经 next_hop 转发
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    pub origin: GridCoord,
    pub prefix: Name,
    pub next_hop: GridCoord,
    pub cost: u32,
}

/// 网格场景的固定路由：`/data` 从消费者一侧向右下铺开，
/// `/data/room/p` 只在生产者的两个邻居上。
pub fn default_routes() -> Vec<RouteSpec> {
    const DATA: &[((usize, usize), (usize, usize))] = &[
        ((0, 0), (0, 1)),
        ((0, 0), (1, 0)),
        ((0, 1), (0, 2)),
        ((0, 1), (1, 1)),
        ((0, 2), (1, 2)),
        ((1, 0), (1, 1)),
        ((1, 0), (2, 0)),
        ((1, 1), (2, 1)),
        ((2, 0), (2, 1)),
        ((1, 1), (1, 2)),
    ];
    const ROOM_P: &[((usize, usize), (usize, usize))] = &[((2, 1), (2, 2)), ((1, 2), (2, 2))];

    let mk = |prefix: Name, table: &[((usize, usize), (usize, usize))]| {
        table
            .iter()
            .map(|&((or, oc), (nr, nc))| RouteSpec {
                origin: GridCoord::new(or, oc),
                prefix: prefix.clone(),
                next_hop: GridCoord::new(nr, nc),
                cost: 1,
            })
            .collect::<Vec<_>>()
    };

    let data = Name::root().append("data");
    let room_p = data.clone().append("room").append("p");
    let mut routes = mk(data, DATA);
    routes.extend(mk(room_p, ROOM_P));
    routes
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioSpec {
    /// 点对点链路默认参数
    pub link: LinkAttrs,
    pub rows: usize,
    pub cols: usize,
    pub bounding_box: BoundingBox,
    /// Content store 容量（条目数），0 表示不限
    pub cs_max_entries: usize,
    pub strategy_prefix: Name,
    pub strategy: String,
    pub consumer: GridCoord,
    pub producer: GridCoord,
    pub consumer_name: String,
    pub producer_name: String,
    /// 前缀为 `/data/<room>/<生产者名字>`
    pub room: String,
    pub consumer_app: ConsumerCbrConfig,
    pub producer_app: ProducerConfig,
    pub routes: Vec<RouteSpec>,
    /// 仿真停止时刻（秒）
    pub stop_s: f64,
    pub anim_file: PathBuf,
}

impl Default for ScenarioSpec {
    fn default() -> Self {
        Self {
            link: LinkAttrs::default(),
            rows: 3,
            cols: 3,
            bounding_box: BoundingBox {
                ulx: 100.0,
                uly: 100.0,
                lrx: 200.0,
                lry: 200.0,
            },
            cs_max_entries: 0,
            strategy_prefix: Name::root(),
            strategy: BEST_ROUTE.to_string(),
            consumer: GridCoord::new(0, 0),
            producer: GridCoord::new(2, 2),
            consumer_name: "c".to_string(),
            producer_name: "p".to_string(),
            room: "room".to_string(),
            consumer_app: ConsumerCbrConfig::default(),
            producer_app: ProducerConfig::default(),
            routes: default_routes(),
            stop_s: 20.0,
            anim_file: PathBuf::from(DEFAULT_ANIM_FILE),
        }
    }
}

impl ScenarioSpec {
    /// 从 JSON 文件加载；缺省字段取默认值。
    pub fn from_json_file(path: &Path) -> Result<Self, ScenarioError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
