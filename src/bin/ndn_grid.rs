//! 3×3 网格 NDN 仿真
//!
//! (0,0) 上的消费者以 100 Interest/s 请求 `/data/room/p/<seq>`，(2,2) 上的生产者
//! 回 1024 字节 Data；路由手工配置，运行 20 秒并写出动画轨迹。

use clap::Parser;
use ndnsim_rs::error::ScenarioError;
use ndnsim_rs::scenario::{GridScenario, ScenarioSpec};
use std::path::PathBuf;
use tracing::error;

#[derive(Debug, Parser)]
#[command(name = "ndn-grid", about = "3x3 网格 NDN 仿真：consumer(0,0) -> producer(2,2)")]
struct Args {
    /// File Name for Animation Output（缺省取场景配置，默认 grid-animation.xml）
    #[arg(long = "animFile")]
    anim_file: Option<PathBuf>,

    /// 场景配置 JSON（缺省字段取内置默认值）
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// 额外导出结构化可视化事件（JSON）
    #[arg(long)]
    viz_json: Option<PathBuf>,

    /// 覆盖停止时刻（秒）
    #[arg(long)]
    stop_s: Option<f64>,
}

fn run(args: Args) -> Result<(), ScenarioError> {
    let mut spec = match &args.scenario {
        Some(path) => ScenarioSpec::from_json_file(path)?,
        None => ScenarioSpec::default(),
    };
    if let Some(path) = args.anim_file {
        spec.anim_file = path;
    }
    if let Some(s) = args.stop_s {
        spec.stop_s = s;
    }

    let mut scenario = GridScenario::build(spec)?;
    let report = scenario.run();

    scenario.write_animation(&scenario.spec.anim_file)?;
    if let Some(path) = &args.viz_json {
        scenario.write_viz_json(path)?;
    }

    println!("{}", report.summary_line());
    Ok(())
}

fn main() {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    if let Err(err) = run(args) {
        error!(%err, "❌ 致命错误");
        eprintln!("{err}");
        std::process::exit(1);
    }
}
