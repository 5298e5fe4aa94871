//! 可视化与动画轨迹
//!
//! 仿真过程中把结构化事件收集在内存里（`VizLogger`），结束后写成 NetAnim 风格的
//! XML 动画文件，或原样导出为 JSON 方便离线分析。

mod netanim;
mod types;

pub use netanim::{NETANIM_VERSION, netanim_xml, write_netanim_xml, write_viz_json};
pub use types::{VizEvent, VizEventKind, VizLinkInfo, VizLogger, VizNodeInfo, VizPacketKind};
