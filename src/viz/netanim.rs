//! NetAnim 风格的 XML 动画轨迹
//!
//! 由内存中的可视化事件生成：`Meta` 给出节点与链路，每个 `TxStart` 生成一条
//! `<p>` 记录（首/末比特发送与接收时间，单位秒）。

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;
use xmltree::{Element, EmitterConfig, XMLNode};

use super::{VizEvent, VizEventKind, VizLinkInfo, VizNodeInfo};
use crate::error::ScenarioError;

pub const NETANIM_VERSION: &str = "netanim-3.108";

fn elem(name: &str, attrs: &[(&str, String)]) -> Element {
    let mut e = Element::new(name);
    for (k, v) in attrs {
        e.attributes.insert((*k).to_string(), v.clone());
    }
    e
}

fn secs(ns: u64) -> String {
    format!("{:.9}", ns as f64 / 1e9)
}

fn node_elem(n: &VizNodeInfo) -> Element {
    let mut descr = n.name.clone();
    for app in &n.apps {
        descr.push_str(" | ");
        descr.push_str(app);
    }
    elem(
        "node",
        &[
            ("id", n.id.to_string()),
            ("sysId", "0".to_string()),
            ("locX", format!("{:.2}", n.x)),
            ("locY", format!("{:.2}", n.y)),
            ("descr", descr),
        ],
    )
}

/// 点对点链路只输出一次（from < to 的方向）
fn link_elems(links: &[VizLinkInfo]) -> Vec<Element> {
    links
        .iter()
        .filter(|l| l.from < l.to)
        .map(|l| {
            elem(
                "link",
                &[
                    ("fromId", l.from.to_string()),
                    ("toId", l.to.to_string()),
                    ("ld", format!("{}bps/{}ns/{}", l.bandwidth_bps, l.latency_ns, l.q_cap)),
                ],
            )
        })
        .collect()
}

/// 把事件转换为 `<anim>` 根元素。
pub fn netanim_xml(events: &[VizEvent]) -> Element {
    let mut root = elem(
        "anim",
        &[
            ("ver", NETANIM_VERSION.to_string()),
            ("filetype", "animation".to_string()),
        ],
    );

    let mut latency_ns = HashMap::new();
    for ev in events {
        match &ev.kind {
            VizEventKind::Meta { nodes, links } => {
                let (min_x, max_x) = bounds(nodes.iter().map(|n| n.x));
                let (min_y, max_y) = bounds(nodes.iter().map(|n| n.y));
                let mut topo = elem(
                    "topology",
                    &[
                        ("minX", format!("{min_x:.2}")),
                        ("minY", format!("{min_y:.2}")),
                        ("maxX", format!("{max_x:.2}")),
                        ("maxY", format!("{max_y:.2}")),
                    ],
                );
                topo.children
                    .extend(nodes.iter().map(|n| XMLNode::Element(node_elem(n))));
                topo.children
                    .extend(link_elems(links).into_iter().map(XMLNode::Element));
                root.children.push(XMLNode::Element(topo));
                for l in links {
                    latency_ns.insert((l.from, l.to), l.latency_ns);
                }
            }
            VizEventKind::TxStart {
                link_from,
                link_to,
                depart_ns,
                arrive_ns,
            } => {
                let lat = latency_ns.get(&(*link_from, *link_to)).copied().unwrap_or(0);
                let meta = match (&ev.pkt_kind, &ev.name) {
                    (Some(kind), Some(name)) => format!("{kind:?} {name}"),
                    (_, Some(name)) => name.clone(),
                    _ => String::new(),
                };
                let p = elem(
                    "p",
                    &[
                        ("fId", link_from.to_string()),
                        ("fbTx", secs(ev.t_ns)),
                        ("lbTx", secs(*depart_ns)),
                        ("meta-info", meta),
                        ("tId", link_to.to_string()),
                        ("fbRx", secs(ev.t_ns.saturating_add(lat))),
                        ("lbRx", secs(*arrive_ns)),
                    ],
                );
                root.children.push(XMLNode::Element(p));
            }
            _ => {}
        }
    }
    root
}

fn bounds(it: impl Iterator<Item = f64>) -> (f64, f64) {
    it.fold(None, |acc: Option<(f64, f64)>, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
    .unwrap_or((0.0, 0.0))
}

/// 写出 XML 动画文件
pub fn write_netanim_xml(events: &[VizEvent], path: &Path) -> Result<(), ScenarioError> {
    let root = netanim_xml(events);
    let mut w = BufWriter::new(File::create(path)?);
    root.write_with_config(&mut w, EmitterConfig::new().perform_indent(true))?;
    w.flush()?;
    info!(path = %path.display(), packets = root.children.len().saturating_sub(1), "📝 动画轨迹已写出");
    Ok(())
}

/// 写出结构化 JSON 事件
pub fn write_viz_json(events: &[VizEvent], path: &Path) -> Result<(), ScenarioError> {
    let json = serde_json::to_string_pretty(events)?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), events = events.len(), "📝 可视化事件已写出");
    Ok(())
}
