use xmltree::{Element, XMLNode};

use crate::ndn::{Data, NdnPacket};
use crate::net::{LinkAttrs, NetWorld};
use crate::sim::Simulator;
use crate::viz::{NETANIM_VERSION, VizEventKind, VizLogger, netanim_xml};

fn elements<'a>(e: &'a Element, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
    e.children.iter().filter_map(move |c| match c {
        XMLNode::Element(el) if el.name == name => Some(el),
        _ => None,
    })
}

fn traced_world() -> (NetWorld, Simulator) {
    let mut world = NetWorld::default();
    let a = world.net.add_node();
    let b = world.net.add_node();
    let params = LinkAttrs::default().parse().expect("default link attrs");
    world.net.connect_p2p(a, b, &params);
    world.net.set_name(a, "c");
    world.net.set_name(b, "p");
    world.net.set_position(a, 100.0, 100.0);
    world.net.set_position(b, 200.0, 100.0);
    world.net.viz = Some(VizLogger::default());
    world.net.emit_viz_meta();

    let mut sim = Simulator::default();
    let pkt = world.net.make_packet(NdnPacket::Data(Data::new(
        "/data/room/p/0".parse().expect("name"),
        1024,
    )));
    world.net.send_on_link(a, b, pkt, &mut sim);
    sim.run(&mut world);
    (world, sim)
}

#[test]
fn meta_event_comes_first_and_describes_topology() {
    let (world, _sim) = traced_world();
    let events = &world.net.viz.as_ref().expect("viz").events;

    let VizEventKind::Meta { nodes, links } = &events[0].kind else {
        panic!("first event must be meta, got {:?}", events[0].kind);
    };
    assert_eq!(events[0].t_ns, 0);
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].name, "c");
    assert_eq!(nodes[1].x, 200.0);
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].q_cap, "10p");
    assert_eq!(links[0].bandwidth_bps, 1_000_000);
    assert_eq!(links[0].latency_ns, 10_000_000);

    assert!(events.iter().any(|e| matches!(e.kind, VizEventKind::TxStart { .. })));
    assert!(events.iter().any(|e| matches!(e.kind, VizEventKind::ArriveNode { node: 1 })));

    let json = serde_json::to_value(&events[0]).expect("json");
    assert_eq!(json["kind"], "meta");
}

#[test]
fn netanim_xml_has_topology_and_packet_records() {
    let (world, _sim) = traced_world();
    let events = &world.net.viz.as_ref().expect("viz").events;
    let root = netanim_xml(events);

    assert_eq!(root.name, "anim");
    assert_eq!(root.attributes.get("ver").map(String::as_str), Some(NETANIM_VERSION));
    assert_eq!(root.attributes.get("filetype").map(String::as_str), Some("animation"));

    let topo = elements(&root, "topology").next().expect("topology");
    assert_eq!(elements(topo, "node").count(), 2);
    // 两个方向只算一条
    assert_eq!(elements(topo, "link").count(), 1);
    let node = elements(topo, "node").next().expect("node");
    assert_eq!(node.attributes.get("locX").map(String::as_str), Some("100.00"));

    let packets = elements(&root, "p").collect::<Vec<_>>();
    assert_eq!(packets.len(), 1);
    let p = packets[0];
    assert_eq!(p.attributes.get("fId").map(String::as_str), Some("0"));
    assert_eq!(p.attributes.get("tId").map(String::as_str), Some("1"));
    assert_eq!(p.attributes.get("fbTx").map(String::as_str), Some("0.000000000"));
    assert_eq!(p.attributes.get("fbRx").map(String::as_str), Some("0.010000000"));
    assert!(
        p.attributes
            .get("meta-info")
            .is_some_and(|m| m.contains("/data/room/p/0"))
    );
}
