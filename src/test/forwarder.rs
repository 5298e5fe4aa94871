use crate::ndn::{
    BEST_ROUTE, Data, Face, Forwarder, Interest, InterestDecision, Name, Strategy, StrategyChoice,
};
use crate::net::NodeId;
use crate::sim::SimTime;

fn name(s: &str) -> Name {
    s.parse().expect("name")
}

fn link(n: usize) -> Face {
    Face::Link(NodeId(n))
}

fn forwarder_with_routes() -> Forwarder {
    let mut fw = Forwarder::new(0);
    fw.fib.add_route(name("/data"), link(1), 1);
    fw.fib.add_route(name("/data"), link(2), 1);
    fw
}

#[test]
fn best_route_picks_first_lowest_cost_hop() {
    let mut fw = forwarder_with_routes();
    let d = fw.on_incoming_interest(SimTime::ZERO, link(9), &Interest::new(name("/data/room/p/0"), 1));
    assert_eq!(d, InterestDecision::Forward { to: link(1) });
    assert_eq!(fw.pit.len(), 1);
}

#[test]
fn best_route_skips_incoming_face() {
    let mut fw = forwarder_with_routes();
    let d = fw.on_incoming_interest(SimTime::ZERO, link(1), &Interest::new(name("/data/x"), 1));
    assert_eq!(d, InterestDecision::Forward { to: link(2) });
}

#[test]
fn no_route_drops_and_leaves_no_pit_entry() {
    let mut fw = forwarder_with_routes();
    let d = fw.on_incoming_interest(SimTime::ZERO, link(9), &Interest::new(name("/video/1"), 1));
    assert_eq!(d, InterestDecision::DropNoRoute);
    assert!(fw.pit.is_empty());
}

#[test]
fn aggregation_and_loop_detection() {
    let mut fw = forwarder_with_routes();
    let n = name("/data/a");
    fw.on_incoming_interest(SimTime::ZERO, link(9), &Interest::new(n.clone(), 1));
    assert_eq!(
        fw.on_incoming_interest(SimTime::ZERO, link(8), &Interest::new(n.clone(), 2)),
        InterestDecision::Aggregated
    );
    assert_eq!(
        fw.on_incoming_interest(SimTime::ZERO, link(7), &Interest::new(n.clone(), 1)),
        InterestDecision::DropLoop
    );
}

#[test]
fn data_returns_to_all_downstreams_and_fills_cache() {
    let mut fw = forwarder_with_routes();
    let n = name("/data/a");
    fw.on_incoming_interest(SimTime::ZERO, link(9), &Interest::new(n.clone(), 1));
    fw.on_incoming_interest(SimTime::ZERO, link(8), &Interest::new(n.clone(), 2));

    let faces = fw
        .on_incoming_data(SimTime::ZERO, link(1), &Data::new(n.clone(), 100))
        .expect("solicited");
    assert_eq!(faces, vec![link(9), link(8)]);
    assert!(fw.pit.is_empty());
    assert_eq!(fw.cs.len(), 1);

    // 再次到达的 Data 为 unsolicited
    assert!(fw.on_incoming_data(SimTime::ZERO, link(1), &Data::new(n.clone(), 100)).is_none());

    // 后续相同 Interest 直接命中缓存
    match fw.on_incoming_interest(SimTime::from_millis(5), link(6), &Interest::new(n.clone(), 3)) {
        InterestDecision::CsHit(data) => assert_eq!(data.name, n),
        other => panic!("expected cs hit, got {other:?}"),
    }
    assert!(fw.pit.is_empty());
}

#[test]
fn retransmission_is_forwarded_again() {
    let mut fw = forwarder_with_routes();
    let n = name("/data/r");
    fw.on_incoming_interest(SimTime::ZERO, link(9), &Interest::new(n.clone(), 1));
    let d = fw.on_incoming_interest(SimTime::from_secs(2), link(9), &Interest::new(n.clone(), 2));
    assert_eq!(d, InterestDecision::Forward { to: link(1) });
}

#[test]
fn pit_expiry_respects_lifetime() {
    let mut fw = forwarder_with_routes();
    let n = name("/data/e");
    fw.on_incoming_interest(SimTime::ZERO, link(9), &Interest::new(n.clone(), 1));
    assert!(!fw.on_pit_expiry(&n, SimTime::from_secs(1)));
    assert!(fw.on_pit_expiry(&n, SimTime::from_secs(2)));
    assert!(fw.pit.is_empty());
}

#[test]
fn strategy_choice_uses_longest_covering_prefix() {
    let mut sc = StrategyChoice::default();
    assert_eq!(sc.find(&name("/data/room/p/1")), Strategy::BestRoute);

    let versioned: Strategy = format!("{BEST_ROUTE}/%FD%05").parse().expect("versioned");
    sc.set(name("/data/room"), versioned);
    assert_eq!(sc.find(&name("/data/room/p/1")), Strategy::BestRoute);
    assert_eq!(sc.find(&name("/data/roomy")), Strategy::BestRoute);

    assert!("/localhost/nfd/strategy/best-routes".parse::<Strategy>().is_err());
}
