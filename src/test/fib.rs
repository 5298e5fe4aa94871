use crate::ndn::{Face, Fib, Name};
use crate::net::{AppId, NodeId};

fn n(s: &str) -> Name {
    s.parse().expect("valid name")
}

#[test]
fn longest_prefix_match_prefers_more_specific_entry() {
    let mut fib = Fib::default();
    fib.add_route(n("/data"), Face::Link(NodeId(1)), 1);
    fib.add_route(n("/data/room/p"), Face::Link(NodeId(2)), 1);

    let (prefix, hops) = fib
        .longest_prefix_match(&n("/data/room/p/7"))
        .expect("match");
    assert_eq!(prefix, n("/data/room/p"));
    assert_eq!(hops[0].face, Face::Link(NodeId(2)));

    let (prefix, _) = fib
        .longest_prefix_match(&n("/data/room/q/7"))
        .expect("match");
    assert_eq!(prefix, n("/data"));

    assert!(fib.longest_prefix_match(&n("/other")).is_none());
}

#[test]
fn next_hops_sorted_by_cost_then_insertion_order() {
    let mut fib = Fib::default();
    let p = n("/data");
    fib.add_route(p.clone(), Face::Link(NodeId(1)), 5);
    fib.add_route(p.clone(), Face::Link(NodeId(2)), 1);
    fib.add_route(p.clone(), Face::Link(NodeId(3)), 1);
    fib.add_route(p.clone(), Face::App(AppId(0)), 0);

    let faces = fib
        .next_hops(&p)
        .expect("entry")
        .iter()
        .map(|h| h.face)
        .collect::<Vec<_>>();
    assert_eq!(
        faces,
        vec![
            Face::App(AppId(0)),
            Face::Link(NodeId(2)),
            Face::Link(NodeId(3)),
            Face::Link(NodeId(1)),
        ]
    );
    assert_eq!(fib.route_count(), 4);
}

#[test]
fn re_adding_a_face_updates_its_cost() {
    let mut fib = Fib::default();
    let p = n("/data");
    fib.add_route(p.clone(), Face::Link(NodeId(1)), 1);
    fib.add_route(p.clone(), Face::Link(NodeId(2)), 2);
    fib.add_route(p.clone(), Face::Link(NodeId(1)), 3);

    let hops = fib.next_hops(&p).expect("entry");
    assert_eq!(hops.len(), 2);
    assert_eq!(hops[0].face, Face::Link(NodeId(2)));
    assert_eq!(hops[1].cost, 3);
}
