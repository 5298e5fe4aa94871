use crate::ndn::{Face, Interest, Name, Pit, PitOutcome};
use crate::net::{AppId, NodeId};
use crate::sim::SimTime;

fn interest(name: &str, nonce: u32) -> Interest {
    Interest::new(name.parse::<Name>().expect("name"), nonce)
}

#[test]
fn first_interest_creates_entry_and_others_aggregate() {
    let mut pit = Pit::default();
    let a = Face::Link(NodeId(1));
    let b = Face::Link(NodeId(2));

    assert_eq!(pit.insert(SimTime::ZERO, a, &interest("/x/1", 10)), PitOutcome::New);
    assert_eq!(pit.insert(SimTime::ZERO, b, &interest("/x/1", 11)), PitOutcome::Aggregated);
    assert_eq!(pit.len(), 1);

    let entry = pit.get(&"/x/1".parse().expect("name")).expect("entry");
    assert!(entry.has_in_record(a));
    assert!(entry.has_in_record(b));
}

#[test]
fn duplicate_nonce_is_a_loop() {
    let mut pit = Pit::default();
    pit.insert(SimTime::ZERO, Face::Link(NodeId(1)), &interest("/x/1", 10));
    assert_eq!(
        pit.insert(SimTime::ZERO, Face::Link(NodeId(2)), &interest("/x/1", 10)),
        PitOutcome::Loop
    );
    assert_eq!(
        pit.insert(SimTime::ZERO, Face::Link(NodeId(1)), &interest("/x/1", 10)),
        PitOutcome::Loop
    );
}

#[test]
fn new_nonce_from_same_face_is_a_retransmission_and_extends_expiry() {
    let mut pit = Pit::default();
    let face = Face::App(AppId(0));
    pit.insert(SimTime::ZERO, face, &interest("/x/1", 1));
    let t = SimTime::from_secs(1);
    assert_eq!(pit.insert(t, face, &interest("/x/1", 2)), PitOutcome::Retransmission);

    let name: Name = "/x/1".parse().expect("name");
    let entry = pit.get(&name).expect("entry");
    assert_eq!(entry.in_records.len(), 1);
    assert_eq!(entry.expires_at(), SimTime::from_secs(3));

    // 原始生存期到期时条目仍在
    assert!(!pit.expire(&name, SimTime::from_secs(2)));
    assert!(pit.expire(&name, SimTime::from_secs(3)));
    assert!(pit.is_empty());
}

#[test]
fn satisfy_removes_entry_and_returns_downstreams() {
    let mut pit = Pit::default();
    let name: Name = "/x/1".parse().expect("name");
    pit.insert(SimTime::ZERO, Face::Link(NodeId(4)), &interest("/x/1", 1));
    pit.record_out(&name, Face::Link(NodeId(5)));
    pit.record_out(&name, Face::Link(NodeId(5)));

    let entry = pit.satisfy(&name).expect("entry");
    assert_eq!(entry.out_faces, vec![Face::Link(NodeId(5))]);
    assert_eq!(entry.in_records[0].face, Face::Link(NodeId(4)));
    assert!(pit.satisfy(&name).is_none());
    assert!(!pit.expire(&name, SimTime::MAX));
}
