use crate::error::ScenarioError;
use crate::ndn::Name;

fn n(s: &str) -> Name {
    s.parse().expect("valid name")
}

#[test]
fn parse_and_display_round_trip_components() {
    let name = n("/data/room/p");
    assert_eq!(name.len(), 3);
    assert_eq!(name.components(), &["data", "room", "p"]);
    assert_eq!(name.to_string(), "/data/room/p");
}

#[test]
fn root_and_trailing_slash() {
    assert_eq!(n("/"), Name::root());
    assert_eq!(n("/").to_string(), "/");
    // 末尾空组件被忽略：`/data/room/` 与 `/data/room` 相同
    assert_eq!(n("/data/room/"), n("/data/room"));
}

#[test]
fn prefix_match_is_component_wise() {
    assert!(n("/data").is_prefix_of(&n("/data/room/p/1")));
    assert!(n("/data/room/p").is_prefix_of(&n("/data/room/p")));
    assert!(Name::root().is_prefix_of(&n("/anything")));
    assert!(!n("/data/room").is_prefix_of(&n("/data/roomy")));
    assert!(!n("/data/room/p/1").is_prefix_of(&n("/data/room/p")));
}

#[test]
fn append_seq_adds_decimal_component() {
    let name = n("/data/room/p").append_seq(42);
    assert_eq!(name.to_string(), "/data/room/p/42");
    assert_eq!(name.prefix(3), n("/data/room/p"));
    assert_eq!(name.prefix(10), name);
}

#[test]
fn names_must_be_absolute() {
    assert!(matches!(
        "data/room".parse::<Name>(),
        Err(ScenarioError::InvalidName(s)) if s == "data/room"
    ));
}

#[test]
fn names_serialize_as_strings() {
    let json = serde_json::to_string(&n("/data/room")).expect("serialize");
    assert_eq!(json, "\"/data/room\"");
    let back: Name = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, n("/data/room"));
}
