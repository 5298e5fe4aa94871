use crate::error::AttrParseError;
use crate::net::{DataRate, LinkAttrs, QueueSize, parse_time};
use crate::sim::SimTime;

#[test]
fn data_rate_units() {
    assert_eq!("1Mbps".parse::<DataRate>(), Ok(DataRate(1_000_000)));
    assert_eq!("10Gbps".parse::<DataRate>(), Ok(DataRate(10_000_000_000)));
    assert_eq!("500kbps".parse::<DataRate>(), Ok(DataRate(500_000)));
    assert_eq!("2.5Mb/s".parse::<DataRate>(), Ok(DataRate(2_500_000)));
    assert_eq!("1KBps".parse::<DataRate>(), Ok(DataRate(8_000)));
    assert_eq!("9600".parse::<DataRate>(), Ok(DataRate(9_600)));
}

#[test]
fn time_units() {
    assert_eq!(parse_time("10ms"), Ok(SimTime::from_millis(10)));
    assert_eq!(parse_time("20s"), Ok(SimTime::from_secs(20)));
    assert_eq!(parse_time("1.5us"), Ok(SimTime(1_500)));
    assert_eq!(parse_time("2"), Ok(SimTime::from_secs(2)));
    assert_eq!(parse_time("1min"), Ok(SimTime::from_secs(60)));
}

#[test]
fn queue_size_units() {
    assert_eq!("10p".parse::<QueueSize>(), Ok(QueueSize::Packets(10)));
    assert_eq!("1500B".parse::<QueueSize>(), Ok(QueueSize::Bytes(1500)));
    assert_eq!("64KB".parse::<QueueSize>(), Ok(QueueSize::Bytes(64_000)));
    assert_eq!(QueueSize::Packets(10).to_string(), "10p");
}

#[test]
fn malformed_values_are_rejected() {
    assert_eq!("".parse::<DataRate>(), Err(AttrParseError::Empty));
    assert!(matches!(
        "Mbps".parse::<DataRate>(),
        Err(AttrParseError::InvalidNumber(_))
    ));
    assert!(matches!(
        parse_time("10fortnights"),
        Err(AttrParseError::UnknownUnit { .. })
    ));
    assert!(matches!(
        "1.5p".parse::<QueueSize>(),
        Err(AttrParseError::InvalidNumber(_))
    ));
    assert!(matches!(
        "10x".parse::<QueueSize>(),
        Err(AttrParseError::UnknownUnit { unit, .. }) if unit == "x"
    ));
}

#[test]
fn default_link_attrs_are_1mbps_10ms_10p() {
    let params = LinkAttrs::default().parse().expect("defaults parse");
    assert_eq!(params.data_rate, DataRate(1_000_000));
    assert_eq!(params.delay, SimTime::from_millis(10));
    assert_eq!(params.max_size, QueueSize::Packets(10));
}
