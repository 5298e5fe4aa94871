use crate::ndn::{Data, Interest, Name, NdnPacket};
use crate::net::{Packet, QueueSize};
use crate::queue::{DropTailQueue, PacketQueue};

fn interest_pkt(id: u64) -> Packet {
    let name: Name = "/q".parse().expect("name");
    Packet::new(id, NdnPacket::Interest(Interest::new(name.append_seq(id), 1)))
}

fn data_pkt(id: u64, payload: u32) -> Packet {
    let name: Name = "/q".parse().expect("name");
    Packet::new(id, NdnPacket::Data(Data::new(name.append_seq(id), payload)))
}

#[test]
fn droptail_packet_capacity_drops_the_eleventh_packet() {
    let mut q = DropTailQueue::new(QueueSize::Packets(10));
    for id in 0..10 {
        assert!(q.enqueue(interest_pkt(id)).is_ok());
    }
    assert_eq!(q.len(), 10);

    let dropped = q.enqueue(interest_pkt(10)).expect_err("should drop");
    assert_eq!(dropped.id, 10);
    assert_eq!(q.len(), 10);

    assert_eq!(q.dequeue().expect("pkt").id, 0);
    assert!(q.enqueue(interest_pkt(11)).is_ok());
    assert_eq!(q.capacity(), QueueSize::Packets(10));
}

#[test]
fn droptail_byte_capacity_enforced_and_order_preserved() {
    let a = data_pkt(1, 600);
    let b = data_pkt(2, 600);
    let cap = a.size_bytes as u64 + 100;
    let mut q = DropTailQueue::new(QueueSize::Bytes(cap));

    let a_bytes = a.size_bytes as u64;
    assert!(q.enqueue(a).is_ok());
    assert_eq!(q.bytes(), a_bytes);
    assert_eq!(q.enqueue(b).expect_err("should drop").id, 2);

    let small = interest_pkt(3);
    assert!(small.size_bytes < 100);
    assert!(q.enqueue(small).is_ok());

    assert_eq!(q.dequeue().expect("pkt").id, 1);
    assert_eq!(q.dequeue().expect("pkt").id, 3);
    assert!(q.dequeue().is_none());
    assert!(q.is_empty());
    assert_eq!(q.bytes(), 0);
}

#[test]
fn zero_packet_capacity_drops_everything() {
    let mut q = DropTailQueue::new(QueueSize::Packets(0));
    assert!(q.enqueue(interest_pkt(1)).is_err());
    assert_eq!(q.len(), 0);
}
