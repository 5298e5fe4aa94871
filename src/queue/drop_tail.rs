//! DropTail（尾丢弃）队列
//!
//! 容量不足时直接丢弃新到达的 packet。

use std::collections::VecDeque;

use crate::net::{Packet, QueueSize};

use super::PacketQueue;

#[derive(Debug)]
pub struct DropTailQueue {
    max: QueueSize,
    cur_bytes: u64,
    q: VecDeque<Packet>,
}

impl DropTailQueue {
    pub fn new(max: QueueSize) -> Self {
        Self {
            max,
            cur_bytes: 0,
            q: VecDeque::new(),
        }
    }

    fn would_overflow(&self, pkt: &Packet) -> bool {
        match self.max {
            QueueSize::Packets(n) => self.q.len() as u64 >= n,
            QueueSize::Bytes(n) => self.cur_bytes.saturating_add(pkt.size_bytes as u64) > n,
        }
    }
}

impl PacketQueue for DropTailQueue {
    fn enqueue(&mut self, pkt: Packet) -> Result<(), Packet> {
        if self.would_overflow(&pkt) {
            return Err(pkt);
        }
        self.cur_bytes = self.cur_bytes.saturating_add(pkt.size_bytes as u64);
        self.q.push_back(pkt);
        Ok(())
    }

    fn dequeue(&mut self) -> Option<Packet> {
        let pkt = self.q.pop_front()?;
        self.cur_bytes = self.cur_bytes.saturating_sub(pkt.size_bytes as u64);
        Some(pkt)
    }

    fn len(&self) -> usize {
        self.q.len()
    }

    fn bytes(&self) -> u64 {
        self.cur_bytes
    }

    fn capacity(&self) -> QueueSize {
        self.max
    }
}
