//! 数据包类型
//!
//! 链路上的载体：一个全局唯一 id、线上字节数，以及承载的 NDN 报文。

use crate::ndn::NdnPacket;

#[derive(Debug, Clone)]
pub struct Packet {
    pub id: u64,
    pub size_bytes: u32,
    pub ndn: NdnPacket,
}

impl Packet {
    pub fn new(id: u64, ndn: NdnPacket) -> Self {
        Self {
            id,
            size_bytes: ndn.wire_size(),
            ndn,
        }
    }

    pub fn is_interest(&self) -> bool {
        matches!(self.ndn, NdnPacket::Interest(_))
    }
}
