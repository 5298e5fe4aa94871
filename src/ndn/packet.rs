//! Interest / Data

use super::name::Name;
use crate::sim::SimTime;

/// 默认 Interest 生存期（2 秒）。
pub const DEFAULT_INTEREST_LIFETIME: SimTime = SimTime(2_000_000_000);

/// Data 包签名部分的估算大小（字节）。
const SIGNATURE_BYTES: u32 = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interest {
    pub name: Name,
    pub nonce: u32,
    pub lifetime: SimTime,
}

impl Interest {
    pub fn new(name: Name, nonce: u32) -> Self {
        Self {
            name,
            nonce,
            lifetime: DEFAULT_INTEREST_LIFETIME,
        }
    }

    /// name + nonce(6) + lifetime(6) + 外层 TLV 头(4)
    pub fn wire_size(&self) -> u32 {
        self.name.wire_len() + 6 + 6 + 4
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Data {
    pub name: Name,
    pub payload_size: u32,
    /// None 表示永不过期。
    pub freshness: Option<SimTime>,
}

impl Data {
    pub fn new(name: Name, payload_size: u32) -> Self {
        Self {
            name,
            payload_size,
            freshness: None,
        }
    }

    /// name + meta-info(6) + content TLV 头(4) + payload + 签名 + 外层 TLV 头(4)
    pub fn wire_size(&self) -> u32 {
        self.name
            .wire_len()
            .saturating_add(6 + 4 + 4 + SIGNATURE_BYTES)
            .saturating_add(self.payload_size)
    }
}

/// 在链路上传输的 NDN 网络层报文。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NdnPacket {
    Interest(Interest),
    Data(Data),
}

impl NdnPacket {
    pub fn name(&self) -> &Name {
        match self {
            NdnPacket::Interest(i) => &i.name,
            NdnPacket::Data(d) => &d.name,
        }
    }

    pub fn wire_size(&self) -> u32 {
        match self {
            NdnPacket::Interest(i) => i.wire_size(),
            NdnPacket::Data(d) => d.wire_size(),
        }
    }
}
