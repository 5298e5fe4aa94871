//! 属性值解析
//!
//! 链路与队列参数沿用常见的带单位字符串写法：带宽 `"1Mbps"`、时延 `"10ms"`、
//! 队列容量 `"10p"`（包）或 `"15000B"`（字节）。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AttrParseError;
use crate::sim::SimTime;

/// 拆成数值与单位两部分，例如 "1.5Mbps" -> (1.5, "Mbps")。
fn split_value(s: &str) -> Result<(f64, &str), AttrParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(AttrParseError::Empty);
    }
    let idx = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(s.len());
    let (num, unit) = s.split_at(idx);
    let v = num
        .parse::<f64>()
        .map_err(|_| AttrParseError::InvalidNumber(s.to_string()))?;
    Ok((v, unit.trim()))
}

fn unknown_unit(value: &str, unit: &str) -> AttrParseError {
    AttrParseError::UnknownUnit {
        value: value.to_string(),
        unit: unit.to_string(),
    }
}

/// 链路带宽（bit/s）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DataRate(pub u64);

impl DataRate {
    pub fn bps(self) -> u64 {
        self.0
    }
}

impl FromStr for DataRate {
    type Err = AttrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (v, unit) = split_value(s)?;
        let mult: f64 = match unit {
            "bps" | "b/s" | "" => 1.0,
            "Bps" | "B/s" => 8.0,
            "kbps" | "Kbps" | "kb/s" | "Kb/s" => 1e3,
            "KBps" | "kBps" | "KB/s" | "kB/s" => 8e3,
            "Mbps" | "Mb/s" => 1e6,
            "MBps" | "MB/s" => 8e6,
            "Gbps" | "Gb/s" => 1e9,
            "GBps" | "GB/s" => 8e9,
            other => return Err(unknown_unit(s, other)),
        };
        Ok(DataRate((v * mult).round() as u64))
    }
}

impl fmt::Display for DataRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bps", self.0)
    }
}

/// 解析时间字符串（"10ms"、"20s"、"1.5us"）。无单位时按秒处理。
pub fn parse_time(s: &str) -> Result<SimTime, AttrParseError> {
    let (v, unit) = split_value(s)?;
    let ns_per_unit: f64 = match unit {
        "ns" => 1.0,
        "us" => 1e3,
        "ms" => 1e6,
        "s" | "" => 1e9,
        "min" => 60e9,
        "h" => 3_600e9,
        other => return Err(unknown_unit(s, other)),
    };
    Ok(SimTime((v * ns_per_unit).round() as u64))
}

/// 队列容量：按包数或按字节数限制。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueSize {
    Packets(u64),
    Bytes(u64),
}

impl FromStr for QueueSize {
    type Err = AttrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (v, unit) = split_value(s)?;
        if v.fract() != 0.0 {
            return Err(AttrParseError::InvalidNumber(s.to_string()));
        }
        let v = v as u64;
        match unit {
            "p" => Ok(QueueSize::Packets(v)),
            "B" => Ok(QueueSize::Bytes(v)),
            "KB" | "kB" => Ok(QueueSize::Bytes(v.saturating_mul(1_000))),
            "MB" => Ok(QueueSize::Bytes(v.saturating_mul(1_000_000))),
            other => Err(unknown_unit(s, other)),
        }
    }
}

impl fmt::Display for QueueSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueSize::Packets(n) => write!(f, "{n}p"),
            QueueSize::Bytes(n) => write!(f, "{n}B"),
        }
    }
}

/// 点对点链路的默认参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkAttrs {
    pub data_rate: String,
    pub delay: String,
    pub max_size: String,
}

impl Default for LinkAttrs {
    fn default() -> Self {
        Self {
            data_rate: "1Mbps".to_string(),
            delay: "10ms".to_string(),
            max_size: "10p".to_string(),
        }
    }
}

/// 解析后的链路参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkParams {
    pub data_rate: DataRate,
    pub delay: SimTime,
    pub max_size: QueueSize,
}

impl LinkAttrs {
    pub fn parse(&self) -> Result<LinkParams, AttrParseError> {
        Ok(LinkParams {
            data_rate: self.data_rate.parse()?,
            delay: parse_time(&self.delay)?,
            max_size: self.max_size.parse()?,
        })
    }
}
