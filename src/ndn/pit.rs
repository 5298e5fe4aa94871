//! PIT（待定 Interest 表）
//!
//! 以名字精确匹配。每个条目记录请求来自哪些 face（in-record）以及已转发到哪些
//! face；同一名字的后续 Interest 被聚合，nonce 重复视为环路。

use std::collections::HashMap;

use super::face::Face;
use super::name::Name;
use super::packet::Interest;
use crate::sim::SimTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InRecord {
    pub face: Face,
    pub nonce: u32,
    pub expires_at: SimTime,
}

#[derive(Debug, Clone)]
pub struct PitEntry {
    pub name: Name,
    pub in_records: Vec<InRecord>,
    pub out_faces: Vec<Face>,
    nonces: Vec<u32>,
}

impl PitEntry {
    fn new(name: Name) -> Self {
        Self {
            name,
            in_records: Vec::new(),
            out_faces: Vec::new(),
            nonces: Vec::new(),
        }
    }

    /// 条目整体过期时间：最晚的 in-record 过期时间。
    pub fn expires_at(&self) -> SimTime {
        self.in_records
            .iter()
            .map(|r| r.expires_at)
            .max()
            .unwrap_or(SimTime::ZERO)
    }

    pub fn has_in_record(&self, face: Face) -> bool {
        self.in_records.iter().any(|r| r.face == face)
    }
}

/// 一个 Interest 进入 PIT 后的处理结论。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitOutcome {
    /// 新条目，需要转发
    New,
    /// 同一 face 的重传（新 nonce），需要再次转发
    Retransmission,
    /// 已有其他下游在等待，仅聚合
    Aggregated,
    /// nonce 已出现过：环路或重复
    Loop,
}

#[derive(Debug, Default)]
pub struct Pit {
    entries: HashMap<Name, PitEntry>,
}

impl Pit {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &Name) -> Option<&PitEntry> {
        self.entries.get(name)
    }

    /// 记录一个来自 `face` 的 Interest。
    pub fn insert(&mut self, now: SimTime, face: Face, interest: &Interest) -> PitOutcome {
        let expires_at = now.saturating_add(interest.lifetime);
        let record = InRecord {
            face,
            nonce: interest.nonce,
            expires_at,
        };

        let Some(entry) = self.entries.get_mut(&interest.name) else {
            let mut entry = PitEntry::new(interest.name.clone());
            entry.in_records.push(record);
            entry.nonces.push(interest.nonce);
            self.entries.insert(interest.name.clone(), entry);
            return PitOutcome::New;
        };

        if entry.nonces.contains(&interest.nonce) {
            return PitOutcome::Loop;
        }
        entry.nonces.push(interest.nonce);

        if let Some(existing) = entry.in_records.iter_mut().find(|r| r.face == face) {
            *existing = record;
            return PitOutcome::Retransmission;
        }
        entry.in_records.push(record);
        PitOutcome::Aggregated
    }

    /// 记录条目已被转发到 `face`。
    pub fn record_out(&mut self, name: &Name, face: Face) {
        if let Some(entry) = self.entries.get_mut(name) {
            if !entry.out_faces.contains(&face) {
                entry.out_faces.push(face);
            }
        }
    }

    /// Data 到达：取出并删除匹配条目。
    pub fn satisfy(&mut self, name: &Name) -> Option<PitEntry> {
        self.entries.remove(name)
    }

    /// 到期检查：条目存在且已过期时删除，返回是否删除。
    pub fn expire(&mut self, name: &Name, now: SimTime) -> bool {
        match self.entries.get(name) {
            Some(entry) if entry.expires_at() <= now => {
                self.entries.remove(name);
                true
            }
            _ => false,
        }
    }
}
