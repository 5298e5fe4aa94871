//! Content Store（内容缓存）
//!
//! LRU 淘汰 + freshness：`max_entries == 0` 表示不限容量；设置了 freshness
//! 的 Data 在 `inserted_at + freshness` 之后视为过期，不再命中。

use std::collections::{BTreeMap, HashMap};

use super::name::Name;
use super::packet::Data;
use crate::sim::SimTime;

#[derive(Debug)]
struct CsEntry {
    data: Data,
    stale_at: Option<SimTime>,
    tick: u64,
}

#[derive(Debug, Default)]
pub struct ContentStore {
    max_entries: usize,
    entries: HashMap<Name, CsEntry>,
    /// 访问序号 -> 名字，最小序号即最久未使用
    lru: BTreeMap<u64, Name>,
    next_tick: u64,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl ContentStore {
    pub fn new(max_entries: usize) -> Self {
        Self {
            max_entries,
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    fn bump(&mut self) -> u64 {
        let t = self.next_tick;
        self.next_tick = self.next_tick.wrapping_add(1);
        t
    }

    /// 缓存一个 Data；同名条目被替换。
    pub fn insert(&mut self, now: SimTime, data: Data) {
        let tick = self.bump();
        let stale_at = data.freshness.map(|f| now.saturating_add(f));
        let name = data.name.clone();
        if let Some(old) = self.entries.insert(
            name.clone(),
            CsEntry {
                data,
                stale_at,
                tick,
            },
        ) {
            self.lru.remove(&old.tick);
        }
        self.lru.insert(tick, name);

        if self.max_entries > 0 {
            while self.entries.len() > self.max_entries {
                let Some((_, victim)) = self.lru.pop_first() else {
                    break;
                };
                self.entries.remove(&victim);
                self.evictions += 1;
            }
        }
    }

    /// 精确名字查找；命中时刷新 LRU 位置。过期条目视为未命中。
    pub fn lookup(&mut self, now: SimTime, name: &Name) -> Option<Data> {
        let fresh = match self.entries.get(name) {
            Some(e) => e.stale_at.is_none_or(|s| now < s),
            None => false,
        };
        if !fresh {
            self.misses += 1;
            return None;
        }

        let tick = self.bump();
        let entry = self.entries.get_mut(name)?;
        self.lru.remove(&entry.tick);
        entry.tick = tick;
        self.lru.insert(tick, name.clone());
        self.hits += 1;
        Some(entry.data.clone())
    }
}
