//! FIB（转发信息表）
//!
//! 前缀 -> 下一跳集合。下一跳按 cost 升序保存，cost 相同时保持添加顺序。

use std::collections::HashMap;

use super::face::Face;
use super::name::Name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextHop {
    pub face: Face,
    pub cost: u32,
}

#[derive(Debug, Default, Clone)]
pub struct Fib {
    entries: HashMap<Name, Vec<NextHop>>,
}

impl Fib {
    /// 添加（或更新 cost）一条路由。
    pub fn add_route(&mut self, prefix: Name, face: Face, cost: u32) {
        let hops = self.entries.entry(prefix).or_default();
        if let Some(pos) = hops.iter().position(|h| h.face == face) {
            hops.remove(pos);
        }
        // 插到第一个 cost 更大的位置之前：同 cost 的下一跳保持添加顺序
        let at = hops.iter().position(|h| h.cost > cost).unwrap_or(hops.len());
        hops.insert(at, NextHop { face, cost });
    }

    /// 最长前缀匹配，返回匹配到的前缀与其下一跳。
    pub fn longest_prefix_match(&self, name: &Name) -> Option<(Name, &[NextHop])> {
        (0..=name.len()).rev().find_map(|n| {
            let prefix = name.prefix(n);
            let hops = self.entries.get(&prefix)?;
            Some((prefix, hops.as_slice()))
        })
    }

    /// 精确查询某个前缀的下一跳。
    pub fn next_hops(&self, prefix: &Name) -> Option<&[NextHop]> {
        self.entries.get(prefix).map(|v| v.as_slice())
    }

    /// 路由总数（前缀 × 下一跳）。
    pub fn route_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
