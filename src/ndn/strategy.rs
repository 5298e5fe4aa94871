//! 转发策略选择
//!
//! 按名字前缀选择策略（最长前缀匹配）。目前只提供 best-route：从 FIB 下一跳中
//! 选 cost 最小且不是来源 face 的那一个。

use std::collections::BTreeMap;
use std::str::FromStr;

use super::face::Face;
use super::fib::NextHop;
use super::name::Name;
use crate::error::ScenarioError;

pub const BEST_ROUTE: &str = "/localhost/nfd/strategy/best-route";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    BestRoute,
}

impl Strategy {
    /// 选出下一跳；返回 None 表示无可用路由。
    pub fn select(&self, in_face: Face, hops: &[NextHop]) -> Option<Face> {
        match self {
            Strategy::BestRoute => hops.iter().find(|h| h.face != in_face).map(|h| h.face),
        }
    }
}

impl FromStr for Strategy {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 允许带版本号后缀，例如 /localhost/nfd/strategy/best-route/%FD%05
        match s.strip_prefix(BEST_ROUTE) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => Ok(Strategy::BestRoute),
            _ => Err(ScenarioError::UnknownStrategy(s.to_string())),
        }
    }
}

/// 前缀 -> 策略
#[derive(Debug, Clone)]
pub struct StrategyChoice {
    table: BTreeMap<Name, Strategy>,
}

impl Default for StrategyChoice {
    fn default() -> Self {
        let mut table = BTreeMap::new();
        table.insert(Name::root(), Strategy::BestRoute);
        Self { table }
    }
}

impl StrategyChoice {
    pub fn set(&mut self, prefix: Name, strategy: Strategy) {
        self.table.insert(prefix, strategy);
    }

    /// 最长前缀匹配；没有任何前缀覆盖 `name` 时退回 best-route。
    pub fn find(&self, name: &Name) -> Strategy {
        self.table
            .iter()
            .filter(|(prefix, _)| prefix.is_prefix_of(name))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, s)| *s)
            .unwrap_or_default()
    }
}
