//! NDN 名字
//!
//! 层次化名字，由若干组件构成；文本形式为 `/a/b/c`，`/` 表示根（零个组件）。
//! 前缀匹配按组件进行：`/data/room` 是 `/data/room/p` 的前缀，但不是
//! `/data/roomy` 的前缀。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ScenarioError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Name {
    components: Vec<String>,
}

impl Name {
    /// 根名字 `/`
    pub fn root() -> Self {
        Self::default()
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// 追加一个组件（空组件会被忽略）。
    pub fn append(mut self, component: impl Into<String>) -> Self {
        let c = component.into();
        if !c.is_empty() {
            self.components.push(c);
        }
        self
    }

    /// 追加序号组件（十进制）。
    pub fn append_seq(self, seq: u64) -> Self {
        self.append(seq.to_string())
    }

    /// `self` 是否为 `other` 的前缀（组件级）。
    pub fn is_prefix_of(&self, other: &Name) -> bool {
        self.components.len() <= other.components.len()
            && self
                .components
                .iter()
                .zip(&other.components)
                .all(|(a, b)| a == b)
    }

    /// 取前 `n` 个组件构成的前缀。
    pub fn prefix(&self, n: usize) -> Name {
        Name {
            components: self.components[..n.min(self.components.len())].to_vec(),
        }
    }

    /// 估算编码后的字节数：每个组件 2 字节 TLV 头 + 内容，外加名字本身的 TLV 头。
    pub fn wire_len(&self) -> u32 {
        let inner: usize = self.components.iter().map(|c| c.len() + 2).sum();
        (inner + 2) as u32
    }
}

impl FromStr for Name {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(rest) = s.strip_prefix('/') else {
            return Err(ScenarioError::InvalidName(s.to_string()));
        };
        let components = rest
            .split('/')
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Name { components })
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.components.is_empty() {
            return f.write_str("/");
        }
        for c in &self.components {
            write!(f, "/{c}")?;
        }
        Ok(())
    }
}

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
