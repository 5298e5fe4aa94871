//! 错误类型
//!
//! 场景构建与输出过程中的可恢复错误；事件执行期间的内部不变量仍由 `expect` 保证。

use thiserror::Error;

/// 属性字符串（"1Mbps"、"10ms"、"10p"）解析错误。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttrParseError {
    #[error("empty attribute value")]
    Empty,
    #[error("invalid number in attribute value `{0}`")]
    InvalidNumber(String),
    #[error("unknown unit `{unit}` in attribute value `{value}`")]
    UnknownUnit { value: String, unit: String },
}

/// 场景构建/运行错误。
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// 消费者或生产者节点在网格中不存在（致命）。
    #[error("Error in topology: one nodes c,p is missing")]
    MissingEndpoint { consumer_missing: bool, producer_missing: bool },

    #[error("grid node ({row}, {col}) does not exist")]
    UnknownNode { row: usize, col: usize },

    #[error("no link from node {from} to node {to}")]
    NoLink { from: usize, to: usize },

    #[error("unknown forwarding strategy `{0}`")]
    UnknownStrategy(String),

    #[error("invalid NDN name `{0}`: must start with '/'")]
    InvalidName(String),

    #[error("node name `{0}` is already in use")]
    DuplicateName(String),

    #[error("invalid consumer frequency {0} (Interests/s)")]
    InvalidFrequency(f64),

    #[error("invalid grid size {rows}x{cols}")]
    InvalidGrid { rows: usize, cols: usize },

    #[error(transparent)]
    Attr(#[from] AttrParseError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("xml error: {0}")]
    Xml(#[from] xmltree::Error),
}
