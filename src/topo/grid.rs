//! 点对点网格拓扑
//!
//! rows × cols 个节点，(row, col) 与右侧、下方邻居各有一条点对点链路：
//!
//! ```text
//! (0,0) -- (0,1) -- (0,2)
//!   |        |        |
//! (1,0) -- (1,1) -- (1,2)
//!   |        |        |
//! (2,0) -- (2,1) -- (2,2)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ScenarioError;
use crate::net::{LinkParams, NetWorld, NodeId};

/// 节点坐标所在的矩形区域：左上 (ulx, uly)，右下 (lrx, lry)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub ulx: f64,
    pub uly: f64,
    pub lrx: f64,
    pub lry: f64,
}

#[derive(Debug, Clone)]
pub struct PointToPointGrid {
    rows: usize,
    cols: usize,
    nodes: Vec<NodeId>,
}

impl PointToPointGrid {
    /// 在 `world` 中创建网格节点与链路。
    pub fn build(
        world: &mut NetWorld,
        rows: usize,
        cols: usize,
        params: &LinkParams,
    ) -> Result<Self, ScenarioError> {
        if rows == 0 || cols == 0 {
            return Err(ScenarioError::InvalidGrid { rows, cols });
        }

        let nodes = (0..rows * cols)
            .map(|_| world.net.add_node())
            .collect::<Vec<_>>();
        let grid = Self { rows, cols, nodes };

        for row in 0..rows {
            for col in 0..cols {
                let here = grid.nodes[row * cols + col];
                if col + 1 < cols {
                    world.net.connect_p2p(here, grid.nodes[row * cols + col + 1], params);
                }
                if row + 1 < rows {
                    world.net.connect_p2p(here, grid.nodes[(row + 1) * cols + col], params);
                }
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (row, col) 处的节点；越界返回 None
    pub fn node(&self, row: usize, col: usize) -> Option<NodeId> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.nodes.get(row * self.cols + col).copied()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// 无向边数：rows*(cols-1) + cols*(rows-1)
    pub fn edge_count(&self) -> usize {
        self.rows * (self.cols - 1) + self.cols * (self.rows - 1)
    }

    /// 按行列均匀铺开节点坐标
    pub fn set_bounding_box(&self, world: &mut NetWorld, bbox: BoundingBox) {
        let step = |lo: f64, hi: f64, n: usize| if n > 1 { (hi - lo) / (n - 1) as f64 } else { 0.0 };
        let dx = step(bbox.ulx, bbox.lrx, self.cols);
        let dy = step(bbox.uly, bbox.lry, self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let id = self.nodes[row * self.cols + col];
                world
                    .net
                    .set_position(id, bbox.ulx + dx * col as f64, bbox.uly + dy * row as f64);
            }
        }
    }
}
