// ============================================================================
// 对外类型：坐标、方向、结果与选项
//
// 约定：
// - 坐标以“格子”为单位：row = 行号，column = 该行内的字符下标
// - 行可以长短不一（ragged），越界判断以所在行的长度为准
// - “尚未出发”用 `Option<Direction>::None` 表示，而不是额外的枚举值
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 网格上的一个位置。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// 朝某个方向走一步。
    ///
    /// 走出第 0 行/第 0 列时返回 `None`；右侧/下侧是否越界由 `Grid` 判断。
    pub fn step(self, direction: Direction) -> Option<Position> {
        match direction {
            Direction::Up => self.row.checked_sub(1).map(|row| Position::new(row, self.column)),
            Direction::Down => Some(Position::new(self.row + 1, self.column)),
            Direction::Left => self
                .column
                .checked_sub(1)
                .map(|column| Position::new(self.row, column)),
            Direction::Right => Some(Position::new(self.row, self.column + 1)),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(row={}, column={})", self.row, self.column)
    }
}

/// 行进方向。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// 邻居枚举顺序：上、下、左、右。
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// 两个方向是否在同一条轴上（同向或反向）。
    pub fn is_collinear(self, other: Direction) -> bool {
        self.is_vertical() == other.is_vertical()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// 一次成功遍历的输出。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathResult {
    /// 按访问顺序拼接的所有字符（重复访问的格子会重复出现）。
    pub path: String,
    /// 按首次访问顺序拼接的车站字母；同一位置只计一次。
    pub word: String,
}

/// 遍历参数。
///
/// 所有字段都是可选的，`None` 表示使用默认值。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WalkOptions {
    /// 最大步数；默认 `4 × 格子总数 + 1`。
    pub max_steps: Option<usize>,
    /// 是否在出发前校验每个输入格子（默认 true）。
    pub validate_input: Option<bool>,
}

impl WalkOptions {
    pub fn validate_input(&self) -> bool {
        self.validate_input.unwrap_or(true)
    }

    /// 每个格子最多以四种朝向各经过一次，再多必然是死循环。
    pub fn max_steps_for(&self, cell_count: usize) -> usize {
        self.max_steps
            .unwrap_or_else(|| cell_count.saturating_mul(4).saturating_add(1))
    }
}
