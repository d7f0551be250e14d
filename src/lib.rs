// ============================================================================
// ascii-pathfinder-rs — Rust 公共 API
//
// 目标：
// - 读入一张手绘的 ASCII 线路图（`@` 起点、`x` 终点、`-|+` 线段与拐点、A–Z 车站）
// - 沿唯一合法的路径从起点走到终点，输出经过的字符序列与车站字母
// - 图有结构缺陷时给出具体诊断（缺标记、重复标记、岔路、假拐点、断路、起点错位）
// ============================================================================

mod collector;
mod error;
pub mod glyph;
mod grid;
mod marker;
pub mod resolver;
mod traversal;
pub mod types;

pub use collector::collect;
pub use error::{PathfinderError, Result};
pub use glyph::Glyph;
pub use grid::Grid;
pub use marker::locate_marker;
pub use resolver::{TraversalState, resolve_direction};
pub use traversal::{Step, step};
pub use types::{Direction, PathResult, Position, WalkOptions};

/// 用默认选项遍历一张网格。
pub fn find_path(grid: &Grid) -> Result<PathResult> {
    traversal::walk(grid, &WalkOptions::default())
}

/// 遍历一张网格。
///
/// 检查顺序：
/// - 先定位 `@` 与 `x`（标记错误优先报告）
/// - 再按 `options.validate_input` 校验输入字符
/// - 最后逐步行走，遇到第一个结构缺陷即返回
pub fn find_path_with_options(grid: &Grid, options: &WalkOptions) -> Result<PathResult> {
    traversal::walk(grid, options)
}

/// 解析多行文本并遍历。
///
/// 文本按行切分，行首空白保留；详见 [`Grid::parse`]。
pub fn find_path_in_text(text: &str, options: &WalkOptions) -> Result<PathResult> {
    let grid = Grid::parse(text);
    traversal::walk(&grid, options)
}
