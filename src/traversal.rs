// ============================================================================
// 遍历引擎（Traversal Engine）
//
// 流程：
// 1) 出发前：定位唯一的 `@` 与 `x`（标记错误优先于一切路径错误），再校验输入
// 2) 循环：到达 `x` 则成功；否则问 resolver 要方向，走一步，记录
// 3) 步数有上限：每个格子最多以四种朝向各经过一次，超过即判为路径断开
//
// 这里用显式循环而不是递归，地图再大也不会爆栈。
// ============================================================================

use crate::collector::collect;
use crate::error::{PathfinderError, Result};
use crate::glyph::{END, Glyph, START};
use crate::grid::Grid;
use crate::marker::locate_marker;
use crate::resolver::{TraversalState, resolve_direction};
use crate::types::{PathResult, WalkOptions};
use log::{debug, trace};

/// 单步推进的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// 还在路上。
    OnPath(TraversalState),
    /// 已经站在终点上。
    AtEnd(TraversalState),
}

/// 从 `state` 出发推进一步。
///
/// 当前格子已经是终点时原样返回 `Step::AtEnd`，不再移动。
pub fn step(grid: &Grid, state: TraversalState) -> Result<Step> {
    let position = state.position();
    match grid.cell(position) {
        Some(Glyph::End) => return Ok(Step::AtEnd(state)),
        Some(_) => {}
        None => return Err(PathfinderError::BrokenPath { position }),
    }

    let direction = resolve_direction(grid, &state)?;
    let next = position
        .step(direction)
        .ok_or(PathfinderError::BrokenPath { position })?;

    let glyph = match grid.cell(next) {
        Some(glyph) if glyph.is_track() => glyph,
        Some(glyph) => {
            return Err(PathfinderError::InvalidGlyph {
                glyph: glyph.as_char(),
                position: Some(next),
            });
        }
        None => return Err(PathfinderError::BrokenPath { position }),
    };

    trace!("{position} --{direction}--> {next} `{}`", glyph.as_char());
    Ok(Step::OnPath(state.advance(next, direction, glyph)))
}

/// 从唯一的起点走到唯一的终点，收集路径与单词。
pub fn walk(grid: &Grid, options: &WalkOptions) -> Result<PathResult> {
    let start = locate_marker(grid, START)?;
    let end = locate_marker(grid, END)?;
    debug!("起点 {start}，终点 {end}");

    if options.validate_input() {
        grid.validate()?;
    }

    let limit = options.max_steps_for(grid.cell_count());
    let mut state = TraversalState::new(start);

    let arrived = loop {
        state = match step(grid, state) {
            Ok(Step::OnPath(next)) if next.steps() > limit => {
                debug!("超过步数上限 {limit}，最后位置 {}", next.position());
                return Err(PathfinderError::StepLimitExceeded { limit });
            }
            Ok(Step::OnPath(next)) => next,
            Ok(Step::AtEnd(done)) => break done,
            Err(err) => {
                debug!("遍历失败（{}）：{err}", err.kind());
                return Err(err);
            }
        };
    };

    let (visited, letter_visits) = arrived.into_visits();
    let result = collect(grid, &visited, &letter_visits);
    debug!(
        "到达终点：共 {} 步，word={:?}",
        visited.len() - 1,
        result.word
    );
    Ok(result)
}
