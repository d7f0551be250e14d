// ============================================================================
// 方向决策（Direction Resolver）—— 遍历的核心状态机
//
// 每一步只回答一个问题：站在当前格子上，下一步往哪走？
//
// 规则（按顺序）：
// 1) 候选 = 四邻居中在界内、且是路径字符的方向（顺序：上/下/左/右）
// 2) 只有 1 个候选：就是它；但如果它是来路的反方向，说明走进了死胡同
//    （死胡同正前方若是非法字符，报非法字符而不是断路）
// 3) 多个候选 + 当前是 `+`：必须换轴，丢掉与当前方向共线的候选；
//    剩 0 个是假拐点，剩多个是岔路
// 4) 多个候选 + 当前不是 `+`：
//    - 起点不允许位于路口
//    - 能直行就直行（路径与自身交叉，不是分叉）
//    - 不能直行时（字母/直线段画在拐角上），取唯一的垂直出口
//
// 状态以值的形式在步与步之间传递：`advance` 消费旧状态、返回新状态。
// ============================================================================

use crate::error::{PathfinderError, Result};
use crate::glyph::Glyph;
use crate::grid::Grid;
use crate::types::{Direction, Position};

/// 一次遍历的状态。只属于一次遍历，不共享。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalState {
    position: Position,
    direction: Option<Direction>,
    visited: Vec<Position>,
    letter_visits: Vec<Position>,
}

impl TraversalState {
    /// 站在起点、尚未确定方向的初始状态。
    pub fn new(start: Position) -> Self {
        Self {
            position: start,
            direction: None,
            visited: vec![start],
            letter_visits: Vec::new(),
        }
    }

    /// 已经以 `direction` 抵达 `position` 的状态（便于单独测试决策逻辑）。
    pub fn heading(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction: Some(direction),
            visited: vec![position],
            letter_visits: Vec::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn visited(&self) -> &[Position] {
        &self.visited
    }

    pub fn letter_visits(&self) -> &[Position] {
        &self.letter_visits
    }

    pub fn steps(&self) -> usize {
        self.visited.len() - 1
    }

    /// 以 `direction` 走到 `next`（其字符为 `glyph`），返回新状态。
    pub fn advance(mut self, next: Position, direction: Direction, glyph: Glyph) -> Self {
        self.visited.push(next);
        if glyph.is_letter() {
            self.letter_visits.push(next);
        }
        self.position = next;
        self.direction = Some(direction);
        self
    }

    pub(crate) fn into_visits(self) -> (Vec<Position>, Vec<Position>) {
        (self.visited, self.letter_visits)
    }
}

/// 当前格子四周可以继续走的方向（上/下/左/右顺序）。
pub fn candidate_directions(grid: &Grid, position: Position) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|direction| {
            position
                .step(*direction)
                .and_then(|next| grid.cell(next))
                .is_some_and(Glyph::is_track)
        })
        .collect()
}

/// 走不下去时的诊断：正前方是非法字符就报非法字符，否则是断路。
fn dead_end(grid: &Grid, position: Position, heading: Option<Direction>) -> PathfinderError {
    let ahead = heading
        .and_then(|direction| position.step(direction))
        .and_then(|next| grid.cell(next).map(|glyph| (next, glyph)));

    match ahead {
        Some((next, Glyph::Invalid(glyph))) => PathfinderError::InvalidGlyph {
            glyph,
            position: Some(next),
        },
        _ => PathfinderError::BrokenPath { position },
    }
}

/// 计算下一步的方向。
///
/// # Panics
///
/// 在非起点的路口上且状态没有方向时 panic：正常遍历中只有起点格子没有方向，
/// 而起点位于路口会先被判为 `MisplacedStart`。
pub fn resolve_direction(grid: &Grid, state: &TraversalState) -> Result<Direction> {
    let position = state.position();
    let Some(current) = grid.cell(position) else {
        return Err(PathfinderError::BrokenPath { position });
    };

    let candidates = candidate_directions(grid, position);
    let heading = state.direction();

    match (candidates.as_slice(), current) {
        ([], _) => Err(dead_end(grid, position, heading)),

        ([only], _) => {
            if heading == Some(only.reverse()) {
                Err(dead_end(grid, position, heading))
            } else {
                Ok(*only)
            }
        }

        (_, Glyph::Turn) => {
            let exits: Vec<Direction> = candidates
                .iter()
                .copied()
                .filter(|direction| heading.is_none_or(|h| !direction.is_collinear(h)))
                .collect();

            match exits.as_slice() {
                [] => Err(PathfinderError::FakeTurn { position }),
                [exit] => Ok(*exit),
                _ => Err(PathfinderError::Fork { position }),
            }
        }

        (_, Glyph::Start) => Err(PathfinderError::MisplacedStart { position }),

        (_, _) => {
            let Some(heading) = heading else {
                panic!("路口 {position} 处没有行进方向：只有起点可以没有方向");
            };

            if candidates.contains(&heading) {
                return Ok(heading);
            }

            // 字母或直线段画在拐角上：来路之外只能有一个垂直出口
            let exits: Vec<Direction> = candidates
                .iter()
                .copied()
                .filter(|direction| !direction.is_collinear(heading))
                .collect();

            match exits.as_slice() {
                [exit] => Ok(*exit),
                [] => Err(PathfinderError::BrokenPath { position }),
                _ => Err(PathfinderError::Fork { position }),
            }
        }
    }
}
