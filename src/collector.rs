// ============================================================================
// 结果收集（Result Collector）
//
// - path：按访问顺序拼接每个格子的字符，重复访问照样重复
// - word：车站字母按“位置”去重（不是按字母去重），保留首次访问顺序
// ============================================================================

use crate::grid::Grid;
use crate::types::{PathResult, Position};
use std::collections::HashSet;

pub fn collect(grid: &Grid, visited: &[Position], letter_visits: &[Position]) -> PathResult {
    let path = visited
        .iter()
        .filter_map(|position| grid.cell(*position))
        .map(|glyph| glyph.as_char())
        .collect();

    let mut seen: HashSet<Position> = HashSet::new();
    let word = letter_visits
        .iter()
        .filter(|position| seen.insert(**position))
        .filter_map(|position| grid.cell(*position))
        .map(|glyph| glyph.as_char())
        .collect();

    PathResult { path, word }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_dedups_by_position_not_by_letter() {
        let grid = Grid::from_rows(["@AOA"]);
        let a1 = Position::new(0, 1);
        let o = Position::new(0, 2);
        let a2 = Position::new(0, 3);

        let result = collect(
            &grid,
            &[Position::new(0, 0), a1, o, a2, o, a1],
            &[a1, o, a2, o, a1],
        );

        assert_eq!(result.path, "@AOAOA");
        assert_eq!(result.word, "AOA");
    }
}
