// ============================================================================
// 网格（Grid）
//
// 说明：
// - 只读视图：构造完成后不再修改，可以在多个线程/多次遍历之间共享
// - 行可以长短不一；越界访问返回 `None` 而不是 panic
// - 每个 Unicode 标量占一个格子（非 ASCII 字符会被归为 `Glyph::Invalid`）
// ============================================================================

use crate::error::{PathfinderError, Result};
use crate::glyph::Glyph;
use crate::types::Position;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Glyph>>,
}

impl Grid {
    /// 从多行文本构造网格。
    ///
    /// - 按 `\n` 切行，并去掉每行末尾的 `\r`
    /// - 文本以换行结尾时，丢弃最后那一个空行
    /// - 行首空白原样保留（它决定了列坐标）
    pub fn parse(text: &str) -> Self {
        let mut lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        if lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        Self::from_rows(lines)
    }

    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.as_ref().chars().map(Glyph::from_char).collect())
            .collect();
        Self { rows }
    }

    pub fn from_chars(rows: Vec<Vec<char>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Glyph::from_char).collect())
            .collect();
        Self { rows }
    }

    /// 取某个格子；越界返回 `None`。
    pub fn cell(&self, position: Position) -> Option<Glyph> {
        self.rows
            .get(position.row)
            .and_then(|row| row.get(position.column))
            .copied()
    }

    pub fn rows(&self) -> &[Vec<Glyph>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// 按行优先顺序遍历所有格子。
    pub fn cells(&self) -> impl Iterator<Item = (Position, Glyph)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, glyphs)| {
            glyphs
                .iter()
                .enumerate()
                .map(move |(column, glyph)| (Position::new(row, column), *glyph))
        })
    }

    /// 校验输入：每个格子必须是路径字符或空白。
    ///
    /// 返回第一个（行优先）不合法的格子。
    pub fn validate(&self) -> Result<()> {
        match self.cells().find(|(_, glyph)| !glyph.is_field_value()) {
            Some((position, glyph)) => Err(PathfinderError::InvalidGlyph {
                glyph: glyph.as_char(),
                position: Some(position),
            }),
            None => Ok(()),
        }
    }
}

impl From<&str> for Grid {
    fn from(text: &str) -> Self {
        Grid::parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_are_bounds_checked_per_row() {
        let grid = Grid::from_rows(["@-+", " ", "x-+"]);

        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.row_len(1), Some(1));
        assert_eq!(grid.cell_count(), 7);
        assert_eq!(grid.cell(Position::new(0, 2)), Some(Glyph::Turn));
        assert_eq!(grid.cell(Position::new(1, 0)), Some(Glyph::Blank));
        // 第 1 行只有 1 列
        assert_eq!(grid.cell(Position::new(1, 2)), None);
        assert_eq!(grid.cell(Position::new(3, 0)), None);
    }

    #[test]
    fn parse_keeps_leading_blanks_and_drops_final_newline() {
        let grid = Grid::parse("  @\r\n  |\r\n  x\n");

        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.cell(Position::new(0, 2)), Some(Glyph::Start));
        assert_eq!(grid.cell(Position::new(2, 2)), Some(Glyph::End));
        assert_eq!(grid.row_len(1), Some(3));
    }

    #[test]
    fn validate_reports_first_invalid_cell() {
        let grid = Grid::from_rows(["@-ß-x", "  #"]);
        assert_eq!(
            grid.validate(),
            Err(PathfinderError::InvalidGlyph {
                glyph: 'ß',
                position: Some(Position::new(0, 2)),
            })
        );

        assert_eq!(Grid::from_rows(["@-A-x", "\t "]).validate(), Ok(()));
        assert_eq!(
            Grid::from_chars(vec![vec!['@', '-', 'x']]),
            Grid::from_rows(["@-x"])
        );
    }
}
