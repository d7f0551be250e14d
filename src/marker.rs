// ============================================================================
// 标记定位（Marker Locator）
//
// - 扫描整张网格，统计某个标记字符出现的所有位置
// - 恰好 1 个才算成功；0 个 / 多个分别报 Missing / Multiple
// - `@` 与 `x` 是保留标记，有各自专门的错误变体
// ============================================================================

use crate::error::{PathfinderError, Result};
use crate::glyph::Glyph;
use crate::grid::Grid;
use crate::types::Position;

/// 找到唯一一个 `marker` 所在的位置。
pub fn locate_marker(grid: &Grid, marker: char) -> Result<Position> {
    let target = Glyph::from_char(marker);
    if !target.is_track() {
        return Err(PathfinderError::InvalidGlyph {
            glyph: marker,
            position: None,
        });
    }

    let matches: Vec<Position> = grid
        .cells()
        .filter(|(_, glyph)| *glyph == target)
        .map(|(position, _)| position)
        .collect();

    match matches.as_slice() {
        [position] => Ok(*position),
        [] => Err(match target {
            Glyph::Start => PathfinderError::MissingStart,
            Glyph::End => PathfinderError::MissingEnd,
            _ => PathfinderError::MissingUniqueGlyph { glyph: marker },
        }),
        many => {
            let count = many.len();
            Err(match target {
                Glyph::Start => PathfinderError::MultipleStart { count },
                Glyph::End => PathfinderError::MultipleEnd { count },
                _ => PathfinderError::MultipleUniqueGlyph {
                    glyph: marker,
                    count,
                },
            })
        }
    }
}
