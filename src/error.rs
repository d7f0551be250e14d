// ============================================================================
// 错误类型
//
// 设计目标：
// - 每种结构缺陷对应一个变体，携带结构化字段（字符、位置、数量）
// - 文案只在 CLI 层渲染；库内部只按变体判断
// - 所有错误都是终态：不重试，也不返回半截路径
// ============================================================================

use crate::types::Position;
use thiserror::Error;

/// 本 crate 的统一 Result 类型。
pub type Result<T> = std::result::Result<T, PathfinderError>;

/// ascii-pathfinder-rs 的错误枚举。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathfinderError {
    #[error("缺少起点 `@`")]
    MissingStart,

    #[error("缺少终点 `x`")]
    MissingEnd,

    #[error("起点 `@` 只能有 1 个，实际有 {count} 个")]
    MultipleStart { count: usize },

    #[error("终点 `x` 只能有 1 个，实际有 {count} 个")]
    MultipleEnd { count: usize },

    #[error("找不到字符 `{glyph}`")]
    MissingUniqueGlyph { glyph: char },

    #[error("字符 `{glyph}` 只能有 1 个，实际有 {count} 个")]
    MultipleUniqueGlyph { glyph: char, count: usize },

    /// `position` 为 `None` 表示问题出在调用参数（例如要查找的标记本身非法）。
    #[error("非法字符 `{glyph}`{}", at(.position))]
    InvalidGlyph {
        glyph: char,
        position: Option<Position>,
    },

    #[error("起点 `@` 位于路口 {position}，应位于路径端点")]
    MisplacedStart { position: Position },

    #[error("岔路：拐点 {position} 有多个可选出口")]
    Fork { position: Position },

    #[error("假拐点：{position} 处的 `+` 没有改变方向")]
    FakeTurn { position: Position },

    #[error("路径断开：{position} 处无路可走")]
    BrokenPath { position: Position },

    #[error("路径断开：超过 {limit} 步仍未到达终点")]
    StepLimitExceeded { limit: usize },
}

fn at(position: &Option<Position>) -> String {
    match position {
        Some(position) => format!("（位置 {position}）"),
        None => String::new(),
    }
}

impl PathfinderError {
    /// 稳定的错误种类名（用于 JSON 输出与 golden 测试）。
    ///
    /// 超出步数上限也属于路径断开，因此归为 `BrokenPath`。
    pub fn kind(&self) -> &'static str {
        match self {
            PathfinderError::MissingStart => "MissingStart",
            PathfinderError::MissingEnd => "MissingEnd",
            PathfinderError::MultipleStart { .. } => "MultipleStart",
            PathfinderError::MultipleEnd { .. } => "MultipleEnd",
            PathfinderError::MissingUniqueGlyph { .. } => "MissingUniqueGlyph",
            PathfinderError::MultipleUniqueGlyph { .. } => "MultipleUniqueGlyph",
            PathfinderError::InvalidGlyph { .. } => "InvalidGlyph",
            PathfinderError::MisplacedStart { .. } => "MisplacedStart",
            PathfinderError::Fork { .. } => "Fork",
            PathfinderError::FakeTurn { .. } => "FakeTurn",
            PathfinderError::BrokenPath { .. } | PathfinderError::StepLimitExceeded { .. } => {
                "BrokenPath"
            }
        }
    }

    /// 是否属于“出发前”的标记唯一性错误。
    pub fn is_marker_error(&self) -> bool {
        matches!(
            self,
            PathfinderError::MissingStart
                | PathfinderError::MissingEnd
                | PathfinderError::MultipleStart { .. }
                | PathfinderError::MultipleEnd { .. }
                | PathfinderError::MissingUniqueGlyph { .. }
                | PathfinderError::MultipleUniqueGlyph { .. }
        )
    }
}
