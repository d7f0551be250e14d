// ============================================================================
// 字符分类（Glyph）
//
// 说明：
// - 每个网格格子恰好对应一个 Glyph
// - 分类是对固定字母表做显式匹配，不走正则；
//   任何不认识的字符都落到 `Invalid`，保证 match 穷尽
// ============================================================================

pub const HORIZONTAL: char = '-';
pub const VERTICAL: char = '|';
pub const TURN: char = '+';
pub const START: char = '@';
pub const END: char = 'x';

/// 一个格子里的字符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// 空白（空格、制表符等任何 whitespace）。
    Blank,
    Horizontal,
    Vertical,
    Turn,
    Start,
    End,
    /// 车站：单个大写字母 A–Z。
    Letter(char),
    /// 不在字母表里的字符（包括非 ASCII）。
    Invalid(char),
}

impl Glyph {
    pub fn from_char(ch: char) -> Self {
        match ch {
            HORIZONTAL => Glyph::Horizontal,
            VERTICAL => Glyph::Vertical,
            TURN => Glyph::Turn,
            START => Glyph::Start,
            END => Glyph::End,
            'A'..='Z' => Glyph::Letter(ch),
            c if c.is_whitespace() => Glyph::Blank,
            c => Glyph::Invalid(c),
        }
    }

    /// 还原成路径输出里使用的字符（空白统一成空格）。
    pub fn as_char(self) -> char {
        match self {
            Glyph::Blank => ' ',
            Glyph::Horizontal => HORIZONTAL,
            Glyph::Vertical => VERTICAL,
            Glyph::Turn => TURN,
            Glyph::Start => START,
            Glyph::End => END,
            Glyph::Letter(c) | Glyph::Invalid(c) => c,
        }
    }

    pub fn is_letter(self) -> bool {
        matches!(self, Glyph::Letter(_))
    }

    /// 是否允许出现在路径上：字母、`@`、`x`、`|`、`+`、`-`。
    pub fn is_track(self) -> bool {
        matches!(
            self,
            Glyph::Letter(_)
                | Glyph::Start
                | Glyph::End
                | Glyph::Vertical
                | Glyph::Turn
                | Glyph::Horizontal
        )
    }

    /// 是否是合法的输入格子（路径字符或空白）。
    ///
    /// 只用于校验原始输入，不用于判断路径格子。
    pub fn is_field_value(self) -> bool {
        self.is_track() || self == Glyph::Blank
    }
}

impl From<char> for Glyph {
    fn from(ch: char) -> Self {
        Glyph::from_char(ch)
    }
}
