//! Token kinds and token values.
//!
//! `TokenKind` covers both the generic kinds produced by the word splitter
//! (symbols, numbers, punctuation, line breaks) and the domain kinds found in
//! the token catalog (keywords, checks, step verbs, operators, type names).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    // --- Generic kinds (word splitter) ---
    /// Identifier that is not a catalog keyword.
    Symbol,
    Number,
    Dot,
    Comma,
    Colon,
    EndOfLine,
    EndOfFile,
    /// Unrecognized characters or operator runs. No rule accepts it.
    Unknown,

    // --- Keywords ---
    KwLayer,
    KwConstant,
    KwSource,
    KwAction,
    KwWhen,
    KwAnd,
    KwOr,
    KwMod,
    KwOnce,
    KwToggled,
    KwSeries,

    // --- Native type names ---
    TyKey,
    TyButton,
    TyAxis1d,
    TyAxis2d,
    TyAxis3d,
    TyBool,
    TyFloat1,
    TyFloat2,
    TyFloat3,
    TyObject,

    // --- Condition checks ---
    CtPressed,
    CtReleased,
    CtActive,
    CtInactive,
    CtChanged,
    CtEnabled,
    CtDisabled,

    // --- Comparisons ---
    OpEqual,
    OpNotEqual,
    OpGreater,
    OpGreaterEqual,
    OpLess,
    OpLessEqual,

    // --- Step verbs ---
    StActivate,
    StDeactivate,
    StToggle,
    StReset,
    StTime,

    // --- Assignments ---
    OpAssign,
    OpAddAssign,
    OpSubAssign,

    // --- Modifier operators ---
    ModAdd,
    ModSub,
    ModMul,
    ModDiv,
    ModMin,
    ModMax,
}

use TokenKind::*;

impl TokenKind {
    /// Human-readable description used in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            Symbol => "name",
            Number => "number",
            Dot => "`.`",
            Comma => "`,`",
            Colon => "`:`",
            EndOfLine => "end of line",
            EndOfFile => "end of file",
            Unknown => "unknown token",
            _ => self.spelling().unwrap_or("token"),
        }
    }

    /// Fixed spelling of a catalog kind, `None` for generic kinds.
    pub fn spelling(self) -> Option<&'static str> {
        super::catalog::spelling_of(self)
    }

    /// Tokens that begin a new top-level construct (or end the script).
    pub fn starts_item(self) -> bool {
        matches!(
            self,
            KwLayer | KwConstant | KwSource | KwAction | EndOfFile
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Byte range into the script source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Smallest span covering both.
    pub fn cover(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    pub fn as_range(self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// 1-based line and column of a token's first character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Immutable once produced; text is a slice of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
    pub location: Location,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, span: Span, location: Location) -> Self {
        Self {
            kind,
            text,
            span,
            location,
        }
    }
}
