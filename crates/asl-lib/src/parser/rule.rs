//! Declarative grammar rules.
//!
//! A rule table is a `&'static [Rule]`. Tables nest through the matcher
//! variants and are plain `const` data, shared by every parse.

use super::core::{Context, ParseResult};
use super::tree::{Field, NodeKind};
use super::token::TokenKind;

/// Hand-written matcher for constructs the combinators cannot express.
pub type MatchFn = for<'a, 'src> fn(&'a mut Context<'src>) -> ParseResult<()>;

#[derive(Clone, Copy)]
pub enum Matcher {
    /// A single token of the given kind.
    Token(TokenKind),
    /// Every rule of the table, in order.
    All(&'static [Rule]),
    /// The first rule of the table that matches.
    First(&'static [Rule]),
    /// The table, into a new node appended as a child of the current node.
    Child(NodeKind, &'static [Rule]),
    /// The table, into a new node appended as a sibling of the current node.
    Sibling(NodeKind, &'static [Rule]),
    Custom(MatchFn),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Store the matched token in the field.
    Set(Field),
    /// Widen a previously captured field over the matched token.
    Extend(Field),
}

pub(crate) const OPTIONAL: u8 = 1 << 0;
pub(crate) const REPEAT: u8 = 1 << 1;
pub(crate) const NO_ADVANCE: u8 = 1 << 2;

#[derive(Clone, Copy)]
pub struct Rule {
    pub matcher: Matcher,
    pub(crate) flags: u8,
    pub capture: Option<Capture>,
}

impl Rule {
    const fn new(matcher: Matcher) -> Self {
        Self {
            matcher,
            flags: 0,
            capture: None,
        }
    }

    pub const fn token(kind: TokenKind) -> Self {
        Self::new(Matcher::Token(kind))
    }

    pub const fn all(rules: &'static [Rule]) -> Self {
        Self::new(Matcher::All(rules))
    }

    pub const fn first(rules: &'static [Rule]) -> Self {
        Self::new(Matcher::First(rules))
    }

    pub const fn child(kind: NodeKind, rules: &'static [Rule]) -> Self {
        Self::new(Matcher::Child(kind, rules))
    }

    pub const fn sibling(kind: NodeKind, rules: &'static [Rule]) -> Self {
        Self::new(Matcher::Sibling(kind, rules))
    }

    pub const fn custom(f: MatchFn) -> Self {
        Self::new(Matcher::Custom(f))
    }

    /// Zero or one.
    pub const fn optional(mut self) -> Self {
        self.flags |= OPTIONAL;
        self
    }

    /// One or more; zero or more together with `optional`.
    pub const fn repeat(mut self) -> Self {
        self.flags |= REPEAT;
        self
    }

    /// Match, then rewind the cursor.
    pub const fn noadvance(mut self) -> Self {
        self.flags |= NO_ADVANCE;
        self
    }

    pub const fn capture(mut self, field: Field) -> Self {
        self.capture = Some(Capture::Set(field));
        self
    }

    pub const fn extend(mut self, field: Field) -> Self {
        self.capture = Some(Capture::Extend(field));
        self
    }

    pub fn is_optional(&self) -> bool {
        self.flags & OPTIONAL != 0
    }

    pub fn is_repeat(&self) -> bool {
        self.flags & REPEAT != 0
    }

    pub fn is_noadvance(&self) -> bool {
        self.flags & NO_ADVANCE != 0
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("Rule");
        match self.matcher {
            Matcher::Token(kind) => s.field("token", &kind),
            Matcher::All(rules) => s.field("all", &rules.len()),
            Matcher::First(rules) => s.field("first", &rules.len()),
            Matcher::Child(kind, _) => s.field("child", &kind),
            Matcher::Sibling(kind, _) => s.field("sibling", &kind),
            Matcher::Custom(_) => s.field("custom", &"fn"),
        };
        s.field("flags", &self.flags)
            .field("capture", &self.capture)
            .finish()
    }
}
