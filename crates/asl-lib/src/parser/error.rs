use std::fmt;

use super::token::{Location, Span, Token, TokenKind};

/// A required token kind did not match.
///
/// The only parse error. Carries every kind that would have been accepted at
/// that point, merged across the alternatives that were tried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected {found} `{text}` at {location}, expected {}", ExpectedList(.expected))]
pub struct UnexpectedToken {
    pub found: TokenKind,
    pub text: String,
    pub expected: Vec<TokenKind>,
    pub span: Span,
    pub location: Location,
    /// Raised deliberately; never absorbed by `optional`/`repeat`/`first`.
    pub(crate) fatal: bool,
}

impl UnexpectedToken {
    pub(crate) fn new(token: &Token<'_>, expected: &[TokenKind]) -> Self {
        Self {
            found: token.kind,
            text: token.text.to_owned(),
            expected: expected.to_vec(),
            span: token.span,
            location: token.location,
            fatal: false,
        }
    }

    pub(crate) fn fatal(mut self) -> Self {
        self.fatal = true;
        self
    }

    /// Adds the expectations of another failure at the same position.
    pub(crate) fn merge(&mut self, other: UnexpectedToken) {
        for kind in other.expected {
            if !self.expected.contains(&kind) {
                self.expected.push(kind);
            }
        }
    }
}

struct ExpectedList<'a>(&'a [TokenKind]);

impl fmt::Display for ExpectedList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            [] => f.write_str("nothing"),
            [only] => write!(f, "{only}"),
            [init @ .., last] => {
                for (i, kind) in init.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{kind}")?;
                }
                write!(f, " or {last}")
            }
        }
    }
}
