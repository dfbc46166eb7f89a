//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::token::{Token, TokenKind};
use super::tree::{Field, NodeKind};

#[inline]
pub(super) fn ensure_terminated(tokens: &[Token<'_>]) {
    assert!(
        tokens.last().is_some_and(|t| t.kind == TokenKind::EndOfFile),
        "broken tokenizer invariant: token stream must end with EndOfFile"
    );
}

#[cold]
pub(super) fn missing_field(kind: NodeKind, field: Field) -> ! {
    panic!("broken grammar invariant: {kind:?} node has no `{field:?}` field")
}
