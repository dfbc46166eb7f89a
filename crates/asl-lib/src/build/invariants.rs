//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::parser::{Field, Lexeme, NodeKind, TokenKind};

#[cold]
pub(super) fn unmapped(kind: TokenKind, what: &str) -> ! {
    panic!("broken grammar invariant: {kind:?} is not a {what}")
}

#[cold]
pub(super) fn misplaced(parent: NodeKind, child: NodeKind) -> ! {
    panic!("broken grammar invariant: {child:?} node below {parent:?}")
}

/// Field captured by a mandatory rule of its table.
#[inline]
pub(super) fn required(lexeme: &Option<Lexeme>, kind: NodeKind, field: Field) -> Lexeme {
    match lexeme {
        Some(lexeme) => *lexeme,
        None => panic!("broken grammar invariant: {kind:?} node without `{field:?}`"),
    }
}
