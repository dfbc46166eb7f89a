//! Condition series: `when` / `and` / `or` chains with their steps.
//!
//! Conditions of a series chain as siblings below the action. Steps hang
//! below the condition they follow, so only that condition runs them:
//!
//! ```text
//! when action.pressed        Condition(when)
//! .activate                    Step
//! and source.x > 0.5         Condition(and)
//! ```
//!
//! Every branch peeks before consuming so that the cursor is left on the token
//! that ends the series (`when`, `mod`, the next item, or end of input).

use super::condition::{AND_OR_CONDITION, CONDITION_FLAGS, STEP, WHEN_CONDITION};
use crate::parser::core::{Context, Link, ParseResult};
use crate::parser::token::TokenKind::{self, *};
use crate::parser::tree::NodeKind;

/// Tokens that may follow a line break inside a series.
const SERIES_FOLLOW: &[TokenKind] = &[
    KwAnd, KwOr, Dot, Comma, KwWhen, KwMod, KwLayer, KwConstant, KwSource, KwAction, EndOfFile,
];

/// Tokens that may follow a condition or step on the same line.
const SERIES_ITEM: &[TokenKind] = &[KwAnd, KwOr, Dot, Comma, EndOfLine];

/// Matches one series into the current (action) node.
pub(crate) fn match_condition_series(ctx: &mut Context<'_>) -> ParseResult<()> {
    if !ctx.at(KwWhen) {
        return Err(ctx.unexpected(&[KwWhen]));
    }
    if ctx.previous_kind() != Some(EndOfLine) {
        return Err(ctx.unexpected(&[EndOfLine]).fatal());
    }

    let action = ctx.node();
    let mut current = ctx.attach(action, Link::Child, NodeKind::Condition, WHEN_CONDITION)?;

    loop {
        match ctx.current_kind() {
            KwAnd | KwOr => {
                current = ctx.attach(current, Link::Sibling, NodeKind::Condition, AND_OR_CONDITION)?;
            }
            Dot => {
                while ctx.at(Dot) {
                    ctx.attach(current, Link::Child, NodeKind::Step, STEP)?;
                }
            }
            Comma => ctx.execute_in(current, CONDITION_FLAGS)?,
            EndOfLine => {
                ctx.bump();
                match ctx.current_kind() {
                    KwAnd | KwOr | Dot | Comma => continue,
                    KwWhen | KwMod => return Ok(()),
                    kind if kind.starts_item() => return Ok(()),
                    _ => return Err(ctx.unexpected(SERIES_FOLLOW).fatal()),
                }
            }
            _ => return Err(ctx.unexpected(SERIES_ITEM).fatal()),
        }
    }
}
