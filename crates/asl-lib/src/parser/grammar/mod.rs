//! Grammar tables, one module per construct.
//!
//! Tables are `const` slices of [`Rule`]s. Every nested table is named so it
//! lives in static memory and can be shared by reference.
//!
//! Alternatives inside a `first` table are keyed by distinct leading tokens:
//! the engine never backtracks once an alternative has consumed input.

pub(crate) mod action;
pub(crate) mod condition;
pub(crate) mod layer;
pub(crate) mod series;
pub(crate) mod source;

use super::rule::Rule;
use super::token::TokenKind::*;
use super::tree::NodeKind;

/// Entry table: any number of layers, then end of input.
pub(crate) const SCRIPT: &[Rule] = &[
    Rule::child(NodeKind::Layer, layer::LAYER).repeat().optional(),
    Rule::token(EndOfFile),
];
