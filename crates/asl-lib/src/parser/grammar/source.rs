use crate::parser::rule::Rule;
use crate::parser::token::TokenKind::*;
use crate::parser::tree::{Field, NodeKind};

/// `source button Jump: kb.space, gp.a`
pub(crate) const SOURCE: &[Rule] = &[
    Rule::token(KwSource),
    Rule::first(SOURCE_TYPE).capture(Field::Type),
    Rule::token(Symbol).capture(Field::Name),
    Rule::all(BINDINGS).optional(),
    Rule::token(EndOfLine),
];

const SOURCE_TYPE: &[Rule] = &[
    Rule::token(TyKey),
    Rule::token(TyButton),
    Rule::token(TyAxis1d),
    Rule::token(TyAxis2d),
    Rule::token(TyAxis3d),
];

const BINDINGS: &[Rule] = &[
    Rule::token(Colon),
    Rule::child(NodeKind::SourceBinding, BINDING),
];

/// First binding of a source. Further bindings chain as its siblings.
pub(crate) const BINDING: &[Rule] = &[
    Rule::token(Symbol).capture(Field::Device),
    Rule::token(Dot),
    Rule::first(BINDING_INPUT).capture(Field::Source),
    Rule::all(NEXT_BINDING).repeat().optional(),
];

const NEXT_BINDING: &[Rule] = &[
    Rule::token(Comma),
    Rule::sibling(NodeKind::SourceBinding, BINDING_TARGET),
];

const BINDING_TARGET: &[Rule] = &[
    Rule::token(Symbol).capture(Field::Device),
    Rule::token(Dot),
    Rule::first(BINDING_INPUT).capture(Field::Source),
];

/// Digit keys (`kb.1`) lex as numbers.
const BINDING_INPUT: &[Rule] = &[Rule::token(Symbol), Rule::token(Number)];
