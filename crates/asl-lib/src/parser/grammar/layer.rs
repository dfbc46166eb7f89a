use super::action::ACTION;
use super::source::SOURCE;
use crate::parser::rule::Rule;
use crate::parser::token::TokenKind::*;
use crate::parser::tree::{Field, NodeKind};

/// `layer Player:`
pub(crate) const LAYER: &[Rule] = &[
    Rule::token(KwLayer),
    Rule::token(Symbol).capture(Field::Name),
    Rule::token(Colon),
    Rule::token(EndOfLine),
    Rule::first(LAYER_ITEM).repeat().optional(),
];

const LAYER_ITEM: &[Rule] = &[
    Rule::child(NodeKind::Constant, CONSTANT),
    Rule::child(NodeKind::Source, SOURCE),
    Rule::child(NodeKind::Action, ACTION),
];

/// `constant mouse.sensitivity = 0.25`
pub(crate) const CONSTANT: &[Rule] = &[
    Rule::token(KwConstant),
    Rule::token(Symbol).capture(Field::Name),
    Rule::all(CONSTANT_COMPONENT).optional(),
    Rule::token(OpAssign),
    Rule::token(Number).capture(Field::Param),
    Rule::token(EndOfLine),
];

const CONSTANT_COMPONENT: &[Rule] = &[
    Rule::token(Dot),
    Rule::token(Symbol).extend(Field::Name),
];
