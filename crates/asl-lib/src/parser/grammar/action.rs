use super::series::match_condition_series;
use crate::parser::rule::Rule;
use crate::parser::token::TokenKind::*;
use crate::parser::tree::{Field, NodeKind};

/// ```text
/// action Jump: bool, once
///     when Jump.pressed
///     .activate
///     mod.x mul 2
/// ```
pub(crate) const ACTION: &[Rule] = &[
    Rule::token(KwAction),
    Rule::token(Symbol).capture(Field::Name),
    Rule::token(Colon),
    Rule::first(DATA_TYPE).capture(Field::Type),
    Rule::all(ACTION_FLAG).repeat().optional(),
    Rule::token(EndOfLine),
    Rule::custom(match_condition_series).repeat().optional(),
    Rule::child(NodeKind::Modifier, MODIFIER).repeat().optional(),
];

const DATA_TYPE: &[Rule] = &[
    Rule::token(TyBool),
    Rule::token(TyFloat1),
    Rule::token(TyFloat2),
    Rule::token(TyFloat3),
    Rule::token(TyObject),
];

const ACTION_FLAG: &[Rule] = &[Rule::token(Comma), Rule::first(BEHAVIOR)];

const BEHAVIOR: &[Rule] = &[
    Rule::token(KwOnce).capture(Field::FlagOnce),
    Rule::token(KwToggled).capture(Field::FlagToggled),
];

/// `mod.x mul 2`
pub(crate) const MODIFIER: &[Rule] = &[
    Rule::token(KwMod),
    Rule::token(Dot),
    Rule::token(Symbol).capture(Field::Component),
    Rule::first(MODIFIER_OP).capture(Field::Operation),
    Rule::token(Number).capture(Field::Param),
    Rule::token(EndOfLine),
];

const MODIFIER_OP: &[Rule] = &[
    Rule::token(ModAdd),
    Rule::token(ModSub),
    Rule::token(ModMul),
    Rule::token(ModDiv),
    Rule::token(ModMin),
    Rule::token(ModMax),
];
