//! Condition and step tables used by the series matcher.
//!
//! Condition targets come in three shapes:
//!
//! ```text
//! when action.pressed          category, then check of the action itself
//! and source.Move.x > 0.5      category, then name
//! or Jump.pressed              bare name
//! when .released               bare check
//! ```

use crate::parser::rule::Rule;
use crate::parser::token::TokenKind::*;
use crate::parser::tree::Field;

pub(crate) const WHEN_CONDITION: &[Rule] = &[
    Rule::token(KwWhen).capture(Field::Type),
    Rule::first(CONDITION_TARGET),
];

pub(crate) const AND_OR_CONDITION: &[Rule] = &[
    Rule::first(CONNECTIVE).capture(Field::Type),
    Rule::first(CONDITION_TARGET),
];

/// `, series`
pub(crate) const CONDITION_FLAGS: &[Rule] = &[
    Rule::token(Comma),
    Rule::token(KwSeries).capture(Field::FlagSeries),
];

const CONNECTIVE: &[Rule] = &[Rule::token(KwAnd), Rule::token(KwOr)];

const CATEGORY: &[Rule] = &[Rule::token(KwSource), Rule::token(KwAction)];

const CONDITION_TARGET: &[Rule] = &[
    Rule::all(CATEGORY_TARGET),
    Rule::all(NAMED_TARGET),
    Rule::all(DOTTED_CHECK),
];

const CATEGORY_TARGET: &[Rule] = &[
    Rule::first(CATEGORY).capture(Field::SourceType),
    Rule::token(Dot),
    Rule::first(CATEGORY_TAIL),
];

const CATEGORY_TAIL: &[Rule] = &[Rule::all(NAMED_TARGET), Rule::all(CHECK_KEYWORD)];

const NAMED_TARGET: &[Rule] = &[
    Rule::token(Symbol).capture(Field::SourceName),
    Rule::first(AFTER_NAME),
];

const AFTER_NAME: &[Rule] = &[Rule::all(DOT_THEN_CHECK), Rule::all(COMPARISON)];

const DOT_THEN_CHECK: &[Rule] = &[Rule::token(Dot), Rule::first(AFTER_DOT)];

const AFTER_DOT: &[Rule] = &[Rule::all(COMPONENT_THEN_CHECK), Rule::all(CHECK_KEYWORD)];

/// `Move.x` followed by its check; the component joins the source name.
const COMPONENT_THEN_CHECK: &[Rule] = &[
    Rule::token(Symbol).extend(Field::SourceName),
    Rule::first(CHECK),
];

const CHECK: &[Rule] = &[Rule::all(DOTTED_CHECK), Rule::all(COMPARISON)];

const DOTTED_CHECK: &[Rule] = &[Rule::token(Dot), Rule::all(CHECK_KEYWORD)];

const CHECK_KEYWORD: &[Rule] = &[
    Rule::first(CHECK_KIND).capture(Field::ConditionKind),
    Rule::token(Number).capture(Field::Param).optional(),
];

const CHECK_KIND: &[Rule] = &[
    Rule::token(CtPressed),
    Rule::token(CtReleased),
    Rule::token(CtActive),
    Rule::token(CtInactive),
    Rule::token(CtChanged),
    Rule::token(CtEnabled),
    Rule::token(CtDisabled),
];

const COMPARISON: &[Rule] = &[
    Rule::first(COMPARISON_OP).capture(Field::ConditionKind),
    Rule::token(Number).capture(Field::Param),
];

const COMPARISON_OP: &[Rule] = &[
    Rule::token(OpEqual),
    Rule::token(OpNotEqual),
    Rule::token(OpGreater),
    Rule::token(OpGreaterEqual),
    Rule::token(OpLess),
    Rule::token(OpLessEqual),
];

/// One `.`-prefixed step clause.
///
/// ```text
/// .activate
/// .x = source.Look.x
/// .y += 1
/// ```
pub(crate) const STEP: &[Rule] = &[Rule::token(Dot), Rule::first(STEP_BODY)];

const STEP_BODY: &[Rule] = &[
    Rule::first(STEP_VERB).capture(Field::StepKind),
    Rule::all(ASSIGNMENT),
];

const STEP_VERB: &[Rule] = &[
    Rule::token(StActivate),
    Rule::token(StDeactivate),
    Rule::token(StToggle),
    Rule::token(StReset),
    Rule::token(StTime),
];

const ASSIGNMENT: &[Rule] = &[
    Rule::token(Symbol).capture(Field::Destination),
    Rule::first(ASSIGN_OP).capture(Field::StepKind),
    Rule::first(STEP_SOURCE),
];

const ASSIGN_OP: &[Rule] = &[
    Rule::token(OpAssign),
    Rule::token(OpAddAssign),
    Rule::token(OpSubAssign),
];

const STEP_SOURCE: &[Rule] = &[
    Rule::all(CATEGORY_SOURCE),
    Rule::all(NAMED_SOURCE),
    Rule::token(Number).capture(Field::Source),
];

const CATEGORY_SOURCE: &[Rule] = &[
    Rule::first(CATEGORY).capture(Field::SourceType),
    Rule::token(Dot),
    Rule::token(Symbol).capture(Field::Source),
    Rule::all(SOURCE_COMPONENT).optional(),
];

const NAMED_SOURCE: &[Rule] = &[
    Rule::token(Symbol).capture(Field::Source),
    Rule::all(SOURCE_COMPONENT).optional(),
];

const SOURCE_COMPONENT: &[Rule] = &[
    Rule::token(Dot),
    Rule::token(Symbol).extend(Field::Source),
];
