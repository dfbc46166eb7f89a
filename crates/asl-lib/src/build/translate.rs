//! Token kind → domain enum translation.
//!
//! Each function covers exactly the kinds its grammar table can capture.
//! Any other kind means the tables and the catalog have drifted apart.

use asl_core::{ConditionKind, DataType, ModifierOp, SourceType, StepKind};

use super::invariants::unmapped;
use crate::parser::TokenKind::{self, *};

pub(super) fn source_type(kind: TokenKind) -> SourceType {
    match kind {
        TyKey => SourceType::Key,
        TyButton => SourceType::Button,
        TyAxis1d => SourceType::Axis1d,
        TyAxis2d => SourceType::Axis2d,
        TyAxis3d => SourceType::Axis3d,
        _ => unmapped(kind, "source type"),
    }
}

pub(super) fn data_type(kind: TokenKind) -> DataType {
    match kind {
        TyBool => DataType::Bool,
        TyFloat1 => DataType::Float1,
        TyFloat2 => DataType::Float2,
        TyFloat3 => DataType::Float3,
        TyObject => DataType::Object,
        _ => unmapped(kind, "data type"),
    }
}

pub(super) fn condition_kind(kind: TokenKind) -> ConditionKind {
    match kind {
        CtPressed => ConditionKind::Pressed,
        CtReleased => ConditionKind::Released,
        CtActive => ConditionKind::Active,
        CtInactive => ConditionKind::Inactive,
        CtChanged => ConditionKind::Changed,
        CtEnabled => ConditionKind::Enabled,
        CtDisabled => ConditionKind::Disabled,
        OpEqual => ConditionKind::Equal,
        OpNotEqual => ConditionKind::NotEqual,
        OpGreater => ConditionKind::Greater,
        OpGreaterEqual => ConditionKind::GreaterOrEqual,
        OpLess => ConditionKind::Lower,
        OpLessEqual => ConditionKind::LowerOrEqual,
        _ => unmapped(kind, "condition check"),
    }
}

pub(super) fn step_kind(kind: TokenKind) -> StepKind {
    match kind {
        StActivate => StepKind::Activate,
        StDeactivate => StepKind::Deactivate,
        StToggle => StepKind::Toggle,
        StReset => StepKind::Reset,
        StTime => StepKind::Time,
        OpAssign => StepKind::Set,
        OpAddAssign => StepKind::Add,
        OpSubAssign => StepKind::Sub,
        _ => unmapped(kind, "step"),
    }
}

pub(super) fn modifier_op(kind: TokenKind) -> ModifierOp {
    match kind {
        ModAdd => ModifierOp::Add,
        ModSub => ModifierOp::Sub,
        ModMul => ModifierOp::Mul,
        ModDiv => ModifierOp::Div,
        ModMin => ModifierOp::MinOf,
        ModMax => ModifierOp::MaxOf,
        _ => unmapped(kind, "modifier operator"),
    }
}
