use crate::definition::{Behavior, SourceType};

/// Content errors detected while populating an action layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    #[error("source `{0}` is already defined")]
    DuplicateSource(String),

    #[error("action `{0}` is already defined")]
    DuplicateAction(String),

    #[error("constant `{0}` is already defined")]
    DuplicateConstant(String),

    #[error("unknown input device `{0}`")]
    UnknownDevice(String),

    #[error("device `{device}` has no input named `{input}`")]
    UnknownInput { device: String, input: String },

    #[error("binding `{binding}` cannot drive {ty} source `{source_name}`")]
    IncompatibleBinding {
        source_name: String,
        binding: String,
        ty: SourceType,
    },

    #[error("unknown value component `{0}` (expected `x`, `y` or `z`)")]
    UnknownComponent(String),

    #[error("action `{action}` cannot be both {first} and {second}")]
    ConflictingBehavior {
        action: String,
        first: Behavior,
        second: Behavior,
    },

    #[error("{category} `{name}` used by action `{action}` is not defined")]
    UndefinedReference {
        action: String,
        name: String,
        category: &'static str,
    },
}
