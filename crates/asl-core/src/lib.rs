//! Core data structures for the Action Scripting Language.
//!
//! This crate is the boundary between the ASL front end and the rest of the
//! engine: it owns the action-layer definition model produced by compilation
//! and the [`LayerBuilder`] interface used to populate it.
//!
//! # Example
//!
//! ```
//! use asl_core::{Binding, DataType, LayerBuilder, SourceType};
//!
//! let mut builder = LayerBuilder::new("Player");
//! builder
//!     .define_source("Jump", SourceType::Button)
//!     .unwrap()
//!     .add_binding(Binding::resolve("kb", "space").unwrap())
//!     .unwrap();
//! builder.define_action("Jump", DataType::Bool).unwrap();
//!
//! let layer = builder.finish(true).unwrap();
//! assert_eq!(layer.sources.len(), 1);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

/// Declares a closed set of named values with a stable spelling per variant.
///
/// Generates `ALL`, `name()`, `from_name()` and `Display`.
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

mod builder;
mod definition;
mod error;
mod input;
mod invariants;

#[cfg(test)]
mod builder_tests;
#[cfg(test)]
mod definition_tests;
#[cfg(test)]
mod input_tests;

pub use builder::{ActionHandle, LayerBuilder, SeriesHandle, SourceHandle};
pub use definition::{
    ActionDefinition, ActionLayer, Behavior, Component, Condition, ConditionFlags, ConditionKind,
    ConditionSeries, DataType, Modifier, ModifierOp, SourceDefinition, SourceType, Step, StepKind,
    StepSource,
};
pub use error::DefinitionError;
pub use input::{
    AxisInput, Binding, ButtonInput, Device, GamepadAxis, GamepadButton, KeyboardKey, MouseAxis,
    MouseButton,
};

/// Splits a compound name (`Move.x`) into its base name (`Move`).
pub fn base_name(name: &str) -> &str {
    name.split_once('.').map_or(name, |(base, _)| base)
}
