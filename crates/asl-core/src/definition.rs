//! The action-layer definition: the long-lived output of compiling a script.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::Binding;

/// One compiled `layer` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionLayer {
    pub name: String,
    /// Named numeric constants, in declaration order.
    pub constants: IndexMap<String, f32>,
    pub sources: Vec<SourceDefinition>,
    pub actions: Vec<ActionDefinition>,
}

impl ActionLayer {
    pub fn source(&self, name: &str) -> Option<&SourceDefinition> {
        self.sources.iter().find(|s| s.name == name)
    }

    pub fn action(&self, name: &str) -> Option<&ActionDefinition> {
        self.actions.iter().find(|a| a.name == name)
    }

    pub fn constant(&self, name: &str) -> Option<f32> {
        self.constants.get(name).copied()
    }

    /// Encodes the layer for loading without re-running the compiler.
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        postcard::to_allocvec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        postcard::from_bytes(bytes)
    }

    /// Encodes a whole compiled script as one postcard sequence.
    pub fn list_to_bytes(layers: &[ActionLayer]) -> Result<Vec<u8>, postcard::Error> {
        postcard::to_allocvec(layers)
    }

    pub fn list_from_bytes(bytes: &[u8]) -> Result<Vec<ActionLayer>, postcard::Error> {
        postcard::from_bytes(bytes)
    }
}

named_enum! {
    /// Physical shape of a source's value.
    pub enum SourceType {
        Key => "key",
        Button => "button",
        Axis1d => "axis1d",
        Axis2d => "axis2d",
        Axis3d => "axis3d",
    }
}

impl SourceType {
    /// Whether a binding can drive a source of this type.
    ///
    /// Key sources only read keyboard keys, button sources read any digital
    /// input, and an N-dimensional axis reads axes of up to N dimensions.
    pub fn accepts(self, binding: &Binding) -> bool {
        match (self, binding) {
            (SourceType::Key, Binding::Key(_)) => true,
            (SourceType::Key, _) => false,
            (SourceType::Button, Binding::Key(_) | Binding::Button(_)) => true,
            (SourceType::Button, Binding::Axis(_)) => false,
            (_, Binding::Axis(axis)) => axis.dimensions() <= self.dimensions(),
            (_, _) => false,
        }
    }

    pub fn dimensions(self) -> u8 {
        match self {
            SourceType::Key | SourceType::Button | SourceType::Axis1d => 1,
            SourceType::Axis2d => 2,
            SourceType::Axis3d => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDefinition {
    pub name: String,
    pub ty: SourceType,
    pub bindings: Vec<Binding>,
}

named_enum! {
    /// Value type an action produces.
    pub enum DataType {
        Bool => "bool",
        Float1 => "float1",
        Float2 => "float2",
        Float3 => "float3",
        Object => "object",
    }
}

/// How an action's state reacts to its conditions over time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Behavior {
    #[default]
    Default,
    Toggled,
    ActiveOnce,
}

impl Behavior {
    /// Script flag spelling, `None` for the default behavior.
    pub fn flag(self) -> Option<&'static str> {
        match self {
            Behavior::Default => None,
            Behavior::Toggled => Some("toggled"),
            Behavior::ActiveOnce => Some("once"),
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag().unwrap_or("default"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDefinition {
    pub name: String,
    pub data_type: DataType,
    pub behavior: Behavior,
    pub condition_series: Vec<ConditionSeries>,
    pub modifiers: Vec<Modifier>,
}

/// An ordered `when`/`and`/`or` chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionSeries {
    pub conditions: Vec<Condition>,
    pub finished: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Source or action the condition reads, possibly with a component (`Move.x`).
    pub source_name: String,
    pub from_action: bool,
    pub kind: ConditionKind,
    pub flags: ConditionFlags,
    pub param: Option<f32>,
    /// Steps executed when this condition is the one that matched.
    pub steps: Vec<Step>,
}

named_enum! {
    pub enum ConditionKind {
        Pressed => "pressed",
        Released => "released",
        Active => "active",
        Inactive => "inactive",
        Changed => "changed",
        Enabled => "enabled",
        Disabled => "disabled",
        Equal => "==",
        NotEqual => "!=",
        Greater => ">",
        GreaterOrEqual => ">=",
        Lower => "<",
        LowerOrEqual => "<=",
    }
}

impl ConditionKind {
    /// Comparisons are written as operators and always carry a parameter.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            ConditionKind::Equal
                | ConditionKind::NotEqual
                | ConditionKind::Greater
                | ConditionKind::GreaterOrEqual
                | ConditionKind::Lower
                | ConditionKind::LowerOrEqual
        )
    }
}

bitflags::bitflags! {
    /// Per-condition evaluation flags.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct ConditionFlags: u8 {
        /// The condition owns steps to run when it matches.
        const RUN_STEPS = 0b0000_0001;
        /// Steps only run when the whole series so far holds.
        const SERIES_CHECK = 0b0000_0010;
        /// Combined with the previous condition by `and`.
        const SERIES_AND = 0b0000_0100;
        /// Combined with the previous condition by `or`.
        const SERIES_OR = 0b0000_1000;
    }
}

impl Serialize for ConditionFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ConditionFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(ConditionFlags::from_bits_truncate(bits))
    }
}

named_enum! {
    pub enum StepKind {
        Activate => "activate",
        Deactivate => "deactivate",
        Toggle => "toggle",
        Reset => "reset",
        Time => "time",
        Set => "=",
        Add => "+=",
        Sub => "-=",
    }
}

impl StepKind {
    /// Assignments write a value into a component and need a source.
    pub fn is_assignment(self) -> bool {
        matches!(self, StepKind::Set | StepKind::Add | StepKind::Sub)
    }
}

/// Right-hand side of an assignment step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StepSource {
    Value(f32),
    Source(String),
    Action(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub kind: StepKind,
    pub source: Option<StepSource>,
    pub destination: Option<Component>,
}

impl Step {
    pub fn verb(kind: StepKind) -> Self {
        Self {
            kind,
            source: None,
            destination: None,
        }
    }

    pub fn assign(kind: StepKind, destination: Component, source: StepSource) -> Self {
        Self {
            kind,
            source: Some(source),
            destination: Some(destination),
        }
    }
}

named_enum! {
    /// Component of a vector value.
    pub enum Component {
        X => "x",
        Y => "y",
        Z => "z",
    }
}

named_enum! {
    pub enum ModifierOp {
        Add => "add",
        Sub => "sub",
        Mul => "mul",
        Div => "div",
        MinOf => "min",
        MaxOf => "max",
    }
}

/// Post-processing applied to one component of an action's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub component: Component,
    pub operation: ModifierOp,
    pub param: f32,
}
