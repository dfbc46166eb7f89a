//! Layer-construction interface.
//!
//! The compiler never assembles an [`ActionLayer`] directly; it drives a
//! [`LayerBuilder`] through the handles below. Each handle borrows the part of
//! the layer it populates, so only one source, action or series is open at a time.

use crate::base_name;
use crate::definition::{
    ActionDefinition, ActionLayer, Behavior, Condition, ConditionFlags, ConditionKind,
    ConditionSeries, DataType, Modifier, SourceDefinition, SourceType, Step, StepSource,
};
use crate::error::DefinitionError;
use crate::input::{AxisInput, Binding, ButtonInput, KeyboardKey};

#[derive(Debug)]
pub struct LayerBuilder {
    layer: ActionLayer,
}

impl LayerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            layer: ActionLayer {
                name: name.into(),
                ..ActionLayer::default()
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.layer.name
    }

    pub fn set_constant(&mut self, name: impl Into<String>, value: f32) -> Result<(), DefinitionError> {
        let name = name.into();
        if self.layer.constants.contains_key(&name) {
            return Err(DefinitionError::DuplicateConstant(name));
        }
        self.layer.constants.insert(name, value);
        Ok(())
    }

    pub fn define_source(
        &mut self,
        name: impl Into<String>,
        ty: SourceType,
    ) -> Result<SourceHandle<'_>, DefinitionError> {
        let name = name.into();
        if self.layer.source(&name).is_some() {
            return Err(DefinitionError::DuplicateSource(name));
        }

        self.layer.sources.push(SourceDefinition {
            name,
            ty,
            bindings: Vec::new(),
        });
        let source = self.layer.sources.last_mut().expect("source was just pushed");
        Ok(SourceHandle { source })
    }

    pub fn define_action(
        &mut self,
        name: impl Into<String>,
        data_type: DataType,
    ) -> Result<ActionHandle<'_>, DefinitionError> {
        let name = name.into();
        if self.layer.action(&name).is_some() {
            return Err(DefinitionError::DuplicateAction(name));
        }

        self.layer.actions.push(ActionDefinition {
            name,
            data_type,
            behavior: Behavior::Default,
            condition_series: Vec::new(),
            modifiers: Vec::new(),
        });
        let action = self.layer.actions.last_mut().expect("action was just pushed");
        Ok(ActionHandle { action })
    }

    /// Closes the layer.
    ///
    /// With `check_references`, every condition and step that names a source
    /// or action must resolve within this layer.
    pub fn finish(self, check_references: bool) -> Result<ActionLayer, DefinitionError> {
        let layer = self.layer;
        for action in &layer.actions {
            for series in &action.condition_series {
                series.ensure_closed(&action.name);
            }
        }

        if check_references {
            resolve_references(&layer)?;
        }
        Ok(layer)
    }
}

fn resolve_references(layer: &ActionLayer) -> Result<(), DefinitionError> {
    let check = |action: &str, name: &str, from_action: bool| {
        let base = base_name(name);
        let found = if from_action {
            layer.action(base).is_some()
        } else {
            layer.source(base).is_some()
        };
        if found {
            return Ok(());
        }
        Err(DefinitionError::UndefinedReference {
            action: action.to_owned(),
            name: name.to_owned(),
            category: if from_action { "action" } else { "source" },
        })
    };

    for action in &layer.actions {
        for condition in action.condition_series.iter().flat_map(|s| &s.conditions) {
            check(&action.name, &condition.source_name, condition.from_action)?;

            for step in &condition.steps {
                match &step.source {
                    Some(StepSource::Source(name)) => check(&action.name, name, false)?,
                    Some(StepSource::Action(name)) => check(&action.name, name, true)?,
                    Some(StepSource::Value(_)) | None => {}
                }
            }
        }
    }
    Ok(())
}

pub struct SourceHandle<'l> {
    source: &'l mut SourceDefinition,
}

impl SourceHandle<'_> {
    pub fn name(&self) -> &str {
        &self.source.name
    }

    pub fn add_key(&mut self, key: KeyboardKey) -> Result<(), DefinitionError> {
        self.push(Binding::Key(key))
    }

    pub fn add_button(&mut self, button: ButtonInput) -> Result<(), DefinitionError> {
        self.push(Binding::Button(button))
    }

    pub fn add_axis(&mut self, axis: AxisInput) -> Result<(), DefinitionError> {
        self.push(Binding::Axis(axis))
    }

    pub fn add_binding(&mut self, binding: Binding) -> Result<(), DefinitionError> {
        match binding {
            Binding::Key(key) => self.add_key(key),
            Binding::Button(button) => self.add_button(button),
            Binding::Axis(axis) => self.add_axis(axis),
        }
    }

    fn push(&mut self, binding: Binding) -> Result<(), DefinitionError> {
        if !self.source.ty.accepts(&binding) {
            return Err(DefinitionError::IncompatibleBinding {
                source_name: self.source.name.clone(),
                binding: binding.to_string(),
                ty: self.source.ty,
            });
        }
        self.source.bindings.push(binding);
        Ok(())
    }
}

pub struct ActionHandle<'l> {
    action: &'l mut ActionDefinition,
}

impl ActionHandle<'_> {
    pub fn name(&self) -> &str {
        &self.action.name
    }

    /// Switches the action away from the default behavior.
    ///
    /// Setting the same behavior twice is accepted; two different
    /// non-default behaviors conflict.
    pub fn set_behavior(&mut self, behavior: Behavior) -> Result<(), DefinitionError> {
        let current = self.action.behavior;
        if current != Behavior::Default && current != behavior {
            return Err(DefinitionError::ConflictingBehavior {
                action: self.action.name.clone(),
                first: current,
                second: behavior,
            });
        }
        self.action.behavior = behavior;
        Ok(())
    }

    pub fn add_condition_series(&mut self) -> SeriesHandle<'_> {
        self.action.condition_series.push(ConditionSeries::default());
        let series = self
            .action
            .condition_series
            .last_mut()
            .expect("series was just pushed");
        SeriesHandle { series }
    }

    pub fn add_modifier(&mut self, modifier: Modifier) {
        self.action.modifiers.push(modifier);
    }
}

pub struct SeriesHandle<'a> {
    series: &'a mut ConditionSeries,
}

impl SeriesHandle<'_> {
    pub fn add_condition(
        &mut self,
        source_name: impl Into<String>,
        kind: ConditionKind,
        flags: ConditionFlags,
        param: Option<f32>,
        from_action: bool,
    ) {
        self.series.conditions.push(Condition {
            source_name: source_name.into(),
            from_action,
            kind,
            flags,
            param,
            steps: Vec::new(),
        });
    }

    /// Attaches a step to the most recently added condition.
    pub fn add_step(&mut self, step: Step) {
        let condition = self.series.ensure_last_condition();
        condition.flags |= ConditionFlags::RUN_STEPS;
        condition.steps.push(step);
    }

    pub fn set_finished(&mut self) {
        self.series.finished = true;
    }

    pub fn len(&self) -> usize {
        self.series.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.conditions.is_empty()
    }
}
