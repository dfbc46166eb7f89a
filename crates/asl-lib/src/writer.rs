//! Writes action layers back as ASL text.
//!
//! The output parses back into an equal layer. Conditions are always written
//! with an explicit category (`action.Jump.pressed`, `source.Move.x > 0.5`),
//! so bare checks come back in their expanded form.

use std::fmt::{self, Write};

use asl_core::{
    ActionDefinition, ActionLayer, Condition, ConditionFlags, Modifier, SourceDefinition, Step,
    StepSource,
};

/// Writes several layers, separated by a blank line.
pub fn write_script(layers: &[ActionLayer]) -> String {
    let mut out = String::new();
    for (i, layer) in layers.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        format_layer(layer, &mut out).expect("String write never fails");
    }
    out
}

pub fn write_layer(layer: &ActionLayer) -> String {
    let mut out = String::new();
    format_layer(layer, &mut out).expect("String write never fails");
    out
}

fn format_layer(layer: &ActionLayer, w: &mut impl Write) -> fmt::Result {
    writeln!(w, "layer {}:", layer.name)?;
    for (name, value) in &layer.constants {
        writeln!(w, "    constant {name} = {value}")?;
    }
    for source in &layer.sources {
        format_source(source, w)?;
    }
    for action in &layer.actions {
        format_action(action, w)?;
    }
    Ok(())
}

fn format_source(source: &SourceDefinition, w: &mut impl Write) -> fmt::Result {
    write!(w, "    source {} {}", source.ty, source.name)?;
    for (i, binding) in source.bindings.iter().enumerate() {
        w.write_str(if i == 0 { ": " } else { ", " })?;
        write!(w, "{binding}")?;
    }
    writeln!(w)
}

fn format_action(action: &ActionDefinition, w: &mut impl Write) -> fmt::Result {
    write!(w, "    action {}: {}", action.name, action.data_type)?;
    if let Some(flag) = action.behavior.flag() {
        write!(w, ", {flag}")?;
    }
    writeln!(w)?;

    for series in &action.condition_series {
        for condition in &series.conditions {
            format_condition(condition, w)?;
        }
    }
    for modifier in &action.modifiers {
        format_modifier(modifier, w)?;
    }
    Ok(())
}

fn format_condition(condition: &Condition, w: &mut impl Write) -> fmt::Result {
    let connective = if condition.flags.contains(ConditionFlags::SERIES_AND) {
        "and"
    } else if condition.flags.contains(ConditionFlags::SERIES_OR) {
        "or"
    } else {
        "when"
    };
    let category = if condition.from_action { "action" } else { "source" };
    write!(w, "        {connective} {category}.{}", condition.source_name)?;

    if condition.kind.is_comparison() {
        write!(w, " {}", condition.kind)?;
    } else {
        write!(w, ".{}", condition.kind)?;
    }
    if let Some(param) = condition.param {
        write!(w, " {param}")?;
    }
    if condition.flags.contains(ConditionFlags::SERIES_CHECK) {
        w.write_str(", series")?;
    }
    writeln!(w)?;

    for step in &condition.steps {
        format_step(step, w)?;
    }
    Ok(())
}

fn format_step(step: &Step, w: &mut impl Write) -> fmt::Result {
    w.write_str("        .")?;
    let (Some(destination), Some(source)) = (step.destination, &step.source) else {
        return writeln!(w, "{}", step.kind);
    };

    write!(w, "{destination} {} ", step.kind)?;
    match source {
        StepSource::Value(value) => writeln!(w, "{value}"),
        StepSource::Source(name) => writeln!(w, "source.{name}"),
        StepSource::Action(name) => writeln!(w, "action.{name}"),
    }
}

fn format_modifier(modifier: &Modifier, w: &mut impl Write) -> fmt::Result {
    writeln!(
        w,
        "        mod.{} {} {}",
        modifier.component, modifier.operation, modifier.param
    )
}
