use crate::{
    Behavior, Binding, ConditionFlags, ConditionKind, DataType, DefinitionError, KeyboardKey,
    LayerBuilder, SourceType, Step, StepKind, StepSource,
};

#[test]
fn define_source_with_key_binding() {
    let mut builder = LayerBuilder::new("Player");
    let mut source = builder.define_source("Jump", SourceType::Button).unwrap();
    source.add_key(KeyboardKey::Space).unwrap();

    let layer = builder.finish(true).unwrap();
    let jump = layer.source("Jump").unwrap();
    assert_eq!(jump.bindings, vec![Binding::Key(KeyboardKey::Space)]);
}

#[test]
fn duplicate_names_per_kind() {
    let mut builder = LayerBuilder::new("Player");
    builder.define_source("Jump", SourceType::Button).unwrap();
    builder.define_action("Jump", DataType::Bool).unwrap();

    assert_eq!(
        builder.define_source("Jump", SourceType::Key).err(),
        Some(DefinitionError::DuplicateSource("Jump".into()))
    );
    assert_eq!(
        builder.define_action("Jump", DataType::Bool).err(),
        Some(DefinitionError::DuplicateAction("Jump".into()))
    );
}

#[test]
fn duplicate_constant() {
    let mut builder = LayerBuilder::new("Player");
    builder.set_constant("speed", 1.0).unwrap();
    assert_eq!(
        builder.set_constant("speed", 2.0),
        Err(DefinitionError::DuplicateConstant("speed".into()))
    );
}

#[test]
fn incompatible_binding() {
    let mut builder = LayerBuilder::new("Player");
    let mut source = builder.define_source("Look", SourceType::Axis1d).unwrap();
    let err = source
        .add_binding(Binding::resolve("mouse", "pos").unwrap())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "binding `mouse.pos` cannot drive axis1d source `Look`"
    );
}

#[test]
fn behavior_conflicts() {
    let mut builder = LayerBuilder::new("Player");
    let mut action = builder.define_action("Crouch", DataType::Bool).unwrap();
    action.set_behavior(Behavior::Toggled).unwrap();
    action.set_behavior(Behavior::Toggled).unwrap();

    let err = action.set_behavior(Behavior::ActiveOnce).unwrap_err();
    assert_eq!(
        err.to_string(),
        "action `Crouch` cannot be both toggled and once"
    );
}

#[test]
fn steps_attach_to_last_condition() {
    let mut builder = LayerBuilder::new("Player");
    builder.define_source("Jump", SourceType::Button).unwrap();
    let mut action = builder.define_action("Jump", DataType::Bool).unwrap();
    let mut series = action.add_condition_series();
    series.add_condition("Jump", ConditionKind::Pressed, ConditionFlags::empty(), None, false);
    series.add_condition(
        "Jump",
        ConditionKind::Released,
        ConditionFlags::SERIES_OR,
        None,
        false,
    );
    series.add_step(Step::verb(StepKind::Deactivate));
    series.set_finished();

    let layer = builder.finish(true).unwrap();
    let series = &layer.action("Jump").unwrap().condition_series[0];
    assert!(series.finished);
    assert!(series.conditions[0].steps.is_empty());
    assert_eq!(series.conditions[1].steps, vec![Step::verb(StepKind::Deactivate)]);
    assert_eq!(
        series.conditions[1].flags,
        ConditionFlags::SERIES_OR | ConditionFlags::RUN_STEPS
    );
}

#[test]
fn undefined_references() {
    let mut builder = LayerBuilder::new("Player");
    let mut action = builder.define_action("Fire", DataType::Bool).unwrap();
    let mut series = action.add_condition_series();
    series.add_condition("Trigger.x", ConditionKind::Greater, ConditionFlags::empty(), Some(0.5), false);
    series.set_finished();

    let err = builder.finish(true).unwrap_err();
    assert_eq!(
        err,
        DefinitionError::UndefinedReference {
            action: "Fire".into(),
            name: "Trigger.x".into(),
            category: "source",
        }
    );
}

#[test]
fn unchecked_references() {
    let mut builder = LayerBuilder::new("Player");
    let mut action = builder.define_action("Fire", DataType::Float1).unwrap();
    let mut series = action.add_condition_series();
    series.add_condition("Fire", ConditionKind::Active, ConditionFlags::empty(), None, true);
    series.add_step(Step::assign(
        StepKind::Add,
        crate::Component::X,
        StepSource::Action("Charge".into()),
    ));
    series.set_finished();

    assert!(builder.finish(false).is_ok());
}

#[test]
#[should_panic(expected = "never finished")]
fn unfinished_series_is_a_builder_defect() {
    let mut builder = LayerBuilder::new("Player");
    let mut action = builder.define_action("Jump", DataType::Bool).unwrap();
    let mut series = action.add_condition_series();
    series.add_condition("Jump", ConditionKind::Pressed, ConditionFlags::empty(), None, true);
    let _ = builder.finish(false);
}
