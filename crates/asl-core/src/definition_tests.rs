use crate::{
    ActionLayer, Binding, Component, ConditionFlags, ConditionKind, DataType, LayerBuilder,
    Modifier, ModifierOp, SourceType, Step, StepKind, StepSource,
};

fn sample_layer() -> ActionLayer {
    let mut builder = LayerBuilder::new("Player");
    builder.set_constant("mouse.sensitivity", 0.25).unwrap();
    builder
        .define_source("Move", SourceType::Axis2d)
        .unwrap()
        .add_binding(Binding::resolve("gp", "left_stick").unwrap())
        .unwrap();

    let mut action = builder.define_action("Move", DataType::Float2).unwrap();
    let mut series = action.add_condition_series();
    series.add_condition("Move", ConditionKind::Changed, ConditionFlags::empty(), None, false);
    series.add_step(Step::assign(
        StepKind::Set,
        Component::X,
        StepSource::Source("Move.x".into()),
    ));
    series.set_finished();
    action.add_modifier(Modifier {
        component: Component::Y,
        operation: ModifierOp::Mul,
        param: -1.0,
    });

    builder.finish(true).unwrap()
}

#[test]
fn source_type_accepts_bindings() {
    let key = Binding::resolve("kb", "space").unwrap();
    let button = Binding::resolve("gp", "a").unwrap();
    let stick = Binding::resolve("gp", "left_stick").unwrap();
    let trigger = Binding::resolve("gp", "lt").unwrap();

    assert!(SourceType::Key.accepts(&key));
    assert!(!SourceType::Key.accepts(&button));
    assert!(SourceType::Button.accepts(&key));
    assert!(SourceType::Button.accepts(&button));
    assert!(!SourceType::Button.accepts(&stick));
    assert!(SourceType::Axis1d.accepts(&trigger));
    assert!(!SourceType::Axis1d.accepts(&stick));
    assert!(SourceType::Axis2d.accepts(&stick));
    assert!(SourceType::Axis3d.accepts(&stick));
    assert!(!SourceType::Axis2d.accepts(&key));
}

#[test]
fn comparison_kinds() {
    assert!(ConditionKind::Greater.is_comparison());
    assert!(!ConditionKind::Pressed.is_comparison());
    assert_eq!(ConditionKind::from_name(">="), Some(ConditionKind::GreaterOrEqual));
}

#[test]
fn lookup_by_name() {
    let layer = sample_layer();
    assert_eq!(layer.constant("mouse.sensitivity"), Some(0.25));
    assert!(layer.source("Move").is_some());
    assert!(layer.action("Move").is_some());
    assert!(layer.action("Jump").is_none());
}

#[test]
fn binary_encoding_round_trip() {
    let layer = sample_layer();
    let bytes = layer.to_bytes().unwrap();
    assert_eq!(ActionLayer::from_bytes(&bytes).unwrap(), layer);
}

#[test]
fn binary_encoding_of_a_layer_list() {
    let mut menu = sample_layer();
    menu.name = "Menu".to_owned();
    let layers = vec![sample_layer(), menu];

    let bytes = ActionLayer::list_to_bytes(&layers).unwrap();
    assert_eq!(ActionLayer::list_from_bytes(&bytes).unwrap(), layers);
    assert_eq!(ActionLayer::list_from_bytes(&[0]).unwrap(), Vec::new());
}

#[test]
fn json_encoding_keeps_flags_as_bits() {
    let layer = sample_layer();
    let json = serde_json::to_value(&layer).unwrap();
    let flags = &json["actions"][0]["condition_series"][0]["conditions"][0]["flags"];
    assert_eq!(flags, &serde_json::json!(ConditionFlags::RUN_STEPS.bits()));
}
