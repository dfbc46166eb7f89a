use indoc::indoc;

fn dump(input: &str) -> String {
    crate::parse(input).unwrap().dump()
}

#[test]
fn bare_action() {
    let input = indoc! {r#"
    layer Player:
        action Look: float2
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Script
      Layer name="Player"
        Action name="Look" type="float2"
    "#);
}

#[test]
fn behavior_flags() {
    let input = indoc! {r#"
    layer Player:
        action Jump: bool, once
        action Crouch: bool, toggled
        action Both: object, once, toggled
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Script
      Layer name="Player"
        Action name="Jump" type="bool" once
        Action name="Crouch" type="bool" toggled
        Action name="Both" type="object" once toggled
    "#);
}

#[test]
fn modifiers() {
    let input = indoc! {r#"
    layer Player:
        action Look: float3
            mod.x mul 2
            mod.y min -1
            mod.z div 0.5
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Script
      Layer name="Player"
        Action name="Look" type="float3"
          Modifier component="x" operation="mul" param="2"
          Modifier component="y" operation="min" param="-1"
          Modifier component="z" operation="div" param="0.5"
    "#);
}

#[test]
fn conditions_then_modifiers() {
    let input = indoc! {r#"
    layer Player:
        action Jump: bool, once
            when source.Jump.pressed
            .activate
            and .released
            mod.x mul 2
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Script
      Layer name="Player"
        Action name="Jump" type="bool" once
          Condition type="when" source_type="source" source_name="Jump" check="pressed"
            Step step="activate"
          Condition type="and" check="released"
          Modifier component="x" operation="mul" param="2"
    "#);
}

#[test]
fn unknown_data_type() {
    let input = "layer Player:\n    action Jump: int\n";

    let err = crate::parse(input).unwrap_err();
    assert_eq!(err.text, "int");
    insta::assert_snapshot!(err, @"unexpected name `int` at 2:18, expected bool, float1, float2, float3 or object");
}

#[test]
fn modifier_needs_a_number() {
    let input = "layer Player:\n    action Look: float2\n        mod.x mul y\n";

    let err = crate::parse(input).unwrap_err();
    assert_eq!(err.found, crate::parser::TokenKind::Symbol);
    assert_eq!(err.expected, vec![crate::parser::TokenKind::Number]);
}
