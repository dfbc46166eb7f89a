use indoc::indoc;

use crate::parser::TokenKind;

fn dump(input: &str) -> String {
    crate::parse(input).unwrap().dump()
}

#[test]
fn condition_shapes() {
    let input = indoc! {r#"
    layer Player:
        action Fire: bool
            when action.pressed
            and source.Move.x > 0.5
            or Trigger.released
            and Stick.x <= -1
            or .changed
            and action.Reload.active 2
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Script
      Layer name="Player"
        Action name="Fire" type="bool"
          Condition type="when" source_type="action" check="pressed"
          Condition type="and" source_type="source" source_name="Move.x" check=">" param="0.5"
          Condition type="or" source_name="Trigger" check="released"
          Condition type="and" source_name="Stick.x" check="<=" param="-1"
          Condition type="or" check="changed"
          Condition type="and" source_type="action" source_name="Reload" check="active" param="2"
    "#);
}

#[test]
fn every_check_keyword() {
    let input = indoc! {r#"
    layer Player:
        action Fire: bool
            when .pressed
            or .released
            or .active
            or .inactive
            or .changed
            or .enabled
            or .disabled
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Script
      Layer name="Player"
        Action name="Fire" type="bool"
          Condition type="when" check="pressed"
          Condition type="or" check="released"
          Condition type="or" check="active"
          Condition type="or" check="inactive"
          Condition type="or" check="changed"
          Condition type="or" check="enabled"
          Condition type="or" check="disabled"
    "#);
}

#[test]
fn every_comparison() {
    let input = indoc! {r#"
    layer Player:
        action Fire: bool
            when Axis == 1
            or Axis != 1
            or Axis > 1
            or Axis >= 1
            or Axis < 1
            or Axis <= 1
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Script
      Layer name="Player"
        Action name="Fire" type="bool"
          Condition type="when" source_name="Axis" check="==" param="1"
          Condition type="or" source_name="Axis" check="!=" param="1"
          Condition type="or" source_name="Axis" check=">" param="1"
          Condition type="or" source_name="Axis" check=">=" param="1"
          Condition type="or" source_name="Axis" check="<" param="1"
          Condition type="or" source_name="Axis" check="<=" param="1"
    "#);
}

#[test]
fn series_flag() {
    let input = indoc! {r#"
    layer Player:
        action Fire: bool
            when source.Trigger.pressed, series
            and Ammo > 0, series
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Script
      Layer name="Player"
        Action name="Fire" type="bool"
          Condition type="when" source_type="source" source_name="Trigger" check="pressed" series
          Condition type="and" source_name="Ammo" check=">" param="0" series
    "#);
}

#[test]
fn comparison_needs_a_number() {
    let input = indoc! {r#"
    layer Player:
        action Fire: bool
            when Trigger > high
    "#};

    let err = crate::parse(input).unwrap_err();
    assert_eq!(err.found, TokenKind::Symbol);
    assert_eq!(err.expected, vec![TokenKind::Number]);
}

#[test]
fn unknown_check() {
    let input = indoc! {r#"
    layer Player:
        action Fire: bool
            when .held
    "#};

    let err = crate::parse(input).unwrap_err();
    assert_eq!(err.text, "held");
    assert_eq!(
        err.expected,
        vec![
            TokenKind::CtPressed,
            TokenKind::CtReleased,
            TokenKind::CtActive,
            TokenKind::CtInactive,
            TokenKind::CtChanged,
            TokenKind::CtEnabled,
            TokenKind::CtDisabled,
        ]
    );
}

#[test]
fn unknown_flag() {
    let input = indoc! {r#"
    layer Player:
        action Fire: bool
            when .pressed, once
    "#};

    let err = crate::parse(input).unwrap_err();
    assert_eq!(err.found, TokenKind::KwOnce);
    assert_eq!(err.expected, vec![TokenKind::KwSeries]);
}
