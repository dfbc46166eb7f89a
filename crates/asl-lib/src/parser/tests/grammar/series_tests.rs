use indoc::indoc;

use crate::parser::TokenKind;

fn dump(input: &str) -> String {
    crate::parse(input).unwrap().dump()
}

#[test]
fn steps_hang_below_their_condition() {
    let input = indoc! {r#"
    layer Player:
        action Look: float2
            when source.Look.changed
            .x = source.Look.x
            .y += 1
            .time
            and action.Look.active .activate .reset
            mod.y mul -1
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Script
      Layer name="Player"
        Action name="Look" type="float2"
          Condition type="when" source_type="source" source_name="Look" check="changed"
            Step step="=" destination="x" source_type="source" source="Look.x"
            Step step="+=" destination="y" source="1"
            Step step="time"
          Condition type="and" source_type="action" source_name="Look" check="active"
            Step step="activate"
            Step step="reset"
          Modifier component="y" operation="mul" param="-1"
    "#);
}

#[test]
fn step_sources() {
    let input = indoc! {r#"
    layer Player:
        action Aim: float2
            when .active
            .x = action.Look.y
            .y -= Stick.y
            .z = 0.5
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Script
      Layer name="Player"
        Action name="Aim" type="float2"
          Condition type="when" check="active"
            Step step="=" destination="x" source_type="action" source="Look.y"
            Step step="-=" destination="y" source="Stick.y"
            Step step="=" destination="z" source="0.5"
    "#);
}

#[test]
fn when_opens_another_series() {
    let input = indoc! {r#"
    layer Player:
        action Crouch: bool, toggled
            when source.Crouch.pressed
            .toggle
            when source.Sprint.pressed
            .deactivate
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Script
      Layer name="Player"
        Action name="Crouch" type="bool" toggled
          Condition type="when" source_type="source" source_name="Crouch" check="pressed"
            Step step="toggle"
          Condition type="when" source_type="source" source_name="Sprint" check="pressed"
            Step step="deactivate"
    "#);
}

#[test]
fn series_ends_at_next_item() {
    let input = indoc! {r#"
    layer Player:
        action Jump: bool
            when .pressed
        source button Jump: kb.space
    layer Menu:
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Script
      Layer name="Player"
        Action name="Jump" type="bool"
          Condition type="when" check="pressed"
        Source type="button" name="Jump"
          SourceBinding device="kb" source="space"
      Layer name="Menu"
    "#);
}

#[test]
fn when_must_start_a_line() {
    let input = indoc! {r#"
    layer Player:
        action Jump: bool
            when .pressed when .released
    "#};

    let err = crate::parse(input).unwrap_err();
    assert_eq!(err.found, TokenKind::KwWhen);
    insta::assert_snapshot!(err, @"unexpected when `when` at 3:23, expected and, or, `.`, `,` or end of line");
}

#[test]
fn stray_line_inside_series() {
    let input = indoc! {r#"
    layer Player:
        action Jump: bool
            when .pressed
            Jump
    "#};

    let err = crate::parse(input).unwrap_err();
    assert_eq!(err.found, TokenKind::Symbol);
    assert_eq!(err.location, crate::Location::new(4, 9));
    assert!(err.expected.contains(&TokenKind::KwWhen));
    assert!(err.expected.contains(&TokenKind::KwMod));
}

#[test]
fn series_cannot_follow_modifiers() {
    let input = indoc! {r#"
    layer Player:
        action Jump: bool
            mod.x mul 2
            when .pressed
    "#};

    let err = crate::parse(input).unwrap_err();
    assert_eq!(err.found, TokenKind::KwWhen);
    assert!(!err.expected.contains(&TokenKind::KwWhen));
    assert_eq!(
        err.expected,
        vec![
            TokenKind::KwMod,
            TokenKind::KwConstant,
            TokenKind::KwSource,
            TokenKind::KwAction,
            TokenKind::KwLayer,
            TokenKind::EndOfFile,
        ]
    );
}

#[test]
fn unknown_step() {
    let input = indoc! {r#"
    layer Player:
        action Jump: bool
            when .pressed
            .jump
    "#};

    let err = crate::parse(input).unwrap_err();
    assert_eq!(err.found, TokenKind::EndOfLine);
    assert_eq!(
        err.expected,
        vec![
            TokenKind::OpAssign,
            TokenKind::OpAddAssign,
            TokenKind::OpSubAssign
        ]
    );
}
