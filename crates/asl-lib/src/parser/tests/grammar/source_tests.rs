use indoc::indoc;

fn dump(input: &str) -> String {
    crate::parse(input).unwrap().dump()
}

#[test]
fn source_without_bindings() {
    let input = indoc! {r#"
    layer Player:
        source axis2d Move
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Script
      Layer name="Player"
        Source type="axis2d" name="Move"
    "#);
}

#[test]
fn bindings_chain_in_order() {
    let input = indoc! {r#"
    layer Player:
        source button Jump: kb.space, gp.a, mouse.right
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Script
      Layer name="Player"
        Source type="button" name="Jump"
          SourceBinding device="kb" source="space"
          SourceBinding device="gp" source="a"
          SourceBinding device="mouse" source="right"
    "#);
}

#[test]
fn digit_keys() {
    let input = indoc! {r#"
    layer Hotbar:
        source key Slot1: kb.1
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Script
      Layer name="Hotbar"
        Source type="key" name="Slot1"
          SourceBinding device="kb" source="1"
    "#);
}

#[test]
fn every_source_type() {
    let input = indoc! {r#"
    layer Player:
        source key A
        source button B
        source axis1d C
        source axis2d D
        source axis3d E
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Script
      Layer name="Player"
        Source type="key" name="A"
        Source type="button" name="B"
        Source type="axis1d" name="C"
        Source type="axis2d" name="D"
        Source type="axis3d" name="E"
    "#);
}

#[test]
fn binding_needs_an_input() {
    let input = indoc! {r#"
    layer Player:
        source button Jump: kb
    "#};

    let err = crate::parse(input).unwrap_err();
    assert_eq!(err.found, crate::parser::TokenKind::EndOfLine);
    assert_eq!(err.expected, vec![crate::parser::TokenKind::Dot]);
}

#[test]
fn trailing_comma_is_rejected() {
    let input = indoc! {r#"
    layer Player:
        source button Jump: kb.space,
    "#};

    let err = crate::parse(input).unwrap_err();
    assert_eq!(err.found, crate::parser::TokenKind::EndOfLine);
    assert_eq!(err.expected, vec![crate::parser::TokenKind::Symbol]);
}
