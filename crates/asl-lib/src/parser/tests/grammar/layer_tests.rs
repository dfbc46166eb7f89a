use indoc::indoc;

fn dump(input: &str) -> String {
    crate::parse(input).unwrap().dump()
}

#[test]
fn empty_script() {
    insta::assert_snapshot!(dump(""), @"Script");
    insta::assert_snapshot!(dump("\n  // nothing here\n\n"), @"Script");
}

#[test]
fn empty_layer() {
    insta::assert_snapshot!(dump("layer Player:"), @r#"
    Script
      Layer name="Player"
    "#);
}

#[test]
fn constants() {
    let input = indoc! {r#"
    layer Player:
        constant speed = 4
        constant mouse.sensitivity = 0.25
        constant dead_zone = -0.1
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Script
      Layer name="Player"
        Constant name="speed" param="4"
        Constant name="mouse.sensitivity" param="0.25"
        Constant name="dead_zone" param="-0.1"
    "#);
}

#[test]
fn layers_in_source_order() {
    let input = indoc! {r#"
    # gameplay bindings
    layer Player:
        constant speed = 4

    layer Menu:   // navigation only
        constant repeat = 0.2
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Script
      Layer name="Player"
        Constant name="speed" param="4"
      Layer name="Menu"
        Constant name="repeat" param="0.2"
    "#);
}

#[test]
fn items_interleave() {
    let input = indoc! {r#"
    layer Player:
        source button Jump: kb.space
        constant height = 2
        action Jump: bool
        source axis1d Throttle
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    Script
      Layer name="Player"
        Source type="button" name="Jump"
          SourceBinding device="kb" source="space"
        Constant name="height" param="2"
        Action name="Jump" type="bool"
        Source type="axis1d" name="Throttle"
    "#);
}
