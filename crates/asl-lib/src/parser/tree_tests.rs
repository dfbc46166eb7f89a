use super::token::{Location, Span, Token, TokenKind};
use super::tree::{Field, Lexeme, NodeKind, SyntaxTree};

fn lexeme(kind: TokenKind, start: usize, end: usize) -> Lexeme {
    Lexeme {
        kind,
        span: Span::new(start, end),
        location: Location::new(1, start as u32 + 1),
    }
}

#[test]
fn new_tree_holds_the_root() {
    let tree = SyntaxTree::new("");
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.get(tree.root()).kind(), NodeKind::Script);
    insta::assert_snapshot!(tree.dump(), @"Script");
}

#[test]
fn children_keep_append_order() {
    let mut tree = SyntaxTree::new("");
    let root = tree.root();
    let a = tree.alloc(NodeKind::Constant);
    let b = tree.alloc(NodeKind::Source);
    let c = tree.alloc(NodeKind::Action);
    tree.append_child(root, a);
    tree.append_child(root, b);
    tree.append_sibling(a, c);

    let kinds: Vec<_> = tree.children(root).map(|id| tree.get(id).kind()).collect();
    assert_eq!(
        kinds,
        vec![NodeKind::Constant, NodeKind::Source, NodeKind::Action]
    );
    assert_eq!(tree.siblings_from(b).count(), 2);
}

#[test]
fn discard_drops_later_nodes() {
    let mut tree = SyntaxTree::new("");
    let layer = tree.alloc(NodeKind::Layer);
    tree.alloc(NodeKind::Action);
    tree.alloc(NodeKind::Condition);
    assert_eq!(tree.len(), 4);

    tree.discard(layer);
    assert_eq!(tree.len(), 1);
}

#[test]
fn dump_prints_fields_and_flags() {
    let source = "Jump bool once";
    let mut tree = SyntaxTree::new(source);
    let layer = tree.alloc(NodeKind::Layer);
    let action = tree.alloc(NodeKind::Action);
    tree.append_child(tree.root(), layer);
    tree.append_child(layer, action);

    let data = &mut tree.get_mut(action).data;
    *data.slot(Field::Name).unwrap() = Some(lexeme(TokenKind::Symbol, 0, 4));
    *data.slot(Field::Type).unwrap() = Some(lexeme(TokenKind::TyBool, 5, 9));
    *data.slot(Field::FlagOnce).unwrap() = Some(lexeme(TokenKind::KwOnce, 10, 14));

    insta::assert_snapshot!(tree.dump(), @r#"
    Script
      Layer
        Action name="Jump" type="bool" once
    "#);
}

#[test]
fn unknown_field_has_no_slot() {
    let mut tree = SyntaxTree::new("");
    let layer = tree.alloc(NodeKind::Layer);
    assert!(tree.get_mut(layer).data.slot(Field::Device).is_none());
    assert!(tree.get_mut(layer).data.slot(Field::Name).is_some());
}

#[test]
fn root_has_no_fields() {
    let mut tree = SyntaxTree::new("");
    let root = tree.root();
    assert!(tree.get_mut(root).data.slot(Field::Name).is_none());
    insta::assert_snapshot!(tree.dump(), @"Script");
}

#[test]
fn extended_lexeme_drops_whitespace() {
    let source = "Move . x";
    let first = Token::new(TokenKind::Symbol, "Move", Span::new(0, 4), Location::new(1, 1));
    let last = Token::new(TokenKind::Symbol, "x", Span::new(7, 8), Location::new(1, 8));

    let mut name = Lexeme::new(&first);
    assert_eq!(name.text(source), "Move");

    name.extend(&last);
    assert_eq!(name.span, Span::new(0, 8));
    assert_eq!(name.location, Location::new(1, 1));
    assert_eq!(name.text(source), "Move.x");
}
