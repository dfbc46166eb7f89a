//! Arena-allocated syntax tree.
//!
//! Nodes live in one growable vector and refer to each other by index.
//! A node has no list of children: its children are its first child plus
//! that child's sibling chain. This lets the grammar grow the tree one node at
//! a time without knowing the final shape (conditions chain as siblings, steps
//! hang below the one condition that owns them).

use std::borrow::Cow;
use std::fmt::Write;

use super::token::{Location, Span, Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Script,
    Layer,
    Constant,
    Source,
    SourceBinding,
    Action,
    Condition,
    Step,
    Modifier,
}

/// Destination of a capture. Each node kind accepts a fixed subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Param,
    Type,
    SourceType,
    SourceName,
    Device,
    Source,
    Destination,
    ConditionKind,
    StepKind,
    Component,
    Operation,
    FlagOnce,
    FlagToggled,
    FlagSeries,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Param => "param",
            Field::Type => "type",
            Field::SourceType => "source_type",
            Field::SourceName => "source_name",
            Field::Device => "device",
            Field::Source => "source",
            Field::Destination => "destination",
            Field::ConditionKind => "check",
            Field::StepKind => "step",
            Field::Component => "component",
            Field::Operation => "operation",
            Field::FlagOnce => "once",
            Field::FlagToggled => "toggled",
            Field::FlagSeries => "series",
        }
    }

    /// Flags are captured like any field but only their presence matters.
    pub fn is_flag(self) -> bool {
        matches!(self, Field::FlagOnce | Field::FlagToggled | Field::FlagSeries)
    }
}

/// A captured token, or several adjacent ones after an extend capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme {
    /// Kind of the first captured token.
    pub kind: TokenKind,
    pub span: Span,
    pub location: Location,
}

impl Lexeme {
    pub fn new(token: &Token<'_>) -> Self {
        Self {
            kind: token.kind,
            span: token.span,
            location: token.location,
        }
    }

    /// Grows the lexeme to cover `token` as well (`axis` + `x` → `axis.x`).
    pub fn extend(&mut self, token: &Token<'_>) {
        self.span = self.span.cover(token.span);
    }

    /// Source text of the lexeme with any interior whitespace removed.
    pub fn text<'src>(&self, source: &'src str) -> Cow<'src, str> {
        let raw = &source[self.span.as_range()];
        if raw.contains(char::is_whitespace) {
            Cow::Owned(raw.split_whitespace().collect())
        } else {
            Cow::Borrowed(raw)
        }
    }
}

macro_rules! syntax_node {
    ($(#[$meta:meta])* $name:ident {}) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {}

        impl $name {
            fn slot(&mut self, _: Field) -> Option<&mut Option<Lexeme>> {
                None
            }

            fn for_each_field(&self, _: &mut dyn FnMut(Field, &Lexeme)) {}
        }
    };
    ($(#[$meta:meta])* $name:ident { $($field:ident => $tag:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            $(pub $field: Option<Lexeme>,)*
        }

        impl $name {
            fn slot(&mut self, field: Field) -> Option<&mut Option<Lexeme>> {
                match field {
                    $(Field::$tag => Some(&mut self.$field),)*
                    _ => None,
                }
            }

            fn for_each_field(&self, f: &mut dyn FnMut(Field, &Lexeme)) {
                $(
                    if let Some(lexeme) = &self.$field {
                        f(Field::$tag, lexeme);
                    }
                )*
            }
        }
    };
}

syntax_node!(ScriptNode {});
syntax_node!(LayerNode { name => Name });
syntax_node!(ConstantNode { name => Name, param => Param });
syntax_node!(SourceNode { ty => Type, name => Name });
syntax_node!(BindingNode { device => Device, source => Source });
syntax_node!(ActionNode {
    name => Name,
    ty => Type,
    flag_once => FlagOnce,
    flag_toggled => FlagToggled,
});
syntax_node!(ConditionNode {
    ty => Type,
    source_type => SourceType,
    source_name => SourceName,
    condition_kind => ConditionKind,
    param => Param,
    flag_series => FlagSeries,
});
syntax_node!(StepNode {
    step_kind => StepKind,
    destination => Destination,
    source_type => SourceType,
    source => Source,
});
syntax_node!(ModifierNode {
    component => Component,
    operation => Operation,
    param => Param,
});

/// Kind-specific payload of a node, filled in by captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Script(ScriptNode),
    Layer(LayerNode),
    Constant(ConstantNode),
    Source(SourceNode),
    SourceBinding(BindingNode),
    Action(ActionNode),
    Condition(ConditionNode),
    Step(StepNode),
    Modifier(ModifierNode),
}

impl NodeData {
    pub fn new(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Script => NodeData::Script(ScriptNode::default()),
            NodeKind::Layer => NodeData::Layer(LayerNode::default()),
            NodeKind::Constant => NodeData::Constant(ConstantNode::default()),
            NodeKind::Source => NodeData::Source(SourceNode::default()),
            NodeKind::SourceBinding => NodeData::SourceBinding(BindingNode::default()),
            NodeKind::Action => NodeData::Action(ActionNode::default()),
            NodeKind::Condition => NodeData::Condition(ConditionNode::default()),
            NodeKind::Step => NodeData::Step(StepNode::default()),
            NodeKind::Modifier => NodeData::Modifier(ModifierNode::default()),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Script(_) => NodeKind::Script,
            NodeData::Layer(_) => NodeKind::Layer,
            NodeData::Constant(_) => NodeKind::Constant,
            NodeData::Source(_) => NodeKind::Source,
            NodeData::SourceBinding(_) => NodeKind::SourceBinding,
            NodeData::Action(_) => NodeKind::Action,
            NodeData::Condition(_) => NodeKind::Condition,
            NodeData::Step(_) => NodeKind::Step,
            NodeData::Modifier(_) => NodeKind::Modifier,
        }
    }

    /// Capture slot for `field`, `None` if this kind has no such field.
    pub(crate) fn slot(&mut self, field: Field) -> Option<&mut Option<Lexeme>> {
        match self {
            NodeData::Script(n) => n.slot(field),
            NodeData::Layer(n) => n.slot(field),
            NodeData::Constant(n) => n.slot(field),
            NodeData::Source(n) => n.slot(field),
            NodeData::SourceBinding(n) => n.slot(field),
            NodeData::Action(n) => n.slot(field),
            NodeData::Condition(n) => n.slot(field),
            NodeData::Step(n) => n.slot(field),
            NodeData::Modifier(n) => n.slot(field),
        }
    }

    fn for_each_field(&self, f: &mut dyn FnMut(Field, &Lexeme)) {
        match self {
            NodeData::Script(n) => n.for_each_field(f),
            NodeData::Layer(n) => n.for_each_field(f),
            NodeData::Constant(n) => n.for_each_field(f),
            NodeData::Source(n) => n.for_each_field(f),
            NodeData::SourceBinding(n) => n.for_each_field(f),
            NodeData::Action(n) => n.for_each_field(f),
            NodeData::Condition(n) => n.for_each_field(f),
            NodeData::Step(n) => n.for_each_field(f),
            NodeData::Modifier(n) => n.for_each_field(f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub data: NodeData,
    pub first_child: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
}

impl SyntaxNode {
    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }
}

/// Scratch tree for one parse. Discarded once the builder has consumed it.
#[derive(Debug, Clone)]
pub struct SyntaxTree<'src> {
    source: &'src str,
    nodes: Vec<SyntaxNode>,
}

impl<'src> SyntaxTree<'src> {
    /// Creates a tree holding only the `Script` root.
    pub fn new(source: &'src str) -> Self {
        let mut tree = Self {
            source,
            nodes: Vec::with_capacity(64),
        };
        tree.alloc(NodeKind::Script);
        tree
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SyntaxNode {
            data: NodeData::new(kind),
            first_child: None,
            next_sibling: None,
        });
        id
    }

    pub fn get(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.index()]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut SyntaxNode {
        &mut self.nodes[id.index()]
    }

    /// Drops `id` and every node allocated after it.
    ///
    /// Only valid while `id` is not yet linked into the tree.
    pub fn discard(&mut self, id: NodeId) {
        self.nodes.truncate(id.index());
    }

    /// Links `child` at the end of `parent`'s child chain.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        match self.get(parent).first_child {
            Some(first) => self.append_sibling(first, child),
            None => self.get_mut(parent).first_child = Some(child),
        }
    }

    /// Links `sibling` at the end of `node`'s sibling chain.
    pub fn append_sibling(&mut self, node: NodeId, sibling: NodeId) {
        let mut last = node;
        while let Some(next) = self.get(last).next_sibling {
            last = next;
        }
        self.get_mut(last).next_sibling = Some(sibling);
    }

    pub fn children(&self, id: NodeId) -> Siblings<'_, 'src> {
        Siblings {
            tree: self,
            next: self.get(id).first_child,
        }
    }

    /// `id` followed by every node after it in its sibling chain.
    pub fn siblings_from(&self, id: NodeId) -> Siblings<'_, 'src> {
        Siblings {
            tree: self,
            next: Some(id),
        }
    }

    pub fn text(&self, lexeme: &Lexeme) -> Cow<'src, str> {
        lexeme.text(self.source)
    }

    /// Indented outline of the tree, one node per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format_node(self.root(), 0, &mut out)
            .expect("String write never fails");
        out
    }

    fn format_node(&self, id: NodeId, depth: usize, w: &mut impl Write) -> std::fmt::Result {
        let node = self.get(id);
        write!(w, "{:indent$}{:?}", "", node.kind(), indent = depth * 2)?;

        let mut result = Ok(());
        node.data.for_each_field(&mut |field, lexeme| {
            if result.is_err() {
                return;
            }
            result = if field.is_flag() {
                write!(w, " {}", field.label())
            } else {
                write!(w, " {}={:?}", field.label(), self.text(lexeme))
            };
        });
        result?;
        writeln!(w)?;

        for child in self.children(id) {
            self.format_node(child, depth + 1, w)?;
        }
        Ok(())
    }
}

pub struct Siblings<'t, 'src> {
    tree: &'t SyntaxTree<'src>,
    next: Option<NodeId>,
}

impl Iterator for Siblings<'_, '_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.get(current).next_sibling;
        Some(current)
    }
}
