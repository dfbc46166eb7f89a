//! Semantic builder: syntax tree → action layers.
//!
//! Walks each `Layer` node depth first and replays it against an
//! [`asl_core::LayerBuilder`]. The builder owns all content validation
//! (duplicates, bindings, references); this module only translates.
//!
//! # Condition series
//!
//! The conditions and modifiers of an action share one child chain. A `when`
//! condition opens a series that collects the `and`/`or` conditions after it;
//! the series closes at the next `when`, at a modifier, or at the end of the
//! chain.

mod invariants;
mod translate;

use std::iter::Peekable;

use asl_core::{
    ActionHandle, ActionLayer, Behavior, Component, ConditionFlags, DefinitionError, LayerBuilder,
    Modifier, SeriesHandle, Step, StepSource,
};
use tracing::trace;

use self::invariants::{misplaced, required};
use crate::parser::{
    ActionNode, BindingNode, ConditionNode, ConstantNode, Field, Lexeme, ModifierNode, NodeData,
    NodeId, NodeKind, Siblings, SourceNode, StepNode, SyntaxTree, TokenKind,
};
use crate::{Error, Result};

/// Builds every layer of a parsed script, in source order.
pub fn build(tree: &SyntaxTree<'_>, check_references: bool) -> Result<Vec<ActionLayer>> {
    let builder = Builder {
        tree,
        check_references,
    };
    tree.children(tree.root())
        .map(|layer| builder.layer(layer))
        .collect()
}

struct Builder<'t, 'src> {
    tree: &'t SyntaxTree<'src>,
    check_references: bool,
}

impl<'t, 'src> Builder<'t, 'src> {
    fn layer(&self, id: NodeId) -> Result<ActionLayer> {
        let NodeData::Layer(node) = &self.tree.get(id).data else {
            misplaced(NodeKind::Script, self.tree.get(id).kind());
        };
        let name = required(&node.name, NodeKind::Layer, Field::Name);
        let mut layer = LayerBuilder::new(self.text(&name));

        for child in self.tree.children(id) {
            match &self.tree.get(child).data {
                NodeData::Constant(node) => self.constant(&mut layer, node)?,
                NodeData::Source(node) => self.source(&mut layer, child, node)?,
                NodeData::Action(node) => self.action(&mut layer, child, node)?,
                other => misplaced(NodeKind::Layer, other.kind()),
            }
        }

        let layer = layer
            .finish(self.check_references)
            .map_err(|err| Error::definition(err, &name))?;
        trace!(
            layer = %layer.name,
            sources = layer.sources.len(),
            actions = layer.actions.len(),
            "built layer"
        );
        Ok(layer)
    }

    fn constant(&self, layer: &mut LayerBuilder, node: &ConstantNode) -> Result<()> {
        let name = required(&node.name, NodeKind::Constant, Field::Name);
        let value = self.number(&required(&node.param, NodeKind::Constant, Field::Param))?;
        layer
            .set_constant(self.text(&name), value)
            .map_err(|err| Error::definition(err, &name))
    }

    fn source(&self, layer: &mut LayerBuilder, id: NodeId, node: &SourceNode) -> Result<()> {
        let name = required(&node.name, NodeKind::Source, Field::Name);
        let ty = required(&node.ty, NodeKind::Source, Field::Type);
        let mut source = layer
            .define_source(self.text(&name), translate::source_type(ty.kind))
            .map_err(|err| Error::definition(err, &name))?;

        // The first binding is the source's child, the rest chain as its siblings.
        for child in self.tree.children(id) {
            let NodeData::SourceBinding(binding) = &self.tree.get(child).data else {
                misplaced(NodeKind::Source, self.tree.get(child).kind());
            };
            let (device, binding) = self.binding(binding)?;
            source
                .add_binding(binding)
                .map_err(|err| Error::definition(err, &device))?;
        }
        Ok(())
    }

    fn binding(&self, node: &BindingNode) -> Result<(Lexeme, asl_core::Binding)> {
        let device = required(&node.device, NodeKind::SourceBinding, Field::Device);
        let input = required(&node.source, NodeKind::SourceBinding, Field::Source);
        let binding = asl_core::Binding::resolve(&self.text(&device), &self.text(&input))
            .map_err(|err| match err {
                DefinitionError::UnknownInput { .. } => Error::definition(err, &input),
                err => Error::definition(err, &device),
            })?;
        Ok((device, binding))
    }

    fn action(&self, layer: &mut LayerBuilder, id: NodeId, node: &ActionNode) -> Result<()> {
        let name = required(&node.name, NodeKind::Action, Field::Name);
        let ty = required(&node.ty, NodeKind::Action, Field::Type);
        let action_name = self.text(&name).into_owned();
        let mut action = layer
            .define_action(action_name.as_str(), translate::data_type(ty.kind))
            .map_err(|err| Error::definition(err, &name))?;

        for (flag, behavior) in [
            (&node.flag_once, Behavior::ActiveOnce),
            (&node.flag_toggled, Behavior::Toggled),
        ] {
            if let Some(flag) = flag {
                action
                    .set_behavior(behavior)
                    .map_err(|err| Error::definition(err, flag))?;
            }
        }

        let mut children = self.tree.children(id).peekable();
        while let Some(child) = children.next() {
            match &self.tree.get(child).data {
                NodeData::Condition(opener) => {
                    self.series(&mut action, &action_name, (child, opener), &mut children)?;
                }
                NodeData::Modifier(node) => action.add_modifier(self.modifier(node)?),
                other => misplaced(NodeKind::Action, other.kind()),
            }
        }
        Ok(())
    }

    /// Builds one series from its opening `when` and the continuations that follow.
    fn series(
        &self,
        action: &mut ActionHandle<'_>,
        action_name: &str,
        opener: (NodeId, &ConditionNode),
        rest: &mut Peekable<Siblings<'t, 'src>>,
    ) -> Result<()> {
        let mut series = action.add_condition_series();
        self.condition(&mut series, action_name, opener)?;

        while let Some(next) = rest.peek().and_then(|&id| self.continuation(id)) {
            rest.next();
            self.condition(&mut series, action_name, next)?;
        }

        series.set_finished();
        Ok(())
    }

    /// An `and`/`or` condition, which extends the open series.
    fn continuation(&self, id: NodeId) -> Option<(NodeId, &'t ConditionNode)> {
        match &self.tree.get(id).data {
            NodeData::Condition(node) if !self.is_when(node) => Some((id, node)),
            _ => None,
        }
    }

    fn is_when(&self, node: &ConditionNode) -> bool {
        required(&node.ty, NodeKind::Condition, Field::Type).kind == TokenKind::KwWhen
    }

    fn condition(
        &self,
        series: &mut SeriesHandle<'_>,
        action_name: &str,
        (id, node): (NodeId, &ConditionNode),
    ) -> Result<()> {
        let connective = required(&node.ty, NodeKind::Condition, Field::Type);
        let mut flags = match connective.kind {
            TokenKind::KwAnd => ConditionFlags::SERIES_AND,
            TokenKind::KwOr => ConditionFlags::SERIES_OR,
            _ => ConditionFlags::empty(),
        };
        if node.flag_series.is_some() {
            flags |= ConditionFlags::SERIES_CHECK;
        }

        let check = required(&node.condition_kind, NodeKind::Condition, Field::ConditionKind);
        let kind = translate::condition_kind(check.kind);
        let param = node.param.as_ref().map(|p| self.number(p)).transpose()?;

        // A bare check (`when .pressed`) reads the action's own state.
        let (name, from_action) = match &node.source_name {
            Some(name) => (
                self.text(name).into_owned(),
                node.source_type.is_some_and(|c| c.kind == TokenKind::KwAction),
            ),
            None => (action_name.to_owned(), true),
        };
        series.add_condition(name, kind, flags, param, from_action);

        for child in self.tree.children(id) {
            let NodeData::Step(step) = &self.tree.get(child).data else {
                misplaced(NodeKind::Condition, self.tree.get(child).kind());
            };
            series.add_step(self.step(step)?);
        }
        Ok(())
    }

    fn step(&self, node: &StepNode) -> Result<Step> {
        let verb = required(&node.step_kind, NodeKind::Step, Field::StepKind);
        let kind = translate::step_kind(verb.kind);
        if !kind.is_assignment() {
            return Ok(Step::verb(kind));
        }

        let destination = required(&node.destination, NodeKind::Step, Field::Destination);
        let destination = self.component(&destination)?;
        let value = required(&node.source, NodeKind::Step, Field::Source);
        let source = match node.source_type.map(|c| c.kind) {
            Some(TokenKind::KwAction) => StepSource::Action(self.text(&value).into_owned()),
            Some(_) => StepSource::Source(self.text(&value).into_owned()),
            None if value.kind == TokenKind::Number => StepSource::Value(self.number(&value)?),
            None => StepSource::Source(self.text(&value).into_owned()),
        };
        Ok(Step::assign(kind, destination, source))
    }

    fn modifier(&self, node: &ModifierNode) -> Result<Modifier> {
        let component = required(&node.component, NodeKind::Modifier, Field::Component);
        let operation = required(&node.operation, NodeKind::Modifier, Field::Operation);
        let param = required(&node.param, NodeKind::Modifier, Field::Param);
        Ok(Modifier {
            component: self.component(&component)?,
            operation: translate::modifier_op(operation.kind),
            param: self.number(&param)?,
        })
    }

    fn component(&self, lexeme: &Lexeme) -> Result<Component> {
        let text = self.text(lexeme);
        Component::from_name(&text).ok_or_else(|| {
            Error::definition(DefinitionError::UnknownComponent(text.into_owned()), lexeme)
        })
    }

    /// Literals that overflow `f32` are rejected rather than read as infinity.
    fn number(&self, lexeme: &Lexeme) -> Result<f32> {
        let text = self.text(lexeme);
        text.parse::<f32>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| Error::InvalidNumber {
                text: text.into_owned(),
                span: lexeme.span,
                location: lexeme.location,
            })
    }

    fn text(&self, lexeme: &Lexeme) -> std::borrow::Cow<'src, str> {
        self.tree.text(lexeme)
    }
}
