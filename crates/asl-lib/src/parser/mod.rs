//! ASL front end up to the syntax tree.
//!
//! # Pipeline
//!
//! - `lexer`: splits text into words (identifiers, numbers, operator runs,
//!   punctuation, line breaks) with line/column metadata.
//! - `tokenizer`: looks every word up in the token `catalog`, falling back to
//!   the word's own classification.
//! - `core` + `rule`: a small combinator engine that runs static rule tables
//!   (`grammar`) against the tokens and grows an arena `tree`.
//!
//! Parsing is fail-fast: the first unrecovered [`UnexpectedToken`] aborts the
//! parse and no tree is returned.

pub mod catalog;
pub mod lexer;
pub mod rule;
pub mod token;
pub mod tokenizer;
pub mod tree;

mod core;
mod error;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;
#[cfg(test)]
mod tree_tests;

pub use self::core::{Context, Link, ParseResult};
pub use error::UnexpectedToken;
pub use rule::{Capture, MatchFn, Matcher, Rule};
pub use token::{Location, Span, Token, TokenKind};
pub use tokenizer::{Tokenizer, tokenize};
pub use tree::{
    ActionNode, BindingNode, ConditionNode, ConstantNode, Field, LayerNode, Lexeme, ModifierNode,
    NodeData, NodeId, NodeKind, ScriptNode, Siblings, SourceNode, StepNode, SyntaxNode, SyntaxTree,
};

use tracing::debug;

/// Parses a whole script into its syntax tree.
pub fn parse(source: &str) -> ParseResult<SyntaxTree<'_>> {
    parse_tokens(source, tokenize(source))
}

/// Parses an already tokenized script. `tokens` must come from `source`.
pub fn parse_tokens<'src>(
    source: &'src str,
    tokens: Vec<Token<'src>>,
) -> ParseResult<SyntaxTree<'src>> {
    let token_count = tokens.len();
    let mut ctx = Context::new(source, tokens);
    ctx.execute_entry(grammar::SCRIPT)?;

    let tree = ctx.into_tree();
    debug!(tokens = token_count, nodes = tree.len(), "parsed script");
    Ok(tree)
}
