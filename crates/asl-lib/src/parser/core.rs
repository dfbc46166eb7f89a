//! Rule engine: runs rule tables against a token stream.
//!
//! # Commit rule
//!
//! Sequences never backtrack. A failure can be absorbed (by `optional`,
//! `repeat` or an alternative of `first`) only while it is *recoverable*: an
//! [`UnexpectedToken`] raised before the cursor moved, and not raised as fatal.
//! Once a rule has consumed a token, its failure aborts the whole parse.

use tracing::trace;

use super::error::UnexpectedToken;
use super::rule::{Capture, Matcher, Rule};
use super::token::{Token, TokenKind};
use super::tree::{Lexeme, NodeId, NodeKind, SyntaxTree};

pub type ParseResult<T> = Result<T, UnexpectedToken>;

/// Where a new node goes relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    /// End of the anchor's child chain.
    Child,
    /// End of the anchor's sibling chain.
    Sibling,
}

/// Parse state: token cursor, the tree under construction, and the node that
/// captures currently write into.
pub struct Context<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
    tree: SyntaxTree<'src>,
    node: NodeId,
    /// Failures absorbed at one token position, merged.
    absorbed: Option<(usize, UnexpectedToken)>,
}

impl<'src> Context<'src> {
    /// `tokens` must end with `EndOfFile`, as the tokenizer guarantees.
    pub fn new(source: &'src str, tokens: Vec<Token<'src>>) -> Self {
        super::invariants::ensure_terminated(&tokens);
        let tree = SyntaxTree::new(source);
        let node = tree.root();
        Self {
            tokens,
            pos: 0,
            tree,
            node,
            absorbed: None,
        }
    }

    pub fn into_tree(self) -> SyntaxTree<'src> {
        self.tree
    }

    pub fn tree(&self) -> &SyntaxTree<'src> {
        &self.tree
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Node that captures are written into.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Current token; stays on `EndOfFile` once the stream is exhausted.
    pub fn current(&self) -> &Token<'src> {
        let last = self.tokens.len() - 1;
        &self.tokens[self.pos.min(last)]
    }

    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Kind of the token consumed last, `None` at the start of input.
    pub fn previous_kind(&self) -> Option<TokenKind> {
        let prev = self.pos.checked_sub(1)?;
        self.tokens.get(prev).map(|t| t.kind)
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    pub fn at_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    pub fn bump(&mut self) {
        self.pos += 1;
    }

    pub fn expect(&mut self, kind: TokenKind) -> ParseResult<()> {
        if !self.at(kind) {
            return Err(self.unexpected(&[kind]));
        }
        self.bump();
        Ok(())
    }

    /// Error at the current token.
    pub fn unexpected(&self, expected: &[TokenKind]) -> UnexpectedToken {
        UnexpectedToken::new(self.current(), expected)
    }

    /// Runs the entry table. A failure also lists what the rules skipped at
    /// the same token would have accepted.
    pub fn execute_entry(&mut self, rules: &[Rule]) -> ParseResult<()> {
        match self.execute(rules) {
            Ok(()) => Ok(()),
            Err(err) => Err(self.widen(err)),
        }
    }

    /// Runs a table as a strict sequence.
    pub fn execute(&mut self, rules: &[Rule]) -> ParseResult<()> {
        for rule in rules {
            self.apply(rule)?;
        }
        Ok(())
    }

    /// Runs a table with captures going into `node`.
    pub fn execute_in(&mut self, node: NodeId, rules: &[Rule]) -> ParseResult<()> {
        let outer = std::mem::replace(&mut self.node, node);
        let result = self.execute(rules);
        self.node = outer;
        result
    }

    /// Runs `rules` into a new node and links it to `anchor` on success.
    /// On failure the node and everything allocated under it is dropped.
    pub fn attach(
        &mut self,
        anchor: NodeId,
        link: Link,
        kind: NodeKind,
        rules: &[Rule],
    ) -> ParseResult<NodeId> {
        let id = self.tree.alloc(kind);
        let outer = std::mem::replace(&mut self.node, id);
        let result = self.execute(rules);
        self.node = outer;

        match result {
            Ok(()) => {
                match link {
                    Link::Child => self.tree.append_child(anchor, id),
                    Link::Sibling => self.tree.append_sibling(anchor, id),
                }
                trace!(?kind, ?link, "attached node");
                Ok(id)
            }
            Err(err) => {
                self.tree.discard(id);
                Err(err)
            }
        }
    }

    /// Applies one rule with its quantifiers.
    fn apply(&mut self, rule: &Rule) -> ParseResult<()> {
        let start = self.pos;
        match self.match_once(rule) {
            Ok(()) => {}
            Err(err) if rule.is_optional() && self.is_recoverable(&err, start) => {
                self.absorb(err);
                return Ok(());
            }
            Err(err) => return Err(err),
        }

        if rule.is_repeat() {
            let mut last = start;
            // Stops on a zero-width success as well as on a recoverable failure.
            while self.pos != last {
                last = self.pos;
                match self.match_once(rule) {
                    Ok(()) => {}
                    Err(err) if self.is_recoverable(&err, last) => {
                        self.absorb(err);
                        break;
                    }
                    Err(err) => return Err(err),
                }
            }
        }
        Ok(())
    }

    fn match_once(&mut self, rule: &Rule) -> ParseResult<()> {
        let start = self.pos;
        match rule.matcher {
            Matcher::Token(kind) => self.expect(kind)?,
            Matcher::All(rules) => self.execute(rules)?,
            Matcher::First(rules) => self.match_first(rules)?,
            Matcher::Child(kind, rules) => {
                self.attach(self.node, Link::Child, kind, rules)?;
            }
            Matcher::Sibling(kind, rules) => {
                self.attach(self.node, Link::Sibling, kind, rules)?;
            }
            Matcher::Custom(f) => f(self)?,
        }

        if let Some(capture) = rule.capture {
            self.capture(capture, start);
        }
        if rule.is_noadvance() {
            self.pos = start;
        }
        Ok(())
    }

    fn match_first(&mut self, rules: &[Rule]) -> ParseResult<()> {
        let start = self.pos;
        let mut failure: Option<UnexpectedToken> = None;

        for rule in rules {
            match self.apply(rule) {
                Ok(()) => return Ok(()),
                Err(err) if self.is_recoverable(&err, start) => {
                    failure = Some(match failure.take() {
                        Some(mut first) => {
                            first.merge(err);
                            first
                        }
                        None => err,
                    });
                }
                Err(err) => return Err(err),
            }
        }

        Err(failure.unwrap_or_else(|| self.unexpected(&[])))
    }

    fn absorb(&mut self, err: UnexpectedToken) {
        match &mut self.absorbed {
            Some((pos, earlier)) if *pos == self.pos => earlier.merge(err),
            slot => *slot = Some((self.pos, err)),
        }
    }

    /// Prepends the expectations absorbed at the failing token. Fatal errors
    /// keep their own list.
    fn widen(&mut self, err: UnexpectedToken) -> UnexpectedToken {
        match self.absorbed.take() {
            Some((pos, mut earlier)) if pos == self.pos && !err.fatal => {
                earlier.merge(err);
                earlier
            }
            _ => err,
        }
    }

    fn is_recoverable(&self, err: &UnexpectedToken, start: usize) -> bool {
        !err.fatal && self.pos == start
    }

    /// Writes the token at `at` into the current node.
    fn capture(&mut self, capture: Capture, at: usize) {
        let token = self.tokens[at.min(self.tokens.len() - 1)];
        let data = &mut self.tree.get_mut(self.node).data;
        let kind = data.kind();

        let (Capture::Set(field) | Capture::Extend(field)) = capture;
        let Some(slot) = data.slot(field) else {
            super::invariants::missing_field(kind, field);
        };

        match (capture, slot) {
            (Capture::Extend(_), Some(lexeme)) => lexeme.extend(&token),
            (_, slot) => *slot = Some(Lexeme::new(&token)),
        }
    }
}
