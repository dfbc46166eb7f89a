use asl_core::ActionLayer;
use tracing::debug;

use crate::Result;
use crate::build;
use crate::parser::{self, SyntaxTree, Token};

/// Compilation settings for one script.
#[derive(Debug, Clone, Copy)]
pub struct Compiler<'src> {
    source: &'src str,
    check_references: bool,
}

impl<'src> Compiler<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            check_references: true,
        }
    }

    /// Require every source or action named by a condition or step to be
    /// defined in the same layer. On by default.
    pub fn check_references(mut self, value: bool) -> Self {
        self.check_references = value;
        self
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn tokenize(&self) -> Vec<Token<'src>> {
        parser::tokenize(self.source)
    }

    pub fn parse(&self) -> Result<ParsedScript<'src>> {
        let tree = parser::parse(self.source)?;
        Ok(ParsedScript {
            tree,
            check_references: self.check_references,
        })
    }

    pub fn compile(&self) -> Result<Vec<ActionLayer>> {
        let layers = self.parse()?.build()?;
        debug!(layers = layers.len(), "compiled script");
        Ok(layers)
    }
}

/// A script that parsed successfully but has not been built yet.
#[derive(Debug, Clone)]
pub struct ParsedScript<'src> {
    tree: SyntaxTree<'src>,
    check_references: bool,
}

impl<'src> ParsedScript<'src> {
    pub fn tree(&self) -> &SyntaxTree<'src> {
        &self.tree
    }

    pub fn dump(&self) -> String {
        self.tree.dump()
    }

    pub fn build(&self) -> Result<Vec<ActionLayer>> {
        build::build(&self.tree, self.check_references)
    }
}
