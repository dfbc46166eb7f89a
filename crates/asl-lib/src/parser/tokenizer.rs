//! Catalog-first tokenizer.
//!
//! Every word is looked up in the token catalog; on a miss the word splitter's
//! own classification decides the kind.

use super::catalog;
use super::lexer::{Word, WordKind, Words};
use super::token::{Token, TokenKind};

/// Produces tokens one at a time from a word cursor.
pub struct Tokenizer<'src> {
    words: Words<'src>,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            words: Words::new(source),
        }
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        self.words.next().map(classify)
    }
}

/// Tokenizes the whole source. The result always ends with `EndOfFile`,
/// preceded by `EndOfLine` unless the source holds no words.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Tokenizer::new(source).collect()
}

fn classify(word: Word<'_>) -> Token<'_> {
    let kind = catalog::lookup(word.text).unwrap_or_else(|| default_kind(word.kind));
    Token::new(kind, word.text, word.span, word.location)
}

fn default_kind(kind: WordKind) -> TokenKind {
    match kind {
        WordKind::Ident => TokenKind::Symbol,
        WordKind::Number => TokenKind::Number,
        WordKind::Dot => TokenKind::Dot,
        WordKind::Comma => TokenKind::Comma,
        WordKind::Colon => TokenKind::Colon,
        WordKind::Newline => TokenKind::EndOfLine,
        WordKind::EndOfFile => TokenKind::EndOfFile,
        WordKind::Operator | WordKind::Unknown | WordKind::Whitespace | WordKind::Comment => {
            TokenKind::Unknown
        }
    }
}
