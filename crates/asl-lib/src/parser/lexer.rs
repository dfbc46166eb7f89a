//! Word splitter: the generic default tokenizer underneath the token catalog.
//!
//! Splits source text into words (identifiers, numbers, operator runs,
//! punctuation, line breaks) with line/column metadata.
//!
//! ## Line breaks
//!
//! Line breaks are significant in ASL, but blank lines are not. The cursor
//! collapses consecutive line breaks into one, drops line breaks before the
//! first word, and always ends the stream with a line break followed by
//! `EndOfFile`, so every construct can rely on a terminating `EndOfLine`.
//!
//! ## Error handling
//!
//! Consecutive unrecognized characters are coalesced into one `Unknown` word.

use logos::Logos;

use super::token::{Location, Span};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordKind {
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    /// Defined with an optional sign; `-` alone is an operator run.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    #[regex(r"[=!<>+\-]+")]
    Operator,

    #[token(".")]
    Dot,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token("\n")]
    Newline,

    /// `\r` is treated as whitespace so `\r\n` ends a line like `\n`.
    #[regex(r"[ \t\r\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    #[regex(r"#[^\n]*", allow_greedy = true)]
    Comment,

    /// Coalesced unrecognized characters
    Unknown,
    EndOfFile,
}

impl WordKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, WordKind::Whitespace | WordKind::Comment)
    }
}

/// One word of the source. Text is a slice of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'src> {
    pub kind: WordKind,
    pub text: &'src str,
    pub span: Span,
    pub location: Location,
}

/// Cursor over the words of a source text.
pub struct Words<'src> {
    source: &'src str,
    lexer: logos::Lexer<'src, WordKind>,
    pending: Option<(WordKind, Span)>,
    line: u32,
    /// Column of the character at `column_offset`, advanced as words are read.
    column: u32,
    column_offset: usize,
    at_line_start: bool,
    done: bool,
}

impl<'src> Words<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            lexer: WordKind::lexer(source),
            pending: None,
            line: 1,
            column: 1,
            column_offset: 0,
            at_line_start: true,
            done: false,
        }
    }

    /// Offsets must not decrease within a line.
    fn location_of(&mut self, offset: usize) -> Location {
        self.column += self.source[self.column_offset..offset].chars().count() as u32;
        self.column_offset = offset;
        Location::new(self.line, self.column)
    }

    fn start_line(&mut self, offset: usize) {
        self.line += 1;
        self.column = 1;
        self.column_offset = offset;
    }

    fn word(&mut self, kind: WordKind, span: Span) -> Word<'src> {
        Word {
            kind,
            text: &self.source[span.as_range()],
            span,
            location: self.location_of(span.start),
        }
    }

    /// Next raw word from logos, with unrecognized runs coalesced.
    fn next_raw(&mut self) -> Option<(WordKind, Span)> {
        if let Some(pending) = self.pending.take() {
            return Some(pending);
        }

        let mut error: Option<Span> = None;
        loop {
            match self.lexer.next() {
                Some(Ok(kind)) => {
                    let range = self.lexer.span();
                    let span = Span::new(range.start, range.end);
                    if let Some(garbage) = error {
                        self.pending = Some((kind, span));
                        return Some((WordKind::Unknown, garbage));
                    }
                    return Some((kind, span));
                }
                Some(Err(())) => {
                    let range = self.lexer.span();
                    let span = Span::new(range.start, range.end);
                    error = Some(error.map_or(span, |garbage| garbage.cover(span)));
                }
                None => return error.map(|garbage| (WordKind::Unknown, garbage)),
            }
        }
    }
}

impl<'src> Iterator for Words<'src> {
    type Item = Word<'src>;

    fn next(&mut self) -> Option<Word<'src>> {
        loop {
            if self.done {
                return None;
            }

            let Some((kind, span)) = self.next_raw() else {
                let end = Span::new(self.source.len(), self.source.len());
                if !self.at_line_start {
                    self.at_line_start = true;
                    return Some(self.word(WordKind::Newline, end));
                }
                self.done = true;
                return Some(self.word(WordKind::EndOfFile, end));
            };

            match kind {
                k if k.is_trivia() => continue,
                WordKind::Newline => {
                    let word = self.word(kind, span);
                    self.start_line(span.end);
                    if self.at_line_start {
                        continue;
                    }
                    self.at_line_start = true;
                    return Some(word);
                }
                _ => {
                    self.at_line_start = false;
                    return Some(self.word(kind, span));
                }
            }
        }
    }
}
