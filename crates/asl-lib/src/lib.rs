//! Compiler front end for the Action Scripting Language (ASL).
//!
//! Turns ASL text into [`ActionLayer`] definitions: text → tokens → syntax
//! tree → layers. The first error aborts compilation.
//!
//! # Example
//!
//! ```
//! use asl_core::Behavior;
//!
//! let source = "
//! layer Player:
//!     source button Jump: kb.space
//!     action Jump: bool, once
//!         when source.Jump.pressed
//!         .activate
//! ";
//!
//! let layers = asl_lib::compile(source).unwrap();
//! assert_eq!(layers[0].action("Jump").unwrap().behavior, Behavior::ActiveOnce);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod build;
pub mod diagnostics;
pub mod parser;
pub mod writer;

mod compiler;


use asl_core::{ActionLayer, DefinitionError};

pub use compiler::{Compiler, ParsedScript};
pub use diagnostics::ErrorPrinter;
pub use parser::{Location, Span, UnexpectedToken, parse, tokenize};
pub use writer::{write_layer, write_script};

use parser::Lexeme;

/// Errors that can occur while compiling a script.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    UnexpectedToken(#[from] UnexpectedToken),

    #[error("invalid number `{text}` at {location}")]
    InvalidNumber {
        text: String,
        span: Span,
        location: Location,
    },

    /// Content error reported by the layer builder, pinned to the offending text.
    #[error("{source} at {location}")]
    Definition {
        source: DefinitionError,
        span: Span,
        location: Location,
    },
}

impl Error {
    pub(crate) fn definition(source: DefinitionError, at: &Lexeme) -> Self {
        Error::Definition {
            source,
            span: at.span,
            location: at.location,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Error::UnexpectedToken(err) => err.span,
            Error::InvalidNumber { span, .. } | Error::Definition { span, .. } => *span,
        }
    }

    pub fn location(&self) -> Location {
        match self {
            Error::UnexpectedToken(err) => err.location,
            Error::InvalidNumber { location, .. } | Error::Definition { location, .. } => {
                *location
            }
        }
    }
}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;

/// Compiles a script with the default settings.
pub fn compile(source: &str) -> Result<Vec<ActionLayer>> {
    Compiler::new(source).compile()
}
