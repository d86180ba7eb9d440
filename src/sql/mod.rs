//! Lossless, lenient SQL scanning module.
//!
//! This module provides the minimal building blocks the recasing pipeline
//! needs to walk a SQL script token by token without parsing it. The
//! components are intentionally pragmatic:
//!
//! Modules:
//! - `keyword`    : Enum of reserved words eligible for case normalization.
//! - `token_kind` : Classification of lexical atoms (keywords, identifiers,
//!   literals, trivia, punctuation).
//! - `token`      : Token struct pairing a `TokenKind` with source span offsets.
//! - `tokenizer`  : Single pass O(n) scanner producing a full-coverage
//!   `Vec<Token>` plus recoverable diagnostics from raw SQL.
//!
//! Design Principles:
//! 1. Accept incomplete / syntactically invalid SQL (robust for live editing).
//! 2. Full fidelity: whitespace, comments and literals are tokens too, and
//!    the stream concatenates back to the input byte for byte.
//! 3. Classify at the word level only; no statement or clause structure.
//!
//! Public Re-exports:
//! You can `use crate::sql::{tokenize, Token, TokenKind, Keyword};` directly,
//! or pull everything via the `prelude` submodule.
//!
//! NOTE: This is **not** a SQL parser. Anything it does not recognize is
//! still emitted as a token, never dropped.

pub mod keyword;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use keyword::Keyword;
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::{ScanError, tokenize};

/// Convenience prelude re-exporting the most commonly used items.
pub mod prelude {
    pub use super::{Keyword, ScanError, Token, TokenKind, tokenize};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_and_access() {
        let sql = "SELECT col FROM tbl";
        let (tokens, errors) = tokenize(sql);
        assert!(errors.is_empty());
        assert!(tokens.iter().any(|t| t.is_keyword(Keyword::Select)));
        assert!(tokens.iter().any(|t| t.is_keyword(Keyword::From)));
        assert!(
            tokens
                .iter()
                .any(|t| t.kind == TokenKind::Ident && t.text(sql) == "col")
        );
    }

    #[test]
    fn prelude_import_works() {
        use super::prelude::*;
        let (tokens, _) = tokenize("FROM X");
        assert!(tokens.iter().any(|t| t.is_keyword(Keyword::From)));
    }
}
