use crate::sql::{keyword::Keyword, token::Token, token_kind::TokenKind};

/// Recoverable diagnostics reported by [`tokenize`].
///
/// Scanning never fails: an unterminated construct produces a best-effort
/// token running to the end of the input plus one of these, and the caller
/// decides whether to proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("unterminated string literal starting at byte {0}")]
    UnterminatedString(usize),

    #[error("unterminated block comment starting at byte {0}")]
    UnterminatedBlockComment(usize),

    #[error("unterminated quoted identifier starting at byte {0}")]
    UnterminatedQuotedIdent(usize),
}

/// Lenient SQL scanner producing a flat stream of `Token`s.
///
/// Scope / Intent:
/// - Designed for whole-script rewriting, so nothing may be dropped:
///   whitespace, comments and literals come back as tokens with spans.
/// - Accepts incomplete / syntactically invalid SQL (e.g. `SELECT FROM`,
///   an unclosed string at end of input).
/// - Classifies words against the reserved set in `keyword.rs`; everything
///   else keeps its original spelling.
///
/// Behavior:
/// - Whitespace runs, `--` line comments (the newline is not part of the
///   comment), nested `/* */` block comments.
/// - `'...'` string literals and `"..."` / `[...]` quoted identifiers,
///   with the usual doubling escape for the closing character.
/// - `@name` / `@@name` variables, `#name` / `##name` temp-object names.
/// - Decimal, fractional, exponent and `0x` numeric literals.
/// - Word runs become keywords or identifiers; one lower-casing per word.
/// - Any other single character is emitted as punctuation / `Other`.
///
/// Guarantees:
/// - Concatenating `token.text(sql)` over the stream reproduces `sql`
///   exactly; tokens are adjacent and non-empty.
/// - Never panics on valid UTF-8: every token boundary falls on an ASCII
///   byte or the start of the input, so spans are always char boundaries.
/// - Never returns an error (malformed constructs still yield tokens).
///
/// Complexity:
/// - O(n) time, O(t) space where `t` is number of tokens.
pub fn tokenize(sql: &str) -> (Vec<Token>, Vec<ScanError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let bytes = sql.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let start = i;
        let b = bytes[i];

        // Whitespace run
        if b.is_ascii_whitespace() {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            tokens.push(Token::new(TokenKind::Whitespace, start, i));
            continue;
        }

        // Line comment, up to but not including the newline
        if b == b'-' && bytes.get(i + 1) == Some(&b'-') {
            i += scan_line_comment(&bytes[i..]);
            tokens.push(Token::new(TokenKind::LineComment, start, i));
            continue;
        }

        // Block comment; these nest
        if b == b'/' && bytes.get(i + 1) == Some(&b'*') {
            let (len, terminated) = scan_block_comment(&bytes[i..]);
            i += len;
            if !terminated {
                errors.push(ScanError::UnterminatedBlockComment(start));
            }
            tokens.push(Token::new(TokenKind::BlockComment, start, i));
            continue;
        }

        // String literal
        if b == b'\'' {
            let (len, terminated) = scan_delimited(&bytes[i..], b'\'');
            i += len;
            if !terminated {
                errors.push(ScanError::UnterminatedString(start));
            }
            tokens.push(Token::new(TokenKind::StringLit, start, i));
            continue;
        }

        // Quoted identifiers: "name" and [name]
        if b == b'"' || b == b'[' {
            let close = if b == b'[' { b']' } else { b'"' };
            let (len, terminated) = scan_delimited(&bytes[i..], close);
            i += len;
            if !terminated {
                errors.push(ScanError::UnterminatedQuotedIdent(start));
            }
            tokens.push(Token::new(TokenKind::QuotedIdent, start, i));
            continue;
        }

        // Variable reference: @name or @@name
        if b == b'@' {
            i += 1;
            if bytes.get(i) == Some(&b'@') {
                i += 1;
            }
            i += scan_word(&bytes[i..]);
            tokens.push(Token::new(TokenKind::Variable, start, i));
            continue;
        }

        // Temp-object names: #name, ##name. A bare '#' falls through to
        // the punctuation arm.
        if b == b'#' {
            let mut j = i + 1;
            if bytes.get(j) == Some(&b'#') {
                j += 1;
            }
            let word = scan_word(&bytes[j..]);
            if word > 0 {
                i = j + word;
                tokens.push(Token::new(TokenKind::Ident, start, i));
                continue;
            }
        }

        // Numeric literal
        if b.is_ascii_digit() {
            i += scan_number(&bytes[i..]);
            tokens.push(Token::new(TokenKind::Number, start, i));
            continue;
        }

        // Word path: keyword or identifier
        if is_word_start(b) {
            i += scan_word(&bytes[i..]);
            let lower = sql[start..i].to_ascii_lowercase();
            let kind = Keyword::from_lower(&lower)
                .map(TokenKind::Keyword)
                .unwrap_or(TokenKind::Ident);
            tokens.push(Token::new(kind, start, i));
            continue;
        }

        // Single-character tokens
        i += 1;
        let kind = match b {
            b',' => TokenKind::Comma,
            b'.' => TokenKind::Dot,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::ParenOpen,
            b')' => TokenKind::ParenClose,
            other => TokenKind::Other(other as char),
        };
        tokens.push(Token::new(kind, start, i));
    }

    (tokens, errors)
}

/// Word starts exclude digits; non-ASCII lead bytes are accepted so
/// multibyte identifiers stay in one token.
fn is_word_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

/// Byte length of the leading word-character run.
fn scan_word(bytes: &[u8]) -> usize {
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80 {
            i += 1;
        } else {
            break;
        }
    }
    i
}

/// Byte length up to the next newline, which stays outside the comment.
fn scan_line_comment(bytes: &[u8]) -> usize {
    bytes.iter().position(|&b| b == b'\n').unwrap_or(bytes.len())
}

/// `bytes` starts at `/*`. Returns (length, terminated).
fn scan_block_comment(bytes: &[u8]) -> (usize, bool) {
    let mut depth = 1usize;
    let mut i = 2;
    while i < bytes.len() {
        if bytes[i] == b'/' && bytes.get(i + 1) == Some(&b'*') {
            depth += 1;
            i += 2;
        } else if bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/') {
            depth -= 1;
            i += 2;
            if depth == 0 {
                return (i, true);
            }
        } else {
            i += 1;
        }
    }
    (bytes.len(), false)
}

/// `bytes` starts at the opening delimiter; a doubled `close` escapes
/// itself. Returns (length including delimiters, terminated).
fn scan_delimited(bytes: &[u8], close: u8) -> (usize, bool) {
    let mut i = 1;
    while i < bytes.len() {
        if bytes[i] == close {
            if bytes.get(i + 1) == Some(&close) {
                i += 2;
                continue;
            }
            return (i + 1, true);
        }
        i += 1;
    }
    (bytes.len(), false)
}

/// Decimal with optional fraction and exponent, or `0x` hex. `bytes[0]`
/// is a digit.
fn scan_number(bytes: &[u8]) -> usize {
    if bytes[0] == b'0' && matches!(bytes.get(1), Some(b'x' | b'X')) {
        let mut i = 2;
        while i < bytes.len() && bytes[i].is_ascii_hexdigit() {
            i += 1;
        }
        return i;
    }
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        if bytes.get(j).is_some_and(|b| b.is_ascii_digit()) {
            i = j;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
    }
    i
}
