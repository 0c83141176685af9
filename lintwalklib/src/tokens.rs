//! Lexical token classification for a tokenizing front end.
//!
//! Style checks care about a handful of token-level facts: whether a
//! token ends a logical or physical line, and whether a string literal
//! spans multiple lines (its interior is exempt from most layout rules).
//! These are plain field predicates over [`Token`]; the tokenizer that
//! produces tokens is out of scope here.

use serde::Serialize;

/// The coarse token classes the classifiers care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Logical end of line
    Newline,
    /// Non-logical end of line (inside brackets, after a comment, ...)
    Nl,
    Comment,
    Str,
    Name,
    Number,
    Op,
    Indent,
    Dedent,
    EndOfFile,
}

/// A lexical token with enough position context for line-level checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// The token's source text.
    pub text: String,
    /// The full physical line the token starts on, newline included.
    pub line: String,
    /// Byte offset of the token within `line`.
    pub start_col: usize,
}

/// Whether `token` marks an end of line.
///
/// True for `Newline`/`Nl` tokens, and for any token whose physical
/// line ends in a backslash continuation right after it (the `\` plus
/// newline counts as the line ending even though the tokenizer does
/// not emit a dedicated token for it).
pub fn is_eol_token(token: &Token) -> bool {
    if matches!(token.kind, TokenKind::Newline | TokenKind::Nl) {
        return true;
    }
    let rest = token.line.get(token.start_col..).unwrap_or("");
    rest.trim_start() == "\\\n"
}

/// Whether `token` is a string literal spanning multiple lines.
pub fn is_multiline_string(token: &Token) -> bool {
    token.kind == TokenKind::Str && token.text.contains('\n')
}
