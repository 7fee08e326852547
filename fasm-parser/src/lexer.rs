//! # Lexer for FASM Source Text
//!
//! One statement per source line; the parser lexes each line separately, so
//! there is no newline token. Sized literal tokens capture the raw digit
//! text with the `'h`/`'b`/`'o`/`'d` prefix stripped and `_` separators
//! kept, because downstream encoding works on the digit text as written.

use logos::Logos;

/// Tokens for one FASM line
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip whitespace
pub enum Token {
    /// Dotted feature identifier (also plain annotation names)
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*(\.[a-zA-Z_][a-zA-Z0-9_]*)*", |lex| lex.slice().to_string())]
    Feature(String),

    /// Unsized decimal integer: addresses, widths, plain values
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Int(String),

    /// Sized hexadecimal digits
    #[regex(r"'h[0-9a-fA-F_]+", |lex| lex.slice()[2..].to_string())]
    HexValue(String),

    /// Sized binary digits
    #[regex(r"'b[01_]+", |lex| lex.slice()[2..].to_string())]
    BinaryValue(String),

    /// Sized octal digits
    #[regex(r"'o[0-7_]+", |lex| lex.slice()[2..].to_string())]
    OctalValue(String),

    /// Sized decimal digits
    #[regex(r"'d[0-9_]+", |lex| lex.slice()[2..].to_string())]
    DecimalValue(String),

    /// Quoted annotation value, quotes stripped
    #[regex(r#""[^"\n]*""#, |lex| { let s = lex.slice(); s[1..s.len() - 1].to_string() })]
    QuotedString(String),

    /// Comment to end of line, marker stripped
    #[regex(r"#[^\n]*", |lex| lex.slice()[1..].to_string())]
    Comment(String),

    /// Left bracket (address open)
    #[token("[")]
    LBracket,

    /// Right bracket (address close)
    #[token("]")]
    RBracket,

    /// Colon (address range)
    #[token(":")]
    Colon,

    /// Equals (value or annotation value)
    #[token("=")]
    Equal,

    /// Left brace (annotations open)
    #[token("{")]
    LBrace,

    /// Right brace (annotations close)
    #[token("}")]
    RBrace,

    /// Comma (annotation separator)
    #[token(",")]
    Comma,
}
