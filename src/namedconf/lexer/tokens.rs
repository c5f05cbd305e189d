//! Token definitions for named.conf
//!
//! The tokens are defined using the logos derive macro. Tokens carry no
//! text; the parser slices it out of the source using the token spans.
use logos::Logos;

/// All possible tokens in a named.conf file
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"#[^\n]*")]
#[logos(skip r"/\*([^*]|\*+[^*/])*\*+/")]
pub enum Token {
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(";")]
    Semicolon,

    // "..." with backslash escapes
    #[regex(r#""([^"\\]|\\.)*""#)]
    QuotedString,

    // Bare word: keywords, addresses, numbers, unquoted names
    #[regex(r#"[^\s{};"/#][^\s{};"]*"#)]
    Word,
}

impl Token {
    /// Check if this token carries a value (bare or quoted word)
    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word | Token::QuotedString)
    }
}
