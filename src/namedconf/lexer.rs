//! Lexer module for named.conf
//!
//! This module contains the tokenization logic, including token definitions
//! and the lexer implementation. Whitespace and the three comment styles
//! (`//`, `#`, `/* */`) never reach the parser.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_spans, unquote, LexError};
pub use tokens::Token;
