//! Main module for namedconf library functionality

pub mod ast;
pub mod formats;
pub mod lexer;
pub mod naming;
pub mod parser;
pub mod processor;
#[cfg(test)]
pub mod testing;
