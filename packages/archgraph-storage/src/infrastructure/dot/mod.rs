//! DOT format: tokenizer, reader and writer

mod lexer;
mod parser;
mod writer;

pub use parser::parse_dot;
pub use writer::{quote_id, write_dot};
