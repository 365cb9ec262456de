//! Parser for the line-oriented story script.
//!
//! ```text
//! scene Cafe
//! show Alice at left
//! Alice "Hi"
//! hide Alice
//! "The end."
//! ```

pub mod ast;
pub mod parser;

pub use ast::{Instruction, Script, DEFAULT_POSITION};
pub use parser::{parse_line, Parser};

/// Parses `src` into a [`Script`].
pub fn parse(src: &str) -> Script {
    Parser::new(src).parse()
}
