//! SVG path data handling: lexing and resolution to fixed-point nodes

mod error;
pub mod lexer;
mod resolver;

pub use error::PathError;
pub use lexer::{tokenize, Span, Token, FIXED_POINT_SCALE};
pub use resolver::{resolve, Command, CommandKind};
