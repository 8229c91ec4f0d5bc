pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod rules;

pub use ast::{Node, Scalar, Tag, Token, TokenCategory, TokenVariant};
pub use lexer::{LexError, Lexer};
pub use parser::{ParseError, Parser};
pub use render::{RenderError, RenderMode, Renderer, to_text, to_text_indented};
pub use rules::{Matcher, Rule, RuleTable};
