//! # Rivulet Expression Language - Tokens and Syntax Tree
//!
//! This module defines the lexical tokens and the abstract syntax tree for
//! the Rivulet expression language, a small expression-only language in the
//! style of data-flow pipeline expression builders.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Classified, positioned spans produced by the lexer
//! - **[nodes]** - The tagged expression tree produced by the parser
//!
//! ## Pipeline
//!
//! ```text
//! text → Lexer → tokens → Parser → Node → Renderer → text
//! ```
//!
//! The round trip is structural, not textual: rendering normalizes spacing
//! and quote style, but re-parsing the rendered text yields an equal tree.
//!
//! ## Core Concepts
//!
//! ### Expressions
//!
//! The language covers literals, arithmetic, comparisons, logical operators,
//! calls, indexing, list literals, mapping pairs, and a single top-level
//! assignment:
//!
//! ```text
//! x := [y -> 2, z -> 3]
//! split(player, '\\')[1]
//! mapIf(['icecream', 'cake', 'soda'], length(#item)>4, upper(#item))
//! ```
//!
//! ### Node shape
//!
//! Every node is either a leaf (`{tag, value}`) or an interior node
//! (`{tag, children}`). The tag names the construct:
//!
//! ```text
//! 1+2*3   →   SUMOP(NUM(1), OP(+), PRODOP(NUM(2), OP(*), NUM(3)))
//! f(1)[2] →   GET(CALL(VAR(f), ARGS(NUM(1))), KEY(NUM(2)))
//! ```
//!
//! ### Reserved words
//!
//! `#item`, `#index` and their numbered forms (`#item_2`) lex as words and
//! parse as ordinary variables; their meaning is the evaluator's concern.
pub mod nodes;
pub mod tokens;

pub use nodes::{Node, Scalar, Tag};
pub use tokens::{Token, TokenCategory, TokenVariant};
