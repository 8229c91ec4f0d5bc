//! Renders an expression tree back to source text.
//!
//! Two layout modes: compact (one line, minimal separators) and indented
//! (call arguments and list elements on their own lines, trailing commas,
//! nested blocks re-indented as a whole). Rendering never mutates the tree.
//!
//! The round trip is structural, not textual: whitespace is normalized and
//! strings are always re-quoted with `'` regardless of the quote style they
//! were written with, but re-parsing the rendered text yields an equal tree.
//!
//! # Examples
//!
//! ```
//! use rivulet_lang::{Lexer, Parser, RuleTable};
//! use rivulet_lang::render::{to_text, to_text_indented};
//!
//! let lexer = Lexer::new(&RuleTable::standard()).unwrap();
//! let tokens = lexer.tokenize("f( 1,2 )").collect::<Result<Vec<_>, _>>().unwrap();
//! let ast = Parser::new(tokens).parse().unwrap();
//!
//! assert_eq!(to_text(&ast).unwrap(), "f(1, 2)");
//! assert_eq!(to_text_indented(&ast).unwrap(), "f(\n    1,\n    2,\n)");
//! ```

use std::fmt;

use crate::ast::{Node, Scalar, Tag};

/// Output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Single line, minimal separators
    Compact,
    /// Multi-line with nested indentation for call and list bodies
    Indented,
}

/// The tree's shape contradicts its tag (a leaf where children are needed,
/// or an interior node under a value-carrying tag).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderError {
    pub tag: Tag,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed {} node", self.tag)
    }
}

impl std::error::Error for RenderError {}

/// Tag-directed unparser. Pure: a renderer can be reused across trees and
/// never mutates what it renders.
pub struct Renderer {
    mode: RenderMode,
    indent: usize,
}

impl Renderer {
    pub fn new(mode: RenderMode) -> Self {
        Renderer { mode, indent: 4 }
    }

    pub fn render(&self, node: &Node) -> Result<String, RenderError> {
        self.node(node)
    }

    fn node(&self, node: &Node) -> Result<String, RenderError> {
        match node.tag() {
            Tag::Unop | Tag::Prodop => self.join(node, ""),
            Tag::Sumop | Tag::Compare | Tag::Logical => self.join(node, " "),
            Tag::Func => self.pair(node, " -> "),
            Tag::Assign => self.pair(node, " := "),
            Tag::Op | Tag::Num | Tag::Var => Ok(self.value(node)?.to_string()),
            Tag::Str => {
                let value = self.value(node)?.to_string();
                Ok(format!("'{}'", escape(&value)))
            }
            Tag::Call => {
                let callee = self.node(self.child(node, 0)?)?;
                let args = self.node(self.child(node, 1)?)?;
                match self.mode {
                    RenderMode::Compact => Ok(format!("{}({})", callee, args)),
                    RenderMode::Indented if args.is_empty() => Ok(format!("{}()", callee)),
                    RenderMode::Indented => Ok(format!(
                        "{}(\n{}\n)",
                        callee,
                        indent_block(&args, self.indent)
                    )),
                }
            }
            Tag::Get => {
                let target = self.node(self.child(node, 0)?)?;
                let key = self.node(self.child(node, 1)?)?;
                Ok(format!("{}[{}]", target, key))
            }
            Tag::Paren => Ok(format!("({})", self.node(self.child(node, 0)?)?)),
            Tag::List => {
                let parts = self.parts(node)?;
                match self.mode {
                    RenderMode::Compact => Ok(format!("[{}]", parts.join(", "))),
                    RenderMode::Indented if parts.is_empty() => Ok("[]".to_string()),
                    RenderMode::Indented => Ok(format!(
                        "[\n{},\n]",
                        indent_block(&parts.join(",\n"), self.indent)
                    )),
                }
            }
            Tag::Args => {
                let parts = self.parts(node)?;
                match self.mode {
                    RenderMode::Compact => Ok(parts.join(", ")),
                    RenderMode::Indented if parts.is_empty() => Ok(String::new()),
                    RenderMode::Indented => Ok(format!("{},", parts.join(",\n"))),
                }
            }
            Tag::Key => self.join(node, ", "),
        }
    }

    fn parts(&self, node: &Node) -> Result<Vec<String>, RenderError> {
        node.children().iter().map(|c| self.node(c)).collect()
    }

    fn join(&self, node: &Node, sep: &str) -> Result<String, RenderError> {
        Ok(self.parts(node)?.join(sep))
    }

    fn pair(&self, node: &Node, sep: &str) -> Result<String, RenderError> {
        Ok(format!(
            "{}{}{}",
            self.node(self.child(node, 0)?)?,
            sep,
            self.node(self.child(node, 1)?)?
        ))
    }

    fn child<'n>(&self, node: &'n Node, index: usize) -> Result<&'n Node, RenderError> {
        node.children().get(index).ok_or(RenderError { tag: node.tag() })
    }

    fn value<'n>(&self, node: &'n Node) -> Result<&'n Scalar, RenderError> {
        node.value().ok_or(RenderError { tag: node.tag() })
    }
}

/// Escape the output quote character and the escape character itself, so
/// rendered strings re-parse to the same content.
fn escape(s: &str) -> String {
    s.chars()
        .flat_map(|c| match c {
            '\'' | '\\' => vec!['\\', c],
            c => vec![c],
        })
        .collect()
}

fn indent_block(block: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    block
        .lines()
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
}

// Convenience functions

/// Renders a tree on a single line.
///
/// # Examples
///
/// ```
/// use rivulet_lang::ast::{Node, Scalar, Tag};
/// use rivulet_lang::render::to_text;
///
/// let ast = Node::tree(
///     Tag::Sumop,
///     vec![
///         Node::leaf(Tag::Num, Scalar::Int(1)),
///         Node::leaf(Tag::Op, Scalar::Str("+".to_string())),
///         Node::leaf(Tag::Num, Scalar::Int(2)),
///     ],
/// );
/// assert_eq!(to_text(&ast).unwrap(), "1 + 2");
/// ```
pub fn to_text(node: &Node) -> Result<String, RenderError> {
    Renderer::new(RenderMode::Compact).render(node)
}

/// Renders a tree across multiple lines, indenting call and list bodies.
pub fn to_text_indented(node: &Node) -> Result<String, RenderError> {
    Renderer::new(RenderMode::Indented).render(node)
}
