//! Parse, re-render, and inspect expressions for the CLI

use super::CliError;
use crate::{Lexer, Node, Parser, RenderMode, Renderer, RuleTable, Token};

/// Options for the render command
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// The expression to parse and re-render
    pub source: String,
    /// Multi-line output with nested indentation
    pub indented: bool,
}

fn parse_source(source: &str) -> Result<Node, CliError> {
    let lexer = Lexer::new(&RuleTable::standard())?;
    let tokens = lexer.tokenize(source).collect::<Result<Vec<_>, _>>()?;
    Parser::new(tokens).parse().map_err(CliError::Parse)
}

/// Parse an expression and render it back to text.
pub fn execute_render(options: &RenderOptions) -> Result<String, CliError> {
    let node = parse_source(&options.source)?;
    let mode = if options.indented {
        RenderMode::Indented
    } else {
        RenderMode::Compact
    };
    Renderer::new(mode).render(&node).map_err(CliError::Render)
}

/// Parse an expression and dump its tree as pretty-printed JSON.
pub fn execute_ast(source: &str) -> Result<String, CliError> {
    let node = parse_source(source)?;
    serde_json::to_string_pretty(&node.to_json()).map_err(CliError::Json)
}

/// Tokenize an expression and list the tokens, one per line.
pub fn execute_tokens(source: &str) -> Result<String, CliError> {
    let lexer = Lexer::new(&RuleTable::standard())?;
    let tokens = lexer.tokenize(source).collect::<Result<Vec<Token>, _>>()?;

    let mut out = String::new();
    for token in &tokens {
        out.push_str(&format!(
            "{}:{}-{}\t{:?}.{:?}\t{:?}\n",
            token.line, token.start, token.end, token.category, token.variant, token.text
        ));
    }
    Ok(out)
}
