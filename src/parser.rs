//! Recursive-descent, precedence-climbing parser.
//!
//! Grammar levels, lowest precedence first (left-associative throughout):
//!
//! ```text
//! expression  = logical [':=' logical]          one assignment, non-chaining
//! function    = logical ['->' logical]          collection elements parse here
//! logical     = comparison (('&&'|'||') comparison)*
//! comparison  = sum (('='|'!='|'>'|'<') product)*
//! sum         = product (('+'|'-') product)*
//! product     = postfix (('*'|'/') postfix)*
//! postfix     = term ('(' collection ')' | '[' collection ']')*
//! term        = word | number | string | ('+'|'-') term
//!             | '(' collection ')' | '[' collection ']'
//! ```
//!
//! The comparison level parses its right operand at product precedence, one
//! level below its own left operand. `a = b + c` therefore stops after `b`;
//! parenthesize the right side to compare against a sum.

use std::fmt;

use crate::ast::{Node, Scalar, Tag, Token, TokenCategory, TokenVariant};

/// Nesting levels of `term` recursion before parsing gives up. Deeply nested
/// input fails with [`ParseError::NestingTooDeep`] instead of exhausting the
/// call stack.
pub const MAX_NESTING: usize = 200;

/// The current token is not valid in the current grammar position.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// No expression can start with this token.
    UnexpectedToken(Token),
    /// The token is recognized but has no grammar rule wired up
    /// (`@(`, `{`, and the operators outside the precedence ladder).
    NotImplemented(Token),
    /// A string literal's closing quote never arrived.
    UnterminatedString { line: usize, offset: usize },
    /// [`Parser::parse`] found tokens after the expression ended.
    TrailingInput(Token),
    /// The input nests deeper than [`MAX_NESTING`] levels.
    NestingTooDeep { limit: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken(token) => write!(f, "invalid expression at {}", token),
            ParseError::NotImplemented(token) => write!(f, "not implemented: {}", token),
            ParseError::UnterminatedString { line, offset } => {
                write!(f, "unterminated string starting at {}:{}", line, offset)
            }
            ParseError::TrailingInput(token) => {
                write!(f, "trailing input after expression: {}", token)
            }
            ParseError::NestingTooDeep { limit } => {
                write!(f, "expression nests deeper than {} levels", limit)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses a token sequence into a [`Node`] tree.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    end: Token,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = Token::end_of_input(
            tokens.last().map(|t| t.line).unwrap_or(1),
            tokens.last().map(|t| t.end).unwrap_or(0),
        );
        Parser {
            tokens,
            pos: 0,
            depth: 0,
            end,
        }
    }

    /// Next non-whitespace token and the index just past it. Does not move
    /// the cursor; callers commit by assigning the returned index to it.
    fn peek(&self) -> (usize, &Token) {
        let mut i = self.pos;
        while let Some(token) = self.tokens.get(i) {
            if token.category == TokenCategory::Space {
                i += 1;
            } else {
                return (i + 1, token);
            }
        }
        (i, &self.end)
    }

    /// Parse one expression and require that nothing follows it.
    pub fn parse(&mut self) -> Result<Node, ParseError> {
        let expr = self.parse_expression()?;
        let (_, token) = self.peek();
        if token.category != TokenCategory::End {
            return Err(ParseError::TrailingInput(token.clone()));
        }
        Ok(expr)
    }

    /// Parse one expression and stop at the grammar boundary, leaving any
    /// remaining tokens unconsumed.
    pub fn parse_expression(&mut self) -> Result<Node, ParseError> {
        let left = self.parse_logical()?;

        let (j, token) = self.peek();
        if token.variant == TokenVariant::Assign {
            self.pos = j;
            let right = self.parse_logical()?;
            Ok(Node::tree(Tag::Assign, vec![left, right]))
        } else {
            Ok(left)
        }
    }

    fn parse_function_expression(&mut self) -> Result<Node, ParseError> {
        let left = self.parse_logical()?;

        let (j, token) = self.peek();
        if token.variant == TokenVariant::Arrow {
            self.pos = j;
            let right = self.parse_logical()?;
            Ok(Node::tree(Tag::Func, vec![left, right]))
        } else {
            Ok(left)
        }
    }

    fn parse_logical(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_comparison()?;

        loop {
            let (j, token) = self.peek();
            match token.variant {
                TokenVariant::And | TokenVariant::Or => {
                    let op = Node::leaf(Tag::Op, Scalar::Str(token.text.clone()));
                    self.pos = j;
                    let right = self.parse_comparison()?;
                    left = Node::tree(Tag::Logical, vec![left, op, right]);
                }
                _ => return Ok(left),
            }
        }
    }

    fn parse_comparison(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_sum()?;

        loop {
            let (j, token) = self.peek();
            match token.variant {
                TokenVariant::Equals
                | TokenVariant::NotEquals
                | TokenVariant::Greater
                | TokenVariant::Lesser => {
                    let op = Node::leaf(Tag::Op, Scalar::Str(token.text.clone()));
                    self.pos = j;
                    // Right operand parses at product precedence, not sum.
                    let right = self.parse_product()?;
                    left = Node::tree(Tag::Compare, vec![left, op, right]);
                }
                _ => return Ok(left),
            }
        }
    }

    fn parse_sum(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_product()?;

        loop {
            let (j, token) = self.peek();
            match token.variant {
                TokenVariant::Add | TokenVariant::Minus => {
                    let op = Node::leaf(Tag::Op, Scalar::Str(token.text.clone()));
                    self.pos = j;
                    let right = self.parse_product()?;
                    left = Node::tree(Tag::Sumop, vec![left, op, right]);
                }
                _ => return Ok(left),
            }
        }
    }

    fn parse_product(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_postfix()?;

        loop {
            let (j, token) = self.peek();
            match token.variant {
                TokenVariant::Multiply | TokenVariant::Divide => {
                    let op = Node::leaf(Tag::Op, Scalar::Str(token.text.clone()));
                    self.pos = j;
                    let right = self.parse_postfix()?;
                    left = Node::tree(Tag::Prodop, vec![left, op, right]);
                }
                _ => return Ok(left),
            }
        }
    }

    /// Trailing `(...)` wraps the accumulated left side as a call, trailing
    /// `[...]` as an index access; chains resolve left to right.
    fn parse_postfix(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_term()?;

        loop {
            let (j, token) = self.peek();
            if token.category != TokenCategory::Open {
                return Ok(left);
            }
            let open = token.clone();
            self.pos = j;
            let items = self.parse_collection()?;
            left = match open.variant {
                TokenVariant::LParen => {
                    Node::tree(Tag::Call, vec![left, Node::tree(Tag::Args, items)])
                }
                TokenVariant::LSquare => {
                    Node::tree(Tag::Get, vec![left, Node::tree(Tag::Key, items)])
                }
                _ => return Err(ParseError::NotImplemented(open)),
            };
        }
    }

    fn parse_term(&mut self) -> Result<Node, ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING });
        }
        self.depth += 1;
        let term = self.parse_term_inner();
        self.depth -= 1;
        term
    }

    fn parse_term_inner(&mut self) -> Result<Node, ParseError> {
        let (j, token) = self.peek();
        let token = token.clone();
        self.pos = j;

        match token.category {
            TokenCategory::Word => Ok(Node::leaf(Tag::Var, Scalar::Str(token.text))),
            TokenCategory::Number => Ok(Node::leaf(Tag::Num, number(&token.text))),
            TokenCategory::Open => {
                let items = self.parse_collection()?;
                match token.variant {
                    TokenVariant::LSquare => Ok(Node::tree(Tag::List, items)),
                    // A 1-child grouping, kept as a collection node.
                    TokenVariant::LParen => Ok(Node::tree(Tag::Paren, items)),
                    _ => Err(ParseError::NotImplemented(token)),
                }
            }
            TokenCategory::String => match token.variant {
                TokenVariant::Apostrophe | TokenVariant::Quotes => self.parse_string(&token),
                _ => Err(ParseError::UnexpectedToken(token)),
            },
            TokenCategory::Operator => match token.variant {
                TokenVariant::Add | TokenVariant::Minus => {
                    let op = Node::leaf(Tag::Op, Scalar::Str(token.text));
                    // Unary binds a single recursively parsed term, not a
                    // full expression: `- -x` nests, `-f(x)` parses as a
                    // call of the negated term.
                    let operand = self.parse_term()?;
                    Ok(Node::tree(Tag::Unop, vec![op, operand]))
                }
                _ => Err(ParseError::NotImplemented(token)),
            },
            _ => Err(ParseError::UnexpectedToken(token)),
        }
    }

    /// Comma-separated function-level expressions up to the next close
    /// delimiter, which is consumed. Trailing commas are tolerated.
    ///
    /// Q: should the close delimiter be required to match its opener?
    /// `[1)` currently parses.
    fn parse_collection(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut items = Vec::new();

        loop {
            let (j, token) = self.peek();
            match token.category {
                TokenCategory::Close => {
                    self.pos = j;
                    return Ok(items);
                }
                TokenCategory::End => {
                    return Err(ParseError::UnexpectedToken(token.clone()));
                }
                _ => {}
            }

            items.push(self.parse_function_expression()?);

            let (j, token) = self.peek();
            if token.variant == TokenVariant::Comma {
                self.pos = j;
            }
        }
    }

    /// Assemble a string literal from the raw tokens following its opening
    /// quote. Tokens are taken verbatim (whitespace included) until an
    /// unescaped token of the opening quote's variant. The escape token
    /// itself is dropped; whatever follows it is kept as content.
    fn parse_string(&mut self, open: &Token) -> Result<Node, ParseError> {
        let mut content = String::new();
        let mut escaped = false;
        let mut i = self.pos;

        while let Some(token) = self.tokens.get(i) {
            if escaped {
                escaped = false;
                content.push_str(&token.text);
            } else if token.variant == open.variant {
                self.pos = i + 1;
                return Ok(Node::leaf(Tag::Str, Scalar::Str(content)));
            } else if token.variant == TokenVariant::Escape {
                escaped = true;
            } else {
                content.push_str(&token.text);
            }
            i += 1;
        }

        Err(ParseError::UnterminatedString {
            line: open.line,
            offset: open.start,
        })
    }
}

/// Integer if the text fits an `i64`, float otherwise.
fn number(text: &str) -> Scalar {
    match text.parse::<i64>() {
        Ok(n) => Scalar::Int(n),
        Err(_) => Scalar::Float(text.parse().unwrap_or(f64::INFINITY)),
    }
}

#[test]
fn test_number_prefers_integers() {
    assert_eq!(number("42"), Scalar::Int(42));
    assert_eq!(number("0.5"), Scalar::Float(0.5));
    assert_eq!(number(".5"), Scalar::Float(0.5));
}
