use std::fmt;

/// Lexical categories, in rule-table declaration order.
///
/// The order of these categories (and of the variants inside each) is part
/// of the lexer's contract: when two rules could match at the same position,
/// the first-declared one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// Infix and prefix operator symbols
    Operator,

    /// Opening delimiters
    ///
    /// # Examples
    /// ```text
    /// @(
    /// (
    /// {
    /// [
    /// ```
    Open,

    /// Closing delimiters
    Close,

    /// Element separators (comma)
    Sep,

    /// String quoting and escape characters
    ///
    /// Strings are not assembled by the lexer; the quote and escape
    /// characters come out as individual tokens and the parser joins
    /// everything between matching quotes into one literal.
    String,

    /// A run of whitespace
    ///
    /// Whitespace is tokenized, not dropped, so that every character of the
    /// input is covered by exactly one token.
    Space,

    /// Integer or decimal number
    Number,

    /// Identifier words and reserved `#item` / `#index` names
    Word,

    /// Synthetic end-of-input marker
    ///
    /// Never produced by the lexer; the parser fabricates one so lookahead
    /// past the last token stays in bounds.
    End,
}

/// The specific symbol or shape within a token category.
///
/// Several variants are deliberately declared as duplicates of an earlier
/// symbol (`Least` of `LessOrEqual`, `BitwiseXor` of `Xor`, `Concat` of
/// `Add`). The earlier declaration always wins during lexing; the duplicates
/// are kept because the table reproduces a grammar in which both readings
/// are documented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenVariant {
    // Operators
    /// Lambda / mapping-pair arrow (`->`)
    Arrow,
    /// Assignment (`:=`)
    Assign,
    /// Addition (`+`)
    Add,
    /// Subtraction or unary minus (`-`)
    Minus,
    /// Division (`/`)
    Divide,
    /// Multiplication (`*`)
    Multiply,
    /// Modulo (`%`)
    Mod,
    /// Logical AND (`&&`)
    And,
    /// Logical OR (`||`)
    Or,
    /// Exclusive or (`^`)
    Xor,
    /// Bitwise AND (`&`)
    BitwiseAnd,
    /// Bitwise OR (`|`)
    BitwiseOr,
    /// Bitwise exclusive or (`^`) — shadowed by [`TokenVariant::Xor`]
    BitwiseXor,
    /// Equality (`=`)
    Equals,
    /// Inequality (`!=`)
    NotEquals,
    /// Case-insensitive equality (`<=>`)
    EqualsIgnoreCase,
    /// Greater than or equal (`>=`)
    GreaterOrEqual,
    /// Less than or equal (`<=`)
    LessOrEqual,
    /// Minimum (`<=`) — shadowed by [`TokenVariant::LessOrEqual`]
    Least,
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Lesser,
    /// String concatenation (`+`) — shadowed by [`TokenVariant::Add`]
    Concat,

    // Open delimiters
    /// PowerShell-style array opener (`@(`)
    LArray,
    /// Left parenthesis
    LParen,
    /// Left curly brace
    LCurly,
    /// Left square bracket
    LSquare,

    // Close delimiters
    /// Right parenthesis
    RParen,
    /// Right curly brace
    RCurly,
    /// Right square bracket
    RSquare,

    // Separators
    /// Comma
    Comma,

    // String machinery
    /// Single-quote string delimiter
    Apostrophe,
    /// Double-quote string delimiter
    Quotes,
    /// Backslash escape
    Escape,

    // Patterns
    /// Whitespace run
    Space,
    /// Integer or decimal number
    Number,
    /// Reserved `#item` / `#item_N` name
    Item,
    /// Reserved `#index` / `#index_N` name
    Index,
    /// Identifier word
    Word,

    /// Synthetic end-of-input marker
    End,
}

/// A classified, positioned span of source text.
///
/// `start` and `end` are byte offsets within the token's line; `line` is
/// 1-indexed. Every character of a lexed line belongs to exactly one token,
/// whitespace included.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub category: TokenCategory,
    pub variant: TokenVariant,
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub line: usize,
}

impl Token {
    pub fn new(
        category: TokenCategory,
        variant: TokenVariant,
        text: impl Into<String>,
        start: usize,
        end: usize,
        line: usize,
    ) -> Self {
        Token {
            category,
            variant,
            text: text.into(),
            start,
            end,
            line,
        }
    }

    /// Synthetic end-of-input token, positioned just past the last real one.
    pub(crate) fn end_of_input(line: usize, offset: usize) -> Self {
        Token::new(TokenCategory::End, TokenVariant::End, "", offset, offset, line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.category == TokenCategory::End {
            write!(f, "end of input at line {}", self.line)
        } else {
            write!(
                f,
                "{:?} {:?} at {}:{}",
                self.variant, self.text, self.line, self.start
            )
        }
    }
}
