use std::fmt;
use std::str::Lines;

use regex::Regex;

use crate::ast::{Token, TokenCategory, TokenVariant};
use crate::rules::{Matcher, RuleTable};

/// No rule matched at the current scan position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// 1-indexed line number
    pub line: usize,
    /// Byte offset within the line
    pub offset: usize,
    /// The character the scan stopped on
    pub found: char,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no token rule matches {:?} at line {}, offset {}",
            self.found, self.line, self.offset
        )
    }
}

impl std::error::Error for LexError {}

/// Compiled form of a [`RuleTable`].
///
/// The table becomes one anchored alternation with a capture group per rule,
/// in declaration order. The regex engine's leftmost-first alternation
/// semantics make the first-declared rule win whenever several could match
/// at the same position, so no per-rule retry loop is needed.
pub struct Lexer {
    pattern: Regex,
    kinds: Vec<(TokenCategory, TokenVariant)>,
}

impl Lexer {
    pub fn new(table: &RuleTable) -> Result<Self, regex::Error> {
        let mut branches = Vec::new();
        let mut kinds = Vec::new();
        for rule in table.rules() {
            let body = match rule.matcher {
                Matcher::Literal(symbol) => regex::escape(symbol),
                Matcher::Pattern(pattern) => pattern.to_string(),
            };
            branches.push(format!("({})", body));
            kinds.push((rule.category, rule.variant));
        }

        let pattern = Regex::new(&format!(r"\A(?:{})", branches.join("|")))?;
        Ok(Lexer { pattern, kinds })
    }

    /// Lazily tokenize `source`, line by line.
    ///
    /// Line numbers are 1-indexed and restart per call; offsets are byte
    /// offsets within the line. Every character of every line is covered by
    /// exactly one token (whitespace included); a position no rule matches
    /// yields a [`LexError`] and ends the stream.
    pub fn tokenize<'l, 's>(&'l self, source: &'s str) -> Tokens<'l, 's> {
        Tokens {
            lexer: self,
            lines: source.lines(),
            line: "",
            lineno: 0,
            pos: 0,
            failed: false,
        }
    }

    fn match_at(&self, line: &str, pos: usize, lineno: usize) -> Result<Token, LexError> {
        let rest = &line[pos..];
        if let Some(caps) = self.pattern.captures(rest) {
            for (index, (category, variant)) in self.kinds.iter().enumerate() {
                match caps.get(index + 1) {
                    Some(m) if !m.is_empty() => {
                        return Ok(Token::new(
                            *category,
                            *variant,
                            m.as_str(),
                            pos,
                            pos + m.end(),
                            lineno,
                        ));
                    }
                    // An empty match cannot advance the cursor; treat it the
                    // same as no match.
                    Some(_) => break,
                    None => {}
                }
            }
        }

        Err(LexError {
            line: lineno,
            offset: pos,
            found: rest.chars().next().unwrap_or('\0'),
        })
    }
}

/// Single-pass token stream over one source text.
///
/// Fused: after an error (or the end of input) it keeps returning `None`.
/// Restart by calling [`Lexer::tokenize`] again.
pub struct Tokens<'l, 's> {
    lexer: &'l Lexer,
    lines: Lines<'s>,
    line: &'s str,
    lineno: usize,
    pos: usize,
    failed: bool,
}

impl Iterator for Tokens<'_, '_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        while self.pos >= self.line.len() {
            self.line = self.lines.next()?;
            self.lineno += 1;
            self.pos = 0;
        }

        match self.lexer.match_at(self.line, self.pos, self.lineno) {
            Ok(token) => {
                self.pos = token.end;
                Some(Ok(token))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

#[test]
fn test_overlapping_symbols_take_first_declared_variant() {
    let lexer = Lexer::new(&RuleTable::standard()).unwrap();
    let variants: Vec<_> = lexer
        .tokenize("<= ^ + <=> >=")
        .map(|t| t.unwrap().variant)
        .collect();

    assert_eq!(
        variants,
        vec![
            TokenVariant::LessOrEqual,
            TokenVariant::Space,
            TokenVariant::Xor,
            TokenVariant::Space,
            TokenVariant::Add,
            TokenVariant::Space,
            TokenVariant::EqualsIgnoreCase,
            TokenVariant::Space,
            TokenVariant::GreaterOrEqual,
        ]
    );
}

#[test]
fn test_every_character_is_covered() {
    let lexer = Lexer::new(&RuleTable::standard()).unwrap();
    let source = "split(player, 'x')[1]";
    let tokens: Vec<_> = lexer
        .tokenize(source)
        .collect::<Result<_, _>>()
        .unwrap();

    let mut pos = 0;
    for token in &tokens {
        assert_eq!(token.start, pos, "gap before {:?}", token.text);
        pos = token.end;
    }
    assert_eq!(pos, source.len());
}
