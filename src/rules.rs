//! The token rule table: an ordered list of `(category, variant, matcher)`
//! entries that the lexer compiles into a single anchored alternation.
//!
//! Declaration order is load-bearing. When two rules could match at the same
//! scan position the first-declared one wins, so overlapping symbols
//! (`<=` as `LessOrEqual` and `Least`, `^` as `Xor` and `BitwiseXor`, `+` as
//! `Add` and `Concat`) resolve deterministically to the earlier entry.

use crate::ast::{TokenCategory, TokenVariant};

/// How a rule recognizes text: a verbatim symbol (escaped before
/// compilation) or a regular-expression pattern taken as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    Literal(&'static str),
    Pattern(&'static str),
}

/// One classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub category: TokenCategory,
    pub variant: TokenVariant,
    pub matcher: Matcher,
}

const fn lit(category: TokenCategory, variant: TokenVariant, symbol: &'static str) -> Rule {
    Rule {
        category,
        variant,
        matcher: Matcher::Literal(symbol),
    }
}

const fn pat(category: TokenCategory, variant: TokenVariant, pattern: &'static str) -> Rule {
    Rule {
        category,
        variant,
        matcher: Matcher::Pattern(pattern),
    }
}

/// Ordered rule table. Read-only after construction; build it once and pass
/// it to [`crate::Lexer::new`].
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        RuleTable { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The standard Rivulet grammar.
    pub fn standard() -> Self {
        use TokenCategory as C;
        use TokenVariant as V;

        RuleTable::new(vec![
            // operator
            lit(C::Operator, V::Arrow, "->"),
            lit(C::Operator, V::Assign, ":="),
            lit(C::Operator, V::Add, "+"),
            lit(C::Operator, V::Minus, "-"),
            lit(C::Operator, V::Divide, "/"),
            lit(C::Operator, V::Multiply, "*"),
            lit(C::Operator, V::Mod, "%"),
            lit(C::Operator, V::And, "&&"),
            lit(C::Operator, V::Or, "||"),
            lit(C::Operator, V::Xor, "^"),
            lit(C::Operator, V::BitwiseAnd, "&"),
            lit(C::Operator, V::BitwiseOr, "|"),
            lit(C::Operator, V::BitwiseXor, "^"),
            lit(C::Operator, V::Equals, "="),
            lit(C::Operator, V::NotEquals, "!="),
            lit(C::Operator, V::EqualsIgnoreCase, "<=>"),
            lit(C::Operator, V::GreaterOrEqual, ">="),
            lit(C::Operator, V::LessOrEqual, "<="),
            lit(C::Operator, V::Least, "<="),
            lit(C::Operator, V::Greater, ">"),
            lit(C::Operator, V::Lesser, "<"),
            lit(C::Operator, V::Concat, "+"),
            // open
            lit(C::Open, V::LArray, "@("),
            lit(C::Open, V::LParen, "("),
            lit(C::Open, V::LCurly, "{"),
            lit(C::Open, V::LSquare, "["),
            // close
            lit(C::Close, V::RParen, ")"),
            lit(C::Close, V::RCurly, "}"),
            lit(C::Close, V::RSquare, "]"),
            // sep
            lit(C::Sep, V::Comma, ","),
            // string
            lit(C::String, V::Apostrophe, "'"),
            lit(C::String, V::Quotes, "\""),
            lit(C::String, V::Escape, "\\"),
            // space
            pat(C::Space, V::Space, r"\s+"),
            // number
            pat(C::Number, V::Number, r"(?:\d*\.\d+|\d+)"),
            // word
            pat(C::Word, V::Item, r"#item(?:_\d+)?"),
            pat(C::Word, V::Index, r"#index(?:_\d+)?"),
            pat(C::Word, V::Word, r"[a-zA-Z_]+"),
        ])
    }
}

#[test]
fn test_standard_table_order_pins_overlaps() {
    let table = RuleTable::standard();
    let position = |variant: TokenVariant| {
        table
            .rules()
            .iter()
            .position(|r| r.variant == variant)
            .unwrap()
    };

    assert!(position(TokenVariant::LessOrEqual) < position(TokenVariant::Least));
    assert!(position(TokenVariant::Xor) < position(TokenVariant::BitwiseXor));
    assert!(position(TokenVariant::Add) < position(TokenVariant::Concat));
    assert!(position(TokenVariant::EqualsIgnoreCase) < position(TokenVariant::LessOrEqual));
}
