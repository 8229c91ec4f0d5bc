// tests/lexer_tests.rs

use rivulet_lang::ast::{Token, TokenCategory, TokenVariant};
use rivulet_lang::lexer::Lexer;
use rivulet_lang::rules::RuleTable;

fn lexer() -> Lexer {
    Lexer::new(&RuleTable::standard()).unwrap()
}

fn tokens(source: &str) -> Vec<Token> {
    lexer().tokenize(source).collect::<Result<_, _>>().unwrap()
}

fn kinds(source: &str) -> Vec<(TokenCategory, TokenVariant)> {
    tokens(source)
        .iter()
        .map(|t| (t.category, t.variant))
        .collect()
}

// ============================================================================
// Single Symbol Tokens
// ============================================================================

#[test]
fn test_single_symbol_tokens() {
    let test_cases = vec![
        ("+", TokenCategory::Operator, TokenVariant::Add),
        ("-", TokenCategory::Operator, TokenVariant::Minus),
        ("/", TokenCategory::Operator, TokenVariant::Divide),
        ("*", TokenCategory::Operator, TokenVariant::Multiply),
        ("%", TokenCategory::Operator, TokenVariant::Mod),
        ("=", TokenCategory::Operator, TokenVariant::Equals),
        (">", TokenCategory::Operator, TokenVariant::Greater),
        ("<", TokenCategory::Operator, TokenVariant::Lesser),
        ("^", TokenCategory::Operator, TokenVariant::Xor),
        ("&", TokenCategory::Operator, TokenVariant::BitwiseAnd),
        ("|", TokenCategory::Operator, TokenVariant::BitwiseOr),
        ("(", TokenCategory::Open, TokenVariant::LParen),
        ("{", TokenCategory::Open, TokenVariant::LCurly),
        ("[", TokenCategory::Open, TokenVariant::LSquare),
        (")", TokenCategory::Close, TokenVariant::RParen),
        ("}", TokenCategory::Close, TokenVariant::RCurly),
        ("]", TokenCategory::Close, TokenVariant::RSquare),
        (",", TokenCategory::Sep, TokenVariant::Comma),
        ("'", TokenCategory::String, TokenVariant::Apostrophe),
        ("\"", TokenCategory::String, TokenVariant::Quotes),
        ("\\", TokenCategory::String, TokenVariant::Escape),
    ];

    for (input, category, variant) in test_cases {
        let token = &tokens(input)[0];
        assert_eq!(token.category, category, "category for input: {}", input);
        assert_eq!(token.variant, variant, "variant for input: {}", input);
        assert_eq!(token.text, input);
    }
}

// ============================================================================
// Multi Symbol Tokens
// ============================================================================

#[test]
fn test_multi_symbol_tokens() {
    let test_cases = vec![
        ("->", TokenCategory::Operator, TokenVariant::Arrow),
        (":=", TokenCategory::Operator, TokenVariant::Assign),
        ("&&", TokenCategory::Operator, TokenVariant::And),
        ("||", TokenCategory::Operator, TokenVariant::Or),
        ("!=", TokenCategory::Operator, TokenVariant::NotEquals),
        ("<=>", TokenCategory::Operator, TokenVariant::EqualsIgnoreCase),
        (">=", TokenCategory::Operator, TokenVariant::GreaterOrEqual),
        ("<=", TokenCategory::Operator, TokenVariant::LessOrEqual),
        ("@(", TokenCategory::Open, TokenVariant::LArray),
    ];

    for (input, category, variant) in test_cases {
        let lexed = tokens(input);
        assert_eq!(lexed.len(), 1, "one token for input: {}", input);
        assert_eq!(lexed[0].category, category, "category for input: {}", input);
        assert_eq!(lexed[0].variant, variant, "variant for input: {}", input);
    }
}

#[test]
fn test_multi_symbol_vs_single_symbol() {
    assert_eq!(
        kinds("< ="),
        vec![
            (TokenCategory::Operator, TokenVariant::Lesser),
            (TokenCategory::Space, TokenVariant::Space),
            (TokenCategory::Operator, TokenVariant::Equals),
        ]
    );

    assert_eq!(
        kinds("& &&"),
        vec![
            (TokenCategory::Operator, TokenVariant::BitwiseAnd),
            (TokenCategory::Space, TokenVariant::Space),
            (TokenCategory::Operator, TokenVariant::And),
        ]
    );
}

// ============================================================================
// Overlapping Rules
// ============================================================================

#[test]
fn test_overlaps_resolve_to_first_declared_variant() {
    // `<=` is declared as both LessOrEqual and Least, `^` as both Xor and
    // BitwiseXor, `+` as both Add and Concat. First declaration wins.
    assert_eq!(tokens("<=")[0].variant, TokenVariant::LessOrEqual);
    assert_eq!(tokens("^")[0].variant, TokenVariant::Xor);
    assert_eq!(tokens("+")[0].variant, TokenVariant::Add);
}

#[test]
fn test_equals_ignore_case_wins_over_less_or_equal() {
    let lexed = tokens("<=>");
    assert_eq!(lexed.len(), 1);
    assert_eq!(lexed[0].variant, TokenVariant::EqualsIgnoreCase);
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_numbers() {
    let test_cases = vec!["42", "0", "1.5", "0.5", ".5", "123.456"];

    for input in test_cases {
        let lexed = tokens(input);
        assert_eq!(lexed.len(), 1, "one token for input: {}", input);
        assert_eq!(lexed[0].category, TokenCategory::Number);
        assert_eq!(lexed[0].text, input);
    }
}

#[test]
fn test_number_then_word() {
    // Identifiers cannot contain digits: `x1` is a word then a number.
    assert_eq!(
        kinds("x1"),
        vec![
            (TokenCategory::Word, TokenVariant::Word),
            (TokenCategory::Number, TokenVariant::Number),
        ]
    );
}

// ============================================================================
// Words and Reserved Names
// ============================================================================

#[test]
fn test_words_and_reserved_names() {
    let test_cases = vec![
        ("hello", TokenVariant::Word),
        ("hello_world", TokenVariant::Word),
        ("_internal", TokenVariant::Word),
        ("#item", TokenVariant::Item),
        ("#item_10", TokenVariant::Item),
        ("#index", TokenVariant::Index),
        ("#index_2", TokenVariant::Index),
    ];

    for (input, variant) in test_cases {
        let lexed = tokens(input);
        assert_eq!(lexed.len(), 1, "one token for input: {}", input);
        assert_eq!(lexed[0].category, TokenCategory::Word);
        assert_eq!(lexed[0].variant, variant, "variant for input: {}", input);
        assert_eq!(lexed[0].text, input);
    }
}

// ============================================================================
// Whitespace and Coverage
// ============================================================================

#[test]
fn test_whitespace_is_tokenized_not_dropped() {
    let lexed = tokens("a  +\tb");
    let texts: Vec<&str> = lexed.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "  ", "+", "\t", "b"]);
    assert_eq!(lexed[1].category, TokenCategory::Space);
    assert_eq!(lexed[3].category, TokenCategory::Space);
}

#[test]
fn test_tokens_cover_every_character() {
    let source = "mapIf(['a', 'b'], length(#item)>4)";
    let lexed = tokens(source);

    let mut pos = 0;
    for token in &lexed {
        assert_eq!(token.start, pos, "gap before {:?}", token.text);
        pos = token.end;
    }
    assert_eq!(pos, source.len());
}

#[test]
fn test_positions_and_lines() {
    let lexed = tokens("a\nbb\n\nc");

    assert_eq!((lexed[0].line, lexed[0].start, lexed[0].end), (1, 0, 1));
    assert_eq!((lexed[1].line, lexed[1].start, lexed[1].end), (2, 0, 2));
    // The empty third line yields no tokens.
    assert_eq!((lexed[2].line, lexed[2].start, lexed[2].end), (4, 0, 1));
    assert_eq!(lexed.len(), 3);
}

#[test]
fn test_empty_input() {
    assert!(tokens("").is_empty());
    assert!(tokens("\n\n").is_empty());
}

// ============================================================================
// Strings Stay Unassembled
// ============================================================================

#[test]
fn test_string_characters_lex_individually() {
    // The lexer emits quote and escape characters as tokens; the parser
    // assembles the literal.
    assert_eq!(
        kinds("'ab'"),
        vec![
            (TokenCategory::String, TokenVariant::Apostrophe),
            (TokenCategory::Word, TokenVariant::Word),
            (TokenCategory::String, TokenVariant::Apostrophe),
        ]
    );
}

// ============================================================================
// Lexical Errors
// ============================================================================

#[test]
fn test_bare_at_is_a_lex_error() {
    let result: Result<Vec<_>, _> = lexer().tokenize("@").collect();
    let err = result.unwrap_err();
    assert_eq!(err.line, 1);
    assert_eq!(err.offset, 0);
    assert_eq!(err.found, '@');
}

#[test]
fn test_at_not_followed_by_paren_is_a_lex_error() {
    let result: Result<Vec<_>, _> = lexer().tokenize("sum := a @ b").collect();
    let err = result.unwrap_err();
    assert_eq!(err.line, 1);
    assert_eq!(err.offset, 9);
    assert_eq!(err.found, '@');
}

#[test]
fn test_lex_error_reports_line_and_offset() {
    let result: Result<Vec<_>, _> = lexer().tokenize("ok+1\n1 ? 2").collect();
    let err = result.unwrap_err();
    assert_eq!(err.line, 2);
    assert_eq!(err.offset, 2);
    assert_eq!(err.found, '?');
}

#[test]
fn test_stream_ends_after_error() {
    let lexer = lexer();
    let mut stream = lexer.tokenize("a:b");
    assert!(stream.next().unwrap().is_ok()); // a
    assert!(stream.next().unwrap().is_err()); // :
    assert!(stream.next().is_none());
    assert!(stream.next().is_none());
}

#[test]
fn test_tokens_before_the_error_are_still_produced() {
    let collected: Vec<_> = lexer().tokenize("ab ; cd").collect();
    assert_eq!(collected.len(), 3); // "ab", " ", then the error
    assert!(collected[0].is_ok());
    assert!(collected[1].is_ok());
    assert!(collected[2].is_err());
}
