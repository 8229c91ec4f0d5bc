// tests/render_tests.rs

use rivulet_lang::ast::{Node, Scalar, Tag};
use rivulet_lang::lexer::Lexer;
use rivulet_lang::parser::Parser;
use rivulet_lang::render::{RenderMode, Renderer, to_text, to_text_indented};
use rivulet_lang::rules::RuleTable;

fn parse(source: &str) -> Node {
    let lexer = Lexer::new(&RuleTable::standard()).unwrap();
    let tokens = lexer
        .tokenize(source)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    Parser::new(tokens).parse().unwrap()
}

fn compact(source: &str) -> String {
    to_text(&parse(source)).unwrap()
}

fn indented(source: &str) -> String {
    to_text_indented(&parse(source)).unwrap()
}

// ============================================================================
// Compact Mode
// ============================================================================

#[test]
fn test_compact_normalizes_spacing() {
    let test_cases = vec![
        ("1 +  2 * 3", "1 + 2*3"),
        ("- 1", "-1"),
        ("hello( 1,'a' , 3 )", "hello(1, 'a', 3)"),
        ("f(1)[2]", "f(1)[2]"),
        ("x:=[y->2]", "x := [y -> 2]"),
        ("a&&b = c", "a && b = c"),
        ("( 1+1 )", "(1 + 1)"),
        ("[1 ,2, 3 ,]", "[1, 2, 3]"),
        ("f()", "f()"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(compact(input), expected, "for input: {}", input);
    }
}

#[test]
fn test_product_renders_without_spaces() {
    assert_eq!(compact("2 * 3 / 4"), "2*3/4");
}

#[test]
fn test_quote_style_is_not_preserved() {
    assert_eq!(compact(r#""hi""#), "'hi'");
    assert_eq!(compact("'hi'"), "'hi'");
}

#[test]
fn test_string_content_is_escaped_on_output() {
    assert_eq!(compact(r#""don't""#), r"'don\'t'");
    assert_eq!(compact(r"'\\'"), r"'\\'");
}

#[test]
fn test_floats_render_in_decimal_notation() {
    assert_eq!(compact("0.5*.25"), "0.5*0.25");
}

// ============================================================================
// Indented Mode
// ============================================================================

#[test]
fn test_indented_list() {
    assert_eq!(indented("[1, 2, 3]"), "[\n    1,\n    2,\n    3,\n]");
}

#[test]
fn test_indented_call() {
    assert_eq!(indented("f(1, 'a')"), "f(\n    1,\n    'a',\n)");
}

#[test]
fn test_indented_nested_call_reindents_the_block() {
    assert_eq!(
        indented("f(g(1))"),
        "f(\n    g(\n        1,\n    ),\n)"
    );
}

#[test]
fn test_indented_get_stays_inline() {
    assert_eq!(indented("a[1]"), "a[1]");
}

#[test]
fn test_indented_empty_collections() {
    assert_eq!(indented("[]"), "[]");
    assert_eq!(indented("f()"), "f()");
}

#[test]
fn test_indented_operators_stay_inline() {
    assert_eq!(indented("1 + 2*3"), "1 + 2*3");
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn test_render_does_not_mutate_the_tree() {
    let node = parse("f([1, 2], x -> x*2)");
    let before = node.clone();

    let renderer = Renderer::new(RenderMode::Indented);
    let first = renderer.render(&node).unwrap();
    let second = renderer.render(&node).unwrap();

    assert_eq!(first, second);
    assert_eq!(node, before);
}

// ============================================================================
// Malformed Trees
// ============================================================================

#[test]
fn test_interior_node_under_a_value_tag_is_an_error() {
    let node = Node::tree(Tag::Num, vec![]);
    let err = to_text(&node).unwrap_err();
    assert_eq!(err.tag, Tag::Num);
}

#[test]
fn test_leaf_under_a_pair_tag_is_an_error() {
    let node = Node::leaf(Tag::Call, Scalar::Int(0));
    let err = to_text(&node).unwrap_err();
    assert_eq!(err.tag, Tag::Call);
}
