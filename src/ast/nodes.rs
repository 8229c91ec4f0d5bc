use std::fmt;

/// Syntactic construct named by a node.
///
/// Leaf tags (`Str`, `Num`, `Var`, `Op`) carry a scalar value; the rest are
/// interior tags carrying an ordered child list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// String literal
    Str,
    /// Number literal
    Num,
    /// Variable or reserved word
    Var,
    /// Operator symbol inside an interior node
    Op,
    /// Unary operator application
    Unop,
    /// Multiplication / division chain
    Prodop,
    /// Addition / subtraction chain
    Sumop,
    /// Comparison chain
    Compare,
    /// `&&` / `||` chain
    Logical,
    /// Mapping pair or lambda (`param -> body`)
    Func,
    /// Assignment (`target := value`)
    Assign,
    /// Function application
    Call,
    /// Argument list of a [`Tag::Call`]
    Args,
    /// Index access
    Get,
    /// Index list of a [`Tag::Get`]
    Key,
    /// Parenthesized grouping
    Paren,
    /// List literal
    List,
}

impl Tag {
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Str => "STR",
            Tag::Num => "NUM",
            Tag::Var => "VAR",
            Tag::Op => "OP",
            Tag::Unop => "UNOP",
            Tag::Prodop => "PRODOP",
            Tag::Sumop => "SUMOP",
            Tag::Compare => "COMPARE",
            Tag::Logical => "LOGICAL",
            Tag::Func => "FUNC",
            Tag::Assign => "ASSIGN",
            Tag::Call => "CALL",
            Tag::Args => "ARGS",
            Tag::Get => "GET",
            Tag::Key => "KEY",
            Tag::Paren => "PAREN",
            Tag::List => "LIST",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scalar payload of a leaf node.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => write!(f, "{}", s),
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
        }
    }
}

/// A node of the expression tree.
///
/// Two shapes only: a leaf holding a scalar value, or an interior node
/// holding an ordered list of children it exclusively owns. The tree is
/// built bottom-up during parsing and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf { tag: Tag, value: Scalar },
    Tree { tag: Tag, children: Vec<Node> },
}

impl Node {
    pub fn leaf(tag: Tag, value: Scalar) -> Self {
        Node::Leaf { tag, value }
    }

    pub fn tree(tag: Tag, children: Vec<Node>) -> Self {
        Node::Tree { tag, children }
    }

    pub fn tag(&self) -> Tag {
        match self {
            Node::Leaf { tag, .. } => *tag,
            Node::Tree { tag, .. } => *tag,
        }
    }

    /// The scalar value, for leaves.
    pub fn value(&self) -> Option<&Scalar> {
        match self {
            Node::Leaf { value, .. } => Some(value),
            Node::Tree { .. } => None,
        }
    }

    /// The ordered children; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Tree { children, .. } => children,
        }
    }

    /// Structural dump of the tree as JSON.
    ///
    /// Leaves become `{"tag": ..., "value": ...}`, interior nodes
    /// `{"tag": ..., "children": [...]}`. Useful for inspecting what the
    /// parser produced without walking the tree by hand.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::{Map, Value};

        let mut object = Map::new();
        object.insert("tag".to_string(), Value::String(self.tag().name().to_string()));
        match self {
            Node::Leaf { value, .. } => {
                let value = match value {
                    Scalar::Str(s) => Value::String(s.clone()),
                    Scalar::Int(n) => Value::Number((*n).into()),
                    Scalar::Float(n) => serde_json::Number::from_f64(*n)
                        .map(Value::Number)
                        .unwrap_or(Value::Null),
                };
                object.insert("value".to_string(), value);
            }
            Node::Tree { children, .. } => {
                object.insert(
                    "children".to_string(),
                    Value::Array(children.iter().map(Node::to_json).collect()),
                );
            }
        }
        Value::Object(object)
    }
}
