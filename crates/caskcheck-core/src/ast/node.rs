//! Syntax tree nodes of a cask body

use serde::{Deserialize, Serialize};

use super::{Span, Spanned, Symbol};

/// Literal values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Literal {
    /// String literal without interpolation ("1.0")
    Str(String),
    /// Symbol literal (:or_newer)
    Sym(String),
    /// Integer literal
    Int(i64),
    /// Floating-point literal
    Float(f64),
    /// Boolean literal (true/false)
    Bool(bool),
    /// nil
    Nil,
    /// Regular expression literal without interpolation (/v?(\d+)/i)
    Regexp(String),
}

/// A node with source location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// The kind of node
    pub kind: NodeKind,
    /// Source location
    #[serde(default)]
    pub span: Span,
}

impl Node {
    /// Create a new node
    #[must_use]
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Create a literal node
    #[must_use]
    pub fn literal(lit: Literal, span: Span) -> Self {
        Self::new(NodeKind::Literal { value: lit }, span)
    }

    /// The invocation this node performs, for sends and block calls
    #[must_use]
    pub fn invocation(&self) -> Option<&Invocation> {
        match &self.kind {
            NodeKind::Send(send) => Some(send),
            NodeKind::Block(block) => Some(&block.call),
            _ => None,
        }
    }

    /// Name of the invoked method, for sends and block calls
    #[must_use]
    pub fn method_name(&self) -> Option<&str> {
        self.invocation().map(|send| send.method.as_str())
    }

    /// Returns the block call if this node is one
    #[must_use]
    pub fn as_block(&self) -> Option<&BlockCall> {
        match &self.kind {
            NodeKind::Block(block) => Some(block),
            _ => None,
        }
    }

    /// Direct children in source order.
    ///
    /// A block call contributes the call's receiver and arguments followed by
    /// its body; the call itself is not a separate node.
    #[must_use]
    pub fn children(&self) -> Vec<&Node> {
        match &self.kind {
            NodeKind::Send(send) => send.operands().collect(),
            NodeKind::Block(block) => block
                .call
                .operands()
                .chain(block.body.as_deref())
                .collect(),
            NodeKind::Begin { children }
            | NodeKind::Array { items: children }
            | NodeKind::Other { children, .. } => children.iter().collect(),
            NodeKind::Interpolation { parts } => parts.iter().collect(),
            NodeKind::Hash { pairs } => pairs.iter().collect(),
            NodeKind::Pair { key, value } => vec![key.as_ref(), value.as_ref()],
            NodeKind::Literal { .. } => Vec::new(),
        }
    }
}

impl Spanned for Node {
    fn span(&self) -> Span {
        self.span
    }
}

/// The kind of node (without source location)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// Method invocation (`url "https://..."`, `version.csv.first`)
    Send(Invocation),

    /// Method invocation with a `do ... end` or `{ }` body (`on_macos do ... end`)
    Block(BlockCall),

    /// Explicit sequence of statements, or the bare-expression wrapper
    /// around code embedded in an interpolated string
    Begin { children: Vec<Node> },

    /// String built by interpolation ("#{version}/foo.dmg")
    Interpolation {
        /// String literals and `Begin`-wrapped embedded code, in order
        parts: Vec<Node>,
    },

    /// Literal value
    Literal { value: Literal },

    /// Array literal
    Array { items: Vec<Node> },

    /// Hash literal or trailing keyword arguments; children are `Pair`s
    Hash { pairs: Vec<Node> },

    /// Key/value pair inside a hash
    Pair { key: Box<Node>, value: Box<Node> },

    /// Any other construct (if/case, local variables, constants, ...)
    Other {
        /// Free-form description of the construct, for debugging only
        #[serde(default)]
        label: String,
        /// Child nodes, traversed like any other subtree
        #[serde(default)]
        children: Vec<Node>,
    },
}

/// A method invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invocation {
    /// Explicit receiver (`version` in `version.major`); stanzas have none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<Box<Node>>,
    /// Invoked method
    pub method: Symbol,
    /// Positional and keyword arguments
    #[serde(default)]
    pub args: Vec<Node>,
}

impl Invocation {
    /// Create a receiver-less invocation
    #[must_use]
    pub fn new(method: impl Into<Symbol>, args: Vec<Node>) -> Self {
        Self {
            receiver: None,
            method: method.into(),
            args,
        }
    }

    /// Receiver followed by arguments
    pub fn operands(&self) -> impl Iterator<Item = &Node> {
        self.receiver.as_deref().into_iter().chain(self.args.iter())
    }
}

/// An invocation carrying a block body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockCall {
    /// The invocation the block is attached to
    pub call: Invocation,
    /// Block parameters (`|json|`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Symbol>,
    /// Block body: absent when empty, the statement itself when there is
    /// exactly one, a `Begin` sequence otherwise
    #[serde(default)]
    pub body: Option<Box<Node>>,
}

impl BlockCall {
    /// Statements of the body, regardless of which body shape was parsed
    #[must_use]
    pub fn statements(&self) -> &[Node] {
        match self.body.as_deref() {
            None => &[],
            Some(Node {
                kind: NodeKind::Begin { children },
                ..
            }) => children.as_slice(),
            Some(single) => std::slice::from_ref(single),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string(s: &str) -> Node {
        Node::literal(Literal::Str(s.to_string()), Span::dummy())
    }

    fn send(name: &str, args: Vec<Node>) -> Node {
        Node::new(NodeKind::Send(Invocation::new(name, args)), Span::dummy())
    }

    fn block(name: &str, body: Option<Node>) -> Node {
        Node::new(
            NodeKind::Block(BlockCall {
                call: Invocation::new(name, Vec::new()),
                params: Vec::new(),
                body: body.map(Box::new),
            }),
            Span::dummy(),
        )
    }

    #[test]
    fn statements_cover_every_body_shape() {
        let empty = block("on_macos", None);
        assert!(empty.as_block().unwrap().statements().is_empty());

        let single = block("livecheck", Some(send("url", vec![string("x")])));
        let stmts = single.as_block().unwrap().statements();
        assert_eq!(stmts.len(), 1);
        assert_eq!(stmts[0].method_name(), Some("url"));

        let seq = Node::new(
            NodeKind::Begin {
                children: vec![send("url", vec![string("x")]), send("strategy", Vec::new())],
            },
            Span::dummy(),
        );
        let multi = block("livecheck", Some(seq));
        let names: Vec<_> = multi
            .as_block()
            .unwrap()
            .statements()
            .iter()
            .filter_map(Node::method_name)
            .collect();
        assert_eq!(names, ["url", "strategy"]);
    }

    #[test]
    fn children_of_block_include_call_operands_and_body() {
        let node = Node::new(
            NodeKind::Block(BlockCall {
                call: Invocation::new("on_sonoma", vec![Node::literal(Literal::Sym("or_newer".into()), Span::dummy())]),
                params: Vec::new(),
                body: Some(Box::new(send("version", vec![string("2.0")]))),
            }),
            Span::dummy(),
        );
        let children = node.children();
        assert_eq!(children.len(), 2);
        assert!(matches!(children[0].kind, NodeKind::Literal { .. }));
        assert_eq!(children[1].method_name(), Some("version"));
    }

    #[test]
    fn receiver_precedes_arguments() {
        let receiver = send("version", Vec::new());
        let node = Node::new(
            NodeKind::Send(Invocation {
                receiver: Some(Box::new(receiver)),
                method: "csv".into(),
                args: vec![string("x")],
            }),
            Span::dummy(),
        );
        let children = node.children();
        assert_eq!(children[0].method_name(), Some("version"));
        assert!(matches!(children[1].kind, NodeKind::Literal { .. }));
    }

    #[test]
    fn deserializes_from_json() {
        let json = r#"{
            "kind": {
                "type": "block",
                "call": { "method": "on_macos" },
                "body": {
                    "kind": {
                        "type": "send",
                        "method": "url",
                        "args": [{ "kind": { "type": "literal", "value": { "kind": "str", "value": "x" } } }]
                    },
                    "span": { "start": 17, "end": 24 }
                }
            },
            "span": { "start": 0, "end": 28 }
        }"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.method_name(), Some("on_macos"));
        assert_eq!(node.span, Span::new(0, 28));
        let stmts = node.as_block().unwrap().statements();
        assert_eq!(stmts[0].method_name(), Some("url"));
        assert_eq!(stmts[0].span, Span::new(17, 24));
    }
}
