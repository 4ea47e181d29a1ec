//! Test utilities for caskcheck
//!
//! Builders for cask syntax trees, shaped the way a parser would emit them.
//! Nodes get dummy spans unless placed with [`at`].

use crate::ast::{BlockCall, Invocation, Literal, Node, NodeKind, Span};
use crate::manifest::Manifest;

/// A receiver-less invocation: `name args...`
#[must_use]
pub fn send(name: &str, args: Vec<Node>) -> Node {
    Node::new(NodeKind::Send(Invocation::new(name, args)), Span::dummy())
}

/// An invocation on an explicit receiver: `receiver.name(args...)`
#[must_use]
pub fn send_on(receiver: Node, name: &str, args: Vec<Node>) -> Node {
    Node::new(
        NodeKind::Send(Invocation {
            receiver: Some(Box::new(receiver)),
            method: name.into(),
            args,
        }),
        Span::dummy(),
    )
}

/// An invocation with a block: `name args... do stmts end`.
///
/// The body takes the shape a parser produces: absent for no statements,
/// the statement itself for one, a `Begin` sequence for several.
#[must_use]
pub fn block(name: &str, args: Vec<Node>, stmts: Vec<Node>) -> Node {
    block_with_params(name, args, &[], stmts)
}

/// Like [`block`], with block parameters: `name do |params| stmts end`
#[must_use]
pub fn block_with_params(name: &str, args: Vec<Node>, params: &[&str], stmts: Vec<Node>) -> Node {
    let body = match stmts.len() {
        0 => None,
        1 => stmts.into_iter().next(),
        _ => Some(seq(stmts)),
    };
    Node::new(
        NodeKind::Block(BlockCall {
            call: Invocation::new(name, args),
            params: params.iter().map(|&p| p.into()).collect(),
            body: body.map(Box::new),
        }),
        Span::dummy(),
    )
}

/// An explicit statement sequence
#[must_use]
pub fn seq(children: Vec<Node>) -> Node {
    Node::new(NodeKind::Begin { children }, Span::dummy())
}

/// A string literal
#[must_use]
pub fn string(value: &str) -> Node {
    Node::literal(Literal::Str(value.to_string()), Span::dummy())
}

/// A symbol literal
#[must_use]
pub fn symbol(value: &str) -> Node {
    Node::literal(Literal::Sym(value.to_string()), Span::dummy())
}

/// An interpolated string; `code` parts should be built with [`code`]
#[must_use]
pub fn interpolation(parts: Vec<Node>) -> Node {
    Node::new(NodeKind::Interpolation { parts }, Span::dummy())
}

/// Code embedded in an interpolated string: `#{expr}`
#[must_use]
pub fn code(expr: Node) -> Node {
    seq(vec![expr])
}

/// A hash of key/value pairs
#[must_use]
pub fn hash(pairs: Vec<(Node, Node)>) -> Node {
    let pairs = pairs
        .into_iter()
        .map(|(key, value)| {
            Node::new(
                NodeKind::Pair {
                    key: Box::new(key),
                    value: Box::new(value),
                },
                Span::dummy(),
            )
        })
        .collect();
    Node::new(NodeKind::Hash { pairs }, Span::dummy())
}

/// A local variable assignment: `name = value`
#[must_use]
pub fn assign(name: &str, value: Node) -> Node {
    Node::new(
        NodeKind::Other {
            label: format!("lvasgn {name}"),
            children: vec![value],
        },
        Span::dummy(),
    )
}

/// Place a node at a byte range
#[must_use]
pub fn at(mut node: Node, start: u32, end: u32) -> Node {
    node.span = Span::new(start, end);
    node
}

/// A manifest whose body is `stmts`
#[must_use]
pub fn manifest(stmts: Vec<Node>) -> Manifest {
    Manifest::from_body("test", stmts)
}
