//! Top-level stanza view of a cask

use crate::ast::{BlockCall, Node, NodeKind, Span, Spanned, Symbol};
use crate::constants;

/// A top-level stanza declaration
#[derive(Debug, Clone, PartialEq)]
pub struct Stanza {
    name: Symbol,
    node: Node,
}

impl Stanza {
    /// Wrap a receiver-less invocation (plain or with a block).
    ///
    /// Returns `None` for any other node.
    #[must_use]
    pub fn from_node(node: Node) -> Option<Self> {
        let name = match node.invocation() {
            Some(call) if call.receiver.is_none() => call.method.clone(),
            _ => return None,
        };
        Some(Self { name, node })
    }

    /// Stanza name
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The block body, when the stanza was declared with one
    #[must_use]
    pub fn block(&self) -> Option<&BlockCall> {
        self.node.as_block()
    }

    /// The underlying tree node
    #[must_use]
    pub fn node(&self) -> &Node {
        &self.node
    }
}

impl Spanned for Stanza {
    fn span(&self) -> Span {
        self.node.span
    }
}

/// One cask: its token and its top-level stanzas in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    token: String,
    stanzas: Vec<Stanza>,
}

impl Manifest {
    /// Create a manifest from already-selected stanzas
    #[must_use]
    pub fn new(token: impl Into<String>, stanzas: Vec<Stanza>) -> Self {
        Self {
            token: token.into(),
            stanzas,
        }
    }

    /// Build a manifest from the statements of a `cask ... do` body.
    ///
    /// `Begin` sequences are flattened. Statements that are not receiver-less
    /// invocations of a known stanza (local assignments, helper calls) are
    /// skipped.
    #[must_use]
    pub fn from_body(token: impl Into<String>, body: Vec<Node>) -> Self {
        let mut stanzas = Vec::new();
        let mut pending: Vec<Node> = body.into_iter().rev().collect();

        while let Some(node) = pending.pop() {
            if let NodeKind::Begin { children } = node.kind {
                pending.extend(children.into_iter().rev());
                continue;
            }
            if !node.method_name().is_some_and(constants::is_stanza_name) {
                continue;
            }
            if let Some(stanza) = Stanza::from_node(node) {
                stanzas.push(stanza);
            }
        }

        Self::new(token, stanzas)
    }

    /// Cask token (`"firefox"` in `cask "firefox" do`)
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Top-level stanzas in declaration order
    #[must_use]
    pub fn stanzas(&self) -> &[Stanza] {
        &self.stanzas
    }
}
