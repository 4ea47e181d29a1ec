//! JSON interchange format for parsed casks.
//!
//! A host parser serializes one cask per document:
//!
//! ```json
//! {
//!   "token": "firefox",
//!   "source": "cask \"firefox\" do\n  ...",
//!   "body": [ { "kind": { "type": "send", "method": "version", ... }, "span": { ... } } ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::ast::{LineIndex, Node};
use crate::manifest::Manifest;

/// Errors that can occur when loading a document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse document: {0}")]
    Json(#[from] serde_json::Error),
}

/// A parsed cask as handed over by a host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaskDocument {
    /// Cask token.
    pub token: String,

    /// Original source text; spans index into it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Statements of the `cask ... do` body.
    #[serde(default)]
    pub body: Vec<Node>,
}

impl CaskDocument {
    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a document from a file path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Serialize the document to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Top-level stanza view of the body.
    #[must_use]
    pub fn manifest(&self) -> Manifest {
        Manifest::from_body(self.token.clone(), self.body.clone())
    }

    /// Line index over the source text, if the document carries it.
    #[must_use]
    pub fn line_index(&self) -> Option<LineIndex> {
        self.source.as_deref().map(LineIndex::new)
    }
}
