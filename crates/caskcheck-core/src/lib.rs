//! caskcheck Core - Structural checks for cask manifests
//!
//! This crate provides:
//! - AST: Syntax tree of a parsed cask, handed over by a host parser
//! - Manifest: Top-level stanza view of a cask
//! - Cop: The `Cask/NoOverrides` conflict detector
//! - Config: `caskcheck.toml` settings
//! - Document: JSON interchange format for parsed casks

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Syntax tree - parsed representation of a cask body
pub mod ast;

/// Stanza vocabulary of the cask DSL
pub mod constants;

/// Top-level stanza view of a cask
pub mod manifest;

/// Structural checks
pub mod cop;

/// Check configuration
pub mod config;

/// JSON interchange format for parsed casks
pub mod document;

/// Test utilities - builders for cask syntax trees
pub mod testutil;

/// Convenience re-export of the conflict detector
pub use cop::{Finding, NoOverrides};

/// Convenience re-export of configuration
pub use config::{Config, ConfigError};

/// Convenience re-export of document loading
pub use document::{CaskDocument, DocumentError};

/// Convenience re-export of manifest types
pub use manifest::{Manifest, Stanza};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
