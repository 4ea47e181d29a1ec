//! `Cask/NoOverrides`: top-level stanzas must not double as defaults for
//! stanzas that are declared inside `on_*` blocks.
//!
//! ```ruby
//! cask "foo" do
//!   version "1.0"          # flagged: also declared in on_intel
//!
//!   on_arm do
//!     sha256 "abc"
//!   end
//!   on_intel do
//!     version "0.9"
//!     sha256 "def"
//!   end
//! end
//! ```

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::ast::{Node, NodeKind};
use crate::config::NoOverridesConfig;
use crate::constants;
use crate::manifest::{Manifest, Stanza};

use super::Finding;

/// Immediate syntactic context of a node during traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parent {
    /// An interpolated string
    Interpolation,
    /// The `Begin` wrapper of code embedded in an interpolated string
    InterpolatedCode,
    /// Anything else
    Other,
}

/// Detects top-level stanzas that duplicate stanzas declared in
/// conditional blocks
#[derive(Debug, Clone)]
pub struct NoOverrides {
    on_system_methods: HashSet<String>,
    livecheck: String,
}

impl Default for NoOverrides {
    fn default() -> Self {
        Self::new(constants::ON_SYSTEM_METHODS.iter().copied(), constants::LIVECHECK)
    }
}

impl NoOverrides {
    /// Name reported with every finding
    pub const NAME: &'static str = "Cask/NoOverrides";

    /// Create a detector for the given conditional block names
    #[must_use]
    pub fn new<I, S>(on_system_methods: I, livecheck: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            on_system_methods: on_system_methods.into_iter().map(Into::into).collect(),
            livecheck: livecheck.into(),
        }
    }

    /// Create a detector from configuration
    #[must_use]
    pub fn from_config(config: &NoOverridesConfig) -> Self {
        Self::new(config.on_system_methods.iter().cloned(), config.livecheck.clone())
    }

    /// Whether `name` is a conditional block
    #[must_use]
    pub fn is_on_system_method(&self, name: &str) -> bool {
        self.on_system_methods.contains(name)
    }

    /// Find top-level stanzas whose name is also declared inside a
    /// conditional block, in declaration order
    pub fn detect<'m>(&self, manifest: &'m Manifest) -> Vec<Finding<'m>> {
        let on_blocks: Vec<&Stanza> = manifest
            .stanzas()
            .iter()
            .filter(|stanza| self.is_on_system_method(stanza.name()))
            .collect();

        if on_blocks.is_empty() {
            trace!(token = manifest.token(), "no conditional blocks");
            return Vec::new();
        }

        let declared = self.on_system_stanzas(&on_blocks);
        debug!(
            token = manifest.token(),
            blocks = on_blocks.len(),
            declared = ?declared,
            "collected conditional stanzas"
        );

        let findings: Vec<Finding<'m>> = manifest
            .stanzas()
            .iter()
            .filter(|stanza| !self.is_on_system_method(stanza.name()))
            .filter_map(|stanza| {
                declared.get(stanza.name()).map(|&name| Finding {
                    stanza,
                    conflicting_name: name,
                })
            })
            .collect();

        debug!(token = manifest.token(), findings = findings.len(), "checked overrides");
        findings
    }

    /// Names of all invocations declared inside the given blocks
    fn on_system_stanzas<'m>(&self, on_blocks: &[&'m Stanza]) -> HashSet<&'m str> {
        let mut names = HashSet::new();
        for stanza in on_blocks {
            if stanza.block().is_none() {
                continue;
            }
            self.collect_invocations(stanza.node(), &mut names);
        }
        names
    }

    fn collect_invocations<'m>(&self, root: &'m Node, names: &mut HashSet<&'m str>) {
        let mut pending = vec![(root, Parent::Other)];

        while let Some((node, parent)) = pending.pop() {
            if let Some(call) = node.invocation() {
                let name = call.method.as_str();
                // A livecheck `url` is not a download `url`.
                if name == self.livecheck {
                    continue;
                }
                // `#{version}` inside a string is not a `version` stanza.
                let interpolated = parent == Parent::InterpolatedCode;
                if !interpolated && !self.is_on_system_method(name) {
                    names.insert(name);
                }
            }

            let context = match (&node.kind, parent) {
                (NodeKind::Interpolation { .. }, _) => Parent::Interpolation,
                (NodeKind::Begin { .. }, Parent::Interpolation) => Parent::InterpolatedCode,
                _ => Parent::Other,
            };
            pending.extend(node.children().into_iter().rev().map(|child| (child, context)));
        }
    }
}
