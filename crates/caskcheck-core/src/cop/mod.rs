//! Structural checks over cask manifests

mod no_overrides;

pub use no_overrides::NoOverrides;

use std::fmt;

use crate::ast::{Span, Spanned};
use crate::manifest::Stanza;

/// A top-level stanza that conflicts with a same-named stanza declared
/// inside a conditional block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Finding<'m> {
    /// The offending top-level stanza
    pub stanza: &'m Stanza,
    /// Name shared with the conditional declaration
    pub conflicting_name: &'m str,
}

impl Finding<'_> {
    /// Source range of the offending stanza
    #[must_use]
    pub fn span(&self) -> Span {
        self.stanza.span()
    }

    /// Human-readable explanation
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Do not use a top-level `{}` stanza as the default. \
             Add it to an `on_{{system}}` block instead.\n\
             Use `:or_older` or `:or_newer` to specify a range of macOS versions.",
            self.conflicting_name
        )
    }
}

impl fmt::Display for Finding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
