//! Rendering of findings.

use anyhow::Result;
use caskcheck_core::ast::{LineIndex, Location, Span};
use caskcheck_core::{Finding, NoOverrides};
use clap::ValueEnum;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Output format of the `check` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per finding: `file:line:col: C: cop: message`
    #[default]
    Text,
    /// A JSON array of findings
    Json,
}

/// One reported finding, detached from the syntax tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Offense {
    /// Document the finding belongs to.
    pub file: PathBuf,
    /// Name of the check.
    pub cop: &'static str,
    /// Name of the offending stanza.
    pub stanza: String,
    /// Byte range of the stanza, when the document carries spans.
    #[serde(flatten)]
    pub span: Option<Span>,
    /// Line/column of the start, when the document carries its source.
    #[serde(flatten)]
    pub location: Option<Location>,
    /// Human-readable explanation.
    pub message: String,
}

impl Offense {
    /// Detach a finding from its manifest.
    pub fn new(file: &Path, finding: &Finding<'_>, index: Option<&LineIndex>) -> Self {
        let span = finding.span();
        Self {
            file: file.to_path_buf(),
            cop: NoOverrides::NAME,
            stanza: finding.conflicting_name.to_string(),
            span: (!span.is_dummy()).then_some(span),
            location: index.and_then(|index| index.span_start(span)),
            message: finding.message(),
        }
    }

    /// `file:line:col`, `file:start..end` or just `file`, depending on
    /// what the document carries.
    fn position(&self) -> String {
        let file = self.file.display();
        match (self.location, self.span) {
            (Some(location), _) => format!("{file}:{location}"),
            (None, Some(span)) => format!("{file}:{span}"),
            (None, None) => file.to_string(),
        }
    }
}

/// Render offenses in the requested format.
pub fn render(offenses: &[Offense], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(offenses)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(offenses)?),
    }
}

fn render_text(offenses: &[Offense]) -> String {
    offenses
        .iter()
        .map(|offense| {
            // Continuation lines of the message are indented under the first.
            let message = offense.message.replace('\n', "\n    ");
            format!("{}: C: {}: {}\n", offense.position(), offense.cop, message)
        })
        .collect()
}
