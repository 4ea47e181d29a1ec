//! Implementation of the `caskcheck check` command.

use anyhow::{Context, Result};
use caskcheck_core::config::CONFIG_FILE;
use caskcheck_core::{CaskDocument, Config, NoOverrides};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::report::{self, Offense, OutputFormat};

/// Options for the check command.
#[derive(Debug, Default)]
pub struct CheckOptions {
    /// Documents to check.
    pub files: Vec<PathBuf>,
    /// Explicit configuration file.
    pub config: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
}

/// Result of a check run.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Number of documents checked.
    pub files: usize,
    /// Offenses in file order, then declaration order.
    pub offenses: Vec<Offense>,
}

impl CheckReport {
    /// Returns true if nothing was flagged.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.offenses.is_empty()
    }
}

/// Load the configuration: the explicit path if given, otherwise
/// `caskcheck.toml` in `dir` if present, otherwise defaults.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::from_path(path)
            .with_context(|| format!("failed to load config '{}'", path.display()));
    }

    let discovered = dir.join(CONFIG_FILE);
    if discovered.is_file() {
        tracing::debug!(path = %discovered.display(), "using discovered config");
        return Config::from_path(&discovered)
            .with_context(|| format!("failed to load config '{}'", discovered.display()));
    }

    Ok(Config::default())
}

/// Check every file and collect the offenses.
pub fn check_files(files: &[PathBuf], config: &Config) -> Result<CheckReport> {
    if !config.no_overrides.enabled {
        tracing::info!("{} is disabled", NoOverrides::NAME);
        return Ok(CheckReport {
            files: files.len(),
            offenses: Vec::new(),
        });
    }

    let detector = NoOverrides::from_config(&config.no_overrides);
    let per_file: Vec<Vec<Offense>> = files
        .par_iter()
        .map(|file| check_file(file, &detector))
        .collect::<Result<_>>()?;

    Ok(CheckReport {
        files: files.len(),
        offenses: per_file.into_iter().flatten().collect(),
    })
}

fn check_file(file: &Path, detector: &NoOverrides) -> Result<Vec<Offense>> {
    let doc = CaskDocument::from_path(file)
        .with_context(|| format!("failed to load '{}'", file.display()))?;
    let manifest = doc.manifest();
    let index = doc.line_index();

    let offenses: Vec<Offense> = detector
        .detect(&manifest)
        .iter()
        .map(|finding| Offense::new(file, finding, index.as_ref()))
        .collect();

    tracing::debug!(
        file = %file.display(),
        token = manifest.token(),
        offenses = offenses.len(),
        "checked"
    );
    Ok(offenses)
}

/// Run the check command and print the report.
///
/// Returns whether the checked files were clean.
pub fn run(options: &CheckOptions) -> Result<bool> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let config = load_config(options.config.as_deref(), &cwd)?;
    let report = check_files(&options.files, &config)?;

    let rendered = report::render(&report.offenses, options.format)?;
    print!("{rendered}");
    if options.format == OutputFormat::Text {
        eprintln!(
            "{} file(s) checked, {} offense(s) detected",
            report.files,
            report.offenses.len()
        );
    }

    Ok(report.is_clean())
}
