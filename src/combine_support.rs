//! One complete combiner pass: resolve references, assemble, write.
//!
//! The pass is linear. Unresolved references become `ModuleStatus::NotFound`
//! entries in the report and never abort the run; only an empty request or an
//! I/O failure is an error.

use crate::document::{build_document, count_lines};
use crate::resolve::{ResolvedModule, Resolver};
use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default destination, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "output/CLAUDE.md";

/// Where the combined document goes.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum OutputTarget {
    Path(PathBuf),
    Stdout,
}

impl OutputTarget {
    /// `-` selects stdout; anything else is a file path.
    pub fn from_arg(value: &str) -> Self {
        if value == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::Path(PathBuf::from(value))
        }
    }
}

impl Default for OutputTarget {
    fn default() -> Self {
        OutputTarget::Path(PathBuf::from(DEFAULT_OUTPUT))
    }
}

#[derive(Debug, Clone)]
pub struct CombineRequest {
    pub root: PathBuf,
    pub modules: Vec<String>,
    pub include_base: bool,
    pub output: OutputTarget,
}

/// Usage-level failures that stop the run before anything is written.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CombineError {
    NoModules,
}

impl fmt::Display for CombineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombineError::NoModules => f.write_str("No modules specified"),
        }
    }
}

impl std::error::Error for CombineError {}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ModuleStatus {
    Found(ResolvedModule),
    NotFound(String),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum BaseStatus {
    Included(PathBuf),
    Missing,
    Excluded,
}

/// Outcome of a pass, in the order references were given.
#[derive(Debug)]
pub struct CombineReport {
    pub base: BaseStatus,
    pub modules: Vec<ModuleStatus>,
    pub output: OutputTarget,
    pub lines: usize,
    pub bytes: usize,
}

impl CombineReport {
    pub fn unresolved(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().filter_map(|status| match status {
            ModuleStatus::NotFound(reference) => Some(reference.as_str()),
            ModuleStatus::Found(_) => None,
        })
    }

    pub fn resolved_count(&self) -> usize {
        self.modules
            .iter()
            .filter(|status| matches!(status, ModuleStatus::Found(_)))
            .count()
    }
}

/// Run the combiner and write its output.
///
/// Output to `Stdout` is written to `stdout`; a path target is replaced
/// atomically, creating parent directories first.
pub fn combine(request: &CombineRequest, stdout: &mut dyn Write) -> Result<CombineReport> {
    if request.modules.is_empty() {
        return Err(CombineError::NoModules.into());
    }

    let resolver = Resolver::new(&request.root)?;

    let base = if !request.include_base {
        BaseStatus::Excluded
    } else {
        match resolver.base_document() {
            Some(path) => BaseStatus::Included(path),
            None => BaseStatus::Missing,
        }
    };
    let base_contents = match &base {
        BaseStatus::Included(path) => Some(read_module(path)?),
        BaseStatus::Missing | BaseStatus::Excluded => None,
    };

    let mut statuses = Vec::with_capacity(request.modules.len());
    let mut contents = Vec::new();
    for raw in &request.modules {
        match resolver.resolve_str(raw) {
            Some(found) => {
                contents.push(read_module(&found.path)?);
                statuses.push(ModuleStatus::Found(found));
            }
            None => statuses.push(ModuleStatus::NotFound(raw.clone())),
        }
    }

    let document = build_document(base_contents.as_deref(), &contents);
    match &request.output {
        OutputTarget::Path(path) => write_output(path, &document)?,
        OutputTarget::Stdout => {
            stdout.write_all(&document)?;
            stdout.flush()?;
        }
    }

    Ok(CombineReport {
        base,
        modules: statuses,
        output: request.output.clone(),
        lines: count_lines(&document),
        bytes: document.len(),
    })
}

fn read_module(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("reading {}", path.display()))
}

/// Replace `path` with `document`, creating missing parent directories.
pub fn write_output(path: &Path, document: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)
        .with_context(|| format!("creating output directory {}", parent.display()))?;

    let mut temp = NamedTempFile::new_in(&parent)
        .with_context(|| format!("creating temp file in {}", parent.display()))?;
    temp.write_all(document)?;
    temp.flush()?;
    temp.persist(path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
