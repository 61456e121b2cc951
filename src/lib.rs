//! Shared library for the `combine` binary.
//!
//! A documentation library is a directory holding Markdown modules under
//! fixed namespace directories plus an optional base document. This crate
//! locates that library, resolves module references against it and
//! concatenates the matches into one instruction file.

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod catalog;
pub mod combine_support;
pub mod console;
pub mod document;
pub mod resolve;

pub use catalog::{MODULE_EXTENSION, ModuleCatalog, ModuleRef, Namespace};
pub use combine_support::{
    BaseStatus, CombineError, CombineReport, CombineRequest, DEFAULT_OUTPUT, ModuleStatus,
    OutputTarget, combine,
};
pub use console::Palette;
pub use document::{HEADER, SEPARATOR, build_document};
pub use resolve::{ResolvedModule, Resolver};

/// Base document, relative to the library root.
pub const BASE_DOCUMENT: &str = "base.md";

/// Environment variable naming the library root.
pub const ROOT_ENV: &str = "COMBINE_ROOT";

/// Returns true when `candidate` holds at least one namespace directory.
pub fn is_library_root(candidate: &Path) -> bool {
    Namespace::PROBE_ORDER
        .iter()
        .any(|ns| candidate.join(ns.as_str()).is_dir())
}

fn root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !is_library_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_library_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the documentation library.
///
/// Search order: the explicit `--root` value (which must be a library root),
/// `COMBINE_ROOT`, climbing from the working directory, climbing from the
/// executable, then the build-time hint.
pub fn find_library_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if !is_library_root(path) {
            bail!(
                "{} is not a documentation library (expected one of: {})",
                path.display(),
                namespace_list()
            );
        }
        return Ok(fs::canonicalize(path)?);
    }

    if let Ok(env_root) = env::var(ROOT_ENV) {
        if let Some(root) = root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(cwd) = env::current_dir() {
        if let Some(root) = search_upwards(&cwd) {
            return Ok(root);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = search_upwards(exe_dir) {
                return Ok(root);
            }
        }
    }

    if let Some(hint) = option_env!("COMBINE_ROOT_HINT") {
        if let Some(root) = root_from_hint(hint) {
            return Ok(root);
        }
    }

    bail!(
        "Unable to locate a documentation library. Pass --root or set {ROOT_ENV} to a directory containing {}.",
        namespace_list()
    );
}

fn namespace_list() -> String {
    Namespace::PROBE_ORDER
        .iter()
        .map(|ns| format!("{ns}/"))
        .collect::<Vec<_>>()
        .join(", ")
}
