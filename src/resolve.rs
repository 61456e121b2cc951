//! Maps module references to files inside a library root.
//!
//! Namespaced references look in exactly one directory. Bare references probe
//! every namespace in `Namespace::PROBE_ORDER` and take the first hit. Names
//! may only contain plain path segments, and each candidate is canonicalized
//! and must stay under the canonical library root. Symlinks between places
//! inside the library resolve; symlinks leading out of it do not.

use crate::catalog::{MODULE_EXTENSION, ModuleRef, Namespace};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// A reference that matched a module file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedModule {
    /// The reference exactly as supplied by the caller.
    pub reference: String,
    pub namespace: Namespace,
    pub name: String,
    pub path: PathBuf,
}

impl ResolvedModule {
    /// `<namespace>/<name>`, independent of how the caller spelled it.
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.namespace, self.name)
    }
}

#[derive(Debug)]
pub struct Resolver {
    root: PathBuf,
}

impl Resolver {
    /// Bind a resolver to a library root. The root must exist.
    pub fn new(root: &Path) -> Result<Self> {
        let root = fs::canonicalize(root)
            .with_context(|| format!("Unable to canonicalize library root {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a raw reference string; unparseable references do not resolve.
    pub fn resolve_str(&self, raw: &str) -> Option<ResolvedModule> {
        let parsed = ModuleRef::parse(raw).ok()?;
        self.resolve(raw, &parsed)
    }

    /// Resolve a parsed reference. `raw` is carried into the result for reporting.
    pub fn resolve(&self, raw: &str, reference: &ModuleRef) -> Option<ResolvedModule> {
        let namespaces: &[Namespace] = match reference {
            ModuleRef::Namespaced { namespace, .. } => std::slice::from_ref(namespace),
            ModuleRef::Bare { .. } => &Namespace::PROBE_ORDER,
        };

        let name = reference.name();
        namespaces.iter().find_map(|namespace| {
            let path = self.candidate(*namespace, name)?;
            Some(ResolvedModule {
                reference: raw.to_string(),
                namespace: *namespace,
                name: name.to_string(),
                path,
            })
        })
    }

    /// Path to the base document, if present.
    pub fn base_document(&self) -> Option<PathBuf> {
        let candidate = self.root.join(crate::BASE_DOCUMENT);
        self.contained(&candidate)
    }

    fn candidate(&self, namespace: Namespace, name: &str) -> Option<PathBuf> {
        if !is_plain_name(name) {
            return None;
        }
        let candidate = self
            .root
            .join(namespace.as_str())
            .join(format!("{name}.{MODULE_EXTENSION}"));
        self.contained(&candidate)
    }

    fn contained(&self, candidate: &Path) -> Option<PathBuf> {
        if !candidate.is_file() {
            return None;
        }
        let canonical = fs::canonicalize(candidate).ok()?;
        canonical.starts_with(&self.root).then_some(canonical)
    }
}

/// Only normal segments: no `..`, no root, no `.`.
fn is_plain_name(name: &str) -> bool {
    Path::new(name)
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
}
