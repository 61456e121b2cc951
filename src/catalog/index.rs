//! On-disk view of which modules exist under each namespace.
//!
//! Membership is defined by file presence: every `*.md` file directly under
//! a namespace directory is a module, and its stem is the module name. Entries
//! the resolver would refuse (symlinks leading out of the library) are left
//! out, so every listed name resolves.

use crate::catalog::reference::MODULE_EXTENSION;
use crate::catalog::{ModuleRef, Namespace};
use crate::resolve::Resolver;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Module names grouped by namespace, sorted within each group.
#[derive(Debug, Serialize)]
pub struct ModuleCatalog {
    pub root: PathBuf,
    pub namespaces: BTreeMap<Namespace, Vec<String>>,
}

impl ModuleCatalog {
    /// Enumerate the library rooted at `root`.
    ///
    /// Every namespace appears in the result; a missing directory yields an
    /// empty list rather than an error.
    pub fn scan(root: &Path) -> Result<Self> {
        let resolver = Resolver::new(root)?;
        let mut namespaces = BTreeMap::new();
        for namespace in Namespace::PROBE_ORDER {
            let dir = resolver.root().join(namespace.as_str());
            let names: Vec<String> = list_modules(&dir)?
                .into_iter()
                .filter(|name| resolvable(&resolver, namespace, name))
                .collect();
            namespaces.insert(namespace, names);
        }
        Ok(Self {
            root: resolver.root().to_path_buf(),
            namespaces,
        })
    }

    /// Modules under one namespace.
    pub fn modules(&self, namespace: Namespace) -> &[String] {
        self.namespaces
            .get(&namespace)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total module count across all namespaces.
    pub fn len(&self) -> usize {
        self.namespaces.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn resolvable(resolver: &Resolver, namespace: Namespace, name: &str) -> bool {
    let reference = ModuleRef::Namespaced {
        namespace,
        name: name.to_string(),
    };
    resolver.resolve(name, &reference).is_some()
}

fn list_modules(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some(MODULE_EXTENSION) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.push(stem.to_string());
        }
    }
    names.sort();
    Ok(names)
}
