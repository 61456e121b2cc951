//! Parsing of user-supplied module references.
//!
//! A reference is either namespaced (`languages/typescript`) or bare
//! (`typescript`). Parsing is purely lexical; whether a file exists is the
//! resolver's concern.

use crate::catalog::Namespace;
use anyhow::{Result, bail};
use std::fmt;

/// File extension carried by module documents.
pub const MODULE_EXTENSION: &str = "md";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ModuleRef {
    /// Prefix matched a known namespace; only that directory is consulted.
    Namespaced { namespace: Namespace, name: String },
    /// No known prefix; every namespace is probed in priority order.
    Bare { name: String },
}

impl ModuleRef {
    /// Parse a raw reference as typed on the command line.
    ///
    /// Leading `./` and one trailing `.md` are stripped. A prefix that is not a
    /// known namespace leaves the whole string as a bare name, so
    /// `nonexistent/module` is probed under each namespace and simply fails to
    /// resolve.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let trimmed = trimmed.strip_prefix("./").unwrap_or(trimmed);
        let trimmed = strip_extension(trimmed);
        if trimmed.is_empty() {
            bail!("Empty module reference");
        }

        if let Some((prefix, rest)) = trimmed.split_once('/') {
            if let Some(namespace) = Namespace::from_prefix(prefix) {
                if rest.is_empty() {
                    bail!("Module reference '{raw}' names a namespace but no module");
                }
                return Ok(ModuleRef::Namespaced {
                    namespace,
                    name: rest.to_string(),
                });
            }
        }

        Ok(ModuleRef::Bare {
            name: trimmed.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            ModuleRef::Namespaced { name, .. } | ModuleRef::Bare { name } => name,
        }
    }

    pub fn namespace(&self) -> Option<Namespace> {
        match self {
            ModuleRef::Namespaced { namespace, .. } => Some(*namespace),
            ModuleRef::Bare { .. } => None,
        }
    }
}

impl fmt::Display for ModuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleRef::Namespaced { namespace, name } => write!(f, "{namespace}/{name}"),
            ModuleRef::Bare { name } => f.write_str(name),
        }
    }
}

fn strip_extension(value: &str) -> &str {
    value
        .strip_suffix(MODULE_EXTENSION)
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or(value)
}
