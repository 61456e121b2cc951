use serde::{Serialize, Serializer};
use std::fmt;

/// Top-level category a module file lives under.
///
/// The variant order is the probe priority for bare references, so the
/// derived `Ord` and `PROBE_ORDER` always agree.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Namespace {
    Languages,
    Frameworks,
    Infra,
    Practices,
    Agents,
}

impl Namespace {
    /// Fixed probe order used when a reference carries no namespace prefix.
    pub const PROBE_ORDER: [Namespace; 5] = [
        Namespace::Languages,
        Namespace::Frameworks,
        Namespace::Infra,
        Namespace::Practices,
        Namespace::Agents,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Languages => "languages",
            Namespace::Frameworks => "frameworks",
            Namespace::Infra => "infra",
            Namespace::Practices => "practices",
            Namespace::Agents => "agents",
        }
    }

    /// Map a directory name to a namespace; unknown prefixes yield `None`.
    pub fn from_prefix(value: &str) -> Option<Self> {
        match value {
            "languages" => Some(Namespace::Languages),
            "frameworks" => Some(Namespace::Frameworks),
            "infra" => Some(Namespace::Infra),
            "practices" => Some(Namespace::Practices),
            "agents" => Some(Namespace::Agents),
            _ => None,
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Namespace {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
