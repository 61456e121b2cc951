//! Module catalog wiring.
//!
//! A documentation library keeps its fragments under five fixed namespace
//! directories. `Namespace` fixes the names and probe order, `ModuleRef`
//! parses what the user typed, and `ModuleCatalog` enumerates what is on disk.

pub mod index;
pub mod namespace;
pub mod reference;

pub use index::ModuleCatalog;
pub use namespace::Namespace;
pub use reference::{MODULE_EXTENSION, ModuleRef};
