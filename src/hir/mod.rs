//! Resolution core: files and types as seen from inside the project.
//!
//! ```text
//! DepFile  → widens a name over the file's package prefixes
//!   ↓
//! DepType  → narrows a name over its own enclosing scopes
//!   ↓
//! Project  → direct lookups (project module)
//! ```

mod diagnostics;
mod extension;
mod file;
mod types;

pub use diagnostics::{DepError, Result, codes};
pub use file::DepFile;
pub use types::{DepType, TypeKind};

pub(crate) use types::{pick_single, push_distinct};
