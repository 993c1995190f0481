//! Project registry: every loaded file and the indices built over them.

mod config;
mod lookup;
mod options;
mod registry;

pub use config::ProjectConfig;
pub use lookup::DepFileOfName;
pub use options::{OptionField, OptionKind, OptionType};
pub use registry::{DepFileType, FileEntry, Project};
