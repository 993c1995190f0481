//! # protodep
//!
//! Type, extension and custom option resolution across the files of a
//! protobuf project that has already been parsed.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! hir      → DepFile / DepType: scoped resolution, ancestors, extensions
//!   ↓
//! project  → Project registry: files, package and extension indices, options
//!   ↓
//! syntax   → ProtoFile element trees handed over by a parser
//! ```
//!
//! ## Usage
//!
//! ```
//! use protodep::project::{DepFileType, Project};
//! use protodep::syntax::ProtoFile;
//!
//! let mut file = ProtoFile::new("app.core");
//! let send_mail = file.add_message(None, "SendMail")?;
//! file.add_message(Some(send_mail), "Body")?;
//!
//! let mut project = Project::new();
//! project.add_file("app/core/sendmail.proto", DepFileType::Own, file)?;
//!
//! let send_mail = project.get_type("app.core.SendMail")?;
//! let body = send_mail.get_type("Body")?;
//! assert_eq!(body.full_original_name(), "app.core.SendMail.Body");
//! assert_eq!(body.alias(), "");
//! # Ok::<(), protodep::hir::DepError>(())
//! ```

pub mod hir;
pub mod project;
pub mod syntax;

pub use hir::{DepError, DepFile, DepType, Result, TypeKind};
pub use project::{DepFileOfName, DepFileType, OptionKind, OptionType, Project, ProjectConfig};
pub use syntax::{ElementId, ProtoFile, ScalarType};
