//! File view: name resolution in the context of one project file.

use std::fmt;

use super::diagnostics::{DepError, Result};
use super::types::{DepType, pick_single};
use crate::project::{DepFileOfName, DepFileType, FileEntry, Project};
use crate::syntax::{ElementId, ProtoFile};

/// A registered file, seen together with the project it belongs to.
///
/// Views are cheap to copy. Two views compare by [`is_same`](DepFile::is_same),
/// not by address.
#[derive(Copy, Clone)]
pub struct DepFile<'a> {
    project: &'a Project,
    entry: &'a FileEntry,
}

impl<'a> DepFile<'a> {
    pub(crate) fn new(project: &'a Project, entry: &'a FileEntry) -> Self {
        Self { project, entry }
    }

    /// The internal path, e.g. `app/core/sendmail.proto`. Not a filesystem path.
    pub fn path(&self) -> &'a str {
        &self.entry.path
    }

    /// Whether this is one of the project's own files.
    pub fn dep_type(&self) -> DepFileType {
        self.entry.dep_type
    }

    /// The parsed file. `None` if the file was ignored at load time.
    pub fn proto_file(&self) -> Option<&'a ProtoFile> {
        self.entry.proto.as_ref()
    }

    /// The project this file is registered in.
    pub fn project(&self) -> &'a Project {
        self.project
    }

    /// Resolve `name` to a single type in the context of this file.
    ///
    /// Types declared in this file come back with an empty alias.
    /// Returns `Ok(None)` when nothing matches, and
    /// [`DepError::Ambiguous`] when more than one type does; use
    /// [`get_types`](Self::get_types) if several matches are acceptable.
    pub fn find_type(&self, name: &str) -> Result<Option<DepType<'a>>> {
        pick_single(name, self.get_types(name)?)
    }

    /// Like [`find_type`](Self::find_type), but a missing type is an error.
    pub fn get_type(&self, name: &str) -> Result<DepType<'a>> {
        self.find_type(name)?
            .ok_or_else(|| DepError::not_found(name))
    }

    /// All types `name` may denote in the context of this file.
    ///
    /// If the direct lookup finds nothing, the name is retried under each
    /// prefix of this file's package, shortest first: for `a.b.c` that is
    /// `a.{name}`, then `a.b.{name}`, then `a.b.c.{name}`. The first
    /// non-empty result wins. An empty result is not an error.
    #[tracing::instrument(level = "trace", skip_all, fields(file = %self.path(), name = %name))]
    pub fn get_types(&self, name: &str) -> Result<Vec<DepType<'a>>> {
        let found = self.project.internal_get_types(name, Some(*self))?;
        if !found.is_empty() {
            return Ok(found);
        }

        let package = self.original_alias();
        if package.is_empty() {
            return Ok(Vec::new());
        }

        let scopes: Vec<&str> = package.split('.').collect();
        for si in 1..=scopes.len() {
            let scoped = format!("{}.{}", scopes[..si].join("."), name);
            tracing::trace!(candidate = %scoped, "widening to package scope");
            let found = self.project.internal_get_types(&scoped, Some(*self))?;
            if !found.is_empty() {
                return Ok(found);
            }
        }

        Ok(Vec::new())
    }

    /// See [`Project::get_file_of_name`].
    pub fn get_file_of_name(&self, name: &str) -> Result<Option<DepFileOfName<'a>>> {
        self.project.get_file_of_name(name)
    }

    /// See [`Project::get_files_of_name`].
    pub fn get_files_of_name(&self, name: &str) -> Result<Vec<DepFileOfName<'a>>> {
        self.project.get_files_of_name(name)
    }

    /// Check if `other` is the same file as this one.
    ///
    /// Files without a parsed tree are only the same as their own view.
    pub fn is_same(&self, other: &DepFile<'_>) -> bool {
        if std::ptr::eq(self.entry, other.entry) {
            return true;
        }
        match (self.proto_file(), other.proto_file()) {
            (Some(a), Some(b)) => self.path() == other.path() && a.package_name == b.package_name,
            _ => false,
        }
    }

    /// Check if `other` lives in the same directory and declares the same package.
    pub fn is_same_package(&self, other: &DepFile<'_>) -> bool {
        if std::ptr::eq(self.entry, other.entry) {
            return true;
        }
        match (self.proto_file(), other.proto_file()) {
            (Some(a), Some(b)) => {
                parent_dir(self.path()) == parent_dir(other.path())
                    && a.package_name == b.package_name
            }
            _ => false,
        }
    }

    /// The package declared by the file, or `""` if it has no parsed tree.
    pub fn original_alias(&self) -> &'a str {
        self.proto_file()
            .map(|p| p.package_name.as_str())
            .unwrap_or_default()
    }

    /// The `go_package` option, falling back to the package without its
    /// last dotted segment.
    pub fn go_package(&self) -> String {
        let Some(proto) = self.proto_file() else {
            return String::new();
        };
        if let Some(go_package) = proto.option("go_package") {
            return go_package.to_string();
        }
        proto
            .package_name
            .rsplit_once('.')
            .map(|(head, _)| head.to_string())
            .unwrap_or_default()
    }

    /// The file's imports, plus the public imports of its public imports.
    ///
    /// Only one level of public re-export is followed.
    pub fn find_dependencies(&self) -> Vec<&'a str> {
        let Some(proto) = self.proto_file() else {
            return Vec::new();
        };
        let mut ret: Vec<&'a str> = proto.dependencies.iter().map(|d| d.as_str()).collect();
        for public in &proto.public_dependencies {
            let Some(public_proto) = self.project.file(public).and_then(|f| f.proto_file()) else {
                continue;
            };
            ret.extend(public_proto.public_dependencies.iter().map(|d| d.as_str()));
        }
        ret
    }

    /// Wrap one of this file's elements as a type handle.
    pub fn type_from_element(&self, element: ElementId) -> Option<DepType<'a>> {
        DepType::from_element(*self, element)
    }
}

impl fmt::Debug for DepFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepFile")
            .field("path", &self.path())
            .field("dep_type", &self.dep_type())
            .field("package", &self.original_alias())
            .finish()
    }
}

/// The directory part of an internal path, `.` for top-level files.
fn parent_dir(path: &str) -> &str {
    path.rsplit_once('/').map_or(".", |(dir, _)| dir)
}
