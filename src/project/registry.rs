//! The project registry: every loaded file plus the package and extension indices.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use super::config::ProjectConfig;
use crate::hir::{DepError, DepFile, Result};
use crate::syntax::ProtoFile;

/// Whether a file belongs to the project or was pulled in from an include path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DepFileType {
    /// One of the project's own files.
    Own,
    /// A file imported from outside the project.
    Imported,
}

impl fmt::Display for DepFileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepFileType::Own => f.write_str("OWN"),
            DepFileType::Imported => f.write_str("IMPORTED"),
        }
    }
}

/// A registered file. Query it through a [`DepFile`] view.
#[derive(Clone, Debug)]
pub struct FileEntry {
    /// Internal slash-separated path, e.g. `google/protobuf/empty.proto`.
    pub(crate) path: Arc<str>,
    pub(crate) dep_type: DepFileType,
    /// `None` for ignored files.
    pub(crate) proto: Option<ProtoFile>,
}

/// All files of a project, indexed for name and extension lookups.
///
/// Files are registered once with [`add_file`](Project::add_file); every
/// query afterwards only reads, so a loaded project can be shared freely.
#[derive(Clone, Debug, Default)]
pub struct Project {
    config: ProjectConfig,
    /// Internal path → entry, in registration order.
    pub(crate) files: IndexMap<Arc<str>, FileEntry>,
    /// Package → paths of the files declaring it.
    pub(crate) packages: IndexMap<Arc<str>, Vec<Arc<str>>>,
    /// Extended type (as written in `extend`) → packages extending it.
    pub(crate) extensions: IndexMap<Arc<str>, Vec<Arc<str>>>,
}

impl Project {
    /// Create an empty project with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty project.
    pub fn with_config(config: ProjectConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The configuration the project was created with.
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Register a parsed file under its internal path.
    ///
    /// Files matched by [`ProjectConfig::with_ignored`] are registered without
    /// their tree and do not enter the package or extension indices.
    pub fn add_file(
        &mut self,
        path: impl Into<Arc<str>>,
        dep_type: DepFileType,
        file: ProtoFile,
    ) -> Result<()> {
        let path: Arc<str> = path.into();
        if self.files.contains_key(&path) {
            return Err(DepError::DuplicateFile {
                path: path.to_string(),
            });
        }

        if self.config.is_ignored(&path) {
            tracing::debug!(path = %path, %dep_type, "registering ignored file");
            self.files.insert(
                path.clone(),
                FileEntry {
                    path,
                    dep_type,
                    proto: None,
                },
            );
            return Ok(());
        }

        let package: Arc<str> = Arc::from(file.package_name.as_str());
        tracing::debug!(path = %path, %dep_type, package = %package, "registering file");

        self.packages
            .entry(package.clone())
            .or_default()
            .push(path.clone());

        for &root in file.roots() {
            let Some(el) = file.element(root) else { continue };
            if !el.is_extend() {
                continue;
            }
            let packages = self.extensions.entry(Arc::from(el.name())).or_default();
            if !packages.contains(&package) {
                packages.push(package.clone());
            }
        }

        self.files.insert(
            path.clone(),
            FileEntry {
                path,
                dep_type,
                proto: Some(file),
            },
        );
        Ok(())
    }

    /// Get a view of the file registered under `path`.
    pub fn file(&self, path: &str) -> Option<DepFile<'_>> {
        self.files.get(path).map(|entry| DepFile::new(self, entry))
    }

    /// Iterate over all files in registration order.
    pub fn files(&self) -> impl Iterator<Item = DepFile<'_>> {
        self.files.values().map(move |entry| DepFile::new(self, entry))
    }

    /// Iterate over packages and the paths of the files declaring them.
    pub fn packages(&self) -> impl Iterator<Item = (&str, &[Arc<str>])> {
        self.packages
            .iter()
            .map(|(pkg, paths)| (pkg.as_ref(), paths.as_slice()))
    }

    /// Paths of the files declaring `package`.
    pub fn package_files(&self, package: &str) -> Option<&[Arc<str>]> {
        self.packages.get(package).map(Vec::as_slice)
    }

    /// Iterate over extended type names and the packages extending them.
    pub fn extensions(&self) -> impl Iterator<Item = (&str, &[Arc<str>])> {
        self.extensions
            .iter()
            .map(|(target, pkgs)| (target.as_ref(), pkgs.as_slice()))
    }

    /// Get the number of registered files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if no file is registered.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
