//! Leaf lookups the resolution core is built on.
//!
//! These answer "which declarations does this exact dotted name denote",
//! with no scope widening. The widening lives in [`DepFile::get_types`] and
//! [`DepType::get_types`].

use rustc_hash::FxHashSet;

use super::registry::Project;
use crate::hir::{DepError, DepFile, DepType, Result, pick_single, push_distinct};
use crate::syntax::{ElementId, ProtoFile, ScalarType};

/// A file whose package is a prefix of a looked-up name.
#[derive(Clone, Debug)]
pub struct DepFileOfName<'a> {
    /// The file.
    pub dep_file: DepFile<'a>,
    /// The file's package.
    pub package: &'a str,
    /// The looked-up name with the package prefix removed.
    pub name: String,
}

impl Project {
    /// Resolve `name` at the project root, with no file context.
    ///
    /// The name must be package-qualified (or a scalar, or declared in a
    /// file without package).
    pub fn get_types(&self, name: &str) -> Result<Vec<DepType<'_>>> {
        self.internal_get_types(name, None)
    }

    /// Like [`get_types`](Self::get_types), but expects at most one match.
    pub fn find_type(&self, name: &str) -> Result<Option<DepType<'_>>> {
        pick_single(name, self.get_types(name)?)
    }

    /// Like [`find_type`](Self::find_type), but a missing type is an error.
    pub fn get_type(&self, name: &str) -> Result<DepType<'_>> {
        self.find_type(name)?
            .ok_or_else(|| DepError::not_found(name))
    }

    /// Direct candidates for `name`, without any scope widening.
    ///
    /// With a `context` file, looks in the file itself (alias left empty)
    /// and in its dependencies (alias set to the dependency's package).
    /// Without one, looks in every file whose package prefixes `name`.
    pub fn internal_get_types<'a>(
        &'a self,
        name: &str,
        context: Option<DepFile<'a>>,
    ) -> Result<Vec<DepType<'a>>> {
        if let Some(scalar) = ScalarType::parse(name) {
            return Ok(vec![DepType::scalar(scalar)]);
        }

        let mut found = Vec::new();
        match context {
            Some(file) => self.collect_in_context(name, file, &mut found),
            None => {
                for fon in self.get_files_of_name(name)? {
                    collect_in_file(fon.dep_file, &fon.name, fon.package, &mut found);
                }
            }
        }
        tracing::trace!(name, count = found.len(), "direct lookup");
        Ok(found)
    }

    fn collect_in_context<'a>(&'a self, name: &str, file: DepFile<'a>, found: &mut Vec<DepType<'a>>) {
        let Some(proto) = file.proto_file() else { return };
        let package = proto.package_name.as_str();

        collect_in_file(file, name, "", found);
        if let Some(rest) = strip_package(name, package) {
            collect_in_file(file, rest, "", found);
        }

        // an import can also arrive through a public re-export
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for dep_path in file.find_dependencies() {
            if !seen.insert(dep_path) {
                continue;
            }
            let Some(dep) = self.file(dep_path) else {
                tracing::trace!(import = dep_path, "import is not registered");
                continue;
            };
            let Some(dep_proto) = dep.proto_file() else { continue };
            let dep_package = dep_proto.package_name.as_str();

            if let Some(rest) = strip_package(name, dep_package) {
                collect_in_file(dep, rest, dep_package, found);
            }
            if dep_package.is_empty() || dep_package == package {
                collect_in_file(dep, name, dep_package, found);
            }
        }
    }

    /// Every file whose package is a dotted prefix of `name`.
    ///
    /// Files without a package match with the whole name.
    pub fn get_files_of_name(&self, name: &str) -> Result<Vec<DepFileOfName<'_>>> {
        let mut ret = Vec::new();
        for (package, paths) in &self.packages {
            let rest = if package.is_empty() {
                name
            } else {
                match strip_package(name, package) {
                    Some(rest) => rest,
                    None => continue,
                }
            };
            for path in paths {
                if let Some(dep_file) = self.file(path) {
                    ret.push(DepFileOfName {
                        dep_file,
                        package: package.as_ref(),
                        name: rest.to_string(),
                    });
                }
            }
        }
        Ok(ret)
    }

    /// Like [`get_files_of_name`](Self::get_files_of_name), but expects at most one file.
    pub fn get_file_of_name(&self, name: &str) -> Result<Option<DepFileOfName<'_>>> {
        let mut files = self.get_files_of_name(name)?;
        match files.len() {
            0 => Ok(None),
            1 => Ok(files.pop()),
            _ => Err(DepError::ambiguous(name)),
        }
    }

    /// Packages declaring an `extend` of the type `{alias}.{name}`.
    pub fn get_extensions(&self, alias: &str, name: &str) -> Vec<String> {
        let target = if alias.is_empty() {
            name.to_string()
        } else {
            format!("{alias}.{name}")
        };
        self.extensions
            .get(target.as_str())
            .map(|pkgs| pkgs.iter().map(|p| p.to_string()).collect())
            .unwrap_or_default()
    }

    /// The `extend {full_name}` block declared by `package`, if any.
    pub fn get_type_extension(&self, full_name: &str, package: &str) -> Result<Option<DepType<'_>>> {
        let paths = self
            .packages
            .get(package)
            .ok_or_else(|| DepError::UnknownPackage {
                package: package.to_string(),
            })?;

        for path in paths {
            let Some(file) = self.file(path) else { continue };
            let Some(proto) = file.proto_file() else { continue };
            let extend = proto.roots().iter().copied().find(|&id| {
                proto
                    .element(id)
                    .is_some_and(|el| el.is_extend() && el.name() == full_name)
            });
            if let Some(id) = extend {
                return Ok(Some(DepType::new(file, package, package, full_name, id)));
            }
        }
        Ok(None)
    }

    /// Wrap an element of `file` as a type handle.
    pub fn dep_type_from_element<'a>(&'a self, file: DepFile<'a>, element: ElementId) -> Option<DepType<'a>> {
        DepType::from_element(file, element)
    }
}

/// `name` without its `package.` prefix, if it has one.
pub(crate) fn strip_package<'n>(name: &'n str, package: &str) -> Option<&'n str> {
    if package.is_empty() {
        return None;
    }
    name.strip_prefix(package)?.strip_prefix('.')
}

/// Walk the file's type declarations along the segments of `dotted`.
pub(crate) fn find_in_file(proto: &ProtoFile, dotted: &str) -> Option<ElementId> {
    let mut parent = None;
    for segment in dotted.split('.') {
        let id = proto.children_of(parent).iter().copied().find(|&id| {
            proto
                .element(id)
                .is_some_and(|el| el.is_type_declaration() && el.name() == segment)
        })?;
        parent = Some(id);
    }
    parent
}

fn collect_in_file<'a>(file: DepFile<'a>, dotted: &str, alias: &str, found: &mut Vec<DepType<'a>>) {
    let Some(proto) = file.proto_file() else { return };
    let Some(id) = find_in_file(proto, dotted) else { return };
    let Some(name) = proto.scoped_name(id) else { return };
    push_distinct(found, DepType::new(file, alias, &proto.package_name, name, id));
}
