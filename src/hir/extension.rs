//! Extension lookups on type handles.

use indexmap::IndexMap;

use super::diagnostics::Result;
use super::types::DepType;

impl<'a> DepType<'a> {
    /// Packages that declare an `extend` of this exact type. Empty for scalars.
    pub fn extension_packages(&self) -> Vec<String> {
        match self.file() {
            Some(file) => file
                .project()
                .get_extensions(self.original_alias(), self.name()),
            None => Vec::new(),
        }
    }

    /// The `extend` block `package` declares for this type, if it declares one.
    pub fn get_type_extension(&self, package: &str) -> Result<Option<DepType<'a>>> {
        match self.file() {
            Some(file) => file
                .project()
                .get_type_extension(&self.full_original_name(), package),
            None => Ok(None),
        }
    }

    /// Every extension of this type, keyed by the extending package.
    ///
    /// `None` when no package extends this type.
    pub fn get_type_extensions(&self) -> Result<Option<IndexMap<String, DepType<'a>>>> {
        let packages = self.extension_packages();
        if packages.is_empty() {
            return Ok(None);
        }

        let mut ret = IndexMap::with_capacity(packages.len());
        for package in packages {
            if let Some(extension) = self.get_type_extension(&package)? {
                ret.insert(package, extension);
            }
        }
        Ok(Some(ret))
    }
}
