//! Reference import resolution for generated type declarations
//!
//! Every compiled component may reference types defined in other source
//! files. This module is the single source of truth for deciding which file
//! each referenced type is imported from and under what name, accumulating
//! the result into one [`ImportManifest`] shared by the whole compilation
//! unit.
//!
//! ## Usage
//!
//! ```ignore
//! let mut resolver = ImportResolver::new();
//!
//! for (cmp, file_path) in components {
//!     resolver.resolve_component(cmp, file_path)?;
//! }
//!
//! let manifest = resolver.into_manifest();
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use declgen_core::component::{ComponentMeta, TypeReference, TypeReferenceLocation};
use declgen_core::paths;

use crate::CodegenError;

/// One imported type within a source file's import list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportBinding {
    /// Name as referenced by the consuming component
    pub local_name: String,
    /// Name to bind when importing; renamed when another file already
    /// claimed the bare name
    pub import_name: String,
}

impl ImportBinding {
    /// Whether emission needs `importName as localName` aliasing
    pub fn needs_alias(&self) -> bool {
        self.import_name != self.local_name
    }
}

/// Accumulated, deduplicated imports for one compilation unit
///
/// Keyed by resolved source-file path. Insertion-ordered: iteration order is
/// the order import statements are emitted in. Within one file, bindings are
/// unique by `local_name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportManifest {
    files: IndexMap<PathBuf, Vec<ImportBinding>>,
}

impl ImportManifest {
    /// Number of source files imports will be emitted for
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Bindings recorded for one source file, in resolution order
    pub fn bindings(&self, file: &Path) -> Option<&[ImportBinding]> {
        self.files.get(file).map(|b| b.as_slice())
    }

    /// All `(source file, bindings)` entries, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &[ImportBinding])> {
        self.files.iter().map(|(p, b)| (p.as_path(), b.as_slice()))
    }

    /// All source files imports will be emitted for, in insertion order
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(|p| p.as_path())
    }
}

/// Accumulator for import resolution across one compilation unit
///
/// Create one per compilation, feed every component through
/// [`resolve_component`](Self::resolve_component) sequentially, then take the
/// finished manifest. The shared name counter makes renaming global: the
/// first use of a bare type name anywhere in the compilation keeps it, later
/// uses from other files get a numeric suffix (`Foo`, `Foo1`, `Foo2`).
///
/// Suffix assignment follows encounter order, so renamed imports are stable
/// only for a fixed component processing order.
#[derive(Debug, Default)]
pub struct ImportResolver {
    manifest: ImportManifest,
    name_counts: HashMap<String, u32>,
}

impl ImportResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one component's type references into the manifest.
    ///
    /// `file_path` is the absolute path of the file containing the
    /// component's declaration; `Local` references resolve to it and
    /// relative `Import` references resolve against its directory.
    pub fn resolve_component(
        &mut self,
        cmp: &ComponentMeta,
        file_path: &Path,
    ) -> Result<(), CodegenError> {
        for (type_name, reference) in cmp.type_references() {
            self.add_reference(type_name, reference, file_path)?;
        }
        Ok(())
    }

    fn add_reference(
        &mut self,
        type_name: &str,
        reference: &TypeReference,
        file_path: &Path,
    ) -> Result<(), CodegenError> {
        let home_file = match reference.location {
            // Ambient type, no import statement needed
            TypeReferenceLocation::Global => return Ok(()),
            TypeReferenceLocation::Local => file_path.to_path_buf(),
            TypeReferenceLocation::Import => {
                let path = reference
                    .path
                    .as_deref()
                    .filter(|p| !p.is_empty())
                    .ok_or_else(|| CodegenError::InvalidReference {
                        type_name: type_name.to_string(),
                        reason: "import-location reference carries no path".to_string(),
                    })?;
                paths::resolve_from_file(file_path, path)
            }
        };

        let bindings = self.manifest.files.entry(home_file).or_default();

        // This file already imports the type under this name
        if bindings.iter().any(|b| b.local_name == type_name) {
            return Ok(());
        }

        let import_name = Self::next_import_name(&mut self.name_counts, type_name);
        bindings.push(ImportBinding {
            local_name: type_name.to_string(),
            import_name,
        });

        Ok(())
    }

    /// First global use of a name keeps it; every later use from another
    /// file reads the current count as its suffix, then bumps it.
    fn next_import_name(name_counts: &mut HashMap<String, u32>, name: &str) -> String {
        match name_counts.get_mut(name) {
            None => {
                name_counts.insert(name.to_string(), 1);
                name.to_string()
            }
            Some(count) => {
                let suffix = *count;
                *count += 1;
                format!("{name}{suffix}")
            }
        }
    }

    pub fn manifest(&self) -> &ImportManifest {
        &self.manifest
    }

    pub fn into_manifest(self) -> ImportManifest {
        self.manifest
    }
}
