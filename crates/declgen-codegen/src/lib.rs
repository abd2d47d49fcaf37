//! Type-declaration import resolution for the declgen compiler
//!
//! Two passes run against already-extracted component metadata:
//!
//! - [`ImportResolver`] folds every component's type references into one
//!   deduplicated, collision-free [`ImportManifest`] per compilation unit.
//! - [`collect_collection_type_imports`] probes each external collection's
//!   package manifest for advertised type declarations.

pub mod collection_types;
pub mod error;
pub mod import_resolver;

pub use collection_types::{collect_collection_type_imports, CollectionTypeImport};
pub use error::CodegenError;
pub use import_resolver::{ImportBinding, ImportManifest, ImportResolver};
