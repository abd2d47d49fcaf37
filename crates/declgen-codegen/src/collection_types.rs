//! Collection type-import collection
//!
//! External collections may advertise ambient type declarations through
//! their package manifest. Once per build, every known collection is probed
//! concurrently; a collection whose manifest is unreadable, malformed, or
//! silent about types simply contributes `None` to the batch — a missing
//! manifest is a permanent "no types" answer, never an error.

use std::path::Path;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::debug;

use declgen_core::collection::{
    validate_collection_compatibility, CollectionMeta, CompilerUpgrade,
};

use crate::CodegenError;

/// How one collection's ambient type declarations should be pulled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionTypeImport {
    pub pkg_name: String,
    pub include_intrinsic_elements: bool,
}

/// The package-manifest fields this pass reads. Everything else is ignored.
#[derive(Debug, Deserialize)]
struct PackageJson {
    name: String,
    #[serde(default)]
    types: Option<String>,
    #[serde(default)]
    collection: Option<String>,
}

/// Probe every collection's package manifest for advertised type
/// declarations.
///
/// All probes run concurrently and are awaited as one batch. The output has
/// one entry per input collection, in input order; a failed or typeless
/// collection yields `None` without affecting its siblings.
pub async fn collect_collection_type_imports(
    collections: &[CollectionMeta],
    include_intrinsic_elements: bool,
) -> Vec<Option<CollectionTypeImport>> {
    let probes = collections.iter().map(|collection| {
        let upgrades = validate_collection_compatibility(collection);
        let include = include_intrinsic_elements
            && upgrades.contains(&CompilerUpgrade::AddLocalIntrinsicElements);
        collection_type_import(collection, include)
    });

    join_all(probes).await
}

async fn collection_type_import(
    collection: &CollectionMeta,
    include_intrinsic_elements: bool,
) -> Option<CollectionTypeImport> {
    let type_import = match read_package_manifest(&collection.module_dir).await {
        Ok(pkg) if pkg.types.is_some() && pkg.collection.is_some() => {
            Some(CollectionTypeImport {
                pkg_name: pkg.name,
                include_intrinsic_elements,
            })
        }
        Ok(_) => None,
        Err(e) => {
            debug!(
                collection = %collection.collection_name,
                "collection package manifest unavailable: {e}"
            );
            None
        }
    };

    if type_import.is_none() {
        debug!(
            "unable to find \"{}\" collection types",
            collection.collection_name
        );
    }

    type_import
}

async fn read_package_manifest(module_dir: &Path) -> Result<PackageJson, CodegenError> {
    let pkg_path = module_dir.join("package.json");
    let text = tokio::fs::read_to_string(&pkg_path).await?;
    Ok(serde_json::from_str(&text)?)
}
