//! External collection metadata and compatibility validation
//!
//! A collection is a pre-built package of components. Each one records the
//! compiler version it was built with; depending on that version the current
//! build has to apply upgrades to the collection's metadata, and newer
//! collections may advertise capabilities older ones lack.

use std::path::PathBuf;

use semver::Version;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::CoreError;

/// Metadata for one external collection dependency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionMeta {
    pub collection_name: String,
    /// Root directory of the installed collection module
    pub module_dir: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler: Option<CollectionCompilerMeta>,
}

/// The compiler that produced a collection, as recorded in its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionCompilerMeta {
    pub name: String,
    pub version: String,
}

impl CollectionCompilerMeta {
    /// The recorded version as semver
    pub fn parsed_version(&self) -> Result<Version, CoreError> {
        Version::parse(&self.version).map_err(|e| CoreError::InvalidCompilerVersion {
            version: self.version.clone(),
            reason: e.to_string(),
        })
    }
}

/// Upgrades the current build must apply to a collection, derived from the
/// compiler version the collection was built with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompilerUpgrade {
    /// Collection metadata predates the current metadata format
    MetadataUpgrade,
    /// Collection output still carries compiler-internal module imports
    RewriteModuleImports,
    /// Collection was built by a compiler that emits local intrinsic
    /// element declarations
    AddLocalIntrinsicElements,
}

const METADATA_FORMAT_VERSION: Version = Version::new(0, 1, 0);
const MODULE_IMPORT_REWRITE_VERSION: Version = Version::new(0, 6, 0);
const LOCAL_INTRINSIC_ELEMENTS_VERSION: Version = Version::new(0, 7, 0);

/// Determine which upgrades a collection requires.
///
/// A collection with no recorded compiler version, or one that cannot be
/// parsed, is treated as built by the oldest known compiler: every rewrite
/// upgrade applies and no newer capability is assumed.
pub fn validate_collection_compatibility(collection: &CollectionMeta) -> Vec<CompilerUpgrade> {
    let version = collection
        .compiler
        .as_ref()
        .and_then(|c| match c.parsed_version() {
            Ok(v) => Some(v),
            Err(e) => {
                debug!(
                    collection = %collection.collection_name,
                    "unusable collection compiler version: {e}"
                );
                None
            }
        });

    let mut upgrades = Vec::new();

    match version {
        Some(v) => {
            if v < METADATA_FORMAT_VERSION {
                upgrades.push(CompilerUpgrade::MetadataUpgrade);
            }
            if v < MODULE_IMPORT_REWRITE_VERSION {
                upgrades.push(CompilerUpgrade::RewriteModuleImports);
            }
            if v >= LOCAL_INTRINSIC_ELEMENTS_VERSION {
                upgrades.push(CompilerUpgrade::AddLocalIntrinsicElements);
            }
        }
        None => {
            upgrades.push(CompilerUpgrade::MetadataUpgrade);
            upgrades.push(CompilerUpgrade::RewriteModuleImports);
        }
    }

    upgrades
}
