//! Core component metadata and collection model for the declgen compiler

pub mod collection;
pub mod component;
pub mod error;
pub mod paths;

pub use collection::{
    validate_collection_compatibility, CollectionCompilerMeta, CollectionMeta, CompilerUpgrade,
};
pub use component::{ComponentMeta, TypeReference, TypeReferenceLocation};
pub use error::CoreError;
