//! Component metadata consumed by type-declaration generation
//!
//! A component's public surface (properties, events, methods) may reference
//! types defined elsewhere. Each member carries an optional `ComplexType`
//! whose `references` map records, per referenced type name, where that type
//! lives relative to the component file. The reference maps preserve
//! insertion order because processing order is observable through import
//! renaming downstream.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Where a referenced type is defined, relative to the referencing file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeReferenceLocation {
    /// Ambient/global type, no import needed
    Global,
    /// Defined in the same file as the component
    Local,
    /// Defined in another file, reachable via `path`
    Import,
}

/// A single referenced type name and its provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeReference {
    pub location: TypeReferenceLocation,
    /// Source file of the type, absolute or relative to the referencing
    /// file. Only meaningful for `Import` references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl TypeReference {
    pub fn global() -> Self {
        Self {
            location: TypeReferenceLocation::Global,
            path: None,
        }
    }

    pub fn local() -> Self {
        Self {
            location: TypeReferenceLocation::Local,
            path: None,
        }
    }

    pub fn import(path: impl Into<String>) -> Self {
        Self {
            location: TypeReferenceLocation::Import,
            path: Some(path.into()),
        }
    }
}

/// Ordered map of referenced type name -> reference record
pub type TypeReferences = IndexMap<String, TypeReference>;

/// The resolved complex type of a member, with its external references
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexType {
    /// Original type text as written in the source
    pub original: String,
    #[serde(default)]
    pub references: TypeReferences,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyMeta {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complex_type: Option<ComplexType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMeta {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complex_type: Option<ComplexType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodMeta {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complex_type: Option<ComplexType>,
}

/// Compiler metadata for one component declaration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentMeta {
    pub tag_name: String,
    #[serde(default)]
    pub properties: Vec<PropertyMeta>,
    #[serde(default)]
    pub events: Vec<EventMeta>,
    #[serde(default)]
    pub methods: Vec<MethodMeta>,
}

impl ComponentMeta {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Self::default()
        }
    }

    /// All type references on the component surface, in declaration order:
    /// properties first, then events, then methods. Members without a
    /// complex type are skipped.
    pub fn type_references(&self) -> impl Iterator<Item = (&str, &TypeReference)> {
        let properties = self
            .properties
            .iter()
            .filter_map(|p| p.complex_type.as_ref());
        let events = self.events.iter().filter_map(|e| e.complex_type.as_ref());
        let methods = self.methods.iter().filter_map(|m| m.complex_type.as_ref());

        properties
            .chain(events)
            .chain(methods)
            .flat_map(|ct| ct.references.iter().map(|(name, r)| (name.as_str(), r)))
    }
}
