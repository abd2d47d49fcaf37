//! End-to-end tests for reference import resolution across a compilation
//! unit: dedup, collision renaming, and manifest ordering.

use std::collections::HashSet;
use std::path::Path;

use pretty_assertions::assert_eq;

use declgen_codegen::ImportResolver;
use declgen_core::component::{
    ComplexType, ComponentMeta, EventMeta, MethodMeta, PropertyMeta, TypeReference,
};

/// Helper to build a component whose single property references the given
/// types, in order
fn component(tag: &str, refs: Vec<(&str, TypeReference)>) -> ComponentMeta {
    ComponentMeta {
        tag_name: tag.to_string(),
        properties: vec![PropertyMeta {
            name: "value".to_string(),
            complex_type: Some(complex(refs)),
        }],
        events: vec![],
        methods: vec![],
    }
}

fn complex(refs: Vec<(&str, TypeReference)>) -> ComplexType {
    ComplexType {
        original: String::new(),
        references: refs
            .into_iter()
            .map(|(n, r)| (n.to_string(), r))
            .collect(),
    }
}

#[test]
fn test_two_files_exporting_same_name_get_distinct_import_names() {
    // Component A references Foo from ./types.ts, component B references a
    // different Foo from ./other.ts. The second file's Foo is renamed.
    let mut resolver = ImportResolver::new();

    let a = component("cmp-a", vec![("Foo", TypeReference::import("./types.ts"))]);
    let b = component("cmp-b", vec![("Foo", TypeReference::import("./other.ts"))]);

    resolver
        .resolve_component(&a, Path::new("/src/a.tsx"))
        .unwrap();
    resolver
        .resolve_component(&b, Path::new("/src/b.tsx"))
        .unwrap();

    let manifest = resolver.into_manifest();
    assert_eq!(manifest.len(), 2);

    let types = manifest.bindings(Path::new("/src/types.ts")).unwrap();
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].local_name, "Foo");
    assert_eq!(types[0].import_name, "Foo");
    assert!(!types[0].needs_alias());

    let other = manifest.bindings(Path::new("/src/other.ts")).unwrap();
    assert_eq!(other.len(), 1);
    assert_eq!(other[0].local_name, "Foo");
    assert_eq!(other[0].import_name, "Foo1");
    assert!(other[0].needs_alias());
}

#[test]
fn test_many_components_sharing_one_type_produce_one_binding() {
    let mut resolver = ImportResolver::new();

    for (tag, file) in [
        ("cmp-a", "/src/a.tsx"),
        ("cmp-b", "/src/b.tsx"),
        ("cmp-c", "/src/nested/c.tsx"),
    ] {
        let cmp = component(tag, vec![("Shared", TypeReference::import("/src/shared.ts"))]);
        resolver.resolve_component(&cmp, Path::new(file)).unwrap();
    }

    let manifest = resolver.into_manifest();
    assert_eq!(manifest.len(), 1);
    let bindings = manifest.bindings(Path::new("/src/shared.ts")).unwrap();
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].import_name, "Shared");
}

#[test]
fn test_import_names_are_globally_unique() {
    // Same bare name from four different files; every assigned import name
    // must be distinct across the whole manifest.
    let mut resolver = ImportResolver::new();

    for (i, dir) in ["pkg1", "pkg2", "pkg3", "pkg4"].iter().enumerate() {
        let cmp = component(
            "cmp",
            vec![("State", TypeReference::import(format!("/lib/{dir}/state.ts")))],
        );
        resolver
            .resolve_component(&cmp, Path::new(&format!("/src/c{i}.tsx")))
            .unwrap();
    }

    let manifest = resolver.into_manifest();
    let mut seen = HashSet::new();
    for (_, bindings) in manifest.iter() {
        for binding in bindings {
            assert!(
                seen.insert(binding.import_name.clone()),
                "duplicate import name {}",
                binding.import_name
            );
        }
    }
    assert_eq!(seen.len(), 4);
    assert!(seen.contains("State"));
    assert!(seen.contains("State1"));
    assert!(seen.contains("State2"));
    assert!(seen.contains("State3"));
}

#[test]
fn test_member_kind_order_decides_renaming_ties() {
    // Properties resolve before events, events before methods. The property
    // reference wins the bare name even though the method reference was
    // declared on an earlier line of the struct literal.
    let cmp = ComponentMeta {
        tag_name: "cmp-ordered".to_string(),
        methods: vec![MethodMeta {
            name: "run".to_string(),
            complex_type: Some(complex(vec![(
                "Payload",
                TypeReference::import("/lib/method.ts"),
            )])),
        }],
        events: vec![EventMeta {
            name: "fired".to_string(),
            complex_type: Some(complex(vec![(
                "Payload",
                TypeReference::import("/lib/event.ts"),
            )])),
        }],
        properties: vec![PropertyMeta {
            name: "payload".to_string(),
            complex_type: Some(complex(vec![(
                "Payload",
                TypeReference::import("/lib/prop.ts"),
            )])),
        }],
    };

    let mut resolver = ImportResolver::new();
    resolver
        .resolve_component(&cmp, Path::new("/src/a.tsx"))
        .unwrap();
    let manifest = resolver.into_manifest();

    assert_eq!(
        manifest.bindings(Path::new("/lib/prop.ts")).unwrap()[0].import_name,
        "Payload"
    );
    assert_eq!(
        manifest.bindings(Path::new("/lib/event.ts")).unwrap()[0].import_name,
        "Payload1"
    );
    assert_eq!(
        manifest.bindings(Path::new("/lib/method.ts")).unwrap()[0].import_name,
        "Payload2"
    );
}

#[test]
fn test_relative_and_absolute_paths_resolve_against_component_file() {
    let cmp = component(
        "cmp-paths",
        vec![
            ("Sibling", TypeReference::import("./types.ts")),
            ("Parent", TypeReference::import("../shared/types.ts")),
            ("Vendored", TypeReference::import("/vendor/types.ts")),
        ],
    );

    let mut resolver = ImportResolver::new();
    resolver
        .resolve_component(&cmp, Path::new("/src/components/a.tsx"))
        .unwrap();
    let manifest = resolver.into_manifest();

    let files: Vec<&Path> = manifest.files().collect();
    assert_eq!(
        files,
        vec![
            Path::new("/src/components/types.ts"),
            Path::new("/src/shared/types.ts"),
            Path::new("/vendor/types.ts"),
        ]
    );
}

#[test]
fn test_mixed_locations_in_one_component() {
    let cmp = component(
        "cmp-mixed",
        vec![
            ("HTMLElement", TypeReference::global()),
            ("OwnOptions", TypeReference::local()),
            ("Theme", TypeReference::import("./theme.ts")),
        ],
    );

    let mut resolver = ImportResolver::new();
    resolver
        .resolve_component(&cmp, Path::new("/src/a.tsx"))
        .unwrap();
    let manifest = resolver.into_manifest();

    // The global reference contributes nothing
    assert_eq!(manifest.len(), 2);

    let own = manifest.bindings(Path::new("/src/a.tsx")).unwrap();
    assert_eq!(own[0].local_name, "OwnOptions");

    let theme = manifest.bindings(Path::new("/src/theme.ts")).unwrap();
    assert_eq!(theme[0].local_name, "Theme");
}

#[test]
fn test_manifest_key_order_follows_first_encounter() {
    let mut resolver = ImportResolver::new();

    let a = component("cmp-a", vec![("Late", TypeReference::import("/lib/z.ts"))]);
    let b = component("cmp-b", vec![("Early", TypeReference::import("/lib/a.ts"))]);
    resolver
        .resolve_component(&a, Path::new("/src/a.tsx"))
        .unwrap();
    resolver
        .resolve_component(&b, Path::new("/src/b.tsx"))
        .unwrap();

    // /lib/z.ts was encountered first and stays first, regardless of how the
    // paths would sort
    let files: Vec<&Path> = resolver.manifest().files().collect();
    assert_eq!(files, vec![Path::new("/lib/z.ts"), Path::new("/lib/a.ts")]);
}
