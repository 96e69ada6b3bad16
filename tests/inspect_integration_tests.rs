//! Integration tests for the introspector
//!
//! These tests verify:
//! - Non-aggregate and absent inputs
//! - The public-field rule
//! - Value extraction and type descriptors
//! - Cache hits, value freshness and reset
//! - Anonymous records never being cached
//! - Skipped, unrenderable and flattened fields

use ouroboros_inspect::{
    EntityIdentity, InspectConfig, InspectError, Introspector, MemoryCache, PropertyRecord,
    Schema, SKIPPED_VALUE, UNRENDERABLE_VALUE,
};
use proptest::prelude::*;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct NamedStruct {
    name: String,
    email: String,
    age: u32,
}

fn named(age: u32) -> NamedStruct {
    NamedStruct {
        name: "Karl".to_string(),
        email: "karl@younger.days".to_string(),
        age,
    }
}

#[allow(non_snake_case)]
#[derive(Serialize)]
struct Mixed {
    A: i32,
    b: i32,
    C: i32,
    d: i32,
}

fn mixed() -> Mixed {
    Mixed {
        A: 1,
        b: 2,
        C: 3,
        d: 4,
    }
}

/// A record whose `Serialize` impl reports no container name
struct Inline {
    a: i32,
}

impl Serialize for Inline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("", 1)?;
        state.serialize_field("A", &self.a)?;
        state.end()
    }
}

#[test]
fn test_simple_values_have_no_properties() {
    let mut introspector = Introspector::new();

    let results = vec![
        introspector.inspect("").unwrap(),
        introspector.inspect(&0).unwrap(),
        introspector.inspect(&true).unwrap(),
        introspector.inspect(&None::<NamedStruct>).unwrap(),
        introspector.inspect(&vec![1, 2, 3]).unwrap(),
    ];

    for inspection in results {
        assert!(inspection.schema.is_empty());
        assert!(!inspection.from_cache);
        assert!(inspection.identity.is_none());
    }
    assert!(introspector.cache().is_empty());
}

#[test]
fn test_simple_value_with_identity_is_not_cached() {
    let mut introspector = Introspector::new();

    introspector.inspect_as("simple", &42).unwrap();
    let second = introspector.inspect_as("simple", &42).unwrap();

    assert!(second.schema.is_empty());
    assert!(!second.from_cache);
    assert!(introspector.cache().is_empty());
}

#[test]
fn test_struct_finds_only_public_properties() {
    let mut introspector = Introspector::new();

    let inspection = introspector.inspect(&mixed()).unwrap();

    assert_eq!(inspection.schema.names_as_csv(), "A,C");
    assert_eq!(
        inspection.schema.names(),
        vec!["A".to_string(), "C".to_string()]
    );
}

#[test]
fn test_struct_extracts_values_and_types() {
    let mut introspector = Introspector::new();

    let schema = introspector.inspect(&mixed()).unwrap().schema;

    assert_eq!(schema.value_of("A"), Some("1"));
    assert_eq!(schema.value_of("C"), Some("3"));
    assert_eq!(
        schema.get("A"),
        Some(&PropertyRecord::new("A", "i32", "1"))
    );
}

#[test]
fn test_type_name_derived_automatically() {
    let mut introspector = Introspector::new();

    let inspection = introspector.inspect(&named(30)).unwrap();

    assert_eq!(inspection.schema.names_as_csv(), "Age,Email,Name");
    assert_eq!(inspection.schema.names_as_sql(), "Age, Email, Name");
    assert_eq!(
        inspection.identity,
        Some(EntityIdentity::Derived(
            std::any::type_name::<NamedStruct>().to_string()
        ))
    );
    assert_eq!(
        inspection.schema.get("Name").map(|p| p.declared_type.as_str()),
        Some("String")
    );
}

#[test]
fn test_first_request_does_not_return_from_cache() {
    let mut introspector = Introspector::new();

    let (_, from_cache) = introspector.inspect(&mixed()).unwrap().into_parts();

    assert!(!from_cache);
}

#[test]
fn test_subsequent_request_returns_from_cache() {
    let mut introspector = Introspector::new();

    introspector.inspect(&named(30)).unwrap();
    let (_, from_cache) = introspector.inspect(&named(30)).unwrap().into_parts();

    assert!(from_cache);
}

#[test]
fn test_explicit_identity_is_cached() {
    let mut introspector = Introspector::new();

    introspector.inspect_as("simple", &mixed()).unwrap();
    let second = introspector.inspect_as("simple", &mixed()).unwrap();

    assert!(second.from_cache);
    assert_eq!(
        second.identity,
        Some(EntityIdentity::Explicit("simple".to_string()))
    );
    assert!(introspector.cache().contains_key("i__simple"));
}

#[test]
fn test_cache_hit_does_not_return_stale_values() {
    let mut introspector = Introspector::new();

    introspector.inspect_as("person", &named(25)).unwrap();
    let inspection = introspector.inspect_as("person", &named(30)).unwrap();

    assert!(inspection.from_cache);
    assert_eq!(inspection.schema.value_of("Age"), Some("30"));
    assert_eq!(inspection.schema.value_of("Name"), Some("Karl"));
}

#[test]
fn test_reset_clears_cached_identities() {
    let mut introspector = Introspector::new();
    introspector.inspect_as("person", &named(25)).unwrap();
    assert!(introspector.inspect_as("person", &named(25)).unwrap().from_cache);

    introspector.reset();

    assert!(!introspector.inspect_as("person", &named(25)).unwrap().from_cache);
}

#[test]
fn test_anonymous_record_is_never_cached() {
    let mut introspector = Introspector::new();

    for _ in 0..3 {
        let inspection = introspector.inspect(&Inline { a: 5 }).unwrap();
        assert!(!inspection.from_cache);
        assert!(inspection.identity.is_none());
        assert_eq!(inspection.schema.value_of("A"), Some("5"));
    }
    assert!(introspector.cache().is_empty());
}

#[test]
fn test_anonymous_record_with_identity_is_cached() {
    let mut introspector = Introspector::new();

    introspector.inspect_as("inline", &Inline { a: 1 }).unwrap();
    let second = introspector.inspect_as("inline", &Inline { a: 2 }).unwrap();

    assert!(second.from_cache);
    assert_eq!(second.schema.value_of("A"), Some("2"));
}

#[test]
fn test_identities_do_not_share_schemas() {
    let mut introspector = Introspector::new();

    introspector.inspect_as("person", &named(25)).unwrap();
    let other = introspector.inspect_as("mixed", &mixed()).unwrap();

    assert!(!other.from_cache);
    assert_eq!(other.schema.names_as_csv(), "A,C");
    assert_eq!(introspector.cache().len(), 2);
}

#[test]
fn test_reshaped_value_under_same_identity_fails() {
    let mut introspector = Introspector::new();
    introspector.inspect_as("shared", &named(25)).unwrap();

    let result = introspector.inspect_as("shared", &mixed());

    assert!(matches!(result, Err(InspectError::MissingField { .. })));
}

#[test]
fn test_skipped_fields_are_invisible() {
    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Account {
        login: String,
        #[serde(skip)]
        #[allow(dead_code)]
        password: String,
    }

    let mut introspector = Introspector::new();
    let schema = introspector
        .inspect(&Account {
            login: "karl".to_string(),
            password: "hunter2".to_string(),
        })
        .unwrap()
        .schema;

    assert_eq!(schema.names_as_csv(), "Login");
}

#[test]
fn test_nested_values_rendered_as_json() {
    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Shape {
        origin: Point,
        tags: Vec<String>,
        label: Option<String>,
    }

    let mut introspector = Introspector::new();
    let schema = introspector
        .inspect(&Shape {
            origin: Point { x: 1, y: 2 },
            tags: vec!["a".to_string()],
            label: None,
        })
        .unwrap()
        .schema;

    assert_eq!(schema.value_of("Origin"), Some(r#"{"x":1,"y":2}"#));
    assert_eq!(schema.value_of("Tags"), Some(r#"["a"]"#));
    assert_eq!(schema.value_of("Label"), Some("null"));
    assert_eq!(
        schema.get("Tags").map(|p| p.declared_type.as_str()),
        Some("Vec<String>")
    );
}

#[test]
fn test_private_field_without_json_form_does_not_fail() {
    #[allow(non_snake_case)]
    #[derive(Serialize)]
    struct Board {
        A: i32,
        cells: HashMap<(i32, i32), i32>,
    }

    let mut cells = HashMap::new();
    cells.insert((1, 2), 3);

    let mut introspector = Introspector::new();
    let schema = introspector.inspect(&Board { A: 1, cells }).unwrap().schema;

    assert_eq!(schema.names_as_csv(), "A");
    assert_eq!(schema.value_of("A"), Some("1"));
}

#[test]
fn test_public_field_without_json_form_is_placeholder() {
    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Board {
        cells: HashMap<(i32, i32), i32>,
    }

    let mut cells = HashMap::new();
    cells.insert((1, 2), 3);

    let mut introspector = Introspector::new();
    let schema = introspector.inspect(&Board { cells }).unwrap().schema;

    assert_eq!(schema.value_of("Cells"), Some(UNRENDERABLE_VALUE));
}

#[test]
fn test_conditionally_skipped_field_after_caching() {
    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Profile {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        nickname: Option<String>,
    }

    let mut introspector = Introspector::new();
    let first = introspector
        .inspect(&Profile {
            name: "Karl".to_string(),
            nickname: Some("K".to_string()),
        })
        .unwrap();
    assert_eq!(first.schema.names_as_csv(), "Name,Nickname");

    let second = introspector
        .inspect(&Profile {
            name: "Karl".to_string(),
            nickname: None,
        })
        .unwrap();

    assert!(second.from_cache);
    assert_eq!(second.schema.names_as_csv(), "Name,Nickname");
    assert_eq!(second.schema.value_of("Nickname"), Some(SKIPPED_VALUE));
}

#[test]
fn test_flattened_struct_is_not_a_record() {
    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Audit {
        created_by: String,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Document {
        title: String,
        #[serde(flatten)]
        audit: Audit,
    }

    let document = Document {
        title: "Notes".to_string(),
        audit: Audit {
            created_by: "karl".to_string(),
        },
    };

    let mut introspector = Introspector::new();
    introspector.inspect(&document).unwrap();
    let inspection = introspector.inspect(&document).unwrap();

    assert!(inspection.schema.is_empty());
    assert!(!inspection.from_cache);
    assert!(introspector.cache().is_empty());
}

#[test]
fn test_with_config_rejects_empty_prefix() {
    let config = InspectConfig::builder().key_prefix("").build();

    let result = Introspector::with_config(MemoryCache::new(), config);

    assert!(matches!(result, Err(InspectError::ConfigError(_))));
}

fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[A-Za-z][A-Za-z0-9_]{0,8}", 0..16)
        .prop_map(|set| set.into_iter().collect())
}

proptest! {
    /// Names come out sorted and independent of insertion order
    #[test]
    fn names_are_sorted_regardless_of_insertion_order(names in names_strategy()) {
        let forward: Schema = names
            .iter()
            .map(|n| PropertyRecord::new(n.clone(), "", ""))
            .collect();
        let backward: Schema = names
            .iter()
            .rev()
            .map(|n| PropertyRecord::new(n.clone(), "", ""))
            .collect();

        let listed = forward.names();
        prop_assert_eq!(&listed, &backward.names());
        prop_assert!(listed.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(listed.len(), names.len());
        prop_assert_eq!(forward.names_as_delimited_list(","), listed.join(","));
    }
}
