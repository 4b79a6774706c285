// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use std::collections::HashMap;
use std::fs;

use indexmap::IndexMap;

use crate::locate::locate;

const USERS_DOC: &str = r#"{
  "app": "scry",
  "debug": true,
  "server": {
    "host": "localhost",
    "port": 8080
  },
  "users": [
    {"name": "Al", "admin": true},
    {"name": "Bo", "admin": false}
  ],
  "features": ["query", "tree"]
}"#;

#[test]
fn test_document_from_string() {
    let doc = ScryDocument::from_str(USERS_DOC).expect("Failed to parse document");

    let app: String = doc.get("$.app").expect("Failed to get app");
    assert_eq!(app, "scry");

    let host: String = doc.get("$.server.host").expect("Failed to get host");
    assert_eq!(host, "localhost");

    let port: u16 = doc.get("$.server.port").expect("Failed to get port");
    assert_eq!(port, 8080);

    let debug: bool = doc.get("$.debug").expect("Failed to get debug");
    assert_eq!(debug, true);

    let features: Vec<String> = doc.get("$.features").expect("Failed to get features");
    assert_eq!(features, vec!["query", "tree"]);

    assert!(doc.has("$.server.host"));
    assert!(!doc.has("$.server.nonexistent"));

    let server_keys = doc.keys("$.server").expect("Failed to get server keys");
    assert_eq!(server_keys, vec!["host", "port"]);
}

#[test]
fn test_document_from_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("doc.json");
    fs::write(&path, USERS_DOC).expect("Failed to write temp file");

    let doc = ScryDocument::from_file(&path).expect("Failed to load document");
    let port: u16 = doc.get("$.server.port").expect("Failed to get port");
    assert_eq!(port, 8080);
    assert_eq!(doc.text(), USERS_DOC);
}

#[test]
fn test_missing_file_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing.json");

    let err = ScryDocument::from_file(&path).expect_err("Expected a file error");
    match err {
        ScryError::FileError { code, .. } => assert_eq!(code, Some(301)),
        other => panic!("Expected file error, got {:?}", other),
    }
}

#[test]
fn test_validate() {
    assert!(ScryDocument::validate(r#"{"ok": true}"#).is_ok());

    let text = "{\n  \"a\": oops\n}";
    let err = ScryDocument::validate(text).expect_err("Expected a parse error");
    let offset = err.offset().expect("Parse errors carry an offset");
    assert_eq!(locate(text, offset).line, 2);
}

#[test]
fn test_root_query_and_text_accessor() {
    let doc = ScryDocument::from_str(r#"{"a": 1}"#).expect("Failed to parse document");
    assert_eq!(doc.text(), r#"{"a": 1}"#);

    let matches = doc.query("$").expect("Failed to query root");
    assert_eq!(matches, vec![doc.root()]);
}

#[test]
fn test_order_preservation() {
    let doc = ScryDocument::from_str(r#"{"first": 1, "second": 2, "third": 3}"#)
        .expect("Failed to parse document");
    let keys = doc.keys("$").expect("Failed to get keys");
    assert_eq!(keys, vec!["first", "second", "third"]);
}

#[test]
fn test_format_and_minify_round_trip() {
    let doc = ScryDocument::from_str(USERS_DOC).expect("Failed to parse document");

    let pretty = doc.format(2);
    assert!(pretty.contains("\n  \"app\": \"scry\""));
    assert!(pretty.contains("\"port\": 8080"));

    let reloaded = ScryDocument::from_str(&pretty).expect("Failed to reparse formatted text");
    assert_eq!(reloaded.root(), doc.root());

    let minified = doc.minify();
    assert!(!minified.contains('\n'));
    assert!(minified.contains("\"port\":8080"));

    let reloaded = ScryDocument::from_str(&minified).expect("Failed to reparse minified text");
    assert_eq!(reloaded.root(), doc.root());
}

// ===== Presentation Policy Tests =====

#[test]
fn test_single_match_unwraps_to_bare_value() {
    let doc = ScryDocument::from_str(USERS_DOC).expect("Failed to parse document");
    let value = doc.query_value("$.users[0].name").expect("Failed to query");
    assert_eq!(value, Value::String("Al".into()));
}

#[test]
fn test_many_matches_wrap_in_array() {
    let doc = ScryDocument::from_str(USERS_DOC).expect("Failed to parse document");
    let value = doc.query_value("$.users[*].name").expect("Failed to query");
    assert_eq!(
        value,
        Value::Array(vec![Value::String("Al".into()), Value::String("Bo".into())])
    );
}

#[test]
fn test_no_matches_wrap_in_empty_array() {
    let doc = ScryDocument::from_str(USERS_DOC).expect("Failed to parse document");
    let value = doc.query_value("$.missing").expect("Failed to query");
    assert_eq!(value, Value::Array(vec![]));
}

#[test]
fn test_query_text_output() {
    let doc = ScryDocument::from_str(USERS_DOC).expect("Failed to parse document");

    let minified = doc.query_text("$.users[*].name", None).expect("Failed to query");
    assert_eq!(minified, r#"["Al","Bo"]"#);

    let pretty = doc.query_text("$.users[*].name", Some(2)).expect("Failed to query");
    assert_eq!(pretty, "[\n  \"Al\",\n  \"Bo\"\n]");
}

#[test]
fn test_query_tree_keeps_prior_collapse_state() {
    let doc = ScryDocument::from_str(USERS_DOC).expect("Failed to parse document");

    let mut prior = doc.query_tree("$.server", None).expect("Failed to project");
    assert_eq!(prior.identity, "$");
    prior.toggle();

    let rebuilt = doc.query_tree("$.server", Some(&prior)).expect("Failed to project");
    assert!(rebuilt.collapsed);
}

#[test]
fn test_malformed_path_errors_propagate() {
    let doc = ScryDocument::from_str(USERS_DOC).expect("Failed to parse document");
    for op in [
        doc.query("users").map(|_| ()),
        doc.query_value("users").map(|_| ()),
        doc.query_text("users", None).map(|_| ()),
        doc.query_tree("users", None).map(|_| ()),
    ] {
        match op {
            Err(ScryError::SyntaxError { offset, .. }) => assert_eq!(offset, 0),
            other => panic!("Expected syntax error, got {:?}", other),
        }
    }
}

// ===== Typed Access Tests =====

#[test]
fn test_get_requires_exactly_one_match() {
    let doc = ScryDocument::from_str(USERS_DOC).expect("Failed to parse document");

    let missing: Result<String, ScryError> = doc.get("$.nope");
    match missing {
        Err(ScryError::NotFound { code, .. }) => assert_eq!(code, Some(304)),
        other => panic!("Expected not-found error, got {:?}", other),
    }

    let many: Result<String, ScryError> = doc.get("$.users[*].name");
    match many {
        Err(ScryError::TypeError { code, .. }) => assert_eq!(code, Some(412)),
        other => panic!("Expected type error, got {:?}", other),
    }
}

#[test]
fn test_get_optional() {
    let doc = ScryDocument::from_str(USERS_DOC).expect("Failed to parse document");

    let host: Option<String> = doc.get_optional("$.server.host").expect("Failed to get");
    assert_eq!(host, Some("localhost".to_string()));

    let absent: Option<String> = doc.get_optional("$.server.tls").expect("Failed to get");
    assert_eq!(absent, None);

    // Present but wrong type still errors.
    let wrong: Result<Option<String>, ScryError> = doc.get_optional("$.server.port");
    assert!(wrong.is_err());
}

#[test]
fn test_get_or_falls_back() {
    let doc = ScryDocument::from_str(USERS_DOC).expect("Failed to parse document");
    assert_eq!(doc.get_or("$.server.timeout", 30u64), 30);
    assert_eq!(doc.get_or("$.server.port", 0u64), 8080);
}

#[test]
fn test_keys_on_non_object_is_a_type_error() {
    let doc = ScryDocument::from_str(USERS_DOC).expect("Failed to parse document");
    let result = doc.keys("$.features");
    match result {
        Err(ScryError::TypeError { code, .. }) => assert_eq!(code, Some(306)),
        other => panic!("Expected type error, got {:?}", other),
    }
}

#[test]
fn test_document_with_all_types() {
    let doc = ScryDocument::from_str(
        r#"{
          "types": {
            "string_val": "hello",
            "int_val": 42,
            "float_val": 3.14,
            "bool_val": true,
            "null_val": null,
            "array_val": [1, 2, 3],
            "nested": {"key": "value"}
          }
        }"#,
    )
    .expect("Failed to parse document");

    let s: String = doc.get("$.types.string_val").unwrap();
    assert_eq!(s, "hello");

    let i: i32 = doc.get("$.types.int_val").unwrap();
    assert_eq!(i, 42);

    let f: f64 = doc.get("$.types.float_val").unwrap();
    assert!((f - 3.14).abs() < 0.001);

    let b: bool = doc.get("$.types.bool_val").unwrap();
    assert_eq!(b, true);

    let opt: Option<String> = doc.get("$.types.null_val").unwrap();
    assert_eq!(opt, None);

    let arr: Vec<i32> = doc.get("$.types.array_val").unwrap();
    assert_eq!(arr, vec![1, 2, 3]);

    let nested: IndexMap<String, Value> = doc.get("$.types.nested").unwrap();
    assert_eq!(nested.get("key"), Some(&Value::String("value".into())));
}

#[test]
fn test_numeric_range_validation() {
    let doc = ScryDocument::from_str(r#"{"small": 10, "medium": 1000, "large": 1000000}"#)
        .expect("Failed to parse document");

    let small: Result<u8, ScryError> = doc.get("$.small");
    assert!(small.is_ok());

    let medium: Result<u16, ScryError> = doc.get("$.medium");
    assert!(medium.is_ok());

    let large: Result<u32, ScryError> = doc.get("$.large");
    assert!(large.is_ok());

    let too_big: Result<u8, ScryError> = doc.get("$.medium");
    assert!(too_big.is_err());
}

#[test]
fn test_type_mismatch_errors() {
    let doc = ScryDocument::from_str(r#"{"value": "not a number"}"#)
        .expect("Failed to parse document");

    let result: Result<i32, ScryError> = doc.get("$.value");
    assert!(result.is_err());
}

// ===== String Conversion Tests =====

#[test]
fn test_string_conversion() {
    let value = Value::String("hello".to_string());
    let result: Result<String, ScryError> = value.try_into();
    assert_eq!(result.unwrap(), "hello");
}

#[test]
fn test_string_conversion_error() {
    let value = Value::Number(42.0);
    let result: Result<String, ScryError> = value.try_into();
    assert!(result.is_err());
}

// ===== Number Conversion Tests =====

#[test]
fn test_f64_conversion() {
    let value = Value::Number(3.14);
    let result: Result<f64, ScryError> = value.try_into();
    assert_eq!(result.unwrap(), 3.14);
}

#[test]
fn test_f32_conversion() {
    let value = Value::Number(2.5);
    let result: Result<f32, ScryError> = value.try_into();
    assert_eq!(result.unwrap(), 2.5_f32);
}

#[test]
fn test_i32_conversion() {
    let value = Value::Number(-42.0);
    let result: Result<i32, ScryError> = value.try_into();
    assert_eq!(result.unwrap(), -42);
}

#[test]
fn test_i64_conversion() {
    let value = Value::Number(1234567890.0);
    let result: Result<i64, ScryError> = value.try_into();
    assert_eq!(result.unwrap(), 1234567890);
}

#[test]
fn test_u8_conversion_bounds() {
    let ok: Result<u8, ScryError> = Value::Number(255.0).try_into();
    assert_eq!(ok.unwrap(), 255);

    let over: Result<u8, ScryError> = Value::Number(256.0).try_into();
    assert!(over.is_err());

    let negative: Result<u8, ScryError> = Value::Number(-1.0).try_into();
    assert!(negative.is_err());
}

#[test]
fn test_u16_conversion_bounds() {
    let ok: Result<u16, ScryError> = Value::Number(65535.0).try_into();
    assert_eq!(ok.unwrap(), 65535);

    let over: Result<u16, ScryError> = Value::Number(65536.0).try_into();
    assert!(over.is_err());
}

#[test]
fn test_u32_conversion() {
    let value = Value::Number(4294967295.0);
    let result: Result<u32, ScryError> = value.try_into();
    assert_eq!(result.unwrap(), 4294967295);
}

#[test]
fn test_u64_conversion() {
    let value = Value::Number(123456789.0);
    let result: Result<u64, ScryError> = value.try_into();
    assert_eq!(result.unwrap(), 123456789);
}

#[test]
fn test_usize_conversion() {
    let value = Value::Number(1000.0);
    let result: Result<usize, ScryError> = value.try_into();
    assert_eq!(result.unwrap(), 1000);

    let negative: Result<usize, ScryError> = Value::Number(-1.0).try_into();
    assert!(negative.is_err());
}

// ===== Boolean Conversion Tests =====

#[test]
fn test_bool_conversion() {
    let result: Result<bool, ScryError> = Value::Bool(true).try_into();
    assert_eq!(result.unwrap(), true);

    let result: Result<bool, ScryError> = Value::Bool(false).try_into();
    assert_eq!(result.unwrap(), false);
}

#[test]
fn test_bool_conversion_from_quoted_literal() {
    let value = Value::String("true".to_string());
    let result: Result<bool, ScryError> = value.try_into();
    match result {
        Err(ScryError::TypeError { message, .. }) => assert!(message.contains("\"true\"")),
        other => panic!("Expected type error, got {:?}", other),
    }
}

#[test]
fn test_bool_conversion_error() {
    let value = Value::String("yes".to_string());
    let result: Result<bool, ScryError> = value.try_into();
    assert!(result.is_err());
}

// ===== Array/Vec Conversion Tests =====

#[test]
fn test_vec_string_conversion() {
    let value = Value::Array(vec![
        Value::String("one".to_string()),
        Value::String("two".to_string()),
    ]);

    let result: Result<Vec<String>, ScryError> = value.try_into();
    assert_eq!(result.unwrap(), vec!["one", "two"]);
}

#[test]
fn test_vec_mixed_types_error() {
    let value = Value::Array(vec![Value::String("one".to_string()), Value::Number(2.0)]);
    let result: Result<Vec<String>, ScryError> = value.try_into();
    assert!(result.is_err());
}

#[test]
fn test_empty_vec_conversion() {
    let value = Value::Array(vec![]);
    let result: Result<Vec<String>, ScryError> = value.try_into();
    assert_eq!(result.unwrap(), Vec::<String>::new());
}

// ===== Option Conversion Tests =====

#[test]
fn test_option_none_conversion() {
    let value = Value::Null;
    let result: Result<Option<String>, ScryError> = value.try_into();
    assert_eq!(result.unwrap(), None);
}

#[test]
fn test_option_some_conversion() {
    let value = Value::Number(42.0);
    let result: Result<Option<i32>, ScryError> = value.try_into();
    assert_eq!(result.unwrap(), Some(42));
}

// ===== Map Conversion Tests =====

#[test]
fn test_indexmap_conversion_preserves_order() {
    let doc = ScryDocument::from_str(r#"{"z": 1, "a": 2}"#).expect("Failed to parse document");
    let map: IndexMap<String, Value> = doc.get("$").expect("Failed to get root object");
    let keys: Vec<&String> = map.keys().collect();
    assert_eq!(keys, vec!["z", "a"]);
}

#[test]
fn test_hashmap_string_conversion() {
    let mut entries = IndexMap::new();
    entries.insert("name".to_string(), Value::String("Alice".to_string()));
    entries.insert("city".to_string(), Value::String("NYC".to_string()));

    let result: Result<HashMap<String, String>, ScryError> = Value::Object(entries).try_into();
    let map = result.unwrap();
    assert_eq!(map.get("name"), Some(&"Alice".to_string()));
    assert_eq!(map.get("city"), Some(&"NYC".to_string()));
}

#[test]
fn test_hashmap_string_conversion_error() {
    let mut entries = IndexMap::new();
    entries.insert("name".to_string(), Value::String("Alice".to_string()));
    entries.insert("age".to_string(), Value::Number(30.0));

    let result: Result<HashMap<String, String>, ScryError> = Value::Object(entries).try_into();
    assert!(result.is_err());
}

#[test]
fn test_hashmap_value_conversion() {
    let mut entries = IndexMap::new();
    entries.insert("host".to_string(), Value::String("localhost".to_string()));
    entries.insert("port".to_string(), Value::Number(8080.0));

    let result: Result<HashMap<String, Value>, ScryError> = Value::Object(entries).try_into();
    let map = result.unwrap();
    assert_eq!(map.get("host"), Some(&Value::String("localhost".to_string())));
    assert_eq!(map.get("port"), Some(&Value::Number(8080.0)));

    let result: Result<HashMap<String, Value>, ScryError> = Value::Number(1.0).try_into();
    assert!(result.is_err());
}

// ===== Tuple Conversion Tests =====

#[test]
fn test_tuple_string_string_conversion() {
    let value = Value::Array(vec![
        Value::String("key".to_string()),
        Value::String("value".to_string()),
    ]);

    let result: Result<(String, String), ScryError> = value.try_into();
    assert_eq!(result.unwrap(), ("key".to_string(), "value".to_string()));
}

#[test]
fn test_tuple_string_value_conversion() {
    let value = Value::Array(vec![Value::String("port".to_string()), Value::Number(42.0)]);

    let result: Result<(String, Value), ScryError> = value.try_into();
    let (key, val) = result.unwrap();
    assert_eq!(key, "port");
    assert_eq!(val, Value::Number(42.0));
}

#[test]
fn test_tuple_wrong_length_error() {
    let value = Value::Array(vec![Value::String("only_one".to_string())]);
    let result: Result<(String, String), ScryError> = value.try_into();
    assert!(result.is_err());
}
