//! Integration tests for end-to-end query parameter construction

use sunstone::prelude::*;

fn blog_schema() -> Schema {
    let mut schema = Schema::new();
    schema.add_text_field("title").unwrap();
    schema.add_text_field("body").unwrap();
    // One logical name with stemmed and unstemmed indexed variants.
    schema.add_field("tags", "tags_text", FieldKind::Text).unwrap();
    schema.add_field("tags", "tags_texts", FieldKind::Text).unwrap();
    schema
        .add_field("published", "published_b", FieldKind::Boolean)
        .unwrap();
    schema
}

#[test]
fn test_filter_only_request() {
    let schema = blog_schema();

    // Test 1: single restricted type
    let query = QueryBuilder::new(["Post"], &schema);
    let params = query.to_params();
    assert_eq!(params.get("q").map(String::as_str), Some("type:Post"));
    assert_eq!(params.len(), 1, "No dismax keys without keywords");

    // Test 2: several types keep their order
    let query = QueryBuilder::new(["Post", "Comment", "Page"], &schema);
    let params = query.to_params();
    assert_eq!(
        params.get("q").map(String::as_str),
        Some("type:(Post OR Comment OR Page)")
    );

    // Test 3: open query falls back to the tautological phrase
    let query = QueryBuilder::new(Vec::<String>::new(), &schema);
    let params = query.to_params();
    assert_eq!(params.get("q").map(String::as_str), Some("type:[* TO *]"));
}

#[test]
fn test_keyword_request_full_shape() -> Result<()> {
    let schema = blog_schema();
    let mut query = QueryBuilder::new(["Post", "Comment"], &schema);
    query.set_keywords("pest control");
    query.add_fulltext_field("title", Some(2.0))?;
    query.add_fulltext_field("tags", None)?;
    query.add_phrase_field("body", Some(3.0))?;

    assert_eq!(query.mode(), QueryMode::RankedFulltext);

    let params = query.to_params();
    assert_eq!(params.get("q").map(String::as_str), Some("pest control"));
    assert_eq!(params.get("fl").map(String::as_str), Some("* score"));
    assert_eq!(
        params.get("fq").map(String::as_str),
        Some("type:(Post OR Comment)")
    );
    assert_eq!(params.get("defType").map(String::as_str), Some("dismax"));
    // The logical "tags" name expands to both indexed variants.
    assert_eq!(
        params.get("qf").map(String::as_str),
        Some("title_text^2.0 tags_text tags_texts")
    );
    assert_eq!(params.get("pf").map(String::as_str), Some("body_text^3.0"));

    Ok(())
}

#[test]
fn test_default_field_selection() {
    let schema = blog_schema();
    let mut query = QueryBuilder::new(["Post"], &schema);
    query.set_keywords("rust");

    let params = query.to_params();
    assert_eq!(
        params.get("qf").map(String::as_str),
        Some("title_text body_text tags_text tags_texts"),
        "Default qf is every text field, registration order, no boosts"
    );
    assert!(!params.contains_key("pf"));
}

#[test]
fn test_namespaced_types_are_escaped() {
    let schema = blog_schema();
    let mut query = QueryBuilder::new(["Blog::Post", "Blog::Comment"], &schema);
    query.set_keywords("rust");

    let params = query.to_params();
    let fq = params.get("fq").unwrap();
    assert_eq!(fq, "type:(Blog\\:\\:Post OR Blog\\:\\:Comment)");
    assert!(
        !fq.contains("Blog::Post"),
        "Unescaped type names must never reach the backend"
    );
}

#[test]
fn test_repeated_builds_are_stable() -> Result<()> {
    let schema = blog_schema();
    let mut query = QueryBuilder::new(["Post"], &schema);
    query.set_keywords("rust");
    query.add_fulltext_field("title", Some(1.5))?;

    let first = query.to_params();
    let second = query.to_params();
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_params_serialize_for_transport() -> Result<()> {
    let schema = blog_schema();
    let mut query = QueryBuilder::new(["Post"], &schema);
    query.set_keywords("rust");
    query.add_phrase_field("title", None)?;

    // The transport layer form-encodes the map; it must serialize as a
    // flat string-to-string object.
    let encoded = serde_json::to_value(query.to_params()).unwrap();
    let object = encoded.as_object().unwrap();
    assert_eq!(object.len(), 6);
    assert_eq!(object["defType"], "dismax");
    assert!(object.values().all(|v| v.is_string()));

    Ok(())
}

#[test]
fn test_unknown_field_surfaces_schema_error() {
    let schema = blog_schema();
    let mut query = QueryBuilder::new(["Post"], &schema);

    let err = query.add_fulltext_field("nonexistent", Some(2.0)).unwrap_err();
    assert_eq!(err.to_string(), "Unknown field: nonexistent");

    let err = query.add_phrase_field("published", None).unwrap_err();
    assert!(err.to_string().contains("not a text field"));
}
