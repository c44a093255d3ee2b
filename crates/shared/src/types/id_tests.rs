use super::*;
use std::str::FromStr;

#[test]
fn test_typed_id_new() {
    let id = ClientId::new("client-001");
    assert_eq!(id.as_str(), "client-001");
}

#[test]
fn test_typed_id_into_inner() {
    let id = DocumentId::new("doc-42");
    assert_eq!(id.into_inner(), "doc-42".to_string());
}

#[test]
fn test_typed_id_display() {
    let id = UserId::new("u-7");
    assert_eq!(format!("{id}"), "u-7");
}

#[test]
fn test_typed_id_from_str_trims() {
    let id = ClientId::from_str("  abc  ").unwrap();
    assert_eq!(id.as_str(), "abc");
}

#[test]
fn test_typed_id_from_str_error() {
    assert_eq!(ClientId::from_str("   "), Err(EmptyIdError));
    assert_eq!(ClientId::from_str(""), Err(EmptyIdError));
}

#[test]
fn test_typed_id_serde_transparent() {
    let id = ClientId::new("c1");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"c1\"");
    let back: ClientId = serde_json::from_str("\"c1\"").unwrap();
    assert_eq!(back, id);
}
