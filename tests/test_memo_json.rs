use anyhow::Result;
use memo_gallery::domain::{Memo, MemoFields};

#[test]
fn given_memo_when_serializing_to_json_then_contains_all_fields() -> Result<()> {
    // Arrange
    let memo = Memo {
        id: 42,
        title: "Test title".to_string(),
        description: "Test description".to_string(),
        tags: "tag1;tag2".to_string(),
        image: "https://example.com/a.png".to_string(),
    };

    // Act
    let json = serde_json::to_string_pretty(&memo)?;

    // Assert
    assert!(json.contains(r#""id": 42"#));
    assert!(json.contains(r#""title": "Test title""#));
    assert!(json.contains(r#""description": "Test description""#));
    assert!(json.contains(r#""tags": "tag1;tag2""#));
    assert!(json.contains(r#""image": "https://example.com/a.png""#));
    Ok(())
}

#[test]
fn given_fields_when_serializing_then_omits_id() -> Result<()> {
    // Arrange
    let fields = MemoFields {
        title: "T".to_string(),
        description: "D".to_string(),
        tags: String::new(),
        image: "I".to_string(),
    };

    // Act
    let value = serde_json::to_value(&fields)?;

    // Assert
    let object = value.as_object().expect("Should serialize to an object");
    assert_eq!(object.len(), 4);
    assert!(object.get("id").is_none());
    assert_eq!(object["tags"], "");
    Ok(())
}

#[test]
fn given_null_and_missing_fields_when_deserializing_then_uses_empty_defaults() -> Result<()> {
    // Arrange
    let json = r#"{"id": 7, "title": null, "tags": "a;b"}"#;

    // Act
    let memo: Memo = serde_json::from_str(json)?;

    // Assert
    assert_eq!(memo.id, 7);
    assert_eq!(memo.title, "");
    assert_eq!(memo.description, "");
    assert_eq!(memo.image, "");
    assert_eq!(memo.tag_list(), vec!["a", "b"]);
    Ok(())
}

#[test]
fn given_unknown_server_fields_when_deserializing_then_ignores_them() -> Result<()> {
    // Arrange
    let json = r#"{
        "id": 3,
        "title": "Ferris",
        "description": "crab",
        "tags": "",
        "image": "x.png",
        "created_at": "2021-03-01T10:00:00.000Z",
        "published_at": null
    }"#;

    // Act
    let memo: Memo = serde_json::from_str(json)?;

    // Assert
    assert_eq!(memo.title, "Ferris");
    assert!(memo.tag_list().is_empty());
    Ok(())
}

#[test]
fn given_memo_list_when_deserializing_then_keeps_server_order() -> Result<()> {
    // Arrange
    let json = r#"[{"id": 9, "title": "Nine"}, {"id": 2, "title": "Two"}]"#;

    // Act
    let memos: Vec<Memo> = serde_json::from_str(json)?;

    // Assert
    assert_eq!(memos.iter().map(|m| m.id).collect::<Vec<_>>(), vec![9, 2]);
    Ok(())
}
