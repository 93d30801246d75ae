use serde_json::json;
use termnotes_core::{Note, NoteSummary};

fn groceries() -> Note {
    Note {
        id: 7,
        title: "Groceries".to_string(),
        description: "Milk, eggs".to_string(),
    }
}

#[test]
fn summary_keeps_id_and_title_only() {
    let note = groceries();

    let summary = note.summary();
    assert_eq!(
        summary,
        NoteSummary {
            id: 7,
            title: "Groceries".to_string(),
        }
    );
    assert_eq!(NoteSummary::from(note), summary);
}

#[test]
fn note_serialization_uses_plain_field_names() {
    let value = serde_json::to_value(groceries()).unwrap();
    assert_eq!(
        value,
        json!({"id": 7, "title": "Groceries", "description": "Milk, eggs"})
    );

    let summary = serde_json::to_value(groceries().summary()).unwrap();
    assert_eq!(summary, json!({"id": 7, "title": "Groceries"}));
}

#[test]
fn note_deserializes_from_wire_shape() {
    let note: Note =
        serde_json::from_str(r#"{"id":7,"title":"Groceries","description":"Milk, eggs"}"#)
            .unwrap();
    assert_eq!(note, groceries());
}
