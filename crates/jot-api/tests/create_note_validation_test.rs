//! Tests for create-note validation: content is required and must be
//! non-empty, and validation happens before any store call.

use jot_core::{Category, CreateNoteRequest, Error};

#[test]
fn test_empty_content_is_rejected() {
    // When create is called with empty or whitespace-only content it must:
    //
    // 1. Return HTTP 400 Bad Request
    // 2. Return an error message naming the constraint
    // 3. Validate BEFORE inserting into the database
    let empty_cases = vec![
        ("", "completely empty"),
        ("   ", "spaces only"),
        ("\n\t  ", "whitespace only"),
        ("\n\n", "newlines only"),
    ];

    for (content, description) in empty_cases {
        let req = CreateNoteRequest {
            title: None,
            content: content.to_string(),
            category: None,
        };
        let err = req.validate().unwrap_err();
        assert!(
            matches!(err, Error::InvalidInput(_)),
            "case '{}' should fail validation",
            description
        );
    }
}

#[test]
fn test_valid_content_passes() {
    let valid_cases = vec![
        ("Hello", "simple text"),
        ("# Title\n\nContent", "markdown"),
        ("  content  ", "content with surrounding whitespace"),
    ];

    for (content, description) in valid_cases {
        let req = CreateNoteRequest {
            title: None,
            content: content.to_string(),
            category: None,
        };
        assert!(
            req.validate().is_ok(),
            "case '{}' should pass validation",
            description
        );
    }
}

#[test]
fn test_error_message_names_the_constraint() {
    let req = CreateNoteRequest {
        title: None,
        content: String::new(),
        category: None,
    };
    let msg = req.validate().unwrap_err().to_string();

    assert!(
        msg.to_lowercase().contains("content"),
        "error message should mention 'content': {}",
        msg
    );
    assert!(
        msg.to_lowercase().contains("required"),
        "error message should explain the constraint: {}",
        msg
    );
}

#[test]
fn test_omitted_category_defaults_to_personal() {
    // POST {"content": "buy milk"} must come back with category "Personal"
    // and archived false; the default lives in one place, on the enum.
    let req = CreateNoteRequest {
        title: None,
        content: "buy milk".to_string(),
        category: None,
    };
    assert!(req.validate().is_ok());
    assert_eq!(req.category.unwrap_or_default(), Category::Personal);
}

#[test]
fn test_unknown_category_string_is_rejected() {
    // The API parses the category field before building the request, so an
    // unknown value is a 400 rather than a database CHECK violation.
    let err = "Chores".parse::<Category>().unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(err.to_string().contains("Chores"));
}
