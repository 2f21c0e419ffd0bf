//! Unit tests for error panel projection

use candlegate::models::ManualDataInput;
use candlegate::presenter::{present, ErrorPanel, BULLET};
use candlegate::validation::{validate, ValidationError};

#[test]
fn test_empty_list_yields_hidden_sentinel() {
    assert_eq!(present(&[]), ErrorPanel::Hidden);
}

#[test]
fn test_each_error_becomes_one_ordered_item() {
    let errors = vec![
        ValidationError::MissingField { field: "open" },
        ValidationError::OutOfRange {
            field: "volume",
            value: -10.0,
            min: 0.0,
        },
        ValidationError::InvalidTimestamp {
            date: "2024-02-30".to_string(),
            time: "09:30".to_string(),
        },
    ];
    let panel = present(&errors);
    match &panel {
        ErrorPanel::Visible { items } => {
            assert_eq!(items.len(), 3);
            for (position, item) in items.iter().enumerate() {
                assert_eq!(item.index, position);
                assert_eq!(item.text, errors[position].to_string());
            }
        }
        ErrorPanel::Hidden => panic!("expected a visible panel"),
    }
}

#[test]
fn test_duplicate_messages_are_preserved() {
    let errors = vec![
        ValidationError::MissingField { field: "open" },
        ValidationError::MissingField { field: "open" },
    ];
    match present(&errors) {
        ErrorPanel::Visible { items } => {
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].text, items[1].text);
        }
        ErrorPanel::Hidden => panic!("expected a visible panel"),
    }
}

#[test]
fn test_lines_are_bullet_prefixed() {
    let errors = vec![ValidationError::MissingField { field: "date" }];
    let lines = present(&errors).lines();
    assert_eq!(lines, vec![format!("{BULLET} date is required")]);
}

#[test]
fn test_scenario_two_violations_render_two_items() {
    let input = ManualDataInput::new()
        .with_open("")
        .with_high("110")
        .with_low("95")
        .with_close("105")
        .with_volume("-10")
        .with_date("2024-01-15")
        .with_time("09:30");
    let panel = present(&validate(&input));
    assert_eq!(panel.lines().len(), 2);
}

#[test]
fn test_scenario_valid_input_renders_nothing() {
    let input = ManualDataInput::new()
        .with_open("100")
        .with_high("110")
        .with_low("95")
        .with_close("105")
        .with_volume("500")
        .with_date("2024-01-15")
        .with_time("09:30");
    let panel = present(&validate(&input));
    assert!(panel.is_hidden());
    assert!(panel.lines().is_empty());
}

#[test]
fn test_panel_serializes_with_tag() {
    let errors = vec![ValidationError::MissingField { field: "open" }];
    let json = serde_json::to_value(present(&errors)).unwrap();
    assert_eq!(json["panel"], "visible");
    assert_eq!(json["items"][0]["index"], 0);
    assert_eq!(json["items"][0]["text"], "open is required");

    let hidden = serde_json::to_value(ErrorPanel::Hidden).unwrap();
    assert_eq!(hidden["panel"], "hidden");
}
