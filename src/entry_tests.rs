use super::*;

#[test]
fn new_uses_presentation_defaults() {
    let entry = Entry::new(Some(-3.5));
    assert_eq!(entry.value(), Some(-3.5));
    assert_eq!(entry.label, None);
    assert_eq!(entry.value_label, None);
    assert_eq!(entry.color, Color::BLACK);
    assert!(entry.other_color.is_empty());
    assert_eq!(entry.text_color, Color::GRAY);
    assert!(entry.value_label_color.is_empty());
    assert_eq!(entry.max_value, None);
}

#[test]
fn builder_sets_attributes() {
    let entry = Entry::builder()
        .value(42.0)
        .label("Disk")
        .value_label("42 GB")
        .color(Color::new(0x26, 0x8b, 0xd2))
        .max_value(100.0)
        .build();

    assert_eq!(entry.value(), Some(42.0));
    assert_eq!(entry.label.as_deref(), Some("Disk"));
    assert_eq!(entry.value_label.as_deref(), Some("42 GB"));
    assert_eq!(entry.color, Color::new(0x26, 0x8b, 0xd2));
    assert_eq!(entry.resolved_max_value(), Some(100.0));
}

#[test]
fn presentation_fields_are_mutable() {
    let mut entry = Entry::new(None);
    entry.label = Some("late".to_string());
    entry.color = Color::WHITE;
    assert_eq!(entry.label.as_deref(), Some("late"));
    assert_eq!(entry.color, Color::WHITE);
    assert_eq!(entry.value(), None);
}

#[test]
fn with_value_keeps_presentation() {
    let entry = Entry::builder()
        .value(1.0)
        .label("cpu")
        .color(Color::new(1, 2, 3))
        .build();
    let updated = entry.with_value(Some(9.0));

    assert_eq!(updated.value(), Some(9.0));
    assert_eq!(updated.label, entry.label);
    assert_eq!(updated.color, entry.color);
    assert_eq!(entry.value(), Some(1.0));
}

#[test]
fn negative_max_value_is_unset() {
    let mut entry = Entry::new(Some(1.0));
    entry.max_value = Some(-1.0);
    assert_eq!(entry.resolved_max_value(), None);
    entry.max_value = Some(0.0);
    assert_eq!(entry.resolved_max_value(), Some(0.0));
}

#[test]
fn present_values_skips_missing() {
    let entries = vec![
        Entry::new(Some(1.0)),
        Entry::new(None),
        Entry::new(Some(-2.0)),
    ];
    let values: Vec<f32> = present_values(&entries).collect();
    assert_eq!(values, vec![1.0, -2.0]);
}

#[test]
fn deserializes_from_toml() {
    let entry: Entry = toml::from_str(
        r##"
value = 12.5
label = "Memory"
color = "#e74c3c"
max_value = 10.0
"##,
    )
    .unwrap();

    assert_eq!(entry.value(), Some(12.5));
    assert_eq!(entry.label.as_deref(), Some("Memory"));
    assert_eq!(entry.color, Color::new(0xe7, 0x4c, 0x3c));
    assert_eq!(entry.text_color, Color::GRAY);
    assert_eq!(entry.max_value, Some(10.0));
}

#[test]
fn deserialize_rejects_bad_color() {
    let result: Result<Entry, _> = toml::from_str(r#"color = "nope""#);
    assert!(result.is_err());
}
