use crate::errors::ModelError;
use crate::singer::{new_singer, parse_singer_id, validate_name, MAX_NAME_LEN};

#[test]
fn parses_plain_and_padded_ids() {
    assert_eq!(parse_singer_id(Some("6")).unwrap(), 6);
    assert_eq!(parse_singer_id(Some(" 42 ")).unwrap(), 42);
    assert_eq!(parse_singer_id(Some("-3")).unwrap(), -3);
}

#[test]
fn missing_id_is_a_validation_error() {
    assert!(matches!(parse_singer_id(None), Err(ModelError::Validation(_))));
    assert!(matches!(parse_singer_id(Some("  ")), Err(ModelError::Validation(_))));
}

#[test]
fn non_integer_id_is_rejected() {
    for raw in ["abc", "6.5", "6; DROP TABLE Singers", "99999999999999999999"] {
        let err = parse_singer_id(Some(raw)).unwrap_err();
        assert!(err.to_string().contains("must be an integer"), "{raw}: {err}");
    }
}

#[test]
fn blank_and_oversized_names_are_rejected() {
    assert!(validate_name("first_name", "Cat").is_ok());
    assert!(validate_name("first_name", "   ").is_err());
    assert!(validate_name("last_name", &"x".repeat(MAX_NAME_LEN)).is_ok());
    assert!(validate_name("last_name", &"x".repeat(MAX_NAME_LEN + 1)).is_err());
}

#[test]
fn name_length_counts_characters_not_bytes() {
    let name = "é".repeat(MAX_NAME_LEN);
    assert!(validate_name("first_name", &name).is_ok());
}

#[test]
fn new_singer_keeps_values_verbatim() {
    let s = new_singer(6, "Cat", "O'Meow").unwrap();
    assert_eq!(s.singer_id, 6);
    assert_eq!(s.first_name, "Cat");
    assert_eq!(s.last_name, "O'Meow");

    let err = new_singer(6, "Cat", "").unwrap_err();
    assert!(err.to_string().contains("last_name"));
}
