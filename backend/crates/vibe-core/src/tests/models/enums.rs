use crate::{CoreError, DatingPreference, Gender};

use std::str::FromStr;

#[test]
fn test_gender_as_str() {
    assert_eq!(Gender::Man.as_str(), "Man");
    assert_eq!(Gender::Woman.as_str(), "Woman");
    assert_eq!(Gender::NonBinary.as_str(), "Non-binary");
}

#[test]
fn test_gender_from_str() {
    assert_eq!(Gender::from_str("Man").unwrap(), Gender::Man);
    assert_eq!(Gender::from_str("Non-binary").unwrap(), Gender::NonBinary);
    assert!(matches!(
        Gender::from_str("Alien"),
        Err(CoreError::InvalidGender { .. })
    ));
    // Literal values only
    assert!(Gender::from_str("man").is_err());
}

#[test]
fn test_gender_serde_uses_literal_values() {
    let json = serde_json::to_string(&Gender::NonBinary).unwrap();
    assert_eq!(json, r#""Non-binary""#);

    let parsed: Gender = serde_json::from_str(r#""Woman""#).unwrap();
    assert_eq!(parsed, Gender::Woman);

    assert!(serde_json::from_str::<Gender>(r#""NonBinary""#).is_err());
}

#[test]
fn test_dating_preference_from_str() {
    assert_eq!(DatingPreference::from_str("Men").unwrap(), DatingPreference::Men);
    assert_eq!(
        DatingPreference::from_str("Everyone").unwrap(),
        DatingPreference::Everyone
    );
    assert!(matches!(
        DatingPreference::from_str("Anyone"),
        Err(CoreError::InvalidDatingPreference { .. })
    ));
}

#[test]
fn test_error_field_names() {
    let gender_err = Gender::from_str("x").unwrap_err();
    let pref_err = DatingPreference::from_str("x").unwrap_err();

    assert_eq!(gender_err.field(), Some("gender"));
    assert_eq!(pref_err.field(), Some("dating_preference"));
}
