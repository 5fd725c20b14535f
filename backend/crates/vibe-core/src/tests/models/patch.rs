use crate::Patch;

use serde::Deserialize;

#[derive(Deserialize)]
struct Holder {
    #[serde(default)]
    value: Patch<String>,
}

#[test]
fn test_missing_key_is_absent() {
    let holder: Holder = serde_json::from_str("{}").unwrap();
    assert_eq!(holder.value, Patch::Absent);
}

#[test]
fn test_null_is_null() {
    let holder: Holder = serde_json::from_str(r#"{"value": null}"#).unwrap();
    assert_eq!(holder.value, Patch::Null);
}

#[test]
fn test_value_is_value() {
    let holder: Holder = serde_json::from_str(r#"{"value": "x"}"#).unwrap();
    assert_eq!(holder.value, Patch::Value("x".to_string()));
}

#[test]
fn test_apply_to() {
    let mut target = Some("old".to_string());

    Patch::<String>::Absent.apply_to(&mut target);
    assert_eq!(target.as_deref(), Some("old"));

    Patch::Value("new".to_string()).apply_to(&mut target);
    assert_eq!(target.as_deref(), Some("new"));

    Patch::<String>::Null.apply_to(&mut target);
    assert_eq!(target, None);
}
