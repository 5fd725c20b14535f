use crate::{CoreError, DatingPreference, Gender, ProfileFields, ProfileUpdate, WorkProfile};

fn populated_fields() -> ProfileFields {
    ProfileFields {
        name: Some("Sam".to_string()),
        home_town: Some("Leeds".to_string()),
        gender: Some(Gender::Woman),
        work: Some(WorkProfile {
            company: Some("Acme".to_string()),
            role: Some("Engineer".to_string()),
        }),
        ..Default::default()
    }
}

#[test]
fn test_absent_fields_are_left_untouched() {
    let mut fields = populated_fields();
    let update: ProfileUpdate = serde_json::from_str(r#"{"zodiac": "Leo"}"#).unwrap();

    update.merge_into(&mut fields).unwrap();

    assert_eq!(fields.name.as_deref(), Some("Sam"));
    assert_eq!(fields.home_town.as_deref(), Some("Leeds"));
    assert_eq!(fields.zodiac.as_deref(), Some("Leo"));
    assert_eq!(fields.gender, Some(Gender::Woman));
}

#[test]
fn test_explicit_null_clears_field() {
    let mut fields = populated_fields();
    let update: ProfileUpdate =
        serde_json::from_str(r#"{"home_town": null, "work": null}"#).unwrap();

    update.merge_into(&mut fields).unwrap();

    assert_eq!(fields.home_town, None);
    assert_eq!(fields.work, None);
    assert_eq!(fields.name.as_deref(), Some("Sam"));
}

#[test]
fn test_enum_values_are_parsed() {
    let mut fields = ProfileFields::default();
    let update: ProfileUpdate = serde_json::from_str(
        r#"{"gender": "Non-binary", "dating_preference": "Everyone", "birthdayInUnix": 946684800}"#,
    )
    .unwrap();

    update.merge_into(&mut fields).unwrap();

    assert_eq!(fields.gender, Some(Gender::NonBinary));
    assert_eq!(fields.dating_preference, Some(DatingPreference::Everyone));
    assert_eq!(fields.birthday_unix, Some(946_684_800));
}

#[test]
fn test_invalid_gender_leaves_fields_untouched() {
    let original = populated_fields();
    let mut fields = original.clone();
    let update: ProfileUpdate =
        serde_json::from_str(r#"{"name": "Changed", "gender": "Alien"}"#).unwrap();

    let result = update.merge_into(&mut fields);

    assert!(matches!(result, Err(CoreError::InvalidGender { .. })));
    assert_eq!(fields, original);
}

#[test]
fn test_invalid_dating_preference_leaves_fields_untouched() {
    let original = populated_fields();
    let mut fields = original.clone();
    let update: ProfileUpdate =
        serde_json::from_str(r#"{"zodiac": "Leo", "dating_preference": "Robots"}"#).unwrap();

    let result = update.merge_into(&mut fields);

    assert!(matches!(
        result,
        Err(CoreError::InvalidDatingPreference { .. })
    ));
    assert_eq!(fields, original);
}

#[test]
fn test_collections_distinguish_missing_from_empty() {
    let omitted: ProfileUpdate = serde_json::from_str("{}").unwrap();
    let empty: ProfileUpdate = serde_json::from_str(r#"{"interests": []}"#).unwrap();
    let null: ProfileUpdate = serde_json::from_str(r#"{"interests": null}"#).unwrap();

    assert_eq!(omitted.interests, None);
    assert_eq!(empty.interests, Some(vec![]));
    assert_eq!(null.interests, None);
}
