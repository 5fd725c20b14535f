use crate::{DelegatedTokens, Gender, UserIdentity, UserProfile};

use chrono::Utc;

#[test]
fn test_profile_json_uses_wire_field_names() {
    let mut user = UserIdentity::new(
        "spotify:user:abc".to_string(),
        DelegatedTokens::new("a".to_string(), "r".to_string(), Utc::now()),
    );
    user.fields.gender = Some(Gender::NonBinary);
    user.fields.birthday_unix = Some(1);

    let json = serde_json::to_value(UserProfile::from_identity(&user)).unwrap();

    assert_eq!(json["id"], user.id.to_string());
    assert_eq!(json["gender"], "Non-binary");
    assert_eq!(json["birthdayInUnix"], 1);
    assert!(json["name"].is_null());
    assert!(json["work"].is_null());
    assert!(json["interests"].as_array().unwrap().is_empty());
    assert!(json["interest_rating"].as_object().unwrap().is_empty());
    // Provider credentials are never part of the profile
    assert!(json.get("access_token").is_none());
    assert!(json.get("spotify_uri").is_none());
}

#[test]
fn test_delegated_tokens_debug_is_redacted() {
    let tokens = DelegatedTokens::new("secret-a".to_string(), "secret-r".to_string(), Utc::now());

    let debug = format!("{:?}", tokens);

    assert!(!debug.contains("secret-a"));
    assert!(!debug.contains("secret-r"));
}

#[test]
fn test_delegated_tokens_expiry_is_strict() {
    let now = Utc::now();
    let tokens = DelegatedTokens::new("a".to_string(), "r".to_string(), now);

    assert!(!tokens.is_expired_at(now));
    assert!(tokens.is_expired_at(now + chrono::Duration::seconds(1)));
}
