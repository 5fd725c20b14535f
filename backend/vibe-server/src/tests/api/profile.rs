use crate::ApiError;
use crate::api::profile::profile::parse_reported_song;

#[test]
fn test_empty_body_means_poll_provider() {
    assert!(parse_reported_song(b"").unwrap().is_none());
    assert!(parse_reported_song(b"  \n").unwrap().is_none());
}

#[test]
fn test_null_body_means_poll_provider() {
    assert!(parse_reported_song(b"null").unwrap().is_none());
}

#[test]
fn test_track_document_is_parsed() {
    let song = parse_reported_song(br#"{"track":"Song","artist":"Band","duration":215000}"#)
        .unwrap()
        .unwrap();

    assert_eq!(song.track, "Song");
    assert_eq!(song.artist, "Band");
    assert_eq!(song.duration, 215_000);
    assert_eq!(song.descriptor(), "Song - Band");
}

#[test]
fn test_malformed_body_is_validation_error() {
    let result = parse_reported_song(b"not-json");

    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[test]
fn test_wrong_field_type_is_validation_error() {
    let result = parse_reported_song(br#"{"track": 5}"#);

    assert!(matches!(result, Err(ApiError::Validation { .. })));
}
