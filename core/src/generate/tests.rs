//! Tests for prompt construction and response validation.

use std::path::Path;

use chronolens_types::TravelKind;

use super::{
    GenerateError, GeneratedImage, ImagePayload, TransformKind, encode_photo, landmark_prompt,
    photo_mime_type,
};

#[test]
fn past_prompt_carries_the_era_qualifier() {
    let prompt = landmark_prompt("Colosseum", 1400, TravelKind::Past);
    assert!(prompt.starts_with("Colosseum in the year 1400, ancient period"));
    assert!(prompt.contains("historically accurate"));

    let prompt = landmark_prompt("Eiffel Tower", 1900, TravelKind::Past);
    assert!(prompt.contains("vintage period"));
}

#[test]
fn future_prompt_carries_the_era_qualifier() {
    let prompt = landmark_prompt("Burj Khalifa", 2300, TravelKind::Future);
    assert!(prompt.starts_with("Burj Khalifa in the year 2300, far future"));
    assert!(prompt.contains("photorealistic sci-fi style"));

    let prompt = landmark_prompt("Taj Mahal", 2040, TravelKind::Future);
    assert!(prompt.contains("near future"));
}

#[test]
fn response_payload_parses_from_camel_case() {
    let json = r#"{"image": {"base64Data": "QUJD", "mimeType": "image/png"}}"#;
    let response: super::ImageResponse = serde_json::from_str(json).unwrap();
    let image: GeneratedImage = response.image.try_into().unwrap();

    assert_eq!(image.mime_type, "image/png");
    assert_eq!(image.base64_data, "QUJD");
}

#[test]
fn empty_payload_fields_are_rejected() {
    let payload = ImagePayload {
        base64_data: String::new(),
        mime_type: "image/png".to_string(),
    };
    let result: Result<GeneratedImage, _> = payload.try_into();
    assert!(matches!(result, Err(GenerateError::MalformedResponse { .. })));

    let payload = ImagePayload {
        base64_data: "QUJD".to_string(),
        mime_type: String::new(),
    };
    let result: Result<GeneratedImage, _> = payload.try_into();
    assert!(matches!(result, Err(GenerateError::MalformedResponse { .. })));
}

#[test]
fn missing_payload_fields_deserialize_to_empty_and_fail_validation() {
    // The service omitting a field entirely must not panic the decoder; it
    // lands in the same typed-failure path as an empty string.
    let json = r#"{"image": {"mimeType": "image/png"}}"#;
    let response: super::ImageResponse = serde_json::from_str(json).unwrap();
    let result: Result<GeneratedImage, _> = response.image.try_into();
    assert!(matches!(result, Err(GenerateError::MalformedResponse { .. })));
}

#[test]
fn data_uri_has_the_inline_shape() {
    let image = GeneratedImage {
        mime_type: "image/jpeg".to_string(),
        base64_data: "QUJDREVG".to_string(),
    };
    assert_eq!(image.data_uri(), "data:image/jpeg;base64,QUJDREVG");
}

#[test]
fn photo_encoding_is_standard_base64() {
    assert_eq!(encode_photo(b"ABC"), "QUJD");
}

#[test]
fn photo_mime_type_sniffs_extension() {
    assert_eq!(photo_mime_type(Path::new("me.png")), "image/png");
    assert_eq!(photo_mime_type(Path::new("me.PNG")), "image/png");
    assert_eq!(photo_mime_type(Path::new("me.jpg")), "image/jpeg");
    assert_eq!(photo_mime_type(Path::new("me.jpeg")), "image/jpeg");
    assert_eq!(photo_mime_type(Path::new("me")), "image/jpeg");
}

#[test]
fn every_transform_has_a_distinct_prompt() {
    let prompts: Vec<&str> = TransformKind::all().iter().map(|t| t.prompt()).collect();
    assert_eq!(prompts.len(), 4);
    for (i, a) in prompts.iter().enumerate() {
        for b in prompts.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
    assert!(TransformKind::Child.prompt().contains("child"));
    assert!(TransformKind::Elderly.prompt().contains("elderly"));
}
