use crate::e2e::helpers::{list_dir, mock_audio_bytes, TestContext};

use httpmock::prelude::*;
use serde_json::json;
use text_to_speech::domain::tts::{LanguageCode, ProviderError, ProviderSelection};
use text_to_speech::error::AppError;
use text_to_speech::infrastructure::config::Config;

const VOICE_PATH: &str = "/v1/text-to-speech/uvysWDLbKpA4XvpD3GI6";

fn elevenlabs_config(ctx: &TestContext, server: &MockServer) -> Config {
    Config {
        elevenlabs_tts_url: server.url("/v1/text-to-speech"),
        ..ctx.config()
    }
}

#[tokio::test]
async fn it_should_write_raw_response_bytes() {
    let ctx = TestContext::new();
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(VOICE_PATH)
                .header("xi-api-key", "test-key")
                .json_body(json!({
                    "text": "Bonjour",
                    "voice_settings": { "stability": 0.5, "similarity_boost": 0.7 },
                    "model_id": "eleven_multilingual_v2"
                }));
            then.status(200)
                .header("content-type", "audio/mpeg")
                .body(mock_audio_bytes());
        })
        .await;

    let output = ctx.output("bonjour.mp3");
    ctx.service(elevenlabs_config(&ctx, &server))
        .synthesize_to_file(
            "Bonjour",
            &output,
            LanguageCode::French,
            &ProviderSelection::elevenlabs("test-key"),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    // Bytes are written as-is, no base64 involved
    assert_eq!(std::fs::read(&output).unwrap(), mock_audio_bytes());
}

#[tokio::test]
async fn it_should_fail_with_exit_status_one_on_non_200() {
    let ctx = TestContext::new();
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(VOICE_PATH);
            then.status(401)
                .header("content-type", "application/json")
                .body(r#"{"detail": {"status": "invalid_api_key"}}"#);
        })
        .await;

    let output = ctx.output("hallo.mp3");
    let err = ctx
        .service(elevenlabs_config(&ctx, &server))
        .synthesize_to_file(
            "Hallo",
            &output,
            LanguageCode::German,
            &ProviderSelection::elevenlabs("bad-key"),
        )
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.exit_code(), 1);
    match &err {
        AppError::Provider(ProviderError::Status { status, body, .. }) => {
            assert_eq!(*status, 401);
            assert!(body.contains("invalid_api_key"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
    assert!(err.to_string().contains("401"));
    assert!(!output.exists());
    assert!(list_dir(ctx.out_dir.path()).is_empty());
}

#[tokio::test]
async fn it_should_treat_other_success_codes_as_failure() {
    let ctx = TestContext::new();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(VOICE_PATH);
            then.status(202).body("queued");
        })
        .await;

    let err = ctx
        .service(elevenlabs_config(&ctx, &server))
        .synthesize_to_file(
            "Hallo",
            ctx.output("hallo.mp3"),
            LanguageCode::German,
            &ProviderSelection::elevenlabs("test-key"),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Provider(ProviderError::Status { status: 202, .. })
    ));
    assert!(list_dir(ctx.out_dir.path()).is_empty());
}
