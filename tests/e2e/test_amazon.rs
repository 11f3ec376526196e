#![cfg(unix)]

use crate::e2e::helpers::{fake_tools, list_dir, TestContext};

use pretty_assertions::assert_eq;
use serial_test::serial;
use text_to_speech::domain::tts::{LanguageCode, ProviderError, ProviderSelection};
use text_to_speech::error::AppError;
use text_to_speech::infrastructure::config::Config;

#[tokio::test]
#[serial]
async fn it_should_call_polly_with_escaped_ssml() {
    let ctx = TestContext::new();
    let aws = fake_tools::aws(ctx.bin_dir.path());
    let config = Config {
        aws_bin: aws.bin.clone(),
        ..ctx.config()
    };

    let output = ctx.output("rock.mp3");
    ctx.service(config)
        .synthesize_to_file(
            "Rock & Roll <live>",
            &output,
            LanguageCode::English,
            &ProviderSelection::amazon(),
        )
        .await
        .unwrap();

    let args = aws.args().unwrap();
    assert_eq!(
        &args[..10],
        &[
            "polly",
            "synthesize-speech",
            "--output-format",
            "mp3",
            "--voice-id",
            "Joanna",
            "--text-type",
            "ssml",
            "--text",
            r#"<speak><amazon:effect name="drc"><prosody rate="+10%">Rock &amp; Roll &lt;live&gt;</prosody></amazon:effect></speak>"#,
        ]
    );
    assert_eq!(std::fs::read(&output).unwrap(), b"ID3-POLLY");
    assert_eq!(list_dir(ctx.out_dir.path()), vec!["rock.mp3".to_string()]);
}

#[tokio::test]
#[serial]
async fn it_should_surface_cli_failures() {
    let ctx = TestContext::new();
    let aws = fake_tools::failing_aws(ctx.bin_dir.path());
    let config = Config {
        aws_bin: aws.bin.clone(),
        ..ctx.config()
    };

    let err = ctx
        .service(config)
        .synthesize_to_file(
            "Hallo",
            ctx.output("hallo.mp3"),
            LanguageCode::German,
            &ProviderSelection::amazon(),
        )
        .await
        .unwrap_err();

    match &err {
        AppError::Provider(ProviderError::Process { stderr, .. }) => {
            assert!(stderr.contains("Unable to locate credentials"));
        }
        other => panic!("expected process error, got {:?}", other),
    }
    assert!(err.to_string().contains("amazon-polly"));
    assert!(list_dir(ctx.out_dir.path()).is_empty());
}

#[tokio::test]
#[serial]
async fn it_should_not_run_the_cli_for_czech() {
    let ctx = TestContext::new();
    let aws = fake_tools::aws(ctx.bin_dir.path());
    let config = Config {
        aws_bin: aws.bin.clone(),
        ..ctx.config()
    };

    let err = ctx
        .service(config)
        .synthesize_to_file(
            "Ahoj",
            ctx.output("ahoj.mp3"),
            LanguageCode::Czech,
            &ProviderSelection::amazon(),
        )
        .await
        .unwrap_err();

    assert!(err.is_usage());
    assert!(!aws.was_called());
}
