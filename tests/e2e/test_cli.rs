use crate::e2e::helpers::{list_dir, TestContext};

use httpmock::prelude::*;
use serial_test::serial;
use std::path::Path;
use std::process::{Command, Output};

/// Run the binary from inside `dir` so no stray `.env` is picked up
fn run_cli(dir: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_text-to-speech"))
        .current_dir(dir)
        .args(args)
        .envs(envs.iter().copied())
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to run text-to-speech")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
#[serial]
fn it_should_exit_2_without_provider() {
    let ctx = TestContext::new();
    let output = run_cli(ctx.out_dir.path(), &["-t", "Hallo", "-o", "out.mp3"], &[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("ERROR: You have to provide one of the arguments"));
    // Help follows the error
    assert!(String::from_utf8_lossy(&output.stdout).contains("--use-elevenlabs-key"));
    assert!(list_dir(ctx.out_dir.path()).is_empty());
}

#[test]
#[serial]
fn it_should_exit_2_for_unsupported_language() {
    let ctx = TestContext::new();
    let output = run_cli(
        ctx.out_dir.path(),
        &["-t", "Ahoj", "-o", "out.mp3", "--lang", "cz", "--use-amazon"],
        &[],
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("not supported"));
}

#[test]
#[serial]
fn it_should_exit_2_for_malformed_arguments() {
    let ctx = TestContext::new();
    let output = run_cli(
        ctx.out_dir.path(),
        &["-t", "Hallo", "-o", "out.mp3", "--lang", "klingon", "--use-say"],
        &[],
    );

    assert_eq!(output.status.code(), Some(2));
}

#[test]
#[serial]
fn it_should_exit_1_when_output_exists() {
    let ctx = TestContext::new();
    std::fs::write(ctx.output("out.mp3"), b"keep me").unwrap();

    let output = run_cli(
        ctx.out_dir.path(),
        &["-t", "Hallo", "-o", "out.mp3", "--use-say"],
        &[("TTS_SAY_BIN", "/nonexistent/say")],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Output file already exists"));
    assert_eq!(std::fs::read(ctx.output("out.mp3")).unwrap(), b"keep me");
}

#[test]
#[serial]
fn it_should_exit_1_when_elevenlabs_rejects_the_request() {
    let ctx = TestContext::new();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/text-to-speech/uvysWDLbKpA4XvpD3GI6")
            .header("xi-api-key", "bad-key");
        then.status(401).body("invalid api key");
    });
    let base_url = server.url("/v1/text-to-speech");

    let output = run_cli(
        ctx.out_dir.path(),
        &["-t", "Hallo", "-o", "out.mp3", "--use-elevenlabs-key", "bad-key"],
        &[("TTS_ELEVENLABS_URL", base_url.as_str())],
    );

    mock.assert();
    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr(&output);
    assert!(stderr.contains("401"), "stderr: {}", stderr);
    assert!(stderr.contains("invalid api key"), "stderr: {}", stderr);
    assert!(list_dir(ctx.out_dir.path()).is_empty());
}

#[test]
#[serial]
fn it_should_exit_0_and_write_google_audio() {
    let ctx = TestContext::new();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/v1/text:synthesize")
            .query_param("key", "test-key");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"audioContent": "SGVsbG8="}"#);
    });
    let url = server.url("/v1/text:synthesize");

    let output = run_cli(
        ctx.out_dir.path(),
        &["-t", "Hello", "-o", "hello.mp3", "--lang", "en", "--use-google-key", "test-key"],
        &[("TTS_GOOGLE_URL", url.as_str())],
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(std::fs::read(ctx.output("hello.mp3")).unwrap(), b"Hello");
}

#[cfg(unix)]
#[test]
#[serial]
fn it_should_exit_130_and_clean_up_on_sigint() {
    use crate::e2e::helpers::fake_tools;
    use std::process::Stdio;
    use std::time::{Duration, Instant};

    let ctx = TestContext::new();
    let say = fake_tools::slow_say(ctx.bin_dir.path());
    let ffmpeg = fake_tools::ffmpeg(ctx.bin_dir.path());

    let mut child = Command::new(env!("CARGO_BIN_EXE_text-to-speech"))
        .current_dir(ctx.out_dir.path())
        .args(["-t", "Hallo", "-o", "out.mp3", "--use-say"])
        .env("RUST_LOG", "off")
        .env("TTS_SAY_BIN", &say.bin)
        .env("TTS_FFMPEG_BIN", &ffmpeg.bin)
        .env("TTS_SCRATCH_DIR", ctx.scratch_dir.path())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to run text-to-speech");

    // Wait until the fake say is hanging on its intermediate file
    let deadline = Instant::now() + Duration::from_secs(10);
    while list_dir(ctx.scratch_dir.path()).is_empty() {
        assert!(Instant::now() < deadline, "say never started");
        std::thread::sleep(Duration::from_millis(50));
    }
    assert!(list_dir(ctx.out_dir.path())
        .iter()
        .any(|name| name.starts_with(".tts-")));

    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("Failed to run kill");
    assert!(status.success());

    let status = child.wait().expect("Failed to wait for text-to-speech");
    assert_eq!(status.code(), Some(130));
    assert!(list_dir(ctx.out_dir.path()).is_empty());
    assert!(list_dir(ctx.scratch_dir.path()).is_empty());
}
