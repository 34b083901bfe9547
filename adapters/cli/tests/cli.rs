use std::{
    fs,
    io::Write,
    process::{Command, Stdio},
};

use tempfile::TempDir;

fn stepgate() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_stepgate"));
    let _ = command.env("RUST_LOG", "off");
    command
}

fn generate_json(args: &[&str]) -> serde_json::Value {
    let output = stepgate()
        .arg("generate")
        .args(args)
        .output()
        .expect("failed to invoke stepgate generate");
    assert!(output.status.success(), "stepgate generate should succeed");
    serde_json::from_slice(&output.stdout).expect("generate prints JSON")
}

#[test]
fn generate_prints_sequence_json() {
    let value = generate_json(&["--preset", "30s", "--fingerprint", "fp", "--short-id", "sid"]);
    let metadata = &value["metadata"];
    assert_eq!(metadata["targetTime"], 30);
    let steps = metadata["stepCount"].as_u64().expect("step count");
    assert!((1..=2).contains(&steps));
    assert_eq!(value["sequence"].as_array().map(Vec::len), Some(steps as usize));
    assert!(value.get("expiresInSeconds").is_none());
}

#[test]
fn seed_replay_is_deterministic() {
    let args = ["--preset", "1min", "--seed", "00000000", "--expiry", "1d"];
    let first = generate_json(&args);
    let second = generate_json(&args);
    assert_eq!(first, second);
    assert_eq!(first["metadata"]["stepCount"], 3);
    assert_eq!(first["metadata"]["actualTime"], 76.0);
    assert_eq!(first["expiresInSeconds"], 86_400);
}

#[test]
fn unknown_expiry_is_rejected() {
    let status = stepgate()
        .args(["generate", "--expiry", "2w"])
        .status()
        .expect("failed to invoke stepgate generate");
    assert!(!status.success());
}

#[test]
fn render_wraps_stdin_block() {
    let mut child = stepgate()
        .args(["render", "--page", "fake_download"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn stepgate render");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(b"<div class=\"block\">wait</div>\n")
        .expect("write block");
    let output = child.wait_with_output().expect("render output");

    assert!(output.status.success());
    let html = String::from_utf8(output.stdout).expect("utf-8 page");
    assert!(html.contains("Preparing your download..."));
    assert!(html.contains("<div class=\"block\">wait</div>"));
    assert!(!html.contains("{{BLOCK_CONTENT}}"));
}

#[test]
fn render_reads_block_file_verbatim() {
    let dir = TempDir::new().expect("temp dir");
    let block_path = dir.path().join("block.html");
    fs::write(&block_path, "<p>hold on</p>\n\n").expect("write block");

    let output = stepgate()
        .arg("render")
        .arg("--block")
        .arg(&block_path)
        .output()
        .expect("failed to invoke stepgate render");
    assert!(output.status.success());
    let html = String::from_utf8(output.stdout).expect("utf-8 page");
    assert!(html.contains("<p>hold on</p>\n\n"));
    assert!(!html.contains("{{BLOCK_CONTENT}}"));

    let bare = stepgate()
        .args(["render", "--page", "missing"])
        .arg("--block")
        .arg(&block_path)
        .output()
        .expect("failed to invoke stepgate render");
    assert!(bare.status.success());
    assert_eq!(bare.stdout, b"<p>hold on</p>\n\n");
}

#[test]
fn config_file_switches_weighting_mode() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = dir.path().join("stepgate.toml");
    fs::write(&config_path, "[generation]\nweighting = \"recompute-per-step\"\n")
        .expect("write config");
    let args = ["--preset", "1min", "--steps", "2", "--seed", "5384540f"];

    let output = stepgate()
        .arg("--config")
        .arg(&config_path)
        .arg("generate")
        .args(args)
        .output()
        .expect("failed to invoke stepgate generate");
    assert!(output.status.success());
    let rescored: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("generate prints JSON");
    let fixed = generate_json(&args);

    assert_eq!(rescored["sequence"][1]["subtype"], "click_then_timer");
    assert_eq!(rescored["metadata"]["actualTime"], 41.0);
    assert_eq!(fixed["sequence"][1]["subtype"], "click_drain");
    assert_eq!(fixed["metadata"]["actualTime"], 13.0);
}

#[test]
fn invalid_config_file_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = dir.path().join("stepgate.toml");
    fs::write(&config_path, "[rendering]\npage = \"x\"\n").expect("write config");

    let status = stepgate()
        .arg("--config")
        .arg(&config_path)
        .args(["generate", "--seed", "00000000"])
        .status()
        .expect("failed to invoke stepgate generate");
    assert!(!status.success());
}
