use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

const EXAMPLE_DATA: &str = r#"[
  {"model": "GPT-4", "inputCost": 30, "outputCost": 60, "provider": "openai_chat"},
  {"model": "Claude", "inputCost": 15, "outputCost": 75, "provider": "anthropic_chat"}
]"#;

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write test file");
    path
}

fn pricetab_command(args: &[&str], home: &Path) -> Command {
    let bin = std::env::var("CARGO_BIN_EXE_pricetab").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("pricetab.exe");
        } else {
            path.push("pricetab");
        }
        path.to_string_lossy().into_owned()
    });
    let mut cmd = Command::new(bin);
    cmd.args(args)
        // Keep the user's config file and environment out of the run
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("PRICETAB_DATA")
        .env_remove("PRICETAB_LOG");
    cmd
}

fn run_pricetab(args: &[&str], home: &Path) -> (bool, Vec<u8>, Vec<u8>) {
    let output = pricetab_command(args, home)
        .output()
        .expect("run pricetab");
    (output.status.success(), output.stdout, output.stderr)
}

fn run_pricetab_with_stdin(args: &[&str], home: &Path, input: &str) -> (bool, Vec<u8>, Vec<u8>) {
    let mut child = pricetab_command(args, home)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn pricetab");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait pricetab");
    (output.status.success(), output.stdout, output.stderr)
}

fn models(json: &Value) -> Vec<&str> {
    json["rows"]
        .as_array()
        .expect("rows array")
        .iter()
        .map(|row| row["model"].as_str().expect("model"))
        .collect()
}

#[test]
fn show_sort_then_filter_json() {
    let dir = TempDir::new().unwrap();
    let data = write_file(dir.path(), "prices.json", EXAMPLE_DATA);
    let data = data.to_str().unwrap();

    let (ok, stdout, stderr) = run_pricetab(&["--data", data, "--sort", "input", "--json"], dir.path());
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let json: Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(models(&json), ["Claude", "GPT-4"]);
    assert_eq!(json["sort"]["key"], "inputCost");
    assert_eq!(json["sort"]["direction"], "asc");

    let (ok, stdout, _) = run_pricetab(
        &["show", "--data", data, "--sort", "input", "--filter", "gpt", "--json"],
        dir.path(),
    );
    assert!(ok);
    let json: Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(models(&json), ["GPT-4"]);
    assert_eq!(json["rows"][0]["providerName"], "openai");
    assert_eq!(json["rows"][0]["iconPath"], "/images/openai.svg");
    assert_eq!(json["total"], 2);
    assert_eq!(json["shown"], 1);
}

#[test]
fn repeated_sort_flag_toggles_descending() {
    let dir = TempDir::new().unwrap();
    let data = write_file(dir.path(), "prices.json", EXAMPLE_DATA);

    let (ok, stdout, _) = run_pricetab(
        &[
            "--data",
            data.to_str().unwrap(),
            "--sort",
            "output",
            "--sort",
            "output",
            "-j",
        ],
        dir.path(),
    );
    assert!(ok);
    let json: Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(models(&json), ["Claude", "GPT-4"]);
    assert_eq!(json["sort"]["direction"], "desc");
    assert_eq!(json["columns"][2]["indicator"], "descending");
    assert_eq!(json["columns"][0]["indicator"], "unsorted");
}

#[test]
fn data_path_from_environment() {
    let dir = TempDir::new().unwrap();
    let data = write_file(dir.path(), "prices.json", EXAMPLE_DATA);

    let output = pricetab_command(&["--json"], dir.path())
        .env("PRICETAB_DATA", &data)
        .output()
        .expect("run pricetab");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(models(&json), ["GPT-4", "Claude"]);
}

#[test]
fn bundled_dataset_loads_by_default() {
    let dir = TempDir::new().unwrap();
    let (ok, stdout, stderr) = run_pricetab(&["--json"], dir.path());
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let json: Value = serde_json::from_slice(&stdout).expect("json");
    assert!(json["total"].as_u64().unwrap_or(0) > 0);
    assert!(json["sort"].is_null());
}

#[test]
fn malformed_data_renders_empty_view_and_fails() {
    let dir = TempDir::new().unwrap();
    let data = write_file(
        dir.path(),
        "broken.json",
        r#"[{"model": "GPT-4", "inputCost": "thirty", "outputCost": 60, "provider": "openai"}]"#,
    );

    let (ok, stdout, stderr) = run_pricetab(&["--data", data.to_str().unwrap(), "--json"], dir.path());
    assert!(!ok);
    let json: Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(json["total"], 0);
    assert!(models(&json).is_empty());
    assert!(json["error"].as_str().unwrap_or("").contains("record #0"));
    assert!(String::from_utf8_lossy(&stderr).contains("Invalid record #0"));
}

#[test]
fn missing_data_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");
    let (ok, _, stderr) = run_pricetab(
        &["--data", missing.to_str().unwrap(), "--no-color", "--width", "200"],
        dir.path(),
    );
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("Failed to read"));
}

#[test]
fn invalid_sort_column_is_rejected() {
    let dir = TempDir::new().unwrap();
    let (ok, _, stderr) = run_pricetab(&["--sort", "latency"], dir.path());
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("latency"));
}

#[test]
fn csv_output_has_header_and_rows() {
    let dir = TempDir::new().unwrap();
    let data = write_file(dir.path(), "prices.json", EXAMPLE_DATA);

    let (ok, stdout, _) = run_pricetab(
        &["--data", data.to_str().unwrap(), "--csv", "--sort", "model"],
        dir.path(),
    );
    assert!(ok);
    let text = String::from_utf8(stdout).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(
        lines[0],
        "model,input_cost,output_cost,provider,provider_name,icon_path"
    );
    assert!(lines[1].starts_with("Claude,15,75,anthropic_chat,anthropic,"));
    assert!(lines[2].starts_with("GPT-4,30,60,openai_chat,openai,"));
}

#[test]
fn table_output_shows_indicators_and_caption() {
    let dir = TempDir::new().unwrap();
    let data = write_file(dir.path(), "prices.json", EXAMPLE_DATA);

    let (ok, stdout, _) = run_pricetab(
        &[
            "--data",
            data.to_str().unwrap(),
            "--no-color",
            "--width",
            "200",
            "--sort",
            "provider",
            "--scraped-on",
            "20240601",
            "--region-note",
            "For US-East unless otherwise stated",
        ],
        dir.path(),
    );
    assert!(ok);
    let text = String::from_utf8(stdout).unwrap();
    assert!(text.contains("LLM Pricing Table"));
    assert!(text.contains("Last scraped Jun 1, 2024; For US-East unless otherwise stated"));
    assert!(text.contains("Provider ↑"));
    assert!(text.contains("Model Name ⇅"));
    assert!(text.contains("2 of 2 models"));
}

#[test]
fn config_file_supplies_data_and_icon_base() {
    let dir = TempDir::new().unwrap();
    let data = write_file(dir.path(), "prices.json", EXAMPLE_DATA);
    let config_dir = dir.path().join(".config").join("pricetab");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        format!(
            "data = {:?}\nicon_base = \"/static/icons/\"\n",
            data.to_str().unwrap()
        ),
    )
    .unwrap();

    let (ok, stdout, stderr) = run_pricetab(&["--json"], dir.path());
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let json: Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(json["total"], 2);
    assert_eq!(json["rows"][1]["iconPath"], "/static/icons/anthropic.svg");
}

#[test]
fn session_applies_events_from_stdin() {
    let dir = TempDir::new().unwrap();
    let data = write_file(dir.path(), "prices.json", EXAMPLE_DATA);

    let (ok, stdout, stderr) = run_pricetab_with_stdin(
        &["session", "--data", data.to_str().unwrap(), "--csv"],
        dir.path(),
        "sort input\nbogus\nfilter GPT\nquit\n",
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let text = String::from_utf8(stdout).unwrap();
    let frames: Vec<&str> = text.split("model,input_cost").skip(1).collect();
    assert_eq!(frames.len(), 3);
    assert!(frames[1].find("Claude").unwrap() < frames[1].find("GPT-4").unwrap());
    assert!(frames[2].contains("GPT-4"));
    assert!(!frames[2].contains("Claude"));
    assert!(String::from_utf8_lossy(&stderr).contains("Unknown command \"bogus\""));
}

#[test]
fn session_starts_from_top_level_flags() {
    let dir = TempDir::new().unwrap();
    let data = write_file(dir.path(), "prices.json", EXAMPLE_DATA);

    let (ok, stdout, stderr) = run_pricetab_with_stdin(
        &[
            "--data",
            data.to_str().unwrap(),
            "--sort",
            "input",
            "session",
            "--csv",
        ],
        dir.path(),
        "",
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let text = String::from_utf8(stdout).unwrap();
    let frames: Vec<&str> = text.split("model,input_cost").skip(1).collect();
    assert_eq!(frames.len(), 1);
    assert!(frames[0].find("Claude").unwrap() < frames[0].find("GPT-4").unwrap());
}

#[test]
fn session_survives_undecodable_input() {
    let dir = TempDir::new().unwrap();
    let data = write_file(dir.path(), "prices.json", EXAMPLE_DATA);

    let mut child = pricetab_command(
        &["session", "--data", data.to_str().unwrap(), "--csv"],
        dir.path(),
    )
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()
    .expect("spawn pricetab");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"filter \xff\xfe\nsort model\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait pricetab");

    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    let frames: Vec<&str> = text.split("model,input_cost").skip(1).collect();
    assert_eq!(frames.len(), 2);
    assert!(frames[1].find("Claude").unwrap() < frames[1].find("GPT-4").unwrap());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not valid UTF-8"));
}

#[test]
fn providers_rejects_view_flags() {
    let dir = TempDir::new().unwrap();
    let (ok, stdout, stderr) = run_pricetab(&["--filter", "gpt", "providers"], dir.path());
    assert!(!ok);
    assert!(stdout.is_empty());
    assert!(String::from_utf8_lossy(&stderr).contains("does not take --sort or --filter"));
}

#[test]
fn session_refuses_to_start_without_data() {
    let dir = TempDir::new().unwrap();
    let data = write_file(dir.path(), "prices.json", "{\"not\": \"an array\"}");

    let (ok, stdout, stderr) = run_pricetab_with_stdin(
        &["session", "--data", data.to_str().unwrap()],
        dir.path(),
        "sort model\n",
    );
    assert!(!ok);
    assert!(stdout.is_empty());
    assert!(String::from_utf8_lossy(&stderr).contains("Expected a JSON array"));
}

#[test]
fn providers_json_lists_distinct_providers() {
    let dir = TempDir::new().unwrap();
    let data = write_file(
        dir.path(),
        "prices.json",
        r#"[
  {"model": "GPT-4", "inputCost": 30, "outputCost": 60, "provider": "openai_chat"},
  {"model": "Claude", "inputCost": 15, "outputCost": 75, "provider": "anthropic_chat"},
  {"model": "GPT-4o", "inputCost": 2.5, "outputCost": 10, "provider": "openai_chat"}
]"#,
    );

    let (ok, stdout, _) = run_pricetab(
        &["providers", "--data", data.to_str().unwrap(), "--json"],
        dir.path(),
    );
    assert!(ok);
    let json: Value = serde_json::from_slice(&stdout).expect("json");
    let arr = json.as_array().expect("array output");
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["provider"], "openai_chat");
    assert_eq!(arr[0]["count"], 2);
    assert_eq!(arr[1]["providerName"], "anthropic");
}
