use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};
use xmltree::{Element, XMLNode};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "ndnsim-rs-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

fn child_count(e: &Element, name: &str) -> usize {
    e.children
        .iter()
        .filter(|c| matches!(c, XMLNode::Element(el) if el.name == name))
        .count()
}

#[test]
fn ndn_grid_writes_animation_to_requested_file() {
    let dir = unique_temp_dir("anim");
    let anim = dir.join("foo.xml");

    let output = Command::new(env!("CARGO_BIN_EXE_ndn_grid"))
        .arg(format!("--animFile={}", anim.display()))
        .output()
        .expect("run ndn_grid");
    assert!(
        output.status.success(),
        "ndn_grid failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("done @ 20.000s"), "stdout={stdout}");

    let raw = fs::read(&anim).expect("read animation");
    let root = Element::parse(raw.as_slice()).expect("parse animation xml");
    assert_eq!(root.name, "anim");
    let topo = root.get_child("topology").expect("topology element");
    assert_eq!(child_count(topo, "node"), 9);
    assert_eq!(child_count(topo, "link"), 12);
    assert!(child_count(&root, "p") > 0, "expected packet records");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn ndn_grid_writes_viz_json_with_meta_first() {
    let dir = unique_temp_dir("viz");
    let anim = dir.join("grid.xml");
    let out_json = dir.join("viz.json");

    let output = Command::new(env!("CARGO_BIN_EXE_ndn_grid"))
        .arg(format!("--animFile={}", anim.display()))
        .args(["--viz-json", out_json.to_str().unwrap(), "--stop-s", "0.5"])
        .output()
        .expect("run ndn_grid");
    assert!(
        output.status.success(),
        "ndn_grid failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let raw = fs::read_to_string(&out_json).expect("read viz.json");
    let v: Value = serde_json::from_str(&raw).expect("parse viz.json");
    let arr = v.as_array().expect("viz.json must be a JSON array");
    assert!(!arr.is_empty(), "viz.json should contain at least meta event");
    assert_eq!(
        arr[0].get("kind").and_then(|k| k.as_str()),
        Some("meta"),
        "expected first viz event to be meta"
    );
    let names = arr[0]["nodes"]
        .as_array()
        .expect("meta nodes")
        .iter()
        .filter_map(|n| n.get("name").and_then(|s| s.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(names.first().copied(), Some("c"));
    assert_eq!(names.last().copied(), Some("p"));
    assert!(
        arr.iter()
            .filter_map(|e| e.get("t_ns").and_then(|t| t.as_u64()))
            .all(|t| t <= 500_000_000)
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn ndn_grid_uses_anim_file_from_scenario_when_flag_absent() {
    let dir = unique_temp_dir("scenario-anim");
    let anim = dir.join("from-scenario.xml");
    let scenario = write_file(
        &dir,
        "scenario.json",
        &serde_json::json!({ "stop_s": 0.2, "anim_file": anim }).to_string(),
    );

    let output = Command::new(env!("CARGO_BIN_EXE_ndn_grid"))
        .args(["--scenario", scenario.to_str().unwrap()])
        .current_dir(&dir)
        .output()
        .expect("run ndn_grid");
    assert!(
        output.status.success(),
        "ndn_grid failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(anim.exists(), "animation should follow the scenario's anim_file");
    assert!(!dir.join("grid-animation.xml").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn ndn_grid_fails_when_producer_is_outside_grid() {
    let dir = unique_temp_dir("missing");
    let scenario = write_file(
        &dir,
        "scenario.json",
        r#"{ "producer": { "row": 5, "col": 5 } }"#,
    );
    let anim = dir.join("never.xml");

    let output = Command::new(env!("CARGO_BIN_EXE_ndn_grid"))
        .arg(format!("--animFile={}", anim.display()))
        .args(["--scenario", scenario.to_str().unwrap()])
        .output()
        .expect("run ndn_grid");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error in topology: one nodes c,p is missing"));
    assert!(!anim.exists(), "no animation should be written on fatal error");

    let _ = fs::remove_dir_all(&dir);
}
