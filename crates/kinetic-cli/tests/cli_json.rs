use std::path::Path;
use std::process::{Command, Output};

use serde_json::{json, Value};

fn kinetic(args: &[&str], cwd: &Path) -> Output {
    let bin = std::env::var("CARGO_BIN_EXE_kinetic").unwrap_or_else(|_| {
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../target/debug/kinetic")
            .to_string_lossy()
            .to_string()
    });

    Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to spawn kinetic")
}

fn stdout_json(output: &Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).expect("stdout not utf-8");
    assert!(
        !stdout.contains('\u{1b}'),
        "stdout contaminated with ANSI escape codes: {stdout:?}"
    );
    serde_json::from_str(&stdout).expect("stdout is not a single JSON document")
}

fn write_json(dir: &Path, name: &str, value: &Value) {
    std::fs::write(dir.join(name), serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn scroll_action() -> Value {
    json!({
        "type": "scroll",
        "animations": [{
            "name": "Slide",
            "description": "",
            "timing": {
                "rangeStart": ["start", {"type": "unit", "value": 0.0, "unit": "px"}],
                "rangeEnd": ["end", {"type": "unit", "value": 50.0, "unit": "dvh"}]
            },
            "keyframes": [{"offset": 0.0, "styles": {}}]
        }]
    })
}

fn document() -> Value {
    json!({
        "instances": {
            "body": {"id": "body", "component": "Body"},
            "card": {"id": "card", "component": "Box", "label": "Card"}
        },
        "componentMetas": {"Body": {"label": "Body"}, "Box": {}},
        "styles": {
            "breakpoints": {"base": {"id": "base", "label": "Base"}}
        },
        "selectedPath": ["card", "body"]
    })
}

#[test]
fn validate_prints_normalized_json_and_logs_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    write_json(dir.path(), "action.json", &scroll_action());

    let output = kinetic(&["validate", "action.json"], dir.path());
    assert!(output.status.success(), "validate failed: {:?}", output);

    let value = stdout_json(&output);
    assert_eq!(value["type"], "scroll");
    assert_eq!(value["animations"][0]["name"], "Slide");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("is a valid scroll action"), "stderr: {stderr}");
}

#[test]
fn validate_rejects_foreign_range_names() {
    let dir = tempfile::tempdir().unwrap();
    let mut action = scroll_action();
    action["animations"][0]["timing"]["rangeStart"][0] = json!("entry");
    write_json(dir.path(), "action.json", &action);

    let output = kinetic(&["validate", "action.json"], dir.path());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn edit_add_appends_preset() {
    let dir = tempfile::tempdir().unwrap();
    write_json(dir.path(), "action.json", &json!({"type": "scroll", "animations": []}));

    let output = kinetic(&["edit", "--action", "action.json", "add", "fade in"], dir.path());
    assert!(output.status.success(), "edit failed: {:?}", output);
    let value = stdout_json(&output);
    assert_eq!(value["animations"].as_array().unwrap().len(), 1);
    assert_eq!(value["animations"][0]["name"], "Fade In");
}

#[test]
fn rejected_edit_reports_the_warning() {
    let dir = tempfile::tempdir().unwrap();
    write_json(dir.path(), "action.json", &scroll_action());

    let output = kinetic(
        &["edit", "--action", "action.json", "move", "--from", "0", "--to", "4"],
        dir.path(),
    );
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to sort animation"), "stderr: {stderr}");
}

#[test]
fn range_start_uses_configured_default_unit() {
    let dir = tempfile::tempdir().unwrap();
    let mut action = scroll_action();
    action["animations"][0]["timing"]
        .as_object_mut()
        .unwrap()
        .remove("rangeStart");
    write_json(dir.path(), "action.json", &action);
    std::fs::write(
        dir.path().join("kinetic.toml"),
        "[panel]\ndefault_range_unit = \"px\"\n",
    )
    .unwrap();

    let output = kinetic(
        &["edit", "--action", "action.json", "range-start", "0", "end"],
        dir.path(),
    );
    assert!(output.status.success(), "edit failed: {:?}", output);
    let value = stdout_json(&output);
    assert_eq!(
        value["animations"][0]["timing"]["rangeStart"],
        json!(["end", {"type": "unit", "value": 0.0, "unit": "px"}])
    );
}

#[test]
fn set_subject_declares_timeline_on_ancestor() {
    let dir = tempfile::tempdir().unwrap();
    write_json(dir.path(), "action.json", &json!({"type": "view", "animations": []}));
    write_json(dir.path(), "doc.json", &document());

    let output = kinetic(
        &[
            "edit",
            "--action",
            "action.json",
            "--document",
            "doc.json",
            "set-subject",
            "body",
        ],
        dir.path(),
    );
    assert!(output.status.success(), "edit failed: {:?}", output);

    let value = stdout_json(&output);
    let subject = value["subject"].as_str().unwrap().to_string();
    assert!(subject.starts_with("--generated-timeline-"), "subject: {subject}");

    let doc: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("doc.json")).unwrap())
            .unwrap();
    let declared: Vec<&Value> = doc["styles"]["styles"]
        .as_object()
        .unwrap()
        .values()
        .filter(|decl| decl["property"] == "viewTimelineName")
        .collect();
    assert_eq!(declared.len(), 1);
    assert_eq!(declared[0]["value"]["value"], json!(subject));
    assert_eq!(declared[0]["listed"], true);
}

#[test]
fn subjects_lists_self_first() {
    let dir = tempfile::tempdir().unwrap();
    write_json(dir.path(), "doc.json", &document());

    let output = kinetic(&["subjects", "--document", "doc.json"], dir.path());
    assert!(output.status.success(), "subjects failed: {:?}", output);
    let value = stdout_json(&output);
    assert_eq!(value[0]["value"], "self");
    assert_eq!(value[0]["label"], "Self");
    assert_eq!(value[1]["label"], "Body");
    assert_eq!(value[1]["timelineExists"], false);
}

#[test]
fn validate_rejects_mistagged_range_offsets() {
    let dir = tempfile::tempdir().unwrap();
    let mut action = scroll_action();
    action["animations"][0]["timing"]["rangeEnd"][1]["type"] = json!("keyword");
    write_json(dir.path(), "action.json", &action);

    let output = kinetic(&["validate", "action.json"], dir.path());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn config_with_non_custom_ident_prefix_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    write_json(dir.path(), "doc.json", &document());
    std::fs::write(
        dir.path().join("kinetic.toml"),
        "[panel]\ntimeline_prefix = \"timeline-\"\n",
    )
    .unwrap();

    let output = kinetic(&["subjects", "--document", "doc.json"], dir.path());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("timeline_prefix"), "stderr: {stderr}");
}
