use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const LABEL: &str = "Year 1 - Period 1 - QUR-111 - Applied Grammar and Quran Translation";

fn recname() -> Command {
    let mut cmd = Command::cargo_bin("recname").unwrap();
    cmd.env_remove("RECNAME_LOG").arg("--no-color");
    cmd
}

#[test]
fn test_help_command() {
    recname()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rename class recordings"));
}

#[test]
fn test_version_subcommand() {
    recname()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("recname 0.1.0"));
}

#[test]
fn test_version_subcommand_json() {
    recname()
        .args(["version", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r#"\{"name":"recname","version":"0\.1\.0"\}"#).unwrap());
}

#[test]
fn test_rename_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let class = temp_dir.child("Class Recordings").child(LABEL);
    class
        .child("GMT20241010-173029_Recording_1920x1080.mp4")
        .write_str("video")
        .unwrap();
    class
        .child("GMT20241010-173029_Recording.cc.vtt")
        .write_str("captions")
        .unwrap();

    recname()
        .current_dir(temp_dir.path())
        .args(["rename", "Class Recordings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed: "))
        .stdout(predicate::str::contains(
            "GMT20241010-173029_Recording_1920x1080.mp4 -> ",
        ))
        .stdout(predicate::str::contains(format!("2024-10-10 - {LABEL}.mp4")))
        .stdout(predicate::str::contains(format!("2024-10-10 - {LABEL}.vtt")));

    class
        .child(format!("2024-10-10 - {LABEL}.mp4"))
        .assert("video");
    class
        .child(format!("2024-10-10 - {LABEL}.vtt"))
        .assert("captions");
    class
        .child("GMT20241010-173029_Recording_1920x1080.mp4")
        .assert(predicate::path::missing());
}

#[test]
fn test_rename_prints_one_line_per_file() {
    let temp_dir = TempDir::new().unwrap();
    let class = temp_dir.child("Class");
    class.child("GMT20241010-173029_a.mp4").touch().unwrap();
    class.child("GMT20241010-180000_b.mp4").touch().unwrap();
    class.child("notes.txt").touch().unwrap();

    let output = recname()
        .args(["rename"])
        .arg(temp_dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("2024-10-10 - Class.mp4"));
    assert!(lines[1].ends_with("2024-10-10 - Class - part 2.mp4"));

    class.child("notes.txt").assert(predicate::path::exists());
}

#[test]
fn test_rename_defaults_to_current_directory() {
    let temp_dir = TempDir::new().unwrap();
    let class = temp_dir.child("Class");
    class.child("GMT20241010-173029_a.mp4").touch().unwrap();

    recname()
        .current_dir(temp_dir.path())
        .arg("rename")
        .assert()
        .success();

    class
        .child("2024-10-10 - Class.mp4")
        .assert(predicate::path::exists());
}

#[test]
fn test_change_directory_flag() {
    let temp_dir = TempDir::new().unwrap();
    let class = temp_dir.child("Class");
    class.child("GMT20241010-173029_a.mp4").touch().unwrap();

    recname()
        .arg("-C")
        .arg(temp_dir.path())
        .arg("rename")
        .assert()
        .success();

    class
        .child("2024-10-10 - Class.mp4")
        .assert(predicate::path::exists());
}

#[test]
fn test_plan_does_not_rename() {
    let temp_dir = TempDir::new().unwrap();
    let class = temp_dir.child("Class");
    class.child("GMT20241010-173029_a.mp4").touch().unwrap();

    recname()
        .arg("plan")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would rename: "))
        .stdout(predicate::str::contains("2024-10-10 - Class.mp4"));

    class
        .child("GMT20241010-173029_a.mp4")
        .assert(predicate::path::exists());
    class
        .child("2024-10-10 - Class.mp4")
        .assert(predicate::path::missing());
}

#[test]
fn test_rename_dry_run_does_not_rename() {
    let temp_dir = TempDir::new().unwrap();
    let class = temp_dir.child("Class");
    class.child("GMT20241010-173029_a.mp4").touch().unwrap();

    recname()
        .args(["rename", "--dry-run"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would rename: "));

    class
        .child("GMT20241010-173029_a.mp4")
        .assert(predicate::path::exists());
}

#[test]
fn test_rename_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let class = temp_dir.child("Class");
    class.child("GMT20241010-173029_a.mp4").touch().unwrap();
    class.child("readme.md").touch().unwrap();

    let output = recname()
        .args(["rename", "--output", "json"])
        .arg(temp_dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["operation"], "rename");
    assert_eq!(value["skipped"], 1);
    let renamed = value["renamed"].as_array().unwrap();
    assert_eq!(renamed.len(), 1);
    assert!(renamed[0]["to"]
        .as_str()
        .unwrap()
        .ends_with("2024-10-10 - Class.mp4"));
}

#[test]
fn test_second_run_changes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let class = temp_dir.child("Class");
    class.child("GMT20241010-173029_a.mp4").touch().unwrap();

    recname()
        .arg("rename")
        .arg(temp_dir.path())
        .assert()
        .success();

    recname()
        .arg("rename")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    class
        .child("2024-10-10 - Class.mp4")
        .assert(predicate::path::exists());
}

#[test]
fn test_invalid_date_aborts_with_exit_code_2() {
    let temp_dir = TempDir::new().unwrap();
    let class = temp_dir.child("Class");
    class
        .child("GMT20241332-173029_Recording.mp4")
        .touch()
        .unwrap();

    recname()
        .arg("rename")
        .arg(temp_dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid date '20241332'"));

    class
        .child("GMT20241332-173029_Recording.mp4")
        .assert(predicate::path::exists());
}

#[test]
fn test_invalid_date_skip_policy() {
    let temp_dir = TempDir::new().unwrap();
    let class = temp_dir.child("Class");
    class
        .child("GMT20241332-173029_Recording.mp4")
        .touch()
        .unwrap();
    class.child("GMT20241010-173029_a.mp4").touch().unwrap();

    recname()
        .args(["rename", "--on-invalid-date", "skip"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid date '20241332'"));

    class
        .child("GMT20241332-173029_Recording.mp4")
        .assert(predicate::path::exists());
    class
        .child("2024-10-10 - Class.mp4")
        .assert(predicate::path::exists());
}

#[test]
fn test_invalid_date_policy_from_config() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir
        .child(".recname")
        .child("config.toml")
        .write_str("[defaults]\nroot = \"Recordings\"\non_invalid_date = \"skip\"\n")
        .unwrap();
    let class = temp_dir.child("Recordings").child("Class");
    class
        .child("GMT20241332-173029_Recording.mp4")
        .touch()
        .unwrap();
    class.child("GMT20241010-173029_a.mp4").touch().unwrap();

    recname()
        .current_dir(temp_dir.path())
        .arg("rename")
        .assert()
        .success();

    class
        .child("2024-10-10 - Class.mp4")
        .assert(predicate::path::exists());
}

#[test]
fn test_existing_destination_exit_code_3() {
    let temp_dir = TempDir::new().unwrap();
    let class = temp_dir.child("Class");
    class.child("2024-10-10 - Class.mp4").write_str("old").unwrap();
    class.child("GMT20241010-173029_a.mp4").write_str("new").unwrap();

    recname()
        .arg("rename")
        .arg(temp_dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Destination already exists"));

    class.child("2024-10-10 - Class.mp4").assert("old");
    class.child("GMT20241010-173029_a.mp4").assert("new");
}

#[test]
fn test_missing_root_exit_code_2() {
    let temp_dir = TempDir::new().unwrap();

    recname()
        .arg("rename")
        .arg(temp_dir.path().join("missing"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to resolve root directory"));
}
