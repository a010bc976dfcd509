#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const JOBS: &str = r#"[
  {"id": "1", "title": "Účetní", "status": "Aktivní", "location": "Praha",
   "recruiter": {"name": "Anna Kovářová"},
   "advertisement": {"active": true, "portals": [
     {"name": "Jobs.cz", "publishedAt": "2024-03-01", "expiresAt": "2024-04-01"}]}},
  {"id": "2", "title": "Skladník", "status": "Aktivní", "location": "Brno",
   "recruiter": {"name": "Petr Novák"},
   "advertisement": {"active": false, "portals": [
     {"name": "LinkedIn", "publishedAt": "2024-01-10", "expiresAt": "2024-02-10"}]}},
  {"id": "3", "title": "Vývojář", "status": "Rozpracovaný", "location": "Praha",
   "recruiter": {"name": "Anna Kovářová"}},
  {"id": "4", "title": "Administrátor", "status": "Aktivní", "location": "Ostrava",
   "recruiter": {"name": "Anna Kovářová"},
   "advertisement": {"active": false, "portals": []}}
]"#;

struct Env {
    _temp: TempDir,
    data: PathBuf,
    jobs: PathBuf,
    config: PathBuf,
}

fn setup() -> Env {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    let jobs = temp.path().join("jobs.json");
    let config = temp.path().join("jobdash.toml");
    fs::write(&jobs, JOBS).unwrap();
    fs::write(
        &config,
        "suggest_endpoint = \"http://127.0.0.1:9/api/suggest-fields\"\nsuggest_timeout_ms = 300\n",
    )
    .unwrap();
    Env {
        _temp: temp,
        data,
        jobs,
        config,
    }
}

fn jobdash(env: &Env) -> Command {
    let mut cmd = Command::new(cargo_bin("jobdash"));
    cmd.env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(&env.data)
        .arg("--config")
        .arg(&env.config);
    cmd
}

fn list_json(env: &Env, args: &[&str]) -> Vec<String> {
    let output = jobdash(env)
        .args(["list", "--output", "json", "--jobs"])
        .arg(&env.jobs)
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);
    let jobs: Value = serde_json::from_slice(&output.stdout).unwrap();
    jobs.as_array()
        .unwrap()
        .iter()
        .map(|j| j["title"].as_str().unwrap().to_string())
        .collect()
}

fn views_file(data: &Path) -> PathBuf {
    data.join("customJobViews.json")
}

#[test]
fn test_list_defaults_to_active_view() {
    let env = setup();
    assert_eq!(
        list_json(&env, &[]),
        vec!["Administrátor", "Skladník", "Účetní"]
    );
}

#[test]
fn test_list_with_view_filters_and_sort() {
    let env = setup();
    assert_eq!(
        list_json(&env, &["--view", "Nevystavené", "--sort", "title-desc"]),
        vec!["Vývojář", "Skladník", "Administrátor"]
    );
    assert_eq!(
        list_json(&env, &["--all", "-f", "recruiter=Anna Kovářová", "-s", "vý"]),
        vec!["Vývojář"]
    );
    assert_eq!(
        list_json(&env, &["--all", "--sort", "expires-desc"])[0],
        "Účetní"
    );
}

#[test]
fn test_list_text_output() {
    let env = setup();
    jobdash(&env)
        .args(["list", "--jobs"])
        .arg(&env.jobs)
        .assert()
        .success()
        .stdout(predicate::str::contains("View: Aktivní"))
        .stdout(predicate::str::contains("Účetní"))
        .stdout(predicate::str::contains("Vývojář").not());
}

#[test]
fn test_invalid_filter_fails() {
    let env = setup();
    jobdash(&env)
        .args(["list", "--jobs"])
        .arg(&env.jobs)
        .args(["-f", "status=Smazaný"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_missing_jobs_file_fails() {
    let env = setup();
    jobdash(&env)
        .args(["list", "--jobs", "/nonexistent/jobs.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read jobs"));
}

#[test]
fn test_view_lifecycle() {
    let env = setup();

    jobdash(&env)
        .args(["views", "save", "Moje pozice", "-f", "location=Praha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("moje-pozice"));
    assert!(views_file(&env.data).exists());

    assert_eq!(
        list_json(&env, &["--view", "moje-pozice"]),
        vec!["Účetní", "Vývojář"]
    );

    jobdash(&env)
        .args(["views", "save", "moje  pozice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    jobdash(&env)
        .args([
            "views",
            "update",
            "moje-pozice",
            "Moje Brno",
            "-f",
            "location=Brno",
        ])
        .assert()
        .success();
    assert_eq!(list_json(&env, &["--view", "moje-pozice"]), vec!["Skladník"]);

    jobdash(&env)
        .args(["views", "show", "moje-pozice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moje Brno"))
        .stdout(predicate::str::contains("Lokalita: Brno"));

    jobdash(&env)
        .args(["views", "delete", "moje-pozice"])
        .assert()
        .success();
    jobdash(&env)
        .args(["views", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("moje-pozice").not());
}

#[test]
fn test_builtin_views_are_protected() {
    let env = setup();
    jobdash(&env)
        .args(["views", "delete", "Aktivní"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be changed"));
}

#[test]
fn test_corrupt_views_are_reset_with_warning() {
    let env = setup();
    fs::create_dir_all(&env.data).unwrap();
    fs::write(views_file(&env.data), "[{broken").unwrap();

    jobdash(&env)
        .args(["views", "list", "--output", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("reset"));
    assert!(!views_file(&env.data).exists());
}

#[test]
fn test_catalog() {
    let env = setup();
    jobdash(&env)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("adStatus"))
        .stdout(predicate::str::contains("Firemní web"));
}

#[test]
fn test_suggest_degrades_and_draft_round_trip() {
    let env = setup();

    jobdash(&env)
        .args(["suggest", "Skladník"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skladník"))
        .stderr(predicate::str::contains("Suggestions unavailable"));

    let output = jobdash(&env)
        .args(["draft", "show", "--output", "json"])
        .output()
        .unwrap();
    let draft: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(draft["position"]["title"], "Skladník");

    jobdash(&env).args(["draft", "clear"]).assert().success();
    jobdash(&env)
        .args(["draft", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No draft saved."));
}
