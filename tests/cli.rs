use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn db(&self) -> PathBuf {
        self.dir.path().join("minop.db")
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Command with only `--config` set, so the database comes from the
    /// environment or the config file.
    fn minop_unpinned(&self) -> Command {
        let mut cmd = Command::cargo_bin("minop").unwrap();
        cmd.env_remove("MINOP_DB")
            .env("NO_COLOR", "1")
            .arg("--config")
            .arg(self.path("config.yaml"));
        cmd
    }

    fn minop(&self) -> Command {
        let mut cmd = self.minop_unpinned();
        cmd.arg("--db").arg(self.db());
        cmd
    }

    fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .minop()
            .args(args)
            .args(["--output", "json"])
            .output()
            .unwrap();
        assert!(output.status.success(), "{output:?}");
        serde_json::from_slice(&output.stdout).unwrap()
    }

    fn json_at(&self, db: &Path, args: &[&str]) -> serde_json::Value {
        let output = self
            .minop_unpinned()
            .arg("--db")
            .arg(db)
            .args(args)
            .args(["--output", "json"])
            .output()
            .unwrap();
        assert!(output.status.success(), "{output:?}");
        serde_json::from_slice(&output.stdout).unwrap()
    }
}

fn write(path: &Path, contents: &str) {
    std::fs::write(path, contents).unwrap();
}

#[test]
fn test_prod_scenario() {
    let ws = Workspace::new();

    let group = ws.json(&["group", "add", "Prod"]);
    assert_eq!(group["id"], 1);

    let host = ws.json(&[
        "host", "add", "web1", "--group", "1", "--ip", "10.0.0.1", "--user", "admin",
        "--password", "secret",
    ]);
    assert_eq!(host["id"], 1);

    let hosts = ws.json(&["host", "list"]);
    assert_eq!(hosts["count"], 1);
    assert_eq!(hosts["items"][0]["name"], "web1");
    assert_eq!(hosts["items"][0]["group_id"], 1);
    assert_eq!(hosts["items"][0]["ip"], "10.0.0.1");
    assert_eq!(hosts["items"][0]["username"], "admin");

    let groups = ws.json(&["group", "list"]);
    assert_eq!(groups["items"], serde_json::json!([{"id": 1, "name": "Prod"}]));
}

#[test]
fn test_empty_database_lists_nothing() {
    let ws = Workspace::new();

    ws.minop()
        .args(["group", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No host groups"));

    assert!(ws.db().exists());
}

#[test]
fn test_empty_group_name_fails() {
    let ws = Workspace::new();

    ws.minop()
        .args(["group", "add", ""])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Host group name cannot be empty"));
}

#[test]
fn test_unknown_group_name_fails() {
    let ws = Workspace::new();

    ws.minop()
        .args([
            "host", "add", "web1", "--group", "Nope", "--ip", "10.0.0.1", "-u", "a", "-p", "b",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("host group 'Nope'"));

    assert_eq!(ws.json(&["host", "list"])["count"], 0);
}

#[test]
fn test_tree_hides_passwords_and_orphans() {
    let ws = Workspace::new();
    ws.minop().args(["group", "add", "Prod"]).assert().success();
    ws.minop()
        .args([
            "host", "add", "web1", "-g", "Prod", "--ip", "10.0.0.1", "-u", "admin", "-p",
            "topsecret",
        ])
        .assert()
        .success();
    ws.minop()
        .args([
            "host", "add", "ghost", "-g", "42", "--ip", "10.0.0.9", "-u", "root", "-p", "pw",
        ])
        .assert()
        .success();

    ws.minop()
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("Prod"))
        .stdout(predicate::str::contains("web1"))
        .stdout(predicate::str::contains("ghost").not())
        .stdout(predicate::str::contains("topsecret").not())
        .stdout(predicate::str::contains("1 host(s) reference a missing group"));
}

#[test]
fn test_import_host_list() {
    let ws = Workspace::new();
    let list = ws.path("host.list");
    write(
        &list,
        "# hosts\n[web]\ndeploy:pw@10.0.1.1\ndeploy:pw@10.0.1.2:2222\n[db]\nadmin:pw@10.0.2.1\n",
    );

    let summary = ws.json(&["import", list.to_str().unwrap()]);
    assert_eq!(summary["groups_created"], 2);
    assert_eq!(summary["hosts_created"], 3);

    let tree = ws.json(&["tree"]);
    assert_eq!(tree["groups"][0]["name"], "db");
    assert_eq!(tree["groups"][1]["name"], "web");
    assert_eq!(tree["groups"][1]["hosts"][1]["port"], 2222);

    let again = ws.json(&["import", list.to_str().unwrap()]);
    assert_eq!(again["groups_reused"], 2);
}

#[test]
fn test_import_reports_bad_line() {
    let ws = Workspace::new();
    let list = ws.path("host.list");
    write(&list, "[web]\nnot-a-host\n");

    ws.minop()
        .arg("import")
        .arg(&list)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_config_default_output() {
    let ws = Workspace::new();
    write(&ws.path("config.yaml"), "general:\n  default_output: json\n");

    ws.minop()
        .args(["group", "add", "Prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Prod\""));
}

#[test]
fn test_completions_need_no_database() {
    let ws = Workspace::new();

    ws.minop()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("minop"));

    assert!(!ws.db().exists());
}

#[test]
fn test_numeric_group_name_is_resolved_by_name() {
    let ws = Workspace::new();
    let group = ws.json(&["group", "add", "2024"]);
    assert_eq!(group["id"], 1);

    let host = ws.json(&[
        "host", "add", "web1", "--group", "2024", "--ip", "10.0.0.1", "-u", "admin", "-p", "pw",
    ]);
    assert_eq!(host["group_id"], 1);

    let tree = ws.json(&["tree"]);
    assert_eq!(tree["hosts"], 1);
    assert_eq!(tree["orphaned"], 0);
}

#[test]
fn test_port_zero_fails() {
    let ws = Workspace::new();
    ws.minop().args(["group", "add", "Prod"]).assert().success();

    ws.minop()
        .args([
            "host", "add", "web1", "-g", "Prod", "--ip", "10.0.0.1", "-u", "a", "-p", "b",
            "--port", "0",
        ])
        .assert()
        .failure();

    assert_eq!(ws.json(&["host", "list"])["count"], 0);
}

#[test]
fn test_database_from_environment() {
    let ws = Workspace::new();
    let env_db = ws.path("from-env.db");

    ws.minop_unpinned()
        .env("MINOP_DB", &env_db)
        .args(["group", "add", "Prod"])
        .assert()
        .success();

    assert!(env_db.exists());
    assert!(!ws.db().exists());
}

#[test]
fn test_database_from_config_and_precedence() {
    let ws = Workspace::new();
    let config_db = ws.path("from-config.db");
    let env_db = ws.path("from-env.db");
    write(
        &ws.path("config.yaml"),
        &format!("database:\n  path: {}\n", config_db.display()),
    );

    ws.minop_unpinned()
        .args(["group", "add", "Prod"])
        .assert()
        .success();
    assert!(config_db.exists());

    ws.minop_unpinned()
        .env("MINOP_DB", &env_db)
        .args(["group", "add", "Dev"])
        .assert()
        .success();
    assert!(env_db.exists());

    ws.minop_unpinned()
        .env("MINOP_DB", &env_db)
        .arg("--db")
        .arg(ws.db())
        .args(["group", "add", "Ops"])
        .assert()
        .success();
    assert!(ws.db().exists());

    let from_config = ws.json_at(&config_db, &["group", "list"]);
    assert_eq!(from_config["items"][0]["name"], "Prod");
    assert_eq!(from_config["count"], 1);
    let from_env = ws.json_at(&env_db, &["group", "list"]);
    assert_eq!(from_env["items"][0]["name"], "Dev");
    assert_eq!(from_env["count"], 1);
    assert_eq!(ws.json(&["group", "list"])["items"][0]["name"], "Ops");
}
