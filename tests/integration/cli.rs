//! End-to-end tests of the `tenant-sync` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tenant_sync_cli::test_utils::{TenantFixture, TestEnvironment};

fn tenant_sync(env: &TestEnvironment) -> Command {
    let mut cmd = Command::cargo_bin("tenant-sync").unwrap();
    cmd.current_dir(env.temp_dir.path())
        .env_remove("RUST_LOG")
        .env_remove("TENANT_SYNC_CONFIG")
        .env("HOME", env.temp_dir.path());
    cmd
}

#[test]
fn test_import_prints_inlined_json() {
    let env = TestEnvironment::new().unwrap();
    TenantFixture::email_and_saml().write_to(env.tenant_dir()).unwrap();

    let output = tenant_sync(&env)
        .args(["import", "--input"])
        .arg(env.tenant_dir())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let assets: Value = serde_json::from_slice(&output).unwrap();
    let body = &assets["connections"][0]["options"]["email"]["body"];
    assert!(body.as_str().unwrap().contains("{{ code }}"));
    assert_eq!(assets["tenant"]["friendly_name"], "Test Tenant");
}

#[test]
fn test_export_then_import() {
    let env = TestEnvironment::new().unwrap();
    let assets = json!({
        "connections": [{
            "name": "My Conn",
            "strategy": "email",
            "enabled_clients": ["id2", "id1"],
            "options": { "email": { "body": "<h1>Hello</h1>", "from": "a@b.c" } }
        }],
        "clients": [
            { "client_id": "id1", "name": "Alpha" },
            { "client_id": "id2", "name": "Beta" }
        ]
    });
    let assets_file = env.temp_dir.path().join("assets.json");
    std::fs::write(&assets_file, assets.to_string()).unwrap();

    tenant_sync(&env)
        .args(["--quiet", "export", "--assets"])
        .arg(&assets_file)
        .arg("--output")
        .arg(env.tenant_dir())
        .assert()
        .success();

    assert_eq!(env.read_file("connections/my-conn.html").unwrap(), "<h1>Hello</h1>");
    let yaml = env.read_file("tenant.yaml").unwrap();
    assert!(yaml.contains("./my-conn.html"));

    let imported = env.temp_dir.path().join("imported.json");
    tenant_sync(&env)
        .args(["import", "--input"])
        .arg(env.tenant_dir())
        .arg("--output")
        .arg(&imported)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let value: Value = serde_json::from_str(&std::fs::read_to_string(imported).unwrap()).unwrap();
    let connection = &value["connections"][0];
    assert_eq!(connection["options"]["email"]["body"], "<h1>Hello</h1>");
    assert_eq!(connection["options"]["email"]["from"], "a@b.c");
    assert_eq!(connection["enabled_clients"], json!(["Alpha", "Beta"]));
}

#[test]
fn test_config_file_changes_connections_directory() {
    let env = TestEnvironment::new().unwrap();
    let config = env.temp_dir.path().join("custom.toml");
    std::fs::write(&config, "connections_directory = \"conns\"\n").unwrap();
    let assets_file = env.temp_dir.path().join("assets.json");
    std::fs::write(
        &assets_file,
        json!({ "connections": [{ "name": "email", "strategy": "email",
            "options": { "email": { "body": "<p>x</p>" } } }] })
        .to_string(),
    )
    .unwrap();

    tenant_sync(&env)
        .arg("--config")
        .arg(&config)
        .args(["export", "--assets"])
        .arg(&assets_file)
        .arg("--output")
        .arg(env.tenant_dir())
        .assert()
        .success();

    assert!(env.file_exists("conns/email.html"));
    assert!(!env.file_exists("connections/email.html"));
}

#[test]
fn test_config_from_environment() {
    let env = TestEnvironment::new().unwrap();
    let config = env.temp_dir.path().join("env.toml");
    std::fs::write(&config, "tenant_file = \"prod.yaml\"\n").unwrap();
    env.write_file("prod.yaml", "tenant:\n  friendly_name: Prod\n").unwrap();

    tenant_sync(&env)
        .env("TENANT_SYNC_CONFIG", &config)
        .args(["import", "--input"])
        .arg(env.tenant_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Prod"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let env = TestEnvironment::new().unwrap();

    tenant_sync(&env)
        .args(["--config", "nope.toml", "import"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.toml"));
}

#[test]
fn test_import_missing_tenant_file_fails() {
    let env = TestEnvironment::new().unwrap();

    tenant_sync(&env)
        .args(["import", "--input"])
        .arg(env.tenant_dir())
        .assert()
        .failure()
        .stderr(predicate::str::contains("tenant.yaml"));
}

#[test]
fn test_invalid_connection_reports_name() {
    let env = TestEnvironment::new().unwrap();
    TenantFixture::invalid_email_options().write_to(env.tenant_dir()).unwrap();

    tenant_sync(&env)
        .args(["import", "--input"])
        .arg(env.tenant_dir())
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken"));
}
