//! Directory-format round trips through the public API.

use serde_json::json;
use tenant_sync_cli::context::YamlContext;
use tenant_sync_cli::models::{Assets, Client, Connection};
use tenant_sync_cli::test_utils::{TenantFixture, TestEnvironment};

fn sample_assets() -> Assets {
    Assets {
        connections: Some(vec![
            Connection::email("My Conn", "<h1>Hello</h1>").with_enabled_clients(["id2", "id1"]),
            Connection::new("saml", "samlp")
                .with_enabled_clients(["id1"])
                .with_idp_initiated("id2"),
            Connection::new("Username-Password", "auth0"),
        ]),
        clients: Some(vec![Client::new("id1", "Alpha"), Client::new("id2", "beta")]),
        ..Assets::default()
    }
}

#[test]
fn test_export_writes_body_files_and_names() {
    let env = TestEnvironment::new().unwrap();

    YamlContext::new(env.path("tenant.yaml")).dump(sample_assets()).unwrap();

    assert_eq!(env.read_file("connections/my-conn.html").unwrap(), "<h1>Hello</h1>");

    let written = Assets::from_yaml_str(&env.read_file("tenant.yaml").unwrap()).unwrap();
    let connections = written.connections.unwrap();

    assert_eq!(connections[0].email_body(), Some("./my-conn.html"));
    assert_eq!(connections[0].enabled_clients, Some(vec!["Alpha".into(), "beta".into()]));

    assert_eq!(connections[1].options.idp_client_id(), Some("beta"));
    assert_eq!(connections[1].enabled_clients, Some(vec!["Alpha".into()]));

    // no enabled clients is written as an empty list
    assert_eq!(connections[2].enabled_clients, Some(Vec::new()));
}

#[test]
fn test_round_trip_restores_bodies() {
    let env = TestEnvironment::new().unwrap();
    let tenant_file = env.path("tenant.yaml");
    let original = sample_assets();

    YamlContext::new(&tenant_file).dump(original.clone()).unwrap();
    let loaded = YamlContext::new(&tenant_file).load().unwrap();

    let original_connections = original.connections.unwrap();
    let loaded_connections = loaded.connections.unwrap();
    assert_eq!(loaded_connections.len(), original_connections.len());

    for (before, after) in original_connections.iter().zip(&loaded_connections) {
        assert_eq!(before.name, after.name);
        assert_eq!(before.strategy(), after.strategy());
        assert_eq!(before.email_body(), after.email_body());
    }
    assert_eq!(loaded.clients, original.clients);
}

#[test]
fn test_export_of_imported_tenant_is_stable() {
    let env = TestEnvironment::new().unwrap();
    let fixture = TenantFixture::email_and_saml();
    let tenant_file = fixture.write_to(env.tenant_dir()).unwrap();

    let first = YamlContext::new(&tenant_file).load().unwrap();

    let copy = env.temp_dir.path().join("copy").join("tenant.yaml");
    YamlContext::new(&copy).dump(first.clone()).unwrap();
    let second = YamlContext::new(&copy).load().unwrap();

    let first_connections = first.connections.unwrap();
    let second_connections = second.connections.unwrap();
    assert_eq!(first_connections[0].email_body(), second_connections[0].email_body());
    assert_eq!(second_connections[0].enabled_clients, Some(vec!["Alpha".into(), "Beta".into()]));
    assert_eq!(first_connections[1], second_connections[1]);
    assert_eq!(second.other.get("tenant"), first.other.get("tenant"));
}

#[test]
fn test_absent_connections_pass_through() {
    let env = TestEnvironment::new().unwrap();
    let fixture = TenantFixture::no_connections();
    let tenant_file = fixture.write_to(env.tenant_dir()).unwrap();

    let assets = YamlContext::new(&tenant_file).load().unwrap();
    assert!(assets.connections.is_none());

    YamlContext::new(&tenant_file).dump(assets).unwrap();
    assert!(!env.path("connections").exists());
    assert!(!env.read_file("tenant.yaml").unwrap().contains("connections"));
}

#[test]
fn test_import_keeps_inline_body() {
    let env = TestEnvironment::new().unwrap();
    env.write_file(
        "tenant.yaml",
        "connections:\n  - name: passwordless\n    strategy: email\n    options:\n      email:\n        body: <p>inline</p>\n",
    )
    .unwrap();

    let assets = YamlContext::new(env.path("tenant.yaml")).load().unwrap();
    assert_eq!(assets.connections.unwrap()[0].email_body(), Some("<p>inline</p>"));
}

#[test]
fn test_unknown_fields_survive_export() {
    let env = TestEnvironment::new().unwrap();
    let assets = Assets::from_json_value(json!({
        "connections": [{
            "name": "google",
            "strategy": "google-oauth2",
            "is_domain_connection": false,
            "options": { "scope": ["email", "profile"] }
        }],
        "rules": [{ "name": "enrich", "script": "./enrich.js" }]
    }))
    .unwrap();

    YamlContext::new(env.path("tenant.yaml")).dump(assets).unwrap();
    let yaml = env.read_file("tenant.yaml").unwrap();

    assert!(yaml.contains("is_domain_connection: false"));
    assert!(yaml.contains("scope:"));
    assert!(yaml.contains("enrich.js"));
}

#[test]
fn test_unusual_non_email_options_load_and_export() {
    let env = TestEnvironment::new().unwrap();
    env.write_file(
        "tenant.yaml",
        r#"
connections:
  - name: numeric
    strategy: samlp
    options:
      idpinitiated:
        client_id: 42
  - name: flag
    strategy: samlp
    options:
      idpinitiated: "on"
  - name: nulled
    strategy: samlp
    options:
      idpinitiated:
        client_id: null
        client_protocol: samlp
  - name: scalar
    strategy: waad
    options: not a mapping
"#,
    )
    .unwrap();

    let loaded = YamlContext::new(env.path("tenant.yaml")).load().unwrap();
    let connections = loaded.connections.clone().unwrap();
    assert_eq!(connections.len(), 4);
    assert!(connections.iter().all(|c| c.options.idp_client_id().is_none()));

    let copy = env.temp_dir.path().join("copy").join("tenant.yaml");
    YamlContext::new(&copy).dump(loaded).unwrap();
    let exported = serde_json::to_value(YamlContext::new(&copy).load().unwrap().connections)
        .unwrap();

    assert_eq!(exported[0]["options"]["idpinitiated"]["client_id"], json!(42));
    assert_eq!(exported[1]["options"]["idpinitiated"], json!("on"));
    assert_eq!(
        exported[2]["options"]["idpinitiated"],
        json!({ "client_id": null, "client_protocol": "samlp" })
    );
    assert_eq!(exported[3]["options"], json!("not a mapping"));
}

#[cfg(unix)]
#[test]
fn test_exported_files_are_not_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let env = TestEnvironment::new().unwrap();
    let reference = env.write_file("reference.txt", "x").unwrap();

    YamlContext::new(env.path("tenant.yaml")).dump(sample_assets()).unwrap();

    let mode = |path: &std::path::Path| std::fs::metadata(path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode(&env.path("tenant.yaml")), mode(&reference));
    assert_eq!(mode(&env.path("connections/my-conn.html")), mode(&reference));
}
