//! Test fixtures for tenant directories.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONNECTIONS_DIRECTORY, DEFAULT_TENANT_FILE};

/// A `tenant.yaml` plus the side files it references.
#[derive(Clone, Debug)]
pub struct TenantFixture {
    pub name: String,
    pub content: String,
    /// `(file name, content)` pairs placed in the connections directory.
    pub connection_files: Vec<(String, String)>,
}

impl TenantFixture {
    /// An email connection referencing a body file, a SAML connection with an
    /// idpinitiated client, and two clients.
    pub fn email_and_saml() -> Self {
        Self {
            name: "email_and_saml".to_string(),
            content: r#"
tenant:
  friendly_name: Test Tenant
clients:
  - name: Alpha
    client_id: id1
    app_type: spa
  - name: Beta
    client_id: id2
connections:
  - name: email
    strategy: email
    enabled_clients:
      - Beta
      - Alpha
    options:
      email:
        body: ./email.html
        from: noreply@example.com
        subject: Welcome
  - name: saml
    strategy: samlp
    enabled_clients:
      - Alpha
    options:
      signInEndpoint: https://idp.example.com/sso
      idpinitiated:
        client_id: Alpha
        client_protocol: samlp
"#
            .trim_start()
            .to_string(),
            connection_files: vec![(
                "email.html".to_string(),
                "<html><body><p>Your code is {{ code }}</p></body></html>".to_string(),
            )],
        }
    }

    /// A tenant without a connections key.
    pub fn no_connections() -> Self {
        Self {
            name: "no_connections".to_string(),
            content: "tenant:\n  friendly_name: Empty Tenant\n".to_string(),
            connection_files: Vec::new(),
        }
    }

    /// A tenant whose email connection has `options.email` of the wrong type.
    pub fn invalid_email_options() -> Self {
        Self {
            name: "invalid_email_options".to_string(),
            content: r#"
connections:
  - name: fine
    strategy: auth0
  - name: broken
    strategy: email
    options:
      email: "<p>not a mapping</p>"
"#
            .trim_start()
            .to_string(),
            connection_files: Vec::new(),
        }
    }

    /// Write `tenant.yaml` and the side files into `dir`.
    ///
    /// Returns the tenant file path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let tenant_file = dir.join(DEFAULT_TENANT_FILE);
        fs::create_dir_all(dir)?;
        fs::write(&tenant_file, &self.content)?;

        if !self.connection_files.is_empty() {
            let connections_dir = dir.join(CONNECTIONS_DIRECTORY);
            fs::create_dir_all(&connections_dir)?;
            for (file_name, content) in &self.connection_files {
                fs::write(connections_dir.join(file_name), content)?;
            }
        }

        Ok(tenant_file)
    }
}
