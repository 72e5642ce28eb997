//! Test fixtures

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

pub const APP_CONFIG_YAML: &str = r"id: myapp
http:
  public_origin: https://myapp.example.com
authentication:
  identities:
    - login_id
    - oauth
  primary_authenticators:
    - password
    - oob_otp
identity:
  login_id:
    keys:
      - key: email
        type: email
      - key: username
        type: username
user_profile:
  standard_attributes:
    population:
      strategy: on_signup
    access_control:
      - pointer: /name
        access_control:
          portal_ui: readwrite
          bearer: readonly
          end_user: readwrite
      - pointer: /x_custom
        access_control:
          portal_ui: readonly
          bearer: hidden
          end_user: hidden
      - pointer: /email
        access_control:
          portal_ui: readwrite
          bearer: readonly
          end_user: readwrite
      - pointer: /phone_number
        access_control:
          portal_ui: readwrite
          bearer: readonly
          end_user: readonly
";

/// Write the sample app config into a fresh temporary directory
pub fn write_app_config(file_name: &str, content: &str) -> (TempDir, PathBuf) {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join(file_name);
	std::fs::write(&path, content).unwrap();
	(dir, path)
}

pub fn sample_app_config() -> (TempDir, PathBuf) {
	write_app_config("authgear.yaml", APP_CONFIG_YAML)
}

// vim: ts=4
