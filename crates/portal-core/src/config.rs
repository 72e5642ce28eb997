//! App config files and portal settings
//!
//! App configs are stored as YAML (`.yaml`, `.yml`) or JSON (`.json`); the
//! format follows the file extension.

use std::path::{Path, PathBuf};

use portal_types::app_config::PortalAppConfig;

use crate::prelude::*;

pub const ENV_APP_CONFIG: &str = "PORTAL_APP_CONFIG";
pub const ENV_LOG: &str = "PORTAL_LOG";
pub const DEFAULT_APP_CONFIG_PATH: &str = "./authgear.yaml";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
	Yaml,
	Json,
}

impl ConfigFormat {
	pub fn from_path(path: &Path) -> PtResult<Self> {
		match path.extension().and_then(|e| e.to_str()) {
			Some("yaml" | "yml") => Ok(ConfigFormat::Yaml),
			Some("json") => Ok(ConfigFormat::Json),
			_ => Err(Error::ConfigError(format!(
				"unsupported config file extension: {}",
				path.display()
			))),
		}
	}
}

/// Process level settings of the portal tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalSettings {
	pub app_config_path: PathBuf,
	pub log_level: String,
}

impl Default for PortalSettings {
	fn default() -> Self {
		Self {
			app_config_path: PathBuf::from(DEFAULT_APP_CONFIG_PATH),
			log_level: DEFAULT_LOG_LEVEL.to_string(),
		}
	}
}

impl PortalSettings {
	pub fn from_env() -> Self {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Build settings from an arbitrary variable source
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let defaults = Self::default();
		Self {
			app_config_path: lookup(ENV_APP_CONFIG)
				.filter(|v| !v.is_empty())
				.map_or(defaults.app_config_path, PathBuf::from),
			log_level: lookup(ENV_LOG).filter(|v| !v.is_empty()).unwrap_or(defaults.log_level),
		}
	}

	/// Replace the values given on the command line
	pub fn with_overrides(self, app_config_path: Option<PathBuf>, log_level: Option<String>) -> Self {
		Self {
			app_config_path: app_config_path.unwrap_or(self.app_config_path),
			log_level: log_level.unwrap_or(self.log_level),
		}
	}
}

pub fn parse_app_config(content: &str, format: ConfigFormat) -> PtResult<PortalAppConfig> {
	Ok(match format {
		ConfigFormat::Yaml => serde_yaml::from_str(content)?,
		ConfigFormat::Json => serde_json::from_str(content)?,
	})
}

pub fn serialize_app_config(config: &PortalAppConfig, format: ConfigFormat) -> PtResult<String> {
	Ok(match format {
		ConfigFormat::Yaml => serde_yaml::to_string(config)?,
		ConfigFormat::Json => {
			let mut out = serde_json::to_string_pretty(config)?;
			out.push('\n');
			out
		}
	})
}

pub fn load_app_config(path: &Path) -> PtResult<PortalAppConfig> {
	let format = ConfigFormat::from_path(path)?;
	let content = std::fs::read_to_string(path)?;
	let config = parse_app_config(&content, format)?;
	info!(
		path = %path.display(),
		attributes = config.standard_attributes_access_control().len(),
		"Loaded app config"
	);
	Ok(config)
}

pub fn save_app_config(path: &Path, config: &PortalAppConfig) -> PtResult<()> {
	let format = ConfigFormat::from_path(path)?;
	let content = serialize_app_config(config, format)?;
	std::fs::write(path, content)?;
	info!(path = %path.display(), "Saved app config");
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	const YAML: &str = r"
id: myapp
authentication:
  identities: [login_id, oauth]
  primary_authenticators: [password]
user_profile:
  standard_attributes:
    access_control:
      - pointer: /email
        access_control:
          portal_ui: readwrite
          bearer: readonly
          end_user: readwrite
";

	#[test]
	fn test_format_from_path() {
		assert_eq!(ConfigFormat::from_path(Path::new("a.yaml")).unwrap(), ConfigFormat::Yaml);
		assert_eq!(ConfigFormat::from_path(Path::new("a.yml")).unwrap(), ConfigFormat::Yaml);
		assert_eq!(ConfigFormat::from_path(Path::new("a.json")).unwrap(), ConfigFormat::Json);
		assert!(ConfigFormat::from_path(Path::new("a.toml")).is_err());
	}

	#[test]
	fn test_yaml_file_roundtrip() -> PtResult<()> {
		let dir = tempfile::tempdir()?;
		let path = dir.path().join("authgear.yaml");
		std::fs::write(&path, YAML)?;

		let cfg = load_app_config(&path)?;
		assert_eq!(cfg.identities(), ["login_id", "oauth"]);
		assert_eq!(cfg.standard_attributes_access_control()[0].pointer, "/email");

		let json_path = dir.path().join("authgear.json");
		save_app_config(&json_path, &cfg)?;
		assert_eq!(load_app_config(&json_path)?, cfg);
		Ok(())
	}

	#[test]
	fn test_invalid_level_is_config_error() {
		let res = parse_app_config(
			"user_profile: {standard_attributes: {access_control: [{pointer: /email, access_control: {portal_ui: visible, bearer: hidden, end_user: hidden}}]}}",
			ConfigFormat::Yaml,
		);
		assert!(matches!(res, Err(Error::ConfigError(_))));
	}

	#[test]
	fn test_settings_from_lookup() {
		let settings = PortalSettings::from_lookup(|key| match key {
			ENV_APP_CONFIG => Some("/etc/authgear/authgear.yaml".to_string()),
			_ => None,
		});
		assert_eq!(settings.app_config_path, PathBuf::from("/etc/authgear/authgear.yaml"));
		assert_eq!(settings.log_level, DEFAULT_LOG_LEVEL);
	}

	#[test]
	fn test_settings_overrides() {
		let settings = PortalSettings::from_lookup(|key| match key {
			ENV_APP_CONFIG => Some("env.yaml".to_string()),
			ENV_LOG => Some("debug".to_string()),
			_ => None,
		});

		let kept = settings.clone().with_overrides(None, None);
		assert_eq!(kept, settings);

		let overridden = settings.with_overrides(Some(PathBuf::from("flag.json")), Some("warn".into()));
		assert_eq!(overridden.app_config_path, PathBuf::from("flag.json"));
		assert_eq!(overridden.log_level, "warn");
	}
}

// vim: ts=4
