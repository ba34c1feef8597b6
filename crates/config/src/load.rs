//! Config file loading.

use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::schema::AutojoinConfig;

/// Parses a configuration document.
pub fn parse_str(content: &str) -> Result<AutojoinConfig> {
	Ok(toml::from_str(content)?)
}

/// Reads and parses a configuration file.
pub fn load_file(path: &Path) -> Result<AutojoinConfig> {
	let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
		path: path.to_path_buf(),
		error,
	})?;
	let config = parse_str(&content)?;
	tracing::debug!(path = %path.display(), families = config.autojoin.len(), "Loaded autojoin config");
	Ok(config)
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn load_reads_file() {
		let mut file = tempfile::NamedTempFile::new().expect("temp file should be creatable");
		writeln!(file, "[settings]\nautojoin = false").expect("file should be writable");

		let config = load_file(file.path()).unwrap();
		assert!(!config.settings.autojoin);
		assert!(config.autojoin.is_empty());
	}

	#[test]
	fn load_reports_missing_file() {
		let dir = tempfile::tempdir().expect("temp dir should be creatable");
		let path = dir.path().join("autojoin.toml");

		let err = load_file(&path).unwrap_err();
		assert!(matches!(err, ConfigError::Io { path: ref p, .. } if p == &path));
	}

	#[test]
	fn parse_rejects_unknown_keys() {
		assert!(matches!(parse_str("[settings]\nautojoyn = true"), Err(ConfigError::Toml(_))));
	}
}
