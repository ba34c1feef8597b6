//! Error types for configuration loading.

use std::path::PathBuf;

use gridjoin_autojoin::{DuplicateMembershipError, ListError};
use thiserror::Error;

/// Errors that can occur when loading autojoin configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or schema.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A family does not have exactly sixteen slots.
	#[error("autojoin family '{family}' has {found} slots (expected 16)")]
	SlotCount { family: String, found: usize },

	/// A slot names an archetype the archetype set does not know.
	#[error("autojoin family '{family}' references unknown archetype '{name}'")]
	UnknownArchetype { family: String, name: String },

	/// A family's slots are inconsistent.
	#[error("autojoin family '{family}': {error}")]
	List { family: String, error: ListError },

	/// An archetype belongs to two families.
	#[error("autojoin family '{family}': archetype '{name}' contained in more than one autojoin list")]
	Membership {
		family: String,
		/// Name of the shared archetype.
		name: String,
		error: DuplicateMembershipError,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
