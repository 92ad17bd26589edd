use std::path::PathBuf;

/// Library-level structured errors for wx2tt.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` to name the failing phase.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
	#[error("Source directory does not exist: {path}")]
	SourceNotFound { path: PathBuf },

	#[error("Source path is not a directory: {path}")]
	NotADirectory { path: PathBuf },

	#[error("Failed to inspect source path: {path}")]
	Metadata {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Cannot derive a destination name from source path: {path}")]
	InvalidSource { path: PathBuf },

	#[error("Failed to walk directory tree: {root}")]
	Walk {
		root: PathBuf,
		#[source]
		source: walkdir::Error,
	},

	#[error("Failed to create directory: {path}")]
	CreateDir {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to copy {from} to {to}")]
	CopyFile {
		from: PathBuf,
		to: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to rename {from} to {to}")]
	Rename {
		from: PathBuf,
		to: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read file: {path}")]
	ReadFile {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write file: {path}")]
	WriteFile {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Invalid rule: {reason}")]
	InvalidRule { reason: String },

	#[error("Failed to parse rule table")]
	RulesParse {
		#[source]
		source: toml::de::Error,
	},
}

/// Result type alias using ConvertError.
pub type Result<T> = std::result::Result<T, ConvertError>;
