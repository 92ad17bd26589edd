//! Tree conversion for wx2tt.
//!
//! This module handles:
//! - Deriving the destination directory from the source directory
//! - Copying the source tree (copy phase)
//! - Renaming files by extension (rename phase)
//! - Rewriting file content with literal substitutions (rewrite phase)
//!
//! The phases must run in that order: renaming works on the copy, and the
//! text rules match the extensions produced by renaming.

pub mod copy;
pub mod rename;
pub mod rewrite;

pub use copy::{CopyStats, copy_tree};
pub use rename::{RenameStats, rename_files};
pub use rewrite::{RewriteStats, rewrite_files};

use crate::error::{ConvertError, Result};
use crate::rules::RuleTable;
use std::fs::{self, Permissions};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Suffix appended to the source directory name to form the destination.
pub const DESTINATION_SUFFIX: &str = "_tt";

/// Converts one source tree into a sibling destination tree.
#[derive(Debug, Clone)]
pub struct Converter {
	source: PathBuf,
	destination: PathBuf,
	rules: RuleTable,
}

/// Combined results of a full conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionReport {
	pub copy: CopyStats,
	pub rename: RenameStats,
	pub rewrite: RewriteStats,
}

impl Converter {
	/// Create a converter writing to `<parent>/<name>_tt`.
	///
	/// Fails if the source does not exist, is not a directory, or if the rule
	/// table is invalid.
	pub fn new(source: impl Into<PathBuf>, rules: RuleTable) -> Result<Self> {
		let source = source.into();
		check_source(&source)?;
		let destination = destination_for(&source)?;
		Self::build(source, destination, rules)
	}

	/// Create a converter with an explicit destination.
	pub fn with_destination(
		source: impl Into<PathBuf>,
		destination: impl Into<PathBuf>,
		rules: RuleTable,
	) -> Result<Self> {
		let source = source.into();
		check_source(&source)?;
		Self::build(source, destination.into(), rules)
	}

	fn build(source: PathBuf, destination: PathBuf, rules: RuleTable) -> Result<Self> {
		rules.validate()?;
		Ok(Converter {
			source,
			destination,
			rules,
		})
	}

	pub fn source(&self) -> &Path {
		&self.source
	}

	pub fn destination(&self) -> &Path {
		&self.destination
	}

	pub fn rules(&self) -> &RuleTable {
		&self.rules
	}

	/// Copy phase. Existing destination content is overwritten in place, not removed.
	pub fn copy_tree(&self) -> Result<CopyStats> {
		if self.destination.exists() {
			tracing::warn!(
				destination = %self.destination.display(),
				"destination already exists; files will be overwritten and stale files kept"
			);
		}
		copy_tree(&self.source, &self.destination)
	}

	/// Rename phase.
	pub fn rename_files(&self) -> Result<RenameStats> {
		rename_files(&self.destination, &self.rules)
	}

	/// Rewrite phase.
	pub fn rewrite_files(&self) -> Result<RewriteStats> {
		rewrite_files(&self.destination, &self.rules)
	}

	/// Run all three phases, stopping at the first error.
	///
	/// Completed phases are not rolled back on failure.
	pub fn run(&self) -> Result<ConversionReport> {
		let copy = self.copy_tree()?;
		let rename = self.rename_files()?;
		let rewrite = self.rewrite_files()?;

		Ok(ConversionReport {
			copy,
			rename,
			rewrite,
		})
	}
}

/// Compute the destination directory: a sibling of `source` whose name is
/// the source name with [`DESTINATION_SUFFIX`] appended.
///
/// Paths without a final name component (such as `.` or `proj/..`) are
/// canonicalized first.
pub fn destination_for(source: &Path) -> Result<PathBuf> {
	let invalid = || ConvertError::InvalidSource {
		path: source.to_path_buf(),
	};

	let resolved;
	let base = if source.file_name().is_some() {
		source
	} else {
		resolved = source.canonicalize().map_err(|_| invalid())?;
		resolved.as_path()
	};

	let mut name = base.file_name().ok_or_else(invalid)?.to_os_string();
	name.push(DESTINATION_SUFFIX);
	Ok(base.with_file_name(name))
}

fn check_source(source: &Path) -> Result<()> {
	let metadata = fs::metadata(source).map_err(|err| {
		if err.kind() == std::io::ErrorKind::NotFound {
			ConvertError::SourceNotFound {
				path: source.to_path_buf(),
			}
		} else {
			ConvertError::Metadata {
				path: source.to_path_buf(),
				source: err,
			}
		}
	})?;

	if !metadata.is_dir() {
		return Err(ConvertError::NotADirectory {
			path: source.to_path_buf(),
		});
	}

	Ok(())
}

/// Permissions that add owner write access, or `None` if the owner can
/// already write.
#[cfg(unix)]
fn owner_writable(permissions: &Permissions) -> Option<Permissions> {
	use std::os::unix::fs::PermissionsExt;

	let mode = permissions.mode();
	(mode & 0o200 == 0).then(|| Permissions::from_mode(mode | 0o200))
}

#[cfg(not(unix))]
fn owner_writable(permissions: &Permissions) -> Option<Permissions> {
	if !permissions.readonly() {
		return None;
	}
	let mut writable = permissions.clone();
	#[allow(clippy::permissions_set_readonly_false)]
	writable.set_readonly(false);
	Some(writable)
}

/// Collect every regular file under `root`, in lexical walk order.
///
/// The list is gathered up front so a phase that renames files never
/// revisits its own output.
fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in WalkDir::new(root).sort_by_file_name() {
		let entry = entry.map_err(|source| ConvertError::Walk {
			root: root.to_path_buf(),
			source,
		})?;
		if entry.file_type().is_file() {
			files.push(entry.into_path());
		}
	}

	Ok(files)
}
