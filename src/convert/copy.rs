use crate::convert::owner_writable;
use crate::error::{ConvertError, Result};
use std::fs::{self, File, Permissions};
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Counts from the copy phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
	/// Directories created or reused, the destination root included.
	pub directories: usize,

	/// Regular files copied.
	pub files: usize,

	/// Total bytes written.
	pub bytes: u64,
}

/// Replicate the tree under `source` into `destination`.
///
/// Directories are created before any of their contents, in lexical order.
/// Symbolic links are followed, so linked files and directories are copied as
/// regular entries. Special files (sockets, FIFOs, devices) are skipped. The
/// first failure aborts the copy and leaves whatever was already written.
pub fn copy_tree(source: &Path, destination: &Path) -> Result<CopyStats> {
	let mut stats = CopyStats::default();
	let walk_error = |err: walkdir::Error| ConvertError::Walk {
		root: source.to_path_buf(),
		source: err,
	};

	for entry in WalkDir::new(source).follow_links(true).sort_by_file_name() {
		let entry = entry.map_err(walk_error)?;
		let Ok(relative) = entry.path().strip_prefix(source) else {
			continue;
		};
		let target = if relative.as_os_str().is_empty() {
			destination.to_path_buf()
		} else {
			destination.join(relative)
		};

		let metadata = entry.metadata().map_err(walk_error)?;
		let file_type = entry.file_type();

		if file_type.is_dir() {
			create_dir(&target, &metadata.permissions())?;
			stats.directories += 1;
		} else if file_type.is_file() {
			stats.bytes += copy_file(entry.path(), &target, metadata.permissions())?;
			stats.files += 1;
			tracing::debug!(from = %entry.path().display(), to = %target.display(), "copied");
		} else {
			tracing::warn!(path = %entry.path().display(), "skipping special file");
		}
	}

	Ok(stats)
}

/// Create a directory (and any missing parents) with the given mode bits.
///
/// An existing directory is left as is. On Unix the mode is masked by the
/// process umask.
fn create_dir(path: &Path, permissions: &Permissions) -> Result<()> {
	let mut builder = fs::DirBuilder::new();
	builder.recursive(true);

	#[cfg(unix)]
	{
		use std::os::unix::fs::{DirBuilderExt, PermissionsExt};
		builder.mode(permissions.mode());
	}
	#[cfg(not(unix))]
	let _ = permissions;

	builder.create(path).map_err(|source| ConvertError::CreateDir {
		path: path.to_path_buf(),
		source,
	})
}

/// Copy one file's bytes, creating or truncating the target, then give the
/// target the source's permissions.
///
/// A read-only target left by an earlier run is made writable first.
fn copy_file(from: &Path, to: &Path, permissions: Permissions) -> Result<u64> {
	let copy_error = |source: io::Error| ConvertError::CopyFile {
		from: from.to_path_buf(),
		to: to.to_path_buf(),
		source,
	};

	if let Ok(existing) = fs::metadata(to)
		&& existing.is_file()
		&& let Some(writable) = owner_writable(&existing.permissions())
	{
		fs::set_permissions(to, writable).map_err(copy_error)?;
	}

	let mut reader = File::open(from).map_err(copy_error)?;
	let mut writer = File::create(to).map_err(copy_error)?;
	let bytes = io::copy(&mut reader, &mut writer).map_err(copy_error)?;
	writer.set_permissions(permissions).map_err(copy_error)?;

	Ok(bytes)
}
