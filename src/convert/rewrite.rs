use crate::convert::{collect_files, owner_writable};
use crate::error::{ConvertError, Result};
use crate::rules::{RuleTable, rewrite_content};
use std::fs;
use std::path::Path;

/// Counts from the rewrite phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
	/// Files with at least one matching text rule.
	pub scanned: usize,

	/// Files whose content changed and was written back.
	pub rewritten: usize,
}

/// Apply the text rules to every matching file under `root`.
///
/// Each file is read once, all of its rules are applied in table order, and
/// the result is written back only if it differs. The file keeps its
/// permissions; read-only files get owner write access for the duration of
/// the write.
pub fn rewrite_files(root: &Path, rules: &RuleTable) -> Result<RewriteStats> {
	let mut stats = RewriteStats::default();

	for path in collect_files(root)? {
		let mut matching = rules.text_rules_for(&path).peekable();
		if matching.peek().is_none() {
			continue;
		}
		stats.scanned += 1;

		let content = fs::read(&path).map_err(|source| ConvertError::ReadFile {
			path: path.clone(),
			source,
		})?;

		let rewritten = rewrite_content(&content, matching);
		if rewritten == content {
			continue;
		}

		write_in_place(&path, &rewritten)?;

		tracing::debug!(path = %path.display(), "rewrote");
		stats.rewritten += 1;
	}

	Ok(stats)
}

/// Overwrite an existing file, restoring its permissions afterwards.
fn write_in_place(path: &Path, content: &[u8]) -> Result<()> {
	let write_error = |source: std::io::Error| ConvertError::WriteFile {
		path: path.to_path_buf(),
		source,
	};

	let original = fs::metadata(path).map_err(write_error)?.permissions();
	let unlocked = owner_writable(&original);
	if let Some(writable) = &unlocked {
		fs::set_permissions(path, writable.clone()).map_err(write_error)?;
	}

	fs::write(path, content).map_err(write_error)?;

	if unlocked.is_some() {
		fs::set_permissions(path, original).map_err(write_error)?;
	}

	Ok(())
}
