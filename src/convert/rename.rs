use crate::convert::collect_files;
use crate::error::{ConvertError, Result};
use crate::rules::RuleTable;
use std::fs;
use std::path::Path;

/// Counts from the rename phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameStats {
	/// Files whose extension was rewritten.
	pub renamed: usize,
}

/// Rename every file under `root` whose extension matches an extension rule.
///
/// Only the first matching rule is used for each file. Directories are never
/// renamed. If two files end up with the same name, the platform's rename
/// semantics decide which one survives.
pub fn rename_files(root: &Path, rules: &RuleTable) -> Result<RenameStats> {
	let mut stats = RenameStats::default();

	for path in collect_files(root)? {
		let Some(new_path) = rules
			.extension_rule_for(&path)
			.and_then(|rule| rule.renamed_path(&path))
		else {
			continue;
		};

		fs::rename(&path, &new_path).map_err(|source| ConvertError::Rename {
			from: path.clone(),
			to: new_path.clone(),
			source,
		})?;

		tracing::debug!(from = %path.display(), to = %new_path.display(), "renamed");
		stats.renamed += 1;
	}

	Ok(stats)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rules::ExtensionRule;

	fn touch(root: &Path, relative: &str) {
		let path = root.join(relative);
		fs::create_dir_all(path.parent().unwrap()).unwrap();
		fs::write(path, relative).unwrap();
	}

	#[test]
	fn test_rename_default_extensions() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		touch(root, "pages/index/index.wxml");
		touch(root, "pages/index/index.wxss");
		touch(root, "pages/index/index.js");
		touch(root, "pages/index/index.json");

		let stats = rename_files(root, &RuleTable::default()).unwrap();

		assert_eq!(stats.renamed, 2);
		assert!(root.join("pages/index/index.ttml").exists());
		assert!(root.join("pages/index/index.ttss").exists());
		assert!(root.join("pages/index/index.js").exists());
		assert!(root.join("pages/index/index.json").exists());
		assert!(!root.join("pages/index/index.wxml").exists());
		assert!(!root.join("pages/index/index.wxss").exists());
	}

	#[test]
	fn test_rename_keeps_content() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		touch(root, "comp.wxml");

		rename_files(root, &RuleTable::default()).unwrap();

		assert_eq!(
			fs::read_to_string(root.join("comp.ttml")).unwrap(),
			"comp.wxml"
		);
	}

	#[test]
	fn test_rename_skips_directories() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		touch(root, "templates.wxml/item.js");

		let stats = rename_files(root, &RuleTable::default()).unwrap();

		assert_eq!(stats.renamed, 0);
		assert!(root.join("templates.wxml").is_dir());
	}

	#[test]
	fn test_rename_is_case_sensitive() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		touch(root, "Index.WXML");

		let stats = rename_files(root, &RuleTable::default()).unwrap();

		assert_eq!(stats.renamed, 0);
		assert!(root.join("Index.WXML").exists());
	}

	#[test]
	fn test_rename_does_not_chain_rules() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		touch(root, "a.wxml");
		let rules = RuleTable {
			extensions: vec![
				ExtensionRule::new(".wxml", ".ttml"),
				ExtensionRule::new(".ttml", ".swan"),
			],
			text: Vec::new(),
		};

		let stats = rename_files(root, &rules).unwrap();

		assert_eq!(stats.renamed, 1);
		assert!(root.join("a.ttml").exists());
		assert!(!root.join("a.swan").exists());
	}

	#[test]
	fn test_rename_empty_table_is_noop() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		touch(root, "a.wxml");

		let stats = rename_files(root, &RuleTable::empty()).unwrap();

		assert_eq!(stats, RenameStats::default());
		assert!(root.join("a.wxml").exists());
	}

	#[test]
	fn test_rename_onto_directory_fails() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		touch(root, "a.wxml");
		touch(root, "a.ttml/keep.js");

		match rename_files(root, &RuleTable::default()).unwrap_err() {
			ConvertError::Rename { from, to, .. } => {
				assert_eq!(from, root.join("a.wxml"));
				assert_eq!(to, root.join("a.ttml"));
			}
			other => panic!("Expected Rename error, got {other:?}"),
		}
		assert!(root.join("a.wxml").exists());
	}

	#[cfg(target_os = "linux")]
	#[test]
	fn test_rename_non_utf8_file_name() {
		use std::ffi::OsStr;
		use std::os::unix::ffi::OsStrExt;

		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		fs::write(root.join(OsStr::from_bytes(b"caf\xe9.wxml")), "<view/>").unwrap();

		let stats = rename_files(root, &RuleTable::default()).unwrap();

		assert_eq!(stats.renamed, 1);
		assert!(root.join(OsStr::from_bytes(b"caf\xe9.ttml")).exists());
		assert!(!root.join(OsStr::from_bytes(b"caf\xe9.wxml")).exists());
	}
}
