use crate::rules::types::{ExtensionRule, RuleTable, TextRule};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Return the extension of a file name as raw bytes: everything from the
/// last `.` on, dot included.
///
/// Unlike [`Path::extension`], a leading dot counts, so `.wxml` has the
/// extension `.wxml`. Names need not be valid UTF-8. Names without a dot have
/// no extension.
pub fn file_extension(path: &Path) -> Option<&[u8]> {
	let name = path.file_name()?.as_encoded_bytes();
	let idx = name.iter().rposition(|&b| b == b'.')?;
	Some(&name[idx..])
}

impl RuleTable {
	/// Find the first extension rule matching a file's extension.
	pub fn extension_rule_for(&self, path: &Path) -> Option<&ExtensionRule> {
		let extension = file_extension(path)?;
		self.extensions
			.iter()
			.find(|rule| rule.from.as_bytes() == extension)
	}

	/// All text rules that apply to a file, in table order.
	pub fn text_rules_for<'a>(
		&'a self,
		path: &Path,
	) -> impl Iterator<Item = &'a TextRule> + use<'a> {
		let extension = file_extension(path).map(<[u8]>::to_vec);
		self.text
			.iter()
			.filter(move |rule| extension.as_deref() == Some(rule.extension.as_bytes()))
	}
}

impl ExtensionRule {
	/// Compute the renamed path: strip `from` from the file name and append `to`.
	///
	/// Returns `None` if the file name does not end in `from`.
	pub fn renamed_path(&self, path: &Path) -> Option<PathBuf> {
		let name = path.file_name()?.as_encoded_bytes();
		let stem = name.strip_suffix(self.from.as_bytes())?;

		let mut new_name = stem.to_vec();
		new_name.extend_from_slice(self.to.as_bytes());
		Some(path.with_file_name(os_string_from_bytes(new_name)?))
	}
}

#[cfg(unix)]
fn os_string_from_bytes(bytes: Vec<u8>) -> Option<OsString> {
	use std::os::unix::ffi::OsStringExt;
	Some(OsString::from_vec(bytes))
}

// Without a byte-level OsString constructor, only UTF-8 names can be rebuilt.
#[cfg(not(unix))]
fn os_string_from_bytes(bytes: Vec<u8>) -> Option<OsString> {
	String::from_utf8(bytes).ok().map(OsString::from)
}
