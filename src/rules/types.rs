use crate::error::{ConvertError, Result};
use serde::Deserialize;

/// The full set of conversion rules applied to a destination tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleTable {
	/// Extension renames. First matching rule wins.
	#[serde(default)]
	pub extensions: Vec<ExtensionRule>,

	/// Literal substitutions, applied in order to every file whose
	/// extension matches.
	#[serde(default)]
	pub text: Vec<TextRule>,
}

/// Rename files ending in `from` so they end in `to` instead.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtensionRule {
	/// Extension to match, dot included (e.g. `.wxml`).
	pub from: String,

	/// Replacement extension, dot included.
	pub to: String,
}

/// Replace every occurrence of `from` with `to` in files ending in `extension`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextRule {
	/// Extension of the files this rule applies to, after renaming.
	pub extension: String,

	/// Literal to search for. Never empty.
	pub from: String,

	/// Literal inserted in its place.
	pub to: String,
}

impl ExtensionRule {
	pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
		ExtensionRule {
			from: from.into(),
			to: to.into(),
		}
	}

	/// Validate both extensions.
	pub fn validate(&self) -> Result<()> {
		validate_extension(&self.from)?;
		validate_extension(&self.to)
	}
}

impl TextRule {
	pub fn new(
		extension: impl Into<String>,
		from: impl Into<String>,
		to: impl Into<String>,
	) -> Self {
		TextRule {
			extension: extension.into(),
			from: from.into(),
			to: to.into(),
		}
	}

	/// Validate the extension and reject an empty search literal.
	pub fn validate(&self) -> Result<()> {
		validate_extension(&self.extension)?;

		if self.from.is_empty() {
			return Err(ConvertError::InvalidRule {
				reason: format!(
					"text rule for '{}' has an empty search literal",
					self.extension
				),
			});
		}

		Ok(())
	}
}

impl RuleTable {
	/// An empty table. Converting with it only copies the tree.
	pub fn empty() -> Self {
		RuleTable {
			extensions: Vec::new(),
			text: Vec::new(),
		}
	}

	/// Validate every rule in the table.
	pub fn validate(&self) -> Result<()> {
		for rule in &self.extensions {
			rule.validate()?;
		}
		for rule in &self.text {
			rule.validate()?;
		}
		Ok(())
	}
}

impl Default for RuleTable {
	/// WeChat to ByteDance mini-program rules.
	fn default() -> Self {
		RuleTable {
			extensions: vec![
				ExtensionRule::new(".wxml", ".ttml"),
				ExtensionRule::new(".wxss", ".ttss"),
			],
			text: vec![
				TextRule::new(".ttml", "wx:", "tt:"),
				TextRule::new(".ttss", ".wxss", ".ttss"),
				TextRule::new(".js", "wx.", "tt."),
				TextRule::new(".ttml", ".wxml", ".ttml"),
				TextRule::new(".ts", "wx.", "tt."),
			],
		}
	}
}

fn validate_extension(extension: &str) -> Result<()> {
	if !extension.starts_with('.') || extension.len() < 2 {
		return Err(ConvertError::InvalidRule {
			reason: format!("extension '{extension}' must be a dot followed by a suffix"),
		});
	}

	// Anything after the last dot is the extension, so a second dot can never match.
	if extension[1..].contains(['.', '/', '\\']) {
		return Err(ConvertError::InvalidRule {
			reason: format!(
				"extension '{extension}' must not contain another '.' or a path separator"
			),
		});
	}

	Ok(())
}
