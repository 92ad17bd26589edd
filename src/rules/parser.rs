use crate::error::{ConvertError, Result};
use crate::rules::types::RuleTable;

/// Parse a rule table from a TOML string.
///
/// Both lists are optional; a missing list is empty. The table is validated
/// before it is returned.
pub fn parse_rules_str(content: &str) -> Result<RuleTable> {
	let table: RuleTable =
		toml::from_str(content).map_err(|source| ConvertError::RulesParse { source })?;

	table.validate()?;

	Ok(table)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rules::types::{ExtensionRule, TextRule};

	#[test]
	fn test_parse_empty_table() {
		let table = parse_rules_str("").unwrap();
		assert!(table.extensions.is_empty());
		assert!(table.text.is_empty());
		assert_eq!(table, RuleTable::empty());
	}

	#[test]
	fn test_parse_array_of_tables() {
		let content = r#"
[[extensions]]
from = ".wxml"
to = ".ttml"

[[text]]
extension = ".ttml"
from = "wx:"
to = "tt:"

[[text]]
extension = ".js"
from = "wx."
to = "tt."
"#;
		let table = parse_rules_str(content).unwrap();

		assert_eq!(table.extensions, vec![ExtensionRule::new(".wxml", ".ttml")]);
		assert_eq!(
			table.text,
			vec![
				TextRule::new(".ttml", "wx:", "tt:"),
				TextRule::new(".js", "wx.", "tt."),
			]
		);
	}

	#[test]
	fn test_parse_inline_tables() {
		let content = r#"
extensions = [
    { from = ".wxml", to = ".swan" },
    { from = ".wxss", to = ".css" },
]
"#;
		let table = parse_rules_str(content).unwrap();

		assert_eq!(table.extensions.len(), 2);
		assert_eq!(table.extensions[1].to, ".css");
		assert!(table.text.is_empty());
	}

	#[test]
	fn test_unknown_field_rejected() {
		let content = r#"
[[extensions]]
from = ".wxml"
to = ".ttml"
regex = true
"#;
		let result = parse_rules_str(content);
		assert!(matches!(result, Err(ConvertError::RulesParse { .. })));
	}

	#[test]
	fn test_missing_field_rejected() {
		let content = r#"
[[text]]
extension = ".js"
from = "wx."
"#;
		assert!(parse_rules_str(content).is_err());
	}

	#[test]
	fn test_invalid_rule_rejected_after_parse() {
		let content = r#"
[[text]]
extension = ".js"
from = ""
to = "tt."
"#;
		match parse_rules_str(content).unwrap_err() {
			ConvertError::InvalidRule { reason } => assert!(reason.contains(".js")),
			other => panic!("Expected InvalidRule error, got {other:?}"),
		}
	}
}
