use crate::rules::types::TextRule;

impl TextRule {
	/// Apply this rule to file content.
	///
	/// Content is handled as raw bytes so files that are not valid UTF-8 pass
	/// through untouched apart from the replaced literals.
	pub fn apply(&self, content: &[u8]) -> Vec<u8> {
		replace_literal(content, self.from.as_bytes(), self.to.as_bytes())
	}
}

/// Apply rules in order, each to the output of the previous one.
pub fn rewrite_content<'a>(
	content: &[u8],
	rules: impl IntoIterator<Item = &'a TextRule>,
) -> Vec<u8> {
	rules
		.into_iter()
		.fold(content.to_vec(), |current, rule| rule.apply(&current))
}

/// Replace every non-overlapping occurrence of `needle`, scanning left to right.
///
/// Inserted text is never rescanned. An empty needle leaves the input as is.
pub fn replace_literal(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
	if needle.is_empty() || haystack.len() < needle.len() {
		return haystack.to_vec();
	}

	let mut out = Vec::with_capacity(haystack.len());
	let mut pos = 0;

	while pos + needle.len() <= haystack.len() {
		if haystack[pos..].starts_with(needle) {
			out.extend_from_slice(replacement);
			pos += needle.len();
		} else {
			out.push(haystack[pos]);
			pos += 1;
		}
	}

	out.extend_from_slice(&haystack[pos..]);
	out
}
